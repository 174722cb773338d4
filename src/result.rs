//! Match results.
//!
//! A `MatchResult` only exists for a successful match; a failed match is
//! `None`. Named lookups go through the originating expression's
//! `CaptureNames`: the name at index `i` reads engine slot `i + 1` (slot 0 is
//! the whole match).

use crate::expression::Expression;
use regex::Captures;
use std::ops::Range;

/// Outcome of looking up a capture by name.
///
/// The three cases stay distinct so callers can tell a typo in a capture name
/// from an optional group that did not take part in the match, and both from a
/// group that matched the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture<'h> {
    /// The expression has no capture with that name.
    UnknownName,
    /// The capture exists but its group did not participate in the match.
    Unmatched,
    /// The capture matched this text (possibly empty).
    Matched(&'h str),
}

impl<'h> Capture<'h> {
    /// The matched text, if any.
    pub fn text(self) -> Option<&'h str> {
        match self {
            Capture::Matched(text) => Some(text),
            Capture::UnknownName | Capture::Unmatched => None,
        }
    }

    pub fn is_matched(self) -> bool {
        matches!(self, Capture::Matched(_))
    }
}

/// A successful match together with the expression that produced it.
#[derive(Debug)]
pub struct MatchResult<'h, 'e> {
    captures: Captures<'h>,
    expression: &'e Expression,
}

impl<'h, 'e> MatchResult<'h, 'e> {
    pub(crate) fn new(captures: Captures<'h>, expression: &'e Expression) -> Self {
        MatchResult { captures, expression }
    }

    /// The whole matched substring.
    pub fn whole_match(&self) -> &'h str {
        // Slot 0 always participates in a successful match.
        self.captures.get(0).map_or("", |m| m.as_str())
    }

    /// Byte range of the whole match in the haystack.
    pub fn whole_range(&self) -> Range<usize> {
        self.captures.get(0).map_or(0..0, |m| m.range())
    }

    /// Look up the capture called `name`.
    pub fn data(&self, name: &str) -> Capture<'h> {
        let Some(index) = self.expression.capture_names().position(name) else {
            return Capture::UnknownName;
        };
        match self.captures.get(index + 1) {
            Some(m) => Capture::Matched(m.as_str()),
            None => Capture::Unmatched,
        }
    }

    /// `data(name)` when a name is given, the whole match otherwise.
    pub fn data_or_whole(&self, name: Option<&str>) -> Capture<'h> {
        match name {
            Some(name) => self.data(name),
            None => Capture::Matched(self.whole_match()),
        }
    }

    /// Text of the capture called `name`, if it matched.
    pub fn get(&self, name: &str) -> Option<&'h str> {
        self.data(name).text()
    }

    /// Byte range of the capture called `name`, if it matched.
    pub fn range(&self, name: &str) -> Option<Range<usize>> {
        let index = self.expression.capture_names().position(name)?;
        self.captures.get(index + 1).map(|m| m.range())
    }

    /// Number of capture names (not counting the whole match).
    pub fn len(&self) -> usize {
        self.expression.capture_names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every capture name paired with its outcome, in group order.
    ///
    /// Duplicate names are reported per group, so a repeated name can yield
    /// different outcomes here than through [`MatchResult::data`], which always
    /// reads the first group with that name.
    pub fn iter(&self) -> impl Iterator<Item = (&'e str, Capture<'h>)> + '_ {
        self.expression.capture_names().iter().enumerate().map(move |(i, name)| {
            let capture = match self.captures.get(i + 1) {
                Some(m) => Capture::Matched(m.as_str()),
                None => Capture::Unmatched,
            };
            (name, capture)
        })
    }

    /// The expression that produced this match.
    pub fn expression(&self) -> &'e Expression {
        self.expression
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants, re};

    #[test]
    fn data_distinguishes_unknown_unmatched_and_empty() {
        let expr = re("a").capture("a").optional().concat(&re("b").capture("b")).concat(&re("").capture("empty"));
        let m = expr.matches("b").unwrap().unwrap();

        assert_eq!(m.data("missing"), Capture::UnknownName);
        assert_eq!(m.data("a"), Capture::Unmatched);
        assert_eq!(m.data("b"), Capture::Matched("b"));
        assert_eq!(m.data("empty"), Capture::Matched(""));
        assert_eq!(m.get("a"), None);
        assert_eq!(m.get("empty"), Some(""));
    }

    #[test]
    fn data_or_whole_without_name_returns_whole_match() {
        let expr = constants::digits().capture("n");
        let m = expr.matches("abc123def").unwrap().unwrap();
        assert_eq!(m.data_or_whole(None), Capture::Matched("123"));
        assert_eq!(m.data_or_whole(Some("n")), Capture::Matched("123"));
        assert_eq!(m.whole_range(), 3..6);
    }

    #[test]
    fn range_and_iter_follow_group_order() {
        let expr = constants::word().capture("k").concat(&re(":")).concat(&constants::digits().capture("v"));
        let m = expr.matches("x key:12").unwrap().unwrap();

        assert_eq!(m.range("k"), Some(2..5));
        assert_eq!(m.range("v"), Some(6..8));
        assert_eq!(m.range("nope"), None);
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());

        let pairs: Vec<_> = m.iter().collect();
        assert_eq!(pairs, vec![("k", Capture::Matched("key")), ("v", Capture::Matched("12"))]);
    }

    #[test]
    fn capture_helpers() {
        assert_eq!(Capture::Matched("x").text(), Some("x"));
        assert!(Capture::Matched("").is_matched());
        assert!(!Capture::Unmatched.is_matched());
        assert_eq!(Capture::UnknownName.text(), None);
    }
}
