//! Capture-name bookkeeping.
//!
//! The `regex` crate numbers capturing groups by the position of their opening
//! parenthesis. `CaptureNames` mirrors that numbering: entry `i` names group
//! `i + 1` of the compiled pattern.
//!
//! ## Invariants
//!
//! - Combining two fragments side by side appends the right-hand names after
//!   the left-hand ones.
//! - Wrapping a fragment in a new capturing group puts the new name in front,
//!   since its opening parenthesis precedes every group inside it.

use std::sync::Arc;

/// Ordered capture identifiers of an expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CaptureNames {
    names: Vec<Arc<str>>,
}

impl CaptureNames {
    pub fn empty() -> Self {
        CaptureNames { names: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Index of the first capture called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.as_ref() == name)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(|n| n.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_ref())
    }

    /// Names of `self` followed by names of `other`.
    pub(crate) fn followed_by(&self, other: &CaptureNames) -> CaptureNames {
        let mut names = Vec::with_capacity(self.names.len() + other.names.len());
        names.extend(self.names.iter().cloned());
        names.extend(other.names.iter().cloned());
        CaptureNames { names }
    }

    /// `name` followed by the names of `self`.
    pub(crate) fn enclosed_by(&self, name: &str) -> CaptureNames {
        let mut names = Vec::with_capacity(self.names.len() + 1);
        names.push(Arc::from(name));
        names.extend(self.names.iter().cloned());
        CaptureNames { names }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn followed_by_keeps_left_to_right_order() {
        let left = CaptureNames::empty().enclosed_by("a");
        let right = CaptureNames::empty().enclosed_by("b");
        let both = left.followed_by(&right);
        assert_eq!(both.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn enclosed_by_prepends_the_outer_name() {
        let inner = CaptureNames::empty().enclosed_by("x").followed_by(&CaptureNames::empty().enclosed_by("y"));
        let outer = inner.enclosed_by("outer");
        assert_eq!(outer.iter().collect::<Vec<_>>(), vec!["outer", "x", "y"]);
        assert_eq!(outer.position("y"), Some(2));
        assert_eq!(outer.position("missing"), None);
    }

    #[test]
    fn position_finds_first_duplicate() {
        let names = CaptureNames::empty().enclosed_by("n").followed_by(&CaptureNames::empty().enclosed_by("n"));
        assert_eq!(names.len(), 2);
        assert_eq!(names.position("n"), Some(0));
    }
}
