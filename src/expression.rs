//! Composable expressions.
//!
//! An `Expression` is an immutable pattern fragment plus the metadata needed to
//! compose it safely with other fragments:
//!
//! ```text
//!  text    engine-native syntax        "(?:a|b)+"
//!  level   loosest top-level operator  Postfix
//!  flags   match modifiers             IGNORE_CASE | MULTILINE
//!  names   capture names, in engine    ["key", "value"]
//!          group-number order
//! ```
//!
//! ## How composition stays correct
//!
//! - **Precedence**: every combinator embeds its operands through
//!   `parenthesize`, which wraps an operand in `(?:...)` only when the operand
//!   binds looser than its new position requires.
//! - **Captures**: every expression is created through `Expression::from_parts`,
//!   which takes text and names together. Combinators that introduce a group
//!   update `names` in the same step as they emit the parenthesis.
//! - **Flags**: unioned on composition and rendered once for the whole pattern.
//!
//! ## Compilation
//!
//! Nothing compiles until the expression is used. The first call to
//! [`Expression::regex`] (directly or through a match) builds the regex and
//! stores it in a per-instance `OnceCell`; later calls reuse it.
//!
//! Submodules:
//!
//! - `level.rs`: the `Level` precedence enum.
//! - `flags.rs`: the `Flags` bitset.
//! - `captures.rs`: `CaptureNames`.
//! - `escape.rs`: literal and class escaping.
//! - `compile.rs`: `CompileOptions` and the regex build step.

#[path = "expression/captures.rs"]
mod captures;
#[path = "expression/compile.rs"]
mod compile;
#[path = "expression/escape.rs"]
mod escape;
#[path = "expression/flags.rs"]
mod flags;
#[path = "expression/level.rs"]
mod level;

pub use captures::CaptureNames;
pub use compile::CompileOptions;
pub use flags::Flags;
pub use level::Level;

use crate::error::Result;
use crate::result::MatchResult;
use once_cell::sync::OnceCell;
use regex::Regex;
use std::fmt;

// --- Anchor fragments ----------------------------------------------------------

pub(crate) const BOL: &str = "(?m:^)";
pub(crate) const EOL: &str = "(?m:$)";
pub(crate) const BEGIN: &str = r"\A";
/// End of input, allowing one trailing newline (`regex` has no `\Z`).
pub(crate) const END: &str = r"\n?\z";
pub(crate) const VERY_END: &str = r"\z";

// --- Expression ----------------------------------------------------------------

/// An immutable, composable regular-expression fragment.
///
/// # Example
/// ```
/// use rexpr::{constants, re};
///
/// let key = constants::word().capture("key");
/// let value = constants::digits().capture("value");
/// let pair = key.concat(&re("=")).concat(&value).all();
///
/// let m = pair.matches("width=42").unwrap().unwrap();
/// assert_eq!(m.get("key"), Some("width"));
/// assert_eq!(m.get("value"), Some("42"));
/// ```
#[derive(Clone)]
pub struct Expression {
    text: String,
    level: Level,
    flags: Flags,
    names: CaptureNames,
    compiled: OnceCell<Regex>,
}

impl Expression {
    /// The single constructor. Text and capture names always travel together.
    fn from_parts(text: String, level: Level, flags: Flags, names: CaptureNames) -> Self {
        Expression { text, level, flags, names, compiled: OnceCell::new() }
    }

    /// Build an expression from already-valid engine syntax.
    ///
    /// The fragment is treated as an atom (`Level::Grouped`) with no flags and
    /// no captures. The caller must make sure `text` binds as tightly as an
    /// atom and contains no capturing groups; a capturing group is reported as
    /// [`Error::CaptureCountMismatch`](crate::Error::CaptureCountMismatch) on
    /// first compile.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::from_parts(text.into(), Level::Grouped, Flags::empty(), CaptureNames::empty())
    }

    /// Match `text` literally; every metacharacter is escaped.
    pub fn literal(text: &str) -> Self {
        Self::from_parts(escape::literal(text), Level::Concatenation, Flags::empty(), CaptureNames::empty())
    }

    /// A character class unioning every argument, in order.
    ///
    /// Each argument is either a three-character range such as `"a-z"`, passed
    /// through as-is, or a set of characters, each of which is escaped. With no
    /// arguments this is the shared single-character constant (`.`).
    ///
    /// # Errors
    ///
    /// Construction never fails, but an argument list whose members are all
    /// empty strings renders as `[]`, which the engine rejects with
    /// [`Error::InvalidPattern`](crate::Error::InvalidPattern) on first use.
    pub fn any<S: AsRef<str>>(chars: &[S]) -> Self {
        if chars.is_empty() {
            return crate::constants::any();
        }
        let members: String = chars
            .iter()
            .map(|c| {
                let c = c.as_ref();
                if escape::is_range(c) { c.to_string() } else { escape::class(c) }
            })
            .collect();
        Self::raw(format!("[{members}]"))
    }

    /// A negated class matching any single character not in `chars`.
    ///
    /// # Errors
    ///
    /// Construction never fails, but `none_of("")` renders as `[^]`, which the
    /// engine rejects with [`Error::InvalidPattern`](crate::Error::InvalidPattern)
    /// on first use.
    pub fn none_of(chars: &str) -> Self {
        Self::raw(format!("[^{}]", escape::class(chars)))
    }

    // --- Accessors ---------------------------------------------------------------

    /// Engine-native text of this fragment, without flags.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Capture names in engine group order.
    pub fn capture_names(&self) -> &CaptureNames {
        &self.names
    }

    pub fn is_multiline(&self) -> bool {
        self.flags.contains(Flags::MULTILINE)
    }

    pub fn is_ignore_case(&self) -> bool {
        self.flags.contains(Flags::IGNORE_CASE)
    }

    /// The full pattern handed to the engine: `text` wrapped in an inline flag
    /// group when any flag is set.
    pub fn source(&self) -> String {
        if self.flags.is_empty() { self.text.clone() } else { format!("(?{}:{})", self.flags.inline(), self.text) }
    }

    /// Text of `self`, grouped if it binds looser than `required`.
    fn parenthesize(&self, required: Level) -> String {
        if self.level.satisfies(required) { self.text.clone() } else { format!("(?:{})", self.text) }
    }

    // --- Binary combinators --------------------------------------------------------

    /// `self` followed by `other`.
    pub fn concat(&self, other: &Expression) -> Expression {
        Self::from_parts(
            format!("{}{}", self.parenthesize(Level::Concatenation), other.parenthesize(Level::Concatenation)),
            Level::Concatenation,
            self.flags | other.flags,
            self.names.followed_by(&other.names),
        )
    }

    /// Either `self` or `other`.
    pub fn alternate(&self, other: &Expression) -> Expression {
        Self::from_parts(
            format!("{}|{}", self.parenthesize(Level::Alternation), other.parenthesize(Level::Alternation)),
            Level::Alternation,
            self.flags | other.flags,
            self.names.followed_by(&other.names),
        )
    }

    // --- Repetition ------------------------------------------------------------------

    fn postfix(&self, suffix: &str) -> Expression {
        // A quantifier directly after another one would read as a lazy or
        // possessive modifier (`a+?`), so stacked quantifiers get a group. The
        // text check catches quantified fragments whose level a flag reset.
        let operand = if self.level == Level::Postfix || escape::ends_with_quantifier(&self.text) {
            format!("(?:{})", self.text)
        } else {
            self.parenthesize(Level::Postfix)
        };
        Self::from_parts(
            format!("{operand}{suffix}"),
            Level::Postfix,
            self.flags,
            self.names.clone(),
        )
    }

    /// Zero or one.
    pub fn optional(&self) -> Expression {
        self.postfix("?")
    }

    /// Zero or more.
    pub fn many(&self) -> Expression {
        self.postfix("*")
    }

    pub fn one_or_more(&self) -> Expression {
        self.postfix("+")
    }

    /// Exactly `min` times, or between `min` and `max` times.
    ///
    /// # Panics
    ///
    /// Panics when `max` is less than `min`.
    pub fn repeat(&self, min: usize, max: Option<usize>) -> Expression {
        match max {
            Some(max) => {
                assert!(min <= max, "repeat: min ({min}) must not exceed max ({max})");
                self.postfix(&format!("{{{min},{max}}}"))
            }
            None => self.postfix(&format!("{{{min}}}")),
        }
    }

    pub fn at_least(&self, min: usize) -> Expression {
        self.postfix(&format!("{{{min},}}"))
    }

    pub fn at_most(&self, max: usize) -> Expression {
        self.postfix(&format!("{{0,{max}}}"))
    }

    // --- Anchors ----------------------------------------------------------------------

    fn anchored(&self, prefix: &str, suffix: &str) -> Expression {
        Self::from_parts(
            format!("{prefix}{}{suffix}", self.parenthesize(Level::Concatenation)),
            Level::Concatenation,
            self.flags,
            self.names.clone(),
        )
    }

    /// Anchor at the beginning of a line.
    pub fn bol(&self) -> Expression {
        self.anchored(BOL, "")
    }

    /// Anchor at the end of a line.
    pub fn eol(&self) -> Expression {
        self.anchored("", EOL)
    }

    /// Match one whole line.
    pub fn line(&self) -> Expression {
        self.bol().eol()
    }

    /// Anchor at the absolute start of the input.
    pub fn begin(&self) -> Expression {
        self.anchored(BEGIN, "")
    }

    /// Anchor at the end of the input, tolerating one trailing newline.
    ///
    /// The engine has no `\Z`, so this emits `\n?\z`: a tolerated newline is
    /// consumed and shows up in [`MatchResult::whole_match`], though not in any
    /// capture inside `self`.
    pub fn end(&self) -> Expression {
        self.anchored("", END)
    }

    /// Anchor at the absolute end of the input.
    pub fn very_end(&self) -> Expression {
        self.anchored("", VERY_END)
    }

    /// Match the entire input, with no slack.
    pub fn all(&self) -> Expression {
        self.begin().very_end()
    }

    /// Match the entire input, tolerating one trailing newline.
    ///
    /// As with [`Expression::end`], the tolerated newline is part of
    /// [`MatchResult::whole_match`].
    pub fn almost_all(&self) -> Expression {
        self.begin().end()
    }

    // --- Groups and flags ------------------------------------------------------------

    /// Wrap in a non-capturing group.
    pub fn group(&self) -> Expression {
        Self::from_parts(format!("(?:{})", self.text), Level::Grouped, self.flags, self.names.clone())
    }

    /// Wrap in a capturing group called `name`.
    pub fn capture(&self, name: &str) -> Expression {
        Self::from_parts(format!("({})", self.text), Level::Grouped, self.flags, self.names.enclosed_by(name))
    }

    fn with_flag(&self, flag: Flags) -> Expression {
        // Flags change without any new wrapping, but the level still resets.
        Self::from_parts(self.text.clone(), Level::Grouped, self.flags | flag, self.names.clone())
    }

    /// `^` and `$` match at line boundaries throughout the pattern.
    ///
    /// Only `^`/`$` written inside [`Expression::raw`] fragments are affected:
    /// [`Expression::bol`] and [`Expression::eol`] are line-based already, and
    /// `.` still does not match a newline.
    pub fn multiline(&self) -> Expression {
        self.with_flag(Flags::MULTILINE)
    }

    pub fn ignore_case(&self) -> Expression {
        self.with_flag(Flags::IGNORE_CASE)
    }

    // --- Compilation and matching ----------------------------------------------------

    /// The compiled regex, built on first use and cached for this instance.
    pub fn regex(&self) -> Result<&Regex> {
        self.compiled.get_or_try_init(|| compile::build(&self.source(), self.names.len(), &CompileOptions::default()))
    }

    /// Build a fresh regex with explicit options. The cache is not touched.
    pub fn compile_with(&self, options: &CompileOptions) -> Result<Regex> {
        compile::build(&self.source(), self.names.len(), options)
    }

    /// The compiled pattern's canonical text.
    pub fn as_text(&self) -> Result<&str> {
        Ok(self.regex()?.as_str())
    }

    /// Search `haystack` for the leftmost match.
    ///
    /// Returns `Ok(None)` when nothing matches, and an error only when the
    /// pattern itself fails to compile.
    pub fn matches<'h>(&self, haystack: &'h str) -> Result<Option<MatchResult<'h, '_>>> {
        let regex = self.regex()?;
        tracing::trace!(pattern = regex.as_str(), len = haystack.len(), "match attempt");
        Ok(regex.captures(haystack).map(|caps| MatchResult::new(caps, self)))
    }

    pub fn is_match(&self, haystack: &str) -> Result<bool> {
        Ok(self.regex()?.is_match(haystack))
    }

    /// Every non-overlapping match in `haystack`, left to right.
    pub fn find_all<'h, 'e>(&'e self, haystack: &'h str) -> Result<impl Iterator<Item = MatchResult<'h, 'e>>> {
        let regex = self.regex()?;
        Ok(regex.captures_iter(haystack).map(move |caps| MatchResult::new(caps, self)))
    }
}

// --- Trait impls -------------------------------------------------------------------

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.level == other.level && self.flags == other.flags && self.names == other.names
    }
}

impl Eq for Expression {}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
            .field("text", &self.text)
            .field("level", &self.level)
            .field("flags", &self.flags)
            .field("names", &self.names)
            .field("compiled", &self.compiled.get().is_some())
            .finish()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source())
    }
}

impl std::ops::Add for &Expression {
    type Output = Expression;

    fn add(self, rhs: Self) -> Expression {
        self.concat(rhs)
    }
}

impl std::ops::Add for Expression {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        self.concat(&rhs)
    }
}

impl std::ops::BitOr for &Expression {
    type Output = Expression;

    fn bitor(self, rhs: Self) -> Expression {
        self.alternate(rhs)
    }
}

impl std::ops::BitOr for Expression {
    type Output = Expression;

    fn bitor(self, rhs: Expression) -> Expression {
        self.alternate(&rhs)
    }
}
