//! Precedence levels.
//!
//! Every fragment carries the loosest operator that binds its top level. When a
//! fragment is embedded in a position that requires a tighter binding, it is
//! wrapped in a non-capturing group first (see `Expression::parenthesize`).

/// Precedence rank of an expression, ordered from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// `a|b`
    Alternation = 1,
    /// `ab`
    Concatenation = 2,
    /// `a*`, `a+`, `a?`, `a{m,n}`
    Postfix = 3,
    /// Atoms, classes and any explicit group.
    Grouped = 4,
}

impl Level {
    /// True when a fragment at this level can sit in a `required` position
    /// without extra grouping.
    pub fn satisfies(self, required: Level) -> bool {
        self >= required
    }
}
