//! Compilation of expressions into `regex::Regex`.
//!
//! Expressions compile lazily. The memoized path (`Expression::regex`) always
//! uses `CompileOptions::default()`; `Expression::compile_with` builds a fresh
//! regex with caller-supplied limits and leaves the cache alone.
//!
//! ## Invariants
//!
//! - The number of capturing groups in the compiled regex must equal the number
//!   of capture names. A mismatch can only come from a `raw` fragment and is
//!   reported as `Error::CaptureCountMismatch` instead of silently misaligning
//!   lookups.

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Options that affect how an expression is turned into a `Regex`.
///
/// The defaults match `regex::RegexBuilder`'s own defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Approximate size limit, in bytes, of the compiled program.
    pub size_limit: usize,
    /// Approximate size limit, in bytes, of the lazy DFA cache.
    pub dfa_size_limit: usize,
    /// Maximum nesting depth accepted by the parser.
    pub nest_limit: u32,
    /// Unicode-aware classes (`\w`, `\d`, `\s`) and case folding.
    pub unicode: bool,
    /// Treat `\r\n` as a line terminator for `^`/`$` in multi-line mode.
    pub crlf: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { size_limit: 10 * (1 << 20), dfa_size_limit: 2 * (1 << 20), nest_limit: 250, unicode: true, crlf: false }
    }
}

/// Compile `pattern`, checking it exposes exactly `expected_groups` capturing groups.
pub(crate) fn build(pattern: &str, expected_groups: usize, options: &CompileOptions) -> Result<Regex> {
    let regex = RegexBuilder::new(pattern)
        .size_limit(options.size_limit)
        .dfa_size_limit(options.dfa_size_limit)
        .nest_limit(options.nest_limit)
        .unicode(options.unicode)
        .crlf(options.crlf)
        .build()
        .map_err(|source| {
            tracing::warn!(pattern, error = %source, "pattern rejected by regex engine");
            Error::InvalidPattern { pattern: pattern.to_string(), source }
        })?;

    // Slot 0 is the implicit whole-match group.
    let actual = regex.captures_len() - 1;
    if actual != expected_groups {
        tracing::warn!(pattern, expected = expected_groups, actual, "capture count mismatch");
        return Err(Error::CaptureCountMismatch { pattern: pattern.to_string(), expected: expected_groups, actual });
    }

    tracing::debug!(pattern, captures = actual, "compiled expression");
    Ok(regex)
}
