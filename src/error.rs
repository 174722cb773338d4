//! Error types for compiling expressions.
//!
//! Building an expression never fails: combinators only concatenate text. The
//! first time an expression is compiled (on `regex()` or the first match) the
//! engine may reject it, which is reported here.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The engine rejected the pattern, usually because of a malformed `raw`
    /// fragment or range token.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The compiled pattern has a different number of capturing groups than
    /// the expression has capture names.
    #[error("pattern `{pattern}` has {actual} capturing groups but {expected} capture names")]
    CaptureCountMismatch { pattern: String, expected: usize, actual: usize },
}
