//! Composable regular expressions.
//!
//! Build patterns from typed combinators instead of hand-written syntax. The
//! library keeps track of operator precedence, so fragments are grouped only
//! where needed, and of capture names, so matches can be queried by name.
//!
//! ```
//! use rexpr::{constants, re};
//!
//! let sign = re("-").optional();
//! let number = sign.concat(&constants::digits()).capture("number");
//! let unit = (re("px") | re("em")).capture("unit");
//! let length = number.concat(&unit).all();
//!
//! assert_eq!(length.text(), r"\A((?:\-)?\d+)(px|em)\z");
//!
//! let m = length.matches("-12em").unwrap().unwrap();
//! assert_eq!(m.get("number"), Some("-12"));
//! assert_eq!(m.get("unit"), Some("em"));
//! assert!(length.matches("12pt").unwrap().is_none());
//! ```
//!
//! Expressions compile on first use and cache the compiled regex. Prebuilt
//! fragments (digits, word characters, anchors, ...) live in [`constants`].

#[doc(hidden)]
pub use once_cell as __once_cell;

#[macro_use]
mod macros;
pub mod constants;
mod error;
mod expression;
mod result;

pub use error::{Error, Result};
pub use expression::{CaptureNames, CompileOptions, Expression, Flags, Level};
pub use result::{Capture, MatchResult};

/// Match `literal` exactly, escaping every metacharacter.
///
/// Use [`re!`]`()` or [`constants::null`] for the empty-match expression.
pub fn re(literal: &str) -> Expression {
    Expression::literal(literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_escapes_its_argument() {
        let expr = re("a.b*c");
        assert_eq!(expr.text(), r"a\.b\*c");
        assert_eq!(expr.level(), Level::Concatenation);
        assert!(expr.capture_names().is_empty());
        assert!(expr.flags().is_empty());
    }

    #[test]
    fn macro_forms_match_functions() {
        assert_eq!(re!(), constants::null());
        assert_eq!(re!("x+"), re("x+"));
        assert_eq!(any!(), constants::any());
        assert_eq!(any!("a-z", "_").text(), "[a-z_]");
    }

    #[test]
    fn expression_macro_returns_shared_instance() {
        fn word() -> &'static Expression {
            lazy_expression!(constants::word().all())
        }
        assert!(std::ptr::eq(word(), word()));
        assert!(word().is_match("hello").unwrap());
        assert!(word().regex().is_ok());
    }
}
