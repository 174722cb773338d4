/// Declare a process-wide expression, built and compiled at most once.
///
/// Expands to a `&'static Expression` backed by a `once_cell` lazy static, so
/// the compiled regex cache survives across calls.
///
/// ```
/// use rexpr::{constants, lazy_expression};
///
/// fn number() -> &'static rexpr::Expression {
///     lazy_expression!(constants::digits().all())
/// }
///
/// assert!(number().is_match("2024").unwrap());
/// ```
#[macro_export]
macro_rules! lazy_expression {
    ($build:expr) => {{
        static EXPR: $crate::__once_cell::sync::Lazy<$crate::Expression> =
            $crate::__once_cell::sync::Lazy::new(|| $build);
        &*EXPR
    }};
}

/// The factory: `re!("text")` matches `text` literally, `re!()` matches the
/// empty string.
#[macro_export]
macro_rules! re {
    () => {
        $crate::constants::null()
    };
    ($lit:expr) => {
        $crate::re($lit)
    };
}

/// Character class builder: `any!()` is any single character, `any!("a-z", "_")`
/// unions ranges and character sets.
#[macro_export]
macro_rules! any {
    () => {
        $crate::constants::any()
    };
    ($($chars:expr),+ $(,)?) => {
        $crate::Expression::any(&[$($chars),+])
    };
}
