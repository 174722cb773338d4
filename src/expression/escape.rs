//! Escaping helpers for literal text and character-class members.

/// Escape every regex metacharacter in `text`.
pub fn literal(text: &str) -> String {
    regex::escape(text)
}

/// Escape characters that carry meaning inside a bracketed class.
///
/// Besides `[`, `]`, `^` and `-`, the `regex` crate treats `\` as an escape and
/// `&`/`~` as the start of the `&&` and `~~` set operators, so those are escaped
/// too. Ranges passed through `Expression::any` never reach this function.
pub fn class(chars: &str) -> String {
    let mut out = String::with_capacity(chars.len());
    for c in chars.chars() {
        if matches!(c, '[' | ']' | '^' | '-' | '\\' | '&' | '~') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// A `X-Y` range token: exactly three characters with `-` in the middle.
pub fn is_range(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next(), chars.next(), chars.next()), (Some(_), Some('-'), Some(_), None))
}

/// True when `text` ends in an unescaped quantifier (`?`, `*`, `+` or `}`).
pub fn ends_with_quantifier(text: &str) -> bool {
    let Some(last) = text.chars().last() else {
        return false;
    };
    if !matches!(last, '?' | '*' | '+' | '}') {
        return false;
    }
    let body = &text[..text.len() - last.len_utf8()];
    let backslashes = body.chars().rev().take_while(|&c| c == '\\').count();
    backslashes % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_escapes_metacharacters() {
        assert_eq!(literal("a.b*c"), r"a\.b\*c");
        assert_eq!(literal("(x)"), r"\(x\)");
        assert_eq!(literal("plain"), "plain");
    }

    #[test]
    fn class_escapes_only_class_specials() {
        assert_eq!(class("a-z"), r"a\-z");
        assert_eq!(class("^[]"), r"\^\[\]");
        assert_eq!(class(".*+"), ".*+");
        assert_eq!(class(r"\&&~~"), r"\\\&\&\~\~");
    }

    #[test]
    fn trailing_quantifiers_are_detected_unless_escaped() {
        assert!(ends_with_quantifier("a+"));
        assert!(ends_with_quantifier("(?:a)*"));
        assert!(ends_with_quantifier(r"\d{2,}"));
        assert!(ends_with_quantifier(r"\\?"));
        assert!(!ends_with_quantifier(r"a\?"));
        assert!(!ends_with_quantifier(r"\{3\}"));
        assert!(!ends_with_quantifier("ab"));
        assert!(!ends_with_quantifier(""));
    }

    #[test]
    fn range_tokens_are_three_chars_with_dash() {
        assert!(is_range("0-9"));
        assert!(is_range("A-Z"));
        assert!(is_range("é-ü"));
        assert!(!is_range("0-"));
        assert!(!is_range("0-99"));
        assert!(!is_range("abc"));
        assert!(!is_range("-"));
    }
}
