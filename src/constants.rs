//! Prebuilt expressions.
//!
//! All constants live in one registry that is built the first time any of them
//! is requested and is read-only afterwards. Each accessor returns a clone of
//! the registered expression; clones share the compiled regex once one of them
//! has been compiled before cloning.
//!
//! | name              | pattern          |
//! |-------------------|------------------|
//! | `null`            | (empty)          |
//! | `any`             | `.`              |
//! | `space`           | `\s`             |
//! | `spaces`          | `\s+`            |
//! | `nonspace`        | `\S`             |
//! | `nonspaces`       | `\S+`            |
//! | `word_char`       | `\w`             |
//! | `word`            | `\w+`            |
//! | `digit`           | `\d`             |
//! | `digits`          | `\d+`            |
//! | `hex_digit`       | `[0-9a-fA-F]`    |
//! | `hex_digits`      | `[0-9a-fA-F]+`   |
//! | `word_break`      | `\b`             |
//! | `bol`             | `(?m:^)`         |
//! | `eol`             | `(?m:$)`         |
//! | `begin_anchor`    | `\A`             |
//! | `end_anchor`      | `\n?\z`          |
//! | `very_end_anchor` | `\z`             |

use crate::expression::{self, Expression};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static REGISTRY: Lazy<HashMap<&'static str, Expression>> = Lazy::new(|| {
    let space = Expression::raw(r"\s");
    let nonspace = Expression::raw(r"\S");
    let word_char = Expression::raw(r"\w");
    let digit = Expression::raw(r"\d");
    let hex_digit = Expression::any(&["0-9", "a-f", "A-F"]);

    let mut m = HashMap::new();
    m.insert("null", Expression::raw(""));
    m.insert("any", Expression::raw("."));
    m.insert("spaces", space.one_or_more());
    m.insert("space", space);
    m.insert("nonspaces", nonspace.one_or_more());
    m.insert("nonspace", nonspace);
    m.insert("word", word_char.one_or_more());
    m.insert("word_char", word_char);
    m.insert("digits", digit.one_or_more());
    m.insert("digit", digit);
    m.insert("hex_digits", hex_digit.one_or_more());
    m.insert("hex_digit", hex_digit);
    m.insert("word_break", Expression::raw(r"\b"));
    m.insert("bol", Expression::raw(expression::BOL));
    m.insert("eol", Expression::raw(expression::EOL));
    m.insert("begin_anchor", Expression::raw(expression::BEGIN));
    // `\n?\z` is a concatenation, so it must not pose as an atom.
    m.insert("end_anchor", Expression::raw("").end());
    m.insert("very_end_anchor", Expression::raw(expression::VERY_END));
    m
});

/// Look up a prebuilt expression by name.
pub fn get(name: &str) -> Option<&'static Expression> {
    REGISTRY.get(name)
}

/// Names of every prebuilt expression, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}

fn fetch(name: &'static str) -> Expression {
    match REGISTRY.get(name) {
        Some(expr) => expr.clone(),
        None => unreachable!("constant `{name}` is not registered"),
    }
}

/// Matches the empty string.
pub fn null() -> Expression {
    fetch("null")
}

/// Any single character except newline.
pub fn any() -> Expression {
    fetch("any")
}

pub fn space() -> Expression {
    fetch("space")
}

pub fn spaces() -> Expression {
    fetch("spaces")
}

pub fn nonspace() -> Expression {
    fetch("nonspace")
}

pub fn nonspaces() -> Expression {
    fetch("nonspaces")
}

pub fn word_char() -> Expression {
    fetch("word_char")
}

/// One or more word characters.
pub fn word() -> Expression {
    fetch("word")
}

pub fn digit() -> Expression {
    fetch("digit")
}

pub fn digits() -> Expression {
    fetch("digits")
}

pub fn hex_digit() -> Expression {
    fetch("hex_digit")
}

pub fn hex_digits() -> Expression {
    fetch("hex_digits")
}

/// A word boundary.
pub fn word_break() -> Expression {
    fetch("word_break")
}

/// Start of a line.
pub fn bol() -> Expression {
    fetch("bol")
}

/// End of a line.
pub fn eol() -> Expression {
    fetch("eol")
}

/// Absolute start of the input.
pub fn begin_anchor() -> Expression {
    fetch("begin_anchor")
}

/// End of the input, tolerating one trailing newline (`\n?\z`). The newline,
/// when present, is part of the whole match.
pub fn end_anchor() -> Expression {
    fetch("end_anchor")
}

/// Absolute end of the input.
pub fn very_end_anchor() -> Expression {
    fetch("very_end_anchor")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn registry_holds_every_accessor() {
        assert_eq!(
            names(),
            vec![
                "any",
                "begin_anchor",
                "bol",
                "digit",
                "digits",
                "end_anchor",
                "eol",
                "hex_digit",
                "hex_digits",
                "nonspace",
                "nonspaces",
                "null",
                "space",
                "spaces",
                "very_end_anchor",
                "word",
                "word_break",
                "word_char",
            ]
        );
        assert!(get("digit").is_some());
        assert!(get("nope").is_none());
    }

    #[test]
    fn constant_patterns() {
        assert_eq!(digit().text(), r"\d");
        assert_eq!(digits().text(), r"\d+");
        assert_eq!(hex_digit().text(), "[0-9a-fA-F]");
        assert_eq!(hex_digits().text(), "[0-9a-fA-F]+");
        assert_eq!(spaces().level(), Level::Postfix);
        assert_eq!(null().text(), "");
        assert_eq!(end_anchor().text(), r"\n?\z");
        assert_eq!(end_anchor().level(), Level::Concatenation);
    }

    #[test]
    fn registry_is_shared() {
        let a = get("word").unwrap() as *const Expression;
        let b = get("word").unwrap() as *const Expression;
        assert_eq!(a, b);
        assert_eq!(word(), word());
    }

    #[test]
    fn character_constants_match() {
        assert!(hex_digits().all().is_match("dEadBEEF09").unwrap());
        assert!(!hex_digits().all().is_match("xyz").unwrap());
        assert!(nonspaces().all().is_match("a-b_c!").unwrap());
        assert!(!any().all().is_match("\n").unwrap());
        assert!(word_break().concat(&crate::re("cat")).concat(&word_break()).is_match("a cat!").unwrap());
        assert!(!word_break().concat(&crate::re("cat")).concat(&word_break()).is_match("concatenate").unwrap());
    }

    #[test]
    fn anchor_constants_match() {
        let line_b = bol().concat(&crate::re("b")).concat(&eol());
        assert!(line_b.is_match("a\nb\nc").unwrap());
        let strict = begin_anchor().concat(&crate::re("b")).concat(&very_end_anchor());
        assert!(!strict.is_match("a\nb").unwrap());
        assert!(strict.is_match("b").unwrap());
        let loose = begin_anchor().concat(&crate::re("b")).concat(&end_anchor());
        assert!(loose.is_match("b\n").unwrap());
        assert!(!loose.is_match("b\n\n").unwrap());
    }
}
