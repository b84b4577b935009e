//! Named character classes and structural patterns shared by the rule
//! builders and the canonicalization pipeline.

use std::sync::LazyLock;

use regex::Regex;

/// Punctuation accepted as a password symbol.
pub const SYMBOLS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

/// Separators that may not appear twice in a row in a nickname.
pub const SPECIALS: [char; 3] = ['_', '.', '-'];

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static pattern must compile")
}

/// Latin-only nickname charset.
pub static NICKNAME_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-zA-Z0-9_ .\-]+$"));

/// Default username charset.
pub static USERNAME_CHARSET: LazyLock<Regex> = LazyLock::new(|| compile(r"^[a-z0-9_]+$"));

/// Letters, marks and numbers of any script plus `_`, space, `.` and `-`.
pub static UNICODE_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[\p{L}\p{M}\p{N}_ .\-]+$"));

pub static NO_DIGIT: LazyLock<Regex> = LazyLock::new(|| compile(r"^[^0-9]*$"));

pub static NO_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\S*$"));

pub static SLUG_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-z0-9]+(?:-[a-z0-9]+)*$"));

pub(crate) static USERNAME_STRIP: LazyLock<Regex> = LazyLock::new(|| compile(r"[^a-z0-9_\s]"));

pub(crate) static SLUG_STRIP: LazyLock<Regex> = LazyLock::new(|| compile(r"[^a-z0-9\s\-]"));

pub(crate) static NICKNAME_STRIP: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[^\p{L}\p{M}\p{N}_ .\-\s]"));

pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// True when two separators from [`SPECIALS`] sit next to each other.
pub fn has_consecutive_special(value: &str) -> bool {
    value
        .chars()
        .zip(value.chars().skip(1))
        .any(|(a, b)| SPECIALS.contains(&a) && SPECIALS.contains(&b))
}
