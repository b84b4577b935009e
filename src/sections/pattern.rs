//! Pattern section - charset membership and structural rules.

use regex::Regex;

use crate::constraint::{Constraint, Reason};
use crate::patterns::{NICKNAME_CHARSET, NO_DIGIT, NO_WHITESPACE, has_consecutive_special};

/// Requires the whole value to match `pattern`.
pub fn charset(pattern: &Regex) -> Constraint<str> {
    let pattern = pattern.clone();
    Constraint::new(Reason::InvalidCharacter, move |v: &str| pattern.is_match(v))
}

pub fn no_digit() -> Constraint<str> {
    Constraint::new(Reason::ContainsDigit, |v: &str| NO_DIGIT.is_match(v))
}

pub fn no_consecutive_special() -> Constraint<str> {
    Constraint::new(Reason::ConsecutiveSpecial, |v: &str| {
        !has_consecutive_special(v)
    })
}

/// Restricts letters to ASCII latin.
pub fn latin_only() -> Constraint<str> {
    Constraint::new(Reason::NonLatin, |v: &str| NICKNAME_CHARSET.is_match(v))
}

pub fn no_whitespace() -> Constraint<str> {
    Constraint::new(Reason::ContainsWhitespace, |v: &str| {
        NO_WHITESPACE.is_match(v)
    })
}
