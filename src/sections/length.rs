//! Length section - character count bounds.

use crate::constraint::{Constraint, Reason};

/// Requires at least `min` characters.
pub fn min_length(min: usize) -> Constraint<str> {
    Constraint::new(Reason::TooShort { min }, move |v: &str| {
        v.chars().count() >= min
    })
}

/// Requires at most `max` characters.
pub fn max_length(max: usize) -> Constraint<str> {
    Constraint::new(Reason::TooLong { max }, move |v: &str| {
        v.chars().count() <= max
    })
}
