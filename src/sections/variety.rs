//! Character variety section - per-class minimum counts.

use crate::constraint::{Constraint, Reason};
use crate::patterns::is_symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Symbol => is_symbol(c),
        }
    }

    pub fn count(self, value: &str) -> usize {
        value.chars().filter(|c| self.matches(*c)).count()
    }

    fn reason(self, min: usize) -> Reason {
        match self {
            CharClass::Lowercase => Reason::MissingLowercase { min },
            CharClass::Uppercase => Reason::MissingUppercase { min },
            CharClass::Digit => Reason::MissingDigit { min },
            CharClass::Symbol => Reason::MissingSymbol { min },
        }
    }
}

/// Requires at least `min` characters of `class` anywhere in the value.
///
/// The occurrences need not be adjacent: `a1b2` has two digits.
pub fn min_class_count(class: CharClass, min: usize) -> Constraint<str> {
    Constraint::new(class.reason(min), move |v: &str| class.count(v) >= min)
}
