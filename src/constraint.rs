//! Atomic constraints and conjunctive constraint sets.

use std::fmt;
use std::sync::Arc;

use crate::error::ValidationFailure;

/// Why a single constraint failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    TooShort { min: usize },
    TooLong { max: usize },
    InvalidCharacter,
    MissingLowercase { min: usize },
    MissingUppercase { min: usize },
    MissingDigit { min: usize },
    MissingSymbol { min: usize },
    ContainsDigit,
    ConsecutiveSpecial,
    NonLatin,
    ContainsWhitespace,
    CommonPassword,
    Reserved,
    NotANumber,
    NotInteger,
    Negative,
    TooSmall { min: u32 },
    TooLarge { max: u32 },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::TooShort { min } => write!(f, "Must be at least {} characters", min),
            Reason::TooLong { max } => write!(f, "Must be at most {} characters", max),
            Reason::InvalidCharacter => write!(f, "Contains invalid characters"),
            Reason::MissingLowercase { min } => {
                write!(f, "Must contain at least {} lowercase letter(s)", min)
            }
            Reason::MissingUppercase { min } => {
                write!(f, "Must contain at least {} uppercase letter(s)", min)
            }
            Reason::MissingDigit { min } => write!(f, "Must contain at least {} digit(s)", min),
            Reason::MissingSymbol { min } => write!(f, "Must contain at least {} symbol(s)", min),
            Reason::ContainsDigit => write!(f, "Must not contain digits"),
            Reason::ConsecutiveSpecial => {
                write!(f, "Must not contain consecutive special characters")
            }
            Reason::NonLatin => write!(f, "Must only contain latin letters"),
            Reason::ContainsWhitespace => write!(f, "Must not contain whitespace"),
            Reason::CommonPassword => write!(f, "Password is too common"),
            Reason::Reserved => write!(f, "Name is reserved"),
            Reason::NotANumber => write!(f, "Expected a number"),
            Reason::NotInteger => write!(f, "Must be an integer"),
            Reason::Negative => write!(f, "Must not be negative"),
            Reason::TooSmall { min } => write!(f, "Must be at least {}", min),
            Reason::TooLarge { max } => write!(f, "Must be at most {}", max),
        }
    }
}

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A single predicate tagged with the reason reported when it fails.
pub struct Constraint<T: ?Sized> {
    reason: Reason,
    check: Predicate<T>,
}

impl<T: ?Sized> Constraint<T> {
    pub fn new<F>(reason: Reason, check: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            reason,
            check: Arc::new(check),
        }
    }

    pub fn reason(&self) -> Reason {
        self.reason
    }

    pub fn passes(&self, value: &T) -> bool {
        (self.check)(value)
    }
}

impl<T: ?Sized> Clone for Constraint<T> {
    fn clone(&self) -> Self {
        Self {
            reason: self.reason,
            check: Arc::clone(&self.check),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Constraint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("reason", &self.reason)
            .finish()
    }
}

/// An ordered, conjunctive collection of constraints.
///
/// A value is valid iff every constraint passes. Evaluation never stops at
/// the first failure, so every failed reason is reported.
pub struct ConstraintSet<T: ?Sized> {
    constraints: Vec<Constraint<T>>,
}

impl<T: ?Sized> ConstraintSet<T> {
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Returns a new set with `constraint` appended; `self` is left untouched.
    pub fn and(&self, constraint: Constraint<T>) -> Self {
        let mut constraints = self.constraints.clone();
        constraints.push(constraint);
        Self { constraints }
    }

    /// Returns a new set with every constraint of `other` appended.
    pub fn extend(&self, other: &ConstraintSet<T>) -> Self {
        let mut constraints = self.constraints.clone();
        constraints.extend(other.constraints.iter().cloned());
        Self { constraints }
    }

    pub fn evaluate(&self, value: &T) -> Evaluation {
        let reasons = self
            .constraints
            .iter()
            .filter(|c| !c.passes(value))
            .map(Constraint::reason)
            .collect();
        Evaluation { reasons }
    }

    pub fn reasons(&self) -> impl Iterator<Item = Reason> + '_ {
        self.constraints.iter().map(Constraint::reason)
    }

    pub fn contains(&self, reason: Reason) -> bool {
        self.reasons().any(|r| r == reason)
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl<T: ?Sized> Default for ConstraintSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for ConstraintSet<T> {
    fn clone(&self) -> Self {
        Self {
            constraints: self.constraints.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for ConstraintSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.constraints).finish()
    }
}

impl<T: ?Sized> FromIterator<Constraint<T>> for ConstraintSet<T> {
    fn from_iter<I: IntoIterator<Item = Constraint<T>>>(iter: I) -> Self {
        Self {
            constraints: iter.into_iter().collect(),
        }
    }
}

/// Outcome of evaluating a value against a constraint set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Failed reasons in constraint order. Empty means the value is valid.
    pub reasons: Vec<Reason>,
}

impl Evaluation {
    pub fn is_ok(&self) -> bool {
        self.reasons.is_empty()
    }

    pub fn first_reason(&self) -> Option<&Reason> {
        self.reasons.first()
    }

    pub fn has(&self, reason: Reason) -> bool {
        self.reasons.contains(&reason)
    }

    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.reasons.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure {
                reasons: self.reasons,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_empty() -> Constraint<str> {
        Constraint::new(Reason::TooShort { min: 1 }, |v: &str| !v.is_empty())
    }

    fn ascii() -> Constraint<str> {
        Constraint::new(Reason::InvalidCharacter, |v: &str| v.is_ascii())
    }

    #[test]
    fn test_empty_set_accepts_everything() {
        let set: ConstraintSet<str> = ConstraintSet::new();
        assert!(set.evaluate("").is_ok());
        assert!(set.evaluate("anything").is_ok());
    }

    #[test]
    fn test_evaluate_reports_failed_reasons() {
        let set: ConstraintSet<str> = [non_empty(), ascii()].into_iter().collect();
        let no_failures = set.evaluate("abc");
        assert!(no_failures.is_ok());

        let one = set.evaluate("用户");
        assert_eq!(one.reasons, vec![Reason::InvalidCharacter]);

        let empty = ConstraintSet::new()
            .and(ascii())
            .and(non_empty())
            .and(Constraint::new(Reason::ContainsDigit, |v: &str| {
                !v.chars().any(|c| c.is_ascii_digit())
            }))
            .evaluate("");
        assert_eq!(empty.reasons, vec![Reason::TooShort { min: 1 }]);
    }

    #[test]
    fn test_and_does_not_mutate_original() {
        let base: ConstraintSet<str> = ConstraintSet::new().and(non_empty());
        let extended = base.and(ascii());
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert!(base.evaluate("é").is_ok());
        assert!(!extended.evaluate("é").is_ok());
    }

    #[test]
    fn test_into_result() {
        let set: ConstraintSet<str> = ConstraintSet::new().and(non_empty());
        assert!(set.evaluate("x").into_result().is_ok());

        let failure = set.evaluate("").into_result().unwrap_err();
        assert_eq!(failure.first(), Some(&Reason::TooShort { min: 1 }));
        assert_eq!(failure.to_string(), "Must be at least 1 characters");
    }

    #[test]
    fn test_numeric_constraints() {
        let set: ConstraintSet<f64> = ConstraintSet::new()
            .and(Constraint::new(Reason::Negative, |v: &f64| *v >= 0.0))
            .and(Constraint::new(Reason::NotInteger, |v: &f64| v.fract() == 0.0));
        assert!(set.evaluate(&3.0).is_ok());
        assert_eq!(
            set.evaluate(&-1.5).reasons,
            vec![Reason::Negative, Reason::NotInteger]
        );
    }
}
