//! Error types.

use std::fmt;

use thiserror::Error;

use crate::constraint::Reason;
use crate::options::Family;

/// Malformed caller-supplied options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid charset pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Failed to build reserved word matcher: {0}")]
    ReservedMatcher(#[source] regex::Error),
}

/// A value did not satisfy its constraint set.
///
/// Carries every failed reason, in constraint order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub reasons: Vec<Reason>,
}

impl ValidationFailure {
    /// The first failed reason, for adapters that surface a single message.
    pub fn first(&self) -> Option<&Reason> {
        self.reasons.first()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.reasons.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

/// Coerced validation could not produce an accepted value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoerceError {
    /// No candidate value could be produced from the input.
    #[error("Could not coerce {input:?} into a {family} value")]
    Unusable { family: Family, input: String },
    /// A candidate was produced but failed strict validation.
    #[error("Coerced {family} value {value:?} is invalid: {failure}")]
    Rejected {
        family: Family,
        value: String,
        failure: ValidationFailure,
    },
}

impl CoerceError {
    /// Failure reasons for a rejected candidate; empty when nothing was produced.
    pub fn reasons(&self) -> &[Reason] {
        match self {
            CoerceError::Unusable { .. } => &[],
            CoerceError::Rejected { failure, .. } => &failure.reasons,
        }
    }
}
