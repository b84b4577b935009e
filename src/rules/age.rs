//! Age rules and life-stage bands.
//!
//! Ages are whole, non-negative numbers. A configured `[min, max]` narrows
//! the base rules. Life-stage bands are fixed windows that ignore the
//! configured range and may overlap (`teen` and `adult` share 18 and 19).

use std::fmt;

use crate::canonical::canonicalize;
use crate::constraint::{Constraint, ConstraintSet, Evaluation, Reason};
use crate::error::CoerceError;
use crate::options::{AgeConfig, Family};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeStage {
    Child,
    PreTeen,
    Teen,
    Minor,
    YoungAdult,
    Adult,
    Senior,
    Elderly,
}

impl LifeStage {
    pub const ALL: [LifeStage; 8] = [
        LifeStage::Child,
        LifeStage::PreTeen,
        LifeStage::Teen,
        LifeStage::Minor,
        LifeStage::YoungAdult,
        LifeStage::Adult,
        LifeStage::Senior,
        LifeStage::Elderly,
    ];

    /// Inclusive bounds; `None` means unbounded above.
    pub fn bounds(self) -> (u32, Option<u32>) {
        match self {
            LifeStage::Child => (0, Some(12)),
            LifeStage::PreTeen => (9, Some(12)),
            LifeStage::Teen => (13, Some(19)),
            LifeStage::Minor => (0, Some(17)),
            LifeStage::YoungAdult => (18, Some(25)),
            LifeStage::Adult => (18, None),
            LifeStage::Senior => (60, None),
            LifeStage::Elderly => (75, None),
        }
    }

    pub fn contains(self, age: u32) -> bool {
        let (min, max) = self.bounds();
        age >= min && max.is_none_or(|max| age <= max)
    }

    /// Every band containing `age`.
    pub fn of(age: u32) -> Vec<LifeStage> {
        LifeStage::ALL
            .into_iter()
            .filter(|stage| stage.contains(age))
            .collect()
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifeStage::Child => "child",
            LifeStage::PreTeen => "preteen",
            LifeStage::Teen => "teen",
            LifeStage::Minor => "minor",
            LifeStage::YoungAdult => "young adult",
            LifeStage::Adult => "adult",
            LifeStage::Senior => "senior",
            LifeStage::Elderly => "elderly",
        };
        f.write_str(name)
    }
}

/// Raw age input.
#[derive(Debug, Clone, PartialEq)]
pub enum AgeInput {
    Number(f64),
    Text(String),
}

impl From<f64> for AgeInput {
    fn from(value: f64) -> Self {
        AgeInput::Number(value)
    }
}

impl From<u32> for AgeInput {
    fn from(value: u32) -> Self {
        AgeInput::Number(f64::from(value))
    }
}

impl From<i64> for AgeInput {
    fn from(value: i64) -> Self {
        AgeInput::Number(value as f64)
    }
}

impl From<&str> for AgeInput {
    fn from(value: &str) -> Self {
        AgeInput::Text(value.to_string())
    }
}

impl From<String> for AgeInput {
    fn from(value: String) -> Self {
        AgeInput::Text(value)
    }
}

impl fmt::Display for AgeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeInput::Number(n) => write!(f, "{}", n),
            AgeInput::Text(t) => f.write_str(t),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AgeRules {
    constraints: ConstraintSet<f64>,
}

impl AgeRules {
    /// Whole, non-negative and within `[config.min, config.max]`.
    pub fn new(config: &AgeConfig) -> Self {
        Self {
            constraints: base().and(at_least(config.min)).and(at_most(config.max)),
        }
    }

    /// Whole, non-negative and within the fixed `stage` window.
    pub fn band(stage: LifeStage) -> Self {
        let (min, max) = stage.bounds();
        let mut constraints = base();
        if min > 0 {
            constraints = constraints.and(at_least(min));
        }
        if let Some(max) = max {
            constraints = constraints.and(at_most(max));
        }
        Self { constraints }
    }

    pub fn constraints(&self) -> &ConstraintSet<f64> {
        &self.constraints
    }

    pub fn evaluate(&self, value: f64) -> Evaluation {
        self.constraints.evaluate(&value)
    }

    /// Evaluates without coercion: text is never a number.
    pub fn evaluate_input(&self, input: &AgeInput) -> Evaluation {
        match input {
            AgeInput::Number(n) => self.evaluate(*n),
            AgeInput::Text(_) => Evaluation {
                reasons: vec![Reason::NotANumber],
            },
        }
    }

    pub fn is_valid(&self, value: f64) -> bool {
        self.evaluate(value).is_ok()
    }

    /// Parses and floors `input`, then validates the result.
    pub fn coerce(&self, input: &AgeInput) -> Result<u32, CoerceError> {
        let value = coerce_number(input)?;
        match self.evaluate(value).into_result() {
            Ok(()) => Ok(value as u32),
            Err(failure) => Err(CoerceError::Rejected {
                family: Family::Age,
                value: value.to_string(),
                failure,
            }),
        }
    }
}

impl Default for AgeRules {
    fn default() -> Self {
        Self::new(&AgeConfig::default())
    }
}

/// Outcome of [`classify_age`].
#[derive(Debug, Clone, PartialEq)]
pub struct AgeReport {
    /// The numeric value checked, after coercion when requested. `None` when
    /// uncoerced text was supplied.
    pub value: Option<f64>,
    pub evaluation: Evaluation,
}

impl AgeReport {
    pub fn is_ok(&self) -> bool {
        self.evaluation.is_ok()
    }

    /// Bands containing the value; empty unless it is a valid age.
    pub fn bands(&self) -> Vec<LifeStage> {
        match self.value {
            Some(v) if self.is_ok() && v >= 0.0 && v.fract() == 0.0 => LifeStage::of(v as u32),
            _ => Vec::new(),
        }
    }
}

/// Checks `input` against `rules`, optionally coercing it first.
///
/// Coercion parses text, floors the number, and fails with
/// [`CoerceError::Unusable`] when no finite number can be produced. Range
/// failures are reported in the returned evaluation, never as an error.
pub fn classify_age(
    rules: &AgeRules,
    input: &AgeInput,
    coerce: bool,
) -> Result<AgeReport, CoerceError> {
    if coerce {
        let value = coerce_number(input)?;
        return Ok(AgeReport {
            value: Some(value),
            evaluation: rules.evaluate(value),
        });
    }

    let value = match input {
        AgeInput::Number(n) => Some(*n),
        AgeInput::Text(_) => None,
    };
    Ok(AgeReport {
        value,
        evaluation: rules.evaluate_input(input),
    })
}

fn coerce_number(input: &AgeInput) -> Result<f64, CoerceError> {
    let parsed = match input {
        AgeInput::Number(n) => Some(*n),
        AgeInput::Text(t) => canonicalize(Family::Age, t).parse::<f64>().ok(),
    };
    match parsed {
        Some(n) if n.is_finite() => Ok(n.floor()),
        _ => {
            #[cfg(feature = "tracing")]
            tracing::debug!("age coercion failed for {:?}", input);
            Err(CoerceError::Unusable {
                family: Family::Age,
                input: input.to_string(),
            })
        }
    }
}

fn base() -> ConstraintSet<f64> {
    ConstraintSet::new()
        .and(Constraint::new(Reason::NotANumber, |v: &f64| v.is_finite()))
        .and(Constraint::new(Reason::NotInteger, |v: &f64| v.fract() == 0.0))
        .and(Constraint::new(Reason::Negative, |v: &f64| *v >= 0.0))
}

fn at_least(min: u32) -> Constraint<f64> {
    Constraint::new(Reason::TooSmall { min }, move |v: &f64| *v >= f64::from(min))
}

fn at_most(max: u32) -> Constraint<f64> {
    Constraint::new(Reason::TooLarge { max }, move |v: &f64| *v <= f64::from(max))
}
