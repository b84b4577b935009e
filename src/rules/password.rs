//! Password rules.
//!
//! Constraints are layered by strength tier:
//! - weak: length bounds only
//! - medium: weak plus lowercase and digit minimums
//! - strong: medium plus uppercase and symbol minimums
//!
//! Optional refinements (`with_no_spaces`, `with_no_common`) are appended on
//! top of the tier.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::blacklist::CommonPasswords;
use crate::constraint::{ConstraintSet, Evaluation};
use crate::options::{Family, PasswordConfig, StrengthTier};
use crate::sections::{
    CharClass, max_length, min_class_count, min_length, no_whitespace, not_common,
};

use super::Rules;

#[derive(Debug, Clone)]
pub struct PasswordRules {
    config: PasswordConfig,
    tier: StrengthTier,
    constraints: ConstraintSet<str>,
    refinements: ConstraintSet<str>,
}

impl PasswordRules {
    /// Rules at the configured strength tier.
    pub fn new(config: &PasswordConfig) -> Self {
        Self {
            config: *config,
            tier: config.strength,
            constraints: tier_constraints(config, config.strength),
            refinements: ConstraintSet::new(),
        }
    }

    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    pub fn tier(&self) -> StrengthTier {
        self.tier
    }

    /// Replaces the strength tier, keeping any refinements already applied.
    pub fn with_strength(&self, tier: StrengthTier) -> Self {
        Self {
            config: self.config,
            tier,
            constraints: tier_constraints(&self.config, tier).extend(&self.refinements),
            refinements: self.refinements.clone(),
        }
    }

    /// Rejects any whitespace.
    pub fn with_no_spaces(&self) -> Self {
        self.refine(ConstraintSet::new().and(no_whitespace()))
    }

    /// Rejects passwords found in `list`, compared case-insensitively.
    pub fn with_no_common(&self, list: &CommonPasswords) -> Self {
        self.refine(ConstraintSet::new().and(not_common(Arc::new(list.clone()))))
    }

    /// Evaluates a secret without copying it out.
    pub fn evaluate_secret(&self, password: &SecretString) -> Evaluation {
        self.constraints.evaluate(password.expose_secret())
    }

    fn refine(&self, extra: ConstraintSet<str>) -> Self {
        Self {
            config: self.config,
            tier: self.tier,
            constraints: self.constraints.extend(&extra),
            refinements: self.refinements.extend(&extra),
        }
    }
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self::new(&PasswordConfig::default())
    }
}

impl Rules for PasswordRules {
    fn family(&self) -> Family {
        Family::Password
    }

    fn constraints(&self) -> &ConstraintSet<str> {
        &self.constraints
    }
}

fn tier_constraints(config: &PasswordConfig, tier: StrengthTier) -> ConstraintSet<str> {
    let mut classes = Vec::new();
    if tier >= StrengthTier::Medium {
        classes.push((CharClass::Lowercase, config.min_lowercase));
        classes.push((CharClass::Digit, config.min_number));
    }
    if tier >= StrengthTier::Strong {
        classes.push((CharClass::Uppercase, config.min_uppercase));
        classes.push((CharClass::Symbol, config.min_symbol));
    }

    classes
        .into_iter()
        .filter(|(_, min)| *min > 0)
        .fold(
            ConstraintSet::new()
                .and(min_length(config.min))
                .and(max_length(config.max)),
            |set, (class, min)| set.and(min_class_count(class, min)),
        )
}
