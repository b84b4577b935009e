//! Username rules.
//!
//! Base: length bounds and the configured charset (default `^[a-z0-9_]+$`,
//! 3 to 30 characters).

use crate::constraint::ConstraintSet;
use crate::error::ConfigError;
use crate::options::{Family, UsernameConfig};
use crate::reserved::{ReservedMatcher, ReservedOptions};
use crate::sections::not_reserved;

use super::{Rules, base_text};

/// Username rules.
///
/// `coerce` always canonicalizes to `[a-z0-9_]`, whatever charset the config
/// carries. A wider custom pattern is enforced on `evaluate` but coercion
/// never produces the extra characters.
#[derive(Debug, Clone)]
pub struct UsernameRules {
    config: UsernameConfig,
    constraints: ConstraintSet<str>,
}

impl UsernameRules {
    pub fn new(config: &UsernameConfig) -> Self {
        Self {
            constraints: base_text(config.min, config.max, config.pattern.regex()),
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &UsernameConfig {
        &self.config
    }

    /// Also rejects reserved names and their suffix variants.
    pub fn with_no_reserved(&self, options: &ReservedOptions) -> Result<Self, ConfigError> {
        let matcher = ReservedMatcher::build(options)?;
        Ok(Self {
            config: self.config.clone(),
            constraints: self.constraints.and(not_reserved(matcher)),
        })
    }
}

impl Default for UsernameRules {
    fn default() -> Self {
        Self::new(&UsernameConfig::default())
    }
}

impl Rules for UsernameRules {
    fn family(&self) -> Family {
        Family::Username
    }

    fn constraints(&self) -> &ConstraintSet<str> {
        &self.constraints
    }
}
