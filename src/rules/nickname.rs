//! Nickname rules.
//!
//! Base: length bounds and letters, marks and numbers of any script plus
//! `_`, space, `.` and `-`. Toggles narrow the base further.

use crate::constraint::{Constraint, ConstraintSet};
use crate::options::{Family, NicknameConfig};
use crate::patterns::UNICODE_CHARSET;
use crate::sections::{latin_only, no_consecutive_special, no_digit, no_whitespace};

use super::{Rules, base_text};

#[derive(Debug, Clone)]
pub struct NicknameRules {
    config: NicknameConfig,
    constraints: ConstraintSet<str>,
}

impl NicknameRules {
    pub fn new(config: &NicknameConfig) -> Self {
        Self {
            config: *config,
            constraints: base_text(config.min, config.max, &UNICODE_CHARSET),
        }
    }

    pub fn config(&self) -> &NicknameConfig {
        &self.config
    }

    /// Disallows digits 0-9.
    pub fn with_no_digit(&self) -> Self {
        self.with(no_digit())
    }

    /// Disallows adjacent separators such as `__`, `--`, `..` or `_-`.
    pub fn with_no_consecutive_special(&self) -> Self {
        self.with(no_consecutive_special())
    }

    /// Disallows letters outside ASCII latin.
    pub fn with_no_unicode(&self) -> Self {
        self.with(latin_only())
    }

    pub fn with_no_spaces(&self) -> Self {
        self.with(no_whitespace())
    }

    fn with(&self, constraint: Constraint<str>) -> Self {
        Self {
            config: self.config,
            constraints: self.constraints.and(constraint),
        }
    }
}

impl Default for NicknameRules {
    fn default() -> Self {
        Self::new(&NicknameConfig::default())
    }
}

impl Rules for NicknameRules {
    fn family(&self) -> Family {
        Family::Nickname
    }

    fn constraints(&self) -> &ConstraintSet<str> {
        &self.constraints
    }
}
