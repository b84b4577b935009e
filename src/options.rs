//! Per-family options and their resolution against documented defaults.
//!
//! Each family has a partial `*Options` struct (every field optional) and a
//! fully-populated `*Config`. Resolution takes supplied values verbatim and
//! fills the rest from the family's `Default` config. It never fails and never
//! corrects illogical values such as `min > max`: those simply produce a
//! constraint set that rejects everything.

use std::fmt;

use regex::Regex;

use crate::error::ConfigError;
use crate::patterns::USERNAME_CHARSET;

/// A rule family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Age,
    Username,
    Password,
    Nickname,
    Slug,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Age => "age",
            Family::Username => "username",
            Family::Password => "password",
            Family::Nickname => "nickname",
            Family::Slug => "slug",
        };
        f.write_str(name)
    }
}

/// Password strength tier. Each tier's constraints are a superset of the
/// previous one's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum StrengthTier {
    Weak,
    Medium,
    #[default]
    Strong,
}

/// A compiled charset pattern compared by source text.
#[derive(Debug, Clone)]
pub struct Charset(Regex);

impl Charset {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        Regex::new(pattern)
            .map(Charset)
            .map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn regex(&self) -> &Regex {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Regex> for Charset {
    fn from(regex: Regex) -> Self {
        Charset(regex)
    }
}

impl PartialEq for Charset {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Charset {}

// ============================================================================
// AGE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeConfig {
    pub min: u32,
    pub max: u32,
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self { min: 0, max: 150 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeOptions {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

impl AgeOptions {
    pub fn resolve(self) -> AgeConfig {
        let defaults = AgeConfig::default();
        AgeConfig {
            min: self.min.unwrap_or(defaults.min),
            max: self.max.unwrap_or(defaults.max),
        }
    }
}

// ============================================================================
// USERNAME
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameConfig {
    pub min: usize,
    pub max: usize,
    pub pattern: Charset,
}

impl Default for UsernameConfig {
    fn default() -> Self {
        Self {
            min: 3,
            max: 30,
            pattern: Charset::from(USERNAME_CHARSET.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsernameOptions {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub pattern: Option<Charset>,
}

impl UsernameOptions {
    /// Sets a custom charset, compiling `pattern` first.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, ConfigError> {
        self.pattern = Some(Charset::new(pattern)?);
        Ok(self)
    }

    pub fn resolve(self) -> UsernameConfig {
        let defaults = UsernameConfig::default();
        UsernameConfig {
            min: self.min.unwrap_or(defaults.min),
            max: self.max.unwrap_or(defaults.max),
            pattern: self.pattern.unwrap_or(defaults.pattern),
        }
    }
}

// ============================================================================
// PASSWORD
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordConfig {
    pub min: usize,
    pub max: usize,
    pub min_lowercase: usize,
    pub min_uppercase: usize,
    pub min_number: usize,
    pub min_symbol: usize,
    pub strength: StrengthTier,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            min: 8,
            max: 64,
            min_lowercase: 1,
            min_uppercase: 1,
            min_number: 1,
            min_symbol: 1,
            strength: StrengthTier::Strong,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordOptions {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub min_lowercase: Option<usize>,
    pub min_uppercase: Option<usize>,
    pub min_number: Option<usize>,
    pub min_symbol: Option<usize>,
    pub strength: Option<StrengthTier>,
}

impl PasswordOptions {
    pub fn resolve(self) -> PasswordConfig {
        let defaults = PasswordConfig::default();
        PasswordConfig {
            min: self.min.unwrap_or(defaults.min),
            max: self.max.unwrap_or(defaults.max),
            min_lowercase: self.min_lowercase.unwrap_or(defaults.min_lowercase),
            min_uppercase: self.min_uppercase.unwrap_or(defaults.min_uppercase),
            min_number: self.min_number.unwrap_or(defaults.min_number),
            min_symbol: self.min_symbol.unwrap_or(defaults.min_symbol),
            strength: self.strength.unwrap_or(defaults.strength),
        }
    }
}

// ============================================================================
// NICKNAME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NicknameConfig {
    pub min: usize,
    pub max: usize,
}

impl Default for NicknameConfig {
    fn default() -> Self {
        Self { min: 3, max: 30 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NicknameOptions {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl NicknameOptions {
    pub fn resolve(self) -> NicknameConfig {
        let defaults = NicknameConfig::default();
        NicknameConfig {
            min: self.min.unwrap_or(defaults.min),
            max: self.max.unwrap_or(defaults.max),
        }
    }
}

// ============================================================================
// SLUG
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugConfig {
    pub min: usize,
    pub max: usize,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self { min: 1, max: 256 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlugOptions {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl SlugOptions {
    pub fn resolve(self) -> SlugConfig {
        let defaults = SlugConfig::default();
        SlugConfig {
            min: self.min.unwrap_or(defaults.min),
            max: self.max.unwrap_or(defaults.max),
        }
    }
}

// ============================================================================
// ANY FAMILY
// ============================================================================

/// Partial options for any family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOptions {
    Age(AgeOptions),
    Username(UsernameOptions),
    Password(PasswordOptions),
    Nickname(NicknameOptions),
    Slug(SlugOptions),
}

impl RuleOptions {
    /// Empty options for `family`, equivalent to its defaults.
    pub fn empty(family: Family) -> Self {
        match family {
            Family::Age => RuleOptions::Age(AgeOptions::default()),
            Family::Username => RuleOptions::Username(UsernameOptions::default()),
            Family::Password => RuleOptions::Password(PasswordOptions::default()),
            Family::Nickname => RuleOptions::Nickname(NicknameOptions::default()),
            Family::Slug => RuleOptions::Slug(SlugOptions::default()),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            RuleOptions::Age(_) => Family::Age,
            RuleOptions::Username(_) => Family::Username,
            RuleOptions::Password(_) => Family::Password,
            RuleOptions::Nickname(_) => Family::Nickname,
            RuleOptions::Slug(_) => Family::Slug,
        }
    }
}

/// A fully-resolved configuration for any family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleConfiguration {
    Age(AgeConfig),
    Username(UsernameConfig),
    Password(PasswordConfig),
    Nickname(NicknameConfig),
    Slug(SlugConfig),
}

impl RuleConfiguration {
    pub fn defaults(family: Family) -> Self {
        resolve_options(RuleOptions::empty(family))
    }

    pub fn family(&self) -> Family {
        match self {
            RuleConfiguration::Age(_) => Family::Age,
            RuleConfiguration::Username(_) => Family::Username,
            RuleConfiguration::Password(_) => Family::Password,
            RuleConfiguration::Nickname(_) => Family::Nickname,
            RuleConfiguration::Slug(_) => Family::Slug,
        }
    }
}

/// Merges partial options over the family defaults.
pub fn resolve_options(options: RuleOptions) -> RuleConfiguration {
    match options {
        RuleOptions::Age(o) => RuleConfiguration::Age(o.resolve()),
        RuleOptions::Username(o) => RuleConfiguration::Username(o.resolve()),
        RuleOptions::Password(o) => RuleConfiguration::Password(o.resolve()),
        RuleOptions::Nickname(o) => RuleConfiguration::Nickname(o.resolve()),
        RuleOptions::Slug(o) => RuleConfiguration::Slug(o.resolve()),
    }
}
