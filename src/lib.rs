//! Composable validation rules for usernames, passwords, nicknames, slugs
//! and ages.
//!
//! Rules are plain immutable values that any schema or form adapter can wrap.
//! Every rule family follows the same layering: resolved options build a base
//! constraint set, optional variants (strength tiers, toggles, reserved and
//! common word lists) extend it, and `coerce` canonicalizes free-form input
//! before re-checking it against the strict set.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `VALIKIT_COMMON_PASSWORDS_PATH`: Path read by [`CommonPasswords::from_env`]
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use valikit::{
//!     PasswordRules, ReservedOptions, Rules, StrengthTier, UsernameOptions, UsernameRules,
//! };
//!
//! let usernames = UsernameRules::new(&UsernameOptions::default().resolve())
//!     .with_no_reserved(&ReservedOptions::default())
//!     .expect("default reserved words compile");
//!
//! assert!(usernames.is_valid("valid_username"));
//! assert!(!usernames.is_valid("admin1"));
//! assert_eq!(usernames.coerce("  User Name !@#  ").unwrap(), "user_name");
//!
//! let passwords = PasswordRules::default().with_strength(StrengthTier::Medium);
//! let evaluation = passwords.evaluate("letmein");
//! for reason in &evaluation.reasons {
//!     println!("{}", reason);
//! }
//! ```

mod blacklist;
mod canonical;
mod constraint;
mod error;
mod options;
mod patterns;
mod reserved;
mod rules;
mod sections;

pub use blacklist::{
    COMMON_PASSWORDS_PATH_VAR, CommonPasswords, CommonPasswordsError, common_passwords_path,
};
pub use canonical::{canonicalize, strip_diacritics};
pub use constraint::{Constraint, ConstraintSet, Evaluation, Reason};
pub use error::{CoerceError, ConfigError, ValidationFailure};
pub use options::{
    AgeConfig, AgeOptions, Charset, Family, NicknameConfig, NicknameOptions, PasswordConfig,
    PasswordOptions, RuleConfiguration, RuleOptions, SlugConfig, SlugOptions, StrengthTier,
    UsernameConfig, UsernameOptions, resolve_options,
};
pub use reserved::{RESERVED_USERNAMES, ReservedMatcher, ReservedOptions, reserved_words};
pub use rules::{
    AgeInput, AgeReport, AgeRules, FamilyRules, LifeStage, NicknameRules, PasswordRules, Rules,
    SlugRules, UsernameRules, classify_age, compose,
};
pub use sections::CharClass;

/// Named patterns shared by the rule builders.
pub mod registry {
    pub use crate::patterns::{
        NICKNAME_CHARSET, NO_DIGIT, NO_WHITESPACE, SLUG_CHARSET, SPECIALS,
        SYMBOLS, UNICODE_CHARSET, USERNAME_CHARSET, has_consecutive_special, is_symbol,
    };
}
