//! Per-family rule builders.
//!
//! Every builder is an immutable value. Variant methods (`with_*`) return a
//! new builder whose constraint set extends the receiver's; the receiver is
//! left untouched.

mod age;
mod nickname;
mod password;
mod slug;
mod username;

pub use age::{AgeInput, AgeReport, AgeRules, LifeStage, classify_age};
pub use nickname::NicknameRules;
pub use password::PasswordRules;
pub use slug::SlugRules;
pub use username::UsernameRules;

use regex::Regex;

use crate::canonical::canonicalize;
use crate::constraint::{ConstraintSet, Evaluation};
use crate::error::CoerceError;
use crate::options::{Family, RuleConfiguration};
use crate::sections::{charset, max_length, min_length};

/// Shared surface of the string rule families.
pub trait Rules {
    fn family(&self) -> Family;

    fn constraints(&self) -> &ConstraintSet<str>;

    /// Runs every constraint and reports all failures.
    fn evaluate(&self, value: &str) -> Evaluation {
        self.constraints().evaluate(value)
    }

    fn is_valid(&self, value: &str) -> bool {
        self.evaluate(value).is_ok()
    }

    /// Canonicalizes `raw` and validates the result against the strict set.
    fn coerce(&self, raw: &str) -> Result<String, CoerceError> {
        coerce_text(self.family(), self.constraints(), raw)
    }
}

/// Base rules of any family, built from a resolved configuration.
///
/// Variants are applied on the wrapped builder, e.g.
/// `rules.as_text()` for the string families or matching on
/// [`FamilyRules::Password`] to call `with_strength`.
#[derive(Debug, Clone)]
pub enum FamilyRules {
    Age(AgeRules),
    Username(UsernameRules),
    Password(PasswordRules),
    Nickname(NicknameRules),
    Slug(SlugRules),
}

impl FamilyRules {
    pub fn family(&self) -> Family {
        match self {
            FamilyRules::Age(_) => Family::Age,
            FamilyRules::Username(_) => Family::Username,
            FamilyRules::Password(_) => Family::Password,
            FamilyRules::Nickname(_) => Family::Nickname,
            FamilyRules::Slug(_) => Family::Slug,
        }
    }

    /// The string rules; `None` for age.
    pub fn as_text(&self) -> Option<&dyn Rules> {
        match self {
            FamilyRules::Age(_) => None,
            FamilyRules::Username(r) => Some(r),
            FamilyRules::Password(r) => Some(r),
            FamilyRules::Nickname(r) => Some(r),
            FamilyRules::Slug(r) => Some(r),
        }
    }

    pub fn as_age(&self) -> Option<&AgeRules> {
        match self {
            FamilyRules::Age(r) => Some(r),
            _ => None,
        }
    }
}

/// Builds the base rules for `config`'s family.
pub fn compose(config: &RuleConfiguration) -> FamilyRules {
    match config {
        RuleConfiguration::Age(c) => FamilyRules::Age(AgeRules::new(c)),
        RuleConfiguration::Username(c) => FamilyRules::Username(UsernameRules::new(c)),
        RuleConfiguration::Password(c) => FamilyRules::Password(PasswordRules::new(c)),
        RuleConfiguration::Nickname(c) => FamilyRules::Nickname(NicknameRules::new(c)),
        RuleConfiguration::Slug(c) => FamilyRules::Slug(SlugRules::new(c)),
    }
}

/// Length bounds followed by whole-string charset membership.
pub(crate) fn base_text(min: usize, max: usize, pattern: &Regex) -> ConstraintSet<str> {
    ConstraintSet::new()
        .and(min_length(min))
        .and(max_length(max))
        .and(charset(pattern))
}

pub(crate) fn coerce_text(
    family: Family,
    constraints: &ConstraintSet<str>,
    raw: &str,
) -> Result<String, CoerceError> {
    let candidate = canonicalize(family, raw);
    if candidate.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("{} coercion produced no candidate", family);
        return Err(CoerceError::Unusable {
            family,
            input: raw.to_string(),
        });
    }

    match constraints.evaluate(&candidate).into_result() {
        Ok(()) => Ok(candidate),
        Err(failure) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("{} coercion candidate rejected: {}", family, failure);
            Err(CoerceError::Rejected {
                family,
                value: candidate,
                failure,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Reason;
    use crate::options::{
        AgeOptions, NicknameOptions, PasswordOptions, RuleOptions, SlugOptions, StrengthTier,
        UsernameOptions, resolve_options,
    };

    #[test]
    fn test_compose_defaults_for_every_family() {
        let cases = [
            (Family::Username, "valid_username", "Invalid-Username"),
            (Family::Password, "StrongP@ssw0rd!", "weakpass"),
            (Family::Nickname, "Nick Name", "n!"),
            (Family::Slug, "hello-world", "Hello World"),
        ];
        for (family, valid, invalid) in cases {
            let rules = compose(&resolve_options(RuleOptions::empty(family)));
            assert_eq!(rules.family(), family);
            assert!(rules.as_age().is_none());
            let text = rules.as_text().unwrap();
            assert!(text.evaluate(valid).is_ok(), "{} should accept {:?}", family, valid);
            assert!(!text.evaluate(invalid).is_ok(), "{} should reject {:?}", family, invalid);
        }

        let rules = compose(&resolve_options(RuleOptions::empty(Family::Age)));
        assert_eq!(rules.family(), Family::Age);
        assert!(rules.as_text().is_none());
        let age = rules.as_age().unwrap();
        assert!(age.evaluate(34.0).is_ok());
        assert_eq!(age.evaluate(151.0).reasons, vec![Reason::TooLarge { max: 150 }]);
    }

    #[test]
    fn test_compose_uses_resolved_options() {
        let username = compose(&resolve_options(RuleOptions::Username(UsernameOptions {
            min: Some(5),
            ..Default::default()
        })));
        assert_eq!(
            username.as_text().unwrap().evaluate("abcd").reasons,
            vec![Reason::TooShort { min: 5 }]
        );

        let password = compose(&resolve_options(RuleOptions::Password(PasswordOptions {
            strength: Some(StrengthTier::Weak),
            ..Default::default()
        })));
        assert!(password.as_text().unwrap().is_valid("weakpass"));

        let nickname = compose(&resolve_options(RuleOptions::Nickname(NicknameOptions {
            max: Some(4),
            ..Default::default()
        })));
        assert_eq!(
            nickname.as_text().unwrap().evaluate("nickname").reasons,
            vec![Reason::TooLong { max: 4 }]
        );

        let slug = compose(&resolve_options(RuleOptions::Slug(SlugOptions {
            max: Some(3),
            ..Default::default()
        })));
        assert!(!slug.as_text().unwrap().is_valid("abcd"));

        let age = compose(&resolve_options(RuleOptions::Age(AgeOptions {
            min: Some(18),
            max: None,
        })));
        assert_eq!(
            age.as_age().unwrap().evaluate(17.0).reasons,
            vec![Reason::TooSmall { min: 18 }]
        );
    }

    #[test]
    fn test_composed_rules_take_variants() {
        let FamilyRules::Password(password) =
            compose(&RuleConfiguration::defaults(Family::Password))
        else {
            panic!("expected password rules");
        };
        let medium = password.with_strength(StrengthTier::Medium).with_no_spaces();
        assert!(medium.is_valid("weakpass1"));
        assert!(!medium.is_valid("weak pass1"));
    }
}
