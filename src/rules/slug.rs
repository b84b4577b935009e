//! Slug rules: lowercase alphanumeric words joined by single hyphens.

use crate::constraint::ConstraintSet;
use crate::options::{Family, SlugConfig};
use crate::patterns::SLUG_CHARSET;

use super::{Rules, base_text};

#[derive(Debug, Clone)]
pub struct SlugRules {
    config: SlugConfig,
    constraints: ConstraintSet<str>,
}

impl SlugRules {
    pub fn new(config: &SlugConfig) -> Self {
        Self {
            config: *config,
            constraints: base_text(config.min, config.max, &SLUG_CHARSET),
        }
    }

    pub fn config(&self) -> &SlugConfig {
        &self.config
    }
}

impl Default for SlugRules {
    fn default() -> Self {
        Self::new(&SlugConfig::default())
    }
}

impl Rules for SlugRules {
    fn family(&self) -> Family {
        Family::Slug
    }

    fn constraints(&self) -> &ConstraintSet<str> {
        &self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoerceError;
    use crate::options::SlugOptions;

    #[test]
    fn test_valid_slugs() {
        let rules = SlugRules::default();
        for slug in [
            "valid-slug",
            "another-valid-slug-123",
            "slug-with-multiple-parts",
            "a",
            "z-0-9",
            "123",
            "1",
            "very-long-slug-with-many-parts-and-numbers-123",
        ] {
            assert!(rules.is_valid(slug), "expected {:?} to pass", slug);
        }
    }

    #[test]
    fn test_invalid_slugs() {
        let rules = SlugRules::default();
        for slug in [
            "Invalid-Slug",
            "invalid_slug",
            "invalid slug",
            "invalid@slug!",
            "",
            "-leading-hyphen",
            "trailing-hyphen-",
            "double--hyphen",
            "with/slash",
            "with.dot",
            "with..dot",
            "-",
            "Café",
            "سلام",
            " leading-space",
            "trailing-space ",
        ] {
            assert!(!rules.is_valid(slug), "expected {:?} to fail", slug);
        }
    }

    #[test]
    fn test_coerce() {
        let rules = SlugRules::default();
        assert_eq!(rules.coerce("Café Éclair").unwrap(), "cafe-eclair");
        assert_eq!(rules.coerce("slug--double").unwrap(), "slug-double");
        assert!(rules.is_valid("slug-double"));
    }

    #[test]
    fn test_coerce_to_empty_fails() {
        let rules = SlugRules::default();
        for raw in ["", "   ", "---", "@#!$"] {
            assert!(
                matches!(rules.coerce(raw), Err(CoerceError::Unusable { family: Family::Slug, .. })),
                "expected {:?} to fail",
                raw
            );
        }
    }

    #[test]
    fn test_coerce_respects_length() {
        let config = SlugOptions {
            max: Some(5),
            ..Default::default()
        }
        .resolve();
        let rules = SlugRules::new(&config);
        assert_eq!(rules.coerce("Hi Yo").unwrap(), "hi-yo");
        let err = rules.coerce("Hi There").unwrap_err();
        assert!(matches!(err, CoerceError::Rejected { ref value, .. } if value == "hi-there"));
        assert_eq!(err.reasons(), &[crate::constraint::Reason::TooLong { max: 5 }]);
    }
}
