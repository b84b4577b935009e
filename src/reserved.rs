//! Reserved username matching.
//!
//! A [`ReservedMatcher`] recognizes a reserved root word plus its common
//! decorations, case-insensitively:
//!
//! - exact match: `admin`, `Root`
//! - numeric suffix: `admin1`, `root123` (when `min_numeric_suffix_length > 0`)
//! - underscore suffix: `admin_team` (unless `allow_underscore_suffix` is set)

use regex::{Regex, RegexBuilder};

use crate::error::ConfigError;

/// Base words blocked by default.
pub const RESERVED_USERNAMES: &[&str] = &[
    "admin",
    "administrator",
    "root",
    "system",
    "sysadmin",
    "superuser",
    "support",
    "help",
    "helpdesk",
    "moderator",
    "staff",
    "owner",
    "official",
    "security",
    "webmaster",
    "hostmaster",
    "postmaster",
    "mailer",
    "noreply",
    "abuse",
    "billing",
    "api",
    "www",
    "null",
    "undefined",
    "anonymous",
    "everyone",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedOptions {
    /// Additional base words, merged with [`RESERVED_USERNAMES`].
    pub extra: Vec<String>,
    /// Minimum digit count of a numeric suffix still treated as reserved.
    /// `0` disables numeric suffix matching.
    pub min_numeric_suffix_length: usize,
    /// When true, `word_suffix` names are allowed through; when false they
    /// are blocked as variants of `word`.
    pub allow_underscore_suffix: bool,
}

impl Default for ReservedOptions {
    fn default() -> Self {
        Self {
            extra: Vec::new(),
            min_numeric_suffix_length: 1,
            allow_underscore_suffix: false,
        }
    }
}

/// Matches reserved words and their suffix variants.
#[derive(Debug, Clone)]
pub struct ReservedMatcher {
    regex: Option<Regex>,
}

impl ReservedMatcher {
    pub fn build(options: &ReservedOptions) -> Result<Self, ConfigError> {
        let words = reserved_words(options);
        Self::build_from(&words, options)
    }

    /// Builds a matcher over `words` only, ignoring [`RESERVED_USERNAMES`] and
    /// `options.extra`.
    pub fn build_from<S: AsRef<str>>(
        words: &[S],
        options: &ReservedOptions,
    ) -> Result<Self, ConfigError> {
        let words = dedup(words.iter().map(|w| w.as_ref()));
        if words.is_empty() {
            return Ok(Self { regex: None });
        }

        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");

        let mut pattern = format!("^(?:{})", alternation);
        if options.min_numeric_suffix_length > 0 {
            pattern.push_str(&format!("(?:[0-9]{{{},}})?", options.min_numeric_suffix_length));
        }
        if !options.allow_underscore_suffix {
            pattern.push_str("(?:_[a-z0-9]+)?");
        }
        pattern.push('$');

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(ConfigError::ReservedMatcher)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("Reserved matcher built over {} words", words.len());

        Ok(Self { regex: Some(regex) })
    }

    /// Returns `true` if `candidate` is reserved.
    pub fn test(&self, candidate: &str) -> bool {
        self.regex
            .as_ref()
            .map(|r| r.is_match(candidate))
            .unwrap_or(false)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }
}

/// Default words merged with `options.extra`, duplicates removed.
pub fn reserved_words(options: &ReservedOptions) -> Vec<String> {
    dedup(
        RESERVED_USERNAMES
            .iter()
            .copied()
            .chain(options.extra.iter().map(String::as_str)),
    )
}

fn dedup<'a>(words: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    for word in words.map(str::trim).filter(|w| !w.is_empty()) {
        if !seen.iter().any(|s: &String| s == word) {
            seen.push(word.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_matcher() -> ReservedMatcher {
        ReservedMatcher::build(&ReservedOptions::default()).unwrap()
    }

    #[test]
    fn test_exact_and_numeric_suffix_are_reserved() {
        let matcher = default_matcher();
        assert!(matcher.test("admin"));
        assert!(matcher.test("admin1"));
        assert!(matcher.test("admin123"));
        assert!(matcher.test("root7"));
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = default_matcher();
        assert!(matcher.test("ADMIN"));
        assert!(matcher.test("Admin_Team"));
    }

    #[test]
    fn test_unrelated_names_pass() {
        let matcher = default_matcher();
        assert!(!matcher.test("alice"));
        assert!(!matcher.test("administrators_guild!"));
        assert!(!matcher.test("myadmin"));
        assert!(!matcher.test("admin-team"));
    }

    #[test]
    fn test_underscore_suffix_blocked_by_default() {
        assert!(default_matcher().test("admin_team"));
    }

    #[test]
    fn test_underscore_suffix_allowed_when_enabled() {
        let matcher = ReservedMatcher::build(&ReservedOptions {
            allow_underscore_suffix: true,
            ..Default::default()
        })
        .unwrap();
        assert!(!matcher.test("admin_team"));
        assert!(matcher.test("admin"));
        assert!(matcher.test("admin42"));
    }

    #[test]
    fn test_numeric_suffix_length() {
        let matcher = ReservedMatcher::build(&ReservedOptions {
            min_numeric_suffix_length: 3,
            ..Default::default()
        })
        .unwrap();
        assert!(matcher.test("admin123"));
        assert!(matcher.test("admin1234"));
        assert!(!matcher.test("admin1"));
        assert!(!matcher.test("admin12"));

        let disabled = ReservedMatcher::build(&ReservedOptions {
            min_numeric_suffix_length: 0,
            ..Default::default()
        })
        .unwrap();
        assert!(disabled.test("admin"));
        assert!(!disabled.test("admin1"));
    }

    #[test]
    fn test_extra_words_are_merged_and_escaped() {
        let matcher = ReservedMatcher::build(&ReservedOptions {
            extra: vec!["acme".into(), "c++".into(), "admin".into()],
            ..Default::default()
        })
        .unwrap();
        assert!(matcher.test("acme"));
        assert!(matcher.test("Acme2"));
        assert!(matcher.test("c++"));
        assert!(!matcher.test("ccc"));
        assert!(matcher.test("admin"));
    }

    #[test]
    fn test_word_set_is_deduplicated() {
        let words = reserved_words(&ReservedOptions {
            extra: vec!["admin".into(), "acme".into(), "acme".into(), "  ".into()],
            ..Default::default()
        });
        assert_eq!(words.len(), RESERVED_USERNAMES.len() + 1);
        assert_eq!(words.iter().filter(|w| *w == "acme").count(), 1);
    }

    #[test]
    fn test_empty_word_set_matches_nothing() {
        let empty: [&str; 0] = [];
        let matcher = ReservedMatcher::build_from(&empty, &ReservedOptions::default()).unwrap();
        assert!(matcher.as_str().is_none());
        assert!(!matcher.test(""));
        assert!(!matcher.test("admin"));
    }

    #[test]
    fn test_pattern_shape() {
        let matcher = ReservedMatcher::build_from(&["a.b"], &ReservedOptions::default()).unwrap();
        assert_eq!(matcher.as_str(), Some(r"^(?:a\.b)(?:[0-9]{1,})?(?:_[a-z0-9]+)?$"));
    }
}
