//! Common password list
//!
//! Loads and queries the set of passwords rejected by
//! [`PasswordRules::with_no_common`](crate::PasswordRules::with_no_common).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Environment variable holding the path of the common password file.
pub const COMMON_PASSWORDS_PATH_VAR: &str = "VALIKIT_COMMON_PASSWORDS_PATH";

const DEFAULT_COMMON_PASSWORDS_PATH: &str = "./assets/common-passwords.txt";

#[derive(Error, Debug)]
pub enum CommonPasswordsError {
    #[error("Common password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password file is empty")]
    EmptyFile,
}

/// A case-folded set of common passwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonPasswords {
    words: HashSet<String>,
}

impl CommonPasswords {
    /// Builds the set from `words`, trimmed and lowercased. Blank entries are
    /// dropped.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Loads the set from the file named by [`COMMON_PASSWORDS_PATH_VAR`].
    ///
    /// Falls back to `./assets/common-passwords.txt` when the variable is
    /// unset.
    pub fn from_env() -> Result<Self, CommonPasswordsError> {
        Self::from_path(common_passwords_path())
    }

    /// Loads the set from a newline-delimited file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CommonPasswordsError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list not found: {:?}", path);
            return Err(CommonPasswordsError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list is empty: {:?}", path);
            return Err(CommonPasswordsError::EmptyFile);
        }

        let list = Self::new(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Common password list loaded: {} entries from {:?}", list.len(), path);

        Ok(list)
    }

    /// Returns `true` if `password` is in the set (case-insensitive).
    pub fn contains(&self, password: &str) -> bool {
        self.words.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Returns the common password file path.
///
/// Priority:
/// 1. Environment variable `VALIKIT_COMMON_PASSWORDS_PATH`
/// 2. Default path `./assets/common-passwords.txt`
pub fn common_passwords_path() -> PathBuf {
    std::env::var(COMMON_PASSWORDS_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_COMMON_PASSWORDS_PATH))
}
