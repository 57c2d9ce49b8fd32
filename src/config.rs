use crate::core::{GoodAdsError, MIN_IDENTITY_LEN, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "GOODADS_DATA_DIR";

/// Application configuration
///
/// Storage keys default to the names already present on installed devices,
/// so changing them orphans existing profiles.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the profile file
    pub data_dir: PathBuf,

    /// Profile file name inside `data_dir`
    pub file_name: String,

    /// Key of the onboarding-completed flag
    pub onboarded_key: String,

    /// Key of the persisted identity
    pub identity_key: String,

    /// Minimum identity length after trimming
    pub min_identity_len: usize,

    /// Maximum characters accepted by the identity input field
    pub max_identity_input: usize,
}

impl AppConfig {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            file_name: "goodads.json".to_string(),
            onboarded_key: "goodads_has_onboarded".to_string(),
            identity_key: "goodads_user_id".to_string(),
            min_identity_len: MIN_IDENTITY_LEN,
            max_identity_input: 15,
        }
    }

    /// Build from `GOODADS_DATA_DIR`, falling back to `./.goodads`
    pub fn from_env() -> Self {
        let dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".goodads"));
        Self::new(dir)
    }

    pub fn file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    pub fn onboarded_key(mut self, key: &str) -> Self {
        self.onboarded_key = key.to_string();
        self
    }

    pub fn identity_key(mut self, key: &str) -> Self {
        self.identity_key = key.to_string();
        self
    }

    pub fn min_identity_len(mut self, len: usize) -> Self {
        self.min_identity_len = len;
        self
    }

    pub fn max_identity_input(mut self, len: usize) -> Self {
        self.max_identity_input = len;
        self
    }

    /// Full path of the profile file
    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            return Err(GoodAdsError::InvalidConfig(
                "file name cannot be empty".to_string(),
            ));
        }

        if self.onboarded_key.is_empty() || self.identity_key.is_empty() {
            return Err(GoodAdsError::InvalidConfig(
                "storage keys cannot be empty".to_string(),
            ));
        }

        if self.onboarded_key == self.identity_key {
            return Err(GoodAdsError::InvalidConfig(format!(
                "onboarded and identity keys must differ (both '{}')",
                self.identity_key
            )));
        }

        if self.min_identity_len == 0 {
            return Err(GoodAdsError::InvalidConfig(
                "min_identity_len must be greater than 0".to_string(),
            ));
        }

        if self.max_identity_input < self.min_identity_len {
            return Err(GoodAdsError::InvalidConfig(format!(
                "max_identity_input ({}) is below min_identity_len ({})",
                self.max_identity_input, self.min_identity_len
            )));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(".goodads")
    }
}
