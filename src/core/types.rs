use super::{GoodAdsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum identity length, counted in characters after trimming.
pub const MIN_IDENTITY_LEN: usize = 3;

/// A validated, trimmed pseudonymous identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with_min_len(raw, MIN_IDENTITY_LEN)
    }

    pub fn parse_with_min_len(raw: &str, min_len: usize) -> Result<Self> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len == 0 {
            return Err(GoodAdsError::Validation(
                "identity must not be empty".to_string(),
            ));
        }
        if len < min_len {
            return Err(GoodAdsError::Validation(format!(
                "identity '{}' is {} characters long, at least {} required",
                trimmed, len, min_len
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Durable onboarding record.
///
/// `identity` is `Some` exactly when `completed` is true; use
/// [`PersistedProfile::completed`] to build the only non-empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedProfile {
    pub completed: bool,
    pub identity: Option<String>,
}

impl PersistedProfile {
    pub fn completed(identity: Identity) -> Self {
        Self {
            completed: true,
            identity: Some(identity.into_inner()),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.completed == self.identity.is_some()
    }
}

/// One leaderboard entry as delivered by a score source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(alias = "id")]
    pub identity: String,
    pub score: u64,
}

impl ScoreRecord {
    pub fn new(identity: impl Into<String>, score: u64) -> Self {
        Self {
            identity: identity.into(),
            score,
        }
    }
}
