use crate::config::AppConfig;
use crate::core::{GoodAdsError, Identity, PersistedProfile, Result};
use crate::storage::KeyValueStore;
use log::warn;

const ONBOARDED_VALUE: &str = "true";

/// Onboarding flag and identity on top of a key-value backend.
pub struct IdentityStore<S> {
    backend: S,
    onboarded_key: String,
    identity_key: String,
    min_identity_len: usize,
}

impl<S: KeyValueStore> IdentityStore<S> {
    /// Store using the default key layout
    pub fn new(backend: S) -> Self {
        Self::with_config(backend, &AppConfig::default())
    }

    pub fn with_config(backend: S, config: &AppConfig) -> Self {
        Self {
            backend,
            onboarded_key: config.onboarded_key.clone(),
            identity_key: config.identity_key.clone(),
            min_identity_len: config.min_identity_len.max(1),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn min_identity_len(&self) -> usize {
        self.min_identity_len
    }

    /// Whether onboarding finished. Only the exact value `"true"` counts.
    ///
    /// On error the caller should act as if this returned `false`.
    pub async fn is_onboarded(&self) -> Result<bool> {
        let value = self
            .backend
            .get(&self.onboarded_key)
            .await
            .map_err(into_read_error)?;
        Ok(value.as_deref() == Some(ONBOARDED_VALUE))
    }

    /// Validate `raw` and persist it together with the completion flag.
    ///
    /// Returns the trimmed identity that was stored. A validation failure
    /// leaves storage untouched.
    pub async fn complete_onboarding(&self, raw: &str) -> Result<Identity> {
        let identity = Identity::parse_with_min_len(raw, self.min_identity_len)?;

        self.backend
            .multi_set(&[
                (self.onboarded_key.as_str(), ONBOARDED_VALUE),
                (self.identity_key.as_str(), identity.as_str()),
            ])
            .await
            .map_err(into_write_error)?;

        Ok(identity)
    }

    pub async fn get_identity(&self) -> Result<Option<String>> {
        self.backend
            .get(&self.identity_key)
            .await
            .map_err(into_read_error)
    }

    /// Read both fields and check they agree.
    ///
    /// An identity without the flag is treated as never completed, since the
    /// flag is what gates the rest of the app. A flag without identity is
    /// corruption and reported as a read error.
    pub async fn profile(&self) -> Result<PersistedProfile> {
        let completed = self.is_onboarded().await?;
        let identity = self.get_identity().await?;

        match (completed, identity) {
            (true, Some(identity)) => Ok(PersistedProfile {
                completed: true,
                identity: Some(identity),
            }),
            (true, None) => Err(GoodAdsError::StorageRead(format!(
                "'{}' is set but '{}' is missing",
                self.onboarded_key, self.identity_key
            ))),
            (false, Some(identity)) => {
                warn!(
                    "ignoring identity without completion flag: key='{}' identity='{}'",
                    self.identity_key, identity
                );
                Ok(PersistedProfile::default())
            }
            (false, None) => Ok(PersistedProfile::default()),
        }
    }

    /// Wipe every key. Models the external full-storage reset.
    pub async fn reset(&self) -> Result<()> {
        self.backend.remove_all().await.map_err(into_write_error)
    }
}

impl<S> IdentityStore<S> {
    pub fn onboarded_key(&self) -> &str {
        &self.onboarded_key
    }

    pub fn identity_key(&self) -> &str {
        &self.identity_key
    }
}

fn into_read_error(err: GoodAdsError) -> GoodAdsError {
    match err {
        GoodAdsError::StorageRead(_) => err,
        other => GoodAdsError::StorageRead(other.to_string()),
    }
}

fn into_write_error(err: GoodAdsError) -> GoodAdsError {
    match err {
        GoodAdsError::StorageWrite(_) => err,
        other => GoodAdsError::StorageWrite(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    #[tokio::test]
    async fn test_fresh_store() {
        let store = IdentityStore::new(InMemoryStore::new());
        assert!(!store.is_onboarded().await.unwrap());
        assert_eq!(store.get_identity().await.unwrap(), None);
        assert_eq!(store.profile().await.unwrap(), PersistedProfile::default());
    }

    #[tokio::test]
    async fn test_complete_onboarding_round_trip() {
        let store = IdentityStore::new(InMemoryStore::new());
        let stored = store.complete_onboarding("  NobleBadger-33 ").await.unwrap();

        assert_eq!(stored.as_str(), "NobleBadger-33");
        assert!(store.is_onboarded().await.unwrap());
        assert_eq!(
            store.get_identity().await.unwrap().as_deref(),
            Some("NobleBadger-33")
        );
    }

    #[tokio::test]
    async fn test_short_identity_leaves_storage_untouched() {
        let store = IdentityStore::new(InMemoryStore::new());
        let result = store.complete_onboarding(" ab ").await;

        assert!(matches!(result, Err(GoodAdsError::Validation(_))));
        assert!(!store.is_onboarded().await.unwrap());
        assert!(store.backend().is_empty().await);
    }

    #[tokio::test]
    async fn test_only_exact_true_counts() {
        for value in ["TRUE", "1", "yes", "true ", ""] {
            let backend = InMemoryStore::with_entries([("goodads_has_onboarded", value)]);
            let store = IdentityStore::new(backend);
            assert!(!store.is_onboarded().await.unwrap(), "value {:?}", value);
        }
    }

    #[tokio::test]
    async fn test_profile_flag_without_identity_is_read_error() {
        let backend = InMemoryStore::with_entries([("goodads_has_onboarded", "true")]);
        let store = IdentityStore::new(backend);
        assert!(matches!(
            store.profile().await,
            Err(GoodAdsError::StorageRead(_))
        ));
    }

    #[tokio::test]
    async fn test_profile_identity_without_flag_is_not_completed() {
        let backend = InMemoryStore::with_entries([("goodads_user_id", "CalmGiver-55")]);
        let store = IdentityStore::new(backend);
        assert_eq!(store.profile().await.unwrap(), PersistedProfile::default());
    }

    #[tokio::test]
    async fn test_custom_keys_and_min_len() {
        let config = AppConfig::default()
            .onboarded_key("done")
            .identity_key("who")
            .min_identity_len(5);
        let store = IdentityStore::with_config(InMemoryStore::new(), &config);

        assert!(store.complete_onboarding("abcd").await.is_err());
        store.complete_onboarding("abcde").await.unwrap();
        assert_eq!(
            store.backend().get("who").await.unwrap().as_deref(),
            Some("abcde")
        );
        assert_eq!(
            store.backend().get("done").await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn test_reset_clears_profile() {
        let store = IdentityStore::new(InMemoryStore::new());
        store.complete_onboarding("EagerKnight-88").await.unwrap();
        store.reset().await.unwrap();
        assert!(!store.is_onboarded().await.unwrap());
        assert_eq!(store.get_identity().await.unwrap(), None);
    }
}
