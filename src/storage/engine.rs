use crate::core::Result;
use async_trait::async_trait;

/// Key-value storage trait - allows pluggable persistence backends
///
/// Values are plain strings, matching the device key-value stores the app
/// ships against.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a single key, `None` when it was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write all pairs as one unit: either every pair becomes visible or none
    async fn multi_set(&self, pairs: &[(&str, &str)]) -> Result<()>;

    /// Drop every key (full storage reset)
    async fn remove_all(&self) -> Result<()>;
}
