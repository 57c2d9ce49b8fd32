use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoodAdsError {
    #[error("Storage read error: {0}")]
    StorageRead(String),

    #[error("Storage write error: {0}")]
    StorageWrite(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GoodAdsError>;

impl GoodAdsError {
    /// True for errors caused by the persistence layer rather than the caller.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageRead(_) | Self::StorageWrite(_))
    }
}
