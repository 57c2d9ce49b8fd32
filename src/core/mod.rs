pub mod error;
pub mod types;

pub use error::{GoodAdsError, Result};
pub use types::{Identity, MIN_IDENTITY_LEN, PersistedProfile, ScoreRecord};
