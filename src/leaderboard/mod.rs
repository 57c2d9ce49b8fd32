//! Leaderboard ordering and rank presentation.

pub mod marker;
pub mod ranking;
pub mod source;

pub use marker::RankMarker;
pub use ranking::{RankedRow, rank};
pub use source::{ScoreSource, StaticScoreSource};

use crate::core::Result;
use crate::identity::IdentityStore;
use crate::storage::KeyValueStore;
use log::warn;

/// Fetch records from `source` and rank them against the stored identity.
///
/// Failing to read the identity only loses the "(You)" highlight, so it is
/// logged and the board is ranked without a current user. Source errors are
/// returned.
pub async fn load_leaderboard<S, Src>(
    source: &Src,
    store: &IdentityStore<S>,
) -> Result<Vec<RankedRow>>
where
    S: KeyValueStore,
    Src: ScoreSource + ?Sized,
{
    let records = source.fetch().await?;
    let current = match store.get_identity().await {
        Ok(identity) => identity,
        Err(err) => {
            warn!("leaderboard ranked without current user: error='{}'", err);
            None
        }
    };
    Ok(rank(records, current.as_deref()))
}
