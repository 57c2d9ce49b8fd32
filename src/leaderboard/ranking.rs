use super::RankMarker;
use crate::core::ScoreRecord;

/// A score record with its leaderboard position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRow {
    /// 1-based, unique per row
    pub rank: usize,
    pub identity: String,
    pub score: u64,
    pub is_current_user: bool,
}

impl RankedRow {
    pub fn marker(&self) -> RankMarker {
        RankMarker::for_rank(self.rank)
    }

    /// Identity as shown in the list, tagged for the current user
    pub fn display_name(&self) -> String {
        if self.is_current_user {
            format!("{} (You)", self.identity)
        } else {
            self.identity.clone()
        }
    }
}

/// Order records by score, highest first, and number them from 1.
///
/// Equal scores keep their input order and still get consecutive ranks.
/// Rows whose identity equals `current_identity` exactly are flagged.
pub fn rank<I>(records: I, current_identity: Option<&str>) -> Vec<RankedRow>
where
    I: IntoIterator<Item = ScoreRecord>,
{
    let mut records: Vec<ScoreRecord> = records.into_iter().collect();
    // stable sort
    records.sort_by(|a, b| b.score.cmp(&a.score));

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let is_current_user = current_identity == Some(record.identity.as_str());
            RankedRow {
                rank: index + 1,
                identity: record.identity,
                score: record.score,
                is_current_user,
            }
        })
        .collect()
}
