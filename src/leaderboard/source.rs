use crate::core::{GoodAdsError, Result, ScoreRecord};
use async_trait::async_trait;

/// Where leaderboard records come from.
#[async_trait]
pub trait ScoreSource: Send + Sync {
    /// Fetch the records in whatever order the source keeps them
    async fn fetch(&self) -> Result<Vec<ScoreRecord>>;
}

/// Fixed record set, e.g. the bundled demo board or a JSON file.
#[derive(Debug, Clone, Default)]
pub struct StaticScoreSource {
    records: Vec<ScoreRecord>,
}

impl StaticScoreSource {
    pub fn new(records: Vec<ScoreRecord>) -> Self {
        Self { records }
    }

    /// The board shipped with the app until a backend exists
    pub fn demo() -> Self {
        let records = [
            ("HappyPanda-92", 1540),
            ("SwiftEagle-04", 1200),
            ("NobleBadger-33", 980),
            ("BraveHelper-12", 850),
            ("WittyWatcher-09", 720),
            ("CalmGiver-55", 600),
            ("EagerKnight-88", 450),
            ("HappyWizard-21", 300),
        ]
        .into_iter()
        .map(|(identity, score)| ScoreRecord::new(identity, score))
        .collect();
        Self::new(records)
    }

    /// Parse a JSON array of `{"identity"|"id": ..., "score": ...}` objects
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ScoreRecord> = serde_json::from_str(json).map_err(|e| {
            GoodAdsError::StorageRead(format!("Failed to parse score records: {}", e))
        })?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }
}

#[async_trait]
impl ScoreSource for StaticScoreSource {
    async fn fetch(&self) -> Result<Vec<ScoreRecord>> {
        Ok(self.records.clone())
    }
}
