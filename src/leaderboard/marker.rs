use std::fmt;

/// Visual treatment of a rank. Depends on the rank alone, never the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMarker {
    Gold,
    Silver,
    Bronze,
    Numeral(usize),
}

impl RankMarker {
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => RankMarker::Gold,
            2 => RankMarker::Silver,
            3 => RankMarker::Bronze,
            n => RankMarker::Numeral(n),
        }
    }

    /// Symbol name for the icon renderer; numerals render as text instead
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            RankMarker::Gold => Some("trophy.fill"),
            RankMarker::Silver | RankMarker::Bronze => Some("medal.fill"),
            RankMarker::Numeral(_) => None,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RankMarker::Gold => "#FFD700",
            RankMarker::Silver => "#C0C0C0",
            RankMarker::Bronze => "#CD7F32",
            RankMarker::Numeral(_) => "#888888",
        }
    }

    pub fn is_medal(&self) -> bool {
        !matches!(self, RankMarker::Numeral(_))
    }
}

impl fmt::Display for RankMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankMarker::Gold => f.write_str("gold"),
            RankMarker::Silver => f.write_str("silver"),
            RankMarker::Bronze => f.write_str("bronze"),
            RankMarker::Numeral(n) => write!(f, "#{}", n),
        }
    }
}
