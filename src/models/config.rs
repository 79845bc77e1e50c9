//! Scoring configuration for a tournament or a single date.

use serde::{Deserialize, Serialize};

/// How a table is ranked.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringType {
    /// 3 points per win, 1 per draw.
    #[default]
    Points,
    /// Only wins count; draws are worth nothing.
    Wins,
}

/// The only configuration the fixture and standings logic honors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    #[serde(rename = "type")]
    pub kind: ScoringType,
    /// Accept a shared first place instead of asking for a tiebreaker.
    pub allow_tie: bool,
    /// Flag the date as ready to close once every match has a result.
    pub require_all_matches: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            kind: ScoringType::Points,
            allow_tie: true,
            require_all_matches: false,
        }
    }
}

impl TournamentConfig {
    pub fn points() -> Self {
        Self::default()
    }

    pub fn wins() -> Self {
        Self {
            kind: ScoringType::Wins,
            ..Self::default()
        }
    }

    /// Same config with `allow_tie` replaced.
    pub fn with_allow_tie(self, allow_tie: bool) -> Self {
        Self { allow_tie, ..self }
    }

    pub fn with_require_all_matches(self, require_all_matches: bool) -> Self {
        Self {
            require_all_matches,
            ..self
        }
    }
}
