//! TournamentDate: a matchday with its own teams, config and matches.

use crate::models::config::TournamentConfig;
use crate::models::game::{DateId, GameMatch};
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named sub-tournament ("Fecha 1", "Matchday 2", ...).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TournamentDate {
    pub id: DateId,
    pub tournament_id: TournamentId,
    pub name: String,
    /// Teams playing this date, in fixture order.
    pub teams: Vec<String>,
    pub config: TournamentConfig,
    pub created_at: DateTime<Utc>,
    /// Closed dates accept no further match or score changes.
    pub closed: bool,
    pub closed_at: Option<DateTime<Utc>>,
    pub matches: Vec<GameMatch>,
    pub total_matches: usize,
    pub completed_matches: usize,
    /// Holds tiebreaker matches rather than a regular fixture.
    #[serde(default)]
    pub tiebreaker: bool,
}

impl TournamentDate {
    pub fn new(
        tournament_id: TournamentId,
        name: impl Into<String>,
        teams: Vec<String>,
        config: TournamentConfig,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            name: name.into(),
            teams,
            config,
            created_at: now,
            closed: false,
            closed_at: None,
            matches: Vec::new(),
            total_matches: 0,
            completed_matches: 0,
            tiebreaker: false,
        }
    }

    pub fn has_team(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t == name)
    }

    pub fn pending_matches(&self) -> usize {
        self.matches.iter().filter(|m| !m.completed).count()
    }

    /// At least one match and none pending.
    pub fn all_matches_completed(&self) -> bool {
        !self.matches.is_empty() && self.pending_matches() == 0
    }

    /// Highest block number used so far (0 when there are no matches).
    pub fn max_block(&self) -> u32 {
        self.matches.iter().map(|m| m.block).max().unwrap_or(0)
    }

    /// Highest round number used anywhere in the date (0 when there are no matches).
    pub fn max_round(&self) -> u32 {
        self.matches.iter().map(|m| m.round).max().unwrap_or(0)
    }

    /// Recompute `total_matches` / `completed_matches` from the match list.
    pub fn refresh_counters(&mut self) {
        self.total_matches = self.matches.len();
        self.completed_matches = self.matches.iter().filter(|m| m.completed).count();
    }
}
