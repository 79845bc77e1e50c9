//! Match (game), its result, and the fixture pairing it is created from.

use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Unique identifier for a date (matchday).
pub type DateId = Uuid;

/// Outcome of a played match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Team1,
    Team2,
    Draw,
}

impl MatchResult {
    /// Result implied by a score line.
    pub fn from_scores<T: Ord>(team1_score: T, team2_score: T) -> Self {
        use std::cmp::Ordering::*;
        match team1_score.cmp(&team2_score) {
            Greater => MatchResult::Team1,
            Less => MatchResult::Team2,
            Equal => MatchResult::Draw,
        }
    }
}

/// Kind of playoff match; regular fixture matches have none.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayoffType {
    Tiebreaker,
}

/// One generated fixture slot: who plays whom, in which round of which block.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub team1: String,
    pub team2: String,
    /// 1-based ordinal within the date.
    pub round: u32,
    pub block: u32,
}

impl Pairing {
    pub fn new(team1: impl Into<String>, team2: impl Into<String>, round: u32, block: u32) -> Self {
        Self {
            team1: team1.into(),
            team2: team2.into(),
            round,
            block,
        }
    }

    /// Order-independent key: A-B and B-A are the same pair.
    pub fn unordered_key(&self) -> (&str, &str) {
        unordered_key(&self.team1, &self.team2)
    }
}

pub(crate) fn unordered_key<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// A single match between two teams of a date.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub date_id: DateId,
    pub team1: String,
    pub team2: String,
    pub round: u32,
    /// Fixture generation this match belongs to.
    pub block: u32,
    /// Frozen because a later block replayed this one.
    pub locked: bool,
    pub completed: bool,
    /// None if not yet played.
    pub result: Option<MatchResult>,
    pub team1_score: Option<u32>,
    pub team2_score: Option<u32>,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub playoff: Option<PlayoffType>,
}

impl GameMatch {
    pub fn new(tournament_id: TournamentId, date_id: DateId, pairing: Pairing) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            date_id,
            team1: pairing.team1,
            team2: pairing.team2,
            round: pairing.round,
            block: pairing.block,
            locked: false,
            completed: false,
            result: None,
            team1_score: None,
            team2_score: None,
            completed_at: None,
            playoff: None,
        }
    }

    pub fn pairing(&self) -> Pairing {
        Pairing::new(self.team1.clone(), self.team2.clone(), self.round, self.block)
    }

    /// Store a result; overwrites a previous one (corrections are allowed until locked).
    pub(crate) fn record(
        &mut self,
        result: MatchResult,
        team1_score: u32,
        team2_score: u32,
        at: DateTime<Utc>,
    ) {
        self.result = Some(result);
        self.team1_score = Some(team1_score);
        self.team2_score = Some(team2_score);
        self.completed = true;
        self.completed_at = Some(at);
    }
}
