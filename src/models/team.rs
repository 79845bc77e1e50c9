//! Team and its aggregate statistics.

use crate::models::config::ScoringType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (stable across recomputes).
pub type TeamId = Uuid;

/// A team in the tournament with its aggregate stats.
///
/// Stats are always derived from match history by the standings calculator;
/// nothing patches them incrementally after a correction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub matches_played: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

impl Team {
    /// Create a new team with the given name. Stats start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    pub fn with_id(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            points: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            matches_played: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
        }
    }

    /// Same identity, all stats zeroed.
    pub fn reset(&self) -> Self {
        Self::with_id(self.id, self.name.clone())
    }

    /// Value that ranks the team first: points or wins depending on scoring.
    pub fn primary_score(&self, kind: ScoringType) -> u32 {
        match kind {
            ScoringType::Points => self.points,
            ScoringType::Wins => self.wins,
        }
    }

    pub(crate) fn add_goals(&mut self, scored: u32, conceded: u32) {
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;
    }

    pub(crate) fn add_win(&mut self, kind: ScoringType) {
        self.wins += 1;
        if kind == ScoringType::Points {
            self.points += 3;
        }
    }

    pub(crate) fn add_draw(&mut self, kind: ScoringType) {
        self.draws += 1;
        if kind == ScoringType::Points {
            self.points += 1;
        }
    }

    pub(crate) fn add_loss(&mut self) {
        self.losses += 1;
    }
}
