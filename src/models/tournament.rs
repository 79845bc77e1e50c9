//! Tournament, TournamentStatus and TournamentError.

use crate::models::config::{ScoringType, TournamentConfig};
use crate::models::date::TournamentDate;
use crate::models::game::{DateId, GameMatch, MatchId};
use crate::models::team::Team;
use crate::store::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Tournament not found")]
    TournamentNotFound(TournamentId),
    #[error("Tournament date not found")]
    DateNotFound(DateId),
    #[error("Match not found")]
    MatchNotFound(MatchId),
    #[error("Team {0} is not part of this tournament")]
    TeamNotFound(String),
    /// Tournament or date name is blank.
    #[error("A name is required")]
    EmptyName,
    #[error("Need at least 2 teams")]
    NotEnoughTeams,
    #[error("Team names cannot be blank")]
    BlankTeamName,
    /// Team names are unique (case-sensitive) within a date.
    #[error("Duplicate team name: {0}")]
    DuplicateTeamName(String),
    #[error("Teams must be part of this tournament date: {0}")]
    TeamNotInDate(String),
    #[error("A team cannot play against itself: {0}")]
    SameTeam(String),
    #[error("Scores must be whole numbers from 0 to {max} (got {0})", max = crate::logic::MAX_SCORE)]
    InvalidScore(i64),
    #[error("Match already scheduled in this block: {0}")]
    DuplicateMatch(String),
    #[error("Match is locked")]
    MatchLocked(MatchId),
    #[error("Tournament date is closed")]
    DateClosed(DateId),
    #[error("{pending} matches are still incomplete")]
    IncompleteMatches { pending: usize },
    /// Internal consistency failure; indicates a bug, not bad input.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Coarse classification of a [`TournamentError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Invariant,
    Store,
}

impl TournamentError {
    pub fn kind(&self) -> ErrorKind {
        use TournamentError::*;
        match self {
            // A missing match is NotFound like every other missing entity, not Validation.
            TournamentNotFound(_) | DateNotFound(_) | MatchNotFound(_) | TeamNotFound(_) => {
                ErrorKind::NotFound
            }
            EmptyName
            | NotEnoughTeams
            | BlankTeamName
            | DuplicateTeamName(_)
            | TeamNotInDate(_)
            | SameTeam(_)
            | InvalidScore(_)
            | DuplicateMatch(_)
            | MatchLocked(_)
            | DateClosed(_)
            | IncompleteMatches { .. } => ErrorKind::Validation,
            InvariantViolation(_) => ErrorKind::Invariant,
            Store(_) => ErrorKind::Store,
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Created, no dates yet.
    #[default]
    Setup,
    /// At least one date added.
    Active,
    /// Winner decided.
    Completed,
    /// First place is shared and ties are not allowed; waiting for tiebreaker matches.
    Tiebreaker,
}

/// Full tournament: teams, dates and the denormalized match list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Union of every date's teams, with aggregate stats over all dates.
    pub teams: Vec<Team>,
    pub dates: Vec<TournamentDate>,
    /// Every match of every date, in date order. Rebuilt from `dates`.
    pub matches: Vec<GameMatch>,
    pub status: TournamentStatus,
    pub winner: Option<String>,
    /// Other teams sharing first place.
    pub runners: Vec<String>,
    /// Used when the whole tournament is finalized.
    pub config: TournamentConfig,
}

impl Tournament {
    /// Create a new tournament in Setup state with no dates or teams.
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            completed_at: None,
            teams: Vec::new(),
            dates: Vec::new(),
            matches: Vec::new(),
            status: TournamentStatus::Setup,
            winner: None,
            runners: Vec::new(),
            config: TournamentConfig::default(),
        }
    }

    /// Attach dates (as read from the store) and rebuild the match list.
    pub fn with_dates(mut self, dates: Vec<TournamentDate>) -> Self {
        self.dates = dates;
        self.refresh_matches();
        self
    }

    /// Rebuild the denormalized match list from the dates.
    pub fn refresh_matches(&mut self) {
        self.matches = self
            .dates
            .iter()
            .flat_map(|d| d.matches.iter().cloned())
            .collect();
    }

    pub fn date(&self, date_id: DateId) -> Result<&TournamentDate, TournamentError> {
        self.dates
            .iter()
            .find(|d| d.id == date_id)
            .ok_or(TournamentError::DateNotFound(date_id))
    }

    pub fn date_mut(&mut self, date_id: DateId) -> Result<&mut TournamentDate, TournamentError> {
        self.dates
            .iter_mut()
            .find(|d| d.id == date_id)
            .ok_or(TournamentError::DateNotFound(date_id))
    }

    /// The date that owns a match.
    pub fn date_of_match(&self, match_id: MatchId) -> Result<&TournamentDate, TournamentError> {
        self.dates
            .iter()
            .find(|d| d.matches.iter().any(|m| m.id == match_id))
            .ok_or(TournamentError::MatchNotFound(match_id))
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    /// Iterator over the matches of every date.
    pub fn all_matches(&self) -> impl Iterator<Item = &GameMatch> {
        self.dates.iter().flat_map(|d| d.matches.iter())
    }

    pub fn summary(&self) -> TournamentSummary {
        TournamentSummary {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at,
            completed_at: self.completed_at,
            winner: self.winner.clone(),
            runners: self.runners.clone(),
            total_teams: self.teams.len(),
            total_matches: self.all_matches().count(),
            kind: self.config.kind,
        }
    }
}

/// History entry for the tournament list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub id: TournamentId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub winner: Option<String>,
    pub runners: Vec<String>,
    pub total_teams: usize,
    pub total_matches: usize,
    #[serde(rename = "type")]
    pub kind: ScoringType,
}
