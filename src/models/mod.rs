//! Data structures for the football tournament: teams, matches, dates, tournament state.

mod config;
mod date;
mod game;
mod team;
mod tournament;

pub use config::{ScoringType, TournamentConfig};
pub use date::TournamentDate;
pub use game::{DateId, GameMatch, MatchId, MatchResult, Pairing, PlayoffType};
pub use team::{Team, TeamId};
pub use tournament::{
    ErrorKind, Tournament, TournamentError, TournamentId, TournamentStatus, TournamentSummary,
};

pub(crate) use game::unordered_key;
