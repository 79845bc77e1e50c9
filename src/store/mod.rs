//! Persistent store collaborator: documents for tournaments and their dates.
//!
//! The session does whole-document read-modify-write against this trait; last write wins.

mod memory;

pub use memory::MemoryStore;

use crate::models::{Team, Tournament, TournamentDate, TournamentId};
use thiserror::Error;

/// Failures of the store itself. Propagated unchanged, never retried here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    LockPoisoned,
    #[error("tournament {0} does not exist in the store")]
    MissingTournament(TournamentId),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub trait TournamentStore: Send + Sync {
    /// Tournament document without its dates (`dates` and `matches` empty).
    fn read_tournament(&self, id: TournamentId) -> Result<Option<Tournament>, StoreError>;

    /// Dates of a tournament in creation order.
    fn read_dates(&self, tournament_id: TournamentId) -> Result<Vec<TournamentDate>, StoreError>;

    /// Upsert the tournament document. Dates are stored separately and ignored here.
    fn write_tournament(&self, tournament: &Tournament) -> Result<(), StoreError>;

    /// Upsert a date, replacing its matches and counters.
    fn write_date(&self, tournament_id: TournamentId, date: &TournamentDate) -> Result<(), StoreError>;

    fn write_tournament_teams(&self, tournament_id: TournamentId, teams: &[Team]) -> Result<(), StoreError>;

    /// Upsert a date and replace the tournament's team stats as one write: either both
    /// land or neither does.
    fn write_result(
        &self,
        tournament_id: TournamentId,
        date: &TournamentDate,
        teams: &[Team],
    ) -> Result<(), StoreError>;

    /// Remove a tournament and all its dates. Unknown ids are not an error.
    fn delete_tournament(&self, id: TournamentId) -> Result<(), StoreError>;

    /// Every tournament document, in no particular order.
    fn list_tournaments(&self) -> Result<Vec<Tournament>, StoreError>;
}
