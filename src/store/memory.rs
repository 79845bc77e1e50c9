//! In-memory store: tournaments and dates kept in `RwLock`ed maps.

use super::{StoreError, TournamentStore};
use crate::models::{Team, Tournament, TournamentDate, TournamentId};
use std::collections::HashMap;
use std::sync::RwLock;

/// Lock order is always `tournaments` before `dates`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tournaments: RwLock<HashMap<TournamentId, Tournament>>,
    dates: RwLock<HashMap<TournamentId, Vec<TournamentDate>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TournamentStore for MemoryStore {
    fn read_tournament(&self, id: TournamentId) -> Result<Option<Tournament>, StoreError> {
        let g = self.tournaments.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(g.get(&id).cloned())
    }

    fn read_dates(&self, tournament_id: TournamentId) -> Result<Vec<TournamentDate>, StoreError> {
        let g = self.dates.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(g.get(&tournament_id).cloned().unwrap_or_default())
    }

    fn write_tournament(&self, tournament: &Tournament) -> Result<(), StoreError> {
        let mut doc = tournament.clone();
        doc.dates.clear();
        doc.matches.clear();
        let mut g = self.tournaments.write().map_err(|_| StoreError::LockPoisoned)?;
        g.insert(doc.id, doc);
        Ok(())
    }

    fn write_date(&self, tournament_id: TournamentId, date: &TournamentDate) -> Result<(), StoreError> {
        if !self
            .tournaments
            .read()
            .map_err(|_| StoreError::LockPoisoned)?
            .contains_key(&tournament_id)
        {
            return Err(StoreError::MissingTournament(tournament_id));
        }
        let mut g = self.dates.write().map_err(|_| StoreError::LockPoisoned)?;
        upsert_date(g.entry(tournament_id).or_default(), date);
        Ok(())
    }

    fn write_tournament_teams(&self, tournament_id: TournamentId, teams: &[Team]) -> Result<(), StoreError> {
        let mut g = self.tournaments.write().map_err(|_| StoreError::LockPoisoned)?;
        let t = g
            .get_mut(&tournament_id)
            .ok_or(StoreError::MissingTournament(tournament_id))?;
        t.teams = teams.to_vec();
        Ok(())
    }

    fn write_result(
        &self,
        tournament_id: TournamentId,
        date: &TournamentDate,
        teams: &[Team],
    ) -> Result<(), StoreError> {
        let mut tournaments = self.tournaments.write().map_err(|_| StoreError::LockPoisoned)?;
        let mut dates = self.dates.write().map_err(|_| StoreError::LockPoisoned)?;
        let t = tournaments
            .get_mut(&tournament_id)
            .ok_or(StoreError::MissingTournament(tournament_id))?;
        t.teams = teams.to_vec();
        upsert_date(dates.entry(tournament_id).or_default(), date);
        Ok(())
    }

    fn delete_tournament(&self, id: TournamentId) -> Result<(), StoreError> {
        let mut tournaments = self.tournaments.write().map_err(|_| StoreError::LockPoisoned)?;
        let mut dates = self.dates.write().map_err(|_| StoreError::LockPoisoned)?;
        tournaments.remove(&id);
        dates.remove(&id);
        Ok(())
    }

    fn list_tournaments(&self) -> Result<Vec<Tournament>, StoreError> {
        let g = self.tournaments.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(g.values().cloned().collect())
    }
}

fn upsert_date(dates: &mut Vec<TournamentDate>, date: &TournamentDate) {
    match dates.iter_mut().find(|d| d.id == date.id) {
        Some(existing) => *existing = date.clone(),
        None => dates.push(date.clone()),
    }
}
