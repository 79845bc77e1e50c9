//! Session: every user action as one read-modify-write against the store.
//!
//! Each operation loads the tournament with all its dates, applies the change to that
//! in-memory copy through [`crate::logic`], and writes back only once the whole change
//! (standings recompute included) has succeeded.

use crate::logic::{self, FinalResult};
use crate::models::{
    DateId, GameMatch, MatchId, MatchResult, Team, Tournament, TournamentConfig, TournamentDate,
    TournamentError, TournamentId, TournamentSummary,
};
use crate::store::TournamentStore;
use chrono::Utc;

pub struct Session<S> {
    store: S,
}

impl<S: TournamentStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// New tournament with no dates or teams.
    pub fn create_tournament(&self, name: &str) -> Result<Tournament, TournamentError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let tournament = Tournament::new(name, Utc::now());
        self.store.write_tournament(&tournament)?;
        log::info!("Created tournament {} ({})", tournament.name, tournament.id);
        Ok(tournament)
    }

    /// Tournament with all its dates and the denormalized match list.
    pub fn load_tournament(&self, id: TournamentId) -> Result<Tournament, TournamentError> {
        let tournament = self
            .store
            .read_tournament(id)?
            .ok_or(TournamentError::TournamentNotFound(id))?;
        let dates = self.store.read_dates(id)?;
        Ok(tournament.with_dates(dates))
    }

    /// History, newest first.
    pub fn list_tournaments(&self) -> Result<Vec<TournamentSummary>, TournamentError> {
        let mut summaries = Vec::new();
        for t in self.store.list_tournaments()? {
            let dates = self.store.read_dates(t.id)?;
            summaries.push(t.with_dates(dates).summary());
        }
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    pub fn delete_tournament(&self, id: TournamentId) -> Result<(), TournamentError> {
        if self.store.read_tournament(id)?.is_none() {
            return Err(TournamentError::TournamentNotFound(id));
        }
        self.store.delete_tournament(id)?;
        log::info!("Deleted tournament {}", id);
        Ok(())
    }

    pub fn add_date(
        &self,
        id: TournamentId,
        name: &str,
        teams: &[String],
        config: TournamentConfig,
    ) -> Result<TournamentDate, TournamentError> {
        let mut tournament = self.load_tournament(id)?;
        let date_id = logic::add_date(&mut tournament, name, teams, config, Utc::now())?;
        let date = tournament.date(date_id)?;

        self.store.write_date(id, date)?;
        self.store.write_tournament(&tournament)?;
        log::info!(
            "Added date {} with {} teams to tournament {}",
            date.name,
            date.teams.len(),
            id
        );
        Ok(date.clone())
    }

    /// First fixture of a date, or a replay of its latest block once every match is played.
    pub fn generate_matches(&self, id: TournamentId, date_id: DateId) -> Result<TournamentDate, TournamentError> {
        let mut tournament = self.load_tournament(id)?;
        let date = tournament.date_mut(date_id)?;
        if date.closed {
            return Err(TournamentError::DateClosed(date_id));
        }

        let plan = logic::plan_replay(date)?;
        logic::apply_plan(date, &plan)?;
        self.store.write_date(id, date)?;

        if plan.replay {
            log::info!(
                "Date {}: replayed block {} as block {} ({} matches locked)",
                date.name,
                plan.block - 1,
                plan.block,
                plan.matches_to_lock.len()
            );
        } else {
            log::info!(
                "Date {}: generated block {} with {} matches",
                date.name,
                plan.block,
                plan.new_block_matches.len()
            );
        }
        Ok(date.clone())
    }

    pub fn add_match(
        &self,
        id: TournamentId,
        date_id: DateId,
        team1: &str,
        team2: &str,
    ) -> Result<GameMatch, TournamentError> {
        let mut tournament = self.load_tournament(id)?;
        let date = tournament.date_mut(date_id)?;
        let match_id = logic::add_manual_match(date, team1.trim(), team2.trim())?;
        self.store.write_date(id, date)?;
        find_match(date, match_id)
    }

    /// Record or correct a result and recompute the whole tournament table.
    pub fn apply_result(
        &self,
        id: TournamentId,
        match_id: MatchId,
        result: MatchResult,
        team1_score: i64,
        team2_score: i64,
    ) -> Result<Tournament, TournamentError> {
        let mut tournament = self.load_tournament(id)?;
        let outcome = logic::apply_result(
            &mut tournament,
            match_id,
            result,
            team1_score,
            team2_score,
            Utc::now(),
        )?;

        self.store
            .write_result(id, tournament.date(outcome.date_id)?, &tournament.teams)?;
        Ok(tournament)
    }

    pub fn close_date(&self, id: TournamentId, date_id: DateId) -> Result<TournamentDate, TournamentError> {
        let mut tournament = self.load_tournament(id)?;
        let date = tournament.date_mut(date_id)?;
        logic::close_date(date, Utc::now())?;
        self.store.write_date(id, date)?;
        log::info!("Closed date {} of tournament {}", date.name, id);
        Ok(date.clone())
    }

    pub fn date_standings(&self, id: TournamentId, date_id: DateId) -> Result<Vec<Team>, TournamentError> {
        let tournament = self.load_tournament(id)?;
        logic::date_standings(&tournament, date_id)
    }

    /// Decide the winner; leaves the tournament waiting on a tiebreaker when needed.
    pub fn finalize_tournament(&self, id: TournamentId) -> Result<FinalResult, TournamentError> {
        let mut tournament = self.load_tournament(id)?;
        let result = logic::finalize(&mut tournament, Utc::now())?;
        self.store.write_tournament(&tournament)?;
        match &result.winner {
            Some(winner) => log::info!("Tournament {} won by {}", tournament.name, winner),
            None => log::info!(
                "Tournament {} needs a tiebreaker between {:?}",
                tournament.name,
                result.runners
            ),
        }
        Ok(result)
    }

    pub fn create_tiebreaker(&self, id: TournamentId, teams: &[String]) -> Result<TournamentDate, TournamentError> {
        let mut tournament = self.load_tournament(id)?;
        let date_id = logic::create_tiebreaker(&mut tournament, teams, Utc::now())?;
        let date = tournament.date(date_id)?;
        self.store.write_date(id, date)?;
        self.store.write_tournament(&tournament)?;
        log::info!("Tiebreaker created for tournament {} between {:?}", id, date.teams);
        Ok(date.clone())
    }
}

fn find_match(date: &TournamentDate, match_id: MatchId) -> Result<GameMatch, TournamentError> {
    date.matches
        .iter()
        .find(|m| m.id == match_id)
        .cloned()
        .ok_or(TournamentError::MatchNotFound(match_id))
}
