//! Tournament completion: final table, winner, and tiebreaker dates.

use crate::logic::replay::{apply_plan, plan_replay};
use crate::logic::setup::normalize_team_names;
use crate::logic::standings::{compute_standings, determine_final_result, FinalResult};
use crate::models::{
    DateId, Team, Tournament, TournamentDate, TournamentError, TournamentStatus,
};
use chrono::{DateTime, Utc};

/// Name given to dates created for a tiebreaker.
pub const TIEBREAKER_DATE_NAME: &str = "Tiebreaker";

/// Decide the winner once every match of every date has a result.
///
/// Ranks with the tournament's own config over all matches. While the tournament waits
/// on a tiebreaker, the latest tiebreaker date alone decides between the tied teams.
pub fn finalize(tournament: &mut Tournament, now: DateTime<Utc>) -> Result<FinalResult, TournamentError> {
    if tournament.teams.is_empty() {
        return Err(TournamentError::NotEnoughTeams);
    }
    let pending = tournament.all_matches().filter(|m| !m.completed).count();
    if pending > 0 {
        return Err(TournamentError::IncompleteMatches { pending });
    }

    let config = tournament.config;
    let table = compute_standings(&tournament.teams, tournament.all_matches(), &config);

    let tiebreaker = match tournament.status {
        TournamentStatus::Tiebreaker => tournament.dates.iter().rev().find(|d| d.tiebreaker),
        _ => None,
    };
    let result = match tiebreaker {
        Some(date) => {
            let tied: Vec<Team> = table
                .iter()
                .filter(|t| date.has_team(&t.name))
                .cloned()
                .collect();
            let playoff = compute_standings(&tied, &date.matches, &config);
            determine_final_result(&playoff, &config)
        }
        None => determine_final_result(&table, &config),
    };

    tournament.teams = table;
    tournament.winner = result.winner.clone();
    tournament.runners = result.runners.clone();
    if result.needs_tiebreaker {
        tournament.status = TournamentStatus::Tiebreaker;
        tournament.completed_at = None;
    } else {
        tournament.status = TournamentStatus::Completed;
        tournament.completed_at = Some(now);
    }
    Ok(result)
}

/// Add a tiebreaker date in which the tied teams play each other once.
pub fn create_tiebreaker(
    tournament: &mut Tournament,
    teams: &[String],
    now: DateTime<Utc>,
) -> Result<DateId, TournamentError> {
    let names = normalize_team_names(teams)?;
    if let Some(unknown) = names.iter().find(|n| tournament.team(n).is_none()) {
        return Err(TournamentError::TeamNotFound(unknown.clone()));
    }

    let mut date = TournamentDate::new(tournament.id, TIEBREAKER_DATE_NAME, names, tournament.config, now);
    date.tiebreaker = true;
    let plan = plan_replay(&date)?;
    apply_plan(&mut date, &plan)?;

    let id = date.id;
    tournament.dates.push(date);
    tournament.refresh_matches();
    tournament.status = TournamentStatus::Tiebreaker;
    tournament.winner = None;
    tournament.completed_at = None;
    Ok(id)
}
