//! Setup: adding dates and keeping the tournament's team list in sync with them.

use crate::logic::fixture::check_unique_names;
use crate::models::{
    DateId, Team, Tournament, TournamentConfig, TournamentDate, TournamentError, TournamentStatus,
};
use chrono::{DateTime, Utc};

/// Trim team names and check there are at least two, none blank, none repeated.
pub fn normalize_team_names(teams: &[String]) -> Result<Vec<String>, TournamentError> {
    let names: Vec<String> = teams.iter().map(|t| t.trim().to_string()).collect();
    if names.iter().any(|n| n.is_empty()) {
        return Err(TournamentError::BlankTeamName);
    }
    if names.len() < 2 {
        return Err(TournamentError::NotEnoughTeams);
    }
    check_unique_names(&names)?;
    Ok(names)
}

/// Union of the existing teams and `names`: existing entities are kept (with their ids and
/// order), unseen names are appended as new teams.
pub fn register_teams(existing: &[Team], names: &[String]) -> Vec<Team> {
    let mut teams = existing.to_vec();
    for name in names {
        if !teams.iter().any(|t| &t.name == name) {
            teams.push(Team::new(name.clone()));
        }
    }
    teams
}

/// Add a date with its own teams and config. The tournament becomes (or goes back to)
/// active.
pub fn add_date(
    tournament: &mut Tournament,
    name: &str,
    teams: &[String],
    config: TournamentConfig,
    now: DateTime<Utc>,
) -> Result<DateId, TournamentError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TournamentError::EmptyName);
    }
    let teams = normalize_team_names(teams)?;

    tournament.teams = register_teams(&tournament.teams, &teams);
    let date = TournamentDate::new(tournament.id, name, teams, config, now);
    let id = date.id;
    tournament.dates.push(date);

    if tournament.status != TournamentStatus::Active {
        tournament.status = TournamentStatus::Active;
        tournament.winner = None;
        tournament.runners.clear();
        tournament.completed_at = None;
    }
    Ok(id)
}
