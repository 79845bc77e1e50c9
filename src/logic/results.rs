//! Result entry: record a score, recompute the tournament table, manual matches, closing dates.

use crate::logic::standings::compute_standings;
use crate::models::{
    unordered_key, DateId, GameMatch, MatchId, MatchResult, Pairing, PlayoffType, Team, Tournament,
    TournamentConfig, TournamentDate, TournamentError,
};
use chrono::{DateTime, Utc};

/// What recording a result changed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResultOutcome {
    /// Date owning the match (the only date that needs writing back).
    pub date_id: DateId,
    /// The match already had a result that this one replaced.
    pub corrected: bool,
    /// `require_all_matches` is set and every match of the date now has a result.
    /// Closing is still a separate action.
    pub ready_to_close: bool,
}

/// Highest score accepted for one team in one match.
pub const MAX_SCORE: u32 = u16::MAX as u32;

fn check_score(score: i64) -> Result<u32, TournamentError> {
    u32::try_from(score)
        .ok()
        .filter(|&s| s <= MAX_SCORE)
        .ok_or(TournamentError::InvalidScore(score))
}

/// Record (or correct) a match result, then recompute every team's stats from all
/// matches of all dates.
///
/// All checks run before anything changes: on error `tournament` is untouched.
pub fn apply_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    result: MatchResult,
    team1_score: i64,
    team2_score: i64,
    now: DateTime<Utc>,
) -> Result<ResultOutcome, TournamentError> {
    let date_id = tournament.date_of_match(match_id)?.id;
    let date = tournament.date_mut(date_id)?;
    if date.closed {
        return Err(TournamentError::DateClosed(date_id));
    }
    let m = date
        .matches
        .iter_mut()
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.locked {
        return Err(TournamentError::MatchLocked(match_id));
    }
    let s1 = check_score(team1_score)?;
    let s2 = check_score(team2_score)?;

    let corrected = m.completed;
    m.record(result, s1, s2, now);
    date.refresh_counters();

    let config = date.config;
    let ready_to_close = config.require_all_matches && date.all_matches_completed();
    if ready_to_close {
        log::info!("Date {} has every match completed and can be closed", date.name);
    }

    recompute_teams(tournament, &config);
    log::debug!(
        "Recorded {:?} {}-{} for match {} (correction: {})",
        result,
        s1,
        s2,
        match_id,
        corrected
    );

    Ok(ResultOutcome {
        date_id,
        corrected,
        ready_to_close,
    })
}

/// Replace the tournament's team stats with a full recompute over every date's matches.
pub fn recompute_teams(tournament: &mut Tournament, config: &TournamentConfig) {
    let teams = compute_standings(&tournament.teams, tournament.all_matches(), config);
    tournament.teams = teams;
    tournament.refresh_matches();
}

/// Standings of a single date: its own teams, its own matches, its own config.
pub fn date_standings(tournament: &Tournament, date_id: DateId) -> Result<Vec<Team>, TournamentError> {
    let date = tournament.date(date_id)?;
    let teams: Vec<Team> = date
        .teams
        .iter()
        .map(|name| {
            tournament
                .team(name)
                .cloned()
                .ok_or_else(|| TournamentError::TeamNotFound(name.clone()))
        })
        .collect::<Result<_, _>>()?;
    Ok(compute_standings(&teams, &date.matches, &date.config))
}

/// Append one unplayed match to a date by hand.
///
/// The match joins the latest block (1 when the date has none) and gets the round after
/// the highest one in the date.
pub fn add_manual_match(
    date: &mut TournamentDate,
    team1: &str,
    team2: &str,
) -> Result<MatchId, TournamentError> {
    if date.closed {
        return Err(TournamentError::DateClosed(date.id));
    }
    if team1 == team2 {
        return Err(TournamentError::SameTeam(team1.to_string()));
    }
    for team in [team1, team2] {
        if !date.has_team(team) {
            return Err(TournamentError::TeamNotInDate(team.to_string()));
        }
    }

    let block = date.max_block().max(1);
    let key = unordered_key(team1, team2);
    let already_scheduled = date
        .matches
        .iter()
        .any(|m| m.block == block && unordered_key(&m.team1, &m.team2) == key);
    if already_scheduled {
        return Err(TournamentError::DuplicateMatch(format!("{} vs {}", team1, team2)));
    }

    let pairing = Pairing::new(team1, team2, date.max_round() + 1, block);
    let mut m = GameMatch::new(date.tournament_id, date.id, pairing);
    m.playoff = date.tiebreaker.then_some(PlayoffType::Tiebreaker);
    let id = m.id;
    date.matches.push(m);
    date.refresh_counters();
    Ok(id)
}

/// Close a date for good. Every match must have a result.
pub fn close_date(date: &mut TournamentDate, now: DateTime<Utc>) -> Result<(), TournamentError> {
    if date.closed {
        return Err(TournamentError::DateClosed(date.id));
    }
    let pending = date.pending_matches();
    if pending > 0 {
        return Err(TournamentError::IncompleteMatches { pending });
    }
    date.closed = true;
    date.closed_at = Some(now);
    Ok(())
}
