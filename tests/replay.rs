//! Integration tests for blocks: first fixture, replay of the latest block, locking.

use chrono::Utc;
use football_tournament_web::{
    apply_plan, is_replay_eligible, plan_replay, MatchResult, PlayoffType, TournamentConfig,
    TournamentDate, TournamentError,
};
use uuid::Uuid;

fn date_with(teams: &[&str]) -> TournamentDate {
    let teams = teams.iter().map(|s| s.to_string()).collect();
    TournamentDate::new(Uuid::new_v4(), "Fecha 1", teams, TournamentConfig::default(), Utc::now())
}

fn complete_all(date: &mut TournamentDate) {
    for m in date.matches.iter_mut().filter(|m| !m.completed) {
        m.completed = true;
        m.result = Some(MatchResult::Draw);
        m.team1_score = Some(0);
        m.team2_score = Some(0);
    }
    date.refresh_counters();
}

#[test]
fn first_generation_is_block_one() {
    let mut date = date_with(&["A", "B", "C", "D"]);
    assert!(!is_replay_eligible(&date));

    let plan = plan_replay(&date).unwrap();
    assert!(!plan.replay);
    assert_eq!(plan.block, 1);
    assert!(plan.matches_to_lock.is_empty());
    assert_eq!(plan.new_block_matches.len(), 6);

    let created = apply_plan(&mut date, &plan).unwrap();
    assert_eq!(created.len(), 6);
    assert_eq!(date.total_matches, 6);
    assert_eq!(date.completed_matches, 0);
    assert!(date.matches.iter().all(|m| m.block == 1 && !m.locked && m.playoff.is_none()));
}

#[test]
fn replay_locks_previous_block_and_repeats_pairs() {
    let mut date = date_with(&["A", "B", "C", "D"]);
    let first = plan_replay(&date).unwrap();
    apply_plan(&mut date, &first).unwrap();
    complete_all(&mut date);
    assert!(is_replay_eligible(&date));

    let plan = plan_replay(&date).unwrap();
    assert!(plan.replay);
    assert_eq!(plan.block, 2);
    assert_eq!(plan.matches_to_lock.len(), 6);

    let old: Vec<(String, String)> = date
        .matches
        .iter()
        .map(|m| (m.team1.clone(), m.team2.clone()))
        .collect();
    let new: Vec<(String, String)> = plan
        .new_block_matches
        .iter()
        .map(|p| (p.team1.clone(), p.team2.clone()))
        .collect();
    assert_eq!(old, new);

    let rounds: Vec<u32> = plan.new_block_matches.iter().map(|p| p.round).collect();
    assert_eq!(rounds, vec![4, 4, 5, 5, 6, 6]);
    assert!(plan.new_block_matches.iter().all(|p| p.block == 2));

    apply_plan(&mut date, &plan).unwrap();
    assert_eq!(date.total_matches, 12);
    assert_eq!(date.completed_matches, 6);
    for m in &date.matches {
        assert_eq!(m.locked, m.block == 1);
    }
}

#[test]
fn replay_only_locks_latest_block() {
    let mut date = date_with(&["A", "B", "C"]);
    for _ in 0..2 {
        let plan = plan_replay(&date).unwrap();
        apply_plan(&mut date, &plan).unwrap();
        complete_all(&mut date);
    }
    assert_eq!(date.max_block(), 2);
    let block1_locked = date.matches.iter().filter(|m| m.block == 1 && m.locked).count();
    assert_eq!(block1_locked, 3);

    let plan = plan_replay(&date).unwrap();
    assert_eq!(plan.block, 3);
    let block2: Vec<_> = date.matches.iter().filter(|m| m.block == 2).map(|m| m.id).collect();
    assert_eq!(plan.matches_to_lock, block2);
    assert_eq!(plan.new_block_matches[0].round, 7);
}

#[test]
fn pending_matches_start_fresh_block_without_locking() {
    let mut date = date_with(&["A", "B", "C", "D"]);
    let first = plan_replay(&date).unwrap();
    apply_plan(&mut date, &first).unwrap();
    date.matches[0].completed = true;
    date.matches[0].result = Some(MatchResult::Team1);

    assert!(!is_replay_eligible(&date));
    let plan = plan_replay(&date).unwrap();
    assert!(!plan.replay);
    assert_eq!(plan.block, 2);
    assert!(plan.matches_to_lock.is_empty());

    apply_plan(&mut date, &plan).unwrap();
    assert!(date.matches.iter().all(|m| !m.locked));
}

#[test]
fn not_enough_teams_to_generate() {
    let date = date_with(&["A"]);
    assert!(matches!(plan_replay(&date), Err(TournamentError::NotEnoughTeams)));
}

#[test]
fn closed_date_rejects_new_block() {
    let mut date = date_with(&["A", "B"]);
    let plan = plan_replay(&date).unwrap();
    date.closed = true;
    assert!(matches!(apply_plan(&mut date, &plan), Err(TournamentError::DateClosed(_))));
    assert!(date.matches.is_empty());
}

#[test]
fn tiebreaker_dates_mark_matches_as_playoff() {
    let mut date = date_with(&["A", "B"]);
    date.tiebreaker = true;
    let plan = plan_replay(&date).unwrap();
    apply_plan(&mut date, &plan).unwrap();
    assert_eq!(date.matches.len(), 1);
    assert_eq!(date.matches[0].playoff, Some(PlayoffType::Tiebreaker));
}
