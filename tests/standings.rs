//! Integration tests for the standings calculator and final result.

use football_tournament_web::{
    compute_standings, determine_final_result, GameMatch, MatchResult, Pairing, Team,
    TournamentConfig,
};
use uuid::Uuid;

fn teams(list: &[&str]) -> Vec<Team> {
    list.iter().map(|n| Team::new(*n)).collect()
}

fn played(team1: &str, team2: &str, s1: u32, s2: u32) -> GameMatch {
    let mut m = GameMatch::new(Uuid::new_v4(), Uuid::new_v4(), Pairing::new(team1, team2, 1, 1));
    m.completed = true;
    m.result = Some(MatchResult::from_scores(s1, s2));
    m.team1_score = Some(s1);
    m.team2_score = Some(s2);
    m
}

fn get<'a>(table: &'a [Team], name: &str) -> &'a Team {
    table.iter().find(|t| t.name == name).unwrap()
}

#[test]
fn points_win_updates_both_teams() {
    let table = compute_standings(&teams(&["A", "B"]), &[played("A", "B", 2, 0)], &TournamentConfig::points());

    let a = get(&table, "A");
    assert_eq!((a.points, a.wins, a.losses, a.matches_played), (3, 1, 0, 1));
    assert_eq!((a.goals_for, a.goals_against, a.goal_difference), (2, 0, 2));

    let b = get(&table, "B");
    assert_eq!((b.points, b.wins, b.losses, b.matches_played), (0, 0, 1, 1));
    assert_eq!((b.goals_for, b.goals_against, b.goal_difference), (0, 2, -2));

    assert_eq!(table[0].name, "A");
}

#[test]
fn wins_mode_draw_gives_no_points() {
    let table = compute_standings(&teams(&["A", "B"]), &[played("A", "B", 1, 1)], &TournamentConfig::wins());
    for t in &table {
        assert_eq!(t.draws, 1);
        assert_eq!(t.points, 0);
        assert_eq!(t.wins, 0);
        assert_eq!(t.matches_played, 1);
    }
}

#[test]
fn wins_mode_never_awards_points() {
    let matches = [played("A", "B", 3, 1), played("B", "C", 0, 2), played("A", "C", 1, 1)];
    let table = compute_standings(&teams(&["A", "B", "C"]), &matches, &TournamentConfig::wins());
    assert!(table.iter().all(|t| t.points == 0));
    assert_eq!(get(&table, "A").wins, 1);
    assert_eq!(get(&table, "C").wins, 1);
}

#[test]
fn incomplete_and_unknown_matches_are_ignored() {
    let mut pending = played("A", "B", 5, 0);
    pending.completed = false;
    let mut no_result = played("A", "B", 5, 0);
    no_result.result = None;
    let stranger = played("A", "Z", 5, 0);

    let table = compute_standings(
        &teams(&["A", "B"]),
        &[pending, no_result, stranger],
        &TournamentConfig::points(),
    );
    assert!(table.iter().all(|t| t.matches_played == 0 && t.points == 0 && t.goals_for == 0));
}

#[test]
fn previous_stats_are_discarded() {
    let mut stale = teams(&["A", "B"]);
    stale[0].points = 42;
    stale[0].goals_for = 9;
    let table = compute_standings(&stale, &[played("B", "A", 1, 0)], &TournamentConfig::points());
    let a = get(&table, "A");
    assert_eq!((a.points, a.goals_for, a.losses), (0, 0, 1));
    assert_eq!(a.id, stale[0].id);
}

#[test]
fn match_order_does_not_change_table() {
    let teams = teams(&["A", "B", "C", "D"]);
    let mut matches = vec![
        played("A", "B", 2, 1),
        played("C", "D", 0, 0),
        played("A", "C", 1, 3),
        played("B", "D", 2, 2),
        played("A", "D", 4, 0),
        played("B", "C", 1, 0),
    ];
    let config = TournamentConfig::points();
    let forward = compute_standings(&teams, &matches, &config);
    matches.reverse();
    let backward = compute_standings(&teams, &matches, &config);

    assert_eq!(forward, backward);
    assert_eq!(
        serde_json::to_string(&forward).unwrap(),
        serde_json::to_string(&backward).unwrap()
    );
}

#[test]
fn counters_stay_consistent() {
    let matches = vec![
        played("A", "B", 2, 1),
        played("C", "D", 0, 0),
        played("A", "C", 1, 3),
        played("B", "D", 2, 2),
        played("A", "D", 4, 0),
        played("B", "C", 1, 0),
        played("A", "B", 0, 0),
    ];
    for config in [TournamentConfig::points(), TournamentConfig::wins()] {
        let table = compute_standings(&teams(&["A", "B", "C", "D"]), &matches, &config);
        for t in &table {
            assert_eq!(t.matches_played, t.wins + t.draws + t.losses, "{}", t.name);
            assert_eq!(t.goal_difference, t.goals_for as i32 - t.goals_against as i32, "{}", t.name);
        }
    }
}

#[test]
fn level_points_ranked_by_goal_difference() {
    // Each team wins once: A +2, C 0, B -2.
    let matches = [played("A", "B", 3, 0), played("B", "C", 3, 2), played("C", "A", 2, 1)];
    let table = compute_standings(&teams(&["C", "B", "A"]), &matches, &TournamentConfig::points());
    let order: Vec<&str> = table.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(order, vec!["A", "C", "B"]);
}

#[test]
fn level_difference_ranked_by_goals_for() {
    let matches = [played("A", "C", 2, 2), played("B", "D", 0, 0)];
    let table = compute_standings(&teams(&["B", "A", "D", "C"]), &matches, &TournamentConfig::points());
    let order: Vec<&str> = table.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(order, vec!["A", "C", "B", "D"]);
}

#[test]
fn full_ties_keep_input_order() {
    let none: Vec<GameMatch> = Vec::new();
    let table = compute_standings(&teams(&["X", "Y", "Z"]), &none, &TournamentConfig::points());
    let order: Vec<&str> = table.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(order, vec!["X", "Y", "Z"]);
}

#[test]
fn three_way_tie_without_allow_tie_needs_tiebreaker() {
    let matches = [played("A", "B", 1, 0), played("B", "C", 1, 0), played("C", "A", 1, 0)];
    let config = TournamentConfig::points().with_allow_tie(false);
    let table = compute_standings(&teams(&["A", "B", "C"]), &matches, &config);

    let result = determine_final_result(&table, &config);
    assert!(result.needs_tiebreaker);
    assert_eq!(result.winner, None);
    let mut runners = result.runners.clone();
    runners.sort();
    assert_eq!(runners, vec!["A", "B", "C"]);
}

#[test]
fn tie_allowed_names_first_as_winner() {
    let matches = [played("A", "B", 1, 0), played("B", "C", 1, 0), played("C", "A", 1, 0)];
    let config = TournamentConfig::points().with_allow_tie(true);
    let table = compute_standings(&teams(&["A", "B", "C"]), &matches, &config);

    let result = determine_final_result(&table, &config);
    assert!(!result.needs_tiebreaker);
    assert_eq!(result.winner.as_deref(), Some(table[0].name.as_str()));
    assert_eq!(result.runners.len(), 2);
}

#[test]
fn single_leader_wins_outright() {
    let matches = [played("A", "B", 2, 0), played("A", "C", 1, 0), played("B", "C", 0, 0)];
    let config = TournamentConfig::points().with_allow_tie(false);
    let table = compute_standings(&teams(&["A", "B", "C"]), &matches, &config);

    let result = determine_final_result(&table, &config);
    assert_eq!(result.winner.as_deref(), Some("A"));
    assert!(result.runners.is_empty());
    assert!(!result.needs_tiebreaker);
}

#[test]
fn empty_table_has_no_winner() {
    let result = determine_final_result(&[], &TournamentConfig::default());
    assert_eq!(result.winner, None);
    assert!(result.runners.is_empty());
    assert!(!result.needs_tiebreaker);
}
