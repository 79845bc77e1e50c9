//! Integration tests for fixture generation and pairing validation.

use football_tournament_web::{generate_fixture, validate_pairings, Pairing, TournamentError};
use std::collections::HashSet;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn teams(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("T{i}")).collect()
}

fn pairs(fixture: &[Pairing]) -> Vec<(&str, &str, u32)> {
    fixture
        .iter()
        .map(|p| (p.team1.as_str(), p.team2.as_str(), p.round))
        .collect()
}

#[test]
fn every_pair_plays_exactly_once() {
    for n in 2..=12 {
        let teams = teams(n);
        let fixture = generate_fixture(&teams, 1).unwrap();
        assert_eq!(fixture.len(), n * (n - 1) / 2, "n = {n}");

        let unique: HashSet<(&str, &str)> = fixture.iter().map(|p| p.unordered_key()).collect();
        assert_eq!(unique.len(), fixture.len(), "repeated pair for n = {n}");
        assert!(fixture.iter().all(|p| p.team1 != p.team2));
    }
}

#[test]
fn no_team_plays_twice_in_a_round() {
    for n in 2..=12 {
        let fixture = generate_fixture(&teams(n), 1).unwrap();
        let mut seen = HashSet::new();
        for p in &fixture {
            assert!(seen.insert((p.round, p.team1.clone())), "n = {n}, round {}", p.round);
            assert!(seen.insert((p.round, p.team2.clone())), "n = {n}, round {}", p.round);
        }
    }
}

#[test]
fn four_teams_fill_three_rounds() {
    let fixture = generate_fixture(&names(&["A", "B", "C", "D"]), 1).unwrap();
    assert_eq!(
        pairs(&fixture),
        vec![
            ("A", "B", 1),
            ("C", "D", 1),
            ("A", "C", 2),
            ("B", "D", 2),
            ("A", "D", 3),
            ("B", "C", 3),
        ]
    );
    assert!(fixture.iter().all(|p| p.block == 1));
}

#[test]
fn five_teams_use_fixed_table() {
    let fixture = generate_fixture(&names(&["A", "B", "C", "D", "E"]), 3).unwrap();
    assert_eq!(
        pairs(&fixture),
        vec![
            ("A", "B", 1),
            ("C", "D", 1),
            ("E", "A", 2),
            ("B", "C", 2),
            ("D", "E", 3),
            ("A", "C", 3),
            ("B", "D", 4),
            ("C", "E", 4),
            ("A", "D", 5),
            ("B", "E", 5),
        ]
    );
    assert!(fixture.iter().all(|p| p.block == 3));
}

#[test]
fn three_teams_put_a_b_first() {
    let fixture = generate_fixture(&names(&["A", "B", "C"]), 1).unwrap();
    assert_eq!(pairs(&fixture), vec![("A", "B", 1), ("A", "C", 2), ("B", "C", 3)]);
}

#[test]
fn fewer_than_two_teams_gives_empty_fixture() {
    assert!(generate_fixture(&[], 1).unwrap().is_empty());
    assert!(generate_fixture(&names(&["A"]), 1).unwrap().is_empty());
}

#[test]
fn duplicate_names_are_rejected() {
    let err = generate_fixture(&names(&["A", "B", "A"]), 1).unwrap_err();
    assert!(matches!(err, TournamentError::DuplicateTeamName(ref n) if n == "A"));
}

#[test]
fn names_are_case_sensitive() {
    let fixture = generate_fixture(&names(&["a", "A"]), 1).unwrap();
    assert_eq!(fixture.len(), 1);
}

#[test]
fn validation_accepts_generated_fixture() {
    let teams = names(&["A", "B", "C", "D", "E", "F"]);
    let fixture = generate_fixture(&teams, 1).unwrap();
    let report = validate_pairings(&teams, &fixture);
    assert!(report.is_valid());
    assert!(report.warnings.is_empty());
    assert!(report.match_counts.iter().all(|c| c.current_matches == 5 && c.expected_matches == 5));
}

#[test]
fn validation_reports_bad_pairings() {
    let teams = names(&["A", "B", "C"]);
    let pairings = vec![
        Pairing::new("A", "B", 1, 1),
        Pairing::new("B", "A", 2, 1),
        Pairing::new("C", "C", 3, 1),
        Pairing::new("A", "Z", 4, 1),
    ];
    let report = validate_pairings(&teams, &pairings);
    assert!(!report.is_valid());
    assert!(report.errors.iter().any(|e| e.contains("Duplicate match")));
    assert!(report.errors.iter().any(|e| e.contains("against itself")));
    assert!(report.errors.iter().any(|e| e.contains("Unknown team in match: Z")));
}

#[test]
fn validation_warns_on_missing_matches() {
    let teams = names(&["A", "B", "C"]);
    let report = validate_pairings(&teams, &[Pairing::new("A", "B", 1, 1)]);
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 3);
    let c = report.match_counts.iter().find(|c| c.team == "C").unwrap();
    assert_eq!(c.current_matches, 0);
    assert_eq!(c.expected_matches, 2);
}
