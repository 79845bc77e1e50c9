//! Fixture generation: balanced single round-robin for the teams of a date.

use crate::models::{unordered_key, Pairing, TournamentError};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Hand-ordered fixture for exactly five teams (A..E): (team1 index, team2 index, round).
/// Its order is what organizers expect to see; the greedy algorithm does not reproduce it.
const FIVE_TEAM_FIXTURE: [(usize, usize, u32); 10] = [
    (0, 1, 1),
    (2, 3, 1),
    (4, 0, 2),
    (1, 2, 2),
    (3, 4, 3),
    (0, 2, 3),
    (1, 3, 4),
    (2, 4, 4),
    (0, 3, 5),
    (1, 4, 5),
];

/// Team names must be unique (case-sensitive) within one fixture.
pub fn check_unique_names(teams: &[String]) -> Result<(), TournamentError> {
    let mut seen = HashSet::new();
    for name in teams {
        if !seen.insert(name.as_str()) {
            return Err(TournamentError::DuplicateTeamName(name.clone()));
        }
    }
    Ok(())
}

/// Generate the round-robin fixture for `teams`, tagging every pairing with `block`.
///
/// 1. Five teams use the fixed table above.
/// 2. Otherwise enumerate every pair (i < j), move A-B and C-D to the front.
/// 3. Fill rounds greedily: each round takes, in order, every unplaced pair whose
///    teams are both still free in that round. At most `2 * n` rounds.
///
/// Fewer than two teams yields an empty fixture.
pub fn generate_fixture(teams: &[String], block: u32) -> Result<Vec<Pairing>, TournamentError> {
    check_unique_names(teams)?;
    let n = teams.len();
    if n < 2 {
        return Ok(Vec::new());
    }

    if n == 5 {
        return Ok(FIVE_TEAM_FIXTURE
            .iter()
            .map(|&(a, b, round)| Pairing::new(teams[a].clone(), teams[b].clone(), round, block))
            .collect());
    }

    let ordered = ordered_pairs(n);
    let mut placed = vec![false; ordered.len()];
    let mut remaining = ordered.len();
    let mut fixture = Vec::with_capacity(ordered.len());
    let max_rounds = 2 * n as u32;
    let mut round = 0;

    while remaining > 0 {
        if round == max_rounds {
            log::warn!(
                "Fixture for {} teams hit the {} round cap with {} pairs unplaced",
                n,
                max_rounds,
                remaining
            );
            break;
        }
        round += 1;
        let mut busy = vec![false; n];
        for (k, &(i, j)) in ordered.iter().enumerate() {
            if placed[k] || busy[i] || busy[j] {
                continue;
            }
            placed[k] = true;
            busy[i] = true;
            busy[j] = true;
            remaining -= 1;
            fixture.push(Pairing::new(teams[i].clone(), teams[j].clone(), round, block));
        }
    }

    Ok(fixture)
}

/// All index pairs (i < j) with the priority pairs A-B (and C-D when n >= 4) first.
fn ordered_pairs(n: usize) -> Vec<(usize, usize)> {
    let priority: &[(usize, usize)] = if n >= 4 { &[(0, 1), (2, 3)] } else { &[(0, 1)] };
    let mut pairs = priority.to_vec();
    for i in 0..n {
        for j in (i + 1)..n {
            if !priority.contains(&(i, j)) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// How many matches a team has in a fixture versus a full round-robin.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TeamMatchCount {
    pub team: String,
    pub expected_matches: usize,
    pub current_matches: usize,
}

/// Report on a (possibly hand-made) list of pairings.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FixtureValidation {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub match_counts: Vec<TeamMatchCount>,
}

impl FixtureValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check pairings against the team list: self pairings, unknown teams and repeated
/// pairs are errors; teams with fewer than `n - 1` matches are warnings.
pub fn validate_pairings(teams: &[String], pairings: &[Pairing]) -> FixtureValidation {
    let mut report = FixtureValidation::default();
    let mut counts: HashMap<&str, usize> = teams.iter().map(|t| (t.as_str(), 0)).collect();
    let mut seen = HashSet::new();

    for p in pairings {
        if p.team1 == p.team2 {
            report
                .errors
                .push(format!("A team cannot play against itself: {}", p.team1));
        }
        for team in [&p.team1, &p.team2] {
            match counts.get_mut(team.as_str()) {
                Some(c) => *c += 1,
                None => report.errors.push(format!("Unknown team in match: {}", team)),
            }
        }
        if !seen.insert(p.unordered_key()) {
            report
                .errors
                .push(format!("Duplicate match: {} vs {}", p.team1, p.team2));
        }
    }

    let expected = teams.len().saturating_sub(1);
    for team in teams {
        let current = counts.get(team.as_str()).copied().unwrap_or(0);
        if current < expected {
            report.warnings.push(format!(
                "{} has fewer matches than expected ({}/{})",
                team, current, expected
            ));
        }
        report.match_counts.push(TeamMatchCount {
            team: team.clone(),
            expected_matches: expected,
            current_matches: current,
        });
    }
    report
}

/// Pairs that occur more than once in `pairings`, regardless of home/away order.
pub(crate) fn duplicate_pairs(pairings: &[Pairing]) -> Vec<String> {
    let mut seen = HashSet::new();
    pairings
        .iter()
        .filter(|&p| !seen.insert(unordered_key(&p.team1, &p.team2)))
        .map(|p| format!("{} vs {}", p.team1, p.team2))
        .collect()
}
