//! Standings: full recompute of team stats from match history, and the final result.

use crate::models::{GameMatch, MatchResult, ScoringType, Team, TournamentConfig};
use serde::Serialize;
use std::collections::HashMap;

/// Recompute every team's stats from scratch over `matches` and return the sorted table.
///
/// Only completed matches with a result count. Accumulation is commutative, so the order
/// of `matches` does not matter; teams equal on every key keep their order in `teams`.
/// Matches naming a team that is not in `teams` are ignored.
pub fn compute_standings<'a>(
    teams: &[Team],
    matches: impl IntoIterator<Item = &'a GameMatch>,
    config: &TournamentConfig,
) -> Vec<Team> {
    let mut table: Vec<Team> = teams.iter().map(Team::reset).collect();
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(teams.len());
    for (i, t) in teams.iter().enumerate() {
        index.entry(t.name.as_str()).or_insert(i);
    }

    for m in matches {
        if !m.completed {
            continue;
        }
        let Some(result) = m.result else {
            continue;
        };
        let (Some(&i1), Some(&i2)) = (index.get(m.team1.as_str()), index.get(m.team2.as_str()))
        else {
            continue;
        };

        table[i1].matches_played += 1;
        table[i2].matches_played += 1;

        if let (Some(s1), Some(s2)) = (m.team1_score, m.team2_score) {
            table[i1].add_goals(s1, s2);
            table[i2].add_goals(s2, s1);
        }

        match result {
            MatchResult::Team1 => {
                table[i1].add_win(config.kind);
                table[i2].add_loss();
            }
            MatchResult::Team2 => {
                table[i2].add_win(config.kind);
                table[i1].add_loss();
            }
            MatchResult::Draw => {
                table[i1].add_draw(config.kind);
                table[i2].add_draw(config.kind);
            }
        }
    }

    sort_standings(&mut table, config.kind);
    table
}

/// Stable sort, best first: points (or wins), then goal difference, then goals for.
pub fn sort_standings(teams: &mut [Team], kind: ScoringType) {
    teams.sort_by(|a, b| {
        b.primary_score(kind)
            .cmp(&a.primary_score(kind))
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });
}

/// Who won, once all matches are played.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FinalResult {
    pub winner: Option<String>,
    /// Teams sharing first place with the winner (or all of them when a tiebreaker is needed).
    pub runners: Vec<String>,
    pub needs_tiebreaker: bool,
}

/// Decide the winner from an already sorted table.
///
/// Every team level with the leader on points (or wins) shares first place. With
/// `allow_tie` the first of them is the nominal winner; without it nobody wins and
/// the tied teams must play a tiebreaker.
pub fn determine_final_result(sorted: &[Team], config: &TournamentConfig) -> FinalResult {
    let Some(leader) = sorted.first() else {
        return FinalResult::default();
    };
    let top = leader.primary_score(config.kind);
    let mut tied: Vec<String> = sorted
        .iter()
        .filter(|t| t.primary_score(config.kind) == top)
        .map(|t| t.name.clone())
        .collect();

    if tied.len() == 1 {
        FinalResult {
            winner: tied.pop(),
            runners: Vec::new(),
            needs_tiebreaker: false,
        }
    } else if config.allow_tie {
        let winner = tied.remove(0);
        FinalResult {
            winner: Some(winner),
            runners: tied,
            needs_tiebreaker: false,
        }
    } else {
        FinalResult {
            winner: None,
            runners: tied,
            needs_tiebreaker: true,
        }
    }
}
