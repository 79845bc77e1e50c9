//! Blocks and locking: first fixture of a date, or a replay of the latest block.

use crate::logic::fixture::{duplicate_pairs, generate_fixture};
use crate::models::{GameMatch, MatchId, Pairing, PlayoffType, TournamentDate, TournamentError};

/// What generating matches for a date will do.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchPlan {
    /// Block number the new matches get.
    pub block: u32,
    /// Matches of the superseded block (empty unless this is a replay).
    pub matches_to_lock: Vec<MatchId>,
    pub new_block_matches: Vec<Pairing>,
    pub replay: bool,
}

/// A date can replay its fixture once it has matches and all of them are completed.
pub fn is_replay_eligible(date: &TournamentDate) -> bool {
    date.all_matches_completed()
}

/// Decide the next block of matches for `date`.
///
/// On a replay the latest block `B` is locked and block `B + 1` repeats its pairings in
/// the same order, with its rounds renumbered to continue after the date's highest round.
/// Otherwise a fresh fixture is generated for the date's teams as block `B + 1` (1 for a
/// date without matches).
pub fn plan_replay(date: &TournamentDate) -> Result<MatchPlan, TournamentError> {
    let last_block = date.max_block();
    let block = last_block + 1;

    let plan = if is_replay_eligible(date) {
        let mut previous: Vec<&GameMatch> =
            date.matches.iter().filter(|m| m.block == last_block).collect();
        previous.sort_by_key(|m| m.round);

        let mut next_round = date.max_round();
        let mut current_round = None;
        let mut new_block_matches = Vec::with_capacity(previous.len());
        for m in &previous {
            if current_round != Some(m.round) {
                current_round = Some(m.round);
                next_round += 1;
            }
            new_block_matches.push(Pairing {
                round: next_round,
                block,
                ..m.pairing()
            });
        }

        MatchPlan {
            block,
            matches_to_lock: previous.iter().map(|m| m.id).collect(),
            new_block_matches,
            replay: true,
        }
    } else {
        if date.teams.len() < 2 {
            return Err(TournamentError::NotEnoughTeams);
        }
        MatchPlan {
            block,
            matches_to_lock: Vec::new(),
            new_block_matches: generate_fixture(&date.teams, block)?,
            replay: false,
        }
    };

    check_block(&plan.new_block_matches)?;
    Ok(plan)
}

/// No unordered pair may appear twice inside one generated block.
pub fn check_block(pairings: &[Pairing]) -> Result<(), TournamentError> {
    let duplicates = duplicate_pairs(pairings);
    if duplicates.is_empty() {
        return Ok(());
    }
    log::error!("Duplicate pairs in generated block: {:?}", duplicates);
    Err(TournamentError::InvariantViolation(format!(
        "duplicate pairs in block: {}",
        duplicates.join(", ")
    )))
}

/// Lock the superseded matches and append the new block to the date.
/// Returns the ids of the created matches.
pub fn apply_plan(date: &mut TournamentDate, plan: &MatchPlan) -> Result<Vec<MatchId>, TournamentError> {
    if date.closed {
        return Err(TournamentError::DateClosed(date.id));
    }
    for m in date.matches.iter_mut() {
        if plan.matches_to_lock.contains(&m.id) {
            m.locked = true;
        }
    }

    let playoff = date.tiebreaker.then_some(PlayoffType::Tiebreaker);
    let mut created = Vec::with_capacity(plan.new_block_matches.len());
    for pairing in &plan.new_block_matches {
        let mut m = GameMatch::new(date.tournament_id, date.id, pairing.clone());
        m.playoff = playoff;
        created.push(m.id);
        date.matches.push(m);
    }
    date.refresh_counters();
    Ok(created)
}
