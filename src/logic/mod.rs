//! Tournament business logic: fixtures, replays, results, standings, completion.
//!
//! Everything here is a plain function over explicit arguments; persistence lives in
//! [`crate::session`].

mod completion;
mod fixture;
mod replay;
mod results;
mod setup;
mod standings;

pub use completion::{create_tiebreaker, finalize, TIEBREAKER_DATE_NAME};
pub use fixture::{
    check_unique_names, generate_fixture, validate_pairings, FixtureValidation, TeamMatchCount,
};
pub use replay::{apply_plan, check_block, is_replay_eligible, plan_replay, MatchPlan};
pub use results::{
    add_manual_match, apply_result, close_date, date_standings, recompute_teams, ResultOutcome,
    MAX_SCORE,
};
pub use setup::{add_date, normalize_team_names, register_teams};
pub use standings::{compute_standings, determine_final_result, sort_standings, FinalResult};
