//! Amateur football tournament tracker: fixtures per matchday, result entry, standings.

pub mod config;
pub mod logic;
pub mod models;
pub mod session;
pub mod store;

pub use logic::{
    add_date, add_manual_match, apply_plan, apply_result, close_date, compute_standings,
    create_tiebreaker, date_standings, determine_final_result, finalize, generate_fixture,
    is_replay_eligible, plan_replay, validate_pairings, FinalResult, FixtureValidation, MatchPlan,
    ResultOutcome, MAX_SCORE,
};
pub use models::{
    DateId, ErrorKind, GameMatch, MatchId, MatchResult, Pairing, PlayoffType, ScoringType, Team,
    TeamId, Tournament, TournamentConfig, TournamentDate, TournamentError, TournamentId,
    TournamentStatus, TournamentSummary,
};
pub use session::Session;
pub use store::{MemoryStore, StoreError, TournamentStore};
