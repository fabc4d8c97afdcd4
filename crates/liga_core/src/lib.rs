//! # liga_core - Round-Robin League & Playoff Engine
//!
//! Scheduling and tournament-progression engine for a small round-robin
//! football league among friends: fixture generation (circle method),
//! standings computation, single-elimination playoff brackets with
//! penalty-shootout tie-breaks, and a JSON-file store for the tracked
//! leagues.
//!
//! The engine is a set of pure, total functions over in-memory lists; the
//! `League` aggregate ties them together and the store persists it
//! wholesale. Everything runs synchronously in direct response to a user
//! action.

pub mod api;
pub mod error;
pub mod league;
pub mod models;
pub mod playoff;
pub mod roster;
pub mod schedule;
pub mod standings;
pub mod stats;
pub mod store;

// Re-export the engine surface
pub use error::LeagueError;
pub use league::{regular_season_complete, DraftResult, League, LeagueSession};
pub use models::{Match, MatchId, Participant, PlayerRecord, PlayoffId, Round, Side};
pub use playoff::{
    advance_bracket, build_bracket, final_champion, is_phase_complete, match_winner, BracketSize,
};
pub use schedule::{generate_schedule, Schedule};
pub use standings::compute_standings;
pub use stats::{collection_stats, league_stats, CollectionStats, LeagueStats};
pub use store::{LeagueStore, StoreError};
