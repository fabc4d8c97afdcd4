//! JSON string boundary for UI collaborators.

pub mod league_json;

pub use league_json::{
    advance_bracket_json, build_bracket_json, compute_standings_json, generate_schedule_json,
    regular_season_complete_json,
};
