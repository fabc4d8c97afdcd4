//! String-in/string-out wrappers around the engine functions.
//!
//! Each function takes a JSON request and returns a JSON response; any
//! failure comes back as an `{"error": ...}` envelope, never a panic, so
//! callers on the other side of an FFI or IPC boundary always get a
//! parseable answer.

use serde::{Deserialize, Serialize};

use crate::league::regular_season_complete;
use crate::models::{Match, PlayerRecord};
use crate::playoff::{advance_bracket, build_bracket, BracketSize};
use crate::schedule::generate_schedule;
use crate::standings::compute_standings;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_json(message: impl std::fmt::Display) -> String {
    serde_json::to_string(&ErrorResponse { error: message.to_string() })
        .unwrap_or_else(|_| r#"{"error":"internal serialization failure"}"#.to_string())
}

fn respond<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => error_json(e),
    }
}

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub players: Vec<String>,
    #[serde(default)]
    pub round_trip: bool,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub matches: Vec<Match>,
    pub total_rounds: u32,
}

/// Generate the round-robin schedule for a player list.
pub fn generate_schedule_json(request: &str) -> String {
    let req: ScheduleRequest = match serde_json::from_str(request) {
        Ok(req) => req,
        Err(e) => return error_json(e),
    };
    let schedule = generate_schedule(&req.players, req.round_trip);
    respond(&ScheduleResponse { matches: schedule.matches, total_rounds: schedule.total_rounds })
}

#[derive(Debug, Deserialize)]
pub struct StandingsRequest {
    pub roster: Vec<PlayerRecord>,
    pub matches: Vec<Match>,
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub standings: Vec<PlayerRecord>,
}

/// Recompute the ranked table from a roster and match list.
pub fn compute_standings_json(request: &str) -> String {
    let req: StandingsRequest = match serde_json::from_str(request) {
        Ok(req) => req,
        Err(e) => return error_json(e),
    };
    respond(&StandingsResponse { standings: compute_standings(&req.roster, &req.matches) })
}

#[derive(Debug, Deserialize)]
pub struct BracketRequest {
    pub ranked: Vec<PlayerRecord>,
    pub size: usize,
}

#[derive(Debug, Serialize)]
pub struct BracketResponse {
    pub matches: Vec<Match>,
}

/// Build the initial playoff bracket for a ranked table.
pub fn build_bracket_json(request: &str) -> String {
    let req: BracketRequest = match serde_json::from_str(request) {
        Ok(req) => req,
        Err(e) => return error_json(e),
    };
    let size = match BracketSize::try_from(req.size) {
        Ok(size) => size,
        Err(e) => return error_json(e),
    };
    respond(&BracketResponse { matches: build_bracket(&req.ranked, size) })
}

#[derive(Debug, Deserialize)]
pub struct AdvanceRequest {
    pub playoffs: Vec<Match>,
}

#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    pub playoffs: Vec<Match>,
}

/// Substitute resolved winners into pending bracket slots.
pub fn advance_bracket_json(request: &str) -> String {
    let req: AdvanceRequest = match serde_json::from_str(request) {
        Ok(req) => req,
        Err(e) => return error_json(e),
    };
    respond(&AdvanceResponse { playoffs: advance_bracket(&req.playoffs) })
}

#[derive(Debug, Deserialize)]
pub struct SeasonCompleteRequest {
    pub matches: Vec<Match>,
}

#[derive(Debug, Serialize)]
pub struct SeasonCompleteResponse {
    pub complete: bool,
}

/// Whether every non-bye regular-season match is completed.
pub fn regular_season_complete_json(request: &str) -> String {
    let req: SeasonCompleteRequest = match serde_json::from_str(request) {
        Ok(req) => req,
        Err(e) => return error_json(e),
    };
    respond(&SeasonCompleteResponse { complete: regular_season_complete(&req.matches) })
}
