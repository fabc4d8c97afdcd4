//! Core data model: matches, participants, rounds and standings rows.

pub mod fixture;
pub mod player;

pub use fixture::{Match, MatchId, Participant, PlayoffId, Round, Side};
pub use player::PlayerRecord;
