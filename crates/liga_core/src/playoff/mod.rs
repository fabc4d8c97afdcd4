//! Single-elimination playoff bracket: seeding and phase progression.

pub mod bracket;
pub mod progression;

pub use bracket::{build_bracket, BracketSize};
pub use progression::{advance_bracket, final_champion, is_phase_complete, match_winner};
