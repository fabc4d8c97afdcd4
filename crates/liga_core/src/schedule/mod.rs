//! Round-robin fixture generation (circle method).
//!
//! One seat is fixed and the remaining seats rotate each round, so every
//! pair meets exactly once per cycle. With an odd headcount a synthetic
//! empty seat is added and any pairing against it is skipped, giving that
//! player a bye for the round.

use serde::{Deserialize, Serialize};

use crate::models::Match;

/// Generated fixture list plus the number of rounds it spans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub matches: Vec<Match>,
    pub total_rounds: u32,
}

/// Generate the full round-robin schedule for the given players.
///
/// `round_trip` adds a second cycle with home/away swapped. Fewer than two
/// players yields an empty schedule; the caller enforces the minimum
/// roster upstream.
pub fn generate_schedule(players: &[String], round_trip: bool) -> Schedule {
    if players.len() < 2 {
        return Schedule { matches: Vec::new(), total_rounds: 0 };
    }

    // None is the empty seat for an odd headcount.
    let mut seats: Vec<Option<&str>> = players.iter().map(|p| Some(p.as_str())).collect();
    if seats.len() % 2 == 1 {
        seats.push(None);
    }

    let seat_count = seats.len();
    let rounds_per_cycle = seat_count - 1;
    let cycles = if round_trip { 2 } else { 1 };

    let mut matches = Vec::new();
    let mut seq: u32 = 0;

    for cycle in 0..cycles {
        for round in 0..rounds_per_cycle {
            let round_no = (cycle * rounds_per_cycle + round + 1) as u32;

            for i in 0..seat_count / 2 {
                let (first, second) = if i == 0 {
                    // The fixed seat plays the seat at the rotation offset.
                    (seats[seat_count - 1], seats[round % rounds_per_cycle])
                } else {
                    let home = (round + i) % rounds_per_cycle;
                    let away = (rounds_per_cycle - i + round) % rounds_per_cycle;
                    (seats[home], seats[away])
                };

                // A pairing against the empty seat is this round's bye.
                if let (Some(p1), Some(p2)) = (first, second) {
                    let (home, away) = if cycle == 0 { (p1, p2) } else { (p2, p1) };
                    matches.push(Match::regular(seq, round_no, home, away));
                    seq += 1;
                }
            }
        }
    }

    Schedule { matches, total_rounds: (rounds_per_cycle * cycles) as u32 }
}
