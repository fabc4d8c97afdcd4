//! Standings row for a single player.

use serde::{Deserialize, Serialize};

/// Cumulative league record of one player.
///
/// Counters are never updated incrementally; the standings calculator
/// rebuilds every record from the full match list so edited results stay
/// consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub points: u32,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

impl PlayerRecord {
    /// Fresh record with all counters at zero.
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        PlayerRecord {
            name: name.into(),
            team: team.into(),
            points: 0,
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
        }
    }

    /// Reset every counter, keeping identity and team.
    pub fn reset(&mut self) {
        self.points = 0;
        self.played = 0;
        self.won = 0;
        self.drawn = 0;
        self.lost = 0;
        self.goals_for = 0;
        self.goals_against = 0;
        self.goal_difference = 0;
    }

    /// Fold one scoreline into the record from this player's perspective.
    pub fn record_result(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;

        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.won += 1;
                self.points += 3;
            }
            std::cmp::Ordering::Equal => {
                self.drawn += 1;
                self.points += 1;
            }
            std::cmp::Ordering::Less => {
                self.lost += 1;
            }
        }

        self.goal_difference = self.goals_for as i32 - self.goals_against as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_result_keeps_counter_invariants() {
        let mut p = PlayerRecord::new("Tincho", "Real Madrid");
        p.record_result(3, 1);
        p.record_result(2, 2);
        p.record_result(0, 4);

        assert_eq!(p.played, p.won + p.drawn + p.lost);
        assert_eq!(p.points, 3 * p.won + p.drawn);
        assert_eq!(p.goal_difference, p.goals_for as i32 - p.goals_against as i32);
        assert_eq!(p.points, 4);
        assert_eq!(p.goal_difference, -2);
    }

    #[test]
    fn reset_zeroes_counters_only() {
        let mut p = PlayerRecord::new("Tata", "Arsenal");
        p.record_result(5, 0);
        p.reset();
        assert_eq!(p.name, "Tata");
        assert_eq!(p.team, "Arsenal");
        assert_eq!(p.points, 0);
        assert_eq!(p.played, 0);
    }
}
