//! League and collection statistics for the summary views.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::league::League;
use crate::models::{Match, PlayerRecord};

/// Longest run of a player, with the run length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRecord {
    pub player: String,
    pub streak: u32,
}

/// Headline numbers for one league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueStats {
    pub matches_played: usize,
    pub matches_to_play: usize,
    pub most_wins: Option<PlayerRecord>,
    pub most_losses: Option<PlayerRecord>,
    pub top_scorer: Option<PlayerRecord>,
    pub most_conceded: Option<PlayerRecord>,
    /// Longest unbeaten (win-or-draw) run across the league.
    pub best_positive_streak: StreakRecord,
    /// Longest winless (loss-or-draw) run across the league.
    pub worst_negative_streak: StreakRecord,
}

/// Compute the headline stats for one league's table and match list.
pub fn league_stats(players: &[PlayerRecord], matches: &[Match]) -> LeagueStats {
    let matches_played = matches.iter().filter(|m| m.completed && !m.is_bye()).count();
    let total = matches.iter().filter(|m| !m.is_bye()).count();

    let leader = |key: fn(&PlayerRecord) -> u32| -> Option<PlayerRecord> {
        players.iter().max_by_key(|p| key(p)).cloned()
    };

    let mut best_positive = StreakRecord::default();
    let mut worst_negative = StreakRecord::default();
    for p in players {
        let positive = longest_streak(&p.name, matches, StreakKind::WinOrDraw);
        if positive > best_positive.streak {
            best_positive = StreakRecord { player: p.name.clone(), streak: positive };
        }
        let negative = longest_streak(&p.name, matches, StreakKind::LossOrDraw);
        if negative > worst_negative.streak {
            worst_negative = StreakRecord { player: p.name.clone(), streak: negative };
        }
    }

    LeagueStats {
        matches_played,
        matches_to_play: total - matches_played,
        most_wins: leader(|p| p.won),
        most_losses: leader(|p| p.lost),
        top_scorer: leader(|p| p.goals_for),
        most_conceded: leader(|p| p.goals_against),
        best_positive_streak: best_positive,
        worst_negative_streak: worst_negative,
    }
}

#[derive(Clone, Copy)]
enum StreakKind {
    WinOrDraw,
    LossOrDraw,
}

/// Longest qualifying run over the player's completed matches in
/// chronological order. Chronology is the explicit sequence number, with
/// playoff matches after the regular season.
fn longest_streak(player: &str, matches: &[Match], kind: StreakKind) -> u32 {
    let mut involved: Vec<&Match> = matches
        .iter()
        .filter(|m| {
            m.completed
                && m.participants()
                    .is_some_and(|(h, a)| h == player || a == player)
        })
        .collect();
    involved.sort_by_key(|m| (m.is_playoff(), m.seq));

    let mut longest = 0u32;
    let mut current = 0u32;
    for m in involved {
        let Some((home, _)) = m.participants() else { continue };
        let Some((home_goals, away_goals)) = m.score() else { continue };
        let (scored, conceded) = if home == player {
            (home_goals, away_goals)
        } else {
            (away_goals, home_goals)
        };

        let qualifies = match kind {
            StreakKind::WinOrDraw => scored >= conceded,
            StreakKind::LossOrDraw => scored <= conceded,
        };
        if qualifies {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Cross-league summary over the whole stored collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total_leagues: usize,
    pub completed_leagues: usize,
    /// Championship counts, most titles first.
    pub championships: Vec<(String, u32)>,
}

/// Summarize every stored league. A league counts as completed when it is
/// flagged so or already has a champion.
pub fn collection_stats(leagues: &[League]) -> CollectionStats {
    let completed_leagues = leagues
        .iter()
        .filter(|l| l.completed || l.champion.is_some())
        .count();

    let mut counts: HashMap<&str, u32> = HashMap::new();
    for l in leagues {
        if let Some(champion) = &l.champion {
            *counts.entry(champion.as_str()).or_default() += 1;
        }
    }

    let mut championships: Vec<(String, u32)> =
        counts.into_iter().map(|(name, n)| (name.to_string(), n)).collect();
    championships.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    CollectionStats {
        total_leagues: leagues.len(),
        completed_leagues,
        championships,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn played(seq: u32, round: u32, home: &str, away: &str, hg: u32, ag: u32) -> Match {
        let mut m = Match::regular(seq, round, home, away);
        m.home_goals = Some(hg);
        m.away_goals = Some(ag);
        m.completed = true;
        m
    }

    fn record(name: &str, won: u32, lost: u32, gf: u32, ga: u32) -> PlayerRecord {
        let mut p = PlayerRecord::new(name, "Sin Equipo");
        p.won = won;
        p.lost = lost;
        p.goals_for = gf;
        p.goals_against = ga;
        p
    }

    #[test]
    fn counts_split_played_and_pending() {
        let matches = vec![
            played(0, 1, "A", "B", 1, 0),
            Match::regular(1, 2, "A", "B"),
        ];
        let stats = league_stats(&[record("A", 1, 0, 1, 0)], &matches);
        assert_eq!(stats.matches_played, 1);
        assert_eq!(stats.matches_to_play, 1);
    }

    #[test]
    fn bye_matches_never_count() {
        let mut bye = Match::regular(0, 1, "A", "B");
        bye.away = None;
        let stats = league_stats(&[], &[bye]);
        assert_eq!(stats.matches_played, 0);
        assert_eq!(stats.matches_to_play, 0);
    }

    #[test]
    fn leaders_pick_the_extreme_record() {
        let players = vec![
            record("A", 3, 0, 10, 2),
            record("B", 1, 2, 4, 9),
        ];
        let stats = league_stats(&players, &[]);
        assert_eq!(stats.most_wins.unwrap().name, "A");
        assert_eq!(stats.most_losses.unwrap().name, "B");
        assert_eq!(stats.top_scorer.unwrap().name, "A");
        assert_eq!(stats.most_conceded.unwrap().name, "B");
    }

    #[test]
    fn streaks_follow_sequence_order() {
        // A: win, draw, loss, win -> unbeaten run of 2, winless run of 2.
        let matches = vec![
            played(0, 1, "A", "B", 2, 0),
            played(1, 2, "B", "A", 1, 1),
            played(2, 3, "A", "B", 0, 3),
            played(3, 4, "B", "A", 0, 1),
        ];
        assert_eq!(longest_streak("A", &matches, StreakKind::WinOrDraw), 2);
        assert_eq!(longest_streak("A", &matches, StreakKind::LossOrDraw), 2);
        assert_eq!(longest_streak("B", &matches, StreakKind::LossOrDraw), 2);
    }

    #[test]
    fn streak_records_take_the_league_maximum() {
        let matches = vec![
            played(0, 1, "A", "B", 2, 0),
            played(1, 2, "B", "A", 0, 3),
            played(2, 3, "A", "B", 1, 0),
        ];
        let players = vec![record("A", 3, 0, 6, 0), record("B", 0, 3, 0, 6)];
        let stats = league_stats(&players, &matches);
        assert_eq!(stats.best_positive_streak, StreakRecord { player: "A".into(), streak: 3 });
        assert_eq!(stats.worst_negative_streak, StreakRecord { player: "B".into(), streak: 3 });
    }

    #[test]
    fn collection_counts_titles_per_champion() {
        let players = vec!["A".to_string(), "B".to_string()];
        let mut l1 =
            League::new("Liga 1", players.clone(), BTreeMap::new(), false, None).unwrap();
        l1.champion = Some("A".to_string());
        l1.completed = true;
        let mut l2 =
            League::new("Liga 2", players.clone(), BTreeMap::new(), false, None).unwrap();
        l2.champion = Some("A".to_string());
        let l3 = League::new("Liga 3", players, BTreeMap::new(), false, None).unwrap();

        let stats = collection_stats(&[l1, l2, l3]);
        assert_eq!(stats.total_leagues, 3);
        assert_eq!(stats.completed_leagues, 2);
        assert_eq!(stats.championships, vec![("A".to_string(), 2)]);
    }
}
