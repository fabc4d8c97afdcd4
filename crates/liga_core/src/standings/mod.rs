//! Standings computation and ranking.

use crate::models::{Match, PlayerRecord};

/// Recompute the full standings table from scratch.
///
/// Pure over its inputs: every counter starts at zero and only completed
/// non-bye matches with both scores and both participants known are
/// folded in. Returns the records ranked by points, then goal difference,
/// then goals for; the sort is stable so further ties keep roster order.
pub fn compute_standings(roster: &[PlayerRecord], matches: &[Match]) -> Vec<PlayerRecord> {
    let mut table: Vec<PlayerRecord> = roster
        .iter()
        .map(|p| {
            let mut fresh = p.clone();
            fresh.reset();
            fresh
        })
        .collect();

    for m in matches {
        if !m.completed {
            continue;
        }
        let Some((home, away)) = m.participants() else { continue };
        let Some((home_goals, away_goals)) = m.score() else { continue };

        let home_idx = table.iter().position(|p| p.name == home);
        let away_idx = table.iter().position(|p| p.name == away);
        let (Some(home_idx), Some(away_idx)) = (home_idx, away_idx) else { continue };

        table[home_idx].record_result(home_goals, away_goals);
        table[away_idx].record_result(away_goals, home_goals);
    }

    sort_by_rank(&mut table);
    table
}

/// Rank ordering used for the table and for playoff seeding.
pub fn sort_by_rank(table: &mut [PlayerRecord]) {
    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::generate_schedule;
    use proptest::prelude::*;

    fn roster(names: &[&str]) -> Vec<PlayerRecord> {
        names.iter().map(|n| PlayerRecord::new(*n, "Sin Equipo")).collect()
    }

    fn played(seq: u32, round: u32, home: &str, away: &str, hg: u32, ag: u32) -> Match {
        let mut m = Match::regular(seq, round, home, away);
        m.home_goals = Some(hg);
        m.away_goals = Some(ag);
        m.completed = true;
        m
    }

    #[test]
    fn three_one_zero_scoring() {
        let matches = vec![
            played(0, 1, "A", "B", 2, 0),
            played(1, 1, "C", "D", 1, 1),
            played(2, 2, "A", "C", 0, 3),
        ];
        let table = compute_standings(&roster(&["A", "B", "C", "D"]), &matches);

        let get = |name: &str| table.iter().find(|p| p.name == name).unwrap();
        assert_eq!(get("C").points, 4);
        assert_eq!(get("A").points, 3);
        assert_eq!(get("D").points, 1);
        assert_eq!(get("B").points, 0);
        assert_eq!(table[0].name, "C");
    }

    #[test]
    fn incomplete_and_bye_matches_are_ignored() {
        let mut bye = Match::regular(0, 1, "A", "B");
        bye.away = None;
        bye.completed = true;
        bye.home_goals = Some(3);
        bye.away_goals = Some(0);

        let pending = Match::regular(1, 1, "A", "B");

        let table = compute_standings(&roster(&["A", "B"]), &[bye, pending]);
        assert!(table.iter().all(|p| p.played == 0 && p.points == 0));
    }

    #[test]
    fn ranking_breaks_ties_by_goal_difference_then_goals_for() {
        // A and B both win once; A wins bigger. B and C differ on goals for.
        let matches = vec![
            played(0, 1, "A", "D", 4, 0),
            played(1, 1, "B", "C", 1, 0),
        ];
        let table = compute_standings(&roster(&["A", "B", "C", "D"]), &matches);
        assert_eq!(table[0].name, "A");
        assert_eq!(table[1].name, "B");
    }

    #[test]
    fn recompute_is_idempotent() {
        let matches = vec![
            played(0, 1, "A", "B", 2, 2),
            played(1, 2, "B", "A", 0, 1),
        ];
        let once = compute_standings(&roster(&["A", "B"]), &matches);
        let twice = compute_standings(&once, &matches);
        assert_eq!(once, twice);
    }

    proptest! {
        #[test]
        fn invariants_hold_for_arbitrary_results(
            n in 2usize..7,
            goals in proptest::collection::vec((0u32..9, 0u32..9), 0..40),
        ) {
            let names: Vec<String> = (0..n).map(|i| format!("P{}", i + 1)).collect();
            let mut schedule = generate_schedule(&names, true);

            for (m, (hg, ag)) in schedule.matches.iter_mut().zip(goals) {
                m.home_goals = Some(hg);
                m.away_goals = Some(ag);
                m.completed = true;
            }

            let records = roster(&names.iter().map(|s| s.as_str()).collect::<Vec<_>>());
            let table = compute_standings(&records, &schedule.matches);

            for p in &table {
                prop_assert_eq!(p.played, p.won + p.drawn + p.lost);
                prop_assert_eq!(p.points, 3 * p.won + p.drawn);
                prop_assert_eq!(p.goal_difference, p.goals_for as i32 - p.goals_against as i32);
            }

            for pair in table.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                let ordered = a.points > b.points
                    || (a.points == b.points && a.goal_difference > b.goal_difference)
                    || (a.points == b.points
                        && a.goal_difference == b.goal_difference
                        && a.goals_for >= b.goals_for);
                prop_assert!(ordered, "ranking order violated: {:?} before {:?}", a, b);
            }
        }
    }
}
