//! Roster helpers: the predefined pools, default and shuffled team
//! assignment.

use std::collections::{BTreeMap, HashSet};

use rand::seq::SliceRandom;
use rand::Rng;

/// The usual suspects offered at league setup.
pub const PREDEFINED_PLAYERS: [&str; 10] = [
    "Tincho",
    "Tata",
    "Bicho",
    "Mosca",
    "Facu",
    "Chaquinha",
    "Zevj",
    "Dani",
    "Nico",
    "Arrobatech",
];

/// Club pool the teams are drawn from.
pub const FOOTBALL_TEAMS: [&str; 10] = [
    "Real Madrid",
    "Arsenal",
    "Atlético de Madrid",
    "Inter de Milan",
    "Liverpool",
    "Manchester City",
    "Manchester United",
    "Bayern Munich",
    "Juventus",
    "Borussia Dortmund",
];

/// Team assigned to a player, or the unassigned label.
pub fn team_for_player(player: &str, assignments: &BTreeMap<String, String>) -> String {
    assignments
        .get(player)
        .cloned()
        .unwrap_or_else(|| "Sin Equipo".to_string())
}

/// Default team for each selected player: predefined players keep their
/// paired club, everyone else cycles through the pool.
pub fn default_assignments(selected: &[String]) -> BTreeMap<String, String> {
    let mut assignments = BTreeMap::new();
    for (i, player) in selected.iter().enumerate() {
        let team = match PREDEFINED_PLAYERS.iter().position(|p| p == player) {
            Some(idx) => FOOTBALL_TEAMS[idx],
            None => FOOTBALL_TEAMS[(PREDEFINED_PLAYERS.len() + i) % FOOTBALL_TEAMS.len()],
        };
        assignments.insert(player.clone(), team.to_string());
    }
    assignments
}

/// Reshuffle team assignments, leaving locked players untouched.
///
/// Teams held by locked players are excluded from the draw; the remaining
/// pool is shuffled and dealt to unlocked players in roster order.
pub fn shuffle_teams<R: Rng>(
    selected: &[String],
    assignments: &BTreeMap<String, String>,
    locked: &HashSet<String>,
    rng: &mut R,
) -> BTreeMap<String, String> {
    let held: HashSet<&str> = locked
        .iter()
        .filter_map(|player| assignments.get(player))
        .map(String::as_str)
        .collect();

    let mut pool: Vec<&str> = FOOTBALL_TEAMS
        .into_iter()
        .filter(|team| !held.contains(team))
        .collect();
    pool.shuffle(rng);

    let mut updated = assignments.clone();
    let unlocked = selected.iter().filter(|player| !locked.contains(*player));
    for (player, team) in unlocked.zip(pool) {
        updated.insert(player.clone(), team.to_string());
    }
    updated
}
