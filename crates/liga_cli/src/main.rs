//! Terminal front end for the liga league tracker.
//!
//! Thin shell over `liga_core`: every subcommand loads the stored
//! collection, applies one aggregate operation and writes the result
//! back.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use liga_core::league::{DraftResult, League};
use liga_core::models::{Match, MatchId, Round, Side};
use liga_core::playoff::BracketSize;
use liga_core::roster::{default_assignments, shuffle_teams};
use liga_core::stats::{collection_stats, league_stats};
use liga_core::store::LeagueStore;

#[derive(Parser)]
#[command(name = "liga")]
#[command(about = "Track a round-robin FIFA league among friends", long_about = None)]
struct Cli {
    /// Path of the league collection file
    #[arg(long, default_value = "leagues.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a league and its fixture list
    New {
        /// League name
        name: String,

        /// Comma-separated player names (at least 2)
        #[arg(long, value_delimiter = ',')]
        players: Vec<String>,

        /// Team assignment as "Player=Team" (repeatable)
        #[arg(long = "team")]
        teams: Vec<String>,

        /// Shuffle the remaining team pool over unassigned players
        #[arg(long, default_value = "false")]
        shuffle: bool,

        /// Play home and away legs
        #[arg(long, default_value = "false")]
        round_trip: bool,

        /// Playoff bracket size (2, 4, 6 or 8)
        #[arg(long)]
        playoffs: Option<usize>,
    },

    /// List stored leagues
    List,

    /// Show the table and fixtures of one league
    Show {
        /// League name or id
        league: String,
    },

    /// Record a match result
    Result {
        /// League name or id
        league: String,

        /// Match id (e.g. match-3 or playoff-semi1)
        match_id: String,

        /// Goals of the first listed player (blank or garbage counts as 0)
        home_goals: String,

        /// Goals of the second listed player
        away_goals: String,

        /// Shootout winner for a drawn playoff match: player1 or player2
        #[arg(long)]
        penalty: Option<String>,
    },

    /// Mark the playoff bracket as underway
    StartPlayoffs {
        /// League name or id
        league: String,
    },

    /// Finish the regular season (reseeds the bracket, or crowns the leader)
    Finish {
        /// League name or id
        league: String,
    },

    /// Show the playoff bracket
    Bracket {
        /// League name or id
        league: String,
    },

    /// Show statistics for one league, or for the whole collection
    Stats {
        /// League name or id
        league: Option<String>,
    },

    /// Delete a stored league
    Delete {
        /// League name or id
        league: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let store = LeagueStore::new(&cli.store);

    match cli.command {
        Commands::New { name, players, teams, shuffle, round_trip, playoffs } => {
            cmd_new(&store, name, players, teams, shuffle, round_trip, playoffs)
        }
        Commands::List => cmd_list(&store),
        Commands::Show { league } => cmd_show(&store, &league),
        Commands::Result { league, match_id, home_goals, away_goals, penalty } => {
            cmd_result(&store, &league, &match_id, home_goals, away_goals, penalty)
        }
        Commands::StartPlayoffs { league } => cmd_start_playoffs(&store, &league),
        Commands::Finish { league } => cmd_finish(&store, &league),
        Commands::Bracket { league } => cmd_bracket(&store, &league),
        Commands::Stats { league } => cmd_stats(&store, league.as_deref()),
        Commands::Delete { league } => cmd_delete(&store, &league),
    }
}

fn find_league(store: &LeagueStore, key: &str) -> Result<League> {
    let leagues = store.load().context("failed to load league collection")?;
    leagues
        .into_iter()
        .find(|l| l.name == key || l.id.to_string() == key)
        .with_context(|| format!("no league named '{}'", key))
}

fn cmd_new(
    store: &LeagueStore,
    name: String,
    players: Vec<String>,
    teams: Vec<String>,
    shuffle: bool,
    round_trip: bool,
    playoffs: Option<usize>,
) -> Result<()> {
    let mut assignments = default_assignments(&players);
    let mut pinned = BTreeSet::new();
    for spec in &teams {
        let Some((player, team)) = spec.split_once('=') else {
            bail!("invalid --team '{}', expected Player=Team", spec);
        };
        assignments.insert(player.to_string(), team.to_string());
        pinned.insert(player.to_string());
    }
    if shuffle {
        let locked: HashSet<String> = pinned.into_iter().collect();
        assignments = shuffle_teams(&players, &assignments, &locked, &mut rand::thread_rng());
    }

    let size = playoffs.map(BracketSize::try_from).transpose()?;
    let league = League::new(name, players, assignments, round_trip, size)?;
    store.upsert(&league)?;

    println!("Created league '{}' ({})", league.name, league.id);
    println!(
        "{} players, {} rounds, {} matches{}",
        league.players.len(),
        league.total_rounds,
        league.matches.len(),
        match league.playoff_size {
            Some(size) => format!(", playoffs of {}", size.qualifiers()),
            None => String::new(),
        }
    );
    Ok(())
}

fn cmd_list(store: &LeagueStore) -> Result<()> {
    let leagues = store.load()?;
    if leagues.is_empty() {
        println!("No stored leagues.");
        return Ok(());
    }
    for l in leagues {
        let status = if let Some(champion) = &l.champion {
            format!("champion: {}", champion)
        } else if l.playoff_started {
            "playoffs underway".to_string()
        } else if l.regular_season_complete() {
            "season complete".to_string()
        } else {
            "in progress".to_string()
        };
        println!(
            "{}  {}  {} players  created {}  [{}]",
            l.id,
            l.name,
            l.players.len(),
            l.created_at.format("%Y-%m-%d"),
            status
        );
    }
    Ok(())
}

fn print_table(league: &League) {
    println!("Pos  Player          Team                 P  W  D  L  GF  GA  Diff  Pts");
    for (i, p) in league.standings.iter().enumerate() {
        println!(
            "{:>3}  {:<14}  {:<19}  {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>5} {:>4}",
            i + 1,
            p.name,
            p.team,
            p.played,
            p.won,
            p.drawn,
            p.lost,
            p.goals_for,
            p.goals_against,
            p.goal_difference,
            p.points
        );
    }
}

fn print_match(m: &Match) {
    let away = m
        .away
        .as_ref()
        .map(|a| a.display_name())
        .unwrap_or_else(|| "(bye)".to_string());
    let score = match m.score() {
        Some((hg, ag)) if m.completed => {
            let penalties = match (m.is_draw, m.penalty_winner) {
                (true, Some(Side::Home)) => format!("  ({} wins on penalties)", m.home.display_name()),
                (true, Some(Side::Away)) => format!("  ({} wins on penalties)", away),
                _ => String::new(),
            };
            format!("{} - {}{}", hg, ag, penalties)
        }
        _ => "vs".to_string(),
    };
    println!("  {:<18} {} {:<9} {}", m.id.to_string(), m.home.display_name(), score, away);
}

fn cmd_show(store: &LeagueStore, key: &str) -> Result<()> {
    let league = find_league(store, key)?;

    println!("== {} ==", league.name);
    print_table(&league);

    for round in 1..=league.total_rounds {
        println!("\n{}", Round::Regular(round));
        for m in league.matches_for_round(round) {
            print_match(m);
        }
    }

    if let Some(champion) = &league.champion {
        println!("\nChampion: {}", champion);
    }
    Ok(())
}

fn cmd_result(
    store: &LeagueStore,
    key: &str,
    match_id: &str,
    home_goals: String,
    away_goals: String,
    penalty: Option<String>,
) -> Result<()> {
    let mut league = find_league(store, key)?;
    let id: MatchId = match_id
        .parse()
        .with_context(|| format!("invalid match id '{}'", match_id))?;

    let penalty_winner = match penalty.as_deref() {
        None => None,
        Some("player1") | Some("home") => Some(Side::Home),
        Some("player2") | Some("away") => Some(Side::Away),
        Some(other) => bail!("invalid --penalty '{}', expected player1 or player2", other),
    };

    let mut drafts = BTreeMap::new();
    drafts.insert(id, DraftResult { home_goals, away_goals, penalty_winner });

    if id.is_playoff() {
        league.save_playoff_results(&drafts);
        let recorded = league.playoffs.iter().find(|m| m.id == id);
        if let Some(m) = recorded {
            if m.is_draw && !m.completed {
                println!("Draw recorded; pick a shootout winner with --penalty to complete it.");
            }
        }
    } else {
        league.save_results(&drafts);
    }

    store.upsert(&league)?;

    if let Some(champion) = &league.champion {
        println!("Champion: {}!", champion);
    } else {
        println!("Result saved.");
    }
    Ok(())
}

fn cmd_start_playoffs(store: &LeagueStore, key: &str) -> Result<()> {
    let mut league = find_league(store, key)?;
    league.start_playoffs()?;
    store.upsert(&league)?;
    println!("Playoffs underway for '{}'.", league.name);
    Ok(())
}

fn cmd_finish(store: &LeagueStore, key: &str) -> Result<()> {
    let mut league = find_league(store, key)?;
    league.finish_league();
    store.upsert(&league)?;

    match &league.champion {
        Some(champion) => println!("League finished. Champion: {}", champion),
        None => println!("Season closed; bracket seeded from the final table."),
    }
    Ok(())
}

fn cmd_bracket(store: &LeagueStore, key: &str) -> Result<()> {
    let league = find_league(store, key)?;
    if league.playoffs.is_empty() {
        println!("No playoff bracket configured for '{}'.", league.name);
        return Ok(());
    }

    for round in [Round::Quarterfinal, Round::Semifinal, Round::Final] {
        let phase: Vec<&Match> =
            league.playoffs.iter().filter(|m| m.round == round).collect();
        if phase.is_empty() {
            continue;
        }
        println!("{}", round);
        for m in phase {
            print_match(m);
        }
    }

    if let Some(champion) = &league.champion {
        println!("\nChampion: {}", champion);
    }
    Ok(())
}

fn cmd_stats(store: &LeagueStore, key: Option<&str>) -> Result<()> {
    match key {
        Some(key) => {
            let league = find_league(store, key)?;
            let stats = league_stats(&league.standings, &league.matches);
            println!("Played {} of {} matches", stats.matches_played,
                stats.matches_played + stats.matches_to_play);
            if let Some(p) = stats.most_wins {
                println!("Most wins:     {} ({})", p.name, p.won);
            }
            if let Some(p) = stats.most_losses {
                println!("Most losses:   {} ({})", p.name, p.lost);
            }
            if let Some(p) = stats.top_scorer {
                println!("Top scorer:    {} ({})", p.name, p.goals_for);
            }
            if let Some(p) = stats.most_conceded {
                println!("Most conceded: {} ({})", p.name, p.goals_against);
            }
            if stats.best_positive_streak.streak > 0 {
                println!(
                    "Best unbeaten run: {} ({} matches)",
                    stats.best_positive_streak.player, stats.best_positive_streak.streak
                );
            }
            if stats.worst_negative_streak.streak > 0 {
                println!(
                    "Worst winless run: {} ({} matches)",
                    stats.worst_negative_streak.player, stats.worst_negative_streak.streak
                );
            }
        }
        None => {
            let leagues = store.load()?;
            let stats = collection_stats(&leagues);
            println!("{} leagues stored, {} completed", stats.total_leagues, stats.completed_leagues);
            for (player, titles) in stats.championships {
                println!("  {} title{}: {}", titles, if titles == 1 { "" } else { "s" }, player);
            }
        }
    }
    Ok(())
}

fn cmd_delete(store: &LeagueStore, key: &str) -> Result<()> {
    let league = find_league(store, key)?;
    store.delete(league.id)?;
    println!("Deleted league '{}'.", league.name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(tmp: &TempDir) -> LeagueStore {
        LeagueStore::new(tmp.path().join("leagues.json"))
    }

    fn new_league(store: &LeagueStore, playoffs: Option<usize>) {
        cmd_new(
            store,
            "Liga 1".to_string(),
            vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()],
            vec!["A=Real Madrid".to_string()],
            false,
            false,
            playoffs,
        )
        .unwrap();
    }

    #[test]
    fn new_creates_a_stored_league() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp);
        new_league(&store, Some(4));

        let league = find_league(&store, "Liga 1").unwrap();
        assert_eq!(league.players.len(), 4);
        assert_eq!(league.matches.len(), 6);
        assert_eq!(league.playoffs.len(), 3);
        assert_eq!(league.standings[0].team, "Real Madrid");
    }

    #[test]
    fn result_updates_standings_in_the_store() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp);
        new_league(&store, None);

        cmd_result(&store, "Liga 1", "match-0", "2".to_string(), "0".to_string(), None)
            .unwrap();

        let league = find_league(&store, "Liga 1").unwrap();
        assert!(league.matches[0].completed);
        assert_eq!(league.standings[0].points, 3);
    }

    #[test]
    fn drawn_playoff_result_needs_a_penalty_flag() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp);
        new_league(&store, Some(2));

        cmd_finish(&store, "Liga 1").unwrap();
        cmd_start_playoffs(&store, "Liga 1").unwrap();

        cmd_result(&store, "Liga 1", "playoff-final", "1".to_string(), "1".to_string(), None)
            .unwrap();
        let league = find_league(&store, "Liga 1").unwrap();
        assert!(league.champion.is_none());

        cmd_result(
            &store,
            "Liga 1",
            "playoff-final",
            "1".to_string(),
            "1".to_string(),
            Some("player2".to_string()),
        )
        .unwrap();
        let league = find_league(&store, "Liga 1").unwrap();
        assert!(league.champion.is_some());
    }

    #[test]
    fn unknown_league_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let store = test_store(&tmp);
        assert!(find_league(&store, "nope").is_err());
    }
}
