//! League aggregate: roster, schedule, standings, playoffs and lifecycle.
//!
//! The aggregate is an explicit value passed around by the caller; every
//! operation mutates one `League` and the storage layer writes it back
//! wholesale. There is no ambient "current league".

pub mod session;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::LeagueError;
use crate::models::{Match, MatchId, PlayerRecord, Round};
use crate::playoff::{advance_bracket, build_bracket, final_champion, BracketSize};
use crate::roster::team_for_player;
use crate::schedule::generate_schedule;
use crate::standings::compute_standings;

pub use session::{DraftResult, LeagueSession};

/// Lenient score coercion: blank or unparseable goal input becomes 0,
/// never an error.
fn parse_goals(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// One tracked league: the persisted unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Roster in selection order.
    pub players: Vec<String>,
    /// Player name → team name.
    pub player_teams: BTreeMap<String, String>,
    pub round_trip: bool,
    pub matches: Vec<Match>,
    pub total_rounds: u32,
    /// Bracket configuration chosen at creation, if playoffs are enabled.
    pub playoff_size: Option<BracketSize>,
    pub playoffs: Vec<Match>,
    /// Ranked standings, recomputed on every result save.
    pub standings: Vec<PlayerRecord>,
    pub playoff_started: bool,
    pub manually_finished: bool,
    pub completed: bool,
    pub champion: Option<String>,
}

impl League {
    /// Create a league: build the roster, the full schedule and, when
    /// playoffs are enabled, the initial bracket.
    pub fn new(
        name: impl Into<String>,
        players: Vec<String>,
        player_teams: BTreeMap<String, String>,
        round_trip: bool,
        playoff_size: Option<BracketSize>,
    ) -> Result<Self, LeagueError> {
        if players.len() < 2 {
            return Err(LeagueError::NotEnoughPlayers { found: players.len() });
        }
        if let Some(size) = playoff_size {
            if size.qualifiers() > players.len() {
                return Err(LeagueError::BracketTooLarge {
                    size: size.qualifiers(),
                    players: players.len(),
                });
            }
        }

        let standings: Vec<PlayerRecord> = players
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let team = player_teams
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| format!("Equipo {}", i + 1));
                PlayerRecord::new(name.clone(), team)
            })
            .collect();

        let schedule = generate_schedule(&players, round_trip);
        let playoffs = match playoff_size {
            Some(size) => build_bracket(&standings, size),
            None => Vec::new(),
        };

        Ok(League {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: Utc::now(),
            players,
            player_teams,
            round_trip,
            matches: schedule.matches,
            total_rounds: schedule.total_rounds,
            playoff_size,
            playoffs,
            standings,
            playoff_started: false,
            manually_finished: false,
            completed: false,
            champion: None,
        })
    }

    pub fn has_playoffs(&self) -> bool {
        self.playoff_size.is_some()
    }

    /// Fixtures of one regular-season round.
    pub fn matches_for_round(&self, round: u32) -> Vec<&Match> {
        self.matches.iter().filter(|m| m.round == Round::Regular(round)).collect()
    }

    /// True once every non-bye regular-season match has a result.
    /// Playoff matches never affect this.
    pub fn regular_season_complete(&self) -> bool {
        regular_season_complete(&self.matches)
    }

    /// Commit a batch of drafted scores to regular-season matches and
    /// recompute the standings. Drafts for unknown matches are ignored.
    pub fn save_results(&mut self, drafts: &BTreeMap<MatchId, DraftResult>) {
        for m in &mut self.matches {
            let Some(draft) = drafts.get(&m.id) else { continue };
            if m.is_bye() {
                continue;
            }
            m.home_goals = Some(parse_goals(&draft.home_goals));
            m.away_goals = Some(parse_goals(&draft.away_goals));
            m.completed = true;
        }
        self.standings = compute_standings(&self.standings, &self.matches);
    }

    /// Commit drafted playoff scores, with draw detection and the
    /// penalty-shootout gate: a drawn match stays incomplete until a
    /// shootout side has been chosen. Afterwards resolved winners are
    /// propagated into later phases and a completed Final crowns the
    /// champion.
    pub fn save_playoff_results(&mut self, drafts: &BTreeMap<MatchId, DraftResult>) {
        for m in &mut self.playoffs {
            let Some(draft) = drafts.get(&m.id) else { continue };
            let home_goals = parse_goals(&draft.home_goals);
            let away_goals = parse_goals(&draft.away_goals);
            let is_draw = home_goals == away_goals;

            m.home_goals = Some(home_goals);
            m.away_goals = Some(away_goals);
            m.is_draw = is_draw;
            m.penalty_winner = if is_draw { draft.penalty_winner } else { None };
            m.completed = if is_draw { m.penalty_winner.is_some() } else { true };
        }

        self.playoffs = advance_bracket(&self.playoffs);

        if let Some(champion) = final_champion(&self.playoffs) {
            self.champion = Some(champion);
            self.completed = true;
        }
    }

    /// Mark the bracket as underway.
    pub fn start_playoffs(&mut self) -> Result<(), LeagueError> {
        if !self.has_playoffs() {
            return Err(LeagueError::PlayoffsNotConfigured);
        }
        self.playoff_started = true;
        Ok(())
    }

    /// Manually finish the regular season. With playoffs configured the
    /// bracket is rebuilt from the current standings; without them the
    /// standings leader is declared champion and the league completed.
    pub fn finish_league(&mut self) {
        self.manually_finished = true;

        match self.playoff_size {
            Some(size) => {
                self.playoffs = build_bracket(&self.standings, size);
                self.playoff_started = false;
            }
            None => {
                self.champion = self.standings.first().map(|p| p.name.clone());
                self.completed = true;
            }
        }
    }

    /// Team assigned to a player, with the original's fallback label.
    pub fn team_of(&self, player: &str) -> String {
        team_for_player(player, &self.player_teams)
    }
}

/// True once every non-bye, non-playoff match in the list is completed.
pub fn regular_season_complete(matches: &[Match]) -> bool {
    matches
        .iter()
        .filter(|m| !m.is_playoff() && !m.is_bye())
        .all(|m| m.completed)
}
