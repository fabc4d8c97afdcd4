//! Editing session over one league: draft results and commits.
//!
//! Draft scores live in a per-match map owned by the session, next to but
//! never inside the committed match records. Canceling an edit just drops
//! the draft; nothing touches the league until a commit, and a commit
//! writes the whole aggregate back through the store in one call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{MatchId, Side};
use crate::store::{LeagueStore, StoreError};

use super::League;

/// In-progress score entry for one match. Goal fields hold raw user text;
/// coercion to numbers happens at commit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftResult {
    pub home_goals: String,
    pub away_goals: String,
    pub penalty_winner: Option<Side>,
}

/// One user's editing session over a league.
#[derive(Debug)]
pub struct LeagueSession {
    league: League,
    drafts: BTreeMap<MatchId, DraftResult>,
}

impl LeagueSession {
    pub fn new(league: League) -> Self {
        LeagueSession { league, drafts: BTreeMap::new() }
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn into_league(self) -> League {
        self.league
    }

    pub fn drafts(&self) -> &BTreeMap<MatchId, DraftResult> {
        &self.drafts
    }

    /// Update one side's goal text for a match draft.
    pub fn set_draft_goals(&mut self, id: MatchId, side: Side, goals: &str) {
        let draft = self.drafts.entry(id).or_default();
        match side {
            Side::Home => draft.home_goals = goals.to_string(),
            Side::Away => draft.away_goals = goals.to_string(),
        }
    }

    /// Choose the shootout winner for a drawn playoff match draft.
    pub fn set_penalty_winner(&mut self, id: MatchId, side: Side) {
        self.drafts.entry(id).or_default().penalty_winner = Some(side);
    }

    /// Reopen a completed match for editing, pre-filling the draft with
    /// its recorded result.
    pub fn begin_edit(&mut self, id: MatchId) {
        let source = self
            .league
            .matches
            .iter()
            .chain(self.league.playoffs.iter())
            .find(|m| m.id == id);

        let Some(m) = source else { return };
        if !m.completed {
            return;
        }

        self.drafts.insert(
            id,
            DraftResult {
                home_goals: m.home_goals.map(|g| g.to_string()).unwrap_or_default(),
                away_goals: m.away_goals.map(|g| g.to_string()).unwrap_or_default(),
                penalty_winner: m.penalty_winner,
            },
        );
    }

    /// Discard the in-progress draft for one match.
    pub fn cancel_edit(&mut self, id: MatchId) {
        self.drafts.remove(&id);
    }

    /// Commit drafted regular-season results, then persist the league.
    /// Drafts are cleared on success.
    pub fn commit_results(&mut self, store: &LeagueStore) -> Result<(), StoreError> {
        self.league.save_results(&self.drafts);
        store.upsert(&self.league)?;
        self.drafts.clear();
        Ok(())
    }

    /// Commit drafted playoff results (with progression and champion
    /// resolution), then persist the league.
    pub fn commit_playoff_results(&mut self, store: &LeagueStore) -> Result<(), StoreError> {
        self.league.save_playoff_results(&self.drafts);
        store.upsert(&self.league)?;
        self.drafts.clear();
        Ok(())
    }
}
