//! Match model shared by the regular season and the playoff bracket.
//!
//! Identifiers carry structure instead of being parsed strings: a regular
//! match id is its sequence number, a playoff id names its bracket slot.
//! Bracket slots that wait on an earlier result are typed
//! (`Participant::WinnerOf`) rather than encoded as placeholder text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Which side of a match, used for penalty-shootout outcomes.
///
/// Serialized as `player1`/`player2` to stay recognizable next to the
/// original persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "player1")]
    Home,
    #[serde(rename = "player2")]
    Away,
}

/// Stable identifier of a playoff bracket slot.
///
/// Quarter/semi indices are 1-based, matching the displayed labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayoffId {
    Quarter(u8),
    Semi(u8),
    Final,
}

impl PlayoffId {
    /// Human-readable "winner of this match" label, e.g. `Ganador Cuarto 1`.
    pub fn winner_label(&self) -> String {
        match self {
            PlayoffId::Quarter(n) => format!("Ganador Cuarto {}", n),
            PlayoffId::Semi(n) => format!("Ganador Semi {}", n),
            PlayoffId::Final => "Ganador Final".to_string(),
        }
    }
}

impl fmt::Display for PlayoffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayoffId::Quarter(n) => write!(f, "playoff-quarter{}", n),
            PlayoffId::Semi(n) => write!(f, "playoff-semi{}", n),
            PlayoffId::Final => write!(f, "playoff-final"),
        }
    }
}

/// Error returned when an identifier or round label fails to parse.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid identifier: {0}")]
pub struct ParseIdError(String);

impl FromStr for PlayoffId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "playoff-final" {
            return Ok(PlayoffId::Final);
        }
        if let Some(n) = s.strip_prefix("playoff-quarter") {
            if let Ok(n) = n.parse::<u8>() {
                return Ok(PlayoffId::Quarter(n));
            }
        }
        if let Some(n) = s.strip_prefix("playoff-semi") {
            if let Ok(n) = n.parse::<u8>() {
                return Ok(PlayoffId::Semi(n));
            }
        }
        Err(ParseIdError(s.to_string()))
    }
}

impl Serialize for PlayoffId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PlayoffId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Match identifier: sequential for the regular season, slot-named for
/// playoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchId {
    Regular(u32),
    Playoff(PlayoffId),
}

impl MatchId {
    pub fn is_playoff(&self) -> bool {
        matches!(self, MatchId::Playoff(_))
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchId::Regular(n) => write!(f, "match-{}", n),
            MatchId::Playoff(id) => id.fmt(f),
        }
    }
}

impl FromStr for MatchId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(n) = s.strip_prefix("match-") {
            return n
                .parse::<u32>()
                .map(MatchId::Regular)
                .map_err(|_| ParseIdError(s.to_string()));
        }
        s.parse::<PlayoffId>().map(MatchId::Playoff)
    }
}

impl Serialize for MatchId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MatchId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Round a match belongs to. Regular rounds are 1-based; playoff rounds
/// keep the original phase labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Round {
    Regular(u32),
    Quarterfinal,
    Semifinal,
    Final,
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Round::Regular(n) => write!(f, "Round {}", n),
            Round::Quarterfinal => write!(f, "Cuartos"),
            Round::Semifinal => write!(f, "Semifinal"),
            Round::Final => write!(f, "Final"),
        }
    }
}

impl FromStr for Round {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cuartos" => return Ok(Round::Quarterfinal),
            "Semifinal" => return Ok(Round::Semifinal),
            "Final" => return Ok(Round::Final),
            _ => {}
        }
        if let Some(n) = s.strip_prefix("Round ") {
            if let Ok(n) = n.parse::<u32>() {
                return Ok(Round::Regular(n));
            }
        }
        Err(ParseIdError(s.to_string()))
    }
}

impl Serialize for Round {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Round {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A match slot occupant: a concrete player, or the not-yet-known winner
/// of an earlier playoff match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participant {
    Known(String),
    WinnerOf(PlayoffId),
}

impl Participant {
    pub fn known(name: impl Into<String>) -> Self {
        Participant::Known(name.into())
    }

    /// Concrete player name, if resolved.
    pub fn name(&self) -> Option<&str> {
        match self {
            Participant::Known(name) => Some(name),
            Participant::WinnerOf(_) => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Participant::WinnerOf(_))
    }

    /// Display form: the player name, or the original placeholder label.
    pub fn display_name(&self) -> String {
        match self {
            Participant::Known(name) => name.clone(),
            Participant::WinnerOf(id) => id.winner_label(),
        }
    }
}

/// A single fixture, regular-season or playoff.
///
/// `away == None` marks a bye: the home player has no fixture that round
/// and the match never carries a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// Monotonic creation order, the chronological signal for streaks.
    pub seq: u32,
    pub round: Round,
    pub home: Participant,
    pub away: Option<Participant>,
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
    pub completed: bool,
    /// Scoreline draw flag, recorded for playoff matches only.
    #[serde(default)]
    pub is_draw: bool,
    /// Shootout winner for a drawn playoff match.
    #[serde(default)]
    pub penalty_winner: Option<Side>,
}

impl Match {
    /// New regular-season fixture with no result yet.
    pub fn regular(seq: u32, round: u32, home: &str, away: &str) -> Self {
        Match {
            id: MatchId::Regular(seq),
            seq,
            round: Round::Regular(round),
            home: Participant::known(home),
            away: Some(Participant::known(away)),
            home_goals: None,
            away_goals: None,
            completed: false,
            is_draw: false,
            penalty_winner: None,
        }
    }

    /// New playoff fixture in the given bracket slot.
    pub fn playoff(id: PlayoffId, seq: u32, round: Round, home: Participant, away: Participant) -> Self {
        Match {
            id: MatchId::Playoff(id),
            seq,
            round,
            home,
            away: Some(away),
            home_goals: None,
            away_goals: None,
            completed: false,
            is_draw: false,
            penalty_winner: None,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.away.is_none()
    }

    pub fn is_playoff(&self) -> bool {
        self.id.is_playoff()
    }

    /// Both slots resolved to concrete players.
    pub fn participants(&self) -> Option<(&str, &str)> {
        let home = self.home.name()?;
        let away = self.away.as_ref()?.name()?;
        Some((home, away))
    }

    /// Recorded scoreline, if the match has one.
    pub fn score(&self) -> Option<(u32, u32)> {
        Some((self.home_goals?, self.away_goals?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ids_round_trip_through_strings() {
        let ids = [
            MatchId::Regular(0),
            MatchId::Regular(17),
            MatchId::Playoff(PlayoffId::Quarter(3)),
            MatchId::Playoff(PlayoffId::Semi(2)),
            MatchId::Playoff(PlayoffId::Final),
        ];
        for id in ids {
            let s = id.to_string();
            assert_eq!(s.parse::<MatchId>().unwrap(), id);
        }
    }

    #[test]
    fn playoff_ids_use_stable_names() {
        assert_eq!(PlayoffId::Quarter(1).to_string(), "playoff-quarter1");
        assert_eq!(PlayoffId::Semi(2).to_string(), "playoff-semi2");
        assert_eq!(PlayoffId::Final.to_string(), "playoff-final");
    }

    #[test]
    fn round_labels_match_original_layout() {
        assert_eq!(Round::Regular(3).to_string(), "Round 3");
        assert_eq!(Round::Quarterfinal.to_string(), "Cuartos");
        assert_eq!("Cuartos".parse::<Round>().unwrap(), Round::Quarterfinal);
        assert_eq!("Round 12".parse::<Round>().unwrap(), Round::Regular(12));
        assert!("Round x".parse::<Round>().is_err());
    }

    #[test]
    fn pending_participant_displays_winner_label() {
        let p = Participant::WinnerOf(PlayoffId::Quarter(2));
        assert_eq!(p.display_name(), "Ganador Cuarto 2");
        assert!(p.is_pending());
        assert_eq!(p.name(), None);
    }

    #[test]
    fn bye_match_has_no_participants_pair() {
        let mut m = Match::regular(0, 1, "Tincho", "Tata");
        m.away = None;
        assert!(m.is_bye());
        assert_eq!(m.participants(), None);
    }

    #[test]
    fn match_serde_round_trip() {
        let m = Match::playoff(
            PlayoffId::Semi(1),
            10,
            Round::Semifinal,
            Participant::known("Tincho"),
            Participant::WinnerOf(PlayoffId::Quarter(2)),
        );
        let json = serde_json::to_string(&m).unwrap();
        let back: Match = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
