//! Initial bracket construction with fixed seeding.

use serde::{Deserialize, Serialize};

use crate::error::LeagueError;
use crate::models::{Match, Participant, PlayerRecord, PlayoffId, Round};
use crate::standings::sort_by_rank;

/// Supported bracket sizes. Anything else is unrepresentable; construction
/// from a raw number is fallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum BracketSize {
    Two,
    Four,
    Six,
    Eight,
}

impl BracketSize {
    /// Number of qualifying seeds.
    pub fn qualifiers(&self) -> usize {
        match self {
            BracketSize::Two => 2,
            BracketSize::Four => 4,
            BracketSize::Six => 6,
            BracketSize::Eight => 8,
        }
    }
}

impl TryFrom<usize> for BracketSize {
    type Error = LeagueError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        match size {
            2 => Ok(BracketSize::Two),
            4 => Ok(BracketSize::Four),
            6 => Ok(BracketSize::Six),
            8 => Ok(BracketSize::Eight),
            _ => Err(LeagueError::UnsupportedBracketSize { size }),
        }
    }
}

impl From<BracketSize> for usize {
    fn from(size: BracketSize) -> usize {
        size.qualifiers()
    }
}

/// Build the initial playoff match list for the given bracket size.
///
/// The input is re-ranked with the standings ordering before seeding, so
/// callers may pass an unsorted table. Returns an empty list when fewer
/// players than seeds are available; `League` rejects that configuration
/// up front.
///
/// Seeding is fixed: 2 → direct final; 4 → 1v4, 2v3; 6 → seeds 1-2 skip to
/// the semifinals while 3v6 and 4v5 play quarters; 8 → 1v8, 2v7, 3v6, 4v5.
pub fn build_bracket(ranked: &[PlayerRecord], size: BracketSize) -> Vec<Match> {
    if ranked.len() < size.qualifiers() {
        return Vec::new();
    }

    let mut table = ranked.to_vec();
    sort_by_rank(&mut table);
    let seed = |n: usize| Participant::Known(table[n - 1].name.clone());
    let winner_of = Participant::WinnerOf;

    let mut matches = Vec::new();
    let mut seq: u32 = 0;
    let mut push = |id: PlayoffId, round: Round, home: Participant, away: Participant| {
        matches.push(Match::playoff(id, seq, round, home, away));
        seq += 1;
    };

    match size {
        BracketSize::Two => {
            push(PlayoffId::Final, Round::Final, seed(1), seed(2));
        }
        BracketSize::Four => {
            push(PlayoffId::Semi(1), Round::Semifinal, seed(1), seed(4));
            push(PlayoffId::Semi(2), Round::Semifinal, seed(2), seed(3));
            push(
                PlayoffId::Final,
                Round::Final,
                winner_of(PlayoffId::Semi(1)),
                winner_of(PlayoffId::Semi(2)),
            );
        }
        BracketSize::Six => {
            // Top two seeds rest through the quarterfinals.
            push(PlayoffId::Quarter(1), Round::Quarterfinal, seed(3), seed(6));
            push(PlayoffId::Quarter(2), Round::Quarterfinal, seed(4), seed(5));
            push(
                PlayoffId::Semi(1),
                Round::Semifinal,
                seed(1),
                winner_of(PlayoffId::Quarter(2)),
            );
            push(
                PlayoffId::Semi(2),
                Round::Semifinal,
                seed(2),
                winner_of(PlayoffId::Quarter(1)),
            );
            push(
                PlayoffId::Final,
                Round::Final,
                winner_of(PlayoffId::Semi(1)),
                winner_of(PlayoffId::Semi(2)),
            );
        }
        BracketSize::Eight => {
            push(PlayoffId::Quarter(1), Round::Quarterfinal, seed(1), seed(8));
            push(PlayoffId::Quarter(2), Round::Quarterfinal, seed(2), seed(7));
            push(PlayoffId::Quarter(3), Round::Quarterfinal, seed(3), seed(6));
            push(PlayoffId::Quarter(4), Round::Quarterfinal, seed(4), seed(5));
            push(
                PlayoffId::Semi(1),
                Round::Semifinal,
                winner_of(PlayoffId::Quarter(1)),
                winner_of(PlayoffId::Quarter(2)),
            );
            push(
                PlayoffId::Semi(2),
                Round::Semifinal,
                winner_of(PlayoffId::Quarter(3)),
                winner_of(PlayoffId::Quarter(4)),
            );
            push(
                PlayoffId::Final,
                Round::Final,
                winner_of(PlayoffId::Semi(1)),
                winner_of(PlayoffId::Semi(2)),
            );
        }
    }

    matches
}
