//! Winner resolution and placeholder substitution between playoff phases.

use std::collections::HashMap;

use crate::models::{Match, MatchId, Participant, PlayoffId, Round, Side};

/// Resolve the winner of a single playoff match.
///
/// `None` unless the match is completed with both participants known and
/// both goal counts recorded. A scoreline draw resolves only through its
/// penalty-shootout side; without one the match is not advanceable even if
/// its completed flag is set.
pub fn match_winner(m: &Match) -> Option<&str> {
    if !m.completed {
        return None;
    }
    let (home, away) = m.participants()?;
    let (home_goals, away_goals) = m.score()?;

    if home_goals == away_goals {
        return match m.penalty_winner? {
            Side::Home => Some(home),
            Side::Away => Some(away),
        };
    }

    Some(if home_goals > away_goals { home } else { away })
}

/// Substitute every pending `WinnerOf` slot whose source match has a
/// resolvable winner. Everything else passes through unchanged.
///
/// Idempotent and stateless; safe to call after every result save. A
/// `Known` name is never reverted to a pending slot, so editing a source
/// match back to incomplete leaves previously substituted downstream
/// names in place.
pub fn advance_bracket(playoffs: &[Match]) -> Vec<Match> {
    let winners: HashMap<PlayoffId, String> = playoffs
        .iter()
        .filter_map(|m| {
            let MatchId::Playoff(id) = m.id else { return None };
            match_winner(m).map(|w| (id, w.to_string()))
        })
        .collect();

    let resolve = |p: &Participant| -> Participant {
        match p {
            Participant::WinnerOf(id) => winners
                .get(id)
                .map(|w| Participant::Known(w.clone()))
                .unwrap_or_else(|| p.clone()),
            known => known.clone(),
        }
    };

    playoffs
        .iter()
        .map(|m| {
            let mut updated = m.clone();
            updated.home = resolve(&m.home);
            updated.away = m.away.as_ref().map(&resolve);
            updated
        })
        .collect()
}

/// Phase gating: true once every match of the phase is completed.
///
/// Vacuously true for an absent phase, so a bracket without
/// quarterfinals still opens its semifinals.
pub fn is_phase_complete(playoffs: &[Match], round: Round) -> bool {
    playoffs.iter().filter(|m| m.round == round).all(|m| m.completed)
}

/// Resolved winner of the Final, if it has one.
pub fn final_champion(playoffs: &[Match]) -> Option<String> {
    playoffs
        .iter()
        .find(|m| m.round == Round::Final)
        .and_then(match_winner)
        .map(str::to_string)
}
