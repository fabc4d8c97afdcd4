use thiserror::Error;

/// Errors from league configuration and aggregate operations.
///
/// The engine functions themselves (schedule, standings, bracket,
/// progression) are total; these errors only arise at the aggregate
/// boundary where a configuration is first accepted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LeagueError {
    #[error("at least 2 players required, got {found}")]
    NotEnoughPlayers { found: usize },

    #[error("unsupported bracket size: {size} (supported: 2, 4, 6, 8)")]
    UnsupportedBracketSize { size: usize },

    #[error("bracket of {size} needs more players than the {players} in the league")]
    BracketTooLarge { size: usize, players: usize },

    #[error("league has no playoff bracket configured")]
    PlayoffsNotConfigured,
}
