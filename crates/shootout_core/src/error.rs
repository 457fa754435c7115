//! Error types for the tournament engine

use thiserror::Error;

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, TourneyError>;

/// Errors raised by the engine.
///
/// Every failure is a caller-input problem detected before any kick is
/// taken, so there is a single kind carrying the specific violation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TourneyError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
}

impl From<ConfigIssue> for TourneyError {
    fn from(issue: ConfigIssue) -> Self {
        TourneyError::InvalidConfiguration(issue)
    }
}

/// The specific configuration rule that was broken
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigIssue {
    /// Fewer than two entrants
    #[error("at least 2 players are required, got {found}")]
    TooFewPlayers { found: usize },

    /// Same name entered twice
    #[error("player '{0}' is entered more than once")]
    DuplicatePlayer(String),

    /// Empty or whitespace-only name
    #[error("player names must not be blank")]
    BlankPlayerName,

    /// A player paired against themselves
    #[error("player '{0}' cannot play against themselves")]
    SelfMatch(String),

    #[error("penalty count must be at least 2, got {0}")]
    PenaltyCount(u32),

    #[error("speed must be a positive finite number, got {0}")]
    Speed(f64),

    #[error("scoring probability must be strictly between 0 and 1, got {0}")]
    Probability(f64),
}

impl TourneyError {
    /// The violated rule
    pub fn issue(&self) -> &ConfigIssue {
        match self {
            TourneyError::InvalidConfiguration(issue) => issue,
        }
    }
}
