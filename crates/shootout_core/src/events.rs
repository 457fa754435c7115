//! Commentary events streamed to the display layer

use std::fmt;

use crate::types::{Attempt, MatchResult, PlayerName, Scoreline};

/// Something worth announcing. Each event renders as one line of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    RoundStarted {
        round: u32,
        entrants: usize,
    },
    MatchStarted {
        home: PlayerName,
        away: PlayerName,
    },
    /// Shooter walks up, before the kick is taken
    StepUp {
        shooter: PlayerName,
    },
    /// A kick, with the score right after it
    Attempt {
        attempt: Attempt,
        score: Scoreline,
    },
    /// Regulation ended level
    SuddenDeath {
        score: Scoreline,
    },
    /// Regulation was cut short because the trailing side could not catch up
    Decided {
        score: Scoreline,
        kicks_left: u32,
    },
    MatchFinished(MatchResult),
    Bye {
        player: PlayerName,
    },
    RoundFinished {
        round: u32,
        advancing: Vec<PlayerName>,
    },
    Champion {
        player: PlayerName,
    },
}

const ROUND_BANNER: &str = "*****";

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::RoundStarted { round, entrants } => write!(
                f,
                "{ROUND_BANNER} Round {round}: {entrants} players {ROUND_BANNER}"
            ),
            Event::MatchStarted { home, away } => write!(f, "Next up: {home} vs {away}"),
            Event::StepUp { shooter } => write!(f, "{shooter} steps up..."),
            Event::Attempt { attempt, score } => {
                let verdict = if attempt.made { "Scored \\O/" } else { "Missed <O>" };
                write!(
                    f,
                    "{shooter} kicks... {verdict}\t{score}",
                    shooter = attempt.shooter
                )
            }
            Event::SuddenDeath { score } => write!(f, "Draw! Sudden death... ({score})"),
            Event::Decided { score, kicks_left } => write!(
                f,
                "{score}: decided with {kicks_left} kick(s) to spare"
            ),
            Event::MatchFinished(result) => write!(
                f,
                "{} is the winner! ({})",
                result.winner,
                result.scoreline()
            ),
            Event::Bye { player } => {
                write!(f, "No contenders for {player}, advances to next round")
            }
            Event::RoundFinished { round, advancing } => {
                let names: Vec<&str> = advancing.iter().map(PlayerName::as_str).collect();
                write!(
                    f,
                    "{ROUND_BANNER} Round {round} complete: {} advance {ROUND_BANNER}",
                    names.join(", ")
                )
            }
            Event::Champion { player } => write!(f, "{player} is the champion!"),
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
