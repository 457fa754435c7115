//! Core data types: players, kicks, match state and results

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ConfigIssue, Result};

/// Display name of a participant. Unique within a tournament.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PlayerName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which part of the shootout a kick belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Regulation,
    SuddenDeath,
}

/// A single penalty kick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub shooter: PlayerName,
    /// 0-based index of the kick pair within its phase
    pub round_index: u32,
    pub phase: Phase,
    pub made: bool,
}

/// The two slots of a fixture: `Home` kicks first in every pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];

    fn index(self) -> usize {
        match self {
            Side::Home => 0,
            Side::Away => 1,
        }
    }

    pub fn other(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Snapshot of the score, used for running commentary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreline {
    pub home: PlayerName,
    pub home_goals: u32,
    pub away: PlayerName,
    pub away_goals: u32,
}

impl fmt::Display for Scoreline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home, self.home_goals, self.away_goals, self.away
        )
    }
}

/// In-progress match, owned by the resolver for the lifetime of one shootout
#[derive(Debug, Clone)]
pub struct MatchState {
    players: [PlayerName; 2],
    scores: [u32; 2],
    attempts_taken: [u32; 2],
}

impl MatchState {
    pub(crate) fn new(home: PlayerName, away: PlayerName) -> Self {
        Self {
            players: [home, away],
            scores: [0, 0],
            attempts_taken: [0, 0],
        }
    }

    pub fn player(&self, side: Side) -> &PlayerName {
        &self.players[side.index()]
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    pub fn attempts(&self, side: Side) -> u32 {
        self.attempts_taken[side.index()]
    }

    pub(crate) fn record(&mut self, side: Side, made: bool) {
        self.attempts_taken[side.index()] += 1;
        if made {
            self.scores[side.index()] += 1;
        }
    }

    /// Side currently ahead, `None` when level
    pub fn leader(&self) -> Option<Side> {
        let (home, away) = (self.score(Side::Home), self.score(Side::Away));
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// True when the trailing side cannot catch up even by scoring all of
    /// its `remaining` kicks. Only meaningful after a completed pair.
    pub fn is_out_of_reach(&self, remaining: u32) -> bool {
        match self.leader() {
            Some(side) => self.score(side.other()) + remaining < self.score(side),
            None => false,
        }
    }

    pub fn scoreline(&self) -> Scoreline {
        Scoreline {
            home: self.player(Side::Home).clone(),
            home_goals: self.score(Side::Home),
            away: self.player(Side::Away).clone(),
            away_goals: self.score(Side::Away),
        }
    }

    /// Close the match with `winner_side` taking it
    pub(crate) fn finish(
        self,
        winner_side: Side,
        sudden_death_rounds: u32,
        decided_early: bool,
    ) -> MatchResult {
        let [home, away] = self.players;
        let final_scores = vec![
            (home.clone(), self.scores[0]),
            (away.clone(), self.scores[1]),
        ];
        let attempts_taken = vec![
            (home.clone(), self.attempts_taken[0]),
            (away.clone(), self.attempts_taken[1]),
        ];
        let (winner, loser) = match winner_side {
            Side::Home => (home, away),
            Side::Away => (away, home),
        };
        MatchResult {
            winner,
            loser,
            final_scores,
            attempts_taken,
            sudden_death_rounds,
            decided_early,
        }
    }
}

/// Outcome of one shootout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: PlayerName,
    pub loser: PlayerName,
    /// Goals per player, in fixture order (home first)
    pub final_scores: Vec<(PlayerName, u32)>,
    /// Kicks taken per player, in fixture order
    pub attempts_taken: Vec<(PlayerName, u32)>,
    /// Number of sudden-death pairs played (0 if regulation settled it)
    pub sudden_death_rounds: u32,
    /// Regulation stopped once the result was out of reach
    pub decided_early: bool,
}

impl MatchResult {
    pub fn score_of(&self, player: &PlayerName) -> Option<u32> {
        lookup(&self.final_scores, player)
    }

    pub fn attempts_of(&self, player: &PlayerName) -> Option<u32> {
        lookup(&self.attempts_taken, player)
    }

    pub fn went_to_sudden_death(&self) -> bool {
        self.sudden_death_rounds > 0
    }

    pub fn scoreline(&self) -> Scoreline {
        let (home, home_goals) = self.final_scores[0].clone();
        let (away, away_goals) = self.final_scores[1].clone();
        Scoreline {
            home,
            home_goals,
            away,
            away_goals,
        }
    }
}

fn lookup(entries: &[(PlayerName, u32)], player: &PlayerName) -> Option<u32> {
    entries
        .iter()
        .find(|(name, _)| name == player)
        .map(|(_, value)| *value)
}

/// Check that a list of entrants can form a bracket: at least two,
/// none blank, none repeated.
///
/// A lone entrant is rejected rather than crowned; a one-player tourney is
/// treated as a usage mistake.
pub fn validate_players(players: &[PlayerName]) -> Result<()> {
    if players.len() < 2 {
        return Err(ConfigIssue::TooFewPlayers {
            found: players.len(),
        }
        .into());
    }
    let mut seen = std::collections::HashSet::with_capacity(players.len());
    for player in players {
        if player.is_blank() {
            return Err(ConfigIssue::BlankPlayerName.into());
        }
        if !seen.insert(player) {
            return Err(ConfigIssue::DuplicatePlayer(player.to_string()).into());
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
