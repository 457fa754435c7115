//! Tourney configuration: TOML file defaults plus command-line overrides

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shootout_core::{TournamentConfig, DEFAULT_PENALTY_COUNT};
use std::path::Path;

/// Settings a config file may provide. Every key is optional.
///
/// ```toml
/// penalty_count = 10
/// speed = 2.5
/// shuffle = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourneyConfig {
    /// Total kicks per match; each player takes half
    pub penalty_count: u32,
    /// Commentary speed modifier
    pub speed: f64,
    /// Random draw before every round
    pub shuffle: bool,
    /// Stop a shootout once it is out of reach
    pub early_finish: bool,
}

impl Default for TourneyConfig {
    fn default() -> Self {
        Self {
            penalty_count: DEFAULT_PENALTY_COUNT,
            speed: 1.0,
            shuffle: false,
            early_finish: false,
        }
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub penalty_count: Option<u32>,
    pub speed: Option<f64>,
    pub shuffle: bool,
    pub early_finish: bool,
}

impl TourneyConfig {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Command-line values win over file values. Flags can only switch a
    /// feature on.
    pub fn merge(self, overrides: &Overrides) -> Self {
        Self {
            penalty_count: overrides.penalty_count.unwrap_or(self.penalty_count),
            speed: overrides.speed.unwrap_or(self.speed),
            shuffle: self.shuffle || overrides.shuffle,
            early_finish: self.early_finish || overrides.early_finish,
        }
    }

    pub fn tournament_config(&self) -> TournamentConfig {
        TournamentConfig {
            penalty_count: self.penalty_count,
            speed: self.speed,
            shuffle: self.shuffle,
            early_finish: self.early_finish,
        }
    }

    /// Same checks the engine runs before a tournament starts
    pub fn validate(&self) -> shootout_core::Result<()> {
        self.tournament_config().validate()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
