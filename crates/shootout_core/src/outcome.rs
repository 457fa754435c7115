//! Kick outcome providers
//!
//! The resolver never touches a random generator directly. It asks an
//! [`OutcomeProvider`] whether each kick goes in, which lets tests swap the
//! live RNG for a scripted sequence.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

use crate::error::{ConfigIssue, Result};
use crate::types::PlayerName;

/// Chance that a kick is scored
pub const DEFAULT_SCORE_PROBABILITY: f64 = 0.75;

/// Decides whether each kick is scored.
pub trait OutcomeProvider {
    /// Returns `true` if `shooter` scores this kick.
    fn next_outcome(&mut self, shooter: &PlayerName) -> bool;

    /// Reorders entrants before a round is drawn. Only used when the
    /// tournament runs with a random draw; the default keeps input order.
    fn shuffle_entrants(&mut self, _entrants: &mut [PlayerName]) {}
}

impl<T: OutcomeProvider + ?Sized> OutcomeProvider for &mut T {
    fn next_outcome(&mut self, shooter: &PlayerName) -> bool {
        (**self).next_outcome(shooter)
    }

    fn shuffle_entrants(&mut self, entrants: &mut [PlayerName]) {
        (**self).shuffle_entrants(entrants)
    }
}

impl<T: OutcomeProvider + ?Sized> OutcomeProvider for Box<T> {
    fn next_outcome(&mut self, shooter: &PlayerName) -> bool {
        (**self).next_outcome(shooter)
    }

    fn shuffle_entrants(&mut self, entrants: &mut [PlayerName]) {
        (**self).shuffle_entrants(entrants)
    }
}

/// Outcomes drawn from a random stream with a fixed scoring probability.
#[derive(Debug, Clone)]
pub struct RandomOutcomes<R = StdRng> {
    rng: R,
    probability: f64,
}

impl RandomOutcomes<StdRng> {
    /// Fresh entropy-seeded stream, scoring at [`DEFAULT_SCORE_PROBABILITY`]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible stream for tests
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomOutcomes<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomOutcomes<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            probability: DEFAULT_SCORE_PROBABILITY,
        }
    }

    /// Override the scoring probability.
    ///
    /// Must be strictly between 0 and 1: at either extreme every kick has
    /// the same outcome and sudden death never ends.
    pub fn with_probability(mut self, probability: f64) -> Result<Self> {
        if !(probability > 0.0 && probability < 1.0) {
            return Err(ConfigIssue::Probability(probability).into());
        }
        self.probability = probability;
        Ok(self)
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl<R: Rng> OutcomeProvider for RandomOutcomes<R> {
    fn next_outcome(&mut self, _shooter: &PlayerName) -> bool {
        self.rng.gen_bool(self.probability)
    }

    fn shuffle_entrants(&mut self, entrants: &mut [PlayerName]) {
        entrants.shuffle(&mut self.rng);
    }
}

/// Pre-recorded outcomes, replayed in order and cycled once exhausted.
///
/// Either one global sequence shared by every shooter, or one sequence per
/// player. Shooters without their own script fall back to the shared
/// sequence; an empty sequence always misses.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOutcomes {
    shared: Script,
    per_player: HashMap<PlayerName, Script>,
    calls: usize,
}

#[derive(Debug, Clone, Default)]
struct Script {
    kicks: Vec<bool>,
    cursor: usize,
}

impl Script {
    fn new(kicks: Vec<bool>) -> Self {
        Self { kicks, cursor: 0 }
    }

    fn next(&mut self) -> bool {
        if self.kicks.is_empty() {
            return false;
        }
        let made = self.kicks[self.cursor % self.kicks.len()];
        self.cursor += 1;
        made
    }
}

impl ScriptedOutcomes {
    /// One sequence consumed kick by kick, regardless of shooter
    pub fn sequence(kicks: impl IntoIterator<Item = bool>) -> Self {
        Self {
            shared: Script::new(kicks.into_iter().collect()),
            ..Default::default()
        }
    }

    /// A separate sequence for each named player
    pub fn by_player<N, K>(scripts: impl IntoIterator<Item = (N, K)>) -> Self
    where
        N: Into<PlayerName>,
        K: IntoIterator<Item = bool>,
    {
        let per_player = scripts
            .into_iter()
            .map(|(name, kicks)| (name.into(), Script::new(kicks.into_iter().collect())))
            .collect();
        Self {
            per_player,
            ..Default::default()
        }
    }

    /// Number of kicks resolved so far
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl OutcomeProvider for ScriptedOutcomes {
    fn next_outcome(&mut self, shooter: &PlayerName) -> bool {
        self.calls += 1;
        match self.per_player.get_mut(shooter) {
            Some(script) => script.next(),
            None => self.shared.next(),
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod outcome_tests;
