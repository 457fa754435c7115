//! Bracket scheduler: single-elimination rounds until one player remains

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::events::Event;
use crate::outcome::{OutcomeProvider, RandomOutcomes};
use crate::pacing::{validate_speed, Pacer};
use crate::shootout::{Shootout, ShootoutRules, DEFAULT_PENALTY_COUNT};
use crate::types::{validate_players, MatchResult, PlayerName};

/// One slot in a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fixture {
    Match { home: PlayerName, away: PlayerName },
    /// Odd player out, advances without playing
    Bye(PlayerName),
}

/// A drawn round and, once played, who went through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based
    pub number: u32,
    pub fixtures: Vec<Fixture>,
    /// Winners and bye players, in the order they were decided
    pub advancing: Vec<PlayerName>,
}

impl Round {
    /// Pair entrants in order: 1v2, 3v4, ... The last entrant of an odd
    /// field gets a bye.
    pub fn draw(number: u32, entrants: &[PlayerName]) -> Self {
        let mut pairs = entrants.chunks_exact(2);
        let mut fixtures: Vec<Fixture> = pairs
            .by_ref()
            .map(|pair| Fixture::Match {
                home: pair[0].clone(),
                away: pair[1].clone(),
            })
            .collect();
        if let [single] = pairs.remainder() {
            fixtures.push(Fixture::Bye(single.clone()));
        }
        Self {
            number,
            fixtures,
            advancing: Vec::new(),
        }
    }

    /// Players taking part in this round, byes included
    pub fn entrant_count(&self) -> usize {
        self.fixtures
            .iter()
            .map(|fixture| match fixture {
                Fixture::Match { .. } => 2,
                Fixture::Bye(_) => 1,
            })
            .sum()
    }

    pub fn matches(&self) -> impl Iterator<Item = (&PlayerName, &PlayerName)> {
        self.fixtures.iter().filter_map(|fixture| match fixture {
            Fixture::Match { home, away } => Some((home, away)),
            Fixture::Bye(_) => None,
        })
    }

    pub fn byes(&self) -> impl Iterator<Item = &PlayerName> {
        self.fixtures.iter().filter_map(|fixture| match fixture {
            Fixture::Bye(player) => Some(player),
            Fixture::Match { .. } => None,
        })
    }
}

/// What comes next in a bracket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Draw {
    Round(Round),
    Champion(PlayerName),
}

/// The elimination rounds of one tournament.
///
/// Built from the validated entrant list; after each round the surviving
/// players replace the entrants and the next round is drawn from them.
#[derive(Debug, Clone)]
pub struct Bracket {
    entrants: Vec<PlayerName>,
    rounds: Vec<Round>,
}

impl Bracket {
    /// Fails with `InvalidConfiguration` for fewer than two players, blank
    /// names or duplicates.
    pub fn new(players: Vec<PlayerName>) -> Result<Self> {
        validate_players(&players)?;
        Ok(Self {
            entrants: players,
            rounds: Vec::new(),
        })
    }

    /// Players still in the tournament
    pub fn entrants(&self) -> &[PlayerName] {
        &self.entrants
    }

    /// Reordering only; the field itself changes through [`Bracket::complete`]
    pub(crate) fn entrants_mut(&mut self) -> &mut [PlayerName] {
        &mut self.entrants
    }

    /// Completed rounds
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn champion(&self) -> Option<&PlayerName> {
        match self.entrants.as_slice() {
            [champion] => Some(champion),
            _ => None,
        }
    }

    /// Draw the next round from the current entrants, or name the champion
    /// once a single player is left.
    pub fn draw_next(&self) -> Draw {
        match self.entrants.as_slice() {
            [champion] => Draw::Champion(champion.clone()),
            entrants => Draw::Round(Round::draw(self.rounds.len() as u32 + 1, entrants)),
        }
    }

    /// Record a played round; its advancing players become the entrants.
    pub fn complete(&mut self, round: Round) {
        debug_assert!(round.advancing.len() < self.entrants.len());
        self.entrants = round.advancing.clone();
        self.rounds.push(round);
    }

    pub fn into_rounds(self) -> Vec<Round> {
        self.rounds
    }
}

/// Settings for a tournament run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Regulation kicks per match, both players combined
    pub penalty_count: u32,
    /// Commentary speed modifier
    pub speed: f64,
    /// Shuffle the entrants before each round is drawn
    pub shuffle: bool,
    /// Cut regulation short once a match is out of reach
    pub early_finish: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            penalty_count: DEFAULT_PENALTY_COUNT,
            speed: 1.0,
            shuffle: false,
            early_finish: false,
        }
    }
}

impl TournamentConfig {
    pub fn validate(&self) -> Result<()> {
        self.rules().validate()?;
        validate_speed(self.speed)
    }

    pub fn rules(&self) -> ShootoutRules {
        ShootoutRules {
            penalty_count: self.penalty_count,
            early_finish: self.early_finish,
        }
    }
}

/// Everything that happened in a completed tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub champion: PlayerName,
    pub rounds: Vec<Round>,
    /// Every match in the order it was played
    pub matches: Vec<MatchResult>,
}

impl TournamentSummary {
    /// Entrant count per round, first round first
    pub fn round_sizes(&self) -> Vec<usize> {
        self.rounds.iter().map(Round::entrant_count).collect()
    }

    /// Matches `player` played, won or lost
    pub fn matches_of<'a>(&'a self, player: &'a PlayerName) -> impl Iterator<Item = &'a MatchResult> {
        self.matches
            .iter()
            .filter(move |result| &result.winner == player || &result.loser == player)
    }
}

/// A single tournament run. Owns its outcome stream and pacer; create one
/// per run and drop it afterwards.
pub struct Tournament<O: OutcomeProvider> {
    config: TournamentConfig,
    outcomes: O,
    pacer: Pacer,
}

impl<O: OutcomeProvider> Tournament<O> {
    /// Validates the config before anything is played.
    pub fn new(config: TournamentConfig, outcomes: O) -> Result<Self> {
        config.validate()?;
        let pacer = Pacer::new(config.speed)?;
        Ok(Self {
            config,
            outcomes,
            pacer,
        })
    }

    /// Replace the pacer (e.g. [`Pacer::instant`] for tests)
    pub fn with_pacer(mut self, pacer: Pacer) -> Self {
        self.pacer = pacer;
        self
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn pacer(&self) -> &Pacer {
        &self.pacer
    }

    pub fn outcomes(&self) -> &O {
        &self.outcomes
    }

    /// Run the whole bracket, emitting commentary as it happens.
    ///
    /// Matches are played one at a time in bracket order. Player validation
    /// happens before the first event is emitted.
    pub fn run(
        &mut self,
        players: Vec<PlayerName>,
        mut emit: impl FnMut(Event),
    ) -> Result<TournamentSummary> {
        let mut bracket = Bracket::new(players)?;
        let mut matches = Vec::new();

        let champion = loop {
            if self.config.shuffle && bracket.champion().is_none() {
                self.outcomes.shuffle_entrants(bracket.entrants_mut());
            }
            let mut round = match bracket.draw_next() {
                Draw::Round(round) => round,
                Draw::Champion(champion) => break champion,
            };
            debug!(
                round = round.number,
                entrants = round.entrant_count(),
                byes = round.byes().count(),
                "round drawn"
            );
            emit(Event::RoundStarted {
                round: round.number,
                entrants: round.entrant_count(),
            });

            for fixture in &round.fixtures {
                match fixture {
                    Fixture::Match { home, away } => {
                        let result = Shootout::new(&mut self.outcomes, &self.pacer)
                            .with_early_finish(self.config.early_finish)
                            .play_match(home, away, self.config.penalty_count, &mut emit)?;
                        round.advancing.push(result.winner.clone());
                        matches.push(result);
                    }
                    Fixture::Bye(player) => {
                        emit(Event::Bye {
                            player: player.clone(),
                        });
                        round.advancing.push(player.clone());
                    }
                }
            }

            emit(Event::RoundFinished {
                round: round.number,
                advancing: round.advancing.clone(),
            });
            bracket.complete(round);
        };

        debug!(%champion, rounds = bracket.rounds().len(), "tournament complete");
        emit(Event::Champion {
            player: champion.clone(),
        });
        Ok(TournamentSummary {
            champion,
            rounds: bracket.into_rounds(),
            matches,
        })
    }

    pub fn into_outcomes(self) -> O {
        self.outcomes
    }
}

/// Run a tournament with a fresh random outcome stream and return the champion.
pub fn run_tournament(
    players: Vec<PlayerName>,
    penalty_count: u32,
    speed: f64,
    emit: impl FnMut(Event),
) -> Result<PlayerName> {
    let config = TournamentConfig {
        penalty_count,
        speed,
        ..Default::default()
    };
    let mut tournament = Tournament::new(config, RandomOutcomes::new())?;
    Ok(tournament.run(players, emit)?.champion)
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
