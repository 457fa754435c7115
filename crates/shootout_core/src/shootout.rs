//! Shootout resolver: plays one match between two players to a decisive result

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{ConfigIssue, Result};
use crate::events::Event;
use crate::outcome::OutcomeProvider;
use crate::pacing::{Beat, Pacer};
use crate::types::{Attempt, MatchResult, MatchState, Phase, PlayerName, Side};

/// Default number of regulation kicks per match (both players combined)
pub const DEFAULT_PENALTY_COUNT: u32 = 6;

/// Rules for a single shootout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootoutRules {
    /// Regulation kicks for both players combined. Each player takes
    /// `penalty_count / 2`; an odd remainder kick is dropped.
    pub penalty_count: u32,
    /// Stop regulation as soon as the trailing player can no longer catch up
    pub early_finish: bool,
}

impl Default for ShootoutRules {
    fn default() -> Self {
        Self {
            penalty_count: DEFAULT_PENALTY_COUNT,
            early_finish: false,
        }
    }
}

impl ShootoutRules {
    pub fn new(penalty_count: u32) -> Self {
        Self {
            penalty_count,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.penalty_count < 2 {
            return Err(ConfigIssue::PenaltyCount(self.penalty_count).into());
        }
        Ok(())
    }

    /// Regulation kicks per player
    pub fn regulation_rounds(&self) -> u32 {
        self.penalty_count / 2
    }
}

/// Plays shootouts, borrowing the tournament's outcome stream and pacer.
pub struct Shootout<'a, O: OutcomeProvider + ?Sized> {
    outcomes: &'a mut O,
    pacer: &'a Pacer,
    early_finish: bool,
}

impl<'a, O: OutcomeProvider + ?Sized> Shootout<'a, O> {
    pub fn new(outcomes: &'a mut O, pacer: &'a Pacer) -> Self {
        Self {
            outcomes,
            pacer,
            early_finish: false,
        }
    }

    pub fn with_early_finish(mut self, early_finish: bool) -> Self {
        self.early_finish = early_finish;
        self
    }

    /// Play `home` against `away`.
    ///
    /// Regulation alternates home, away for `penalty_count / 2` pairs. A level
    /// score then goes to sudden death: single pairs until one player leads
    /// after a completed pair. Sudden death is not capped; it ends because a
    /// kick that is neither certain nor impossible eventually breaks the tie.
    ///
    /// Every kick is emitted as it happens, then the result once. Nothing is
    /// emitted if the inputs are invalid.
    pub fn play_match(
        &mut self,
        home: &PlayerName,
        away: &PlayerName,
        penalty_count: u32,
        emit: &mut dyn FnMut(Event),
    ) -> Result<MatchResult> {
        if home == away {
            return Err(ConfigIssue::SelfMatch(home.to_string()).into());
        }
        let rules = ShootoutRules {
            penalty_count,
            early_finish: self.early_finish,
        };
        rules.validate()?;
        if penalty_count % 2 == 1 {
            warn!(
                penalty_count,
                "odd penalty count, each player takes {} kicks",
                rules.regulation_rounds()
            );
        }

        let mut state = MatchState::new(home.clone(), away.clone());
        emit(Event::MatchStarted {
            home: home.clone(),
            away: away.clone(),
        });
        self.pacer.wait(Beat::MatchStart);

        let decided_early = self.play_regulation(&mut state, &rules, emit);
        self.pacer.wait(Beat::RegulationEnd);

        let mut sudden_death_rounds = 0;
        let winner = match state.leader() {
            Some(side) => side,
            None => {
                emit(Event::SuddenDeath {
                    score: state.scoreline(),
                });
                self.pacer.wait(Beat::SuddenDeath);
                let side = loop {
                    for side in Side::BOTH {
                        self.take_kick(&mut state, side, sudden_death_rounds, Phase::SuddenDeath, emit);
                    }
                    sudden_death_rounds += 1;
                    if let Some(side) = state.leader() {
                        break side;
                    }
                };
                self.pacer.wait(Beat::SuddenDeathDecided);
                side
            }
        };

        let result = state.finish(winner, sudden_death_rounds, decided_early);
        debug!(
            winner = %result.winner,
            loser = %result.loser,
            sudden_death_rounds,
            decided_early,
            "match resolved"
        );
        emit(Event::MatchFinished(result.clone()));
        Ok(result)
    }

    /// Returns true if regulation was cut short
    fn play_regulation(
        &mut self,
        state: &mut MatchState,
        rules: &ShootoutRules,
        emit: &mut dyn FnMut(Event),
    ) -> bool {
        let rounds = rules.regulation_rounds();
        for round in 0..rounds {
            for side in Side::BOTH {
                self.take_kick(state, side, round, Phase::Regulation, emit);
            }
            let remaining = rounds - round - 1;
            if rules.early_finish && remaining > 0 && state.is_out_of_reach(remaining) {
                emit(Event::Decided {
                    score: state.scoreline(),
                    kicks_left: remaining * 2,
                });
                return true;
            }
        }
        false
    }

    fn take_kick(
        &mut self,
        state: &mut MatchState,
        side: Side,
        round_index: u32,
        phase: Phase,
        emit: &mut dyn FnMut(Event),
    ) {
        let shooter = state.player(side).clone();
        emit(Event::StepUp {
            shooter: shooter.clone(),
        });
        self.pacer.wait(Beat::StepUp);
        self.pacer.wait(Beat::Kick);
        let made = self.outcomes.next_outcome(&shooter);
        state.record(side, made);
        trace!(%shooter, round_index, ?phase, made, "kick");
        emit(Event::Attempt {
            attempt: Attempt {
                shooter,
                round_index,
                phase,
                made,
            },
            score: state.scoreline(),
        });
    }
}

#[cfg(test)]
#[path = "shootout_tests.rs"]
mod shootout_tests;
