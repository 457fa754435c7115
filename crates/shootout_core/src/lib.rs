//! Penalty shootout tournament engine
//!
//! This crate provides the simulation core for a single-elimination
//! penalty-shootout tourney:
//! - Resolving a match between two players (regulation kicks, then sudden death)
//! - Building the bracket, handing out byes and advancing winners
//! - Pacing the commentary stream with a speed modifier
//!
//! Randomness goes through the [`OutcomeProvider`] trait so tests can script
//! every kick instead of relying on a live RNG.
//!
//! # Usage
//!
//! ```no_run
//! use shootout_core::{run_tournament, PlayerName};
//!
//! let players = vec![PlayerName::from("Ana"), PlayerName::from("Bo")];
//! let champion = run_tournament(players, 6, 1.0, |event| println!("{event}")).unwrap();
//! println!("{champion} lifts the trophy");
//! ```

mod bracket;
mod error;
mod events;
mod outcome;
mod pacing;
mod shootout;
mod types;

pub use bracket::*;
pub use error::*;
pub use events::*;
pub use outcome::*;
pub use pacing::*;
pub use shootout::*;
pub use types::*;
