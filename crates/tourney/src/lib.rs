//! Penalty shootout tourney
//!
//! This crate wraps the `shootout_core` engine for the command line:
//! - Loading defaults from a TOML config file
//! - Rendering the final summary as a text table or JSON
//!
//! # Usage
//!
//! ```bash
//! # Four players, default 6 kicks per match, double speed
//! cargo run -p tourney -- Ana Bo Cy Dee --speed 2
//!
//! # Random draw, 10 kicks per match, JSON summary at the end
//! cargo run -p tourney -- Ana Bo Cy --pc 10 --shuffle --json
//! ```

mod config;
mod report;

pub use config::*;
pub use report::*;
