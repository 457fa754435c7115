//! Tourney CLI
//!
//! Run a single-elimination penalty shootout tourney with live commentary.

use anyhow::Result;
use clap::Parser;
use shootout_core::{Pacer, PlayerName, RandomOutcomes, Tournament};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use tourney::{print_report, to_json, Overrides, TourneyConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tourney", version)]
#[command(about = "Single-elimination penalty shootout tourney", long_about = None)]
struct Cli {
    /// A space-separated list of participants for the tourney
    players: Vec<String>,

    /// Total amount of kicks per match; defaults to 6 (3 per player).
    /// Also accepted as `-pc`.
    #[arg(short = 'p', long, visible_alias = "pc")]
    penalty_count: Option<u32>,

    /// Modifier for commentary speed; defaults to 1.0
    #[arg(short, long, allow_negative_numbers = true)]
    speed: Option<f64>,

    /// Random draw before every round instead of input order
    #[arg(long)]
    shuffle: bool,

    /// Stop a shootout as soon as the trailing player cannot catch up
    #[arg(long)]
    early_finish: bool,

    /// TOML file with default settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,

    /// Debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            penalty_count: self.penalty_count,
            speed: self.speed,
            shuffle: self.shuffle,
            early_finish: self.early_finish,
        }
    }
}

/// Clap shorts are one character, so the two-letter `-pc` becomes `--pc`.
/// Everything after `--` is left alone.
fn expand_two_letter_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut positional_only = false;
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if positional_only {
                return arg;
            }
            if arg == "--" {
                positional_only = true;
                return arg;
            }
            match arg.to_str() {
                Some("-pc") => OsString::from("--pc"),
                Some(flag) if flag.starts_with("-pc=") => OsString::from(format!("-{flag}")),
                _ => arg,
            }
        })
        .collect()
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Pressing Enter skips the remaining pauses. EOF on stdin does nothing.
fn watch_for_skip(pacer: &Pacer) {
    let handle = pacer.skip_handle();
    thread::spawn(move || {
        let mut line = String::new();
        if matches!(io::stdin().read_line(&mut line), Ok(read) if read > 0) {
            debug!("skipping remaining pauses");
            handle.skip();
        }
    });
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => TourneyConfig::load(path)?,
        None => TourneyConfig::default(),
    }
    .merge(&cli.overrides());
    debug!(?config, "resolved config");
    config.validate()?;

    let mut tournament = Tournament::new(config.tournament_config(), RandomOutcomes::new())?;
    watch_for_skip(tournament.pacer());

    let players: Vec<PlayerName> = cli.players.into_iter().map(PlayerName::from).collect();
    let summary = tournament.run(players, |event| println!("{event}"))?;

    println!();
    if cli.json {
        println!("{}", to_json(&summary)?);
    } else {
        print_report(&summary);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(expand_two_letter_flags(std::env::args_os()));
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod main_tests;
