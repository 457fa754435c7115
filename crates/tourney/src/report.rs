//! Tourney summary rendering

use shootout_core::{Fixture, MatchResult, TournamentSummary};

/// Render the bracket as a plain-text table
pub fn generate_report(summary: &TournamentSummary) -> String {
    let mut report = String::new();
    let entrants = summary.rounds.first().map(|r| r.entrant_count()).unwrap_or(0);
    report.push_str(&format!(
        "=== Tourney: {} players, {} matches ===\n\n",
        entrants,
        summary.matches.len()
    ));

    // matches are stored in play order, which is fixture order round by round
    let mut played = summary.matches.iter();
    for round in &summary.rounds {
        report.push_str(&format!("Round {}\n", round.number));
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>7}  {}\n",
            "Home", "Away", "Score", "Notes"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for fixture in &round.fixtures {
            match fixture {
                Fixture::Match { home, away } => {
                    let (score, notes) = match played.next() {
                        Some(result) => (
                            format!(
                                "{}-{}",
                                result.score_of(home).unwrap_or(0),
                                result.score_of(away).unwrap_or(0)
                            ),
                            notes(result),
                        ),
                        None => ("-".to_string(), String::new()),
                    };
                    report.push_str(&format!(
                        "{:<20} vs {:<20} {:>7}  {}\n",
                        home.as_str(),
                        away.as_str(),
                        score,
                        notes
                    ));
                }
                Fixture::Bye(player) => {
                    report.push_str(&format!("{:<20}    {:<20} {:>7}\n", player.as_str(), "(bye)", ""));
                }
            }
        }
        report.push('\n');
    }

    report.push_str(&format!("Champion: {}\n", summary.champion));
    report
}

fn notes(result: &MatchResult) -> String {
    let mut notes = vec![format!("{} wins", result.winner)];
    if result.went_to_sudden_death() {
        notes.push(format!("sudden death x{}", result.sudden_death_rounds));
    }
    if result.decided_early {
        notes.push("decided early".to_string());
    }
    notes.join(", ")
}

/// Render the summary as pretty JSON
pub fn to_json(summary: &TournamentSummary) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Print report to stdout
pub fn print_report(summary: &TournamentSummary) {
    println!("{}", generate_report(summary));
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
