//! Bracket and shootout invariants over randomized fields and seeds

use proptest::prelude::*;
use shootout_core::{
    Event, Pacer, PlayerName, RandomOutcomes, Tournament, TournamentConfig, TournamentSummary,
};

fn field(size: usize) -> Vec<PlayerName> {
    (0..size).map(|i| PlayerName::new(format!("P{i}"))).collect()
}

fn play(
    size: usize,
    penalty_count: u32,
    early_finish: bool,
    shuffle: bool,
    seed: u64,
) -> (TournamentSummary, Vec<Event>) {
    let config = TournamentConfig {
        penalty_count,
        early_finish,
        shuffle,
        ..Default::default()
    };
    let mut tournament = Tournament::new(config, RandomOutcomes::seeded(seed))
        .unwrap()
        .with_pacer(Pacer::instant());
    let mut events = Vec::new();
    let summary = tournament
        .run(field(size), |event| events.push(event))
        .unwrap();
    (summary, events)
}

proptest! {
    #[test]
    fn every_match_has_a_strict_winner(
        size in 2usize..12,
        penalty_count in 2u32..11,
        seed in any::<u64>(),
    ) {
        let (summary, _) = play(size, penalty_count, false, false, seed);
        let regulation = penalty_count / 2;

        for result in &summary.matches {
            prop_assert_ne!(&result.winner, &result.loser);
            let winner_goals = result.score_of(&result.winner).unwrap();
            let loser_goals = result.score_of(&result.loser).unwrap();
            prop_assert!(winner_goals > loser_goals);

            let winner_kicks = result.attempts_of(&result.winner).unwrap();
            let loser_kicks = result.attempts_of(&result.loser).unwrap();
            prop_assert_eq!(winner_kicks, loser_kicks);
            prop_assert_eq!(winner_kicks, regulation + result.sudden_death_rounds);
            prop_assert!(!result.decided_early);
        }
    }

    #[test]
    fn one_champion_and_everyone_else_loses_once(
        size in 2usize..16,
        shuffle in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let players = field(size);
        let (summary, events) = play(size, 4, false, shuffle, seed);

        prop_assert!(players.contains(&summary.champion));
        prop_assert_eq!(summary.matches.len(), size - 1);
        for player in &players {
            let losses = summary.matches.iter().filter(|r| &r.loser == player).count();
            let expected = usize::from(player != &summary.champion);
            prop_assert_eq!(losses, expected);
        }

        let champions = events
            .iter()
            .filter(|event| matches!(event, Event::Champion { .. }))
            .count();
        prop_assert_eq!(champions, 1);
    }

    #[test]
    fn round_sizes_shrink_to_a_final(
        size in 2usize..40,
        seed in any::<u64>(),
    ) {
        let (summary, _) = play(size, 2, false, false, seed);
        let sizes = summary.round_sizes();

        prop_assert_eq!(sizes.first().copied(), Some(size));
        prop_assert_eq!(sizes.last().copied(), Some(2));
        for pair in sizes.windows(2) {
            prop_assert!(pair[1] < pair[0]);
            prop_assert_eq!(pair[1], (pair[0] + 1) / 2);
        }
    }

    #[test]
    fn early_finish_never_changes_fairness(
        size in 2usize..10,
        penalty_count in 2u32..11,
        seed in any::<u64>(),
    ) {
        let (summary, _) = play(size, penalty_count, true, false, seed);

        for result in &summary.matches {
            let winner_goals = result.score_of(&result.winner).unwrap();
            let loser_goals = result.score_of(&result.loser).unwrap();
            prop_assert!(winner_goals > loser_goals);
            prop_assert_eq!(
                result.attempts_of(&result.winner),
                result.attempts_of(&result.loser)
            );
            if result.decided_early {
                prop_assert_eq!(result.sudden_death_rounds, 0);
                prop_assert!(result.attempts_of(&result.winner).unwrap() < penalty_count / 2);
            }
        }
    }
}

#[test]
fn attempts_are_emitted_before_their_match_result() {
    let (summary, events) = play(5, 6, false, false, 17);

    let mut open_match = false;
    let mut finished = 0;
    for event in &events {
        match event {
            Event::MatchStarted { .. } => {
                assert!(!open_match);
                open_match = true;
            }
            Event::StepUp { .. }
            | Event::Attempt { .. }
            | Event::SuddenDeath { .. }
            | Event::Decided { .. } => {
                assert!(open_match)
            }
            Event::MatchFinished(_) => {
                assert!(open_match);
                open_match = false;
                finished += 1;
            }
            _ => assert!(!open_match),
        }
    }
    assert_eq!(finished, summary.matches.len());
}

#[test]
fn summary_serializes_to_json() {
    let (summary, _) = play(3, 2, false, false, 1);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["champion"], summary.champion.as_str());
    assert_eq!(json["rounds"][0]["fixtures"][1]["bye"], "P2");
    let restored: TournamentSummary = serde_json::from_value(json).unwrap();
    assert_eq!(restored, summary);
}
