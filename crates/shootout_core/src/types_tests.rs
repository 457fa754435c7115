use super::*;

fn names(list: &[&str]) -> Vec<PlayerName> {
    list.iter().map(|&name| PlayerName::from(name)).collect()
}

#[test]
fn player_name_serializes_as_plain_string() {
    let json = serde_json::to_string(&PlayerName::from("Ana")).unwrap();
    assert_eq!(json, "\"Ana\"");
    assert_eq!(PlayerName::from("Ana").to_string(), "Ana");
}

#[test]
fn validate_players_accepts_two_distinct() {
    assert!(validate_players(&names(&["Ana", "Bo"])).is_ok());
}

#[test]
fn validate_players_rejects_short_fields() {
    let err = validate_players(&names(&["Ana"])).unwrap_err();
    assert_eq!(err.issue(), &ConfigIssue::TooFewPlayers { found: 1 });

    let err = validate_players(&[]).unwrap_err();
    assert_eq!(err.issue(), &ConfigIssue::TooFewPlayers { found: 0 });
}

#[test]
fn validate_players_rejects_duplicates_and_blanks() {
    let err = validate_players(&names(&["Ana", "Bo", "Ana"])).unwrap_err();
    assert_eq!(err.issue(), &ConfigIssue::DuplicatePlayer("Ana".into()));

    let err = validate_players(&names(&["Ana", "  "])).unwrap_err();
    assert_eq!(err.issue(), &ConfigIssue::BlankPlayerName);
}

#[test]
fn match_state_tracks_leader_and_reach() {
    let mut state = MatchState::new("Ana".into(), "Bo".into());
    assert_eq!(state.leader(), None);

    state.record(Side::Home, true);
    state.record(Side::Away, false);
    state.record(Side::Home, true);
    state.record(Side::Away, false);

    assert_eq!(state.leader(), Some(Side::Home));
    assert_eq!(state.attempts(Side::Away), 2);
    // 2-0 with one kick each left: Bo can reach 1 at most
    assert!(state.is_out_of_reach(1));
    // two kicks left: Bo could still level
    assert!(!state.is_out_of_reach(2));
}

#[test]
fn finished_match_reports_scores_in_fixture_order() {
    let mut state = MatchState::new("Ana".into(), "Bo".into());
    state.record(Side::Home, false);
    state.record(Side::Away, true);

    let result = state.finish(Side::Away, 0, false);
    assert_eq!(result.winner, PlayerName::from("Bo"));
    assert_eq!(result.loser, PlayerName::from("Ana"));
    assert_eq!(result.final_scores[0].0, PlayerName::from("Ana"));
    assert_eq!(result.score_of(&"Bo".into()), Some(1));
    assert_eq!(result.attempts_of(&"Ana".into()), Some(1));
    assert_eq!(result.score_of(&"Cy".into()), None);
    assert_eq!(result.scoreline().to_string(), "Ana 0 - 1 Bo");
    assert!(!result.went_to_sudden_death());
}
