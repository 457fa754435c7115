use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(expand_two_letter_flags(args.iter().copied())).unwrap()
}

#[test]
fn two_letter_penalty_flag_is_accepted() {
    let cli = parse(&["tourney", "A", "B", "-pc", "4"]);
    assert_eq!(cli.penalty_count, Some(4));
    assert_eq!(cli.players, vec!["A", "B"]);

    assert_eq!(parse(&["tourney", "-pc=8", "A", "B"]).penalty_count, Some(8));
}

#[test]
fn other_spellings_still_parse() {
    for flag in ["-p", "--pc", "--penalty-count"] {
        assert_eq!(parse(&["tourney", flag, "10", "A", "B"]).penalty_count, Some(10));
    }
    let cli = parse(&["tourney", "-s", "2.5", "A", "B"]);
    assert_eq!(cli.speed, Some(2.5));
    assert_eq!(cli.penalty_count, None);
}

#[test]
fn players_after_double_dash_are_untouched() {
    let cli = parse(&["tourney", "A", "--", "-pc"]);
    assert_eq!(cli.players, vec!["A", "-pc"]);
    assert_eq!(cli.penalty_count, None);
}

#[test]
fn invalid_settings_fail_before_the_draw() {
    let cli = parse(&["tourney", "A", "B", "-pc", "0"]);
    let err = run(cli).unwrap_err();
    assert!(format!("{err:#}").contains("penalty count"), "{err:#}");

    let cli = parse(&["tourney", "A", "B", "-s", "0"]);
    assert!(run(cli).is_err());
}
