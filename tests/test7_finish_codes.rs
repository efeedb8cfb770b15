use fairway_odds::model::{FinishCode, display_finish_codes, parse_finish_codes};

#[test]
fn test_single_codes() {
    assert_eq!(FinishCode::parse("1"), Some(FinishCode::Position(1)));
    assert_eq!(FinishCode::parse("T5"), Some(FinishCode::Tied(5)));
    assert_eq!(FinishCode::parse("t12"), Some(FinishCode::Tied(12)));
    assert_eq!(FinishCode::parse("MC"), Some(FinishCode::MissedCut));
    assert_eq!(FinishCode::parse("cut"), Some(FinishCode::MissedCut));
    assert_eq!(FinishCode::parse("WD"), Some(FinishCode::Withdrew));
    assert_eq!(FinishCode::parse("DQ"), Some(FinishCode::Disqualified));
    assert_eq!(FinishCode::parse("abc"), None);
    assert_eq!(FinishCode::parse("Txx"), None);
}

#[test]
fn test_feed_strings_round_trip_through_display() {
    let codes = parse_finish_codes("T3-MC-1-WD-T17");
    assert_eq!(
        codes,
        vec![
            FinishCode::Tied(3),
            FinishCode::MissedCut,
            FinishCode::Position(1),
            FinishCode::Withdrew,
            FinishCode::Tied(17),
        ]
    );
    assert_eq!(display_finish_codes(&codes), "T3-MC-1-WD-T17");
}

#[test]
fn test_unparseable_tokens_are_dropped() {
    assert_eq!(
        parse_finish_codes("T3-??-5"),
        vec![FinishCode::Tied(3), FinishCode::Position(5)]
    );
    assert!(parse_finish_codes("").is_empty());
}

#[test]
fn test_empty_sequence_displays_a_dash() {
    assert_eq!(display_finish_codes(&[]), "-");
}
