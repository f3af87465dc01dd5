use chrono::{DateTime, TimeZone, Utc};
use engine::{Engine, GameType, ResultFilter, SessionDraft, SessionFilter, TableType};

fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, 19, 0, 0).unwrap()
}

/// Three sessions: a live cash win, an online tournament loss and a
/// break-even home sit-n-go.
fn seeded() -> Engine {
    let mut engine = Engine::new();

    engine.new_session(SessionDraft {
        location: "Bellagio".to_string(),
        game_type: GameType::Cash,
        table_type: TableType::Live,
        stakes: "2/5".to_string(),
        date: day(1),
        hours: 5.0,
        buy_in: 500.0,
        cash_out: 800.0,
        hands: None,
        tags: vec!["vegas".to_string(), "trip".to_string()],
        notes: Some("ran hot all night".to_string()),
        rating: Some(5),
    });
    engine.new_session(SessionDraft {
        location: "PokerStars".to_string(),
        game_type: GameType::Tournament,
        table_type: TableType::Online,
        stakes: "$55".to_string(),
        date: day(2),
        hours: 3.5,
        buy_in: 55.0,
        cash_out: 0.0,
        hands: Some(240),
        tags: vec!["mtt".to_string()],
        notes: None,
        rating: None,
    });
    engine.new_session(SessionDraft {
        location: "Home game".to_string(),
        game_type: GameType::SitNGo,
        table_type: TableType::Home,
        stakes: "1/1".to_string(),
        date: day(3),
        hours: 2.0,
        buy_in: 100.0,
        cash_out: 100.0,
        hands: None,
        tags: Vec::new(),
        notes: None,
        rating: None,
    });

    engine
}

#[test]
fn empty_query_and_filters_return_all_newest_first() {
    let engine = seeded();

    let found = engine.search_sessions("", &SessionFilter::default());

    let locations: Vec<&str> = found.iter().map(|s| s.location.as_str()).collect();
    assert_eq!(locations, ["Home game", "PokerStars", "Bellagio"]);
}

#[test]
fn query_matches_location_case_insensitively() {
    let engine = seeded();

    let found = engine.search_sessions("BELLA", &SessionFilter::default());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].location, "Bellagio");
}

#[test]
fn query_matches_tags() {
    let engine = seeded();

    let found = engine.search_sessions("mtt", &SessionFilter::default());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].location, "PokerStars");
}

#[test]
fn query_matches_notes() {
    let engine = seeded();

    let found = engine.search_sessions("ran hot", &SessionFilter::default());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].location, "Bellagio");
}

#[test]
fn query_matches_game_type() {
    let engine = seeded();

    let found = engine.search_sessions("tourn", &SessionFilter::default());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].game_type, GameType::Tournament);
}

#[test]
fn query_matches_stakes() {
    let engine = seeded();

    let found = engine.search_sessions("$55", &SessionFilter::default());

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].location, "PokerStars");
}

#[test]
fn location_filter_is_substring_match() {
    let engine = seeded();

    let filter = SessionFilter {
        location: Some("star".to_string()),
        ..Default::default()
    };
    let found = engine.search_sessions("", &filter);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].location, "PokerStars");
}

#[test]
fn game_type_filter_is_exact() {
    let engine = seeded();

    let filter = SessionFilter {
        game_type: Some(GameType::Cash),
        ..Default::default()
    };
    let found = engine.search_sessions("", &filter);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].game_type, GameType::Cash);
}

#[test]
fn table_type_filter_is_exact() {
    let engine = seeded();

    let filter = SessionFilter {
        table_type: Some(TableType::Online),
        ..Default::default()
    };
    let found = engine.search_sessions("", &filter);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].table_type, TableType::Online);
}

#[test]
fn result_win_selects_positive_profit_only() {
    let engine = seeded();

    let filter = SessionFilter {
        result: Some(ResultFilter::Win),
        ..Default::default()
    };
    let found = engine.search_sessions("", &filter);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].location, "Bellagio");
}

#[test]
fn result_loss_includes_break_even() {
    let engine = seeded();

    let filter = SessionFilter {
        result: Some(ResultFilter::Loss),
        ..Default::default()
    };
    let found = engine.search_sessions("", &filter);

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|s| s.profit <= 0.0));
}

#[test]
fn filters_are_conjunctive() {
    let engine = seeded();

    let filter = SessionFilter {
        game_type: Some(GameType::Cash),
        result: Some(ResultFilter::Loss),
        ..Default::default()
    };

    assert!(engine.search_sessions("", &filter).is_empty());
}

#[test]
fn query_and_filters_combine() {
    let engine = seeded();

    let filter = SessionFilter {
        table_type: Some(TableType::Live),
        ..Default::default()
    };
    let found = engine.search_sessions("vegas", &filter);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].location, "Bellagio");
}

#[test]
fn date_bounds_are_inclusive() {
    let engine = seeded();

    let from = SessionFilter {
        date_from: Some(day(2)),
        ..Default::default()
    };
    assert_eq!(engine.search_sessions("", &from).len(), 2);

    let to = SessionFilter {
        date_to: Some(day(2)),
        ..Default::default()
    };
    assert_eq!(engine.search_sessions("", &to).len(), 2);

    let exact = SessionFilter {
        date_from: Some(day(2)),
        date_to: Some(day(2)),
        ..Default::default()
    };
    let found = engine.search_sessions("", &exact);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].location, "PokerStars");
}
