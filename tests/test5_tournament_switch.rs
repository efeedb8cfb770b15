use fairway_odds::controller::feeds::{OddsPayload, RawQuote};
use fairway_odds::model::{Region, Tournament};
use fairway_odds::mvu::table::{update, Effect, Msg, TableModel};
use std::collections::HashMap;

fn payload_for(players: &[&str]) -> OddsPayload {
    let mut prices = HashMap::new();
    for name in players {
        let per_book: HashMap<String, RawQuote> =
            [("Bet365".to_string(), RawQuote::Price(10.0))].into_iter().collect();
        prices.insert((*name).to_string(), per_book);
    }
    OddsPayload {
        prices,
        each_way: HashMap::new(),
    }
}

#[test]
fn test_page_load_fires_every_fetch_once() {
    let mut model = TableModel::new(Region::Uk);
    let effects = update(&mut model, Msg::PageLoad);
    assert_eq!(effects.len(), 8);
    assert!(effects.contains(&Effect::FetchOdds(Tournament::Masters)));
    assert!(effects.contains(&Effect::FetchRankings));

    // Once loaded, the periodic poll's PageLoad is a no-op.
    update(
        &mut model,
        Msg::OddsLoaded {
            tournament: Tournament::Masters,
            payload: payload_for(&["Jon Rahm"]),
            demo: false,
        },
    );
    assert!(update(&mut model, Msg::PageLoad).is_empty());
}

#[test]
fn test_switch_refetches_tournament_scoped_sources_only() {
    let mut model = TableModel::new(Region::Uk);
    update(&mut model, Msg::PageLoad);
    update(
        &mut model,
        Msg::OddsLoaded {
            tournament: Tournament::Masters,
            payload: payload_for(&["Jon Rahm"]),
            demo: false,
        },
    );

    let effects = update(&mut model, Msg::TournamentSelected(Tournament::UsOpen));
    assert_eq!(
        effects,
        vec![
            Effect::FetchOdds(Tournament::UsOpen),
            Effect::FetchField(Tournament::UsOpen),
            Effect::FetchHistory(Tournament::UsOpen),
        ]
    );
    assert!(model.players.is_empty());
    assert!(model.confirmed_field.is_none());

    // Re-selecting the active tournament does nothing.
    assert!(update(&mut model, Msg::TournamentSelected(Tournament::UsOpen)).is_empty());
}

#[test]
fn test_stale_odds_for_previous_tournament_are_dropped() {
    let mut model = TableModel::new(Region::Uk);
    update(&mut model, Msg::PageLoad);
    update(&mut model, Msg::TournamentSelected(Tournament::TheOpen));

    // The Masters response arrives after the switch; it must not land.
    update(
        &mut model,
        Msg::OddsLoaded {
            tournament: Tournament::Masters,
            payload: payload_for(&["Jon Rahm", "Rory McIlroy"]),
            demo: false,
        },
    );
    assert!(model.players.is_empty());
    assert!(!model.loaded);

    update(
        &mut model,
        Msg::OddsLoaded {
            tournament: Tournament::TheOpen,
            payload: payload_for(&["Rory McIlroy"]),
            demo: false,
        },
    );
    assert_eq!(model.players.len(), 1);
    assert!(model.loaded);
}

#[test]
fn test_stale_field_and_history_are_dropped() {
    let mut model = TableModel::new(Region::Uk);
    update(&mut model, Msg::TournamentSelected(Tournament::PgaChampionship));

    update(
        &mut model,
        Msg::FieldLoaded {
            tournament: Tournament::Masters,
            field: Some(vec!["Jon Rahm".to_string()]),
        },
    );
    assert!(model.confirmed_field.is_none());

    update(
        &mut model,
        Msg::HistoryLoaded {
            tournament: Tournament::Masters,
            history: HashMap::new(),
        },
    );
    assert!(model.event_history.is_empty());

    update(
        &mut model,
        Msg::FieldLoaded {
            tournament: Tournament::PgaChampionship,
            field: Some(vec!["Jon Rahm".to_string()]),
        },
    );
    assert_eq!(
        model.confirmed_field,
        Some(vec!["Jon Rahm".to_string()])
    );
}

#[test]
fn test_region_switch_changes_books_and_default_format() {
    use fairway_odds::odds::OddsFormat;

    let mut model = TableModel::new(Region::Uk);
    assert_eq!(model.odds_format, OddsFormat::Decimal);
    assert!(model.bookmakers.iter().any(|b| b.name == "Coral"));

    update(&mut model, Msg::RegionSelected(Region::Us));
    assert_eq!(model.odds_format, OddsFormat::American);
    assert!(model.bookmakers.iter().any(|b| b.name == "DraftKings"));
    assert!(model.bookmakers.iter().all(|b| b.name != "Coral"));

    // Explicit format choice survives a redundant region click.
    update(&mut model, Msg::FormatSelected(OddsFormat::Fractional));
    update(&mut model, Msg::RegionSelected(Region::Us));
    assert_eq!(model.odds_format, OddsFormat::Fractional);
}

#[test]
fn test_each_way_overrides_follow_catalog_spellings() {
    let mut model = TableModel::new(Region::Uk);
    let mut payload = payload_for(&["Jon Rahm"]);
    payload.each_way = [
        ("bet 365".to_string(), "8 places".to_string()),
        ("Mystery Books".to_string(), "2 places".to_string()),
    ]
    .into_iter()
    .collect();

    update(&mut model, Msg::PageLoad);
    update(
        &mut model,
        Msg::OddsLoaded {
            tournament: Tournament::Masters,
            payload,
            demo: false,
        },
    );

    let bet365 = model
        .bookmakers
        .iter()
        .copied()
        .find(|b| b.name == "Bet365")
        .expect("catalog");
    let betway = model
        .bookmakers
        .iter()
        .copied()
        .find(|b| b.name == "Betway")
        .expect("catalog");

    // The feed spelling lands under the catalog name; books without an
    // override keep their catalog terms; unknown books are dropped.
    assert_eq!(model.each_way_terms(bet365), "8 places");
    assert_eq!(model.each_way_terms(betway), "6 places");
    assert_eq!(model.each_way_overrides.len(), 1);
}

#[test]
fn test_tipster_reload_replaces_pick_sets() {
    let mut model = TableModel::new(Region::Uk);
    update(&mut model, Msg::PageLoad);
    update(
        &mut model,
        Msg::OddsLoaded {
            tournament: Tournament::Masters,
            payload: payload_for(&["Jon Rahm", "Rory McIlroy"]),
            demo: false,
        },
    );

    let first: HashMap<String, Vec<String>> = [
        (
            "Jon Rahm".to_string(),
            vec!["@golfpicks".to_string(), "@fairwayform".to_string()],
        ),
        ("Rory McIlroy".to_string(), vec!["@golfpicks".to_string()]),
    ]
    .into_iter()
    .collect();
    update(&mut model, Msg::TipstersLoaded(first));

    let rahm = |model: &TableModel| {
        model
            .players
            .iter()
            .find(|p| p.name == "Jon Rahm")
            .expect("row")
            .tipster_picks
            .len()
    };
    assert_eq!(rahm(&model), 2);

    // A reload that dropped a handle for one player and the other player
    // entirely must shrink the pick sets, not accrete onto them.
    let second: HashMap<String, Vec<String>> = [(
        "Jon Rahm".to_string(),
        vec!["@golfpicks".to_string()],
    )]
    .into_iter()
    .collect();
    update(&mut model, Msg::TipstersLoaded(second));

    assert_eq!(rahm(&model), 1);
    let mcilroy = model
        .players
        .iter()
        .find(|p| p.name == "Rory McIlroy")
        .expect("row");
    assert!(mcilroy.tipster_picks.is_empty());
}

#[test]
fn test_switch_plus_page_load_dedupes_to_single_fetches() {
    use fairway_odds::mvu::runtime::dedupe_effects;

    let mut model = TableModel::new(Region::Uk);
    update(&mut model, Msg::PageLoad);
    update(
        &mut model,
        Msg::OddsLoaded {
            tournament: Tournament::Masters,
            payload: payload_for(&["Jon Rahm"]),
            demo: false,
        },
    );

    // One request carrying ?tournament= runs the switch and then the
    // unconditional page-load message; the switch resets `loaded`, so the
    // page-load re-emits the tournament-scoped fetches.
    let mut effects = update(&mut model, Msg::TournamentSelected(Tournament::UsOpen));
    effects.extend(update(&mut model, Msg::PageLoad));
    assert_eq!(effects.len(), 11);

    let effects = dedupe_effects(effects);
    assert_eq!(effects.len(), 8);
    let odds_fetches = effects
        .iter()
        .filter(|e| matches!(e, Effect::FetchOdds(_)))
        .count();
    assert_eq!(odds_fetches, 1);
    assert!(effects.contains(&Effect::FetchOdds(Tournament::UsOpen)));
    assert!(effects.contains(&Effect::FetchRankings));
}

#[test]
fn test_rankings_arriving_after_odds_upgrade_unresolved_names() {
    use fairway_odds::resolve::ResolutionStatus;

    let mut model = TableModel::new(Region::Uk);
    update(&mut model, Msg::PageLoad);
    update(
        &mut model,
        Msg::OddsLoaded {
            tournament: Tournament::Masters,
            payload: payload_for(&["S. Scheffler"]),
            demo: false,
        },
    );
    assert_eq!(model.players[0].resolution, ResolutionStatus::Unresolved);

    let rankings: HashMap<String, u32> =
        [("Scottie Scheffler".to_string(), 1)].into_iter().collect();
    update(&mut model, Msg::RankingsLoaded(rankings));

    assert_eq!(model.players[0].name, "Scottie Scheffler");
    assert_eq!(model.players[0].resolution, ResolutionStatus::Surname);
    assert_eq!(model.players[0].world_rank, Some(1));
}
