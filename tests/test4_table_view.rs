use fairway_odds::controller::table::{
    apply_rankings, best_price, build_players, filter_players, sort_players, SortDir, SortKey,
};
use fairway_odds::controller::feeds::{OddsPayload, RawQuote};
use fairway_odds::model::{Market, Quote, Region};
use fairway_odds::mvu::table::{update, Msg, TableModel};
use fairway_odds::view::table::render_odds_table;
use scraper::{Html, Selector};
use std::collections::HashMap;

fn payload(rows: &[(&str, &[(&str, f64)])]) -> OddsPayload {
    let mut prices = HashMap::new();
    for (player, quotes) in rows {
        let per_book: HashMap<String, RawQuote> = quotes
            .iter()
            .map(|(book, price)| ((*book).to_string(), RawQuote::Price(*price)))
            .collect();
        prices.insert((*player).to_string(), per_book);
    }
    OddsPayload {
        prices,
        each_way: HashMap::new(),
    }
}

fn loaded_model(payload: OddsPayload) -> TableModel {
    let mut model = TableModel::new(Region::Uk);
    let effects = update(&mut model, Msg::PageLoad);
    assert!(!effects.is_empty());
    let tournament = model.tournament;
    update(
        &mut model,
        Msg::OddsLoaded {
            tournament,
            payload,
            demo: false,
        },
    );
    model
}

#[test]
fn test_average_price_over_populated_books_only() {
    let players = build_players(
        &payload(&[("Rory McIlroy", &[("Bet365", 6.5), ("Betway", 6.0)])]),
        &[],
    );
    assert_eq!(players.len(), 1);
    assert!((players[0].average_price - 6.25).abs() < 1e-9);
}

#[test]
fn test_best_price_is_max_finite_or_unavailable() {
    let players = build_players(
        &payload(&[("Jon Rahm", &[("Bet365", 11.0), ("Coral", 12.0), ("Betway", 0.0)])]),
        &[],
    );
    assert_eq!(best_price(&players[0], Market::Outright), Quote::Price(12.0));
    // No book quotes a sub-market here.
    assert_eq!(best_price(&players[0], Market::Top5), Quote::Unavailable);
}

#[test]
fn test_unknown_bookmaker_spellings_are_dropped() {
    let players = build_players(
        &payload(&[("Jon Rahm", &[("bet 365", 11.0), ("Totally Fake Books", 99.0)])]),
        &[],
    );
    // "bet 365" normalizes onto the catalog; the unknown book is gone.
    assert_eq!(players[0].bookmaker_odds.len(), 1);
    assert!(players[0].bookmaker_odds.contains_key("Bet365"));
}

#[test]
fn test_rows_resolving_to_the_same_player_merge() {
    let pool = vec!["Cameron Smith".to_string()];
    let players = build_players(
        &payload(&[
            ("Cam Smith", &[("Bet365", 26.0)]),
            ("Cameron Smith", &[("Coral", 25.0)]),
        ]),
        &pool,
    );
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Cameron Smith");
    assert_eq!(players[0].bookmaker_odds.len(), 2);
}

#[test]
fn test_unranked_players_sort_last_in_both_directions() {
    let mut players = build_players(
        &payload(&[
            ("Scottie Scheffler", &[("Bet365", 6.0)]),
            ("Rory McIlroy", &[("Bet365", 9.0)]),
            ("Unranked Amateur", &[("Bet365", 500.0)]),
        ]),
        &[],
    );
    let rankings: HashMap<String, u32> =
        [("Scottie Scheffler", 1), ("Rory McIlroy", 2)]
            .into_iter()
            .map(|(n, r)| (n.to_string(), r))
            .collect();
    apply_rankings(&mut players, &rankings);

    let polymarket = HashMap::new();
    for dir in [SortDir::Asc, SortDir::Desc] {
        let mut rows = filter_players(&players, "", None, &[]);
        sort_players(&mut rows, SortKey::WorldRank, dir, &polymarket);
        assert_eq!(rows.last().expect("rows").name, "Unranked Amateur");
        assert!(rows[0].world_rank.is_some());
    }
}

#[test]
fn test_confirmed_field_hides_everyone_else() {
    let players = build_players(
        &payload(&[
            ("Rory McIlroy", &[("Bet365", 9.0)]),
            ("Jon Rahm", &[("Bet365", 11.0)]),
        ]),
        &[],
    );
    let field = vec!["Rory McIlroy".to_string()];
    let rows = filter_players(&players, "", Some(&field), &[]);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Rory McIlroy");

    // An empty field list means "not yet published", not "nobody plays".
    let rows = filter_players(&players, "", Some(&[]), &[]);
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_rendered_table_headers_and_rows() {
    let model = loaded_model(payload(&[
        ("Scottie Scheffler", &[("Bet365", 6.0), ("Coral", 7.0)]),
        ("Rory McIlroy", &[("Bet365", 9.0)]),
    ]));
    let html = render_odds_table(&model).into_string();
    let doc = Html::parse_fragment(&html);

    let headers = Selector::parse("thead th").expect("selector");
    let header_count = doc.select(&headers).count();
    assert_eq!(header_count, model.bookmakers.len() + 5);

    let rows = Selector::parse("tbody tr").expect("selector");
    assert_eq!(doc.select(&rows).count(), 2);

    let best = Selector::parse("td.best").expect("selector");
    let best_cells: Vec<String> = doc
        .select(&best)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect();
    assert!(best_cells.contains(&"7".to_string()));
    assert!(best_cells.contains(&"9".to_string()));
}

#[test]
fn test_priceless_player_average_renders_placeholder() {
    // Every quoted price is invalid, so the row has no finite outright price
    // at all; the sort sentinel must not leak into the Best / Avg cell.
    let model = loaded_model(payload(&[("Jon Rahm", &[("Bet365", 0.0)])]));
    assert!(model.players[0].average_price > 900.0);

    let html = render_odds_table(&model).into_string();
    let doc = Html::parse_fragment(&html);
    let summary = Selector::parse("td.best-summary").expect("selector");
    let text: String = doc
        .select(&summary)
        .next()
        .expect("summary cell")
        .text()
        .collect();
    assert_eq!(text.trim(), "- / -");
    assert!(!html.contains("999"));
}

#[test]
fn test_demo_banner_only_on_demo_data() {
    let mut model = loaded_model(payload(&[("Jon Rahm", &[("Bet365", 11.0)])]));
    let banner = Selector::parse("div.demo-banner").expect("selector");

    let html = render_odds_table(&model).into_string();
    assert_eq!(Html::parse_fragment(&html).select(&banner).count(), 0);

    model.demo_data = true;
    let html = render_odds_table(&model).into_string();
    assert_eq!(Html::parse_fragment(&html).select(&banner).count(), 1);
}

#[test]
fn test_expanded_row_shows_sub_market_grid() {
    let mut model = loaded_model(payload(&[("Jon Rahm", &[("Bet365", 11.0)])]));
    update(&mut model, Msg::RowToggled("Jon Rahm".to_string()));

    let html = render_odds_table(&model).into_string();
    let doc = Html::parse_fragment(&html);
    let expanded = Selector::parse("tr.expanded").expect("selector");
    assert_eq!(doc.select(&expanded).count(), 1);

    let labels = Selector::parse("div.stat-label").expect("selector");
    let texts: Vec<String> = doc
        .select(&labels)
        .map(|l| l.text().collect::<String>())
        .collect();
    assert!(texts.iter().any(|t| t == "Nationality"));
    assert!(texts.iter().any(|t| t.contains("Top 5")));

    // A second toggle collapses it.
    update(&mut model, Msg::RowToggled("Jon Rahm".to_string()));
    let html = render_odds_table(&model).into_string();
    assert_eq!(Html::parse_fragment(&html).select(&expanded).count(), 0);
}

#[test]
fn test_consensus_bar_width_tracks_pick_count() {
    let mut model = loaded_model(payload(&[("Jon Rahm", &[("Bet365", 11.0)])]));
    let tipsters: HashMap<String, Vec<String>> = [(
        "Jon Rahm".to_string(),
        vec!["@golfpicks".to_string(), "@fairwayform".to_string()],
    )]
    .into_iter()
    .collect();
    update(&mut model, Msg::TipstersLoaded(tipsters));

    let html = render_odds_table(&model).into_string();
    let doc = Html::parse_fragment(&html);
    let bar = Selector::parse("span.consensus-bar").expect("selector");
    let style = doc
        .select(&bar)
        .next()
        .expect("bar")
        .value()
        .attr("style")
        .expect("style");
    assert_eq!(style, "width:16px");
}
