use crate::controller::table::{SortKey, average_quote, best_price, tipster_count};
use crate::model::{Market, Player, Quote, display_finish_codes};
use crate::mvu::table::TableModel;
use crate::odds::format_quote;
use crate::resolve::ResolutionStatus;
use maud::{Markup, html};

/// The `/odds` fragment: demo banner, header row with sort targets and
/// each-way terms, one row per player with best-price highlighting, and the
/// single expanded detail row.
#[must_use]
pub fn render_odds_table(model: &TableModel) -> Markup {
    let rows = model.view();

    html! {
        @if model.demo_data {
            div class="demo-banner" { "Demo data - live odds available during major tournaments" }
        }

        div class="table-container" {
            table class="odds-table" {
                thead {
                    tr {
                        th { (sort_link(model, SortKey::Name, "Player")) }
                        th { (sort_link(model, SortKey::WorldRank, "Ranking")) }
                        th { (sort_link(model, SortKey::Tipsters, "Tips")) }
                        th { (sort_link(model, SortKey::Polymarket, "Polymarket")) }
                        @for book in &model.bookmakers {
                            th {
                                img class="book-logo" src=(book.logo) alt=(book.name);
                                div class="book-name" { (book.name) }
                                div class="ew-terms" { (model.each_way_terms(book)) }
                            }
                        }
                        th class="best-summary" { (sort_link(model, SortKey::AveragePrice, "Best / Avg")) }
                    }
                }
                tbody {
                    @if rows.is_empty() {
                        tr {
                            td colspan=(model.bookmakers.len() + 5) { "No players to show" }
                        }
                    }
                    @for player in rows {
                        (render_player_row(model, player))
                        @if model.expanded.as_deref() == Some(player.name.as_str()) {
                            (render_expanded_row(model, player))
                        }
                    }
                }
            }
        }
    }
}

fn render_player_row(model: &TableModel, player: &Player) -> Markup {
    let best = best_price(player, Market::Outright);
    let best_value = best.as_price();

    html! {
        tr {
            td class="player-cell" {
                a hx-get=(format!("/odds?expand={}", player.name))
                    hx-target="#odds-table"
                    hx-swap="innerHTML" {
                    @if player.resolution == ResolutionStatus::Unresolved {
                        span class="unresolved" title="name not matched to rankings feed" { (player.name) }
                    } @else {
                        span { (player.name) }
                    }
                }
            }
            td class="rank-cell" {
                @match player.world_rank {
                    Some(rank) => { "#" (rank) }
                    None => { "-" }
                }
            }
            td class="tips-cell" {
                @let picks = tipster_count(player);
                span class="consensus-bar" style=(format!("width:{}px", picks * 8)) {}
                " " (picks)
            }
            td class="poly-cell" {
                @match crate::controller::table::polymarket_price(player, &model.polymarket) {
                    Some(price) => { (format_quote(Quote::Price(price), model.odds_format)) }
                    None => { "-" }
                }
            }
            @for book in &model.bookmakers {
                @let quote = player
                    .bookmaker_odds
                    .get(book.name)
                    .map(|record| record.outright)
                    .unwrap_or_default();
                @let is_best = best_value.is_some() && quote.as_price() == best_value;
                td class=[is_best.then_some("best")] {
                    (format_quote(quote, model.odds_format))
                }
            }
            td class="best-summary" {
                span class="best" { (format_quote(best, model.odds_format)) }
                span class="avg" { " / " (format_quote(average_quote(player), model.odds_format)) }
            }
        }
    }
}

fn render_expanded_row(model: &TableModel, player: &Player) -> Markup {
    html! {
        tr class="expanded" {
            td colspan=(model.bookmakers.len() + 5) {
                div class="expanded-grid" {
                    div {
                        div class="stat-label" { "Nationality" }
                        div class="stat-value" { (player.nationality) }
                    }
                    div {
                        div class="stat-label" { "Recent Form" }
                        div class="stat-value" { (display_finish_codes(&player.recent_form)) }
                    }
                    div {
                        div class="stat-label" { "Course History" }
                        div class="stat-value" { (display_finish_codes(&player.event_history)) }
                    }
                    @for market in Market::SUB_MARKETS {
                        div {
                            div class="stat-label" { "Best " (market.label()) }
                            div class="stat-value" {
                                (format_quote(best_price(player, market), model.odds_format))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn sort_link(model: &TableModel, key: SortKey, label: &str) -> Markup {
    let arrow = if model.sort_key == key {
        match model.sort_dir {
            crate::controller::table::SortDir::Asc => " \u{2191}",
            crate::controller::table::SortDir::Desc => " \u{2193}",
        }
    } else {
        ""
    };
    html! {
        a hx-get=(format!("/odds?sort={}", key.as_param()))
            hx-target="#odds-table"
            hx-swap="innerHTML" {
            (label) (arrow)
        }
    }
}
