use crate::HTMX_PATH;
use crate::model::{Region, Tournament};
use crate::mvu::table::TableModel;
use crate::odds::OddsFormat;
use maud::{DOCTYPE, Markup, html};

/// Page shell: header, tournament tabs, search box, format selector, region
/// toggle, and the htmx-refreshed table target.
#[must_use]
pub fn render_index_template(model: &TableModel) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "the Fairway - " (model.tournament.display_name()) }
                link rel="stylesheet" href="/static/styles.css";
                script src=(HTMX_PATH) {}
            }
            body {
                div class="header" {
                    div class="logo-text" { "the Fairway" }
                    div class="tagline" { "Better Odds. Better Bets." }
                    div class="tabs" {
                        @for tournament in Tournament::ALL {
                            a class=(tab_class(model, tournament))
                                hx-get=(format!("/odds?tournament={}", tournament.id()))
                                hx-target="#odds-table"
                                hx-swap="innerHTML" {
                                (tournament.display_name())
                            }
                        }
                    }
                }

                div class="controls" {
                    input type="text" class="search" name="q"
                        placeholder="Search players..."
                        hx-get="/odds"
                        hx-target="#odds-table"
                        hx-swap="innerHTML"
                        hx-trigger="keyup changed delay:300ms";
                    div class="format-picker" {
                        @for format in [OddsFormat::Decimal, OddsFormat::Fractional, OddsFormat::American] {
                            a class=(format_class(model, format))
                                hx-get=(format!("/odds?format={}", format.as_param()))
                                hx-target="#odds-table"
                                hx-swap="innerHTML" {
                                (format.as_param())
                            }
                        }
                    }
                }

                div id="odds-table"
                    hx-get="/odds"
                    hx-trigger="load, every 60s"
                    hx-swap="innerHTML" {}

                div class="footer" {
                    div class="region-picker" {
                        @for region in [Region::Uk, Region::Us] {
                            a class=(region_class(model, region))
                                hx-get=(format!("/odds?region={}", region.as_param()))
                                hx-target="#odds-table"
                                hx-swap="innerHTML" {
                                (region.as_param().to_uppercase())
                            }
                        }
                    }
                    div { "18+ Only \u{2022} BeGambleAware.org \u{2022} When the fun stops, stop." }
                }
            }
        }
    }
}

fn tab_class(model: &TableModel, tournament: Tournament) -> &'static str {
    if model.tournament == tournament {
        "tab active"
    } else {
        "tab"
    }
}

fn format_class(model: &TableModel, format: OddsFormat) -> &'static str {
    if model.odds_format == format {
        "format active"
    } else {
        "format"
    }
}

fn region_class(model: &TableModel, region: Region) -> &'static str {
    if model.region == region {
        "region active"
    } else {
        "region"
    }
}
