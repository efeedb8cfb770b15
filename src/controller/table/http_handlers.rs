use crate::controller::feeds::FeedService;
use crate::model::{Region, Tournament};
use crate::mvu::runtime::{self, SharedModel};
use crate::mvu::table::{Msg, update};
use crate::odds::OddsFormat;
use crate::view;
use actix_web::web::{Data, Query};
use actix_web::HttpResponse;
use std::collections::HashMap;

use super::SortKey;

/// Renders the table fragment. Query parameters are the mutation surface:
/// `tournament`, `region`, `format`, `q`, `sort` (re-click toggles
/// direction), `expand` (re-click collapses). A bare request just re-renders
/// the current state, which is what the periodic htmx poll sends.
pub async fn odds_table(
    query: Query<HashMap<String, String>>,
    model: Data<SharedModel>,
    feeds: Data<FeedService>,
) -> HttpResponse {
    let mut effects = Vec::new();
    {
        let mut m = model.write().await;
        if let Some(region) = query.get("region").and_then(|s| Region::from_param(s)) {
            effects.extend(update(&mut m, Msg::RegionSelected(region)));
        }
        if let Some(tournament) = query.get("tournament").and_then(|s| Tournament::from_id(s)) {
            effects.extend(update(&mut m, Msg::TournamentSelected(tournament)));
        }
        if let Some(format) = query.get("format").and_then(|s| OddsFormat::from_param(s)) {
            effects.extend(update(&mut m, Msg::FormatSelected(format)));
        }
        if let Some(text) = query.get("q") {
            effects.extend(update(&mut m, Msg::FilterChanged(text.clone())));
        }
        if let Some(key) = query.get("sort").and_then(|s| SortKey::from_param(s)) {
            effects.extend(update(&mut m, Msg::SortClicked(key)));
        }
        if let Some(name) = query.get("expand") {
            effects.extend(update(&mut m, Msg::RowToggled(name.clone())));
        }
        effects.extend(update(&mut m, Msg::PageLoad));
    }

    // The odds and field fetches are the critical path; enrichment runs
    // behind them without holding up the paint.
    let (critical, background): (Vec<_>, Vec<_>) = runtime::dedupe_effects(effects)
        .into_iter()
        .partition(|e| e.is_critical());
    runtime::drive(model.get_ref(), critical, feeds.get_ref()).await;
    runtime::drive_in_background(
        model.get_ref().clone(),
        background,
        feeds.get_ref().clone(),
    );

    let m = model.read().await;
    let markup = view::table::render_odds_table(&m);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
