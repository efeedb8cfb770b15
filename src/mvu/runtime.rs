use crate::controller::feeds::FeedService;
use crate::mvu::table::{Effect, Msg, TableModel, update};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub type SharedModel = Arc<RwLock<TableModel>>;

/// Delay applied to enrichment fetches so the primary table paints first.
/// Scheduling only; correctness never depends on arrival order.
pub const ENRICHMENT_STAGGER: Duration = Duration::from_millis(300);

/// Collapses duplicate fetches out of one request's message batch. A
/// tournament switch resets `loaded`, so the trailing page-load message
/// would otherwise re-emit the same tournament-scoped fetches in the same
/// request.
#[must_use]
pub fn dedupe_effects(effects: Vec<Effect>) -> Vec<Effect> {
    let mut unique: Vec<Effect> = Vec::with_capacity(effects.len());
    for effect in effects {
        if !unique.contains(&effect) {
            unique.push(effect);
        }
    }
    unique
}

/// Drains a batch of effects: fetches run concurrently, the resulting
/// messages are folded back through `update` under the write lock, and any
/// follow-up effects join the next batch.
pub async fn drive(model: &SharedModel, mut effects: Vec<Effect>, feeds: &FeedService) {
    while !effects.is_empty() {
        let batch: Vec<Effect> = std::mem::take(&mut effects);
        let msgs =
            futures::future::join_all(batch.into_iter().map(|e| run_effect(e, feeds))).await;

        let mut model = model.write().await;
        for msg in msgs.into_iter().flatten() {
            effects.extend(update(&mut model, msg));
        }
    }
}

/// Spawns the non-critical effects behind a short stagger.
pub fn drive_in_background(model: SharedModel, effects: Vec<Effect>, feeds: FeedService) {
    if effects.is_empty() {
        return;
    }
    tokio::spawn(async move {
        tokio::time::sleep(ENRICHMENT_STAGGER).await;
        drive(&model, effects, &feeds).await;
    });
}

/// Executes one fetch effect. A failed auxiliary fetch produces no message
/// at all ("nothing new"); the odds fetch always produces one because it
/// degrades to demo data instead of failing.
async fn run_effect(effect: Effect, feeds: &FeedService) -> Option<Msg> {
    match effect {
        Effect::FetchOdds(tournament) => {
            let (payload, demo) = feeds.fetch_outright_odds(tournament).await;
            Some(Msg::OddsLoaded {
                tournament,
                payload,
                demo,
            })
        }
        Effect::FetchField(tournament) => {
            let field = feeds.fetch_confirmed_field(tournament).await;
            Some(Msg::FieldLoaded { tournament, field })
        }
        Effect::FetchHistory(tournament) => feeds
            .fetch_event_history(tournament)
            .await
            .map(|history| Msg::HistoryLoaded {
                tournament,
                history,
            }),
        Effect::FetchRankings => feeds.fetch_world_rankings().await.map(Msg::RankingsLoaded),
        Effect::FetchNationality => feeds.fetch_nationalities().await.map(Msg::NationalityLoaded),
        Effect::FetchPolymarket => Some(Msg::PolymarketLoaded(feeds.fetch_polymarket().await)),
        Effect::FetchTipsters => feeds.fetch_tipster_picks().await.map(Msg::TipstersLoaded),
        Effect::FetchForm => feeds.fetch_current_form().await.map(Msg::FormLoaded),
    }
}
