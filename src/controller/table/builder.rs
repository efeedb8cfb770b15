use crate::controller::feeds::{OddsPayload, RawQuote};
use crate::model::{
    FinishCode, MarketPrices, NO_PRICE_SENTINEL, Player, Quote, canonical_bookmaker,
};
use crate::normalize::normalize;
use crate::resolve::{ResolutionStatus, resolve};
use ahash::AHashMap;
use log::debug;
use std::collections::HashMap;

/// Builds the player list from a primary odds payload. Raw names are resolved
/// against the canonical pool, bookmaker spellings are normalized through the
/// catalog, and two feed rows that resolve to the same player are merged into
/// one row.
#[must_use]
pub fn build_players(payload: &OddsPayload, pool: &[String]) -> Vec<Player> {
    let mut by_name: AHashMap<String, Player> = AHashMap::new();

    for (raw_name, per_book) in &payload.prices {
        let resolved = resolve(raw_name, pool);
        let key = normalize(&resolved.name);
        let player = by_name
            .entry(key)
            .or_insert_with(|| Player::new(resolved.name.clone(), resolved.status));

        for (raw_book, raw_quote) in per_book {
            let Some(book) = canonical_bookmaker(raw_book) else {
                debug!("dropping price from unknown bookmaker {raw_book:?}");
                continue;
            };
            player
                .bookmaker_odds
                .insert(book.name.to_string(), to_market_prices(*raw_quote));
        }
    }

    let mut players: Vec<Player> = by_name.into_values().collect();
    for player in &mut players {
        player.average_price = average_outright(&player.bookmaker_odds);
    }
    players
}

/// Normalizes the feed's each-way override keys through the bookmaker
/// catalog, the same way the price path does; terms for books the table does
/// not know are dropped.
#[must_use]
pub fn canonical_each_way(raw: &HashMap<String, String>) -> HashMap<String, String> {
    raw.iter()
        .filter_map(|(raw_book, terms)| {
            let Some(book) = canonical_bookmaker(raw_book) else {
                debug!("dropping each-way terms from unknown bookmaker {raw_book:?}");
                return None;
            };
            Some((book.name.to_string(), terms.clone()))
        })
        .collect()
}

fn to_market_prices(raw: RawQuote) -> MarketPrices {
    fn quote(price: Option<f64>) -> Quote {
        match price {
            Some(p) if p.is_finite() && p >= 1.0 => Quote::Price(p),
            _ => Quote::Unavailable,
        }
    }

    match raw {
        RawQuote::Price(win) => MarketPrices {
            outright: quote(Some(win)),
            ..MarketPrices::default()
        },
        RawQuote::Markets(m) => MarketPrices {
            outright: quote(Some(m.win)),
            top_5: quote(m.top_5),
            top_10: quote(m.top_10),
            top_20: quote(m.top_20),
            top_30: quote(m.top_30),
            top_40: quote(m.top_40),
            round_1_leader: quote(m.round_1_leader),
        },
    }
}

/// Mean of the finite outright prices; the sentinel when there are none, so a
/// priceless player sorts last instead of breaking the sort.
#[must_use]
pub fn average_outright(odds: &AHashMap<String, MarketPrices>) -> f64 {
    let prices: Vec<f64> = odds
        .values()
        .filter_map(|record| record.outright.as_price())
        .collect();
    if prices.is_empty() {
        NO_PRICE_SENTINEL
    } else {
        prices.iter().sum::<f64>() / prices.len() as f64
    }
}

/// Re-runs resolution for rows that are still carrying a foreign spelling.
/// Called whenever the canonical pool grows; the auxiliary merges below are
/// re-applied afterwards so data recorded under the old spelling follows the
/// row to its upgraded name.
pub fn refresh_resolution(players: &mut [Player], pool: &[String]) {
    for player in players.iter_mut() {
        if player.resolution == ResolutionStatus::Unresolved {
            let resolved = resolve(&player.name, pool);
            if resolved.status != ResolutionStatus::Unresolved {
                player.name = resolved.name;
                player.resolution = resolved.status;
            }
        }
    }
}

/// Locates the row an auxiliary feed's raw name belongs to, by the same
/// resolve-and-match procedure the builder uses.
fn find_player_mut<'a>(players: &'a mut [Player], raw_name: &str) -> Option<&'a mut Player> {
    let names: Vec<String> = players.iter().map(|p| p.name.clone()).collect();
    let key = normalize(&resolve(raw_name, &names).name);
    players.iter_mut().find(|p| normalize(&p.name) == key)
}

pub fn apply_rankings(players: &mut [Player], rankings: &HashMap<String, u32>) {
    for (raw_name, rank) in rankings {
        if let Some(player) = find_player_mut(players, raw_name) {
            player.world_rank = Some(*rank);
        }
    }
}

pub fn apply_nationalities(players: &mut [Player], nationalities: &HashMap<String, String>) {
    for (raw_name, code) in nationalities {
        if let Some(player) = find_player_mut(players, raw_name) {
            player.nationality = code.clone();
        }
    }
}

/// Pick sets mirror the current tipster map exactly: a reload that dropped a
/// handle, or a whole player, drops it here too.
pub fn apply_tipsters(players: &mut [Player], picks: &HashMap<String, Vec<String>>) {
    for player in players.iter_mut() {
        player.tipster_picks.clear();
    }
    for (raw_name, handles) in picks {
        if let Some(player) = find_player_mut(players, raw_name) {
            // Extend, not assign: two raw spellings may resolve to one row.
            player.tipster_picks.extend(handles.iter().cloned());
        }
    }
}

pub fn apply_current_form(players: &mut [Player], form: &HashMap<String, Vec<FinishCode>>) {
    for (raw_name, codes) in form {
        if let Some(player) = find_player_mut(players, raw_name) {
            player.recent_form = codes.clone();
        }
    }
}

pub fn apply_event_history(players: &mut [Player], history: &HashMap<String, Vec<FinishCode>>) {
    for (raw_name, codes) in history {
        if let Some(player) = find_player_mut(players, raw_name) {
            player.event_history = codes.clone();
        }
    }
}
