use super::FeedService;
use crate::cache::ttl;
use crate::model::Tournament;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Primary odds feed payload: raw player name -> raw bookmaker name -> price
/// record, plus an optional bookmaker -> each-way-terms mapping.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct OddsPayload {
    #[serde(default)]
    pub prices: HashMap<String, HashMap<String, RawQuote>>,
    #[serde(default)]
    pub each_way: HashMap<String, String>,
}

/// Some bookmakers quote a bare outright price, others a record with
/// sub-markets.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(untagged)]
pub enum RawQuote {
    Price(f64),
    Markets(RawMarkets),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct RawMarkets {
    pub win: f64,
    #[serde(default)]
    pub top_5: Option<f64>,
    #[serde(default)]
    pub top_10: Option<f64>,
    #[serde(default)]
    pub top_20: Option<f64>,
    #[serde(default)]
    pub top_30: Option<f64>,
    #[serde(default)]
    pub top_40: Option<f64>,
    #[serde(default)]
    pub round_1_leader: Option<f64>,
}

impl FeedService {
    /// Cache-first fetch of the primary odds feed for one tournament. On any
    /// failure, or an empty payload, falls back to the built-in demo dataset;
    /// the second element flags demo data so the view can say so.
    pub async fn fetch_outright_odds(&self, tournament: Tournament) -> (OddsPayload, bool) {
        let scope = tournament.feed_key();
        if let Some(cached) = self.cache.get::<OddsPayload>("odds", Some(scope)) {
            return (cached, false);
        }

        match self
            .client
            .get_json::<OddsPayload>(&format!("/v1/odds/{scope}"))
            .await
        {
            Ok(payload) if !payload.prices.is_empty() => {
                self.cache.put("odds", ttl::ODDS, Some(scope), &payload);
                (payload, false)
            }
            Ok(_) => {
                warn!("odds feed for {scope} returned an empty payload, serving demo data");
                (demo_odds(), true)
            }
            Err(e) => {
                warn!("odds feed for {scope} failed ({e}), serving demo data");
                (demo_odds(), true)
            }
        }
    }
}

/// Deterministic demo dataset; keeps the table renderable when the live feed
/// is down or between tournaments.
#[must_use]
pub fn demo_odds() -> OddsPayload {
    const DEMO_PLAYERS: &[(&str, f64)] = &[
        ("Scottie Scheffler", 6.0),
        ("Rory McIlroy", 9.0),
        ("Jon Rahm", 11.0),
        ("Viktor Hovland", 19.0),
        ("Brooks Koepka", 21.0),
    ];
    const OFFSETS: &[f64] = &[0.5, 0.0, -0.5, 0.25, -0.25, 1.0, -1.0, 0.75, -0.75, 0.5, 0.0];

    let mut prices = HashMap::new();
    for (idx, (name, base)) in DEMO_PLAYERS.iter().enumerate() {
        let mut per_book = HashMap::new();
        for (book_idx, book) in crate::model::BOOKMAKERS.iter().enumerate() {
            let win = base + OFFSETS[(idx + book_idx) % OFFSETS.len()];
            // Give the first couple of books a fuller record so the
            // sub-market columns have something to show.
            let quote = if book_idx < 2 {
                RawQuote::Markets(RawMarkets {
                    win,
                    top_5: Some(1.0 + win / 4.0),
                    top_10: Some(1.0 + win / 8.0),
                    top_20: None,
                    top_30: None,
                    top_40: None,
                    round_1_leader: Some(win * 2.5),
                })
            } else {
                RawQuote::Price(win)
            };
            per_book.insert(book.name.to_string(), quote);
        }
        prices.insert((*name).to_string(), per_book);
    }

    OddsPayload {
        prices,
        each_way: HashMap::new(),
    }
}
