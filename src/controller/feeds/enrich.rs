use super::FeedService;
use crate::cache::ttl;
use log::warn;
use std::collections::HashMap;

/// Built-in prediction-market prices, used until the live source returns a
/// non-empty result.
const POLYMARKET_FALLBACK: &[(&str, f64)] = &[
    ("Scottie Scheffler", 5.9),
    ("Rory McIlroy", 8.7),
    ("Jon Rahm", 11.5),
    ("Xander Schauffele", 13.0),
    ("Collin Morikawa", 16.5),
    ("Bryson DeChambeau", 12.2),
    ("Viktor Hovland", 24.0),
    ("Brooks Koepka", 22.0),
];

impl FeedService {
    /// Nationality codes per player. Failure means "nothing new".
    pub async fn fetch_nationalities(&self) -> Option<HashMap<String, String>> {
        if let Some(cached) = self
            .cache
            .get::<HashMap<String, String>>("nationality", None)
        {
            return Some(cached);
        }

        match self
            .client
            .get_json::<HashMap<String, String>>("/v1/players/nationality")
            .await
        {
            Ok(map) if !map.is_empty() => {
                self.cache.put("nationality", ttl::NATIONALITY, None, &map);
                Some(map)
            }
            Ok(_) => None,
            Err(e) => {
                warn!("nationality feed failed: {e}");
                None
            }
        }
    }

    /// Prediction-market prices. Unlike the other auxiliary feeds this always
    /// yields data; the fallback table stands in until the live source does.
    pub async fn fetch_polymarket(&self) -> HashMap<String, f64> {
        if let Some(cached) = self.cache.get::<HashMap<String, f64>>("polymarket", None) {
            return cached;
        }

        match self
            .client
            .get_json::<HashMap<String, f64>>("/v1/polymarket/prices")
            .await
        {
            Ok(map) if !map.is_empty() => {
                self.cache.put("polymarket", ttl::POLYMARKET, None, &map);
                map
            }
            Ok(_) => polymarket_fallback(),
            Err(e) => {
                warn!("polymarket feed failed: {e}");
                polymarket_fallback()
            }
        }
    }

    /// Tipster handles per player. Failure means "nothing new".
    pub async fn fetch_tipster_picks(&self) -> Option<HashMap<String, Vec<String>>> {
        if let Some(cached) = self
            .cache
            .get::<HashMap<String, Vec<String>>>("tipsters", None)
        {
            return Some(cached);
        }

        match self
            .client
            .get_json::<HashMap<String, Vec<String>>>("/v1/tipsters/picks")
            .await
        {
            Ok(map) if !map.is_empty() => {
                self.cache.put("tipsters", ttl::TIPSTERS, None, &map);
                Some(map)
            }
            Ok(_) => None,
            Err(e) => {
                warn!("tipster feed failed: {e}");
                None
            }
        }
    }
}

fn polymarket_fallback() -> HashMap<String, f64> {
    POLYMARKET_FALLBACK
        .iter()
        .map(|(name, price)| ((*name).to_string(), *price))
        .collect()
}
