use crate::model::{Market, NO_PRICE_SENTINEL, Player, Quote};
use crate::normalize::normalize;
use std::collections::HashMap;

/// Best available price for a player in one market: the maximum finite price
/// across the bookmakers currently populated. Absent and unavailable entries
/// are excluded; with no candidates at all the result is `Unavailable`, never
/// a negative infinity or an error.
#[must_use]
pub fn best_price(player: &Player, market: Market) -> Quote {
    player
        .bookmaker_odds
        .values()
        .filter_map(|record| record.get(market).as_price())
        .fold(Quote::Unavailable, |best, price| match best.as_price() {
            Some(current) if current >= price => best,
            _ => Quote::Price(price),
        })
}

/// Average outright price as a quote. The stored average uses a sort
/// sentinel when no book has a finite price; that sentinel must never reach
/// the table.
#[must_use]
pub fn average_quote(player: &Player) -> Quote {
    if player.average_price >= NO_PRICE_SENTINEL {
        Quote::Unavailable
    } else {
        Quote::Price(player.average_price)
    }
}

#[must_use]
pub fn tipster_count(player: &Player) -> usize {
    player.tipster_picks.len()
}

/// Prediction-market price for a player, looked up by normalized name.
#[must_use]
pub fn polymarket_price(player: &Player, prices: &HashMap<String, f64>) -> Option<f64> {
    let key = normalize(&player.name);
    prices
        .iter()
        .find(|(name, _)| normalize(name) == key)
        .map(|(_, price)| *price)
}
