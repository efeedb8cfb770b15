use crate::model::FinishCode;
use crate::resolve::ResolutionStatus;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sort sentinel for players with no finite outright price; guarantees they
/// sort last instead of breaking a numeric sort.
pub const NO_PRICE_SENTINEL: f64 = 999.0;

/// Placeholder shown until a nationality source resolves it.
pub const NATIONALITY_PENDING: &str = "-";

/// One bookmaker's price for one market. `Unavailable` is an explicit state,
/// distinct from a zero price and from the bookmaker having no entry at all.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub enum Quote {
    #[default]
    Unavailable,
    Price(f64),
}

impl Quote {
    /// Finite, priceable value or nothing.
    #[must_use]
    pub fn as_price(self) -> Option<f64> {
        match self {
            Quote::Price(p) if p.is_finite() => Some(p),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Market {
    Outright,
    Top5,
    Top10,
    Top20,
    Top30,
    Top40,
    Round1Leader,
}

impl Market {
    pub const SUB_MARKETS: [Market; 6] = [
        Market::Top5,
        Market::Top10,
        Market::Top20,
        Market::Top30,
        Market::Top40,
        Market::Round1Leader,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Market::Outright => "Winner",
            Market::Top5 => "Top 5",
            Market::Top10 => "Top 10",
            Market::Top20 => "Top 20",
            Market::Top30 => "Top 30",
            Market::Top40 => "Top 40",
            Market::Round1Leader => "R1 Leader",
        }
    }
}

/// One bookmaker's full price record for a player.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct MarketPrices {
    pub outright: Quote,
    pub top_5: Quote,
    pub top_10: Quote,
    pub top_20: Quote,
    pub top_30: Quote,
    pub top_40: Quote,
    pub round_1_leader: Quote,
}

impl MarketPrices {
    #[must_use]
    pub fn get(&self, market: Market) -> Quote {
        match market {
            Market::Outright => self.outright,
            Market::Top5 => self.top_5,
            Market::Top10 => self.top_10,
            Market::Top20 => self.top_20,
            Market::Top30 => self.top_30,
            Market::Top40 => self.top_40,
            Market::Round1Leader => self.round_1_leader,
        }
    }
}

/// One table row. Created from the primary odds feed, then enriched in place
/// as the slower sources arrive; enrichment never replaces row identity.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub name: String,
    pub resolution: ResolutionStatus,
    pub nationality: String,
    pub world_rank: Option<u32>,
    pub recent_form: Vec<FinishCode>,
    pub event_history: Vec<FinishCode>,
    pub tipster_picks: BTreeSet<String>,
    pub bookmaker_odds: AHashMap<String, MarketPrices>,
    pub average_price: f64,
}

impl Player {
    #[must_use]
    pub fn new(name: String, resolution: ResolutionStatus) -> Self {
        Self {
            name,
            resolution,
            nationality: NATIONALITY_PENDING.to_string(),
            world_rank: None,
            recent_form: Vec::new(),
            event_history: Vec::new(),
            tipster_picks: BTreeSet::new(),
            bookmaker_odds: AHashMap::new(),
            average_price: NO_PRICE_SENTINEL,
        }
    }
}
