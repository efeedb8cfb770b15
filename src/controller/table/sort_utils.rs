use crate::controller::table::aggregators::polymarket_price;
use crate::model::{NO_PRICE_SENTINEL, Player};
use crate::normalize::{normalize, surname};
use crate::resolve::resolve;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortKey {
    Name,
    WorldRank,
    Tipsters,
    Polymarket,
    #[default]
    AveragePrice,
}

impl SortKey {
    #[must_use]
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "name" => Some(SortKey::Name),
            "rank" => Some(SortKey::WorldRank),
            "tipsters" => Some(SortKey::Tipsters),
            "polymarket" => Some(SortKey::Polymarket),
            "avg" => Some(SortKey::AveragePrice),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::WorldRank => "rank",
            SortKey::Tipsters => "tipsters",
            SortKey::Polymarket => "polymarket",
            SortKey::AveragePrice => "avg",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    }
}

/// Case-insensitive substring filter on the name, plus the confirmed-field
/// filter when one is present: players not confirmed for the field are
/// hidden, not merely de-prioritized.
#[must_use]
pub fn filter_players<'a>(
    players: &'a [Player],
    filter_text: &str,
    confirmed_field: Option<&[String]>,
    pool: &[String],
) -> Vec<&'a Player> {
    let needle = filter_text.to_lowercase();
    let confirmed: Option<HashSet<String>> = match confirmed_field {
        Some(field) if !field.is_empty() => Some(
            field
                .iter()
                .map(|name| normalize(&resolve(name, pool).name))
                .collect(),
        ),
        _ => None,
    };

    players
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .filter(|p| match &confirmed {
            Some(field) => field.contains(&normalize(&p.name)),
            None => true,
        })
        .collect()
}

/// Three-way sort with direction toggle. Unranked players sort after ranked
/// ones in both directions; `sort_by` is stable so equal keys come out in a
/// deterministic order.
pub fn sort_players(
    rows: &mut [&Player],
    key: SortKey,
    dir: SortDir,
    polymarket: &HashMap<String, f64>,
) {
    rows.sort_by(|a, b| match key {
        SortKey::Name => {
            let a_key = surname(&normalize(&a.name)).to_string();
            let b_key = surname(&normalize(&b.name)).to_string();
            dir.apply(a_key.cmp(&b_key))
        }
        SortKey::WorldRank => match (a.world_rank, b.world_rank) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => dir.apply(x.cmp(&y)),
        },
        SortKey::Tipsters => dir.apply(a.tipster_picks.len().cmp(&b.tipster_picks.len())),
        SortKey::Polymarket => {
            let a_val = polymarket_price(a, polymarket).unwrap_or(NO_PRICE_SENTINEL);
            let b_val = polymarket_price(b, polymarket).unwrap_or(NO_PRICE_SENTINEL);
            dir.apply(a_val.partial_cmp(&b_val).unwrap_or(Ordering::Equal))
        }
        SortKey::AveragePrice => dir.apply(
            a.average_price
                .partial_cmp(&b.average_price)
                .unwrap_or(Ordering::Equal),
        ),
    });
}
