use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Uk,
    Us,
}

impl Region {
    #[must_use]
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "uk" => Some(Region::Uk),
            "us" => Some(Region::Us),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            Region::Uk => "uk",
            Region::Us => "us",
        }
    }
}

/// Static catalog entry. Each-way terms may be overridden by the live odds
/// feed at render time.
#[derive(Debug, Clone, Copy)]
pub struct Bookmaker {
    pub name: &'static str,
    pub key: &'static str,
    pub logo: &'static str,
    pub ew_terms: &'static str,
    pub regions: &'static [Region],
}

pub const BOOKMAKERS: &[Bookmaker] = &[
    Bookmaker {
        name: "Bet365",
        key: "bet365",
        logo: "/static/logos/bet365.svg",
        ew_terms: "5 places",
        regions: &[Region::Uk, Region::Us],
    },
    Bookmaker {
        name: "William Hill",
        key: "william-hill",
        logo: "/static/logos/william-hill.svg",
        ew_terms: "5 places",
        regions: &[Region::Uk],
    },
    Bookmaker {
        name: "Betway",
        key: "betway",
        logo: "/static/logos/betway.svg",
        ew_terms: "6 places",
        regions: &[Region::Uk],
    },
    Bookmaker {
        name: "Coral",
        key: "coral",
        logo: "/static/logos/coral.svg",
        ew_terms: "5 places",
        regions: &[Region::Uk],
    },
    Bookmaker {
        name: "Ladbrokes",
        key: "ladbrokes",
        logo: "/static/logos/ladbrokes.svg",
        ew_terms: "5 places",
        regions: &[Region::Uk],
    },
    Bookmaker {
        name: "Paddy Power",
        key: "paddy-power",
        logo: "/static/logos/paddy-power.svg",
        ew_terms: "6 places",
        regions: &[Region::Uk],
    },
    Bookmaker {
        name: "DraftKings",
        key: "draftkings",
        logo: "/static/logos/draftkings.svg",
        ew_terms: "5 places",
        regions: &[Region::Us],
    },
    Bookmaker {
        name: "FanDuel",
        key: "fanduel",
        logo: "/static/logos/fanduel.svg",
        ew_terms: "4 places",
        regions: &[Region::Us],
    },
    Bookmaker {
        name: "BetMGM",
        key: "betmgm",
        logo: "/static/logos/betmgm.svg",
        ew_terms: "5 places",
        regions: &[Region::Us],
    },
    Bookmaker {
        name: "Caesars",
        key: "caesars",
        logo: "/static/logos/caesars.svg",
        ew_terms: "5 places",
        regions: &[Region::Us],
    },
    Bookmaker {
        name: "PointsBet",
        key: "pointsbet",
        logo: "/static/logos/pointsbet.svg",
        ew_terms: "4 places",
        regions: &[Region::Us],
    },
];

/// Feed spellings that differ from the catalog name.
const BOOKMAKER_ALIASES: &[(&str, &str)] = &[
    ("bet 365", "Bet365"),
    ("williamhill", "William Hill"),
    ("william hill uk", "William Hill"),
    ("paddypower", "Paddy Power"),
    ("draft kings", "DraftKings"),
    ("fan duel", "FanDuel"),
    ("mgm", "BetMGM"),
    ("bet mgm", "BetMGM"),
    ("caesars sportsbook", "Caesars"),
];

/// Maps a feed's bookmaker spelling onto the catalog; feeds naming bookmakers
/// the table does not know yield `None` and their prices are dropped.
#[must_use]
pub fn canonical_bookmaker(raw: &str) -> Option<&'static Bookmaker> {
    let needle = normalize(raw);
    let name = BOOKMAKER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == needle)
        .map(|(_, name)| *name);

    BOOKMAKERS.iter().find(|b| match name {
        Some(name) => b.name == name,
        None => normalize(b.name) == needle || b.key == needle,
    })
}

/// Catalog order, filtered to the viewer's region.
#[must_use]
pub fn bookmakers_for_region(region: Region) -> Vec<&'static Bookmaker> {
    BOOKMAKERS
        .iter()
        .filter(|b| b.regions.contains(&region))
        .collect()
}
