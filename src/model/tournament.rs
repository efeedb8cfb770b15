use serde::{Deserialize, Serialize};

/// The four majors. Changing the selection invalidates every
/// tournament-scoped fetch (odds, field, history) but leaves the
/// tournament-independent ones (rankings, nationality, tipsters) alone.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tournament {
    #[default]
    Masters,
    PgaChampionship,
    UsOpen,
    TheOpen,
}

impl Tournament {
    pub const ALL: [Tournament; 4] = [
        Tournament::Masters,
        Tournament::PgaChampionship,
        Tournament::UsOpen,
        Tournament::TheOpen,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Tournament::Masters => "masters",
            Tournament::PgaChampionship => "pga",
            Tournament::UsOpen => "usopen",
            Tournament::TheOpen => "open",
        }
    }

    /// Key the remote odds feed uses for this event.
    #[must_use]
    pub fn feed_key(self) -> &'static str {
        match self {
            Tournament::Masters => "golf_masters_tournament_winner",
            Tournament::PgaChampionship => "golf_pga_championship_winner",
            Tournament::UsOpen => "golf_us_open_winner",
            Tournament::TheOpen => "golf_the_open_championship_winner",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Tournament::Masters => "The Masters",
            Tournament::PgaChampionship => "PGA Championship",
            Tournament::UsOpen => "US Open",
            Tournament::TheOpen => "The Open",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}
