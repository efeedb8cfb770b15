use crate::controller::feeds::OddsPayload;
use crate::controller::table::{
    apply_current_form, apply_event_history, apply_nationalities, apply_rankings, apply_tipsters,
    build_players, canonical_each_way, filter_players, refresh_resolution, sort_players,
};
use crate::controller::table::{SortDir, SortKey};
use crate::model::{
    FinishCode, Player, Region, Tournament, bookmakers_for_region, Bookmaker,
};
use crate::odds::OddsFormat;
use log::debug;
use std::collections::{BTreeSet, HashMap};

/// The whole table state. Only ever mutated through `update`, under a single
/// writer, so every enrichment merge is atomic.
#[derive(Clone)]
pub struct TableModel {
    pub tournament: Tournament,
    pub region: Region,
    pub odds_format: OddsFormat,
    pub filter_text: String,
    pub sort_key: SortKey,
    pub sort_dir: SortDir,
    pub expanded: Option<String>,
    pub loaded: bool,
    pub demo_data: bool,
    pub players: Vec<Player>,
    pub bookmakers: Vec<&'static Bookmaker>,
    pub each_way_overrides: HashMap<String, String>,
    pub confirmed_field: Option<Vec<String>>,
    // Raw auxiliary data is kept on the model so merges can be re-applied
    // after a roster rebuild or a name upgrade.
    pub rankings: HashMap<String, u32>,
    pub nationalities: HashMap<String, String>,
    pub polymarket: HashMap<String, f64>,
    pub tipsters: HashMap<String, Vec<String>>,
    pub current_form: HashMap<String, Vec<FinishCode>>,
    pub event_history: HashMap<String, Vec<FinishCode>>,
    pub canonical_pool: Vec<String>,
}

impl TableModel {
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self {
            tournament: Tournament::default(),
            region,
            odds_format: default_format(region),
            filter_text: String::new(),
            sort_key: SortKey::default(),
            sort_dir: SortDir::default(),
            expanded: None,
            loaded: false,
            demo_data: false,
            players: Vec::new(),
            bookmakers: bookmakers_for_region(region),
            each_way_overrides: HashMap::new(),
            confirmed_field: None,
            rankings: HashMap::new(),
            nationalities: HashMap::new(),
            polymarket: HashMap::new(),
            tipsters: HashMap::new(),
            current_form: HashMap::new(),
            event_history: HashMap::new(),
            canonical_pool: Vec::new(),
        }
    }

    /// The filtered, sorted rows the presentation layer consumes.
    #[must_use]
    pub fn view(&self) -> Vec<&Player> {
        let mut rows = filter_players(
            &self.players,
            &self.filter_text,
            self.confirmed_field.as_deref(),
            &self.canonical_pool,
        );
        sort_players(&mut rows, self.sort_key, self.sort_dir, &self.polymarket);
        rows
    }

    /// Each-way terms for a bookmaker column: the live override when the
    /// odds feed supplied one, the catalog default otherwise.
    #[must_use]
    pub fn each_way_terms(&self, bookmaker: &Bookmaker) -> String {
        self.each_way_overrides
            .get(bookmaker.name)
            .cloned()
            .unwrap_or_else(|| bookmaker.ew_terms.to_string())
    }

    fn rebuild_pool(&mut self) {
        let pool: BTreeSet<String> = self
            .rankings
            .keys()
            .chain(self.nationalities.keys())
            .cloned()
            .collect();
        self.canonical_pool = pool.into_iter().collect();
    }

    /// Re-applies every auxiliary merge. Runs after a roster rebuild and
    /// after the canonical pool grows; all merges are idempotent.
    fn reapply_enrichment(&mut self) {
        refresh_resolution(&mut self.players, &self.canonical_pool);
        apply_rankings(&mut self.players, &self.rankings);
        apply_nationalities(&mut self.players, &self.nationalities);
        apply_tipsters(&mut self.players, &self.tipsters);
        apply_current_form(&mut self.players, &self.current_form);
        apply_event_history(&mut self.players, &self.event_history);
    }
}

fn default_format(region: Region) -> OddsFormat {
    match region {
        Region::Us => OddsFormat::American,
        Region::Uk => OddsFormat::Decimal,
    }
}

#[derive(Clone, Debug)]
pub enum Msg {
    PageLoad,
    TournamentSelected(Tournament),
    RegionSelected(Region),
    FormatSelected(OddsFormat),
    FilterChanged(String),
    SortClicked(SortKey),
    RowToggled(String),
    OddsLoaded {
        tournament: Tournament,
        payload: OddsPayload,
        demo: bool,
    },
    RankingsLoaded(HashMap<String, u32>),
    NationalityLoaded(HashMap<String, String>),
    PolymarketLoaded(HashMap<String, f64>),
    TipstersLoaded(HashMap<String, Vec<String>>),
    FieldLoaded {
        tournament: Tournament,
        field: Option<Vec<String>>,
    },
    HistoryLoaded {
        tournament: Tournament,
        history: HashMap<String, Vec<FinishCode>>,
    },
    FormLoaded(HashMap<String, Vec<FinishCode>>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    FetchOdds(Tournament),
    FetchField(Tournament),
    FetchHistory(Tournament),
    FetchRankings,
    FetchNationality,
    FetchPolymarket,
    FetchTipsters,
    FetchForm,
}

impl Effect {
    /// The primary table paints from these; the rest are enrichment and may
    /// be staggered behind them.
    #[must_use]
    pub fn is_critical(self) -> bool {
        matches!(self, Effect::FetchOdds(_) | Effect::FetchField(_))
    }
}

/// Pure state transition. Tournament-scoped results carry the tournament they
/// were fetched for and are dropped when it no longer matches the selection,
/// so a slow stale response can never overwrite a newer roster.
pub fn update(model: &mut TableModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => {
            if model.loaded {
                return vec![];
            }
            vec![
                Effect::FetchOdds(model.tournament),
                Effect::FetchField(model.tournament),
                Effect::FetchHistory(model.tournament),
                Effect::FetchRankings,
                Effect::FetchNationality,
                Effect::FetchPolymarket,
                Effect::FetchTipsters,
                Effect::FetchForm,
            ]
        }
        Msg::TournamentSelected(tournament) => {
            if tournament == model.tournament {
                return vec![];
            }
            model.tournament = tournament;
            model.players.clear();
            model.confirmed_field = None;
            model.event_history.clear();
            model.expanded = None;
            model.loaded = false;
            model.demo_data = false;
            vec![
                Effect::FetchOdds(tournament),
                Effect::FetchField(tournament),
                Effect::FetchHistory(tournament),
            ]
        }
        Msg::RegionSelected(region) => {
            if region != model.region {
                model.region = region;
                model.bookmakers = bookmakers_for_region(region);
                model.odds_format = default_format(region);
            }
            vec![]
        }
        Msg::FormatSelected(format) => {
            model.odds_format = format;
            vec![]
        }
        Msg::FilterChanged(text) => {
            model.filter_text = text;
            vec![]
        }
        Msg::SortClicked(key) => {
            if model.sort_key == key {
                model.sort_dir = model.sort_dir.toggled();
            } else {
                model.sort_key = key;
                model.sort_dir = SortDir::Asc;
            }
            vec![]
        }
        Msg::RowToggled(name) => {
            if model.expanded.as_deref() == Some(name.as_str()) {
                model.expanded = None;
            } else {
                model.expanded = Some(name);
            }
            vec![]
        }
        Msg::OddsLoaded {
            tournament,
            payload,
            demo,
        } => {
            if tournament != model.tournament {
                debug!("dropping stale odds for {}", tournament.id());
                return vec![];
            }
            model.each_way_overrides = canonical_each_way(&payload.each_way);
            model.players = build_players(&payload, &model.canonical_pool);
            model.demo_data = demo;
            model.loaded = true;
            model.reapply_enrichment();
            vec![]
        }
        Msg::RankingsLoaded(rankings) => {
            model.rankings = rankings;
            model.rebuild_pool();
            model.reapply_enrichment();
            vec![]
        }
        Msg::NationalityLoaded(nationalities) => {
            model.nationalities = nationalities;
            model.rebuild_pool();
            model.reapply_enrichment();
            vec![]
        }
        Msg::PolymarketLoaded(prices) => {
            model.polymarket = prices;
            vec![]
        }
        Msg::TipstersLoaded(picks) => {
            model.tipsters = picks;
            apply_tipsters(&mut model.players, &model.tipsters);
            vec![]
        }
        Msg::FieldLoaded { tournament, field } => {
            if tournament != model.tournament {
                debug!("dropping stale field for {}", tournament.id());
                return vec![];
            }
            model.confirmed_field = field;
            vec![]
        }
        Msg::HistoryLoaded {
            tournament,
            history,
        } => {
            if tournament != model.tournament {
                debug!("dropping stale history for {}", tournament.id());
                return vec![];
            }
            model.event_history = history;
            apply_event_history(&mut model.players, &model.event_history);
            vec![]
        }
        Msg::FormLoaded(form) => {
            model.current_form = form;
            apply_current_form(&mut model.players, &model.current_form);
            vec![]
        }
    }
}
