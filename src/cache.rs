use crate::storage::KvStore;
use chrono::{DateTime, Datelike, Utc};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Per-source cache lifetimes. Tournament-scoped sources carry the active
/// tournament's feed key as their scope; rankings are additionally scoped by
/// calendar week so last week's snapshot is stale even inside the raw TTL.
pub mod ttl {
    pub const ODDS: chrono::Duration = chrono::Duration::minutes(10);
    pub const RANKINGS: chrono::Duration = chrono::Duration::days(3);
    pub const NATIONALITY: chrono::Duration = chrono::Duration::days(30);
    pub const POLYMARKET: chrono::Duration = chrono::Duration::minutes(30);
    pub const TIPSTERS: chrono::Duration = chrono::Duration::hours(12);
    pub const FIELD: chrono::Duration = chrono::Duration::hours(6);
    pub const HISTORY: chrono::Duration = chrono::Duration::days(7);
    pub const FORM: chrono::Duration = chrono::Duration::days(1);
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    fetched_at: String,
    ttl_secs: i64,
    scope: Option<String>,
    data: serde_json::Value,
}

/// Keyed store with a per-entry TTL and optional scope key, shared by every
/// feed. Constructed once with an injected backend and passed by handle.
#[derive(Clone)]
pub struct SourceCache {
    store: Arc<dyn KvStore>,
}

impl SourceCache {
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// A hit requires the entry to be inside its TTL and, when a scope was
    /// recorded, that it matches the current query's scope. Anything else,
    /// including a corrupt or unreadable entry, is a miss.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, key: &str, scope: Option<&str>) -> Option<T> {
        let raw = match self.store.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("cache read failed for {key}: {e}");
                return None;
            }
        };

        let envelope: Envelope = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(e) => {
                debug!("discarding corrupt cache entry {key}: {e}");
                return None;
            }
        };

        if let Some(recorded) = &envelope.scope
            && Some(recorded.as_str()) != scope
        {
            debug!("cache scope mismatch for {key}: {recorded} vs {scope:?}");
            return None;
        }

        let fetched_at = DateTime::parse_from_rfc3339(&envelope.fetched_at)
            .ok()?
            .with_timezone(&Utc);
        let elapsed = Utc::now() - fetched_at;
        if elapsed >= chrono::Duration::seconds(envelope.ttl_secs) {
            debug!("cache entry {key} expired ({}s old)", elapsed.num_seconds());
            return None;
        }

        serde_json::from_value(envelope.data).ok()
    }

    pub fn put<T: Serialize>(
        &self,
        key: &str,
        ttl: chrono::Duration,
        scope: Option<&str>,
        data: &T,
    ) {
        let envelope = Envelope {
            fetched_at: Utc::now().to_rfc3339(),
            ttl_secs: ttl.num_seconds(),
            scope: scope.map(str::to_string),
            data: match serde_json::to_value(data) {
                Ok(value) => value,
                Err(e) => {
                    warn!("cache serialize failed for {key}: {e}");
                    return;
                }
            },
        };
        match serde_json::to_string(&envelope) {
            Ok(raw) => {
                if let Err(e) = self.store.write(key, &raw) {
                    warn!("cache write failed for {key}: {e}");
                }
            }
            Err(e) => warn!("cache envelope failed for {key}: {e}"),
        }
    }
}

/// Scope key for the weekly world-ranking snapshot.
#[must_use]
pub fn current_week_scope() -> String {
    let week = Utc::now().iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}
