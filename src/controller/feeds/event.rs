use super::FeedService;
use crate::cache::ttl;
use crate::error::AppError;
use crate::model::{FinishCode, Tournament, parse_finish_codes};
use log::{debug, warn};
use std::collections::HashMap;

impl FeedService {
    /// Confirmed starting field for one tournament. Some tournaments have no
    /// confirmation feed at all; a 404 means exactly that, not a failure.
    pub async fn fetch_confirmed_field(&self, tournament: Tournament) -> Option<Vec<String>> {
        let scope = tournament.feed_key();
        if let Some(cached) = self.cache.get::<Vec<String>>("field", Some(scope)) {
            return Some(cached);
        }

        match self
            .client
            .get_json::<Vec<String>>(&format!("/v1/field/{scope}"))
            .await
        {
            Ok(field) if !field.is_empty() => {
                self.cache.put("field", ttl::FIELD, Some(scope), &field);
                Some(field)
            }
            Ok(_) => None,
            Err(AppError::NotFound(url)) => {
                debug!("no confirmed-field feed at {url}");
                None
            }
            Err(e) => {
                warn!("confirmed-field feed for {scope} failed: {e}");
                None
            }
        }
    }

    /// Finish history at this specific tournament across years, keyed by raw
    /// player name. Failure means "nothing new".
    pub async fn fetch_event_history(
        &self,
        tournament: Tournament,
    ) -> Option<HashMap<String, Vec<FinishCode>>> {
        let scope = tournament.feed_key();
        if let Some(cached) = self
            .cache
            .get::<HashMap<String, Vec<FinishCode>>>("history", Some(scope))
        {
            return Some(cached);
        }

        match self
            .client
            .get_json::<HashMap<String, String>>(&format!("/v1/history/{scope}"))
            .await
        {
            Ok(raw) if !raw.is_empty() => {
                let parsed = parse_finish_map(raw);
                self.cache.put("history", ttl::HISTORY, Some(scope), &parsed);
                Some(parsed)
            }
            Ok(_) => None,
            Err(e) => {
                warn!("event-history feed for {scope} failed: {e}");
                None
            }
        }
    }

    /// Current-season form, tournament-independent. Failure means "nothing
    /// new".
    pub async fn fetch_current_form(&self) -> Option<HashMap<String, Vec<FinishCode>>> {
        if let Some(cached) = self
            .cache
            .get::<HashMap<String, Vec<FinishCode>>>("form", None)
        {
            return Some(cached);
        }

        match self
            .client
            .get_json::<HashMap<String, String>>("/v1/form/current")
            .await
        {
            Ok(raw) if !raw.is_empty() => {
                let parsed = parse_finish_map(raw);
                self.cache.put("form", ttl::FORM, None, &parsed);
                Some(parsed)
            }
            Ok(_) => None,
            Err(e) => {
                warn!("current-form feed failed: {e}");
                None
            }
        }
    }
}

fn parse_finish_map(raw: HashMap<String, String>) -> HashMap<String, Vec<FinishCode>> {
    raw.into_iter()
        .map(|(name, codes)| (name, parse_finish_codes(&codes)))
        .collect()
}
