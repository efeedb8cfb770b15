use super::FeedService;
use crate::cache::{current_week_scope, ttl};
use log::warn;
use std::collections::HashMap;

impl FeedService {
    /// World rankings, scoped by calendar week on top of the raw TTL so last
    /// week's snapshot is treated as stale. Failure means "nothing new".
    pub async fn fetch_world_rankings(&self) -> Option<HashMap<String, u32>> {
        let scope = current_week_scope();
        if let Some(cached) = self
            .cache
            .get::<HashMap<String, u32>>("rankings", Some(&scope))
        {
            return Some(cached);
        }

        match self
            .client
            .get_json::<HashMap<String, u32>>("/v1/rankings/world")
            .await
        {
            Ok(rankings) if !rankings.is_empty() => {
                self.cache
                    .put("rankings", ttl::RANKINGS, Some(&scope), &rankings);
                Some(rankings)
            }
            Ok(_) => {
                warn!("rankings feed returned an empty payload");
                None
            }
            Err(e) => {
                warn!("rankings feed failed: {e}");
                None
            }
        }
    }
}
