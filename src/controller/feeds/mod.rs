pub mod client;
pub mod enrich;
pub mod event;
pub mod odds;
pub mod rankings;

pub use client::FeedClient;
pub use odds::{OddsPayload, RawMarkets, RawQuote};

use crate::cache::SourceCache;

/// One fetcher per external source, all sharing the bounded-timeout HTTP
/// client and the persistent source cache. Every fetcher is cache-first and
/// converts failure into a fallback at its own boundary; none of them
/// propagate errors.
#[derive(Clone)]
pub struct FeedService {
    pub client: FeedClient,
    pub cache: SourceCache,
}

impl FeedService {
    #[must_use]
    pub fn new(client: FeedClient, cache: SourceCache) -> Self {
        Self { client, cache }
    }
}
