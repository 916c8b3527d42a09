//! Per-symbol fetch-or-reuse.

use crate::cache::{CacheStore, Freshness};
use crate::core::{QuoteClient, ScrapeError, ScraperConfig};
use crate::quotesummary;

/// What a successful scrape did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// The cache file was fresh; nothing was fetched or written.
    CacheHit,
    /// The document was fetched and written to the cache.
    Fetched {
        /// Size of the body written to disk.
        bytes: usize,
    },
}

/// Couples a [`QuoteClient`] with a [`CacheStore`].
///
/// Clones share the HTTP connection pool, so handing one to each spawned
/// task is cheap.
#[derive(Debug, Clone)]
pub struct Scraper {
    client: QuoteClient,
    cache: CacheStore,
}

impl Scraper {
    pub fn new(client: QuoteClient, cache: CacheStore) -> Self {
        Self { client, cache }
    }

    /// Build the client and cache store described by `config`.
    pub fn from_config(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Ok(Self::new(config.client()?, CacheStore::from_config(config)))
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Reuse the cached document for `symbol` if it is fresh, otherwise
    /// fetch it and overwrite the cache file.
    ///
    /// Anything short of a fresh file (stale, missing, or a stat that failed)
    /// leads to exactly one request. Fetch and write errors are returned
    /// unchanged, and a failed fetch leaves any existing file untouched.
    #[tracing::instrument(skip(self, symbol), fields(symbol = %symbol))]
    pub async fn scrape(&self, symbol: &str) -> Result<ScrapeOutcome, ScrapeError> {
        let path = self.cache.path_for(symbol);

        match self.cache.freshness(&path).await {
            Ok(Freshness::Fresh) => {
                tracing::info!("Cache has not expired for {symbol}");
                return Ok(ScrapeOutcome::CacheHit);
            }
            Ok(Freshness::Stale | Freshness::Absent) => {}
            Err(e) => tracing::debug!(error = %e, "cache check failed, fetching instead"),
        }

        tracing::info!("Fetching data from API for symbol {symbol}");
        let body = quotesummary::fetch_symbol(&self.client, symbol).await?;
        self.cache.write(&path, &body).await?;

        tracing::debug!(path = %path.display(), bytes = body.len(), "cache entry written");
        Ok(ScrapeOutcome::Fetched { bytes: body.len() })
    }
}
