use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::core::ScrapeError;
use crate::scrape::{ScrapeOutcome, Scraper};

/// Scrapes many symbols concurrently against one cache directory.
///
/// Every symbol gets its own spawned task; duplicates are kept and each one
/// is scraped independently. By default all tasks start at once. A failing
/// symbol is logged and recorded in the report but never stops its siblings.
pub struct DownloadBuilder {
    scraper: Scraper,
    symbols: Vec<String>,
    max_concurrency: Option<usize>,
    started_at: Option<Instant>,
}

impl DownloadBuilder {
    pub fn new(scraper: Scraper) -> Self {
        Self {
            scraper,
            symbols: Vec::new(),
            max_concurrency: None,
            started_at: None,
        }
    }

    /// Replace the symbols to scrape.
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single symbol.
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(sym.into());
        self
    }

    /// Cap the number of symbols in flight. `None` (the default) is unbounded.
    pub fn max_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_concurrency = limit.filter(|n| *n > 0);
        self
    }

    /// Measure the reported elapsed time from `start` instead of from `run`.
    pub fn started_at(mut self, start: Instant) -> Self {
        self.started_at = Some(start);
        self
    }

    /// Prepare the cache directory, then scrape every symbol and wait for all
    /// of them.
    ///
    /// The only error returned is a failure to create the cache root, in which
    /// case no symbol is attempted. Per-symbol failures land in the report.
    pub async fn run(self) -> Result<DownloadReport, ScrapeError> {
        let start = self.started_at.unwrap_or_else(Instant::now);

        self.scraper.cache().ensure_root().await?;

        let scraper = Arc::new(self.scraper);
        let limiter = self.max_concurrency.map(|n| Arc::new(Semaphore::new(n)));

        let handles: Vec<_> = self
            .symbols
            .iter()
            .map(|symbol| {
                let scraper = Arc::clone(&scraper);
                let limiter = limiter.clone();
                let symbol = symbol.clone();
                tokio::spawn(async move {
                    // The semaphore is never closed, so a failed acquire just means "no cap".
                    let _permit = match limiter {
                        Some(sem) => sem.acquire_owned().await.ok(),
                        None => None,
                    };
                    let result = scraper.scrape(&symbol).await;
                    if let Err(e) = &result {
                        tracing::warn!(symbol = %symbol, error = %e, "Error while fetching {symbol}");
                    }
                    result
                })
            })
            .collect();

        let joined = join_all(handles).await;

        let results = self
            .symbols
            .into_iter()
            .zip(joined)
            .map(|(symbol, joined)| {
                let result = joined.unwrap_or_else(|e| {
                    tracing::warn!(symbol = %symbol, error = %e, "task for {symbol} did not finish");
                    Err(ScrapeError::from(e))
                });
                SymbolResult { symbol, result }
            })
            .collect();

        Ok(DownloadReport {
            results,
            elapsed: start.elapsed(),
        })
    }
}

/// How one input symbol fared.
#[derive(Debug)]
pub struct SymbolResult {
    /// The symbol exactly as it was given.
    pub symbol: String,
    pub result: Result<ScrapeOutcome, ScrapeError>,
}

/// Per-symbol results in input order, plus total wall-clock time.
#[derive(Debug)]
pub struct DownloadReport {
    pub results: Vec<SymbolResult>,
    pub elapsed: Duration,
}

impl DownloadReport {
    /// Symbols served from a fresh cache file.
    pub fn cache_hits(&self) -> usize {
        self.count(|r| matches!(r, Ok(ScrapeOutcome::CacheHit)))
    }

    /// Symbols fetched from the network and written to the cache.
    pub fn fetched(&self) -> usize {
        self.count(|r| matches!(r, Ok(ScrapeOutcome::Fetched { .. })))
    }

    /// Symbols that ended in an error.
    pub fn failures(&self) -> usize {
        self.count(Result::is_err)
    }

    /// Look up the first result recorded for `symbol` (exact match).
    pub fn get(&self, symbol: &str) -> Option<&Result<ScrapeOutcome, ScrapeError>> {
        self.results
            .iter()
            .find(|r| r.symbol == symbol)
            .map(|r| &r.result)
    }

    fn count(&self, pred: impl Fn(&Result<ScrapeOutcome, ScrapeError>) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.result)).count()
    }
}
