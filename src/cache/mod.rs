//! File-backed cache of quoteSummary documents.
//!
//! One file per symbol, `<root>/ticker_<SYMBOL>.json`. Freshness is decided
//! purely from the file's modification time; the content is never inspected.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};
use tokio::io::AsyncWriteExt;

use crate::core::{ScrapeError, ScraperConfig};

/// Outcome of checking a cache file against the freshness window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Written less than one TTL ago; reuse it.
    Fresh,
    /// Present but older than the TTL; fetch again.
    Stale,
    /// No file at the path; fetch.
    Absent,
}

impl Freshness {
    /// Whether the cached file can be reused as-is.
    pub fn is_fresh(self) -> bool {
        matches!(self, Freshness::Fresh)
    }
}

/// Maps symbols to cache files under a single root directory.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
    ttl: Duration,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            root: root.into(),
            ttl,
        }
    }

    pub fn from_config(config: &ScraperConfig) -> Self {
        Self::new(config.cache_root.clone(), config.cache_ttl)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// `<root>/ticker_<SYMBOL>.json`, with the symbol uppercased.
    pub fn path_for(&self, symbol: &str) -> PathBuf {
        self.root.join(format!("ticker_{}.json", symbol.to_uppercase()))
    }

    /// Create the root directory if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<(), ScrapeError> {
        ensure_dir(&self.root).await
    }

    /// Stat `path` and classify it against this store's TTL.
    pub async fn freshness(&self, path: &Path) -> Result<Freshness, ScrapeError> {
        let meta = match tokio::fs::metadata(path).await {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Freshness::Absent),
            Err(e) => return Err(ScrapeError::io(path, e)),
        };
        let modified = meta.modified().map_err(|e| ScrapeError::io(path, e))?;

        let freshness = freshness_at(modified, SystemTime::now(), self.ttl);
        tracing::debug!(
            path = %path.display(),
            modified = %DateTime::<Utc>::from(modified).to_rfc3339(),
            ?freshness,
            "cache entry checked"
        );
        Ok(freshness)
    }

    /// Create or truncate `path` and write `bytes` in full.
    ///
    /// The handle is dropped (and so closed) when this returns, whichever way
    /// it returns.
    pub async fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), ScrapeError> {
        let mut file = tokio::fs::File::create(path)
            .await
            .map_err(|e| ScrapeError::io(path, e))?;
        file.write_all(bytes)
            .await
            .map_err(|e| ScrapeError::io(path, e))?;
        file.flush().await.map_err(|e| ScrapeError::io(path, e))?;
        Ok(())
    }

    /// Read a cache file back exactly as it was written.
    pub async fn read(&self, path: &Path) -> Result<Vec<u8>, ScrapeError> {
        tokio::fs::read(path)
            .await
            .map_err(|e| ScrapeError::io(path, e))
    }
}

/// Create `path` as a directory unless something already exists there.
///
/// Only the final component is created; a missing parent is an error.
/// Losing a creation race to another process counts as success.
pub async fn ensure_dir(path: &Path) -> Result<(), ScrapeError> {
    match tokio::fs::metadata(path).await {
        Ok(_) => return Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(ScrapeError::io(path, e)),
    }

    let shown = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    tracing::info!(path = %shown.display(), "cache directory does not exist, creating it");

    match tokio::fs::create_dir(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(ScrapeError::io(path, e)),
    }
}

/// Pure freshness rule: fresh iff `now < modified + ttl`.
///
/// A window that overflows `SystemTime` never expires.
pub fn freshness_at(modified: SystemTime, now: SystemTime, ttl: Duration) -> Freshness {
    match modified.checked_add(ttl) {
        Some(expires) if now < expires => Freshness::Fresh,
        Some(_) => Freshness::Stale,
        None => Freshness::Fresh,
    }
}
