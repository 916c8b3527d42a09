//! ticker-scraper: concurrent Yahoo Finance quoteSummary downloader.
//!
//! Each symbol's raw quoteSummary document is stored as
//! `<cache-root>/ticker_<SYMBOL>.json` and reused for 24 hours before it is
//! fetched again.

pub mod cache;
pub mod core;
pub mod download;
pub mod quotesummary;
pub mod scrape;

pub use cache::{CacheStore, Freshness};
pub use crate::core::{QuoteClient, QuoteClientBuilder, ScrapeError, ScraperConfig, resolve_cache_root};
pub use download::{DownloadBuilder, DownloadReport, SymbolResult};
pub use scrape::{ScrapeOutcome, Scraper};
