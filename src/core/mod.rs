//! Core components of the `ticker-scraper` crate.
//!
//! This module contains the foundational building blocks:
//! - The [`QuoteClient`] and its builder.
//! - The primary [`ScrapeError`] type.
//! - The run-wide [`ScraperConfig`].

/// The HTTP client (`QuoteClient`), builder, and endpoint defaults.
pub mod client;
/// Environment-driven configuration (`ScraperConfig`).
pub mod config;
/// The primary error type (`ScrapeError`) for the crate.
pub mod error;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::QuoteClient`
pub use client::{QuoteClient, QuoteClientBuilder};
pub use config::{ScraperConfig, resolve_cache_root};
pub use error::ScrapeError;
