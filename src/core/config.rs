//! Run configuration, resolved once from the environment at startup.

use std::ffi::{OsStr, OsString};
use std::path::{MAIN_SEPARATOR, PathBuf};
use std::time::Duration;

use url::Url;

use crate::core::client::constants::{DEFAULT_CACHE_PATH, DEFAULT_CACHE_TTL_SECS};
use crate::core::{QuoteClient, ScrapeError};

/// Overrides the cache root directory.
pub const ENV_CACHE_PATH: &str = "CACHE_PATH";
/// Overrides the freshness window, in seconds.
pub const ENV_CACHE_TTL_SECS: &str = "CACHE_TTL_SECS";
/// Caps the number of symbols processed at once.
pub const ENV_MAX_CONCURRENCY: &str = "SCRAPER_MAX_CONCURRENCY";
/// Per-request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "SCRAPER_TIMEOUT_SECS";
/// Overrides the quoteSummary base URL.
pub const ENV_BASE_URL: &str = "SCRAPER_BASE_URL";
/// Overrides the User-Agent header.
pub const ENV_USER_AGENT: &str = "SCRAPER_USER_AGENT";

/// Everything a run needs, resolved once and then shared by reference.
#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Directory holding `ticker_<SYMBOL>.json` files.
    pub cache_root: PathBuf,
    /// How long a cache file counts as fresh after its last write.
    pub cache_ttl: Duration,
    /// quoteSummary base URL; `None` uses the built-in Yahoo endpoint.
    pub base_quote_api: Option<Url>,
    /// User-Agent override; `None` uses the built-in desktop UA.
    pub user_agent: Option<String>,
    /// Per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Maximum in-flight symbols; `None` launches every symbol at once.
    pub max_concurrency: Option<usize>,
}

impl ScraperConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ScrapeError> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// `from_env` delegates here; tests pass a map instead of touching
    /// process-wide state. `CACHE_PATH` is taken as raw OS bytes; every other
    /// key must be valid UTF-8 when set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScrapeError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let cache_root = resolve_cache_root(lookup(ENV_CACHE_PATH).as_deref());
        let utf8 = |key: &str| lookup_utf8(&lookup, key);

        let cache_ttl = match utf8(ENV_CACHE_TTL_SECS)? {
            Some(raw) => Duration::from_secs(parse_number(ENV_CACHE_TTL_SECS, &raw)?),
            None => Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        };

        let max_concurrency = match utf8(ENV_MAX_CONCURRENCY)? {
            Some(raw) => match parse_number(ENV_MAX_CONCURRENCY, &raw)? {
                0 => {
                    return Err(ScrapeError::Config(format!(
                        "{ENV_MAX_CONCURRENCY} must be at least 1"
                    )));
                }
                n => Some(usize::try_from(n).map_err(|_| {
                    ScrapeError::Config(format!("{ENV_MAX_CONCURRENCY} is too large: {n}"))
                })?),
            },
            None => None,
        };

        let timeout = match utf8(ENV_TIMEOUT_SECS)? {
            Some(raw) => match parse_number(ENV_TIMEOUT_SECS, &raw)? {
                0 => {
                    return Err(ScrapeError::Config(format!(
                        "{ENV_TIMEOUT_SECS} must be at least 1"
                    )));
                }
                secs => Some(Duration::from_secs(secs)),
            },
            None => None,
        };

        let base_quote_api = utf8(ENV_BASE_URL)?
            .map(|raw| Url::parse(&raw))
            .transpose()?;

        Ok(Self {
            cache_root,
            cache_ttl,
            base_quote_api,
            user_agent: utf8(ENV_USER_AGENT)?,
            timeout,
            max_concurrency,
        })
    }

    /// Build the HTTP client described by this configuration.
    pub fn client(&self) -> Result<QuoteClient, ScrapeError> {
        let mut builder = QuoteClient::builder();
        if let Some(url) = &self.base_quote_api {
            builder = builder.base_quote_api(url.clone());
        }
        if let Some(ua) = &self.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        builder.build()
    }
}

/// Resolve the cache root from an optional override.
///
/// Exactly one trailing separator is stripped from the override. Without an
/// override the root is `./cache`. The value is not otherwise validated and
/// need not be UTF-8.
pub fn resolve_cache_root(override_path: Option<&OsStr>) -> PathBuf {
    match override_path {
        Some(raw) => PathBuf::from(strip_trailing_separator(raw)),
        None => PathBuf::from(DEFAULT_CACHE_PATH),
    }
}

fn strip_trailing_separator(raw: &OsStr) -> &OsStr {
    let bytes = raw.as_encoded_bytes();
    match bytes.split_last() {
        Some((&last, rest)) if last == b'/' || char::from(last) == MAIN_SEPARATOR => {
            // SAFETY: `last` is a single ASCII byte, and splitting encoded bytes
            // right before an ASCII character yields a valid `OsStr`.
            unsafe { OsStr::from_encoded_bytes_unchecked(rest) }
        }
        _ => raw,
    }
}

fn lookup_utf8<F>(lookup: &F, key: &str) -> Result<Option<String>, ScrapeError>
where
    F: Fn(&str) -> Option<OsString>,
{
    lookup(key)
        .map(|raw| {
            raw.into_string()
                .map_err(|raw| ScrapeError::Config(format!("{key}={raw:?} is not valid UTF-8")))
        })
        .transpose()
}

fn parse_number(key: &str, raw: &str) -> Result<u64, ScrapeError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| ScrapeError::Config(format!("{key}={raw:?}: {e}")))
}
