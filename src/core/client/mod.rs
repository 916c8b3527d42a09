//! Public client surface + builder.
//! Defaults (UA, endpoint, module list) live in `constants`.

pub(crate) mod constants;

use crate::core::ScrapeError;
use constants::{DEFAULT_BASE_QUOTE_API, QUOTE_SUMMARY_MODULES, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the quoteSummary endpoint.
///
/// Cheap to clone: the underlying connection pool is shared between clones,
/// so one client can be handed to every per-symbol task.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: Client,
    base_quote_api: Url,
    modules: String,
}

impl QuoteClient {
    /// Create a new builder.
    pub fn builder() -> QuoteClientBuilder {
        QuoteClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_quote_api(&self) -> &Url {
        &self.base_quote_api
    }

    /// The comma-joined module list sent with every request.
    pub fn modules(&self) -> &str {
        &self.modules
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct QuoteClientBuilder {
    user_agent: Option<String>,
    base_quote_api: Option<Url>,
    modules: Option<Vec<String>>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl QuoteClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quoteSummary API base (e.g., `https://query2.finance.yahoo.com/v10/finance/quoteSummary/`).
    pub fn base_quote_api(mut self, url: Url) -> Self {
        self.base_quote_api = Some(url);
        self
    }

    /// Replace the requested quoteSummary modules.
    pub fn modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modules = Some(modules.into_iter().map(Into::into).collect());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<QuoteClient, ScrapeError> {
        let base_quote_api = match self.base_quote_api {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_QUOTE_API)?,
        };
        let modules = match self.modules {
            Some(list) => list.join(","),
            None => QUOTE_SUMMARY_MODULES.join(","),
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(QuoteClient {
            http,
            base_quote_api,
            modules,
        })
    }
}
