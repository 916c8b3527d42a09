//! Raw quoteSummary documents.
//!
//! The payload is never parsed: whatever the endpoint returns with `200 OK`
//! is handed back byte-for-byte so it can be cached as-is.

use url::Url;

use crate::core::{QuoteClient, ScrapeError, net};

/// Build the quoteSummary URL for `symbol`.
///
/// The symbol is appended to the base verbatim. It is neither uppercased nor
/// escaped here; only the cache file name uses the uppercased form. URL
/// parsing still resolves `.`/`..` segments, so a symbol like `../x` leaves
/// the quoteSummary path.
pub fn quote_summary_url(client: &QuoteClient, symbol: &str) -> Result<Url, ScrapeError> {
    let raw = format!(
        "{}{}?modules={}",
        client.base_quote_api().as_str(),
        symbol,
        client.modules()
    );
    Ok(Url::parse(&raw)?)
}

/// Issue a single GET and return the body unmodified.
///
/// There is no retry. A transport failure surfaces as [`ScrapeError::Http`]
/// and any status other than 200 as [`ScrapeError::Status`].
#[tracing::instrument(skip(client, url), err, fields(url = %url))]
pub async fn fetch(client: &QuoteClient, url: &Url) -> Result<Vec<u8>, ScrapeError> {
    let resp = client.http().get(url.clone()).send().await?;
    let body = net::get_bytes(resp).await?;
    tracing::debug!(bytes = body.len(), "quoteSummary response received");
    Ok(body)
}

/// Fetch the full quoteSummary document for one symbol.
pub async fn fetch_symbol(client: &QuoteClient, symbol: &str) -> Result<Vec<u8>, ScrapeError> {
    let url = quote_summary_url(client, symbol)?;
    fetch(client, &url).await
}
