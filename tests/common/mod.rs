#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use ticker_scraper::{CacheStore, QuoteClient, Scraper};
use url::Url;

pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Modules requested by test clients; kept short so mocks can match them exactly.
pub const TEST_MODULES: &str = "price,summaryDetail";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn live_enabled() -> bool {
    std::env::var("SCRAPER_LIVE").ok().as_deref() == Some("1")
}

pub fn quote_summary_base(server: &MockServer) -> Url {
    Url::parse(&format!("{}/v10/finance/quoteSummary/", server.base_url())).unwrap()
}

pub fn client_for(server: &MockServer) -> QuoteClient {
    QuoteClient::builder()
        .base_quote_api(quote_summary_base(server))
        .modules(TEST_MODULES.split(','))
        .build()
        .unwrap()
}

pub fn scraper_for(server: &MockServer, root: &Path) -> Scraper {
    Scraper::new(client_for(server), CacheStore::new(root, DAY))
}

/// A small quoteSummary-shaped document, distinct per symbol.
pub fn quote_body(symbol: &str) -> String {
    format!(
        r#"{{"quoteSummary":{{"result":[{{"price":{{"symbol":"{symbol}","regularMarketPrice":{{"raw":123.45,"fmt":"123.45"}}}}}}],"error":null}}}}"#
    )
}

pub fn mock_quote_summary<'a>(
    server: &'a MockServer,
    symbol: &str,
    status: u16,
    body: &str,
) -> Mock<'a> {
    let path = format!("/v10/finance/quoteSummary/{symbol}");
    let body = body.to_string();
    server.mock(|when, then| {
        when.method(GET)
            .path(path)
            .query_param("modules", TEST_MODULES);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Write `content` at `path` and backdate its mtime by `age`.
pub fn write_aged(path: &Path, content: &[u8], age: Duration) -> PathBuf {
    std::fs::write(path, content).unwrap();
    let mtime = SystemTime::now() - age;
    filetime::set_file_mtime(path, filetime::FileTime::from_system_time(mtime)).unwrap();
    path.to_path_buf()
}
