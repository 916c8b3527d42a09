use std::time::Duration;

use crate::common::{self, DAY};
use ticker_scraper::{CacheStore, Freshness, ScrapeOutcome};

#[tokio::test]
async fn fresh_cache_file_skips_network() {
    let server = common::setup_server();
    let dir = tempfile::tempdir().unwrap();
    let mock = common::mock_quote_summary(&server, "AAPL", 200, &common::quote_body("AAPL"));

    let scraper = common::scraper_for(&server, dir.path());
    let path = scraper.cache().path_for("AAPL");
    common::write_aged(&path, b"cached document", Duration::from_secs(60 * 60));

    let outcome = scraper.scrape("AAPL").await.unwrap();

    assert_eq!(outcome, ScrapeOutcome::CacheHit);
    mock.assert_calls(0);
    assert_eq!(std::fs::read(&path).unwrap(), b"cached document");
}

#[tokio::test]
async fn missing_cache_file_fetches_once_and_writes_body_verbatim() {
    let server = common::setup_server();
    let dir = tempfile::tempdir().unwrap();
    let body = common::quote_body("MSFT");
    let mock = common::mock_quote_summary(&server, "MSFT", 200, &body);

    let scraper = common::scraper_for(&server, dir.path());
    let outcome = scraper.scrape("MSFT").await.unwrap();

    mock.assert_calls(1);
    assert_eq!(outcome, ScrapeOutcome::Fetched { bytes: body.len() });

    let path = dir.path().join("ticker_MSFT.json");
    assert_eq!(std::fs::read(&path).unwrap(), body.as_bytes());
}

#[tokio::test]
async fn stale_cache_file_is_refetched_and_overwritten() {
    let server = common::setup_server();
    let dir = tempfile::tempdir().unwrap();
    let body = common::quote_body("GOOG");
    let mock = common::mock_quote_summary(&server, "GOOG", 200, &body);

    let scraper = common::scraper_for(&server, dir.path());
    let path = scraper.cache().path_for("GOOG");
    common::write_aged(&path, b"old and much longer stale document", DAY + Duration::from_secs(60));

    let outcome = scraper.scrape("GOOG").await.unwrap();

    mock.assert_calls(1);
    assert!(matches!(outcome, ScrapeOutcome::Fetched { .. }));
    assert_eq!(std::fs::read(&path).unwrap(), body.as_bytes());
    assert_eq!(
        scraper.cache().freshness(&path).await.unwrap(),
        Freshness::Fresh
    );
}

#[tokio::test]
async fn second_scrape_is_served_from_cache() {
    let server = common::setup_server();
    let dir = tempfile::tempdir().unwrap();
    let mock = common::mock_quote_summary(&server, "TSLA", 200, &common::quote_body("TSLA"));

    let scraper = common::scraper_for(&server, dir.path());

    let first = scraper.scrape("TSLA").await.unwrap();
    let second = scraper.scrape("TSLA").await.unwrap();

    assert!(matches!(first, ScrapeOutcome::Fetched { .. }));
    assert_eq!(second, ScrapeOutcome::CacheHit);
    mock.assert_calls(1);
}

#[tokio::test]
async fn url_keeps_case_but_file_name_is_uppercased() {
    let server = common::setup_server();
    let dir = tempfile::tempdir().unwrap();
    let body = common::quote_body("aapl");
    let lower = common::mock_quote_summary(&server, "aapl", 200, &body);
    let upper = common::mock_quote_summary(&server, "AAPL", 200, &body);

    let scraper = common::scraper_for(&server, dir.path());
    scraper.scrape("aapl").await.unwrap();

    lower.assert_calls(1);
    upper.assert_calls(0);
    assert!(dir.path().join("ticker_AAPL.json").exists());
    assert!(!dir.path().join("ticker_aapl.json").exists());
}

#[tokio::test]
async fn short_ttl_expires_recent_files() {
    let server = common::setup_server();
    let dir = tempfile::tempdir().unwrap();
    let mock = common::mock_quote_summary(&server, "NVDA", 200, &common::quote_body("NVDA"));

    let scraper = ticker_scraper::Scraper::new(
        common::client_for(&server),
        CacheStore::new(dir.path(), Duration::from_secs(30)),
    );
    let path = scraper.cache().path_for("NVDA");
    common::write_aged(&path, b"{}", Duration::from_secs(120));

    let outcome = scraper.scrape("NVDA").await.unwrap();

    mock.assert_calls(1);
    assert!(matches!(outcome, ScrapeOutcome::Fetched { .. }));
}
