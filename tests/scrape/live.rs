#[tokio::test]
#[ignore]
async fn live_scrape_smoke() {
    if !crate::common::live_enabled() {
        return;
    }

    let dir = tempfile::tempdir().unwrap();
    let scraper = ticker_scraper::Scraper::new(
        ticker_scraper::QuoteClient::builder().build().unwrap(),
        ticker_scraper::CacheStore::new(dir.path(), crate::common::DAY),
    );

    let outcome = scraper.scrape("AAPL").await.unwrap();
    assert!(matches!(outcome, ticker_scraper::ScrapeOutcome::Fetched { bytes } if bytes > 0));
    assert!(dir.path().join("ticker_AAPL.json").exists());
}
