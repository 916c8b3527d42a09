use crate::common;
use ticker_scraper::{DownloadBuilder, ScrapeError};

#[tokio::test]
async fn uncreatable_cache_root_aborts_before_any_task() {
    let server = common::setup_server();
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("no-such-parent").join("cache");
    let mock = common::mock_quote_summary(&server, "AAPL", 200, &common::quote_body("AAPL"));

    let err = DownloadBuilder::new(common::scraper_for(&server, &root))
        .symbols(["AAPL", "MSFT"])
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapeError::Io { .. }), "got {err:?}");
    mock.assert_calls(0);
    assert!(!root.exists());
}

#[tokio::test]
async fn cache_root_that_is_a_file_fails_every_symbol_but_not_the_run() {
    let server = common::setup_server();
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("cache");
    std::fs::write(&root, b"not a directory").unwrap();
    let mock = common::mock_quote_summary(&server, "AAPL", 200, &common::quote_body("AAPL"));

    let report = DownloadBuilder::new(common::scraper_for(&server, &root))
        .symbols(["AAPL"])
        .run()
        .await
        .unwrap();

    mock.assert_calls(1);
    assert!(matches!(report.get("AAPL"), Some(Err(ScrapeError::Io { .. }))));
}
