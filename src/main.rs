use std::process::ExitCode;
use std::time::Instant;

use ticker_scraper::{DownloadBuilder, Scraper, ScraperConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let start = Instant::now();

    // RUST_LOG overrides the default `info` level.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .try_init();

    let symbols: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let config = match ScraperConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let scraper = match Scraper::from_config(&config) {
        Ok(scraper) => scraper,
        Err(e) => {
            tracing::error!(error = %e, "could not build HTTP client");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(
        cache_root = %scraper.cache().root().display(),
        ttl = ?scraper.cache().ttl(),
        max_concurrency = ?config.max_concurrency,
        "configuration loaded"
    );

    let report = match DownloadBuilder::new(scraper)
        .symbols(symbols)
        .max_concurrency(config.max_concurrency)
        .started_at(start)
        .run()
        .await
    {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "could not prepare cache directory");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        symbols = report.results.len(),
        cache_hits = report.cache_hits(),
        fetched = report.fetched(),
        failed = report.failures(),
        "run finished"
    );
    tracing::info!("Execution took {:?}", report.elapsed);

    ExitCode::SUCCESS
}
