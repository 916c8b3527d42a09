//! Centralized constants for the default endpoint, UA and cache policy.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo quoteSummary API base (symbol is appended).
pub(crate) const DEFAULT_BASE_QUOTE_API: &str =
    "https://query2.finance.yahoo.com/v10/finance/quoteSummary/";

/// Every quoteSummary module requested for a ticker document.
pub const QUOTE_SUMMARY_MODULES: &[&str] = &[
    "assetProfile",
    "balanceSheetHistory",
    "balanceSheetHistoryQuarterly",
    "calendarEvents",
    "cashflowStatementHistory",
    "cashflowStatementHistoryQuarterly",
    "defaultKeyStatistics",
    "earnings",
    "earningsHistory",
    "earningsTrend",
    "financialData",
    "fundOwnership",
    "incomeStatementHistory",
    "incomeStatementHistoryQuarterly",
    "indexTrend",
    "industryTrend",
    "insiderHolders",
    "insiderTransactions",
    "institutionOwnership",
    "majorDirectHolders",
    "majorHoldersBreakdown",
    "netSharePurchaseActivity",
    "price",
    "quoteType",
    "recommendationTrend",
    "secFilings",
    "sectorTrend",
    "summaryDetail",
    "summaryProfile",
    "symbol",
    "upgradeDowngradeHistory",
    "fundProfile",
    "topHoldings",
    "fundPerformance",
];

/// Cache root used when `CACHE_PATH` is not set.
pub(crate) const DEFAULT_CACHE_PATH: &str = "./cache";

/// How long a cache file stays fresh after it was last written.
pub(crate) const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60 * 24;
