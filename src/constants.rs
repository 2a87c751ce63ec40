//! Application-wide constants and configuration values
//!
//! This module centralizes the upstream endpoints, delays and file layout
//! constants used across the fetcher, the extractors and the CSV writer.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default base URL of the MLB Stats API (schedule, live feed, teams)
pub const DEFAULT_API_BASE_URL: &str = "https://statsapi.mlb.com/api";

/// Default base URL of the stats service used for season aggregates
pub const DEFAULT_STATS_BASE_URL: &str = "https://bdfed.stitch.mlbinfra.com/bdfed";

/// Fixed pause after every network request, in milliseconds
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;

/// The stats service rejects requests without a browser-like user agent
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/83.0.4103.97 Safari/537.36";

/// Name of the hidden directory created under the cache root
pub const CACHE_NAMESPACE: &str = "milb";

/// Log file name used when no custom path is configured
pub const DEFAULT_LOG_FILE_NAME: &str = "milb_stats.log";

/// Season bounds for the stats service
pub mod seasons {
    /// Earliest season the stats service has aggregates for
    pub const FIRST_STATS_SEASON: i32 = 2005;
}

/// Environment variable names for configuration overrides
pub mod env_vars {
    pub const API_BASE_URL: &str = "MILB_API_BASE_URL";
    pub const STATS_BASE_URL: &str = "MILB_STATS_BASE_URL";
    pub const CACHE_ENABLED: &str = "MILB_CACHE_ENABLED";
    pub const CACHE_DIR: &str = "MILB_CACHE_DIR";
    pub const OUTPUT_DIR: &str = "MILB_OUTPUT_DIR";
    pub const REQUEST_DELAY_MS: &str = "MILB_REQUEST_DELAY_MS";
    pub const HTTP_TIMEOUT: &str = "MILB_HTTP_TIMEOUT";
    pub const LOG_FILE: &str = "MILB_LOG_FILE";
}

/// Schedule status strings used to pick completed games
pub mod game_status {
    pub const FINAL: &str = "Final";

    /// Detailed states excluded even when the abstract state is final
    pub const EXCLUDED_DETAILED_STATES: &[&str] =
        &["Cancelled", "Postponed", "In Progress", "Scheduled"];
}
