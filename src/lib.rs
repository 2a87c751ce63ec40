//! Minor League Baseball stats downloader library
//!
//! Fetches documents from the MLB Stats API and its companion stats service,
//! flattens them into tabular records and writes them as CSV files.
//!
//! # Examples
//!
//! ```rust,no_run
//! use milb_stats::config::Config;
//! use milb_stats::data_fetcher::Fetcher;
//! use milb_stats::data_fetcher::processors::extract_game_events;
//! use milb_stats::error::AppError;
//! use milb_stats::output::RecordTable;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let fetcher = Fetcher::new(&config)?;
//!
//!     let feed = fetcher.fetch_game_feed(745001).await?;
//!     let lineups = fetcher.fetch_lineups(745001).await.ok();
//!
//!     let mut table = RecordTable::new();
//!     table.extend(extract_game_events(&feed, lineups.as_ref(), 745001)?);
//!     table.write_csv(std::path::Path::new("pbp/745001.csv")).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod output;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::Fetcher;
pub use data_fetcher::models::{GameEvent, Level, StatGroup};
pub use error::AppError;
pub use output::RecordTable;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
