pub mod api;
pub mod cache;
pub mod models;
pub mod processors;

pub use api::{Fetcher, fetch_json};
pub use cache::DocumentCache;
pub use models::{GameEvent, Level, ResourceKind, StatGroup};
