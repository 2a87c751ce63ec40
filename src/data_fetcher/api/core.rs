use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::fetch_utils::fetch_json;
use super::http_client::create_http_client_with_timeout;
use super::urls::{
    build_game_feed_url, build_lineups_url, build_player_stats_url, build_schedule_url,
    build_team_stats_url, build_teams_url,
};
use crate::config::Config;
use crate::data_fetcher::cache::DocumentCache;
use crate::data_fetcher::models::{Level, ResourceKind, StatGroup};
use crate::error::AppError;

/// Resolves upstream documents, through the on-disk cache for game-keyed
/// resources and straight from the network for everything else.
///
/// Every network request is followed by the configured courtesy delay.
/// Requests are never retried.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    api_base: String,
    stats_base: String,
    delay: Duration,
    cache: Option<DocumentCache>,
}

impl Fetcher {
    /// Builds a fetcher from configuration. The cache is only consulted when
    /// `cache_enabled` is set.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        let cache = config
            .cache_enabled
            .then(|| DocumentCache::new(config.cache_root()));

        if let Some(cache) = &cache {
            debug!("Document cache enabled at {}", cache.root().display());
        }

        Ok(Self {
            client,
            api_base: config.api_base_url.trim_end_matches('/').to_string(),
            stats_base: config.stats_base_url.trim_end_matches('/').to_string(),
            delay: Duration::from_millis(config.request_delay_ms),
            cache,
        })
    }

    pub fn cache(&self) -> Option<&DocumentCache> {
        self.cache.as_ref()
    }

    fn locate(&self, entity_id: i64, kind: ResourceKind) -> String {
        match kind {
            ResourceKind::GameFeed => build_game_feed_url(&self.api_base, entity_id),
            ResourceKind::Lineups => build_lineups_url(&self.api_base, entity_id),
        }
    }

    /// Resolves a game-keyed document.
    ///
    /// A readable cache entry wins. Otherwise the document is fetched and,
    /// when caching is enabled, written back on a best-effort basis.
    #[instrument(skip(self))]
    pub async fn resolve(&self, entity_id: i64, kind: ResourceKind) -> Result<Value, AppError> {
        if let Some(cache) = &self.cache
            && let Some(document) = cache.read(kind, entity_id).await
        {
            return Ok(document);
        }

        let url = self.locate(entity_id, kind);
        let document = fetch_json(&self.client, &url, self.delay).await?;

        if let Some(cache) = &self.cache {
            cache.write(kind, entity_id, &document).await;
        }

        Ok(document)
    }

    pub async fn fetch_game_feed(&self, game_id: i64) -> Result<Value, AppError> {
        self.resolve(game_id, ResourceKind::GameFeed).await
    }

    pub async fn fetch_lineups(&self, game_id: i64) -> Result<Value, AppError> {
        self.resolve(game_id, ResourceKind::Lineups).await
    }

    pub async fn fetch_schedule(&self, season: i32, level: Level) -> Result<Value, AppError> {
        info!("Fetching {} schedule for {}", level, season);
        let url = build_schedule_url(&self.api_base, season, &level.sport_ids());
        fetch_json(&self.client, &url, self.delay).await
    }

    pub async fn fetch_teams(&self, season: i32) -> Result<Value, AppError> {
        info!("Fetching team directory for {}", season);
        let url = build_teams_url(&self.api_base, season);
        fetch_json(&self.client, &url, self.delay).await
    }

    pub async fn fetch_player_season_stats(
        &self,
        season: i32,
        level: Level,
        team_id: i64,
        group: StatGroup,
    ) -> Result<Value, AppError> {
        let sport_id = level.require_sport_id()?;
        let url = build_player_stats_url(&self.stats_base, season, sport_id, team_id, group);
        fetch_json(&self.client, &url, self.delay).await
    }

    pub async fn fetch_team_season_stats(
        &self,
        season: i32,
        level: Level,
        group: StatGroup,
    ) -> Result<Value, AppError> {
        info!("Fetching {} team {} stats for {}", level, group, season);
        let sport_id = level.require_sport_id()?;
        let url = build_team_stats_url(&self.stats_base, season, sport_id, group);
        fetch_json(&self.client, &url, self.delay).await
    }
}
