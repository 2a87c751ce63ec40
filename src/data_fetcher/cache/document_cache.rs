use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument, warn};

use crate::constants::CACHE_NAMESPACE;
use crate::data_fetcher::models::ResourceKind;

/// On-disk cache of raw upstream documents keyed by resource and entity id.
///
/// Entries live at `{root}/.milb/{resource}/{id}.json`, are written once and
/// never invalidated.
#[derive(Debug, Clone)]
pub struct DocumentCache {
    root: PathBuf,
}

impl DocumentCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, kind: ResourceKind, entity_id: i64) -> PathBuf {
        self.root
            .join(format!(".{CACHE_NAMESPACE}"))
            .join(kind.cache_name())
            .join(format!("{entity_id}.json"))
    }

    /// Cached document, or `None` when the entry is missing or unreadable.
    #[instrument(skip(self))]
    pub async fn read(&self, kind: ResourceKind, entity_id: i64) -> Option<Value> {
        let path = self.path_for(kind, entity_id);
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) => {
                debug!("Cache miss for {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(document) => {
                debug!("Using cached document {}", path.display());
                Some(document)
            }
            Err(e) => {
                warn!("Ignoring corrupt cache file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Persists a document pretty-printed. Failures are logged and swallowed.
    #[instrument(skip(self, document))]
    pub async fn write(&self, kind: ResourceKind, entity_id: i64, document: &Value) {
        let path = self.path_for(kind, entity_id);
        if let Err(e) = write_pretty(&path, document).await {
            warn!("Failed to cache {}: {}", path.display(), e);
        } else {
            debug!("Cached document at {}", path.display());
        }
    }
}

async fn write_pretty(path: &Path, document: &Value) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let body = serde_json::to_string_pretty(document)?;
    fs::write(path, body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_path_layout() {
        let cache = DocumentCache::new("/tmp/root");
        assert_eq!(
            cache.path_for(ResourceKind::GameFeed, 745001),
            PathBuf::from("/tmp/root/.milb/pbp/745001.json")
        );
        assert_eq!(
            cache.path_for(ResourceKind::Lineups, 7),
            PathBuf::from("/tmp/root/.milb/lineups/7.json")
        );
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let cache = DocumentCache::new(dir.path());
        let document = json!({"gamePk": 1, "liveData": {"plays": {"allPlays": []}}});

        assert!(cache.read(ResourceKind::GameFeed, 1).await.is_none());
        cache.write(ResourceKind::GameFeed, 1, &document).await;
        assert_eq!(cache.read(ResourceKind::GameFeed, 1).await, Some(document));

        let written = std::fs::read_to_string(cache.path_for(ResourceKind::GameFeed, 1)).unwrap();
        assert!(written.contains("\n  \"gamePk\": 1"));
    }

    #[tokio::test]
    async fn test_corrupt_entry_is_a_miss() {
        let dir = tempdir().unwrap();
        let cache = DocumentCache::new(dir.path());
        let path = cache.path_for(ResourceKind::Lineups, 3);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();

        assert!(cache.read(ResourceKind::Lineups, 3).await.is_none());
    }
}
