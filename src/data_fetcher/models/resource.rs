use std::fmt;

/// Game-keyed resources that can be resolved through the document cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Full live game feed (play-by-play and box score).
    GameFeed,
    /// Schedule entry hydrated with starting lineups.
    Lineups,
}

impl ResourceKind {
    /// Name of the cache sub-directory for this resource.
    pub fn cache_name(self) -> &'static str {
        match self {
            ResourceKind::GameFeed => "pbp",
            ResourceKind::Lineups => "lineups",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cache_name())
    }
}
