use packcache_core_types::TitleKey;
use serde::{Deserialize, Serialize};

/// Title - a catalog item the cache tracks variants for
///
/// Titles are owned by the external catalog. The cache only ever looks at
/// the key; the name is carried along for display and logging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// Unique catalog key
    pub key: TitleKey,

    /// Human-readable name
    pub name: String,
}

impl Title {
    /// Create a new Title with the given key and name
    pub fn new(key: impl Into<TitleKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }

    /// The empty sentinel substituted when no title is supplied
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// Check if this is the placeholder (empty key)
    pub fn is_placeholder(&self) -> bool {
        self.key.is_empty()
    }
}
