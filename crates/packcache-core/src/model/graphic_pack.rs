use packcache_core_types::{TitleKey, VariantId};
use serde::{Deserialize, Serialize};

/// GraphicPack - one configuration variant applicable to one or more titles
///
/// Packs usually come from the external enumerator, but the cache keeps
/// whatever it is given. Persistence stores the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphicPack {
    /// Stable identifier (survives restarts)
    pub id: VariantId,

    /// Human-readable name
    pub name: String,

    /// Keys of the titles this pack applies to, in declaration order
    pub title_ids: Vec<TitleKey>,
}

impl GraphicPack {
    /// Create a new GraphicPack
    pub fn new(
        id: impl Into<VariantId>,
        name: impl Into<String>,
        title_ids: Vec<TitleKey>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title_ids,
        }
    }

    /// First title this pack declares, used to key bulk replacements
    pub fn primary_title(&self) -> Option<&TitleKey> {
        self.title_ids.first()
    }

    /// Check if this pack applies to the given title
    pub fn applies_to(&self, key: &TitleKey) -> bool {
        self.title_ids.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_title_is_first_declared() {
        let pack = GraphicPack::new(
            "pack:shared",
            "Shared",
            vec![TitleKey::from("t2"), TitleKey::from("t3")],
        );
        assert_eq!(pack.primary_title(), Some(&TitleKey::from("t2")));
        assert!(pack.applies_to(&TitleKey::from("t3")));
        assert!(!pack.applies_to(&TitleKey::from("t1")));
    }

    #[test]
    fn test_pack_without_titles_has_no_primary() {
        let pack = GraphicPack::new("pack:orphan", "Orphan", Vec::new());
        assert!(pack.primary_title().is_none());
    }
}
