//! Variant enumeration interface
//!
//! The cache never looks at the disk itself. Whatever knows which graphic
//! packs exist for a title is injected through `VariantEnumerator`.

use packcache_core_types::TitleKey;

use crate::errors::ExError;
use crate::model::GraphicPack;

/// Lists the graphic-pack variants available for a title.
///
/// The cache calls this lazily, once per title key, the first time the
/// effective selection for that title is read. The persistence gateway also
/// calls it on restore to turn stored variant ids back into packs.
#[allow(clippy::result_large_err)]
pub trait VariantEnumerator {
    /// Enumerate variants for `title_key`, in presentation order.
    ///
    /// # Errors
    ///
    /// Implementations report their own failures (usually `ExErrorKind::Io`);
    /// the cache wraps them as `CacheError::EnumerationFailed`.
    fn enumerate_variants(&self, title_key: &TitleKey) -> Result<Vec<GraphicPack>, ExError>;
}

impl<F> VariantEnumerator for F
where
    F: Fn(&TitleKey) -> Result<Vec<GraphicPack>, ExError>,
{
    fn enumerate_variants(&self, title_key: &TitleKey) -> Result<Vec<GraphicPack>, ExError> {
        self(title_key)
    }
}

/// Enumerator over a fixed, in-memory pack list.
///
/// Returns every pack whose `title_ids` contains the requested key, in the
/// order the packs were supplied.
#[derive(Debug, Clone, Default)]
pub struct StaticVariants {
    packs: Vec<GraphicPack>,
}

impl StaticVariants {
    /// Create an enumerator over the given packs
    pub fn new(packs: Vec<GraphicPack>) -> Self {
        Self { packs }
    }

    /// All packs known to this enumerator
    pub fn packs(&self) -> &[GraphicPack] {
        &self.packs
    }
}

impl VariantEnumerator for StaticVariants {
    fn enumerate_variants(&self, title_key: &TitleKey) -> Result<Vec<GraphicPack>, ExError> {
        Ok(self
            .packs
            .iter()
            .filter(|p| p.applies_to(title_key))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    fn pack(id: &str, titles: &[&str]) -> GraphicPack {
        GraphicPack::new(id, id, titles.iter().map(|t| TitleKey::from(*t)).collect())
    }

    #[test]
    fn test_static_variants_filters_by_title() {
        let enumerator = StaticVariants::new(vec![
            pack("a", &["t1"]),
            pack("b", &["t2"]),
            pack("c", &["t1", "t2"]),
        ]);

        let ids: Vec<String> = enumerator
            .enumerate_variants(&TitleKey::from("t1"))
            .unwrap()
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_closure_is_an_enumerator() {
        let failing = |key: &TitleKey| -> Result<Vec<GraphicPack>, ExError> {
            Err(ExError::new(ExErrorKind::Io).with_title_key(key.as_str()))
        };

        let err = failing
            .enumerate_variants(&TitleKey::from("t9"))
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.title_key(), Some("t9"));
    }
}
