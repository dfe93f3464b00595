//! Checking restored packs against the enumerator
//!
//! Stored packs are restored exactly as written. This check only reports
//! which of them the enumerator no longer lists, so operators can see
//! state that refers to packs removed from disk. It never drops or
//! rewrites a stored pack.

use packcache_core::{GraphicPack, VariantEnumerator};
use packcache_core_types::{TitleKey, VariantId};
use std::collections::{BTreeSet, HashSet};

use super::StateFile;

/// Result of comparing stored packs with the current enumeration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingReport {
    /// Stored packs the enumerator did not list, by stored key then id
    pub unlisted: Vec<(TitleKey, VariantId)>,
    /// Title keys whose enumeration failed; their packs were not checked
    pub unchecked_titles: Vec<TitleKey>,
}

impl StateFile {
    /// Compare every stored pack with what `enumerator` lists today
    ///
    /// Each title key that is either a map key or named by a stored pack is
    /// enumerated once. A pack counts as listed when any of those
    /// enumerations reports its id. Packs whose titles could not all be
    /// enumerated are not reported.
    pub fn check_listing(&self, enumerator: &dyn VariantEnumerator) -> ListingReport {
        let keys: BTreeSet<&TitleKey> = self
            .selections
            .keys()
            .chain(self.collections.keys())
            .chain(self.stored_packs().flat_map(|(_, pack)| pack.title_ids.iter()))
            .collect();

        let mut listed: HashSet<VariantId> = HashSet::new();
        let mut report = ListingReport::default();
        for key in keys {
            match enumerator.enumerate_variants(key) {
                Ok(packs) => listed.extend(packs.into_iter().map(|p| p.id)),
                Err(cause) => {
                    tracing::warn!(
                        title_key = key.as_str(),
                        err.code = cause.code(),
                        "Cannot check restored variants against the enumerator"
                    );
                    report.unchecked_titles.push(key.clone());
                }
            }
        }

        let unchecked: HashSet<&TitleKey> = report.unchecked_titles.iter().collect();
        let mut unlisted = BTreeSet::new();
        for (key, pack) in self.stored_packs() {
            let checkable = !unchecked.contains(key)
                && !pack.title_ids.iter().any(|t| unchecked.contains(t));
            if checkable && !listed.contains(&pack.id) {
                unlisted.insert((key.clone(), pack.id.clone()));
            }
        }
        report.unlisted = unlisted.into_iter().collect();
        report
    }

    /// Every stored pack with the key it is stored under, selections first
    fn stored_packs(&self) -> impl Iterator<Item = (&TitleKey, &GraphicPack)> {
        self.selections.iter().chain(
            self.collections
                .iter()
                .flat_map(|(key, packs)| packs.iter().map(move |pack| (key, pack))),
        )
    }
}
