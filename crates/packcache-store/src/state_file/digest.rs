//! Content digest for state files
//!
//! SHA256 over the canonical (compact, key-sorted) JSON of the two maps.
//! `saved_at` and the format version are outside the digest, so the same
//! cache contents always hash the same.

use packcache_core::GraphicPack;
use packcache_core_types::TitleKey;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::errors::{serialization_error, Result};

/// Canonical representation of the persisted maps, in fixed order
#[derive(Serialize)]
struct CanonicalContent<'a> {
    selections: &'a BTreeMap<TitleKey, GraphicPack>,
    collections: &'a BTreeMap<TitleKey, Vec<GraphicPack>>,
}

/// Compute the hex SHA256 digest of the two maps
///
/// # Errors
///
/// `ExErrorKind::Serialization` if the maps cannot be encoded.
pub fn compute_content_digest(
    selections: &BTreeMap<TitleKey, GraphicPack>,
    collections: &BTreeMap<TitleKey, Vec<GraphicPack>>,
) -> Result<String> {
    let canonical = CanonicalContent {
        selections,
        collections,
    };
    let json = serde_json::to_string(&canonical)
        .map_err(|e| serialization_error("compute_content_digest", e))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}
