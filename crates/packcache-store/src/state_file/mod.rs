//! Versioned state-file format
//!
//! One JSON document holds both cache maps, selections first and
//! collections second. Each variant is stored as its full pack record, so
//! a restore reproduces the maps exactly as they were captured.
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "saved_at": "2026-10-18T09:00:00Z",
//!   "content_digest": "<sha256 hex>",
//!   "selections": {
//!     "<title key>": { "id": "<variant id>", "name": "<name>", "title_ids": ["<title key>"] }
//!   },
//!   "collections": {
//!     "<title key>": [{ "id": "<variant id>", "name": "<name>", "title_ids": ["<title key>"] }]
//!   }
//! }
//! ```
//!
//! Decoding is all or nothing: unknown fields, missing fields, another
//! format version, or a digest mismatch reject the whole file.

mod digest;
mod listing;

use chrono::{DateTime, Utc};
use packcache_core::errors::{ExError, ExErrorKind};
use packcache_core::{CollectionMap, GraphicPack, SelectionMap};
use packcache_core_types::{TitleKey, VariantId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::{io_error, restore_failure, serialization_error, Result};

pub use digest::compute_content_digest;
pub use listing::ListingReport;

/// Current on-disk format version
pub const FORMAT_VERSION: u32 = 1;

/// On-disk representation of the cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateFile {
    pub format_version: u32,
    pub saved_at: DateTime<Utc>,
    pub content_digest: String,
    pub selections: BTreeMap<TitleKey, GraphicPack>,
    pub collections: BTreeMap<TitleKey, Vec<GraphicPack>>,
}

impl StateFile {
    /// Capture copies of the cache maps, stamped now
    ///
    /// # Errors
    ///
    /// `ExErrorKind::Serialization` if the digest input cannot be encoded.
    pub fn capture(selections: &SelectionMap, collections: &CollectionMap) -> Result<Self> {
        let selections: BTreeMap<TitleKey, GraphicPack> = selections
            .iter()
            .map(|(key, pack)| (key.clone(), pack.clone()))
            .collect();
        let collections: BTreeMap<TitleKey, Vec<GraphicPack>> = collections
            .iter()
            .map(|(key, packs)| (key.clone(), packs.clone()))
            .collect();
        let content_digest = compute_content_digest(&selections, &collections)?;

        Ok(Self {
            format_version: FORMAT_VERSION,
            saved_at: Utc::now(),
            content_digest,
            selections,
            collections,
        })
    }

    /// Encode as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// `ExErrorKind::Serialization` if encoding fails.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| serialization_error("encode_state", e))
    }

    /// Decode and verify a state file read from `path`
    ///
    /// # Errors
    ///
    /// `ExErrorKind::RestoreFailure` for malformed JSON, wrong shape,
    /// unsupported format version, or digest mismatch.
    pub fn decode(bytes: &[u8], path: &Path) -> Result<Self> {
        let state: StateFile = serde_json::from_slice(bytes)
            .map_err(|e| restore_failure(path, format!("Undecodable state file: {}", e)))?;

        if state.format_version != FORMAT_VERSION {
            return Err(restore_failure(
                path,
                format!(
                    "Unsupported format version {} (expected {})",
                    state.format_version, FORMAT_VERSION
                ),
            ));
        }

        let actual = compute_content_digest(&state.selections, &state.collections)?;
        if actual != state.content_digest {
            return Err(restore_failure(
                path,
                format!(
                    "Content digest mismatch: recorded {}, computed {}",
                    state.content_digest, actual
                ),
            ));
        }

        Ok(state)
    }

    /// The stored maps in the form the cache holds them
    pub fn into_maps(self) -> (SelectionMap, CollectionMap) {
        (
            self.selections.into_iter().collect(),
            self.collections.into_iter().collect(),
        )
    }

    /// Number of distinct variant ids referenced by either map
    pub fn referenced_variant_count(&self) -> usize {
        let mut ids: Vec<&VariantId> = self
            .selections
            .values()
            .chain(self.collections.values().flatten())
            .map(|pack| &pack.id)
            .collect();
        ids.sort();
        ids.dedup();
        ids.len()
    }
}

/// Read and verify the state file at `path`
///
/// # Errors
///
/// - `ExErrorKind::NotFound` if there is no file at `path`
/// - `ExErrorKind::Io` if the file cannot be read
/// - otherwise as [`StateFile::decode`]
pub fn read_state_file(path: &Path) -> Result<StateFile> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExError::new(ExErrorKind::NotFound)
                .with_op("read_state")
                .with_path(path.display().to_string())
                .with_message("No state file")
        } else {
            io_error("read_state", path, e)
        }
    })?;
    StateFile::decode(&bytes, path)
}
