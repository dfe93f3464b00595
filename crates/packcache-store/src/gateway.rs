//! Persistence gateway
//!
//! Writes the cache's two maps to a single state file and reads them back
//! at startup.
//!
//! ## Logging Ownership
//!
//! The gateway owns lifecycle logging for `snapshot` and `restore`:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success (restore records its outcome)
//! - `log_op_error!` when a snapshot fails
//! - a `warn` level `end_error` event when persisted state is rejected
//!
//! The state-file codec below it only returns errors.

#![allow(clippy::result_large_err)]

use packcache_core::errors::ExError;
use packcache_core::schema::EVENT_END_ERROR;
use packcache_core::{log_op_end, log_op_error, log_op_start};
use packcache_core::{SelectionCache, SessionContext};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::atomic::atomic_write;
use crate::errors::{restore_failure, Result};
use crate::state_file::StateFile;

/// File name used when no path is configured
pub const DEFAULT_STATE_FILE: &str = "cstate";

/// What a restore attempt did
#[derive(Debug, Clone)]
pub enum RestoreOutcome {
    /// Both maps were replaced with the stored packs
    Restored(RestoreSummary),
    /// No state file exists (cold start)
    NothingToRestore,
    /// The session was not ready; nothing was read
    SessionNotReady,
    /// The state file was rejected; the cache is untouched
    Failed(ExError),
}

impl RestoreOutcome {
    pub fn is_restored(&self) -> bool {
        matches!(self, RestoreOutcome::Restored(_))
    }

    pub fn summary(&self) -> Option<&RestoreSummary> {
        match self {
            RestoreOutcome::Restored(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ExError> {
        match self {
            RestoreOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Short label used in log fields
    pub fn label(&self) -> &'static str {
        match self {
            RestoreOutcome::Restored(_) => "restored",
            RestoreOutcome::NothingToRestore => "nothing_to_restore",
            RestoreOutcome::SessionNotReady => "session_not_ready",
            RestoreOutcome::Failed(_) => "failed",
        }
    }
}

/// Counts from a successful restore
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreSummary {
    pub selections: usize,
    pub collections: usize,
    /// Restored packs the enumerator does not list; they are kept
    pub unlisted_variants: usize,
}

/// Snapshots and restores a `SelectionCache`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceGateway {
    path: PathBuf,
}

impl Default for PersistenceGateway {
    fn default() -> Self {
        Self::new(DEFAULT_STATE_FILE)
    }
}

impl PersistenceGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Configured state-file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the cache to the configured path
    ///
    /// # Errors
    ///
    /// See [`PersistenceGateway::snapshot_to`].
    pub fn snapshot(&self, cache: &SelectionCache) -> Result<()> {
        self.snapshot_to(cache, &self.path)
    }

    /// Write the cache's selections and collections to `destination`
    ///
    /// Creates or replaces the file atomically. Not retried.
    ///
    /// # Errors
    ///
    /// - `ExErrorKind::Serialization` if encoding fails
    /// - `ExErrorKind::Io` if the file cannot be written
    pub fn snapshot_to(&self, cache: &SelectionCache, destination: &Path) -> Result<()> {
        let state_path = destination.display().to_string();
        log_op_start!("snapshot", state_path = state_path.as_str());
        let start = Instant::now();

        let state = snapshot_impl(cache, destination).map_err(|e| {
            log_op_error!(
                "snapshot",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                state_path = state_path.as_str()
            );
            e
        })?;

        log_op_end!(
            "snapshot",
            duration_ms = start.elapsed().as_millis() as u64,
            state_path = state_path.as_str(),
            selection_count = state.selections.len() as u64,
            collection_count = state.collections.len() as u64
        );
        Ok(())
    }

    /// Restore the cache from the configured path
    pub fn restore(&self, cache: &mut SelectionCache, session: &dyn SessionContext) -> RestoreOutcome {
        self.restore_from(cache, &self.path, session)
    }

    /// Restore the cache from `source`
    ///
    /// Never fails outright: every result is a [`RestoreOutcome`]. On
    /// anything but `Restored` the cache is left as it was.
    pub fn restore_from(
        &self,
        cache: &mut SelectionCache,
        source: &Path,
        session: &dyn SessionContext,
    ) -> RestoreOutcome {
        let state_path = source.display().to_string();
        log_op_start!("restore", state_path = state_path.as_str());
        let start = Instant::now();

        let outcome = if session.is_ready() {
            restore_impl(cache, source)
        } else {
            RestoreOutcome::SessionNotReady
        };
        let duration_ms = start.elapsed().as_millis() as u64;

        match &outcome {
            RestoreOutcome::Failed(err) => {
                tracing::warn!(
                    component = module_path!(),
                    op = "restore",
                    event = EVENT_END_ERROR,
                    duration_ms = duration_ms,
                    err.kind = ?err.kind(),
                    err.code = err.code(),
                    state_path = state_path.as_str(),
                    "Persisted state ignored: {}",
                    err
                );
            }
            RestoreOutcome::Restored(summary) => {
                log_op_end!(
                    "restore",
                    duration_ms = duration_ms,
                    outcome = outcome.label(),
                    state_path = state_path.as_str(),
                    selection_count = summary.selections as u64,
                    collection_count = summary.collections as u64,
                    unlisted_variants = summary.unlisted_variants as u64
                );
            }
            _ => {
                log_op_end!(
                    "restore",
                    duration_ms = duration_ms,
                    outcome = outcome.label(),
                    state_path = state_path.as_str()
                );
            }
        }

        outcome
    }
}

fn snapshot_impl(cache: &SelectionCache, destination: &Path) -> Result<StateFile> {
    let state = StateFile::capture(cache.selections(), cache.variant_collections())?;
    let bytes = state.encode()?;
    atomic_write(destination, &bytes)?;
    Ok(state)
}

fn restore_impl(cache: &mut SelectionCache, source: &Path) -> RestoreOutcome {
    let bytes = match std::fs::read(source) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return RestoreOutcome::NothingToRestore;
        }
        Err(e) => {
            return RestoreOutcome::Failed(restore_failure(
                source,
                format!("Unreadable state file: {}", e),
            ));
        }
    };

    match decode_and_apply(cache, source, &bytes) {
        Ok(summary) => RestoreOutcome::Restored(summary),
        Err(err) => RestoreOutcome::Failed(err),
    }
}

fn decode_and_apply(cache: &mut SelectionCache, source: &Path, bytes: &[u8]) -> Result<RestoreSummary> {
    let state = StateFile::decode(bytes, source)?;
    let report = state.check_listing(cache.enumerator());

    for (title_key, variant_id) in &report.unlisted {
        tracing::warn!(
            title_key = title_key.as_str(),
            variant_id = variant_id.as_str(),
            "Restored variant is not listed by the enumerator"
        );
    }

    let summary = RestoreSummary {
        selections: state.selections.len(),
        collections: state.collections.len(),
        unlisted_variants: report.unlisted.len(),
    };
    let (selections, collections) = state.into_maps();
    cache.replace_state(selections, collections);
    Ok(summary)
}
