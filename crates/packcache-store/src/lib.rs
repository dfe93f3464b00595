//! PackCache Store - durable half of PackCache
//!
//! Provides:
//! - `PersistenceGateway` to snapshot and restore a `SelectionCache`
//! - Versioned JSON state-file format with content digest
//! - Atomic file writes
//! - TOML-backed `FileSettingsStore`

pub mod atomic;
pub mod errors;
pub mod gateway;
pub mod settings_file;
pub mod state_file;

// Re-export key types
pub use errors::Result;
pub use gateway::{PersistenceGateway, RestoreOutcome, RestoreSummary, DEFAULT_STATE_FILE};
pub use settings_file::FileSettingsStore;
pub use state_file::{read_state_file, StateFile, FORMAT_VERSION};
