//! PackCache Core - per-title graphic-pack selection cache
//!
//! This crate provides the in-memory half of PackCache:
//! - Title and GraphicPack models
//! - The two-tier `SelectionCache` (variant collection per title, explicit
//!   selection per title) with lazy population and fallback selection
//! - Collaborator traits for variant enumeration, settings, session
//!   readiness, and change notification
//! - The structured error and logging facilities shared with the store

pub mod cache;
pub mod enumerator;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod notifier;
pub mod session;
pub mod settings;

// Schema constants used by the logging macros
pub use packcache_core_types::schema;

// Re-export commonly used types
pub use cache::{CollectionMap, SelectionCache, SelectionMap};
pub use enumerator::{StaticVariants, VariantEnumerator};
pub use errors::{CacheError, ExError, ExErrorKind, Result};
pub use model::{GraphicPack, Title};
pub use notifier::{BindingNotifier, ChangeEvents, Property};
pub use session::{ReadySession, SessionContext};
pub use settings::{FlagSetting, MemorySettings, PathSetting, SettingsStore};
