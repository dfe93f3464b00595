//! Settings store interface
//!
//! Directory paths and feature flags belong to the host application. The
//! cache reads and writes them through an injected `SettingsStore` and
//! passes values through unchanged.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Path-valued settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathSetting {
    /// Where the title library lives
    LibraryDirectory,
    /// Emulator installation directory (graphic packs live below it)
    EmulatorDirectory,
}

impl PathSetting {
    pub const ALL: [PathSetting; 2] = [
        PathSetting::LibraryDirectory,
        PathSetting::EmulatorDirectory,
    ];

    /// Stable key used in settings files
    pub fn key(&self) -> &'static str {
        match self {
            PathSetting::LibraryDirectory => "library_directory",
            PathSetting::EmulatorDirectory => "emulator_directory",
        }
    }

    /// Parse a settings-file key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Boolean feature flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSetting {
    FullScreenMode,
    GraphicPacksEnabled,
    StoreEncryptedContent,
    CacheDatabase,
    DynamicTheme,
}

impl FlagSetting {
    pub const ALL: [FlagSetting; 5] = [
        FlagSetting::FullScreenMode,
        FlagSetting::GraphicPacksEnabled,
        FlagSetting::StoreEncryptedContent,
        FlagSetting::CacheDatabase,
        FlagSetting::DynamicTheme,
    ];

    /// Stable key used in settings files
    pub fn key(&self) -> &'static str {
        match self {
            FlagSetting::FullScreenMode => "full_screen_mode",
            FlagSetting::GraphicPacksEnabled => "graphic_packs_enabled",
            FlagSetting::StoreEncryptedContent => "store_encrypted_content",
            FlagSetting::CacheDatabase => "cache_database",
            FlagSetting::DynamicTheme => "dynamic_theme",
        }
    }

    /// Parse a settings-file key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Value reported when the store has never seen this flag
    pub fn default_value(&self) -> bool {
        matches!(self, FlagSetting::GraphicPacksEnabled | FlagSetting::CacheDatabase)
    }
}

/// Scalar configuration capability injected into the cache
pub trait SettingsStore {
    fn path(&self, setting: PathSetting) -> Option<PathBuf>;

    fn set_path(&mut self, setting: PathSetting, value: &Path);

    fn flag(&self, setting: FlagSetting) -> bool;

    fn set_flag(&mut self, setting: FlagSetting, value: bool);
}

/// Shared handle, so the host can keep (and later save) a store it also
/// hands to the cache
impl<T: SettingsStore> SettingsStore for Rc<RefCell<T>> {
    fn path(&self, setting: PathSetting) -> Option<PathBuf> {
        self.borrow().path(setting)
    }

    fn set_path(&mut self, setting: PathSetting, value: &Path) {
        self.borrow_mut().set_path(setting, value);
    }

    fn flag(&self, setting: FlagSetting) -> bool {
        self.borrow().flag(setting)
    }

    fn set_flag(&mut self, setting: FlagSetting, value: bool) {
        self.borrow_mut().set_flag(setting, value);
    }
}

/// In-memory settings, the default when the host supplies nothing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySettings {
    pub paths: BTreeMap<PathSetting, PathBuf>,
    pub flags: BTreeMap<FlagSetting, bool>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn path(&self, setting: PathSetting) -> Option<PathBuf> {
        self.paths.get(&setting).cloned()
    }

    fn set_path(&mut self, setting: PathSetting, value: &Path) {
        self.paths.insert(setting, value.to_path_buf());
    }

    fn flag(&self, setting: FlagSetting) -> bool {
        self.flags
            .get(&setting)
            .copied()
            .unwrap_or_else(|| setting.default_value())
    }

    fn set_flag(&mut self, setting: FlagSetting, value: bool) {
        self.flags.insert(setting, value);
    }
}
