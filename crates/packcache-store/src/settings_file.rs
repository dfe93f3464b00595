//! TOML-backed settings store
//!
//! ```toml
//! [paths]
//! library_directory = "/games/wiiu"
//! emulator_directory = "/opt/cemu"
//!
//! [flags]
//! full_screen_mode = false
//! graphic_packs_enabled = true
//! ```
//!
//! Unset entries fall back to the in-memory defaults. Changes stay in
//! memory until `save()`.

#![allow(clippy::result_large_err)]

use packcache_core::errors::{ExError, ExErrorKind};
use packcache_core::{FlagSetting, MemorySettings, PathSetting, SettingsStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::atomic::atomic_write;
use crate::errors::{invalid_settings, io_error, serialization_error, Result};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsDocument {
    #[serde(default)]
    paths: BTreeMap<String, PathBuf>,
    #[serde(default)]
    flags: BTreeMap<String, bool>,
}

/// Settings persisted to a TOML file
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
    values: MemorySettings,
    dirty: bool,
}

impl FileSettingsStore {
    /// Load settings from `path`
    ///
    /// A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// - `ExErrorKind::Io` if the file exists but cannot be read
    /// - `ExErrorKind::InvalidInput` for malformed TOML or unknown keys
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => parse_document(&path, &text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    settings_path = %path.display(),
                    "Settings file missing, using defaults"
                );
                MemorySettings::new()
            }
            Err(e) => return Err(io_error("settings_load", &path, e)),
        };

        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }

    /// Location of the settings file
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// True when there are changes not yet saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Current values, explicit entries only
    pub fn values(&self) -> &MemorySettings {
        &self.values
    }

    /// Write the settings file atomically
    ///
    /// # Errors
    ///
    /// `ExErrorKind::Serialization` or `ExErrorKind::Io`.
    pub fn save(&mut self) -> Result<()> {
        let document = SettingsDocument {
            paths: self
                .values
                .paths
                .iter()
                .map(|(setting, value)| (setting.key().to_string(), value.clone()))
                .collect(),
            flags: self
                .values
                .flags
                .iter()
                .map(|(setting, value)| (setting.key().to_string(), *value))
                .collect(),
        };
        let text =
            toml::to_string_pretty(&document).map_err(|e| serialization_error("settings_save", e))?;
        atomic_write(&self.path, text.as_bytes())?;

        tracing::debug!(settings_path = %self.path.display(), "Settings saved");
        self.dirty = false;
        Ok(())
    }

    /// Set a value from its settings-file key and textual form
    ///
    /// Flags accept `true` or `false`; paths are taken verbatim.
    ///
    /// # Errors
    ///
    /// `ExErrorKind::InvalidInput` for an unknown key or a non-boolean flag
    /// value.
    pub fn set_from_str(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(setting) = PathSetting::from_key(key) {
            self.set_path(setting, Path::new(value));
            return Ok(());
        }
        if let Some(setting) = FlagSetting::from_key(key) {
            let parsed = value.parse::<bool>().map_err(|_| {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("settings_set")
                    .with_message(format!("Flag {} expects true or false, got '{}'", key, value))
            })?;
            self.set_flag(setting, parsed);
            return Ok(());
        }
        Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("settings_set")
            .with_message(format!("Unknown setting '{}'", key)))
    }

    /// Every known setting with its effective value, paths first
    ///
    /// Unset paths are reported as an empty string.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let paths = PathSetting::ALL.into_iter().map(|setting| {
            let value = self
                .values
                .path(setting)
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            (setting.key(), value)
        });
        let flags = FlagSetting::ALL
            .into_iter()
            .map(|setting| (setting.key(), self.values.flag(setting).to_string()));
        paths.chain(flags).collect()
    }
}

impl SettingsStore for FileSettingsStore {
    fn path(&self, setting: PathSetting) -> Option<PathBuf> {
        self.values.path(setting)
    }

    fn set_path(&mut self, setting: PathSetting, value: &Path) {
        self.values.set_path(setting, value);
        self.dirty = true;
    }

    fn flag(&self, setting: FlagSetting) -> bool {
        self.values.flag(setting)
    }

    fn set_flag(&mut self, setting: FlagSetting, value: bool) {
        self.values.set_flag(setting, value);
        self.dirty = true;
    }
}

fn parse_document(path: &Path, text: &str) -> Result<MemorySettings> {
    let document: SettingsDocument = toml::from_str(text)
        .map_err(|e| invalid_settings(path, format!("Malformed settings file: {}", e)))?;

    let mut values = MemorySettings::new();
    for (key, value) in document.paths {
        let setting = PathSetting::from_key(&key)
            .ok_or_else(|| invalid_settings(path, format!("Unknown path setting '{}'", key)))?;
        values.paths.insert(setting, value);
    }
    for (key, value) in document.flags {
        let setting = FlagSetting::from_key(&key)
            .ok_or_else(|| invalid_settings(path, format!("Unknown flag '{}'", key)))?;
        values.flags.insert(setting, value);
    }
    Ok(values)
}
