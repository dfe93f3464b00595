//! Settings pass-through on the cache
//!
//! Bound views read directory paths and feature flags through the cache so
//! one object carries every property they observe. Values go to the
//! injected store unchanged; each setter announces its own property.

use std::path::{Path, PathBuf};

use super::SelectionCache;
use crate::notifier::Property;
use crate::settings::{FlagSetting, PathSetting};

impl SelectionCache {
    pub fn library_directory(&self) -> Option<PathBuf> {
        self.settings.path(PathSetting::LibraryDirectory)
    }

    pub fn set_library_directory(&mut self, dir: &Path) {
        self.write_path(PathSetting::LibraryDirectory, dir, Property::LibraryDirectory);
    }

    pub fn emulator_directory(&self) -> Option<PathBuf> {
        self.settings.path(PathSetting::EmulatorDirectory)
    }

    pub fn set_emulator_directory(&mut self, dir: &Path) {
        self.write_path(PathSetting::EmulatorDirectory, dir, Property::EmulatorDirectory);
    }

    pub fn full_screen(&self) -> bool {
        self.settings.flag(FlagSetting::FullScreenMode)
    }

    pub fn set_full_screen(&mut self, enabled: bool) {
        self.write_flag(FlagSetting::FullScreenMode, enabled, Property::FullScreen);
    }

    pub fn graphic_packs_enabled(&self) -> bool {
        self.settings.flag(FlagSetting::GraphicPacksEnabled)
    }

    pub fn set_graphic_packs_enabled(&mut self, enabled: bool) {
        self.write_flag(
            FlagSetting::GraphicPacksEnabled,
            enabled,
            Property::GraphicPacksEnabled,
        );
    }

    pub fn store_encrypted_content(&self) -> bool {
        self.settings.flag(FlagSetting::StoreEncryptedContent)
    }

    pub fn set_store_encrypted_content(&mut self, enabled: bool) {
        self.write_flag(
            FlagSetting::StoreEncryptedContent,
            enabled,
            Property::StoreEncryptedContent,
        );
    }

    pub fn cache_database(&self) -> bool {
        self.settings.flag(FlagSetting::CacheDatabase)
    }

    pub fn set_cache_database(&mut self, enabled: bool) {
        self.write_flag(FlagSetting::CacheDatabase, enabled, Property::CacheDatabase);
    }

    pub fn dynamic_theme(&self) -> bool {
        self.settings.flag(FlagSetting::DynamicTheme)
    }

    pub fn set_dynamic_theme(&mut self, enabled: bool) {
        self.write_flag(FlagSetting::DynamicTheme, enabled, Property::DynamicTheme);
    }

    fn write_path(&mut self, setting: PathSetting, dir: &Path, property: Property) {
        self.settings.set_path(setting, dir);
        self.events.emit(property);
    }

    fn write_flag(&mut self, setting: FlagSetting, value: bool, property: Property) {
        self.settings.set_flag(setting, value);
        self.events.emit(property);
    }
}

#[cfg(test)]
mod tests {
    use crate::cache::SelectionCache;
    use crate::enumerator::StaticVariants;
    use crate::notifier::Property;
    use crate::settings::{FlagSetting, MemorySettings, SettingsStore};
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    #[test]
    fn test_settings_pass_through_and_announce() {
        let mut seeded = MemorySettings::new();
        seeded.set_flag(FlagSetting::DynamicTheme, true);
        let mut cache = SelectionCache::new(Box::new(StaticVariants::default()), Box::new(seeded));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        cache.subscribe(Box::new(move |p: Property| sink.borrow_mut().push(p)));

        assert!(cache.dynamic_theme());
        assert_eq!(cache.library_directory(), None);

        cache.set_library_directory(Path::new("/games/library"));
        cache.set_full_screen(true);
        cache.set_store_encrypted_content(true);

        assert_eq!(cache.library_directory(), Some(PathBuf::from("/games/library")));
        assert!(cache.full_screen());
        assert!(cache.store_encrypted_content());
        assert_eq!(
            *seen.borrow(),
            vec![
                Property::LibraryDirectory,
                Property::FullScreen,
                Property::StoreEncryptedContent
            ]
        );
    }

    #[test]
    fn test_settings_do_not_touch_cache_maps() {
        let mut cache = SelectionCache::new(
            Box::new(StaticVariants::default()),
            Box::new(MemorySettings::new()),
        );
        cache.set_emulator_directory(Path::new("/opt/cemu"));
        cache.set_graphic_packs_enabled(false);
        cache.set_cache_database(false);

        assert!(!cache.graphic_packs_enabled());
        assert!(!cache.cache_database());
        assert_eq!(cache.emulator_directory(), Some(PathBuf::from("/opt/cemu")));
        assert!(cache.selections().is_empty());
        assert!(cache.variant_collections().is_empty());
    }
}
