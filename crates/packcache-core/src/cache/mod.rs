//! Two-tier selection cache
//!
//! For every title the cache keeps the ordered collection of graphic-pack
//! variants (populated lazily from the injected enumerator) and, separately,
//! the variant the user explicitly chose. Reads fall back to the first
//! variant when nothing was chosen.
//!
//! ## Rules
//!
//! - A collection is enumerated once per title key and never re-derived
//!   implicitly. Only `set_collection` or `replace_state` overwrite it.
//! - The selection map only holds explicit choices; the fallback never
//!   writes into it.
//! - Mutations never fail. Invalid input degrades to a no-op.
//! - Every observable mutation is announced through `ChangeEvents`.

mod settings_view;

use std::collections::HashMap;

use packcache_core_types::TitleKey;

use crate::enumerator::VariantEnumerator;
use crate::errors::{CacheError, Result};
use crate::model::{GraphicPack, Title};
use crate::notifier::{BindingNotifier, ChangeEvents, Property};
use crate::settings::SettingsStore;
use crate::{log_op_end, log_op_error, log_op_start};

/// Title key → explicitly chosen variant
pub type SelectionMap = HashMap<TitleKey, GraphicPack>;

/// Title key → ordered variant collection
pub type CollectionMap = HashMap<TitleKey, Vec<GraphicPack>>;

/// Events announced when the current title changes
const TITLE_CHANGED: [Property; 4] = [
    Property::SelectedItem,
    Property::ContextItems,
    Property::SelectedItemGraphicPack,
    Property::SelectedItemGraphicPacks,
];

/// Events announced after both maps are replaced wholesale
const STATE_REPLACED: [Property; 2] = [
    Property::SelectedItemGraphicPack,
    Property::SelectedItemGraphicPacks,
];

/// Per-title variant cache with lazy population and fallback selection
///
/// Single-owner, single-threaded. Lazy population and snapshot/restore are
/// read-then-write sequences; callers serialize access to the whole cache.
pub struct SelectionCache {
    variant_collections: CollectionMap,
    selections: SelectionMap,
    current_title: Option<Title>,
    enumerator: Box<dyn VariantEnumerator>,
    settings: Box<dyn SettingsStore>,
    events: ChangeEvents,
}

impl SelectionCache {
    /// Create an empty cache over the given collaborators
    pub fn new(enumerator: Box<dyn VariantEnumerator>, settings: Box<dyn SettingsStore>) -> Self {
        Self {
            variant_collections: HashMap::new(),
            selections: HashMap::new(),
            current_title: None,
            enumerator,
            settings,
            events: ChangeEvents::new(),
        }
    }

    /// Register an observer for property-change events
    pub fn subscribe(&mut self, notifier: Box<dyn BindingNotifier>) {
        self.events.subscribe(notifier);
    }

    /// The title currently in focus, if one was ever set
    pub fn current_title(&self) -> Option<&Title> {
        self.current_title.as_ref()
    }

    /// Make `title` the current title
    ///
    /// `None` is stored as the placeholder title, which reads treat as "no
    /// title active". Always announces the four title-dependent properties.
    pub fn set_current_title(&mut self, title: Option<Title>) {
        let title = title.unwrap_or_else(Title::placeholder);
        tracing::debug!(title_key = title.key.as_str(), "Current title changed");
        self.current_title = Some(title);
        self.events.emit_all(&TITLE_CHANGED);
    }

    /// Effective selection for the current title
    ///
    /// Populates the title's collection through the enumerator on first
    /// access, then returns the explicit selection if one exists, otherwise
    /// the first variant of the collection.
    ///
    /// Returns `Ok(None)` when no title (or only the placeholder) is active.
    ///
    /// # Errors
    ///
    /// - `CacheError::EnumerationFailed` if lazy population fails; nothing is
    ///   stored, so the next read tries again.
    /// - `CacheError::EmptyCollection` if there is no explicit selection and
    ///   the populated collection is empty.
    pub fn effective_selection(&mut self) -> Result<Option<GraphicPack>> {
        let Some(key) = self.active_key().cloned() else {
            return Ok(None);
        };

        self.ensure_populated(&key)?;

        if let Some(chosen) = self.selections.get(&key) {
            return Ok(Some(chosen.clone()));
        }

        self.variant_collections
            .get(&key)
            .and_then(|collection| collection.first())
            .cloned()
            .map(Some)
            .ok_or(CacheError::EmptyCollection { title_key: key })
    }

    /// Record an explicit selection for the current title
    ///
    /// No-op when no title is active or `variant` is `None`. The variant is
    /// not checked against the title's collection.
    pub fn set_effective_selection(&mut self, variant: Option<GraphicPack>) {
        let Some(variant) = variant else {
            return;
        };
        let Some(key) = self.active_key().cloned() else {
            return;
        };

        tracing::debug!(
            title_key = key.as_str(),
            variant_id = variant.id.as_str(),
            "Selection recorded"
        );
        self.selections.insert(key, variant);
        self.events.emit(Property::SelectedItemGraphicPack);
    }

    /// Variant collection of the current title
    ///
    /// Empty when no title is active or when the title's collection has not
    /// been populated yet. Never triggers population.
    pub fn collection(&self) -> &[GraphicPack] {
        self.active_key()
            .and_then(|key| self.variant_collections.get(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Replace a title's variant collection wholesale
    ///
    /// The target title is the first applicable title of the *last* pack in
    /// `sequence`, not the current title. No-op when `sequence` is empty or
    /// its last pack declares no titles.
    pub fn set_collection(&mut self, sequence: Vec<GraphicPack>) {
        let Some(last) = sequence.last() else {
            return;
        };
        let Some(key) = last.primary_title().cloned() else {
            tracing::warn!(
                variant_id = last.id.as_str(),
                "Ignoring collection replacement: last variant declares no titles"
            );
            return;
        };

        tracing::debug!(
            title_key = key.as_str(),
            variant_count = sequence.len() as u64,
            "Collection replaced"
        );
        self.variant_collections.insert(key, sequence);
        self.events.emit(Property::SelectedItemGraphicPacks);
    }

    /// Explicit selections, keyed by title
    pub fn selections(&self) -> &SelectionMap {
        &self.selections
    }

    /// Populated variant collections, keyed by title
    pub fn variant_collections(&self) -> &CollectionMap {
        &self.variant_collections
    }

    /// True once the title's collection has been populated or assigned
    pub fn is_populated(&self, key: &TitleKey) -> bool {
        self.variant_collections.contains_key(key)
    }

    /// The injected enumerator
    pub fn enumerator(&self) -> &dyn VariantEnumerator {
        self.enumerator.as_ref()
    }

    /// Replace both maps wholesale
    ///
    /// Used when restoring persisted state. Announces the effective selection
    /// and the effective collection.
    pub fn replace_state(&mut self, selections: SelectionMap, collections: CollectionMap) {
        self.selections = selections;
        self.variant_collections = collections;
        self.events.emit_all(&STATE_REPLACED);
    }

    fn active_key(&self) -> Option<&TitleKey> {
        self.current_title
            .as_ref()
            .filter(|title| !title.is_placeholder())
            .map(|title| &title.key)
    }

    fn ensure_populated(&mut self, key: &TitleKey) -> Result<()> {
        if self.variant_collections.contains_key(key) {
            return Ok(());
        }

        log_op_start!("populate_collection", title_key = key.as_str());
        let start = std::time::Instant::now();

        let variants = self.enumerator.enumerate_variants(key).map_err(|cause| {
            let err = CacheError::EnumerationFailed {
                title_key: key.clone(),
                cause,
            };
            log_op_error!(
                "populate_collection",
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                title_key = key.as_str()
            );
            err
        })?;

        log_op_end!(
            "populate_collection",
            duration_ms = start.elapsed().as_millis() as u64,
            title_key = key.as_str(),
            variant_count = variants.len() as u64
        );

        self.variant_collections.insert(key.clone(), variants);
        Ok(())
    }
}

impl std::fmt::Debug for SelectionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionCache")
            .field("current_title", &self.current_title)
            .field("selections", &self.selections.len())
            .field("variant_collections", &self.variant_collections.len())
            .field("events", &self.events)
            .finish()
    }
}
