//! Change notification for data-bound observers
//!
//! The cache announces every observable mutation as a `Property` event.
//! Observers subscribe with a `BindingNotifier`; the cache holds no
//! reference to whoever owns it.

use std::fmt;

/// Observable properties exposed by the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// The current title changed
    SelectedItem,
    /// Context menu entries depend on the current title
    ContextItems,
    /// Effective selection for the current title
    SelectedItemGraphicPack,
    /// Variant collection for the current title
    SelectedItemGraphicPacks,
    LibraryDirectory,
    EmulatorDirectory,
    FullScreen,
    GraphicPacksEnabled,
    StoreEncryptedContent,
    CacheDatabase,
    DynamicTheme,
}

impl Property {
    /// Property name as seen by binding observers
    pub fn name(&self) -> &'static str {
        match self {
            Property::SelectedItem => "SelectedItem",
            Property::ContextItems => "ContextItems",
            Property::SelectedItemGraphicPack => "SelectedItemGraphicPack",
            Property::SelectedItemGraphicPacks => "SelectedItemGraphicPacks",
            Property::LibraryDirectory => "LibraryDirectory",
            Property::EmulatorDirectory => "EmulatorDirectory",
            Property::FullScreen => "FullScreen",
            Property::GraphicPacksEnabled => "GraphicPacksEnabled",
            Property::StoreEncryptedContent => "StoreEncryptedContent",
            Property::CacheDatabase => "CacheDatabase",
            Property::DynamicTheme => "DynamicTheme",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Receives property-change announcements. Fire-and-forget.
pub trait BindingNotifier {
    fn notify_changed(&self, property: Property);
}

impl<F> BindingNotifier for F
where
    F: Fn(Property),
{
    fn notify_changed(&self, property: Property) {
        self(property)
    }
}

/// Ordered list of subscribers
#[derive(Default)]
pub struct ChangeEvents {
    subscribers: Vec<Box<dyn BindingNotifier>>,
}

impl ChangeEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscriber; it receives every later event
    pub fn subscribe(&mut self, notifier: Box<dyn BindingNotifier>) {
        self.subscribers.push(notifier);
    }

    /// Deliver `property` to every subscriber in registration order
    pub fn emit(&self, property: Property) {
        tracing::trace!(property = property.name(), "Property changed");
        for subscriber in &self.subscribers {
            subscriber.notify_changed(property);
        }
    }

    /// Deliver several events in order
    pub fn emit_all(&self, properties: &[Property]) {
        for property in properties {
            self.emit(*property);
        }
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for ChangeEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeEvents")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
