use packcache_core::{
    ExError, GraphicPack, MemorySettings, Property, SelectionCache, StaticVariants,
    VariantEnumerator,
};
use packcache_core_types::TitleKey;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Build a pack whose name mirrors its id
#[allow(dead_code)]
pub fn pack(id: &str, titles: &[&str]) -> GraphicPack {
    GraphicPack::new(id, id, titles.iter().map(|t| TitleKey::from(*t)).collect())
}

/// Enumerator that counts calls per title key
#[allow(dead_code)]
pub struct CountingEnumerator {
    inner: StaticVariants,
    calls: Rc<RefCell<Vec<TitleKey>>>,
}

#[allow(dead_code)]
impl CountingEnumerator {
    pub fn new(packs: Vec<GraphicPack>) -> (Self, Rc<RefCell<Vec<TitleKey>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let enumerator = Self {
            inner: StaticVariants::new(packs),
            calls: calls.clone(),
        };
        (enumerator, calls)
    }
}

impl VariantEnumerator for CountingEnumerator {
    fn enumerate_variants(&self, title_key: &TitleKey) -> Result<Vec<GraphicPack>, ExError> {
        self.calls.borrow_mut().push(title_key.clone());
        self.inner.enumerate_variants(title_key)
    }
}

/// Cache over a counting enumerator; returns the call log too
#[allow(dead_code)]
pub fn counting_cache(packs: Vec<GraphicPack>) -> (SelectionCache, Rc<RefCell<Vec<TitleKey>>>) {
    let (enumerator, calls) = CountingEnumerator::new(packs);
    let cache = SelectionCache::new(Box::new(enumerator), Box::new(MemorySettings::new()));
    (cache, calls)
}

/// Subscribe a recorder and return the shared event log
#[allow(dead_code)]
pub fn record_events(cache: &mut SelectionCache) -> Rc<RefCell<Vec<Property>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    cache.subscribe(Box::new(move |p: Property| sink.borrow_mut().push(p)));
    seen
}

/// Enumerator that always fails, counting attempts
#[allow(dead_code)]
pub fn failing_enumerator(
    attempts: Rc<Cell<usize>>,
) -> impl Fn(&TitleKey) -> Result<Vec<GraphicPack>, ExError> {
    move |key: &TitleKey| {
        attempts.set(attempts.get() + 1);
        Err(ExError::new(packcache_core::ExErrorKind::Io)
            .with_title_key(key.as_str())
            .with_message("graphic pack directory unreadable"))
    }
}
