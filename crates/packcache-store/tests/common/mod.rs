use packcache_core::{
    GraphicPack, MemorySettings, Property, SelectionCache, StaticVariants, Title,
};
use packcache_core_types::TitleKey;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

/// Build a pack whose name mirrors its id
#[allow(dead_code)]
pub fn pack(id: &str, titles: &[&str]) -> GraphicPack {
    GraphicPack::new(id, id, titles.iter().map(|t| TitleKey::from(*t)).collect())
}

/// Packs for two titles: t1 has a, b, c and t2 has x, y
#[allow(dead_code)]
pub fn library() -> Vec<GraphicPack> {
    vec![
        pack("a", &["t1"]),
        pack("b", &["t1"]),
        pack("c", &["t1"]),
        pack("x", &["t2"]),
        pack("y", &["t2"]),
    ]
}

/// Fresh cache over a fixed pack list
#[allow(dead_code)]
pub fn cache_over(packs: Vec<GraphicPack>) -> SelectionCache {
    SelectionCache::new(
        Box::new(StaticVariants::new(packs)),
        Box::new(MemorySettings::new()),
    )
}

/// Cache with t1 populated and `b` chosen, t2 populated with no choice
#[allow(dead_code)]
pub fn populated_cache() -> SelectionCache {
    let mut cache = cache_over(library());
    cache.set_current_title(Some(Title::new("t2", "Two")));
    cache.effective_selection().unwrap();
    cache.set_current_title(Some(Title::new("t1", "One")));
    cache.effective_selection().unwrap();
    cache.set_effective_selection(Some(pack("b", &["t1"])));
    cache
}

/// Temp dir plus a state-file path inside it
#[allow(dead_code)]
pub fn state_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("cstate");
    (dir, path)
}

/// Subscribe a recorder and return the shared event log
#[allow(dead_code)]
pub fn record_events(cache: &mut SelectionCache) -> Rc<RefCell<Vec<Property>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    cache.subscribe(Box::new(move |p: Property| sink.borrow_mut().push(p)));
    seen
}
