#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{counting_cache, failing_enumerator, pack};
use packcache_core::errors::CacheError;
use packcache_core::logging_facility::test_capture::init_test_capture;
use packcache_core::{log_op_end, log_op_error, log_op_start};
use packcache_core::{MemorySettings, SelectionCache, Title};
use packcache_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use packcache_core_types::TitleKey;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events: Vec<_> = capture
        .events_for(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = CacheError::EmptyCollection {
        title_key: TitleKey::from("t1"),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_event = capture
        .events_for(op_name)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");
    assert_eq!(error_event.field("err.code"), Some("ERR_EMPTY_COLLECTION"));
}

#[test]
fn test_population_is_bracketed_by_start_and_end() {
    let capture = init_test_capture();
    let key = "logging_population_title";
    let (mut cache, _) = counting_cache(vec![pack("a", &[key]), pack("b", &[key])]);

    cache.set_current_title(Some(Title::new(key, "Logged")));
    cache.effective_selection().unwrap();
    cache.effective_selection().unwrap();

    let events: Vec<_> = capture
        .events_for("populate_collection")
        .into_iter()
        .filter(|e| e.field("title_key") == Some(key))
        .collect();
    let starts = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .count();
    let ends: Vec<_> = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(starts, 1, "Population should run once");
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field("variant_count"), Some("2"));
}

#[test]
fn test_population_failure_logs_error_event() {
    let capture = init_test_capture();
    let key = "logging_failure_title";
    let mut cache = SelectionCache::new(
        Box::new(failing_enumerator(Rc::new(Cell::new(0)))),
        Box::new(MemorySettings::new()),
    );

    cache.set_current_title(Some(Title::new(key, "Broken")));
    cache.effective_selection().unwrap_err();

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("populate_collection")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field("title_key") == Some(key)
            && e.field("err.code") == Some("ERR_ENUMERATION_FAILED")
    });
    assert_eq!(errors, 1);
}
