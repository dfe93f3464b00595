use packcache_core::errors::{CacheError, ExError, ExErrorKind};
use packcache_core_types::TitleKey;
use std::collections::HashSet;
use std::error::Error;

#[test]
fn test_error_kind_code_mapping() {
    // Test that each kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::EmptyCollection, "ERR_EMPTY_COLLECTION"),
        (ExErrorKind::EnumerationFailed, "ERR_ENUMERATION_FAILED"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::RestoreFailure, "ERR_RESTORE_FAILURE"),
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
    ];

    let mut seen = HashSet::new();
    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
        assert!(seen.insert(expected_code), "Duplicate code {}", expected_code);
    }
}

#[test]
fn test_empty_collection_verifiable_by_kind() {
    let err = CacheError::EmptyCollection {
        title_key: TitleKey::from("00050000101c9500"),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::EmptyCollection);
    assert_eq!(ex_err.title_key(), Some("00050000101c9500"));
    assert!(ex_err.source_error().is_none());
}

#[test]
fn test_enumeration_failure_chains_cause() {
    let cause = ExError::new(ExErrorKind::Io)
        .with_path("/opt/cemu/graphicPacks")
        .with_message("permission denied");
    let err = CacheError::EnumerationFailed {
        title_key: TitleKey::from("t1"),
        cause,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::EnumerationFailed);
    let source = ex_err.source().expect("Should expose source");
    assert!(source.to_string().contains("ERR_IO"));
    assert_eq!(
        ex_err.source_error().and_then(|s| s.path()),
        Some("/opt/cemu/graphicPacks")
    );
}

#[test]
fn test_display_includes_code_op_and_context() {
    let err = ExError::new(ExErrorKind::RestoreFailure)
        .with_op("restore")
        .with_path("cstate")
        .with_message("Content digest mismatch");

    let text = err.to_string();

    assert!(text.starts_with("[ERR_RESTORE_FAILURE] in operation 'restore'"));
    assert!(text.contains("Content digest mismatch"));
    assert!(text.contains("(path: cstate)"));
}
