//! CLI integration tests
//!
//! These tests run the built binary against state and settings files in a
//! temp directory.

use packcache_core::{GraphicPack, MemorySettings, SelectionCache, StaticVariants, Title};
use packcache_store::PersistenceGateway;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_packcache"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn write_state(path: &Path) {
    let packs = vec![
        GraphicPack::new("fps60", "60 FPS", vec!["t1".into()]),
        GraphicPack::new("res4k", "4K", vec!["t1".into()]),
    ];
    let mut cache = SelectionCache::new(
        Box::new(StaticVariants::new(packs.clone())),
        Box::new(MemorySettings::new()),
    );
    cache.set_current_title(Some(Title::new("t1", "One")));
    cache.effective_selection().unwrap();
    cache.set_effective_selection(Some(packs[1].clone()));
    PersistenceGateway::new(path).snapshot(&cache).unwrap();
}

#[test]
fn test_inspect_prints_summary() {
    let temp_dir = TempDir::new().unwrap();
    write_state(&temp_dir.path().join("cstate"));

    // Default path is `cstate` in the working directory
    let output = run(temp_dir.path(), &["inspect"]);

    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("format_version: 1"));
    assert!(stdout.contains("t1: selected=res4k variants=[fps60, res4k]"));
}

#[test]
fn test_inspect_json_is_parseable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.json");
    write_state(&path);

    let output = run(temp_dir.path(), &["inspect", path.to_str().unwrap(), "--json"]);

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["selections"]["t1"]["id"], "res4k");
    assert_eq!(value["selections"]["t1"]["name"], "4K");
}

#[test]
fn test_inspect_corrupt_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("cstate"), b"{ nope").unwrap();

    let output = run(temp_dir.path(), &["inspect"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_RESTORE_FAILURE"));
}

#[test]
fn test_settings_set_then_show() {
    let temp_dir = TempDir::new().unwrap();

    let set = run(
        temp_dir.path(),
        &["settings", "set", "emulator_directory", "/opt/cemu"],
    );
    assert!(
        set.status.success(),
        "Stderr: {}",
        String::from_utf8_lossy(&set.stderr)
    );
    assert!(temp_dir.path().join("settings.toml").exists());

    let show = run(temp_dir.path(), &["settings", "show"]);
    let stdout = String::from_utf8_lossy(&show.stdout);
    assert!(stdout.contains("emulator_directory = /opt/cemu"));
    assert!(stdout.contains("graphic_packs_enabled = true"));
}

#[test]
fn test_settings_rejects_unknown_key() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["settings", "set", "volume", "11"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_INVALID_INPUT"));
    assert!(!temp_dir.path().join("settings.toml").exists());
}

#[test]
fn test_inspect_missing_file_reports_not_found() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(temp_dir.path(), &["inspect", "absent"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_NOT_FOUND"));
}
