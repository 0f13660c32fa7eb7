//! Integration tests for the Glyphset CLI command implementations.
//!
//! Commands are exercised directly through the library so no binary has to
//! be spawned; documents live in temp directories.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use glyphset::cli::{cmd_export, cmd_info, cmd_remove, cmd_rename, cmd_validate};
use glyphset_core::{Dependents, GlyphsetError, IconSet, IconSetDocument};
use std::path::PathBuf;

const SAMPLE: &str = r#"{
    "prefix": "demo",
    "icons": {
        "home": {"body": "<path d='M0 0z'/>", "width": 24},
        "user": {"body": "<circle r='8'/>"}
    },
    "aliases": {
        "house": {"parent": "home"},
        "home-r2": {"parent": "home", "rotate": 2}
    },
    "chars": {"a": "home"},
    "categories": {"Navigation": ["home"]}
}"#;

/// Write the sample document into a temp dir and return its path.
fn sample_file(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("set.json");
    std::fs::write(&path, SAMPLE).unwrap();
    path
}

// =============================================================================
// READ-ONLY COMMANDS
// =============================================================================

#[test]
fn info_succeeds_on_valid_document() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample_file(&dir);

    assert!(cmd_info(&file, false).is_ok());
    assert!(cmd_info(&file, true).is_ok());
}

#[test]
fn info_fails_on_missing_file() {
    let result = cmd_info(&PathBuf::from("/nonexistent/set.json"), false);
    assert!(matches!(result, Err(GlyphsetError::Io(_))));
}

#[test]
fn validate_accepts_intact_documents() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample_file(&dir);

    assert!(cmd_validate(&file, true).is_ok());
}

#[test]
fn malformed_json_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(matches!(
        cmd_info(&path, false),
        Err(GlyphsetError::Json(_))
    ));
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

#[test]
fn export_writes_canonical_document() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample_file(&dir);
    let out = dir.path().join("out.json");

    cmd_export(&file, Some(&out), false, false).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let document = IconSetDocument::from_json(&text).unwrap();
    assert_eq!(document.prefix, "demo");
    assert_eq!(document.icons.len(), 2);
    assert_eq!(document.aliases.len(), 2);
    assert_eq!(
        document.categories.get("Navigation"),
        Some(&vec!["home".to_string()])
    );
}

#[test]
fn export_round_trips_through_the_engine() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample_file(&dir);
    let out = dir.path().join("out.json");

    cmd_export(&file, Some(&out), true, false).unwrap();

    let original = IconSet::from_json(SAMPLE).unwrap();
    let reloaded = IconSet::from_json(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(original.len(), reloaded.len());
    for (name, _) in original.entries() {
        assert_eq!(original.resolve(name, true), reloaded.resolve(name, true));
    }
}

// =============================================================================
// MUTATION COMMANDS
// =============================================================================

#[test]
fn remove_cascade_rewrites_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample_file(&dir);
    let out = dir.path().join("out.json");

    cmd_remove(&file, Some(&out), "home", Dependents::Cascade, false).unwrap();

    let reloaded = IconSet::from_json(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert!(!reloaded.contains("home"));
    assert!(!reloaded.contains("house"));
    assert!(!reloaded.contains("home-r2"));
    assert!(reloaded.contains("user"));
}

#[test]
fn remove_missing_entry_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample_file(&dir);
    let out = dir.path().join("out.json");

    let result = cmd_remove(&file, Some(&out), "ghost", Dependents::Detach, false);
    assert!(matches!(result, Err(GlyphsetError::Rejected(_))));
    assert!(!out.exists());
}

#[test]
fn rename_rewrites_parent_pointers_in_output() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample_file(&dir);
    let out = dir.path().join("out.json");

    cmd_rename(&file, Some(&out), "home", "dwelling", false).unwrap();

    let reloaded = IconSet::from_json(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert!(reloaded.contains("dwelling"));
    assert!(!reloaded.contains("home"));
    assert!(reloaded.resolve("house", false).is_some());
    assert_eq!(
        reloaded.entry("house").and_then(|e| e.parent()),
        Some("dwelling")
    );
}

#[test]
fn rename_onto_itself_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = sample_file(&dir);

    let result = cmd_rename(&file, None, "home", "home", false);
    assert!(matches!(result, Err(GlyphsetError::Rejected(_))));
}
