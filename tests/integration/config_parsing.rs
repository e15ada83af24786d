//! Integration tests for loading profile definitions from disk.

use tempfile::TempDir;

use sdprofile::action::ActionKind;
use sdprofile::config::{Slot, load_config, save_config};
use sdprofile::error::ProfileError;
use sdprofile::icon::{Palette, Symbol};
use sdprofile::presets::ai_toolkit;

use crate::common::fixtures::fixtures_path;
use crate::common::init_test_logging;

#[test]
fn loads_yaml_fixture() {
    init_test_logging();
    let config = load_config(fixtures_path("demo.yaml")).unwrap();
    assert_eq!(config.name, "Demo");

    let pages = config.resolve().unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].palette, Palette::System);

    let lock = &pages[0].controls[0];
    assert_eq!(lock.slot, Slot::Button { col: 0, row: 0 });
    assert_eq!(lock.symbol, Symbol::Lock);
    assert_eq!(lock.title, "Lock");
    assert!(matches!(lock.kind, ActionKind::Hotkey { native_code: 12, .. }));
}

#[test]
fn loads_toml_fixture() {
    init_test_logging();
    let config = load_config(fixtures_path("three_pages.toml")).unwrap();
    assert_eq!(config.name, "Three Pages");

    let pages = config.resolve().unwrap();
    let palettes: Vec<Palette> = pages.iter().map(|p| p.palette).collect();
    assert_eq!(
        palettes,
        vec![Palette::ClaudeCode, Palette::NotebookLm, Palette::Automation]
    );

    let first = &pages[0].controls;
    assert_eq!(first.len(), 2);
    assert_eq!(
        first[0].kind,
        ActionKind::Text {
            text: "/clear".to_string()
        }
    );
    assert_eq!(first[1].slot, Slot::Dial { index: 0 });
    assert_eq!(first[1].kind, ActionKind::Volume);

    assert!(pages[2].controls.is_empty());
}

#[test]
fn unknown_symbol_is_rejected_on_load() {
    init_test_logging();
    let err = load_config(fixtures_path("bad_symbol.yaml")).unwrap_err();
    match err {
        ProfileError::UnknownSymbol { name } => assert_eq!(name, "unicorn"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_reports_path() {
    let err = load_config(fixtures_path("nope.yaml")).unwrap_err();
    assert!(matches!(err, ProfileError::ConfigNotFound { ref path } if path.ends_with("nope.yaml")));
    assert!(err.is_user_recoverable());
}

#[test]
fn preset_survives_toml_round_trip() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ai-toolkit.toml");

    let preset = ai_toolkit().unwrap();
    save_config(&preset, &path).unwrap();
    let reloaded = load_config(&path).unwrap();

    assert_eq!(reloaded, preset);
    assert_eq!(reloaded.resolve().unwrap(), preset.resolve().unwrap());
}

#[test]
fn preset_survives_yaml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ai-toolkit.yaml");

    let preset = ai_toolkit().unwrap();
    save_config(&preset, &path).unwrap();
    assert_eq!(load_config(&path).unwrap(), preset);
}
