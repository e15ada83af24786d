//! Integration tests for the layout and manifests of built archives.

use std::collections::BTreeSet;

use regex::Regex;
use serde_json::json;
use tempfile::TempDir;
use zip::CompressionMethod;

use sdprofile::builder::build_to_file;
use sdprofile::config::load_config;
use sdprofile::package::BuildReport;
use sdprofile::presets::ai_toolkit;

use crate::common::archive::ExtractedArchive;
use crate::common::fixtures::{LabelRasterizer, fixtures_path, fontless_renderer, seeded_ids};
use crate::common::init_test_logging;

fn build_fixture(name: &str, seed: u64) -> (TempDir, BuildReport, ExtractedArchive) {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = load_config(fixtures_path(name)).unwrap();
    let path = dir.path().join("out.streamDeckProfile");
    let report = build_to_file(&config, &path, &mut seeded_ids(seed), &fontless_renderer()).unwrap();
    let archive = ExtractedArchive::open(&path);
    (dir, report, archive)
}

#[test]
fn demo_profile_has_exact_layout() {
    let (_dir, report, archive) = build_fixture("demo.yaml", 1);
    let root = archive.root();
    assert!(
        Regex::new("^[0-9a-f]{32}\\.sdProfile$").unwrap().is_match(&root),
        "unexpected root {root}"
    );
    assert_eq!(root, format!("{}.sdProfile", report.root_id));

    let folders = archive.page_folders();
    assert_eq!(folders.len(), 1);
    let folder = &folders[0];
    let images = archive.page_images(folder);
    assert_eq!(images.len(), 1);

    let expected: BTreeSet<String> = [
        format!("{root}/"),
        format!("{root}/manifest.json"),
        format!("{root}/Profiles/"),
        format!("{root}/Profiles/{folder}/"),
        format!("{root}/Profiles/{folder}/manifest.json"),
        format!("{root}/Profiles/{folder}/Images/"),
        format!("{root}/Profiles/{folder}/Images/{}", images[0]),
    ]
    .into_iter()
    .collect();
    let actual: BTreeSet<String> = archive.entries.keys().cloned().collect();
    assert_eq!(actual, expected);
}

#[test]
fn demo_profile_hotkey_manifest() {
    let (_dir, _report, archive) = build_fixture("demo.yaml", 2);
    let folder = &archive.page_folders()[0];
    let page = archive.page_manifest(folder);

    let keypad = &page["Controllers"][0];
    assert_eq!(keypad["Type"], "Keypad");
    let actions = keypad["Actions"].as_object().unwrap();
    assert_eq!(actions.len(), 1);

    let lock = &actions["0,0"];
    assert_eq!(lock["Name"], "Hotkey");
    assert_eq!(lock["States"][0]["Title"], "Lock");
    let hotkey = &lock["Settings"]["Hotkeys"][0];
    assert_eq!(hotkey["KeyCmd"], true);
    assert_eq!(hotkey["KeyCtrl"], true);
    assert_eq!(hotkey["KeyShift"], false);
    assert_eq!(hotkey["KeyOption"], false);
    assert_eq!(hotkey["NativeCode"], 12);

    let encoder = &page["Controllers"][1];
    assert_eq!(encoder, &json!({"Actions": {}, "Type": "Encoder"}));

    let image_ref = lock["States"][0]["Image"].as_str().unwrap();
    let file = image_ref.strip_prefix("Images/").unwrap();
    assert_eq!(archive.page_images(folder), vec![file.to_string()]);
    assert!(file.ends_with(".png"));

    let png = &archive.entries[&format!("{}/Profiles/{folder}/Images/{file}", archive.root())];
    assert!(png.starts_with(b"\x89PNG"));
}

#[test]
fn profile_manifest_lists_pages_in_order() {
    let (_dir, report, archive) = build_fixture("three_pages.toml", 3);
    assert_eq!(report.pages, 3);

    let manifest = archive.profile_manifest();
    assert_eq!(manifest["Name"], "Three Pages");
    assert_eq!(manifest["Version"], "2.0");
    assert_eq!(manifest["Device"], json!({"Model": 7, "UUID": ""}));

    let pages = manifest["Pages"]["Pages"].as_array().unwrap();
    assert_eq!(pages.len(), 3);
    assert_eq!(manifest["Pages"]["Current"], pages[0]);

    let dashed = Regex::new("^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$").unwrap();
    for id in pages {
        assert!(dashed.is_match(id.as_str().unwrap()));
    }
    assert_eq!(archive.page_folders().len(), 3);
}

#[test]
fn every_image_reference_resolves() {
    let (_dir, report, archive) = build_fixture("three_pages.toml", 4);
    let mut total_images = 0;
    for folder in archive.page_folders() {
        let refs: BTreeSet<String> = archive
            .image_refs(&folder)
            .into_iter()
            .map(|r| r.strip_prefix("Images/").unwrap().to_string())
            .collect();
        let files: BTreeSet<String> = archive.page_images(&folder).into_iter().collect();
        assert_eq!(refs, files, "page {folder} images do not match its references");
        total_images += files.len();
    }
    assert_eq!(total_images, report.icons);
    assert_eq!(report.icons, 3);
}

#[test]
fn empty_page_keeps_both_controllers() {
    let (_dir, _report, archive) = build_fixture("three_pages.toml", 5);
    let empty: Vec<String> = archive
        .page_folders()
        .into_iter()
        .filter(|folder| archive.page_images(folder).is_empty())
        .collect();
    assert_eq!(empty.len(), 1);

    let manifest = archive.page_manifest(&empty[0]);
    assert_eq!(
        manifest,
        json!({
            "Controllers": [
                {"Actions": {}, "Type": "Keypad"},
                {"Actions": {}, "Type": "Encoder"}
            ]
        })
    );
    assert!(
        archive
            .entries
            .contains_key(&format!("{}/Profiles/{}/Images/", archive.root(), empty[0]))
    );
}

#[test]
fn entries_are_stored_uncompressed() {
    let (_dir, _report, archive) = build_fixture("three_pages.toml", 6);
    assert!(!archive.methods.is_empty());
    assert!(archive.methods.iter().all(|m| *m == CompressionMethod::Stored));
}

#[test]
fn report_matches_file_on_disk() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("AI Toolkit.streamDeckProfile");
    let config = ai_toolkit().unwrap();
    let report = build_to_file(&config, &path, &mut seeded_ids(7), &LabelRasterizer).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(report.size, bytes.len() as u64);
    assert_eq!(report.pages, 8);
    assert_eq!(report.actions, 96);
    assert_eq!(report.icons, 96);
    assert!(Regex::new("^[0-9a-f]{64}$").unwrap().is_match(&report.sha256));

    let archive = ExtractedArchive::from_bytes(&bytes);
    assert_eq!(archive.profile_manifest()["Name"], "AI Toolkit");
    for folder in archive.page_folders() {
        assert_eq!(archive.page_images(&folder).len(), 12);
        assert_eq!(archive.image_refs(&folder).len(), 12);
    }
}
