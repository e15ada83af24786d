//! Integration tests for the plan, render and package pipeline.

use std::sync::Arc;

use tempfile::TempDir;

use sdprofile::builder::{build_to_file, build_to_file_async, plan_profile, render_plan};
use sdprofile::config::load_config;
use sdprofile::error::{ProfileError, Result};
use sdprofile::icon::{IconRasterizer, Palette, Symbol};
use sdprofile::package::package_profile;
use sdprofile::presets::ai_toolkit;

use crate::common::archive::ExtractedArchive;
use crate::common::fixtures::{LabelRasterizer, fixtures_path, fontless_renderer, seeded_ids};
use crate::common::init_test_logging;

/// Fails on one palette only, so some pages render before the error.
struct FailOnPalette(Palette);

impl IconRasterizer for FailOnPalette {
    fn rasterize(&self, symbol: Symbol, palette: Palette, label: Option<&str>) -> Result<Vec<u8>> {
        if palette == self.0 {
            return Err(ProfileError::Render(format!("{symbol} on {palette}")));
        }
        LabelRasterizer.rasterize(symbol, palette, label)
    }
}

#[tokio::test]
async fn parallel_build_matches_sequential() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = ai_toolkit().unwrap();

    let sequential = build_to_file(
        &config,
        &dir.path().join("seq.streamDeckProfile"),
        &mut seeded_ids(21),
        &LabelRasterizer,
    )
    .unwrap();
    let parallel = build_to_file_async(
        &config,
        &dir.path().join("par.streamDeckProfile"),
        &mut seeded_ids(21),
        Arc::new(LabelRasterizer),
    )
    .await
    .unwrap();

    assert_eq!(sequential.sha256, parallel.sha256);
    assert_eq!(sequential.root_id, parallel.root_id);
    assert_eq!(sequential.size, parallel.size);
}

#[tokio::test]
async fn parallel_build_with_real_renderer_matches_sequential() {
    let dir = TempDir::new().unwrap();
    let config = load_config(fixtures_path("three_pages.toml")).unwrap();

    let sequential = build_to_file(
        &config,
        &dir.path().join("a.streamDeckProfile"),
        &mut seeded_ids(5),
        &fontless_renderer(),
    )
    .unwrap();
    let parallel = build_to_file_async(
        &config,
        &dir.path().join("b.streamDeckProfile"),
        &mut seeded_ids(5),
        Arc::new(fontless_renderer()),
    )
    .await
    .unwrap();

    assert_eq!(sequential.sha256, parallel.sha256);
}

#[tokio::test]
async fn failed_parallel_build_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.streamDeckProfile");
    let config = ai_toolkit().unwrap();

    let err = build_to_file_async(
        &config,
        &path,
        &mut seeded_ids(3),
        Arc::new(FailOnPalette(Palette::System)),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ProfileError::Render(_)));
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn failed_build_keeps_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.streamDeckProfile");
    std::fs::write(&path, b"previous").unwrap();

    let config = ai_toolkit().unwrap();
    let result = build_to_file(
        &config,
        &path,
        &mut seeded_ids(4),
        &FailOnPalette(Palette::Automation),
    );

    assert!(result.is_err());
    assert_eq!(std::fs::read(&path).unwrap(), b"previous");
}

#[test]
fn rebuild_replaces_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.streamDeckProfile");
    std::fs::write(&path, b"previous").unwrap();

    let config = load_config(fixtures_path("demo.yaml")).unwrap();
    let report = build_to_file(&config, &path, &mut seeded_ids(8), &LabelRasterizer).unwrap();

    let archive = ExtractedArchive::open(&path);
    assert_eq!(archive.root(), format!("{}.sdProfile", report.root_id));
}

#[test]
fn packaged_bytes_match_plan() {
    let config = ai_toolkit().unwrap();
    let mut ids = seeded_ids(13);
    let plan = plan_profile(&config, &mut ids).unwrap();
    assert_eq!(plan.icon_jobs(), 96);

    let profile = render_plan(plan, &LabelRasterizer).unwrap();
    let packaged = package_profile(&profile, &mut ids).unwrap();
    let archive = ExtractedArchive::from_bytes(&packaged.bytes);

    let order: Vec<String> = profile.pages().iter().map(|p| p.uuid.clone()).collect();
    assert_eq!(
        archive.profile_manifest()["Pages"]["Pages"],
        serde_json::json!(order)
    );

    let first = &profile.pages()[0];
    let icon = &first.icons()[0];
    let stored = &archive.entries[&format!(
        "{}/Profiles/{}/Images/{}",
        archive.root(),
        first.folder_id,
        icon.file_name()
    )];
    assert_eq!(stored, &icon.data);
    assert_eq!(stored.as_slice(), b"terminal|claudeCode|Claude Code");
}
