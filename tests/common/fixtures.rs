//! Fixture files and test doubles shared by the integration tests.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use resvg::usvg::fontdb;

use sdprofile::error::Result;
use sdprofile::icon::{IconRasterizer, IconRenderer, Palette, Symbol};
use sdprofile::ids::IdGenerator;

/// Get the path to a file in the test fixtures directory.
#[must_use]
pub fn fixtures_path(subpath: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(subpath)
}

/// Identifier generator with a fixed seed.
#[must_use]
pub fn seeded_ids(seed: u64) -> IdGenerator<StdRng> {
    IdGenerator::with_rng(StdRng::seed_from_u64(seed))
}

/// Real renderer without system fonts, so shapes render identically on
/// every host. Captions are laid out but draw no glyphs.
#[must_use]
pub fn fontless_renderer() -> IconRenderer {
    IconRenderer::with_fontdb(fontdb::Database::new())
}

/// Cheap stand-in that encodes its inputs instead of drawing.
pub struct LabelRasterizer;

impl IconRasterizer for LabelRasterizer {
    fn rasterize(&self, symbol: Symbol, palette: Palette, label: Option<&str>) -> Result<Vec<u8>> {
        Ok(format!("{symbol}|{palette}|{}", label.unwrap_or("")).into_bytes())
    }
}
