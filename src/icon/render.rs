//! Icon composition and rasterization.
//!
//! An icon is composed as an SVG scene (rounded background, accent wash,
//! symbol, optional caption) and rasterized with `resvg` into a 288×288 RGBA
//! PNG.

use std::fmt::Write as _;
use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};
use resvg::{tiny_skia, usvg};
use tracing::{debug, instrument, trace};

use super::{Palette, Symbol};
use crate::error::{ProfileError, Result};

/// Edge length of every rendered icon, in pixels.
pub const ICON_SIZE: u32 = 288;

const CORNER_RADIUS: u32 = 44;
const ACCENT_WASH_OPACITY: f32 = 0.06;
const LABEL_OPACITY: f32 = 0.85;
const LABEL_BASELINE: u32 = 248;
const LABEL_FONT_SIZE: u32 = 28;
/// Upward shift of the symbol when a caption occupies the lower band.
pub const LABEL_LIFT: u32 = 36;

/// Something that turns (symbol, palette, label) into PNG bytes.
///
/// The pipeline only depends on this trait so that tests can swap in a
/// cheaper rasterizer.
pub trait IconRasterizer: Send + Sync {
    /// Render one icon.
    ///
    /// # Errors
    ///
    /// Returns an error if the scene cannot be parsed or encoded.
    fn rasterize(&self, symbol: Symbol, palette: Palette, label: Option<&str>) -> Result<Vec<u8>>;
}

/// Escape the characters that would break out of SVG text content.
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Vertical position of the symbol's origin.
pub const fn symbol_center_y(has_label: bool) -> u32 {
    if has_label {
        ICON_SIZE / 2 - LABEL_LIFT
    } else {
        ICON_SIZE / 2
    }
}

/// Build the SVG scene for an icon.
///
/// An empty label is treated the same as no label.
pub fn compose_svg(symbol: Symbol, palette: Palette, label: Option<&str>) -> String {
    let colors = palette.colors();
    let background = colors.background.to_hex();
    let accent = colors.accent.to_hex();
    let label = label.filter(|text| !text.is_empty());
    let center = ICON_SIZE / 2;
    let center_y = symbol_center_y(label.is_some());

    let mut svg = String::with_capacity(2048);
    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{ICON_SIZE}" height="{ICON_SIZE}" viewBox="0 0 {ICON_SIZE} {ICON_SIZE}">"#
    );
    let _ = writeln!(
        svg,
        r#"<rect width="{ICON_SIZE}" height="{ICON_SIZE}" rx="{CORNER_RADIUS}" fill="{background}"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<rect width="{ICON_SIZE}" height="{ICON_SIZE}" rx="{CORNER_RADIUS}" fill="{accent}" opacity="{ACCENT_WASH_OPACITY}"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<g transform="translate({center},{center_y})" color="{accent}" fill="{accent}" stroke="{accent}">"#
    );
    svg.push_str(symbol.markup());
    svg.push_str("\n</g>\n");
    if let Some(text) = label {
        let _ = writeln!(
            svg,
            r#"<text x="{center}" y="{LABEL_BASELINE}" text-anchor="middle" font-family="SF Pro Display,Helvetica Neue,Arial,sans-serif" font-size="{LABEL_FONT_SIZE}" font-weight="600" fill="{}" opacity="{LABEL_OPACITY}">{}</text>"#,
            colors.foreground.to_hex(),
            escape_markup(text)
        );
    }
    svg.push_str("</svg>\n");
    svg
}

/// `resvg`-backed rasterizer sharing one font database across renders.
#[derive(Clone)]
pub struct IconRenderer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl IconRenderer {
    /// Create a renderer with the host's system fonts loaded.
    pub fn new() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        debug!(faces = fontdb.len(), "Loaded system fonts for icon text");
        Self::with_fontdb(fontdb)
    }

    /// Create a renderer over a prepared font database.
    ///
    /// An empty database renders every shape but no text.
    pub fn with_fontdb(fontdb: usvg::fontdb::Database) -> Self {
        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Render an icon from registry names.
    ///
    /// Both names are resolved before any rendering work starts.
    pub fn render_by_name(&self, symbol: &str, palette: &str, label: Option<&str>) -> Result<Vec<u8>> {
        let symbol: Symbol = symbol.parse()?;
        let palette: Palette = palette.parse()?;
        self.render(symbol, palette, label)
    }

    /// Render an icon to PNG bytes.
    #[instrument(skip(self), fields(symbol = %symbol, palette = %palette))]
    pub fn render(&self, symbol: Symbol, palette: Palette, label: Option<&str>) -> Result<Vec<u8>> {
        let svg = compose_svg(symbol, palette, label);
        trace!(svg_len = svg.len(), "Composed icon scene");

        let mut options = usvg::Options::default();
        options.fontdb = Arc::clone(&self.fontdb);
        let tree = usvg::Tree::from_str(&svg, &options)
            .map_err(|e| ProfileError::Render(format!("{symbol}: {e}")))?;

        let mut pixmap = tiny_skia::Pixmap::new(ICON_SIZE, ICON_SIZE)
            .ok_or_else(|| ProfileError::Render("could not allocate pixmap".to_string()))?;
        resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

        let png = encode_png(&pixmap)?;
        trace!(bytes = png.len(), "Encoded icon");
        Ok(png)
    }
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl IconRasterizer for IconRenderer {
    fn rasterize(&self, symbol: Symbol, palette: Palette, label: Option<&str>) -> Result<Vec<u8>> {
        self.render(symbol, palette, label)
    }
}

/// Convert tiny-skia's premultiplied pixels to straight RGBA and encode as PNG.
fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>> {
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    let image = RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba)
        .ok_or_else(|| ProfileError::Render("pixel buffer size mismatch".to_string()))?;

    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| ProfileError::Render(e.to_string()))?;
    Ok(out.into_inner())
}
