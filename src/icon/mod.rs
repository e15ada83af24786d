//! Procedural icon rendering.
//!
//! Icons are composed from a [`Symbol`] drawn in a [`Palette`]'s accent color,
//! with an optional caption, and rasterized to fixed-size PNGs.

mod palette;
mod render;
mod symbols;

pub use palette::{Colors, Palette, Rgb};
pub use render::{
    ICON_SIZE, IconRasterizer, IconRenderer, LABEL_LIFT, compose_svg, escape_markup,
    symbol_center_y,
};
pub use symbols::Symbol;

/// File extension of rendered icons inside the archive.
pub const ICON_EXTENSION: &str = "png";

/// A rendered icon owned by a page until packaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    /// Image token; also the file basename inside `Images/`.
    pub id: String,
    /// PNG bytes.
    pub data: Vec<u8>,
}

impl Icon {
    pub const fn new(id: String, data: Vec<u8>) -> Self {
        Self { id, data }
    }

    /// Manifest reference for an image token, e.g. `Images/0A1B….png`.
    pub fn reference_for(id: &str) -> String {
        format!("Images/{id}.{ICON_EXTENSION}")
    }

    /// Manifest reference for this icon.
    pub fn reference(&self) -> String {
        Self::reference_for(&self.id)
    }

    /// File name inside the page's `Images/` folder.
    pub fn file_name(&self) -> String {
        format!("{}.{ICON_EXTENSION}", self.id)
    }
}
