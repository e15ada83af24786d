//! Integration tests for icon rasterization.

use image::{GenericImageView, Rgba};

use sdprofile::error::ProfileError;
use sdprofile::icon::{ICON_SIZE, LABEL_LIFT, Palette, Symbol};

use crate::common::fixtures::fontless_renderer;

const RUN_ACCENT: Rgba<u8> = Rgba([0xE8, 0x4F, 0x4F, 0xFF]);

fn decode(png: &[u8]) -> image::DynamicImage {
    image::load_from_memory(png).expect("renderer produced an unreadable PNG")
}

#[test]
fn icons_are_square_png() {
    let renderer = fontless_renderer();
    let png = renderer.render(Symbol::Terminal, Palette::ClaudeCode, Some("Claude")).unwrap();
    assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));

    let img = decode(&png);
    assert_eq!(img.dimensions(), (ICON_SIZE, ICON_SIZE));
}

#[test]
fn rendering_is_pure() {
    let renderer = fontless_renderer();
    let a = renderer.render(Symbol::Run, Palette::AiStudio, Some("Run")).unwrap();
    let b = renderer.render(Symbol::Run, Palette::AiStudio, Some("Run")).unwrap();
    assert_eq!(a, b);

    let other = renderer.render(Symbol::Run, Palette::System, Some("Run")).unwrap();
    assert_ne!(a, other);
}

#[test]
fn symbol_is_centered_without_label() {
    let img = decode(&fontless_renderer().render(Symbol::Run, Palette::AiStudio, None).unwrap());
    let center = ICON_SIZE / 2;
    assert_eq!(img.get_pixel(center, center), RUN_ACCENT);
}

#[test]
fn label_lifts_symbol() {
    let img = decode(&fontless_renderer().render(Symbol::Run, Palette::AiStudio, Some("Run")).unwrap());
    let center = ICON_SIZE / 2;
    assert_eq!(img.get_pixel(center, center - LABEL_LIFT), RUN_ACCENT);
    assert_ne!(img.get_pixel(center, center), RUN_ACCENT);
}

#[test]
fn empty_label_renders_like_no_label() {
    let renderer = fontless_renderer();
    let none = renderer.render(Symbol::Run, Palette::AiStudio, None).unwrap();
    let empty = renderer.render(Symbol::Run, Palette::AiStudio, Some("")).unwrap();
    assert_eq!(none, empty);
}

#[test]
fn rounded_corners_are_transparent() {
    let img = decode(&fontless_renderer().render(Symbol::Lock, Palette::System, None).unwrap());
    let last = ICON_SIZE - 1;
    for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
        assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({x}, {y}) is not transparent");
    }
    let opaque = img.get_pixel(ICON_SIZE / 2, 4);
    assert_eq!(opaque[3], 0xFF);
}

#[test]
fn markup_in_labels_is_escaped() {
    let png = fontless_renderer()
        .render(Symbol::Terminal, Palette::ClaudeCode, Some("<b>&</b>"))
        .unwrap();
    assert_eq!(decode(&png).dimensions(), (ICON_SIZE, ICON_SIZE));
}

#[test]
fn every_symbol_renders() {
    let renderer = fontless_renderer();
    for &symbol in Symbol::ALL {
        let png = renderer
            .render(symbol, Palette::Antigravity, Some(symbol.name()))
            .unwrap_or_else(|e| panic!("{symbol} failed: {e}"));
        assert!(png.starts_with(b"\x89PNG"), "{symbol} is not a PNG");
    }
}

#[test]
fn render_by_name_rejects_unknown_names() {
    let renderer = fontless_renderer();
    assert!(matches!(
        renderer.render_by_name("unicorn", "system", None),
        Err(ProfileError::UnknownSymbol { .. })
    ));
    assert!(matches!(
        renderer.render_by_name("run", "neon", None),
        Err(ProfileError::UnknownPalette { .. })
    ));
}
