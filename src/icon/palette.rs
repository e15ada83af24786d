//! Named three-color schemes applied to rendered icons.

use std::fmt;
use std::str::FromStr;

use crate::error::ProfileError;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB` form used inside the composed SVG.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Background, accent and foreground colors of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub background: Rgb,
    pub accent: Rgb,
    pub foreground: Rgb,
}

/// The fixed palette registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    ClaudeCode,
    ClaudeDesktop,
    Antigravity,
    NotebookLm,
    AiStudio,
    System,
    Automation,
}

const WHITE: Rgb = Rgb(0xFF, 0xFF, 0xFF);

impl Palette {
    pub const ALL: &'static [Self] = &[
        Self::ClaudeCode,
        Self::ClaudeDesktop,
        Self::Antigravity,
        Self::NotebookLm,
        Self::AiStudio,
        Self::System,
        Self::Automation,
    ];

    /// Name used in page definitions.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClaudeCode => "claudeCode",
            Self::ClaudeDesktop => "claudeDesktop",
            Self::Antigravity => "antigravity",
            Self::NotebookLm => "notebookLM",
            Self::AiStudio => "aiStudio",
            Self::System => "system",
            Self::Automation => "automation",
        }
    }

    pub const fn colors(self) -> Colors {
        let (background, accent) = match self {
            Self::ClaudeCode => (Rgb(0x2A, 0x1F, 0x14), Rgb(0xE8, 0x8D, 0x4F)),
            Self::ClaudeDesktop => (Rgb(0x14, 0x1D, 0x2A), Rgb(0x6B, 0x9A, 0xE8)),
            Self::Antigravity => (Rgb(0x1F, 0x14, 0x2A), Rgb(0xB0, 0x6B, 0xE8)),
            Self::NotebookLm => (Rgb(0x14, 0x2A, 0x1F), Rgb(0x4F, 0xE8, 0x8D)),
            Self::AiStudio => (Rgb(0x2A, 0x14, 0x14), Rgb(0xE8, 0x4F, 0x4F)),
            Self::System => (Rgb(0x1A, 0x1A, 0x20), Rgb(0x8A, 0x8A, 0x9A)),
            Self::Automation => (Rgb(0x2A, 0x25, 0x14), Rgb(0xE8, 0xC9, 0x4F)),
        };
        Colors {
            background,
            accent,
            foreground: WHITE,
        }
    }
}

impl FromStr for Palette {
    type Err = ProfileError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|palette| palette.name() == name)
            .ok_or_else(|| ProfileError::UnknownPalette {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
