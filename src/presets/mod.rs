//! Profile definitions bundled with the crate.

use std::fmt;
use std::str::FromStr;

use crate::config::{ConfigFormat, ProfileConfig, load_config_from_str};
use crate::error::{ProfileError, Result};

const AI_TOOLKIT: &str = include_str!("ai_toolkit.yaml");

/// A bundled profile definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Eight pages covering Claude Code, Claude Desktop, Antigravity,
    /// NotebookLM, AI Studio, system controls and automations.
    AiToolkit,
}

impl Preset {
    pub const ALL: &'static [Self] = &[Self::AiToolkit];

    pub const fn name(self) -> &'static str {
        match self {
            Self::AiToolkit => "ai-toolkit",
        }
    }

    /// The preset's YAML source.
    pub const fn source(self) -> &'static str {
        match self {
            Self::AiToolkit => AI_TOOLKIT,
        }
    }

    /// Parse and validate the preset.
    ///
    /// # Errors
    ///
    /// Fails only if the bundled definition is invalid.
    pub fn load(self) -> Result<ProfileConfig> {
        load_config_from_str(self.source(), ConfigFormat::Yaml)
    }
}

impl FromStr for Preset {
    type Err = ProfileError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| ProfileError::ConfigInvalid(format!("unknown preset '{name}'")))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The "AI Toolkit" profile definition.
///
/// # Errors
///
/// Fails only if the bundled definition is invalid.
pub fn ai_toolkit() -> Result<ProfileConfig> {
    Preset::AiToolkit.load()
}
