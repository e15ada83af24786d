//! Declarative profile definitions loaded from YAML or TOML.
//!
//! A definition lists pages in display order. Each page picks a palette and
//! places buttons and dials; see [`ButtonConfig`] and [`DialConfig`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use crate::error::{ProfileError, Result};
use crate::icon::Palette;

use super::{ButtonConfig, DialConfig, ResolvedControl};

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yaml, .yml).
    Yaml,
    /// TOML format (.toml).
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension.
    ///
    /// Returns `None` if the extension is not recognized.
    #[must_use]
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        trace!(extension = %ext, "Detecting config format from extension");
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Get the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        }
    }

    fn detect(path: &Path) -> Result<Self> {
        Self::from_extension(path).ok_or_else(|| {
            ProfileError::ConfigParse(format!(
                "Unknown config format for '{}': expected .yaml, .yml, or .toml",
                path.display()
            ))
        })
    }
}

/// A complete profile definition.
///
/// # Example YAML
///
/// ```yaml
/// name: Demo
/// pages:
///   - palette: system
///     buttons:
///       - { col: 0, row: 0, symbol: lock, label: Lock, type: hotkey, key: q, modifiers: [cmd, ctrl] }
///     dials:
///       - { index: 0, symbol: volume, label: Volume, type: volume }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProfileConfig {
    /// Display name shown in the Stream Deck software.
    pub name: String,

    /// Pages in display order; the first is the default page.
    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

/// One page of a profile definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageConfig {
    /// Palette used for every icon on the page.
    pub palette: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<ButtonConfig>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dials: Vec<DialConfig>,
}

/// A page with its palette and every control resolved, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPage {
    pub palette: Palette,
    pub controls: Vec<ResolvedControl>,
}

impl PageConfig {
    /// Resolve the palette, then buttons, then dials.
    ///
    /// # Errors
    ///
    /// Returns the first unknown name or out-of-range slot.
    pub fn resolve(&self) -> Result<ResolvedPage> {
        let palette: Palette = self.palette.parse()?;
        let controls = self
            .buttons
            .iter()
            .map(ButtonConfig::resolve)
            .chain(self.dials.iter().map(DialConfig::resolve))
            .collect::<Result<Vec<_>>>()?;
        Ok(ResolvedPage { palette, controls })
    }
}

impl ProfileConfig {
    /// Create an empty profile definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pages: Vec::new(),
        }
    }

    /// Validate the whole definition without side effects.
    ///
    /// Checks that:
    /// - The name is not blank
    /// - There is at least one page
    /// - Every palette, symbol, key and modifier name is known
    /// - Every slot is inside the 4×2 grid or the four dials
    ///
    /// Two entries on the same slot are allowed; the later one wins.
    ///
    /// # Errors
    ///
    /// Returns the first failed check.
    pub fn validate(&self) -> Result<()> {
        self.resolve().map(|_| ())
    }

    /// Validate and resolve every page.
    ///
    /// # Errors
    ///
    /// Returns the first failed check; see [`Self::validate`].
    pub fn resolve(&self) -> Result<Vec<ResolvedPage>> {
        trace!(name = %self.name, "Validating profile config");

        if self.name.trim().is_empty() {
            return Err(ProfileError::ConfigInvalid(
                "profile name must not be empty".to_string(),
            ));
        }
        if self.pages.is_empty() {
            return Err(ProfileError::EmptyProfile {
                name: self.name.clone(),
            });
        }

        let pages = self
            .pages
            .iter()
            .enumerate()
            .map(|(number, page)| {
                page.resolve().map_err(|e| {
                    debug!(page = number + 1, error = %e, "Page failed validation");
                    e
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            pages = pages.len(),
            controls = pages.iter().map(|p| p.controls.len()).sum::<usize>(),
            "All pages validated"
        );
        Ok(pages)
    }
}

/// Load a profile definition from a file.
///
/// Automatically detects the format from the file extension:
/// - `.yaml` or `.yml` → YAML
/// - `.toml` → TOML
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The format cannot be detected from the extension
/// - The file content cannot be parsed
/// - Validation fails
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ProfileConfig> {
    let path = path.as_ref();
    info!("Loading profile definition");

    let format = ConfigFormat::detect(path)?;
    debug!(format = ?format, "Detected config format");

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ProfileError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            ProfileError::Io(e)
        }
    })?;
    debug!(bytes = content.len(), "Read config file");

    load_config_from_str(&content, format)
}

/// Load a profile definition from a string with a specified format.
///
/// # Errors
///
/// Returns an error if parsing or validation fails.
#[instrument(skip(content), fields(format = ?format, content_len = content.len()))]
pub fn load_config_from_str(content: &str, format: ConfigFormat) -> Result<ProfileConfig> {
    trace!("Parsing config content");

    let config: ProfileConfig = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| ProfileError::ConfigParse(format!("YAML: {e}")))?,
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| ProfileError::ConfigParse(format!("TOML: {e}")))?
        }
    };

    config.validate()?;

    info!(
        name = %config.name,
        pages = config.pages.len(),
        "Profile definition loaded and validated"
    );

    Ok(config)
}

/// Save a profile definition to a file.
///
/// Automatically detects the format from the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The format cannot be detected from the extension
/// - Serialization fails
/// - The file cannot be written
#[instrument(skip(config), fields(path = %path.as_ref().display()))]
pub fn save_config<P: AsRef<Path>>(config: &ProfileConfig, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Saving profile definition");

    let format = ConfigFormat::detect(path)?;
    debug!(format = ?format, "Using config format");

    let content = match format {
        ConfigFormat::Yaml => serde_yaml::to_string(config)
            .map_err(|e| ProfileError::ConfigParse(format!("YAML: {e}")))?,
        ConfigFormat::Toml => toml::to_string_pretty(config)
            .map_err(|e| ProfileError::ConfigParse(format!("TOML: {e}")))?,
    };

    std::fs::write(path, content).map_err(|source| ProfileError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        bytes = path.metadata().map(|m| m.len()).unwrap_or(0),
        "Profile definition saved"
    );
    Ok(())
}
