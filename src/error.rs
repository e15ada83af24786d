//! Error types for profile generation.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for profile generation.
///
/// Every variant is fatal: a build either produces the whole archive or
/// nothing at all.
#[derive(Error, Debug)]
pub enum ProfileError {
    // Registry lookups
    #[error("Unknown symbol: {name}")]
    UnknownSymbol { name: String },

    #[error("Unknown palette: {name}")]
    UnknownPalette { name: String },

    #[error("Unknown key name: {name}")]
    UnknownKey { name: String },

    #[error("Unknown modifier: {name}")]
    UnknownModifier { name: String },

    // Layout errors
    #[error("Invalid button slot ({col}, {row}): columns are 0-3, rows are 0-1")]
    ButtonSlotOutOfRange { col: u8, row: u8 },

    #[error("Invalid dial slot {index}: dials are 0-3")]
    DialSlotOutOfRange { index: u8 },

    #[error("Profile '{name}' has no pages")]
    EmptyProfile { name: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Configuration parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    // Rendering and packaging
    #[error("Icon rendering failed: {0}")]
    Render(String),

    #[error("Manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Archive assembly failed: {0}")]
    Archive(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProfileError {
    /// Returns true if the error is recoverable by the user.
    ///
    /// Configuration mistakes can be fixed by editing the page definitions;
    /// rendering and archive failures cannot.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownSymbol { .. }
                | Self::UnknownPalette { .. }
                | Self::UnknownKey { .. }
                | Self::UnknownModifier { .. }
                | Self::ButtonSlotOutOfRange { .. }
                | Self::DialSlotOutOfRange { .. }
                | Self::EmptyProfile { .. }
                | Self::ConfigNotFound { .. }
                | Self::ConfigParse(_)
                | Self::ConfigInvalid(_)
                | Self::Write { .. }
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownSymbol { .. } => Some("Use one of the built-in symbol names, e.g. 'terminal'"),
            Self::UnknownPalette { .. } => Some("Use one of the built-in palettes, e.g. 'claudeCode'"),
            Self::UnknownKey { .. } => Some("Use a key name like 'q', 'return' or 'f5', or set native_code"),
            Self::ButtonSlotOutOfRange { .. } => Some("Buttons use col 0-3 and row 0-1"),
            Self::DialSlotOutOfRange { .. } => Some("Dials use index 0-3"),
            Self::EmptyProfile { .. } => Some("Add at least one entry under 'pages'"),
            Self::Write { .. } => Some("Check that the output directory exists and is writable"),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using ProfileError.
pub type Result<T> = std::result::Result<T, ProfileError>;
