//! Button and dial entries of a declarative page.
//!
//! Each entry names its slot, the symbol drawn on its icon, an optional
//! caption, and the behavior it triggers. [`ButtonConfig::resolve`] and
//! [`DialConfig::resolve`] turn an entry into typed values, failing on the
//! first unknown name or out-of-range slot.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::action::ActionKind;
use crate::error::{ProfileError, Result};
use crate::icon::Symbol;
use crate::keycodes::{self, Modifiers};
use crate::page::{BUTTON_COLUMNS, BUTTON_ROWS, DIAL_COUNT};

/// A button or dial position on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Button { col: u8, row: u8 },
    Dial { index: u8 },
}

/// A control entry with every name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedControl {
    pub slot: Slot,
    pub symbol: Symbol,
    /// Caption drawn on the icon. Empty captions are dropped.
    pub label: Option<String>,
    /// Manifest title.
    pub title: String,
    pub kind: ActionKind,
}

/// One button of the 4×2 grid.
///
/// # Example YAML
///
/// ```yaml
/// col: 2
/// row: 1
/// symbol: lock
/// label: Lock
/// type: hotkey
/// key: q
/// modifiers: [cmd, ctrl]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ButtonConfig {
    pub col: u8,
    pub row: u8,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Defaults to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub action: ButtonAction,
}

/// What a button does.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ButtonAction {
    /// Keyboard shortcut, by key name or raw native code.
    Hotkey {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        native_code: Option<u16>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        modifiers: Vec<String>,
    },
    /// Type text and press Enter.
    Text { text: String },
    /// Launch an application or file.
    Open { path: String },
    /// Open a URL.
    Website { url: String },
}

impl ButtonAction {
    /// Resolve key and modifier names.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown key or modifier names, or when a hotkey
    /// sets both or neither of `key` and `native_code`.
    pub fn resolve(&self) -> Result<ActionKind> {
        let kind = match self {
            Self::Hotkey {
                key,
                native_code,
                modifiers,
            } => {
                let native_code = match (key, native_code) {
                    (Some(name), None) => keycodes::native_code(name)?,
                    (None, Some(code)) => *code,
                    (Some(_), Some(_)) => {
                        return Err(ProfileError::ConfigInvalid(
                            "hotkey sets both 'key' and 'native_code'".to_string(),
                        ));
                    }
                    (None, None) => {
                        return Err(ProfileError::ConfigInvalid(
                            "hotkey needs 'key' or 'native_code'".to_string(),
                        ));
                    }
                };
                ActionKind::Hotkey {
                    native_code,
                    modifiers: Modifiers::parse_all(modifiers)?,
                }
            }
            Self::Text { text } => ActionKind::Text { text: text.clone() },
            Self::Open { path } => ActionKind::Open { path: path.clone() },
            Self::Website { url } => ActionKind::Website { url: url.clone() },
        };
        Ok(kind)
    }
}

impl ButtonConfig {
    /// Resolve the slot, symbol and action.
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range slot or any unknown name.
    pub fn resolve(&self) -> Result<ResolvedControl> {
        if self.col >= BUTTON_COLUMNS || self.row >= BUTTON_ROWS {
            return Err(ProfileError::ButtonSlotOutOfRange {
                col: self.col,
                row: self.row,
            });
        }
        let symbol: Symbol = self.symbol.parse()?;
        let kind = self.action.resolve()?;
        trace!(col = self.col, row = self.row, symbol = %symbol, kind = kind.name(), "Resolved button");
        Ok(ResolvedControl {
            slot: Slot::Button {
                col: self.col,
                row: self.row,
            },
            symbol,
            label: caption(self.label.as_deref()),
            title: title_or_label(self.title.as_deref(), self.label.as_deref()),
            kind,
        })
    }
}

/// One of the four dials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DialConfig {
    pub index: u8,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Omitted means an inert dial.
    #[serde(rename = "type", default)]
    pub kind: DialKind,
}

/// What a dial does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialKind {
    /// System volume.
    Volume,
    /// Inert dial that only shows its icon.
    #[default]
    Placeholder,
}

impl DialConfig {
    /// Resolve the slot and symbol.
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range index or unknown symbol.
    pub fn resolve(&self) -> Result<ResolvedControl> {
        if self.index >= DIAL_COUNT {
            return Err(ProfileError::DialSlotOutOfRange { index: self.index });
        }
        let symbol: Symbol = self.symbol.parse()?;
        let kind = match self.kind {
            DialKind::Volume => ActionKind::Volume,
            DialKind::Placeholder => ActionKind::PLACEHOLDER,
        };
        trace!(index = self.index, symbol = %symbol, kind = ?self.kind, "Resolved dial");
        Ok(ResolvedControl {
            slot: Slot::Dial { index: self.index },
            symbol,
            label: caption(self.label.as_deref()),
            title: title_or_label(self.title.as_deref(), self.label.as_deref()),
            kind,
        })
    }
}

fn caption(label: Option<&str>) -> Option<String> {
    label.filter(|text| !text.is_empty()).map(str::to_string)
}

fn title_or_label(title: Option<&str>, label: Option<&str>) -> String {
    title.or(label).unwrap_or_default().to_string()
}
