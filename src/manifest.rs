//! JSON manifest records written into a `.streamDeckProfile` archive.
//!
//! Two manifests exist per bundle:
//! - `<root>.sdProfile/manifest.json`: device, profile name and page order
//! - `<root>.sdProfile/Profiles/<folder>/manifest.json`: one page's
//!   controllers and the actions placed on them
//!
//! Field names and nesting follow what the Stream Deck software expects when
//! importing, so every struct pins its serialized names explicitly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::keycodes::{Modifiers, NO_VKEY_CODE, NONE_NATIVE_CODE, NONE_QT_KEY_CODE};

/// Device model code of the Stream Deck+.
pub const DEVICE_MODEL: u32 = 7;

/// Profile format version understood by the importer.
pub const FORMAT_VERSION: &str = "2.0";

/// Controller type holding the 4×2 button grid.
pub const KEYPAD_CONTROLLER: &str = "Keypad";

/// Controller type holding the four dials.
pub const ENCODER_CONTROLLER: &str = "Encoder";

/// Top-level manifest at the bundle root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileManifest {
    pub device: Device,
    pub name: String,
    pub pages: PageOrder,
    pub version: String,
}

/// Device binding; the UUID is left empty so any Stream Deck+ can import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Device {
    pub model: u32,
    #[serde(rename = "UUID")]
    pub uuid: String,
}

impl Default for Device {
    fn default() -> Self {
        Self {
            model: DEVICE_MODEL,
            uuid: String::new(),
        }
    }
}

/// Page linkage ids in display order plus the page shown first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageOrder {
    pub current: String,
    pub pages: Vec<String>,
}

/// Per-page manifest: always exactly two controllers, keypad then encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PageManifest {
    pub controllers: Vec<Controller>,
}

impl PageManifest {
    /// Controller with the given type name, if present.
    pub fn controller(&self, kind: &str) -> Option<&Controller> {
        self.controllers.iter().find(|c| c.kind == kind)
    }
}

/// One controller group; actions are keyed by `"col,row"` or `"index,0"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Controller {
    pub actions: BTreeMap<String, ActionRecord>,
    #[serde(rename = "Type")]
    pub kind: String,
}

/// Serialized form of a placed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
#[allow(clippy::struct_field_names)] // Field names match the JSON schema
pub struct ActionRecord {
    #[serde(rename = "ActionID")]
    pub action_id: String,
    pub linked_title: bool,
    pub name: String,
    pub settings: ActionSettings,
    pub state: u32,
    pub states: Vec<StateRecord>,
    /// Capability identifier of the built-in plugin action.
    #[serde(rename = "UUID")]
    pub uuid: String,
}

/// Title and image of one visual state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StateRecord {
    pub title: String,
    pub image: String,
}

/// Type-specific settings block.
///
/// Variants are untagged; the enclosing record's `Name`/`UUID` identify the
/// type. `Empty` must stay last so it only matches `{}` on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionSettings {
    Hotkey {
        #[serde(rename = "Hotkeys")]
        hotkeys: [HotkeyEntry; 2],
    },
    Text {
        #[serde(rename = "PasteEnter")]
        paste_enter: bool,
        #[serde(rename = "SendText")]
        send_text: String,
    },
    /// Shared by the Open and Website actions.
    Launch {
        #[serde(rename = "openInBrowser")]
        open_in_browser: bool,
        path: String,
    },
    Empty {},
}

/// One key slot of a hotkey action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HotkeyEntry {
    pub key_cmd: bool,
    pub key_ctrl: bool,
    pub key_modifiers: u8,
    pub key_option: bool,
    pub key_shift: bool,
    pub native_code: u16,
    #[serde(rename = "QTKeyCode")]
    pub qt_key_code: u32,
    #[serde(rename = "VKeyCode")]
    pub v_key_code: i32,
}

impl HotkeyEntry {
    /// The "no second key" entry that always fills the second slot.
    pub const UNUSED: Self = Self {
        key_cmd: false,
        key_ctrl: false,
        key_modifiers: 0,
        key_option: false,
        key_shift: false,
        native_code: NONE_NATIVE_CODE,
        qt_key_code: NONE_QT_KEY_CODE,
        v_key_code: NO_VKEY_CODE,
    };

    /// Active key entry with the modifier mask decoded into flags.
    pub const fn new(native_code: u16, modifiers: Modifiers) -> Self {
        Self {
            key_cmd: modifiers.cmd(),
            key_ctrl: modifiers.ctrl(),
            key_modifiers: modifiers.bits(),
            key_option: modifiers.option(),
            key_shift: modifiers.shift(),
            native_code,
            qt_key_code: 0,
            v_key_code: NO_VKEY_CODE,
        }
    }

    /// Settings pair for a hotkey: the active entry then [`Self::UNUSED`].
    pub const fn pair(native_code: u16, modifiers: Modifiers) -> [Self; 2] {
        [Self::new(native_code, modifiers), Self::UNUSED]
    }
}
