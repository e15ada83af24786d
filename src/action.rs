//! Button and dial behaviors.
//!
//! An [`Action`] is an immutable value: a fresh dashed identifier, a display
//! title, the reference of the icon it shows, and an [`ActionKind`]. The
//! [`ActionBuilder`] is the only place identifiers are attached to actions.

use rand::{CryptoRng, RngCore};
use tracing::trace;

use crate::ids::IdGenerator;
use crate::keycodes::{Modifiers, PLACEHOLDER_NATIVE_CODE};
use crate::manifest::{ActionRecord, ActionSettings, HotkeyEntry, StateRecord};

/// What pressing a button or turning a dial does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    /// Send a keyboard shortcut.
    Hotkey { native_code: u16, modifiers: Modifiers },
    /// Type literal text followed by Enter.
    Text { text: String },
    /// Launch an application or file.
    Open { path: String },
    /// Open a URL.
    Website { url: String },
    /// System volume dial.
    Volume,
}

impl ActionKind {
    /// The no-op hotkey bound to inert dials.
    pub const PLACEHOLDER: Self = Self::Hotkey {
        native_code: PLACEHOLDER_NATIVE_CODE,
        modifiers: Modifiers::NONE,
    };

    /// Type name written to the manifest's `Name` field.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hotkey { .. } => "Hotkey",
            Self::Text { .. } => "Text",
            Self::Open { .. } => "Open",
            Self::Website { .. } => "Website",
            Self::Volume => "Volume",
        }
    }

    /// Built-in plugin action identifier written to the manifest's `UUID` field.
    pub const fn plugin_uuid(&self) -> &'static str {
        match self {
            Self::Hotkey { .. } => "com.elgato.streamdeck.system.hotkey",
            Self::Text { .. } => "com.elgato.streamdeck.system.text",
            Self::Open { .. } => "com.elgato.streamdeck.system.open",
            Self::Website { .. } => "com.elgato.streamdeck.system.website",
            Self::Volume => "com.elgato.streamdeck.system.volume",
        }
    }

    /// Settings block for this kind.
    pub fn settings(&self) -> ActionSettings {
        match self {
            Self::Hotkey {
                native_code,
                modifiers,
            } => ActionSettings::Hotkey {
                hotkeys: HotkeyEntry::pair(*native_code, *modifiers),
            },
            Self::Text { text } => ActionSettings::Text {
                paste_enter: true,
                send_text: text.clone(),
            },
            // The launcher expects the path quoted so spaces survive.
            Self::Open { path } => ActionSettings::Launch {
                open_in_browser: true,
                path: format!("\"{path}\""),
            },
            Self::Website { url } => ActionSettings::Launch {
                open_in_browser: true,
                path: url.clone(),
            },
            Self::Volume => ActionSettings::Empty {},
        }
    }
}

/// A behavior bound to one button or dial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub id: String,
    pub title: String,
    /// Icon reference, e.g. `Images/<image-token>.png`.
    pub image: String,
    pub kind: ActionKind,
}

impl Action {
    /// True for the inert dial binding.
    pub fn is_placeholder(&self) -> bool {
        self.kind == ActionKind::PLACEHOLDER
    }

    /// Manifest record for this action.
    pub fn to_record(&self) -> ActionRecord {
        ActionRecord {
            action_id: self.id.clone(),
            linked_title: true,
            name: self.kind.name().to_string(),
            settings: self.kind.settings(),
            state: 0,
            states: vec![StateRecord {
                title: self.title.clone(),
                image: self.image.clone(),
            }],
            uuid: self.kind.plugin_uuid().to_string(),
        }
    }
}

/// Constructs actions, drawing a fresh identifier for each one.
///
/// Titles, paths and URLs are passed through verbatim.
pub struct ActionBuilder<'a, R> {
    ids: &'a mut IdGenerator<R>,
}

impl<'a, R: RngCore + CryptoRng> ActionBuilder<'a, R> {
    pub fn new(ids: &'a mut IdGenerator<R>) -> Self {
        Self { ids }
    }

    /// Build an action of any kind.
    pub fn build(&mut self, kind: ActionKind, title: impl Into<String>, image: impl Into<String>) -> Action {
        let action = Action {
            id: self.ids.dashed(),
            title: title.into(),
            image: image.into(),
            kind,
        };
        trace!(id = %action.id, kind = action.kind.name(), title = %action.title, "Built action");
        action
    }

    pub fn hotkey(
        &mut self,
        title: impl Into<String>,
        image: impl Into<String>,
        native_code: u16,
        modifiers: Modifiers,
    ) -> Action {
        self.build(
            ActionKind::Hotkey {
                native_code,
                modifiers,
            },
            title,
            image,
        )
    }

    pub fn text(&mut self, title: impl Into<String>, image: impl Into<String>, text: impl Into<String>) -> Action {
        self.build(ActionKind::Text { text: text.into() }, title, image)
    }

    pub fn open(&mut self, title: impl Into<String>, image: impl Into<String>, path: impl Into<String>) -> Action {
        self.build(ActionKind::Open { path: path.into() }, title, image)
    }

    pub fn website(&mut self, title: impl Into<String>, image: impl Into<String>, url: impl Into<String>) -> Action {
        self.build(ActionKind::Website { url: url.into() }, title, image)
    }

    pub fn volume(&mut self, title: impl Into<String>, image: impl Into<String>) -> Action {
        self.build(ActionKind::Volume, title, image)
    }

    /// Inert dial: a hotkey on the neutral key with no modifiers.
    pub fn placeholder(&mut self, title: impl Into<String>, image: impl Into<String>) -> Action {
        self.build(ActionKind::PLACEHOLDER, title, image)
    }
}
