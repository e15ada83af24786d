//! Page and profile assembly.
//!
//! A Stream Deck+ page has a 4×2 button grid and four dials. Placing an
//! action into an occupied slot replaces the previous occupant.

use std::collections::BTreeMap;

use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

use crate::action::Action;
use crate::error::{ProfileError, Result};
use crate::icon::Icon;
use crate::ids::IdGenerator;
use crate::manifest::{
    Controller, Device, ENCODER_CONTROLLER, FORMAT_VERSION, KEYPAD_CONTROLLER, PageManifest,
    PageOrder, ProfileManifest,
};

/// Number of button columns.
pub const BUTTON_COLUMNS: u8 = 4;
/// Number of button rows.
pub const BUTTON_ROWS: u8 = 2;
/// Number of dials.
pub const DIAL_COUNT: u8 = 4;

const BUTTON_SLOTS: usize = (BUTTON_COLUMNS * BUTTON_ROWS) as usize;
const DIAL_SLOTS: usize = DIAL_COUNT as usize;

/// One screen of button and dial assignments plus the icons they show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Dashed linkage id listed in the profile manifest.
    pub uuid: String,
    /// Folder token naming the page's directory in the archive.
    pub folder_id: String,
    buttons: [Option<Action>; BUTTON_SLOTS],
    dials: [Option<Action>; DIAL_SLOTS],
    icons: Vec<Icon>,
}

impl Page {
    /// Empty page with pre-assigned identifiers.
    pub fn new(uuid: impl Into<String>, folder_id: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            folder_id: folder_id.into(),
            buttons: Default::default(),
            dials: Default::default(),
            icons: Vec::new(),
        }
    }

    /// Empty page with a fresh linkage id and folder token.
    pub fn generate<R: RngCore + CryptoRng>(ids: &mut IdGenerator<R>) -> Self {
        let uuid = ids.dashed();
        let folder_id = ids.folder();
        Self::new(uuid, folder_id)
    }

    fn button_index(col: u8, row: u8) -> Result<usize> {
        if col >= BUTTON_COLUMNS || row >= BUTTON_ROWS {
            return Err(ProfileError::ButtonSlotOutOfRange { col, row });
        }
        Ok(usize::from(row * BUTTON_COLUMNS + col))
    }

    fn dial_index(index: u8) -> Result<usize> {
        if index >= DIAL_COUNT {
            return Err(ProfileError::DialSlotOutOfRange { index });
        }
        Ok(usize::from(index))
    }

    /// Place an action on the button at (`col`, `row`).
    ///
    /// Returns the action previously in that slot, if any.
    pub fn set_button(&mut self, col: u8, row: u8, action: Action) -> Result<Option<Action>> {
        let slot = Self::button_index(col, row)?;
        trace!(col, row, id = %action.id, "Placing button action");
        let previous = self.buttons[slot].replace(action);
        if previous.is_some() {
            debug!(col, row, "Button slot overwritten");
        }
        Ok(previous)
    }

    /// Place an action on dial `index`.
    ///
    /// Returns the action previously on that dial, if any.
    pub fn set_dial(&mut self, index: u8, action: Action) -> Result<Option<Action>> {
        let slot = Self::dial_index(index)?;
        trace!(index, id = %action.id, "Placing dial action");
        let previous = self.dials[slot].replace(action);
        if previous.is_some() {
            debug!(index, "Dial slot overwritten");
        }
        Ok(previous)
    }

    pub fn button(&self, col: u8, row: u8) -> Option<&Action> {
        Self::button_index(col, row)
            .ok()
            .and_then(|slot| self.buttons[slot].as_ref())
    }

    pub fn dial(&self, index: u8) -> Option<&Action> {
        Self::dial_index(index)
            .ok()
            .and_then(|slot| self.dials[slot].as_ref())
    }

    /// Occupied button slots as `((col, row), action)`.
    pub fn buttons(&self) -> impl Iterator<Item = ((u8, u8), &Action)> {
        (0..BUTTON_ROWS)
            .flat_map(|row| (0..BUTTON_COLUMNS).map(move |col| (col, row)))
            .filter_map(|(col, row)| self.button(col, row).map(|action| ((col, row), action)))
    }

    /// Occupied dials as `(index, action)`.
    pub fn dials(&self) -> impl Iterator<Item = (u8, &Action)> {
        (0..DIAL_COUNT).filter_map(|index| self.dial(index).map(|action| (index, action)))
    }

    pub fn action_count(&self) -> usize {
        self.buttons().count() + self.dials().count()
    }

    /// Take ownership of a rendered icon.
    pub fn add_icon(&mut self, icon: Icon) {
        trace!(id = %icon.id, bytes = icon.data.len(), "Page took icon");
        self.icons.push(icon);
    }

    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    /// Image references of placed actions that no owned icon satisfies.
    pub fn unresolved_images(&self) -> Vec<&str> {
        self.buttons()
            .map(|(_, action)| action)
            .chain(self.dials().map(|(_, action)| action))
            .map(|action| action.image.as_str())
            .filter(|image| !self.icons.iter().any(|icon| icon.reference() == *image))
            .collect()
    }

    /// Per-page manifest with both controller groups, empty or not.
    pub fn manifest(&self) -> PageManifest {
        let keypad: BTreeMap<String, _> = self
            .buttons()
            .map(|((col, row), action)| (format!("{col},{row}"), action.to_record()))
            .collect();
        let encoder: BTreeMap<String, _> = self
            .dials()
            .map(|(index, action)| (format!("{index},0"), action.to_record()))
            .collect();

        PageManifest {
            controllers: vec![
                Controller {
                    actions: keypad,
                    kind: KEYPAD_CONTROLLER.to_string(),
                },
                Controller {
                    actions: encoder,
                    kind: ENCODER_CONTROLLER.to_string(),
                },
            ],
        }
    }
}

/// A named, ordered set of pages; the first page is shown by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pages: Vec<Page>,
}

impl Profile {
    /// Assemble a profile. Pages keep the given order.
    pub fn new(name: impl Into<String>, pages: Vec<Page>) -> Result<Self> {
        let name = name.into();
        if pages.is_empty() {
            return Err(ProfileError::EmptyProfile { name });
        }
        debug!(name = %name, pages = pages.len(), "Assembled profile");
        Ok(Self { name, pages })
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// The page the device shows first.
    pub fn default_page(&self) -> &Page {
        // Non-empty by construction.
        &self.pages[0]
    }

    pub fn action_count(&self) -> usize {
        self.pages.iter().map(Page::action_count).sum()
    }

    pub fn icon_count(&self) -> usize {
        self.pages.iter().map(|page| page.icons().len()).sum()
    }

    /// Top-level manifest for the bundle root.
    pub fn manifest(&self) -> ProfileManifest {
        ProfileManifest {
            device: Device::default(),
            name: self.name.clone(),
            pages: PageOrder {
                current: self.default_page().uuid.clone(),
                pages: self.pages.iter().map(|page| page.uuid.clone()).collect(),
            },
            version: FORMAT_VERSION.to_string(),
        }
    }
}
