//! macOS native key codes and modifier masks used by hotkey actions.
//!
//! The device software replays hotkeys by native (virtual) key code, so
//! names in the page definitions are translated here.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::error::{ProfileError, Result};

/// Native code of the unused second hotkey slot.
pub const NONE_NATIVE_CODE: u16 = 146;

/// Qt key code of the unused second hotkey slot (`0x1FFFFFF`, Qt::Key_unknown).
pub const NONE_QT_KEY_CODE: u32 = 33_554_431;

/// Windows virtual key code reported for every macOS-authored entry.
pub const NO_VKEY_CODE: i32 = -1;

/// Native code bound to inert dials (F6, no modifiers).
pub const PLACEHOLDER_NATIVE_CODE: u16 = 97;

/// Name → native code table.
const MAC_KEYS: &[(&str, u16)] = &[
    // Letters
    ("a", 0), ("s", 1), ("d", 2), ("f", 3), ("h", 4), ("g", 5), ("z", 6), ("x", 7),
    ("c", 8), ("v", 9), ("b", 11), ("q", 12), ("w", 13), ("e", 14), ("r", 15),
    ("y", 16), ("t", 17), ("o", 31), ("u", 32), ("i", 34), ("p", 35), ("l", 37),
    ("j", 38), ("k", 40), ("n", 45), ("m", 46),
    // Digits
    ("1", 18), ("2", 19), ("3", 20), ("4", 21), ("5", 23), ("6", 22),
    ("7", 26), ("8", 28), ("9", 25), ("0", 29),
    // Punctuation
    ("=", 24), ("-", 27), (",", 43), (".", 47), ("/", 44),
    ("[", 33), ("]", 30), ("\\", 42), (";", 41), ("'", 39), ("`", 50),
    // Editing and navigation
    ("return", 36), ("tab", 48), ("space", 49), ("delete", 51), ("escape", 53),
    ("left", 123), ("right", 124), ("down", 125), ("up", 126),
    // Function row
    ("f1", 122), ("f2", 120), ("f3", 99), ("f4", 118), ("f5", 96), ("f6", 97),
    ("f7", 98), ("f8", 100), ("f9", 101), ("f10", 109), ("f11", 103), ("f12", 111),
    ("f13", 105), ("f14", 107), ("f15", 113),
];

/// Look up the native code for a key name.
///
/// Letter and named keys are case-insensitive; `enter` and `esc` are accepted
/// as aliases.
pub fn native_code(name: &str) -> Result<u16> {
    let lowered = name.to_lowercase();
    let canonical = match lowered.as_str() {
        "enter" => "return",
        "esc" => "escape",
        other => other,
    };
    MAC_KEYS
        .iter()
        .find(|(key, _)| *key == canonical)
        .map(|(_, code)| *code)
        .ok_or_else(|| ProfileError::UnknownKey {
            name: name.to_string(),
        })
}

/// Modifier bitmask as stored in the manifest's `KeyModifiers` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1);
    pub const CTRL: Self = Self(1 << 1);
    pub const OPTION: Self = Self(1 << 2);
    pub const CMD: Self = Self(1 << 3);

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub const fn ctrl(self) -> bool {
        self.contains(Self::CTRL)
    }

    pub const fn option(self) -> bool {
        self.contains(Self::OPTION)
    }

    pub const fn cmd(self) -> bool {
        self.contains(Self::CMD)
    }

    /// Parse a single modifier name.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "shift" => Ok(Self::SHIFT),
            "ctrl" | "control" => Ok(Self::CTRL),
            "opt" | "option" | "alt" => Ok(Self::OPTION),
            "cmd" | "command" | "meta" | "super" => Ok(Self::CMD),
            _ => Err(ProfileError::UnknownModifier {
                name: name.to_string(),
            }),
        }
    }

    /// Combine a list of modifier names into one mask.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        names
            .iter()
            .try_fold(Self::NONE, |acc, name| Ok(acc | Self::parse(name.as_ref())?))
    }
}

impl BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.cmd(), "cmd"),
            (self.ctrl(), "ctrl"),
            (self.option(), "option"),
            (self.shift(), "shift"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect();
        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join("+"))
        }
    }
}
