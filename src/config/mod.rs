//! Declarative profile definitions.
//!
//! Profiles are described in YAML or TOML and loaded into a
//! [`ProfileConfig`], which is validated in full before anything is
//! generated.

mod controls;
mod declarative;

pub use controls::{ButtonAction, ButtonConfig, DialConfig, DialKind, ResolvedControl, Slot};
pub use declarative::{
    ConfigFormat, PageConfig, ProfileConfig, ResolvedPage, load_config, load_config_from_str,
    save_config,
};
