//! Stream Deck+ profile generator library.
//!
//! Builds importable `.streamDeckProfile` archives from declarative page
//! definitions, rendering an icon for every button and dial.
//!
//! # Modules
//!
//! - `ids`: identifier tokens used for archive paths and manifest links
//! - `icon`: palettes, symbols and the icon rasterizer
//! - `action`: button and dial behaviors
//! - `page`: page layout and profile assembly
//! - `manifest`: JSON records written into the archive
//! - `package`: archive packaging and atomic output
//! - `config`: YAML/TOML profile definitions
//! - `builder`: the plan → render → package pipeline
//! - `presets`: bundled profile definitions
#![forbid(unsafe_code)]

pub mod action;
pub mod builder;
pub mod cli;
pub mod config;
pub mod error;
pub mod icon;
pub mod ids;
pub mod keycodes;
pub mod logging;
pub mod manifest;
pub mod package;
pub mod page;
pub mod presets;
