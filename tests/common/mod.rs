//! Common test utilities for the profile generator.
//!
//! - `archive`: reading produced archives back
//! - `cli`: binary runner with fluent assertions
//! - `fixtures`: fixture paths, seeded identifiers and rasterizer doubles
#![allow(dead_code)]

pub mod archive;
pub mod cli;
pub mod fixtures;

use tracing_subscriber::EnvFilter;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
