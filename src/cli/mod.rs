//! CLI argument definitions.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::package::ARCHIVE_EXTENSION;
use crate::presets::Preset;

/// Stream Deck+ profile generator.
///
/// Renders icons for every button and dial and packages the pages into a
/// `.streamDeckProfile` archive ready to import.
#[derive(Parser, Debug)]
#[command(name = "sdprofile", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Report format (text for humans, json for agents/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "SDPROFILE_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json, logs as JSON lines
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Render pages one after another instead of in parallel
    #[arg(long, global = true)]
    pub sequential: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One summary line
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
    /// Single-line JSON report
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a profile from a YAML or TOML definition
    Build(BuildArgs),

    /// Build or export a bundled profile
    Preset(PresetArgs),

    /// Render a single icon to a PNG file
    Icon(IconArgs),
}

/// Arguments for `build`.
#[derive(clap::Args, Debug)]
pub struct BuildArgs {
    /// Profile definition (.yaml, .yml or .toml)
    pub config: PathBuf,

    /// Output file or directory [default: "<name>.streamDeckProfile"]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Bundled presets selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetName {
    /// Eight pages of AI tooling shortcuts
    AiToolkit,
}

impl From<PresetName> for Preset {
    fn from(name: PresetName) -> Self {
        match name {
            PresetName::AiToolkit => Self::AiToolkit,
        }
    }
}

/// Arguments for `preset`.
#[derive(clap::Args, Debug)]
pub struct PresetArgs {
    /// Which preset to build
    pub name: PresetName,

    /// Output file or directory [default: "<name>.streamDeckProfile"]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Write the preset's definition to this .yaml/.toml file instead of building
    #[arg(long, value_name = "FILE", conflicts_with = "output")]
    pub export: Option<PathBuf>,
}

/// Arguments for `icon`.
#[derive(clap::Args, Debug)]
pub struct IconArgs {
    /// Symbol name, e.g. "terminal"
    pub symbol: String,

    /// Palette name, e.g. "claudeCode"
    pub palette: String,

    /// Caption drawn under the symbol
    #[arg(long, short = 'l')]
    pub label: Option<String>,

    /// Output PNG path
    #[arg(long, short = 'o', default_value = "icon.png")]
    pub output: PathBuf,
}

/// Where to write the archive for a profile called `name`.
///
/// With no `output` the archive lands in the current directory; an existing
/// directory receives `<name>.streamDeckProfile`; anything else is used as
/// the file path. The name never contributes path components.
pub fn resolve_output(output: Option<&Path>, name: &str) -> PathBuf {
    let file_name = format!("{}.{ARCHIVE_EXTENSION}", file_stem(name));
    match output {
        None => PathBuf::from(file_name),
        Some(dir) if dir.is_dir() => dir.join(file_name),
        Some(path) => path.to_path_buf(),
    }
}

/// File-system safe stem for a profile name.
///
/// Separators, `:` and NUL become `_`; leading dots and whitespace are
/// dropped so the result can be neither hidden nor a parent reference.
pub fn file_stem(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c => c,
        })
        .collect();
    let stem = replaced
        .trim_start_matches(|c: char| c == '.' || c.is_whitespace())
        .trim_end();
    if stem.is_empty() {
        "profile".to_string()
    } else {
        stem.to_string()
    }
}
