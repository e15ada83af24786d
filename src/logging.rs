//! Structured logging initialization for the profile generator.
//!
//! Logs always go to stderr so that stdout stays reserved for the build
//! report.

use std::io::{self, IsTerminal};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Shape of the emitted log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON lines for scripts and build pipelines.
    Json,
    /// Colored multi-field output for interactive terminals.
    Pretty,
    /// Plain single-line output when stderr is piped.
    Compact,
}

impl LogFormat {
    /// Pick the format from the robot flag and whether stderr is a TTY.
    pub fn detect(robot_mode: bool) -> Self {
        if robot_mode {
            Self::Json
        } else if io::stderr().is_terminal() {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

/// Filter directive used when `RUST_LOG` is not set.
///
/// `quiet` wins over any verbosity level.
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "sdprofile=error";
    }
    match verbose {
        0 => "sdprofile=info",
        1 => "sdprofile=debug",
        _ => "sdprofile=trace",
    }
}

/// Initialize the tracing subscriber based on CLI flags and environment.
///
/// # Arguments
///
/// * `robot_mode` - Emit JSON lines instead of human-readable text
/// * `verbose` - Verbosity level: 0 = info, 1 = debug, 2+ = trace
/// * `quiet` - Only report errors
///
/// # Environment Variables
///
/// * `RUST_LOG` - Override default filter (e.g., "sdprofile=debug,resvg=warn")
pub fn init_logging(robot_mode: bool, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let base = fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr);

    let registry = tracing_subscriber::registry().with(filter);

    // try_init: a second call (tests, embedding) keeps the first subscriber.
    let _ = match LogFormat::detect(robot_mode) {
        LogFormat::Json => registry.with(base.json().with_target(true)).try_init(),
        LogFormat::Pretty => registry.with(base.pretty().with_target(false)).try_init(),
        LogFormat::Compact => registry
            .with(base.with_ansi(false).with_target(false).compact())
            .try_init(),
    };
}
