//! Tracing subscriber setup
//!
//! Logs go to stderr so `list --format json` output stays clean. The
//! `GALLERIA_LOG` variable takes an `EnvFilter` directive and overrides the
//! default level.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "GALLERIA_LOG";

/// Where the process is about to spend its time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Plain command output
    Command { quiet: bool },
    /// Full-screen browser; stderr shares the terminal
    Interactive,
}

/// Filter for `mode`, or `None` when nothing should be logged
#[must_use]
pub fn filter_for(mode: LogMode, env_directive: Option<&str>) -> Option<EnvFilter> {
    if let Some(directive) = env_directive.filter(|d| !d.trim().is_empty()) {
        return Some(EnvFilter::new(directive));
    }

    match mode {
        LogMode::Interactive => None,
        LogMode::Command { quiet: true } => Some(EnvFilter::new("error")),
        LogMode::Command { quiet: false } => Some(EnvFilter::new("warn")),
    }
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init(mode: LogMode) {
    let directive = std::env::var(LOG_ENV).ok();
    let Some(filter) = filter_for(mode, directive.as_deref()) else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
