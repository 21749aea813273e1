//! Shell completion support
//!
//! - **Static completions** (always available): subcommands, flags, enum values
//! - **Dynamic completions** (behind `dynamic-completions`): category names read
//!   from the manifest in the current directory

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    clap_complete::generate(shell, cmd, cmd.get_name().to_string(), buf);
}

/// Handle a completion request if the `COMPLETE` environment variable is set
///
/// Call at the start of `main()` before argument parsing.
#[cfg(feature = "dynamic-completions")]
pub fn init_dynamic_completions<F: Fn() -> Command>(factory: F) {
    clap_complete::CompleteEnv::with_factory(factory).complete();
}

/// Category names from `./gallery.json`, or nothing if it is absent
#[cfg(feature = "dynamic-completions")]
fn local_categories() -> Vec<String> {
    use crate::catalog::{DEFAULT_MANIFEST, parse_manifest};
    use crate::filter::derive_categories;

    std::fs::read_to_string(DEFAULT_MANIFEST)
        .ok()
        .and_then(|body| parse_manifest(&body).ok())
        .map(|catalog| {
            derive_categories(&catalog)
                .into_iter()
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Complete `-c/--category`
#[cfg(feature = "dynamic-completions")]
pub fn complete_categories(
    current: &std::ffi::OsStr,
) -> Vec<clap_complete::engine::CompletionCandidate> {
    use clap_complete::engine::CompletionCandidate;

    let current_lower = current.to_string_lossy().to_lowercase();

    local_categories()
        .into_iter()
        .filter(|name| name.to_lowercase().starts_with(&current_lower))
        .map(CompletionCandidate::new)
        .collect()
}
