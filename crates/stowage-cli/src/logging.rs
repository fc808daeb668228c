//! Tracing subscriber initialisation.
//!
//! Only the CLI crate installs a subscriber; the core and adapter crates
//! emit events and never touch subscriber state.
//!
//! Verbosity maps to a filter level: nothing → WARN, `-v` → INFO,
//! `-vv` → DEBUG, `-vvv` → TRACE, `--quiet` → ERROR. A set `RUST_LOG`
//! overrides the flags entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::EnvFilter;

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = derive_level(args);
        EnvFilter::new(format!(
            "stowage={level},stowage_core={level},stowage_adapters={level}"
        ))
    });

    // Logs go to stderr so stdout stays parseable when piped; colour only
    // when stderr is a real terminal and --no-color was not given.
    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    // `try_init` errors instead of panicking when a subscriber is already
    // set (integration tests may share a process); surface that to main.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
