//! Log subscriber setup for the CLI

use tracing_subscriber::EnvFilter;

const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// The filter directive for a configured level adjusted by `-v`/`-q`.
///
/// Each `-v` raises the level one step up to `trace`. `-q` forces `error`.
/// An unknown level is treated as `info`.
pub fn filter_directive(level: &str, verbose: u8, quiet: bool) -> String {
    if quiet {
        return "error".to_string();
    }

    let level = level.to_ascii_lowercase();
    if level == "off" && verbose == 0 {
        return level;
    }

    let base = LEVELS
        .iter()
        .position(|candidate| *candidate == level)
        .unwrap_or(2);
    let index = (base + usize::from(verbose)).min(LEVELS.len() - 1);
    LEVELS[index].to_string()
}

/// Install the global subscriber. `RUST_LOG` takes precedence when set.
pub fn init(level: &str, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level, verbose, quiet)));

    // Ignore error if already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
