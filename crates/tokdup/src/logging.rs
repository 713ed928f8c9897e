use std::io::IsTerminal;

use tokdup_config::GlobalArgs;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the `-v`/`-w` derived filter.
pub(crate) const LOG_ENV: &str = "TOKDUP_LOG";

pub(crate) fn default_level(global: &GlobalArgs) -> &'static str {
    if global.no_warnings {
        return "error";
    }
    match global.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber. A second call is a no-op.
pub(crate) fn init(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(global)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
