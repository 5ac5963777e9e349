//! Logger bootstrap for the `alien` binary and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Dependencies stay at `warn`; only this crate's shield and fleet lines are
/// raised to `level`.
fn default_filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    format!("{},{}={level}", LevelFilter::Warn, env!("CARGO_CRATE_NAME"))
}

/// Initializes the global logger.
///
/// `RUST_LOG` wins when set. Otherwise shield activity (info level) is shown,
/// and `verbose` adds broken-shield pass-through and config loading (debug).
/// Calling it again once a logger is installed does nothing.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    if let Err(err) = Builder::from_env(env).try_init() {
        log::debug!("logger already installed: {err}");
    }
}
