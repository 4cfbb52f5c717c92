//! Tracing subscriber setup.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "WEEKHOURS_LOG";

const DEFAULT_FILTER: &str = "weekhours=debug";

/// Installs a stderr subscriber when debug mode is on.
///
/// The filter comes from `WEEKHOURS_LOG`, then `RUST_LOG`, then defaults to
/// debug output for this crate. Calling it twice is harmless.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).try_init();
}
