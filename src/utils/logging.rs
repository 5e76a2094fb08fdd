use std::str::FromStr;

use tracing::Level;

use crate::config::Settings;

/// Initialize tracing for the process from the loaded settings.
///
/// Anything unparseable in `log_level` falls back to `INFO`. Uses `try_init`
/// so tests and embedding libraries can call this repeatedly.
pub fn init(settings: &Settings) {
    let level = Level::from_str(&settings.log_level).unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
