// src/logging.rs
use env_logger::Env;
use log::debug;

/// Environment variable holding the `env_logger` filter, e.g. `LSWC_LOG=debug`.
pub const LOG_ENV: &str = "LSWC_LOG";

/// Diagnostics go to stderr so stdout only ever carries listing/count output.
pub fn init() {
    let installed = env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "error"))
        .format_timestamp(None)
        .try_init();
    if let Err(err) = installed {
        debug!("keeping the logger that is already installed: {err}");
    }
}
