//! Brickbar entry point
//!
//! Initializes logging and settings, then hands control to the native event
//! loop. Always exits with status 0: a failure to acquire the window or GPU is
//! logged and ends the process normally.

use brickbar::Settings;
use brickbar::platform::native;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brickbar starting...");

    let settings = Settings::load_or_default(&Settings::default_path());
    log::debug!("Settings: {settings:?}");

    match native::run(settings) {
        Ok(()) => log::info!("Brickbar exiting"),
        Err(e) => log::error!("Startup failed: {e}"),
    }
}
