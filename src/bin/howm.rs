//! Starts the window manager.
use howm::{Config, Manager, XlibDisplayServer};
use std::process::exit;

fn main() {
    let _log_guard = howm::logging::setup_logging();
    log::info!("howm booting");

    let config = Config::load().unwrap_or_else(|err| {
        log::error!("couldn't load the config: {}", err);
        Config::default()
    });

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("ERROR: couldn't init the tokio runtime");
    // The display server spawns its readability watcher at creation, so
    // the runtime has to be entered first.
    let _rt_guard = rt.enter();

    let manager: Manager<XlibDisplayServer> = match Manager::new(config) {
        Ok(manager) => manager,
        Err(err) => {
            log::error!("setup failed: {}", err);
            exit(1);
        }
    };
    manager.register_child_hook();

    let exit_code = rt.block_on(manager.event_loop());

    log::info!("howm exiting with code {}", exit_code);
    exit(exit_code);
}
