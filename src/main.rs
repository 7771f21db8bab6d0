//! Binary entry point.

use log::LevelFilter;

fn main() {
    // Default to info; RUST_LOG still wins for debugging sessions.
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    hotzone::events::init_event_bus();

    #[cfg(target_os = "macos")]
    hotzone::platform::macos::run();

    #[cfg(not(target_os = "macos"))]
    {
        log::error!("hotzone only supports macOS");
        std::process::exit(1);
    }
}
