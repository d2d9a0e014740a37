//! Logging and panic reporting for the binary.

use overlay_core::mods::panic_message;
use tracing_subscriber::EnvFilter;

/// Log filter variable. Unset means `info` with the GPU stack quieted.
pub const LOG_ENV: &str = "OVERLAY_LOG";

const DEFAULT_FILTER: &str = "info,wgpu=warn,naga=warn,egui_wgpu=warn";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A second call (tests, embedders) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .try_init();
}

/// Logs every panic through tracing before unwinding continues. Mod panics
/// are then caught and reported by the registry.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let at = info
            .location()
            .map_or_else(|| "unknown".to_string(), |l| format!("{}:{}", l.file(), l.line()));
        tracing::error!(at = %at, message = panic_message(info.payload()), "panic");
    }));
}
