use std::path::PathBuf;

use overlay_bridge::util;
use overlay_core::OverlayConfig;

fn main() -> anyhow::Result<()> {
    util::init_tracing();
    util::install_panic_hook();

    // Optional first argument: config file path.
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(OverlayConfig::default_path);

    let config = match &path {
        Some(path) => {
            tracing::info!("config: {}", path.display());
            OverlayConfig::load(path)?
        }
        None => {
            tracing::warn!("no config directory available, using defaults");
            OverlayConfig::default()
        }
    };

    overlay_bridge::run(config)
}
