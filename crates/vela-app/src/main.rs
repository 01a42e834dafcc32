mod app_state;
mod cli;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use vela_config::schema::VelaConfig;
use winit::event_loop::EventLoop;

fn load_config(path: Option<&str>) -> Result<VelaConfig, vela_common::ConfigError> {
    match path {
        Some(path) => vela_config::load_config_from(Path::new(path)),
        None => vela_config::load_config(),
    }
}

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Config comes first so `[logging] level` can seed the filter; problems
    // are reported once the subscriber exists.
    let loaded = load_config(args.config.as_deref());

    // Initialize logging
    let log_directive = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok(config) => config.logging.directive(),
        Err(_) => "vela=info".to_string(),
    });
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "vela=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Vela v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        VelaConfig::default()
    });
    if let Err(e) = vela_config::validation::validate(&config) {
        tracing::warn!("Config validation: {e}");
    }
    if args.sidebar {
        config.sidebar.expanded_on_start = true;
    }
    tracing::info!("Config loaded (default url: {})", config.browser.default_url);

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::VelaApp::new(config, args.url);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
