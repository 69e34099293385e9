use tracing::info;

use afterglow::config::Config;
use afterglow::proxy;
use afterglow::ui::{self, AppContext};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();
    info!(
        "Starting afterglow (data dir: {})",
        config.data_dir.display()
    );

    // The proxy runs for the lifetime of the process on its own thread;
    // the UI talks to it over loopback like any other client.
    proxy::start(config.clone());

    dioxus::LaunchBuilder::new()
        .with_cfg(ui::make_config())
        .with_context(AppContext::new(config))
        .launch(ui::App);
}
