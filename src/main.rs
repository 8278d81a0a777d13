// Main entry point - Configuration, wiring and the console loop
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::Dashboard;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_backend::HttpDashboardBackend;
use crate::presentation::console::{ConsoleNotifier, run_console};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, the rendered view owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = load_app_config()?;

    let backend = Arc::new(HttpDashboardBackend::new(
        config.backend.host.clone(),
        config.backend.request_timeout(),
    )?);
    tracing::info!("Using backend at {}", backend.host());

    let dashboard = Dashboard::mount(backend, &config.dashboard.settings(), Arc::new(ConsoleNotifier));

    run_console(dashboard).await
}
