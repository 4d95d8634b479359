mod api;
mod app;
mod components;
mod config;
mod error;
mod poller;
mod scheduler;
mod shared;
mod utils;

#[cfg(not(target_arch = "wasm32"))]
mod telemetry;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use anyhow::Context;
    use dioxus::logger::tracing::info;

    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = match config::DashboardConfig::from_env().context("loading dashboard config") {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("[config] {e:#}");
            std::process::exit(2);
        }
    };
    info!(
        "[config] api={} device={} interval={}ms stale={:?}",
        config.api_base, config.device_id, config.poll_interval_ms, config.stale_responses
    );

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(app::App);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    dioxus::launch(app::App);
}
