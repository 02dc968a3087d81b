use crate::api::HttpPropertiesApi;
use crate::config::AppConfig;
use crate::responses::html_error_response;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estate_listings=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration failed");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the Properties API client
    let api = match HttpPropertiesApi::new(&config) {
        Ok(api) => api,
        Err(e) => {
            error!(error = %e, "Properties API client init failed");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let workers = config.max_workers;
    info!(%addr, api = %config.api_base_url, workers, "Starting server");

    let state = AppState::new(Arc::new(api), config);
    let server = Server::bind(&addr).max_workers(workers);

    // 3️⃣ Serve requests, passing shared state into closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!(error = %e, "Server ended with error");
    }

    info!("Server shut down cleanly.");
}
