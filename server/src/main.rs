mod config;
mod routes;
mod services;
mod state;

use std::fmt::Display;
use std::process::ExitCode;

/// Log a startup failure through the tracing subscriber and exit non-zero.
fn startup_failed(err: &dyn Display, what: &str) -> ExitCode {
    tracing::error!(error = %err, "{what}");
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => return startup_failed(&e, "invalid server configuration"),
    };
    let store = match config.load_store() {
        Ok(store) => store,
        Err(e) => return startup_failed(&e, "failed to load position seed"),
    };
    tracing::info!(
        components = store.len(),
        seed = ?config.seed_path,
        "position store seeded"
    );
    if store.is_empty() {
        tracing::warn!("position store is empty; the board will render no widgets");
    }

    let state = state::AppState::new(store);
    let app = routes::app(state);

    let addr = config.listen_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => return startup_failed(&e, "failed to bind"),
    };

    tracing::info!(%addr, "dragboard listening");
    if let Err(e) = axum::serve(listener, app).await {
        return startup_failed(&e, "server failed");
    }
    ExitCode::SUCCESS
}
