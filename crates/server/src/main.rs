mod config;
mod doc;
mod dtos;
mod routes;
mod state;
mod utils;

use config::Config;
use log::{error, info};
use state::AppState;
use std::{process, sync::Arc};
use utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let state = match AppState::load(&config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!("Failed to load catalog: {e}");
            process::exit(1);
        }
    };

    let app = routes::app(state);

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {e}", config.bind_addr);
            process::exit(1);
        }
    };
    info!("Running axum on http://{}", config.bind_addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        process::exit(1);
    }
}
