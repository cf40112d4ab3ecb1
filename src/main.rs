mod app;
mod config;
mod errors;
mod logging;
mod models;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::logging::LoggingConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    logging::init_logging(LoggingConfig::from_env())?;

    let config = AppConfig::from_env();
    config.validate()?;
    logging::log_service_settings(&config);
    let addr = config.socket_addr()?;

    // Requests re-read the tables, this only refuses to start without them
    let catalog = store::reference_tables::load_catalog(&config)?;
    tracing::info!(
        "📊 Found {} funds and {} stocks in {:?}",
        catalog.fund_names().len(),
        catalog.stock_names().len(),
        config.data_dir
    );

    let state = AppState {
        config: Arc::new(config),
    };
    let app = app::create_app(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Portfolio aggregator running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
