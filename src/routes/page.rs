use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

async fn index() -> Html<&'static str> {
    info!("GET / - Serving portfolio page");
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    info!("GET /health - Health check");
    "OK"
}
