use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::{page, portfolio};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .merge(page::router())
        .nest("/api", portfolio::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
