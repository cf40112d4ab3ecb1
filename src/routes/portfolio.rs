use std::collections::BTreeMap;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::cookie::CookieJar;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{Catalog, CatalogResponse, PortfolioReport, PortfolioSelection, AMOUNT_STEP};
use crate::services::{portfolio_service, selection_service};
use crate::state::AppState;
use crate::store::cookies::{CookieStore, JarCookieStore};
use crate::store::reference_tables;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(get_catalog))
        .route("/portfolio", post(show_results))
        .route("/holdings", post(save_holdings))
        .route("/cookies", get(list_cookies))
}

fn load_catalog(state: &AppState) -> Result<Catalog, AppError> {
    reference_tables::load_catalog(&state.config).map_err(|e| {
        error!("Failed to load reference tables: {:#}", e);
        AppError::ReferenceData(e)
    })
}

pub async fn get_catalog(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<CatalogResponse>, AppError> {
    info!("GET /api/catalog - Loading funds, stocks and saved holdings");
    let catalog = load_catalog(&state)?;
    let store = JarCookieStore::new(jar, state.config.cookie_max_age_days);

    Ok(Json(CatalogResponse {
        funds: catalog.fund_names(),
        stocks: catalog.stock_names(),
        saved: selection_service::load_selection(&store),
        amount_step: AMOUNT_STEP,
    }))
}

pub async fn show_results(
    State(state): State<AppState>,
    Json(selection): Json<PortfolioSelection>,
) -> Result<Json<PortfolioReport>, AppError> {
    info!(
        "POST /api/portfolio - Aggregating {} funds and {} stocks",
        selection.funds.len(),
        selection.stocks.len()
    );
    selection.validate()?;
    let catalog = load_catalog(&state)?;

    Ok(Json(portfolio_service::build_report(&catalog, &selection)))
}

pub async fn save_holdings(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(selection): Json<PortfolioSelection>,
) -> Result<(CookieJar, Json<PortfolioSelection>), AppError> {
    if selection.is_empty() {
        info!("POST /api/holdings - Clearing saved holdings");
    } else {
        info!("POST /api/holdings - Saving holdings");
    }
    selection.validate()?;

    let mut store = JarCookieStore::new(jar, state.config.cookie_max_age_days);
    selection_service::save_selection(&mut store, &selection).map_err(|e| {
        error!("Failed to save holdings: {}", e);
        e
    })?;

    Ok((store.into_jar(), Json(selection)))
}

pub async fn list_cookies(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Json<BTreeMap<String, String>> {
    info!("GET /api/cookies - Listing cookies");
    let store = JarCookieStore::new(jar, state.config.cookie_max_age_days);
    Json(store.get_all())
}
