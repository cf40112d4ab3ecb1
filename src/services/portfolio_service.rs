use crate::models::{Catalog, Dimension, HoldingInput, HoldingLine, PortfolioReport, PortfolioSelection};
use crate::services::{aggregation_service, analytics_service};

/// Everything the "Show results" action displays, computed from scratch.
pub fn build_report(catalog: &Catalog, selection: &PortfolioSelection) -> PortfolioReport {
    let positions = aggregation_service::consolidate(catalog, selection);
    let total_value: f64 = positions.iter().map(|p| p.value).sum();

    PortfolioReport {
        fund_holdings: holding_lines(&selection.funds),
        stock_holdings: holding_lines(&selection.stocks),
        total_value,
        summary: analytics_service::summarize(&positions),
        sectors: analytics_service::breakdown(&positions, Dimension::Sector),
        asset_classes: analytics_service::breakdown(&positions, Dimension::AssetClass),
        locations: analytics_service::breakdown(&positions, Dimension::Location),
        positions,
    }
}

fn holding_lines(holdings: &HoldingInput) -> Vec<HoldingLine> {
    holdings
        .iter()
        .map(|(name, amount)| HoldingLine {
            name: name.clone(),
            amount: *amount,
        })
        .collect()
}
