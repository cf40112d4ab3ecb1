use serde::{Deserialize, Serialize};

use super::analytics::{GroupAllocation, PortfolioSummary};
use super::holding::HoldingLine;

// A single ticker after merging every fund and direct-stock contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidatedPosition {
    pub ticker: String,
    pub name: String,
    pub sector: String,
    pub asset_class: String,
    pub location: String,
    pub value: f64,
    pub weight_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortfolioReport {
    pub fund_holdings: Vec<HoldingLine>,
    pub stock_holdings: Vec<HoldingLine>,
    pub total_value: f64,
    pub summary: PortfolioSummary,
    pub sectors: Vec<GroupAllocation>,
    pub asset_classes: Vec<GroupAllocation>,
    pub locations: Vec<GroupAllocation>,
    pub positions: Vec<ConsolidatedPosition>,
}
