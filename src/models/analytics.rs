use serde::{Deserialize, Serialize};

use super::portfolio::ConsolidatedPosition;

/// Attribute a consolidated portfolio can be broken down by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Sector,
    AssetClass,
    Location,
}

impl Dimension {
    pub fn key<'a>(&self, position: &'a ConsolidatedPosition) -> &'a str {
        match self {
            Dimension::Sector => &position.sector,
            Dimension::AssetClass => &position.asset_class,
            Dimension::Location => &position.location,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupAllocation {
    pub label: String,
    pub value: f64,
    pub weight_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LargestGroup {
    pub label: String,
    pub weight_pct: f64,
}

/// Headline figures shown as metric cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub top_10_concentration: f64,
    pub largest_sector: Option<LargestGroup>,
    pub largest_region: Option<LargestGroup>,
}
