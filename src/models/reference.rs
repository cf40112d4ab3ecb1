use serde::{Deserialize, Serialize};

// One constituent of a fund as published in the issuer's holdings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundWeightRow {
    #[serde(rename = "Fund")]
    pub fund: String,
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Sector")]
    pub sector: String,
    #[serde(rename = "Asset Class")]
    pub asset_class: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Weight (%)")]
    pub weight_pct: f64,
}

// A security that can be held directly, outside of any fund.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Ticker")]
    pub ticker: String,
    #[serde(rename = "Sector")]
    pub sector: String,
    #[serde(rename = "Asset Class")]
    pub asset_class: String,
    #[serde(rename = "Location")]
    pub location: String,
}

/// Both reference tables, as read from disk for a single request.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub funds: Vec<FundWeightRow>,
    pub stocks: Vec<StockRow>,
}

impl Catalog {
    pub fn new(funds: Vec<FundWeightRow>, stocks: Vec<StockRow>) -> Self {
        Self { funds, stocks }
    }

    /// Unique fund names in order of first appearance.
    pub fn fund_names(&self) -> Vec<String> {
        unique_in_order(self.funds.iter().map(|row| row.fund.as_str()))
    }

    /// Unique stock names in order of first appearance.
    pub fn stock_names(&self) -> Vec<String> {
        unique_in_order(self.stocks.iter().map(|row| row.name.as_str()))
    }

    pub fn has_fund(&self, name: &str) -> bool {
        self.funds.iter().any(|row| row.fund == name)
    }

    pub fn has_stock(&self, name: &str) -> bool {
        self.stocks.iter().any(|row| row.name == name)
    }
}

fn unique_in_order<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}
