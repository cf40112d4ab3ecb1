use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Monetary amount entered per fund or stock name.
pub type HoldingInput = BTreeMap<String, f64>;

/// Amount inputs move in steps of this many currency units.
pub const AMOUNT_STEP: f64 = 10.0;

// What the user picked on the page. Also the shape persisted between visits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSelection {
    #[serde(default)]
    pub funds: HoldingInput,
    #[serde(default)]
    pub stocks: HoldingInput,
}

impl PortfolioSelection {
    pub fn is_empty(&self) -> bool {
        self.funds.is_empty() && self.stocks.is_empty()
    }

    /// Amounts must be finite and at least zero. There is no upper bound on a
    /// single amount, but together they must still add up to a finite total.
    pub fn validate(&self) -> Result<(), String> {
        self.funds
            .iter()
            .chain(self.stocks.iter())
            .try_for_each(|(name, amount)| {
                if !amount.is_finite() {
                    Err(format!("Holding for '{}' must be a number", name))
                } else if *amount < 0.0 {
                    Err(format!("Holding for '{}' cannot be negative", name))
                } else {
                    Ok(())
                }
            })?;

        let total: f64 = self.funds.values().chain(self.stocks.values()).sum();
        if !total.is_finite() {
            return Err("Total of all holdings is too large".to_string());
        }
        Ok(())
    }
}

/// Echo of one entered amount, shown above the results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingLine {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub funds: Vec<String>,
    pub stocks: Vec<String>,
    pub saved: PortfolioSelection,
    pub amount_step: f64,
}
