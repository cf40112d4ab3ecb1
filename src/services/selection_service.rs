use tracing::warn;

use crate::errors::AppError;
use crate::models::{HoldingInput, PortfolioSelection};
use crate::store::cookies::CookieStore;

pub const ETF_HOLDINGS_KEY: &str = "etf_holdings";
pub const STOCK_HOLDINGS_KEY: &str = "stock_holdings";

/// Last saved selection. Missing or unreadable entries load as empty.
pub fn load_selection(store: &impl CookieStore) -> PortfolioSelection {
    PortfolioSelection {
        funds: load_holdings(store, ETF_HOLDINGS_KEY),
        stocks: load_holdings(store, STOCK_HOLDINGS_KEY),
    }
}

/// Replaces both persisted mappings with the given selection. Nothing is merged.
pub fn save_selection(store: &mut impl CookieStore, selection: &PortfolioSelection) -> Result<(), AppError> {
    let funds = serde_json::to_string(&selection.funds)?;
    let stocks = serde_json::to_string(&selection.stocks)?;

    store.set(ETF_HOLDINGS_KEY, &funds);
    store.set(STOCK_HOLDINGS_KEY, &stocks);
    Ok(())
}

fn load_holdings(store: &impl CookieStore, key: &str) -> HoldingInput {
    let Some(raw) = store.get(key) else {
        return HoldingInput::new();
    };

    match serde_json::from_str::<HoldingInput>(&raw) {
        Ok(holdings) => holdings
            .into_iter()
            .filter(|(_, amount)| amount.is_finite() && *amount >= 0.0)
            .collect(),
        Err(e) => {
            warn!("Discarding unreadable '{}' cookie: {}", key, e);
            HoldingInput::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::cookies::MemoryCookieStore;

    fn selection() -> PortfolioSelection {
        let mut selection = PortfolioSelection::default();
        selection.funds.insert("iShares Core MSCI World UCITS ETF".to_string(), 1500.0);
        selection.stocks.insert("Apple".to_string(), 250.0);
        selection
    }

    #[test]
    fn test_saved_selection_is_loaded_back() {
        let mut store = MemoryCookieStore::default();

        save_selection(&mut store, &selection()).unwrap();

        assert_eq!(load_selection(&store), selection());
    }

    #[test]
    fn test_save_overwrites_instead_of_merging() {
        let mut store = MemoryCookieStore::default();
        save_selection(&mut store, &selection()).unwrap();

        let mut replacement = PortfolioSelection::default();
        replacement.stocks.insert("LVMH".to_string(), 40.0);
        save_selection(&mut store, &replacement).unwrap();

        let loaded = load_selection(&store);
        assert!(loaded.funds.is_empty());
        assert_eq!(loaded.stocks.len(), 1);
        assert_eq!(loaded.stocks.get("LVMH"), Some(&40.0));
    }

    #[test]
    fn test_saving_empty_selection_clears_previous_state() {
        let mut store = MemoryCookieStore::default();
        save_selection(&mut store, &selection()).unwrap();

        save_selection(&mut store, &PortfolioSelection::default()).unwrap();

        assert_eq!(store.get(ETF_HOLDINGS_KEY).as_deref(), Some("{}"));
        assert_eq!(store.get(STOCK_HOLDINGS_KEY).as_deref(), Some("{}"));
        assert!(load_selection(&store).is_empty());
    }

    #[test]
    fn test_nothing_saved_loads_empty() {
        let store = MemoryCookieStore::default();

        assert!(load_selection(&store).is_empty());
    }

    #[test]
    fn test_garbage_cookie_loads_empty() {
        let mut store = MemoryCookieStore::default();
        store.set(ETF_HOLDINGS_KEY, "not json");
        store.set(STOCK_HOLDINGS_KEY, r#"{"Apple":-5,"LVMH":20}"#);

        let loaded = load_selection(&store);

        assert!(loaded.funds.is_empty());
        assert_eq!(loaded.stocks.len(), 1);
        assert!(loaded.stocks.contains_key("LVMH"));
    }
}
