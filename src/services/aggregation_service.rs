use std::collections::BTreeMap;

use tracing::warn;

use crate::models::{Catalog, ConsolidatedPosition, PortfolioSelection};

/// Weights are apportioned in hundredths of a percent.
const WEIGHT_UNITS: i64 = 10_000;

/// Merges fund look-through and direct stock holdings into one row per ticker,
/// weighted against the portfolio total and sorted by value, largest first.
pub fn consolidate(catalog: &Catalog, selection: &PortfolioSelection) -> Vec<ConsolidatedPosition> {
    warn_unknown_selections(catalog, selection);

    let fund_contributions = catalog.funds.iter().filter_map(|row| {
        selection.funds.get(&row.fund).map(|amount| ConsolidatedPosition {
            ticker: row.ticker.clone(),
            name: row.name.clone(),
            sector: row.sector.clone(),
            asset_class: row.asset_class.clone(),
            location: row.location.clone(),
            value: row.weight_pct * amount / 100.0,
            weight_pct: 0.0,
        })
    });

    let stock_contributions = catalog.stocks.iter().filter_map(|row| {
        selection.stocks.get(&row.name).map(|amount| ConsolidatedPosition {
            ticker: row.ticker.clone(),
            name: row.name.clone(),
            sector: row.sector.clone(),
            asset_class: row.asset_class.clone(),
            location: row.location.clone(),
            value: *amount,
            weight_pct: 0.0,
        })
    });

    let mut positions = merge_by_ticker(fund_contributions.chain(stock_contributions));
    apportion_weights(&mut positions);
    // Stable, so equal values keep ticker order
    positions.sort_by(|a, b| b.value.total_cmp(&a.value));
    positions
}

/// Sums contributions per ticker. Descriptive fields come from the first
/// contribution seen, with blanks filled in by later ones.
fn merge_by_ticker(contributions: impl Iterator<Item = ConsolidatedPosition>) -> Vec<ConsolidatedPosition> {
    let mut merged: BTreeMap<String, ConsolidatedPosition> = BTreeMap::new();

    for contribution in contributions {
        match merged.get_mut(&contribution.ticker) {
            Some(existing) => {
                existing.value += contribution.value;
                fill_blank(&mut existing.name, contribution.name);
                fill_blank(&mut existing.sector, contribution.sector);
                fill_blank(&mut existing.asset_class, contribution.asset_class);
                fill_blank(&mut existing.location, contribution.location);
            }
            None => {
                merged.insert(contribution.ticker.clone(), contribution);
            }
        }
    }

    merged.into_values().collect()
}

fn fill_blank(field: &mut String, candidate: String) {
    if field.trim().is_empty() {
        *field = candidate;
    }
}

/// Sets each position's share of the total, rounded to 2 decimals.
///
/// Rounding uses the largest-remainder method so the rounded weights still add
/// up to exactly 100. Equal values can therefore differ by 0.01: three equal
/// positions show 33.34, 33.33 and 33.33, the extra hundredth going to the
/// earliest row. A zero total leaves every weight at 0.
pub fn apportion_weights(positions: &mut [ConsolidatedPosition]) {
    let largest = positions
        .iter()
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    if !(largest > 0.0) {
        positions.iter_mut().for_each(|p| p.weight_pct = 0.0);
        return;
    }

    // Scaled by the largest value so the total stays finite near f64::MAX
    let scaled: Vec<f64> = positions
        .iter()
        .map(|p| if p.value.is_finite() { p.value / largest } else { 0.0 })
        .collect();
    let total: f64 = scaled.iter().sum();

    let exact: Vec<f64> = scaled
        .iter()
        .map(|v| v / total * WEIGHT_UNITS as f64)
        .collect();
    let mut units: Vec<i64> = exact.iter().map(|e| e.floor() as i64).collect();
    let shortfall = (WEIGHT_UNITS - units.iter().sum::<i64>()).max(0) as usize;

    let mut by_remainder: Vec<usize> = (0..positions.len()).collect();
    by_remainder.sort_by(|&a, &b| (exact[b] - exact[b].floor()).total_cmp(&(exact[a] - exact[a].floor())));
    for &i in by_remainder.iter().take(shortfall) {
        units[i] += 1;
    }

    for (position, unit) in positions.iter_mut().zip(units) {
        position.weight_pct = unit as f64 / 100.0;
    }
}

fn warn_unknown_selections(catalog: &Catalog, selection: &PortfolioSelection) {
    for name in selection.funds.keys().filter(|name| !catalog.has_fund(name)) {
        warn!("Ignoring unknown fund '{}'", name);
    }
    for name in selection.stocks.keys().filter(|name| !catalog.has_stock(name)) {
        warn!("Ignoring unknown stock '{}'", name);
    }
}
