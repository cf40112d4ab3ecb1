use std::collections::BTreeMap;

use crate::models::{ConsolidatedPosition, Dimension, GroupAllocation, LargestGroup, PortfolioSummary};

const TOP_N: usize = 10;

/// Headline metrics for a value-sorted consolidated portfolio.
pub fn summarize(positions: &[ConsolidatedPosition]) -> PortfolioSummary {
    PortfolioSummary {
        top_10_concentration: top_n_concentration(positions, TOP_N),
        largest_sector: largest_group(positions, Dimension::Sector),
        largest_region: largest_group(positions, Dimension::Location),
    }
}

/// Combined weight of the first `n` positions, or of all of them when there are fewer.
pub fn top_n_concentration(positions: &[ConsolidatedPosition], n: usize) -> f64 {
    round2(positions.iter().take(n).map(|p| p.weight_pct).sum())
}

/// Groups sorted by value, largest first. Ties keep label order.
pub fn breakdown(positions: &[ConsolidatedPosition], dimension: Dimension) -> Vec<GroupAllocation> {
    let mut groups: Vec<GroupAllocation> = group_totals(positions, dimension)
        .into_iter()
        .map(|(label, (value, weight_pct))| GroupAllocation {
            label: label.to_string(),
            value,
            weight_pct: round2(weight_pct),
        })
        .collect();

    groups.sort_by(|a, b| b.value.total_cmp(&a.value));
    groups
}

/// The group with the highest weight. On a tie the first label alphabetically wins.
/// A portfolio worth nothing has no largest group.
pub fn largest_group(positions: &[ConsolidatedPosition], dimension: Dimension) -> Option<LargestGroup> {
    group_totals(positions, dimension)
        .into_iter()
        .fold(None, |best: Option<(&str, f64)>, (label, (_, weight_pct))| match best {
            Some((_, best_weight)) if best_weight >= weight_pct => best,
            _ => Some((label, weight_pct)),
        })
        .filter(|(_, weight_pct)| *weight_pct > 0.0)
        .map(|(label, weight_pct)| LargestGroup {
            label: label.to_string(),
            weight_pct: round2(weight_pct),
        })
}

fn group_totals(positions: &[ConsolidatedPosition], dimension: Dimension) -> BTreeMap<&str, (f64, f64)> {
    positions.iter().fold(BTreeMap::new(), |mut groups, position| {
        let entry = groups.entry(dimension.key(position)).or_insert((0.0, 0.0));
        entry.0 += position.value;
        entry.1 += position.weight_pct;
        groups
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(ticker: &str, sector: &str, location: &str, value: f64, weight_pct: f64) -> ConsolidatedPosition {
        ConsolidatedPosition {
            ticker: ticker.to_string(),
            name: ticker.to_string(),
            sector: sector.to_string(),
            asset_class: "Equity".to_string(),
            location: location.to_string(),
            value,
            weight_pct,
        }
    }

    fn equal_positions(count: usize) -> Vec<ConsolidatedPosition> {
        let mut positions: Vec<_> = (0..count)
            .map(|i| position(&format!("T{:02}", i), "Tech", "US", 100.0, 0.0))
            .collect();
        crate::services::aggregation_service::apportion_weights(&mut positions);
        positions
    }

    #[test]
    fn test_top_10_with_fewer_positions_sums_everything() {
        let positions = vec![
            position("A", "Tech", "US", 700.0, 70.0),
            position("B", "Energy", "France", 300.0, 30.0),
        ];

        assert_eq!(summarize(&positions).top_10_concentration, 100.0);
    }

    #[test]
    fn test_top_10_only_counts_first_ten() {
        let positions = equal_positions(20);

        assert_eq!(top_n_concentration(&positions, TOP_N), 50.0);
    }

    #[test]
    fn test_top_10_never_increases_when_diluted() {
        let mut previous = f64::MAX;
        for count in 1..=40 {
            let concentration = top_n_concentration(&equal_positions(count), TOP_N);
            assert!(
                concentration <= previous,
                "{} tickers gave {} after {}",
                count,
                concentration,
                previous
            );
            previous = concentration;
        }
    }

    #[test]
    fn test_largest_sector_and_region() {
        let positions = vec![
            position("A", "Tech", "US", 500.0, 50.0),
            position("B", "Energy", "France", 300.0, 30.0),
            position("C", "Energy", "France", 200.0, 20.0),
        ];

        let summary = summarize(&positions);

        let sector = summary.largest_sector.unwrap();
        assert_eq!(sector.label, "Energy");
        assert_eq!(sector.weight_pct, 50.0);
        let region = summary.largest_region.unwrap();
        assert_eq!(region.label, "France");
    }

    #[test]
    fn test_largest_group_tie_takes_first_label() {
        let positions = vec![
            position("A", "Utilities", "US", 500.0, 50.0),
            position("B", "Energy", "US", 500.0, 50.0),
        ];

        assert_eq!(largest_group(&positions, Dimension::Sector).unwrap().label, "Energy");
    }

    #[test]
    fn test_empty_portfolio_has_no_largest_group() {
        let summary = summarize(&[]);

        assert_eq!(summary.top_10_concentration, 0.0);
        assert!(summary.largest_sector.is_none());
        assert!(summary.largest_region.is_none());
    }

    #[test]
    fn test_zero_valued_positions_have_no_largest_group() {
        let positions = vec![
            position("A", "Tech", "US", 0.0, 0.0),
            position("B", "Energy", "France", 0.0, 0.0),
        ];

        let summary = summarize(&positions);

        assert_eq!(summary.top_10_concentration, 0.0);
        assert!(summary.largest_sector.is_none());
        assert!(summary.largest_region.is_none());
    }

    #[test]
    fn test_breakdown_sorted_by_value() {
        let positions = vec![
            position("A", "Tech", "US", 100.0, 10.0),
            position("B", "Energy", "France", 600.0, 60.0),
            position("C", "Tech", "US", 300.0, 30.0),
        ];

        let sectors = breakdown(&positions, Dimension::Sector);

        assert_eq!(sectors.len(), 2);
        assert_eq!(sectors[0].label, "Energy");
        assert_eq!(sectors[1].label, "Tech");
        assert_eq!(sectors[1].value, 400.0);
        assert_eq!(sectors[1].weight_pct, 40.0);
    }
}
