use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::models::{Catalog, FundWeightRow, StockRow};

/// Reads both reference tables. Any unreadable file or malformed row fails the whole load.
pub fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    let funds: Vec<FundWeightRow> = read_table(&config.funds_path())?;
    let stocks: Vec<StockRow> = read_table(&config.stocks_path())?;

    tracing::debug!(
        "Loaded {} fund rows and {} stock rows from {:?}",
        funds.len(),
        stocks.len(),
        config.data_dir
    );

    Ok(Catalog::new(funds, stocks))
}

pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file_content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;

    parse_table(file_content.as_bytes())
        .with_context(|| format!("Failed to parse file: {:?}", path))
}

pub fn parse_table<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .deserialize::<T>()
        .enumerate()
        // Line numbers are 1-based and skip the header row
        .map(|(line_num, row)| row.with_context(|| format!("Line {}: failed to parse CSV row", line_num + 2)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_fund_rows_without_name_column() {
        let csv = "Fund,Ticker,Sector,Asset Class,Location,Weight (%)\n\
                   World,AAPL,Information Technology,Equity,United States,4.5\n";

        let rows: Vec<FundWeightRow> = parse_table(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ticker, "AAPL");
        assert_eq!(rows[0].name, "");
        assert_eq!(rows[0].weight_pct, 4.5);
    }

    #[test]
    fn test_parse_reports_bad_line() {
        let csv = "Name,Ticker,Sector,Asset Class,Location\n\
                   Apple,AAPL,Information Technology,Equity,United States\n\
                   Broken,BRK\n";

        let err = parse_table::<StockRow, _>(csv.as_bytes()).unwrap_err();

        assert!(format!("{:#}", err).contains("Line 3"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let config = AppConfig {
            data_dir: PathBuf::from("does-not-exist"),
            ..AppConfig::default()
        };

        assert!(load_catalog(&config).is_err());
    }

    #[test]
    fn test_load_shipped_reference_tables() {
        let config = AppConfig {
            data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
            ..AppConfig::default()
        };

        let catalog = load_catalog(&config).unwrap();

        assert_eq!(catalog.fund_names().len(), 4);
        assert!(catalog.has_stock("Apple"));
    }
}
