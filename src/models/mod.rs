mod analytics;
mod holding;
mod portfolio;
mod reference;

pub use analytics::{Dimension, GroupAllocation, LargestGroup, PortfolioSummary};
pub use holding::{CatalogResponse, HoldingInput, HoldingLine, PortfolioSelection, AMOUNT_STEP};
pub use portfolio::{ConsolidatedPosition, PortfolioReport};
pub use reference::{Catalog, FundWeightRow, StockRow};
