pub mod aggregation_service;
pub mod analytics_service;
pub mod portfolio_service;
pub mod selection_service;
