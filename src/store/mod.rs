pub mod cookies;
pub mod reference_tables;
