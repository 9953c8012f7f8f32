// Alerts module: low-stock, expiry, and alternative-product derivation

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ExpiryAlert, ExpirySeverity, StockAlert, StockSeverity};
pub use services::{AlertService, AlternativeRanker, CatalogOrderRanker};
