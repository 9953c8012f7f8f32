pub mod alert_service;
pub mod ranking;

pub use alert_service::{AlertService, DEFAULT_MAX_ALTERNATIVES};
pub use ranking::{AlternativeRanker, CatalogOrderRanker, PriceAscendingRanker};
