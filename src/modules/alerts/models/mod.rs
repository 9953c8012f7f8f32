pub mod alert;

pub use alert::{ExpiryAlert, ExpirySeverity, StockAlert, StockSeverity};
