use serde::{Deserialize, Serialize};

use crate::modules::catalog::models::Product;

/// Severity of a low-stock condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockSeverity {
    /// Stock at or below half the reorder level
    Critical,
    /// Stock at or below the reorder level
    Low,
}

/// Severity of an approaching expiry date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpirySeverity {
    /// Expires within 30 days
    Critical,
    /// Expires within 60 days
    Warning,
    /// Expires within the alert horizon
    Attention,
}

impl ExpirySeverity {
    /// Classify by days remaining until expiry
    pub fn from_days(days_to_expiry: i64) -> Self {
        if days_to_expiry <= 30 {
            ExpirySeverity::Critical
        } else if days_to_expiry <= 60 {
            ExpirySeverity::Warning
        } else {
            ExpirySeverity::Attention
        }
    }
}

/// A product flagged for replenishment
#[derive(Debug, Clone, Serialize)]
pub struct StockAlert {
    pub product: Product,
    pub severity: StockSeverity,
}

/// A product approaching its expiry date
#[derive(Debug, Clone, Serialize)]
pub struct ExpiryAlert {
    pub product: Product,
    pub days_to_expiry: i64,
    pub severity: ExpirySeverity,
}
