use std::env;

use rust_decimal::Decimal;

use crate::core::{AppError, Result};

/// Billing policy knobs
///
/// Tax is a flat rate applied uniformly to the cart subtotal; there is no
/// per-category or per-product variation. Invoices fall due a fixed number
/// of calendar days after the bill date.
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Flat sales tax rate as a fraction (0.10 = 10%)
    pub tax_rate: Decimal,
    /// Days until an invoice is due after its issue date
    pub due_days: i64,
    /// Default horizon for the soon-expiring stock alert, in days
    pub expiry_alert_days: i64,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(10, 2),
            due_days: 30,
            expiry_alert_days: 90,
        }
    }
}

impl BillingConfig {
    /// Load billing configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let tax_rate = match env::var("BILLING_TAX_RATE") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::Configuration("Invalid BILLING_TAX_RATE".to_string()))?,
            Err(_) => defaults.tax_rate,
        };

        let due_days = match env::var("BILLING_DUE_DAYS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::Configuration("Invalid BILLING_DUE_DAYS".to_string()))?,
            Err(_) => defaults.due_days,
        };

        let expiry_alert_days = match env::var("EXPIRY_ALERT_DAYS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::Configuration("Invalid EXPIRY_ALERT_DAYS".to_string()))?,
            Err(_) => defaults.expiry_alert_days,
        };

        Ok(Self {
            tax_rate,
            due_days,
            expiry_alert_days,
        })
    }
}
