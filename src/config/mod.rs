use std::env;

use rust_decimal::Decimal;

use crate::core::{AppError, Result};

pub mod billing;
pub mod server;

pub use billing::BillingConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub billing: BillingConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            billing: BillingConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.billing.tax_rate < Decimal::ZERO || self.billing.tax_rate > Decimal::ONE {
            return Err(AppError::Configuration(
                "Tax rate must be between 0 and 1".to_string(),
            ));
        }

        if self.billing.due_days <= 0 {
            return Err(AppError::Configuration(
                "Due days must be greater than 0".to_string(),
            ));
        }

        if self.billing.expiry_alert_days <= 0 {
            return Err(AppError::Configuration(
                "Expiry alert horizon must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                env: "development".to_string(),
                log_level: "info".to_string(),
            },
            server: ServerConfig::new("127.0.0.1".to_string(), 8080),
            billing: BillingConfig::default(),
        }
    }
}
