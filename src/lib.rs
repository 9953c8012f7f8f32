//! PharmaDesk Pharmacy Billing & Alerts Service Library
//!
//! This library provides the billing engine (cart accumulation, checkout,
//! invoice composition) and inventory alert derivation behind a JSON API.

pub mod app;
pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::alerts;
pub use modules::billing;
pub use modules::catalog;
pub use modules::customers;
pub use modules::invoices;
pub use modules::reports;
