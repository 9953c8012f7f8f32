// Invoices module: presentation projections over finalized bills

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CustomerDetails, InvoiceLine, InvoiceView};
pub use services::InvoiceService;
