pub mod alerts;
pub mod billing;
pub mod catalog;
pub mod customers;
pub mod invoices;
pub mod reports;
