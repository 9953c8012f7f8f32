// Reports module: dashboard aggregation over the other stores

pub mod controllers;
pub mod models;
pub mod services;

pub use models::DashboardSummary;
pub use services::ReportService;
