// Catalog module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Product;
pub use repositories::{CatalogRepository, InMemoryCatalog};
pub use services::CatalogService;
