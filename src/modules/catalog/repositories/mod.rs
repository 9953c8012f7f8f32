pub mod catalog_repository;

pub use catalog_repository::{seed_products, CatalogRepository, InMemoryCatalog};
