use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::catalog::models::Product;
use crate::modules::catalog::repositories::CatalogRepository;

/// Service for catalog lookups and search
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// All products in catalog order
    pub async fn list(&self) -> Result<Vec<Product>> {
        self.catalog.list().await
    }

    /// Single product by ID, or `NotFound`
    pub async fn get(&self, id: &str) -> Result<Product> {
        self.catalog
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {}", id)))
    }

    /// Case-insensitive substring search over product name and category,
    /// optionally restricted to a single category
    pub async fn search(&self, query: &str, category: Option<&str>) -> Result<Vec<Product>> {
        let needle = query.to_lowercase();
        let products = self.catalog.list().await?;

        Ok(products
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .filter(|p| category.map_or(true, |c| p.category.eq_ignore_ascii_case(c)))
            .collect())
    }
}
