use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::alerts::controllers::alert_controller;
use crate::modules::catalog::services::CatalogService;

/// Query parameters for product search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
}

/// List all products
/// GET /products
pub async fn list_products(
    service: web::Data<Arc<CatalogService>>,
) -> Result<HttpResponse, AppError> {
    let products = service.list().await?;
    Ok(HttpResponse::Ok().json(products))
}

/// Search products by name or category
/// GET /products/search?q=&category=
pub async fn search_products(
    service: web::Data<Arc<CatalogService>>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let products = service
        .search(&query.q, query.category.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(products))
}

/// Get product by ID
/// GET /products/{id}
pub async fn get_product(
    service: web::Data<Arc<CatalogService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let product = service.get(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Configure catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(list_products))
            .route("/search", web::get().to(search_products))
            .route("/{id}", web::get().to(get_product))
            // Same-category fallback for out-of-stock products
            .route(
                "/{id}/alternatives",
                web::get().to(alert_controller::alternatives),
            ),
    );
}
