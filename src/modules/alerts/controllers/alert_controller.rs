use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::BillingConfig;
use crate::core::error::AppError;
use crate::modules::alerts::services::{AlertService, DEFAULT_MAX_ALTERNATIVES};

/// Query parameters for the expiring-stock alert
#[derive(Debug, Deserialize)]
pub struct ExpiringQuery {
    /// Horizon in days; server default when omitted
    pub days: Option<i64>,
}

/// Query parameters for the alternatives lookup
#[derive(Debug, Deserialize)]
pub struct AlternativesQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_MAX_ALTERNATIVES
}

/// Products at or below their reorder level
/// GET /alerts/low-stock
pub async fn low_stock(
    service: web::Data<Arc<AlertService>>,
) -> Result<HttpResponse, AppError> {
    let alerts = service.low_stock().await?;
    Ok(HttpResponse::Ok().json(alerts))
}

/// Products expiring within the horizon
/// GET /alerts/expiring?days=
pub async fn soon_expiring(
    service: web::Data<Arc<AlertService>>,
    config: web::Data<BillingConfig>,
    query: web::Query<ExpiringQuery>,
) -> Result<HttpResponse, AppError> {
    let days = query.days.unwrap_or(config.expiry_alert_days);
    if days < 0 {
        return Err(AppError::validation("days must be non-negative"));
    }

    let alerts = service.soon_expiring(days).await?;
    Ok(HttpResponse::Ok().json(alerts))
}

/// In-stock same-category alternatives for a product
/// GET /products/{id}/alternatives?limit=
pub async fn alternatives(
    service: web::Data<Arc<AlertService>>,
    path: web::Path<String>,
    query: web::Query<AlternativesQuery>,
) -> Result<HttpResponse, AppError> {
    let alternatives = service
        .alternatives_for(&path.into_inner(), query.limit)
        .await?;
    Ok(HttpResponse::Ok().json(alternatives))
}

/// Configure alert routes
///
/// The alternatives lookup is registered under the products scope by the
/// catalog controller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/alerts")
            .route("/low-stock", web::get().to(low_stock))
            .route("/expiring", web::get().to(soon_expiring)),
    );
}
