use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::reports::services::ReportService;

/// Storewide dashboard summary
/// GET /reports/summary
pub async fn summary(
    service: web::Data<Arc<ReportService>>,
) -> Result<HttpResponse, AppError> {
    let summary = service.summary().await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// Configure report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/reports").route("/summary", web::get().to(summary)));
}
