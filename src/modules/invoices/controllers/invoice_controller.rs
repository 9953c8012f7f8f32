use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::invoices::services::InvoiceService;

/// Compose the invoice view for a bill
/// GET /bills/{id}/invoice
///
/// Registered under the bills scope by the billing controller.
pub async fn get_invoice(
    service: web::Data<Arc<InvoiceService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let invoice = service.invoice_for(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(invoice))
}
