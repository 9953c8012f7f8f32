use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::customers::services::{CreateCustomerRequest, CustomerService};

/// List all customers
/// GET /customers
pub async fn list_customers(
    service: web::Data<Arc<CustomerService>>,
) -> Result<HttpResponse, AppError> {
    let customers = service.list().await?;
    Ok(HttpResponse::Ok().json(customers))
}

/// Get customer by ID
/// GET /customers/{id}
pub async fn get_customer(
    service: web::Data<Arc<CustomerService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let customer = service.get(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(customer))
}

/// Register a new customer
/// POST /customers
pub async fn create_customer(
    service: web::Data<Arc<CustomerService>>,
    request: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let customer = service.add(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(customer))
}

/// Configure customer routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .route("", web::get().to(list_customers))
            .route("", web::post().to(create_customer))
            .route("/{id}", web::get().to(get_customer)),
    );
}
