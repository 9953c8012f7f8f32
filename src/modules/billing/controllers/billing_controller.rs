use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::billing::services::{CartService, CheckoutRequest, CheckoutService};
use crate::modules::invoices::controllers::invoice_controller;

/// Request payload for adding a product to a cart
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: String,
}

/// Request payload for updating a line's quantity
#[derive(Debug, Deserialize)]
pub struct SetQuantityRequest {
    pub quantity: i64,
}

/// Open a new cart session
/// POST /carts
pub async fn create_cart(
    service: web::Data<Arc<CartService>>,
) -> Result<HttpResponse, AppError> {
    let cart = service.create_cart().await?;
    Ok(HttpResponse::Created().json(cart))
}

/// Get a cart with running totals
/// GET /carts/{id}
pub async fn get_cart(
    service: web::Data<Arc<CartService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let cart = service.get_cart(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(cart))
}

/// Add one unit of a product to a cart
/// POST /carts/{id}/items
pub async fn add_item(
    service: web::Data<Arc<CartService>>,
    path: web::Path<Uuid>,
    request: web::Json<AddItemRequest>,
) -> Result<HttpResponse, AppError> {
    let cart = service
        .add_item(&path.into_inner(), &request.product_id)
        .await?;
    Ok(HttpResponse::Ok().json(cart))
}

/// Update the quantity of a cart line
/// PUT /carts/{id}/items/{product_id}
pub async fn set_quantity(
    service: web::Data<Arc<CartService>>,
    path: web::Path<(Uuid, String)>,
    request: web::Json<SetQuantityRequest>,
) -> Result<HttpResponse, AppError> {
    let (cart_id, product_id) = path.into_inner();
    let cart = service
        .set_quantity(&cart_id, &product_id, request.quantity)
        .await?;
    Ok(HttpResponse::Ok().json(cart))
}

/// Remove a product's line from a cart
/// DELETE /carts/{id}/items/{product_id}
pub async fn remove_item(
    service: web::Data<Arc<CartService>>,
    path: web::Path<(Uuid, String)>,
) -> Result<HttpResponse, AppError> {
    let (cart_id, product_id) = path.into_inner();
    let cart = service.remove_item(&cart_id, &product_id).await?;
    Ok(HttpResponse::Ok().json(cart))
}

/// Finalize a cart into a bill
/// POST /carts/{id}/checkout
pub async fn checkout(
    service: web::Data<Arc<CheckoutService>>,
    path: web::Path<Uuid>,
    request: web::Json<CheckoutRequest>,
) -> Result<HttpResponse, AppError> {
    let bill = service
        .checkout(&path.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(bill))
}

/// List bill history
/// GET /bills
pub async fn list_bills(
    service: web::Data<Arc<CheckoutService>>,
) -> Result<HttpResponse, AppError> {
    let bills = service.list_bills().await?;
    Ok(HttpResponse::Ok().json(bills))
}

/// Get bill by ID
/// GET /bills/{id}
pub async fn get_bill(
    service: web::Data<Arc<CheckoutService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let bill = service.get_bill(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(bill))
}

/// Configure billing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/carts")
            .route("", web::post().to(create_cart))
            .route("/{id}", web::get().to(get_cart))
            .route("/{id}/items", web::post().to(add_item))
            .route("/{id}/items/{product_id}", web::put().to(set_quantity))
            .route("/{id}/items/{product_id}", web::delete().to(remove_item))
            .route("/{id}/checkout", web::post().to(checkout)),
    )
    .service(
        web::scope("/bills")
            .route("", web::get().to(list_bills))
            .route("/{id}", web::get().to(get_bill))
            // Invoice projection lives under the bill it derives from
            .route("/{id}/invoice", web::get().to(invoice_controller::get_invoice)),
    );
}
