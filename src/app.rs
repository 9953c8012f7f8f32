//! Application wiring: builds the service graph over injected repositories
//! and registers every route. `main` and the HTTP test suites share this so
//! the app under test is the app that ships.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::modules::alerts::controllers::alert_controller;
use crate::modules::alerts::services::AlertService;
use crate::modules::billing::controllers::billing_controller;
use crate::modules::billing::repositories::{
    BillRepository, CartRepository, InMemoryBills, InMemoryCarts,
};
use crate::modules::billing::services::{CartService, CheckoutService};
use crate::modules::catalog::controllers::catalog_controller;
use crate::modules::catalog::repositories::{CatalogRepository, InMemoryCatalog};
use crate::modules::catalog::services::CatalogService;
use crate::modules::customers::controllers::customer_controller;
use crate::modules::customers::repositories::{CustomerRepository, InMemoryCustomers};
use crate::modules::customers::services::CustomerService;
use crate::modules::invoices::services::InvoiceService;
use crate::modules::reports::controllers::report_controller;
use crate::modules::reports::services::ReportService;

/// The assembled service graph
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog_service: Arc<CatalogService>,
    pub customer_service: Arc<CustomerService>,
    pub cart_service: Arc<CartService>,
    pub checkout_service: Arc<CheckoutService>,
    pub invoice_service: Arc<InvoiceService>,
    pub alert_service: Arc<AlertService>,
    pub report_service: Arc<ReportService>,
}

impl AppState {
    /// Wire the services over in-memory stores pre-loaded with the standard
    /// seed data
    pub fn seeded(config: Config) -> Self {
        Self::with_stores(
            config,
            Arc::new(InMemoryCatalog::seeded()),
            Arc::new(InMemoryCustomers::seeded()),
            Arc::new(InMemoryBills::seeded()),
        )
    }

    /// Wire the services over explicit stores; used by tests to control the
    /// starting state
    pub fn with_stores(
        config: Config,
        catalog: Arc<dyn CatalogRepository>,
        customers: Arc<dyn CustomerRepository>,
        bills: Arc<dyn BillRepository>,
    ) -> Self {
        let carts: Arc<dyn CartRepository> = Arc::new(InMemoryCarts::new());

        // One lock serializes cart mutations and checkout, so finalization
        // cannot interleave with a concurrent cart edit
        let session_lock = Arc::new(Mutex::new(()));

        let catalog_service = Arc::new(CatalogService::new(catalog.clone()));
        let customer_service = Arc::new(CustomerService::new(customers.clone()));
        let cart_service = Arc::new(CartService::new(
            carts.clone(),
            catalog.clone(),
            session_lock.clone(),
            config.billing.tax_rate,
        ));
        let checkout_service = Arc::new(CheckoutService::new(
            carts,
            bills.clone(),
            customers.clone(),
            session_lock,
            config.billing.tax_rate,
        ));
        let invoice_service = Arc::new(InvoiceService::new(
            bills.clone(),
            customers.clone(),
            config.billing.due_days,
        ));
        let alert_service = Arc::new(AlertService::new(catalog.clone()));
        let report_service = Arc::new(ReportService::new(
            catalog,
            bills,
            customers,
            alert_service.clone(),
            config.billing.expiry_alert_days,
        ));

        Self {
            config,
            catalog_service,
            customer_service,
            cart_service,
            checkout_service,
            invoice_service,
            alert_service,
            report_service,
        }
    }
}

/// Register shared state and every route on an actix App
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state.config.billing.clone()))
            .app_data(web::Data::new(state.catalog_service))
            .app_data(web::Data::new(state.customer_service))
            .app_data(web::Data::new(state.cart_service))
            .app_data(web::Data::new(state.checkout_service))
            .app_data(web::Data::new(state.invoice_service))
            .app_data(web::Data::new(state.alert_service))
            .app_data(web::Data::new(state.report_service))
            .service(
                web::scope("/api")
                    .configure(catalog_controller::configure)
                    .configure(customer_controller::configure)
                    .configure(billing_controller::configure)
                    .configure(alert_controller::configure)
                    .configure(report_controller::configure),
            )
            .route("/health", web::get().to(health_check));
    }
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "pharmadesk"
    }))
}
