// End-to-end checkout flows at the service layer

use std::sync::Arc;

use chrono::Utc;
use rust_decimal_macros::dec;
use tokio::sync::Mutex;

use pharmadesk::alerts::services::AlertService;
use pharmadesk::billing::models::BillStatus;
use pharmadesk::billing::repositories::{InMemoryBills, InMemoryCarts};
use pharmadesk::billing::services::{CartService, CheckoutRequest, CheckoutService};
use pharmadesk::catalog::repositories::{seed_products, InMemoryCatalog};
use pharmadesk::config::BillingConfig;
use pharmadesk::core::currency::format_usd;
use pharmadesk::core::AppError;
use pharmadesk::customers::repositories::InMemoryCustomers;
use pharmadesk::invoices::services::InvoiceService;

struct Harness {
    carts: CartService,
    checkout: CheckoutService,
    invoices: InvoiceService,
    alerts: AlertService,
}

fn harness_with_products(products: Vec<pharmadesk::catalog::models::Product>) -> Harness {
    let billing = BillingConfig::default();
    let catalog: Arc<InMemoryCatalog> = Arc::new(InMemoryCatalog::new(products));
    let customers: Arc<InMemoryCustomers> = Arc::new(InMemoryCustomers::seeded());
    let bills: Arc<InMemoryBills> = Arc::new(InMemoryBills::seeded());
    let cart_store: Arc<InMemoryCarts> = Arc::new(InMemoryCarts::new());
    let session_lock = Arc::new(Mutex::new(()));

    Harness {
        carts: CartService::new(
            cart_store.clone(),
            catalog.clone(),
            session_lock.clone(),
            billing.tax_rate,
        ),
        checkout: CheckoutService::new(
            cart_store,
            bills.clone(),
            customers.clone(),
            session_lock,
            billing.tax_rate,
        ),
        invoices: InvoiceService::new(bills, customers, billing.due_days),
        alerts: AlertService::new(catalog),
    }
}

fn harness() -> Harness {
    harness_with_products(seed_products())
}

#[tokio::test]
async fn test_full_purchase_flow_from_cart_to_invoice() {
    let h = harness();

    let cart = h.carts.create_cart().await.unwrap();
    h.carts.add_item(&cart.id, "1").await.unwrap();
    let view = h.carts.add_item(&cart.id, "1").await.unwrap();

    assert_eq!(view.lines.len(), 1);
    assert_eq!(view.lines[0].quantity, 2);
    assert_eq!(view.subtotal, dec!(25.98));
    assert_eq!(view.tax, dec!(2.598));
    assert_eq!(view.total, dec!(28.578));
    assert_eq!(format_usd(view.total), "$28.58");

    let bill = h
        .checkout
        .checkout(
            &cart.id,
            CheckoutRequest {
                customer_id: "1".to_string(),
                payment_method: Some("Credit Card".to_string()),
            },
        )
        .await
        .unwrap();

    let today = Utc::now().date_naive();
    assert_eq!(bill.id, "B004");
    assert_eq!(bill.status, BillStatus::Paid);
    assert_eq!(bill.date, today);
    assert_eq!(bill.customer_name, "John Smith");
    assert_eq!(bill.payment_method, "Credit Card");
    assert_eq!(bill.subtotal, dec!(25.98));
    assert_eq!(bill.total, dec!(28.578));

    // The cart session no longer exists
    assert!(matches!(
        h.carts.get_cart(&cart.id).await,
        Err(AppError::NotFound(_))
    ));

    // An invoice derives from the finalized bill and is stable
    let invoice = h.invoices.invoice_for("B004").await.unwrap();
    let expected_number = format!("INV-{}-0004", today.format("%Y%m%d"));
    assert_eq!(invoice.invoice_number, expected_number);
    let due = today + chrono::Duration::days(30);
    assert_eq!(invoice.due_date, due.format("%Y-%m-%d").to_string());
    assert_eq!(invoice.customer.name, "John Smith");
    assert_eq!(invoice.total_display, "$28.58");

    let again = h.invoices.invoice_for("B004").await.unwrap();
    assert_eq!(invoice, again);
}

#[tokio::test]
async fn test_out_of_stock_product_suggests_alternatives() {
    let mut products = seed_products();
    products[4].stock = 0; // Atorvastatin, Cardiovascular

    let h = harness_with_products(products);
    let cart = h.carts.create_cart().await.unwrap();

    let err = h.carts.add_item(&cart.id, "5").await.unwrap_err();
    assert!(matches!(err, AppError::OutOfStock(_)));

    // Cart untouched after the rejected add
    let view = h.carts.get_cart(&cart.id).await.unwrap();
    assert!(view.lines.is_empty());

    // Same-category in-stock replacement is offered
    let alternatives = h.alerts.alternatives_for("5", 3).await.unwrap();
    assert_eq!(alternatives.len(), 1);
    assert_eq!(alternatives[0].id, "8");
}

#[tokio::test]
async fn test_quantity_edits_rebalance_totals_before_checkout() {
    let h = harness();

    let cart = h.carts.create_cart().await.unwrap();
    h.carts.add_item(&cart.id, "2").await.unwrap();
    h.carts.add_item(&cart.id, "7").await.unwrap();

    let view = h.carts.set_quantity(&cart.id, "2", 3).await.unwrap();
    assert_eq!(view.subtotal, dec!(5.49) * dec!(3) + dec!(9.99));

    let view = h.carts.remove_item(&cart.id, "7").await.unwrap();
    assert_eq!(view.subtotal, dec!(16.47));
    assert_eq!(view.total, dec!(16.47) * dec!(1.10));

    let bill = h
        .checkout
        .checkout(
            &cart.id,
            CheckoutRequest {
                customer_id: "2".to_string(),
                payment_method: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(bill.payment_method, "Cash");
    assert_eq!(bill.items.len(), 1);
    assert_eq!(bill.items[0].quantity, 3);
}

#[tokio::test]
async fn test_failed_checkout_leaves_cart_and_history_intact() {
    let h = harness();

    let cart = h.carts.create_cart().await.unwrap();
    h.carts.add_item(&cart.id, "1").await.unwrap();

    let err = h
        .checkout
        .checkout(
            &cart.id,
            CheckoutRequest {
                customer_id: "404".to_string(),
                payment_method: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NoCustomer(_)));

    // Cart survives so the sale can be retried
    let view = h.carts.get_cart(&cart.id).await.unwrap();
    assert_eq!(view.lines.len(), 1);

    // No bill was appended
    assert_eq!(h.checkout.list_bills().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_concurrent_checkouts_get_distinct_sequential_ids() {
    let h = harness();

    let cart_a = h.carts.create_cart().await.unwrap();
    let cart_b = h.carts.create_cart().await.unwrap();
    h.carts.add_item(&cart_a.id, "1").await.unwrap();
    h.carts.add_item(&cart_b.id, "2").await.unwrap();

    let request = |customer: &str| CheckoutRequest {
        customer_id: customer.to_string(),
        payment_method: None,
    };

    let (a, b) = tokio::join!(
        h.checkout.checkout(&cart_a.id, request("1")),
        h.checkout.checkout(&cart_b.id, request("2")),
    );

    let mut ids = vec![a.unwrap().id, b.unwrap().id];
    ids.sort();
    assert_eq!(ids, vec!["B004", "B005"]);
}
