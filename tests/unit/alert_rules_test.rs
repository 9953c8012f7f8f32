// Alert derivation rules: low-stock thresholds, the expiry window, and the
// alternatives lookup, exercised over hand-built catalogs with dates pinned
// relative to an explicit reference day.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use pharmadesk::alerts::services::alert_service::AlertService;
use pharmadesk::alerts::{ExpirySeverity, StockSeverity};
use pharmadesk::catalog::models::Product;
use pharmadesk::catalog::repositories::InMemoryCatalog;
use rust_decimal::Decimal;

fn product(id: &str, category: &str, stock: u32, reorder: u32, expiry: NaiveDate) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        category: category.to_string(),
        description: String::new(),
        batch_no: format!("BN{}", id),
        expiry_date: expiry,
        stock,
        price: Decimal::new(899, 2),
        manufacturer: "AllergyCare".to_string(),
        location: "Shelf C-03".to_string(),
        reorder_level: reorder,
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

fn far_future() -> NaiveDate {
    today() + Duration::days(3650)
}

#[tokio::test]
async fn test_low_stock_exact_subset() {
    let catalog = Arc::new(InMemoryCatalog::new(vec![
        product("1", "A", 8, 20, far_future()),
        product("2", "A", 20, 20, far_future()), // boundary: included
        product("3", "A", 21, 20, far_future()), // above: excluded
        product("4", "A", 0, 0, far_future()),   // boundary at zero: included
    ]));

    let alerts = AlertService::new(catalog).low_stock().await.unwrap();
    let ids: Vec<_> = alerts.iter().map(|a| a.product.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "4"]);
}

#[tokio::test]
async fn test_stock_eight_reorder_twenty_is_critical() {
    let catalog = Arc::new(InMemoryCatalog::new(vec![product(
        "1",
        "A",
        8,
        20,
        far_future(),
    )]));

    let alerts = AlertService::new(catalog).low_stock().await.unwrap();
    assert_eq!(alerts.len(), 1);
    // 8 <= 20 / 2
    assert_eq!(alerts[0].severity, StockSeverity::Critical);
}

#[tokio::test]
async fn test_expiry_window_excludes_expired_and_beyond_horizon() {
    let catalog = Arc::new(InMemoryCatalog::new(vec![
        product("expired", "A", 10, 5, today() - Duration::days(10)),
        product("in-window", "A", 10, 5, today() + Duration::days(45)),
        product("beyond", "A", 10, 5, today() + Duration::days(120)),
    ]));

    let alerts = AlertService::new(catalog)
        .soon_expiring_as_of(90, today())
        .await
        .unwrap();
    let ids: Vec<_> = alerts.iter().map(|a| a.product.id.as_str()).collect();
    assert_eq!(ids, vec!["in-window"]);
}

#[tokio::test]
async fn test_expiry_severity_bands() {
    let catalog = Arc::new(InMemoryCatalog::new(vec![
        product("c", "A", 10, 5, today() + Duration::days(30)),
        product("w", "A", 10, 5, today() + Duration::days(31)),
        product("w2", "A", 10, 5, today() + Duration::days(60)),
        product("a", "A", 10, 5, today() + Duration::days(61)),
    ]));

    let alerts = AlertService::new(catalog)
        .soon_expiring_as_of(90, today())
        .await
        .unwrap();
    let severities: Vec<_> = alerts.iter().map(|a| a.severity).collect();
    assert_eq!(
        severities,
        vec![
            ExpirySeverity::Critical,
            ExpirySeverity::Warning,
            ExpirySeverity::Warning,
            ExpirySeverity::Attention,
        ]
    );
}

#[tokio::test]
async fn test_alternatives_never_include_self_or_sold_out() {
    let catalog = Arc::new(InMemoryCatalog::new(vec![
        product("1", "Allergy", 0, 20, far_future()),
        product("2", "Allergy", 12, 20, far_future()),
        product("3", "Allergy", 0, 20, far_future()),
        product("4", "Allergy", 3, 20, far_future()),
        product("5", "Allergy", 9, 20, far_future()),
        product("6", "Allergy", 2, 20, far_future()),
    ]));
    let service = AlertService::new(catalog);

    let alternatives = service.alternatives_for("1", 3).await.unwrap();

    assert_eq!(alternatives.len(), 3);
    assert!(alternatives.iter().all(|p| p.id != "1"));
    assert!(alternatives.iter().all(|p| p.stock > 0));
    // First-match-wins in catalog order
    let ids: Vec<_> = alternatives.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "4", "5"]);
}

#[tokio::test]
async fn test_alternatives_empty_when_no_in_stock_peers() {
    let catalog = Arc::new(InMemoryCatalog::new(vec![
        product("1", "Diabetes", 0, 20, far_future()),
        product("2", "Diabetes", 0, 20, far_future()),
        product("3", "Vitamins", 50, 20, far_future()),
    ]));

    let alternatives = AlertService::new(catalog)
        .alternatives_for("1", 3)
        .await
        .unwrap();
    assert!(alternatives.is_empty());
}
