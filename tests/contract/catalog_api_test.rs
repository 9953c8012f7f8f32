// Contract tests for catalog, customer, alert, and report endpoints

use actix_web::{test, App};
use serde_json::{json, Value};

use pharmadesk::app::{self, AppState};
use pharmadesk::config::Config;

macro_rules! seeded_app {
    () => {
        test::init_service(
            App::new().configure(app::configure(AppState::seeded(Config::default()))),
        )
        .await
    };
}

#[actix_web::test]
async fn test_list_products_returns_full_catalog() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/api/products").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let products: Value = test::read_body_json(resp).await;
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 8);
    assert_eq!(products[0]["id"], "1");
    assert_eq!(products[0]["name"], "Amoxicillin 500mg");
    assert_eq!(products[0]["price"], "12.99");
    assert_eq!(products[0]["stock"], 120);
}

#[actix_web::test]
async fn test_search_matches_name_case_insensitively() {
    let app = seeded_app!();

    let req = test::TestRequest::get()
        .uri("/api/products/search?q=PARA")
        .to_request();
    let products: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Paracetamol 500mg");
}

#[actix_web::test]
async fn test_search_filters_by_category() {
    let app = seeded_app!();

    let req = test::TestRequest::get()
        .uri("/api/products/search?category=Cardiovascular")
        .to_request();
    let products: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let ids: Vec<&str> = products
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["5", "8"]);
}

#[actix_web::test]
async fn test_get_unknown_product_is_not_found() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/api/products/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 404);
}

#[actix_web::test]
async fn test_alternatives_lists_same_category_in_stock_peers() {
    let app = seeded_app!();

    let req = test::TestRequest::get()
        .uri("/api/products/5/alternatives")
        .to_request();
    let alternatives: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let alternatives = alternatives.as_array().unwrap();
    assert_eq!(alternatives.len(), 1);
    assert_eq!(alternatives[0]["id"], "8");
    assert_eq!(alternatives[0]["category"], "Cardiovascular");
}

#[actix_web::test]
async fn test_alternatives_empty_when_no_peers() {
    let app = seeded_app!();

    // Only product in the Allergy category
    let req = test::TestRequest::get()
        .uri("/api/products/3/alternatives")
        .to_request();
    let alternatives: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(alternatives.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_low_stock_alerts_flag_depleted_products() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/api/alerts/low-stock").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let alerts: Value = test::read_body_json(resp).await;
    let alerts = alerts.as_array().unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0]["product"]["id"], "3");
    assert_eq!(alerts[0]["severity"], "critical");
    assert_eq!(alerts[1]["product"]["id"], "8");
    assert_eq!(alerts[1]["severity"], "critical");
}

#[actix_web::test]
async fn test_expiring_alerts_shape_and_validation() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/api/alerts/expiring").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let alerts: Value = test::read_body_json(resp).await;
    for alert in alerts.as_array().unwrap() {
        assert!(alert["product"]["id"].is_string());
        assert!(alert["days_to_expiry"].is_i64());
        assert!(matches!(
            alert["severity"].as_str().unwrap(),
            "critical" | "warning" | "attention"
        ));
    }

    let req = test::TestRequest::get()
        .uri("/api/alerts/expiring?days=-1")
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_create_customer_assigns_sequential_id() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(json!({
            "name": "Sarah Davis",
            "email": "sarah.d@email.com",
            "phone": "555-010-4466",
            "address": "321 Elm St, Springfield"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let customer: Value = test::read_body_json(resp).await;
    assert_eq!(customer["id"], "4");
    assert_eq!(customer["name"], "Sarah Davis");

    let req = test::TestRequest::get().uri("/api/customers").to_request();
    let customers: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(customers.as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_create_customer_rejects_malformed_email() {
    let app = seeded_app!();

    let req = test::TestRequest::post()
        .uri("/api/customers")
        .set_json(json!({
            "name": "Sarah Davis",
            "email": "not-an-email",
            "phone": "555-010-4466",
            "address": "321 Elm St, Springfield"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_dashboard_summary_counts_seeded_state() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/api/reports/summary").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let summary: Value = test::read_body_json(resp).await;
    assert_eq!(summary["total_products"], 8);
    assert_eq!(summary["low_stock_count"], 2);
    assert_eq!(summary["bill_count"], 3);
    assert_eq!(summary["revenue"], "62.18");
    assert_eq!(summary["pending_count"], 1);
    assert_eq!(summary["customer_count"], 3);
    assert!(summary["expiring_soon_count"].is_u64());
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = seeded_app!();

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "pharmadesk");
}
