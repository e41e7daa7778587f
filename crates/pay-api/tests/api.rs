//! Gateway HTTP API against a mock Slick-Pay processor.

use axum_test::TestServer;
use pay_api::{create_router, AppConfig, AppState};
use pay_core::{ApiMode, ConfigLookup};
use pay_slickpay::{SlickpayConfig, SlickpayGateway};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        system_url: "https://billing.example.dz".to_string(),
        module_name: "slickpay".to_string(),
        pay_now_label: "Payer maintenant".to_string(),
        environment: "test".to_string(),
    }
}

fn test_server(processor: &MockServer) -> TestServer {
    let settings: HashMap<String, String> = [
        ("publicKey", "pk_test_123"),
        ("bankAccount", "acc-uuid"),
        ("testMode", "on"),
        ("apiBaseUrl", processor.uri().as_str()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let gateway = SlickpayGateway::new(
        SlickpayConfig::new("pk_test_123", "acc-uuid", ApiMode::Test).with_api_base_url(processor.uri()),
    )
    .unwrap();

    let settings: Arc<dyn ConfigLookup> = Arc::new(settings);
    let state = AppState::with_strategy(app_config(), settings, Arc::new(gateway));

    TestServer::new(create_router(state)).unwrap()
}

fn checkout_body(currency: &str) -> Value {
    json!({
        "invoice_id": "1024",
        "description": "Invoice #1024",
        "amount": 4500.0,
        "currency": currency,
        "customer": {
            "first_name": "Amine",
            "last_name": "Benali",
            "email": "amine@example.dz"
        }
    })
}

#[tokio::test]
async fn test_health() {
    let processor = MockServer::start().await;
    let server = test_server(&processor);

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["provider"], "slickpay");
}

#[tokio::test]
async fn test_metadata() {
    let processor = MockServer::start().await;
    let server = test_server(&processor);

    let body: Value = server.get("/api/v1/gateway/metadata").await.json();
    assert_eq!(body["DisplayName"], "CIB/EDAHABIA (Slick-Pay)");
    assert_eq!(body["APIVersion"], "1.1");
    assert_eq!(body["DisableLocalCreditCardInput"], true);
}

#[tokio::test]
async fn test_config_fields_list_accounts() {
    let processor = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"uuid": "9a1b", "title": "CCP principal"}]
        })))
        .expect(1)
        .mount(&processor)
        .await;

    let server = test_server(&processor);
    let fields: Value = server.get("/api/v1/gateway/config").await.json();

    let bank = &fields[2];
    assert_eq!(bank["name"], "bankAccount");
    assert_eq!(bank["type"], "dropdown");
    assert_eq!(bank["options"], json!([{"value": "9a1b", "label": "CCP principal"}]));
}

#[tokio::test]
async fn test_checkout_redirect_fills_host_urls() {
    let processor = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/invoices"))
        .and(body_partial_json(json!({
            "url": "https://billing.example.dz/viewinvoice.php?id=1024",
            "webhook_url": "https://billing.example.dz/modules/gateways/callback/slickpay.php"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://devapi.slick-pay.com/checkout/118"
        })))
        .expect(1)
        .mount(&processor)
        .await;

    let server = test_server(&processor);
    let response = server.post("/api/v1/checkout").json(&checkout_body("DZD")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"outcome": "redirect", "url": "https://devapi.slick-pay.com/checkout/118"})
    );
}

#[tokio::test]
async fn test_checkout_link_html() {
    let processor = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/invoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://devapi.slick-pay.com/checkout/118"
        })))
        .mount(&processor)
        .await;

    let server = test_server(&processor);
    let html = server
        .post("/api/v1/checkout/link")
        .json(&checkout_body("DZD"))
        .await
        .text();

    assert!(html.contains(r#"action="https://devapi.slick-pay.com/checkout/118""#));
    assert!(html.contains(r#"value="Payer maintenant""#));
}

#[tokio::test]
async fn test_checkout_wrong_currency_skips_processor() {
    let processor = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": "https://x"})))
        .expect(0)
        .mount(&processor)
        .await;

    let server = test_server(&processor);
    let body: Value = server
        .post("/api/v1/checkout")
        .json(&checkout_body("EUR"))
        .await
        .json();

    assert_eq!(body, json!({"outcome": "currency_notice"}));
}

#[tokio::test]
async fn test_checkout_processor_error_message() {
    let processor = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/invoices"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The amount must be at least 100."
        })))
        .mount(&processor)
        .await;

    let server = test_server(&processor);
    let response = server.post("/api/v1/checkout").json(&checkout_body("DZD")).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"outcome": "error", "message": "The amount must be at least 100."})
    );
}

#[tokio::test]
async fn test_checkout_checks_currency_only() {
    let processor = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": "https://x"})))
        .expect(0)
        .mount(&processor)
        .await;

    let server = test_server(&processor);

    let mut zero_amount = checkout_body("EUR");
    zero_amount["amount"] = json!(0.0);

    let mut no_invoice = checkout_body("EUR");
    no_invoice["invoice_id"] = json!("");

    for body in [zero_amount, no_invoice] {
        let response = server.post("/api/v1/checkout").json(&body).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>(), json!({"outcome": "currency_notice"}));
    }
}

#[tokio::test]
async fn test_checkout_forwards_amount_unchecked() {
    let processor = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/invoices"))
        .and(body_partial_json(json!({"amount": -5.0})))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The amount must be at least 100."
        })))
        .expect(1)
        .mount(&processor)
        .await;

    let server = test_server(&processor);

    let mut body = checkout_body("DZD");
    body["amount"] = json!(-5.0);

    let response = server.post("/api/v1/checkout").json(&body).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({"outcome": "error", "message": "The amount must be at least 100."})
    );
}

#[tokio::test]
async fn test_transaction_found() {
    let processor = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/invoices/118"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 118,
            "amount": "4500.00",
            "date": "2024-03-01T10:15:00Z",
            "status": "paid",
            "transaction": {"serial": "SP-0001"}
        })))
        .mount(&processor)
        .await;

    let server = test_server(&processor);
    let body: Value = server.get("/api/v1/transactions/118").await.json();

    assert_eq!(body["transaction_id"], "118");
    assert_eq!(body["amount"], json!(4500.0));
    assert_eq!(body["status"], "paid");
    assert_eq!(body["created"], "2024-03-01T10:15:00Z");
    assert_eq!(body["additional_data"], json!({"serial": "SP-0001"}));
}

#[tokio::test]
async fn test_transaction_missing_is_empty_object() {
    let processor = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/invoices/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
        .mount(&processor)
        .await;

    let server = test_server(&processor);
    let response = server.get("/api/v1/transactions/404").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body, json!({}));
}
