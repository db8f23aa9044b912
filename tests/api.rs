//! In-process API tests.
//!
//! These run the real router via `tower::ServiceExt::oneshot`. Paths that
//! terminate before any upstream call (the health check, the auth gate,
//! order payload validation) need no doubles; the rest point the clients at
//! a `mockito` server through the base-URL overrides.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

use shopgate::config::{GatewayConfig, ShopifyConfig, WhatsAppConfig};
use shopgate::state::AppState;

const TEST_TOKEN: &str = "test-gateway-token";

fn test_config(api_token: &str) -> GatewayConfig {
    GatewayConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        api_token: SecretString::from(api_token.to_string()),
        shopify: ShopifyConfig {
            store: "test.myshopify.com".to_string(),
            api_version: "2025-01".to_string(),
            admin_token: SecretString::from("admin-token"),
            storefront_token: SecretString::from("storefront-token"),
            api_base: None,
        },
        whatsapp: None,
    }
}

fn test_app(api_token: &str) -> Router {
    shopgate::app(AppState::new(test_config(api_token)))
}

/// App whose Shopify clients talk to a mock server instead of the store.
fn mocked_app(shopify_base: &str, whatsapp: Option<WhatsAppConfig>) -> Router {
    let mut config = test_config(TEST_TOKEN);
    config.shopify.api_base = Some(shopify_base.to_string());
    config.whatsapp = whatsapp;
    shopgate::app(AppState::new(config))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(uri: &str, bearer: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn valid_order() -> Value {
    json!({
        "name": "Jane Doe",
        "phone": "15550001111",
        "address": "12 Elm St",
        "city": "Springfield",
        "productHandle": "widget",
        "quantity": 2
    })
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_is_public() {
    let response = test_app(TEST_TOKEN)
        .oneshot(get("/api/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["ok"], true);
    assert!(body["ts"].is_string());
}

#[tokio::test]
async fn health_ignores_bad_auth_header() {
    let response = test_app(TEST_TOKEN)
        .oneshot(get("/api/health", Some("wrong-token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Auth gate
// =============================================================================

#[tokio::test]
async fn protected_endpoints_reject_missing_token() {
    for uri in ["/api/products", "/api/price/widget", "/api/stock/12345"] {
        let response = test_app(TEST_TOKEN).oneshot(get(uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Unauthorized" }), "{uri}");
    }

    let response = test_app(TEST_TOKEN)
        .oneshot(post_json("/api/orders", None, &valid_order()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_endpoints_reject_wrong_token() {
    let response = test_app(TEST_TOKEN)
        .oneshot(get("/api/products", Some("not-the-token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await, json!({ "error": "Unauthorized" }));
}

#[tokio::test]
async fn empty_configured_secret_rejects_everything() {
    // Even an empty bearer credential must not match an empty secret.
    let response = test_app("")
        .oneshot(get("/api/products", Some("")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = test_app("").oneshot(get("/api/products", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_authorization_header_is_rejected() {
    let request = Request::builder()
        .uri("/api/products")
        .header(header::AUTHORIZATION, TEST_TOKEN) // missing "Bearer " prefix
        .body(Body::empty())
        .unwrap();

    let response = test_app(TEST_TOKEN).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Order validation (terminates before any upstream call)
// =============================================================================

#[tokio::test]
async fn orders_reject_string_quantity() {
    let mut order = valid_order();
    order["quantity"] = json!("2");

    let response = test_app(TEST_TOKEN)
        .oneshot(post_json("/api/orders", Some(TEST_TOKEN), &order))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Missing or invalid fields" })
    );
}

#[tokio::test]
async fn orders_reject_missing_fields() {
    for field in ["name", "phone", "address", "city", "productHandle", "quantity"] {
        let mut order = valid_order();
        order.as_object_mut().unwrap().remove(field);

        let response = test_app(TEST_TOKEN)
            .oneshot(post_json("/api/orders", Some(TEST_TOKEN), &order))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{field}");
    }
}

#[tokio::test]
async fn orders_reject_non_json_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
        .body(Body::from("not json"))
        .unwrap();

    let response = test_app(TEST_TOKEN).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Missing or invalid fields" })
    );
}

// =============================================================================
// Upstream-backed paths (mocked Shopify / WhatsApp)
// =============================================================================

#[tokio::test]
async fn orders_succeed_even_when_notification_fails() {
    let mut server = mockito::Server::new_async().await;

    let draft_order = server
        .mock("POST", "/admin/api/2025-01/graphql.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "data": {
                    "draftOrderCreate": {
                        "draftOrder": {
                            "id": "gid://shopify/DraftOrder/987",
                            "invoiceUrl": "https://test.myshopify.com/invoices/987"
                        },
                        "userErrors": []
                    }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    // Every recipient gets attempted even though each send fails.
    let notify = server
        .mock("POST", "/555000/messages")
        .with_status(500)
        .with_body("upstream down")
        .expect(2)
        .create_async()
        .await;

    let whatsapp = WhatsAppConfig {
        access_token: SecretString::from("wa-token"),
        phone_number_id: "555000".to_string(),
        recipients: vec!["15550001111".to_string(), "15550002222".to_string()],
        api_base: Some(server.url()),
    };

    let mut order = valid_order();
    order["variantId"] = json!("gid://shopify/ProductVariant/1");

    let response = mocked_app(&server.url(), Some(whatsapp))
        .oneshot(post_json("/api/orders", Some(TEST_TOKEN), &order))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({
            "ok": true,
            "draftOrderId": "gid://shopify/DraftOrder/987",
            "invoiceUrl": "https://test.myshopify.com/invoices/987"
        })
    );

    draft_order.assert_async().await;
    notify.assert_async().await;
}

#[tokio::test]
async fn products_map_upstream_failure_to_bad_gateway() {
    let mut server = mockito::Server::new_async().await;

    let listing = server
        .mock("GET", "/admin/api/2025-01/products.json")
        .match_query(mockito::Matcher::Any)
        .with_status(503)
        .with_body("boom")
        .create_async()
        .await;

    let response = mocked_app(&server.url(), None)
        .oneshot(get("/api/products", Some(TEST_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Shopify error", "detail": "boom" })
    );

    listing.assert_async().await;
}

#[tokio::test]
async fn price_unknown_handle_is_not_found() {
    let mut server = mockito::Server::new_async().await;

    let lookup = server
        .mock("POST", "/api/2025-01/graphql.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": { "productByHandle": null } }).to_string())
        .create_async()
        .await;

    let response = mocked_app(&server.url(), None)
        .oneshot(get("/api/price/no-such-product", Some(TEST_TOKEN)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Product not found or has no variants" })
    );

    lookup.assert_async().await;
}
