//! Handler tests for the Products domain
//!
//! These tests drive the real router with a tempfile-backed catalog:
//! - Request deserialization (JSON -> Rust structs)
//! - Response serialization (Rust structs -> JSON)
//! - HTTP status codes, auth challenges, error responses

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use axum_helpers::auth::{BasicAuth, StaticCredentials};
use domain_products::{handlers, JsonFileProductRepository, ProductService};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt; // For oneshot()

const GOOD_AUTH: &str = "Basic dGVzdF91c2VyOnRlc3RfcGFzc3dvcmQ="; // test_user:test_password
const BAD_AUTH: &str = "Basic dGVzdF91c2VyOndyb25n"; // test_user:wrong

struct TestApi {
    _dir: TempDir,
    path: std::path::PathBuf,
}

impl TestApi {
    fn seeded(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.json");
        std::fs::write(&path, content).unwrap();
        Self { _dir: dir, path }
    }

    fn two_products() -> Self {
        Self::seeded(
            r#"{"products":[
                {"id":1,"title":"A","price":1.0,"brand":"Acme"},
                {"id":2,"title":"B","price":2.0,"brand":"Acme"}
            ]}"#,
        )
    }

    fn router(&self) -> Router {
        let repository = JsonFileProductRepository::new(self.path.clone());
        let service = ProductService::new(repository);
        let auth = BasicAuth::new(
            StaticCredentials::new("test_user", "test_password"),
            "test-realm",
        );
        Router::new().nest("/products", handlers::router(service, auth))
    }

    fn stored(&self) -> Value {
        let content = std::fs::read_to_string(&self.path).unwrap();
        serde_json::from_str(&content).unwrap()
    }
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn request(method: &str, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = auth {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[tokio::test]
async fn test_list_returns_200_with_catalog() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request("GET", "/products", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["title"], "A");
}

#[tokio::test]
async fn test_list_missing_file_returns_500() {
    let dir = TempDir::new().unwrap();
    let api = TestApi {
        path: dir.path().join("absent.json"),
        _dir: dir,
    };

    let response = api
        .router()
        .oneshot(request("GET", "/products", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Products file not found.");
    assert_eq!(body["code"], 3001);
}

#[tokio::test]
async fn test_list_malformed_file_returns_500_with_distinct_message() {
    let api = TestApi::seeded("{definitely not json");

    let response = api
        .router()
        .oneshot(request("GET", "/products", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response.into_body()).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("malformed"));
    assert_ne!(message, "Products file not found.");
    assert_eq!(body["code"], 3002);
}

#[tokio::test]
async fn test_get_by_id_returns_product() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request("GET", "/products/2", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], 2);
    assert_eq!(body["title"], "B");
}

#[tokio::test]
async fn test_get_unknown_id_returns_404_with_empty_body() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request("GET", "/products/99", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_get_non_integer_id_returns_400() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request("GET", "/products/abc", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_without_auth_is_challenged() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request(
            "POST",
            "/products",
            None,
            Some(json!({"title": "C", "price": 3.0})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let challenge = response
        .headers()
        .get(header::WWW_AUTHENTICATE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(challenge.starts_with("Basic realm="));
}

#[tokio::test]
async fn test_create_with_wrong_password_is_challenged() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request(
            "POST",
            "/products",
            Some(BAD_AUTH),
            Some(json!({"title": "C", "price": 3.0})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_assigns_next_id_and_sets_location() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request(
            "POST",
            "/products",
            Some(GOOD_AUTH),
            Some(json!({"title": "C", "price": 3.0})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/products/3")
    );

    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], 3);
    assert_eq!(body["title"], "C");

    // The file now holds all three entries
    let stored = api.stored();
    assert_eq!(stored["products"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_on_empty_catalog_assigns_id_one() {
    let api = TestApi::seeded(r#"{"products":[]}"#);
    let response = api
        .router()
        .oneshot(request(
            "POST",
            "/products",
            Some(GOOD_AUTH),
            Some(json!({"title": "First", "price": 1.0})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_create_with_invalid_fields_returns_400_with_details() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request(
            "POST",
            "/products",
            Some(GOOD_AUTH),
            Some(json!({"title": "", "price": -1.0})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert!(body["details"]["title"].is_array());
    assert!(body["details"]["price"].is_array());
}

#[tokio::test]
async fn test_create_missing_body_returns_400() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request("POST", "/products", Some(GOOD_AUTH), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_type_mismatched_field_returns_400() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request(
            "POST",
            "/products",
            Some(GOOD_AUTH),
            Some(json!({"title": "C", "price": "not-a-number"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(api.stored()["products"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_duplicate_title_and_brand_returns_400() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request(
            "POST",
            "/products",
            Some(GOOD_AUTH),
            Some(json!({"title": " a ", "price": 5.0, "brand": "ACME"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert!(body["details"]["title"].is_array());
    assert!(body["details"]["brand"].is_array());

    // Nothing was written
    assert_eq!(api.stored()["products"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_replaces_record_and_keeps_path_id() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request(
            "PUT",
            "/products/1",
            Some(GOOD_AUTH),
            // Body id is ignored; the path id wins
            Some(json!({"id": 42, "title": "A2", "price": 9.0})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let stored = api.stored();
    let products = stored["products"].as_array().unwrap();
    assert_eq!(products[0]["id"], 1);
    assert_eq!(products[0]["title"], "A2");
    // Whole-record replace: the old brand is gone
    assert!(products[0].get("brand").is_none());
}

#[tokio::test]
async fn test_update_keeping_own_title_and_brand_succeeds() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request(
            "PUT",
            "/products/1",
            Some(GOOD_AUTH),
            Some(json!({"title": "A", "price": 7.5, "brand": "Acme"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_into_another_products_pair_returns_400() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request(
            "PUT",
            "/products/2",
            Some(GOOD_AUTH),
            Some(json!({"title": "A", "price": 2.0, "brand": "Acme"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_id_returns_404() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request(
            "PUT",
            "/products/99",
            Some(GOOD_AUTH),
            Some(json!({"title": "X", "price": 1.0})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product with id 99 not found.");
}

#[tokio::test]
async fn test_update_without_auth_is_challenged() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request(
            "PUT",
            "/products/1",
            None,
            Some(json!({"title": "A2", "price": 1.0})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_returns_204_and_persists() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request("DELETE", "/products/1", Some(GOOD_AUTH), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(api.stored()["products"].as_array().unwrap().len(), 1);

    // The deleted id is gone
    let response = api
        .router()
        .oneshot(request("GET", "/products/1", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_on_empty_catalog_returns_404() {
    let api = TestApi::seeded(r#"{"products":[]}"#);
    let response = api
        .router()
        .oneshot(request("DELETE", "/products/5", Some(GOOD_AUTH), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_without_auth_is_challenged() {
    let api = TestApi::two_products();
    let response = api
        .router()
        .oneshot(request("DELETE", "/products/1", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(api.stored()["products"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_reads_do_not_require_auth() {
    let api = TestApi::two_products();

    let list = api
        .router()
        .oneshot(request("GET", "/products", None, None))
        .await
        .unwrap();
    assert_eq!(list.status(), StatusCode::OK);

    let get = api
        .router()
        .oneshot(request("GET", "/products/1", None, None))
        .await
        .unwrap();
    assert_eq!(get.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_write_failure_during_duplicate_check_is_fatal_for_store() {
    // Missing file: the duplicate check swallows the read error, but the
    // store's own read still fails with 500.
    let dir = TempDir::new().unwrap();
    let api = TestApi {
        path: dir.path().join("absent.json"),
        _dir: dir,
    };

    let response = api
        .router()
        .oneshot(request(
            "POST",
            "/products",
            Some(GOOD_AUTH),
            Some(json!({"title": "C", "price": 3.0})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Products file not found.");
}
