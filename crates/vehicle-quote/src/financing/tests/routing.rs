use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::financing::quote_router;

fn router() -> axum::Router {
    quote_router(Arc::new(standard_engine()))
}

fn post_quote(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/quotes")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn quote_endpoint_returns_ranked_sheet() {
    let response = router()
        .oneshot(post_quote(json!({
            "vehicle_type": "light",
            "model_year": 2021,
            "manufacture_year": 2021,
            "vehicle_price": 60000.0,
            "down_payment": 6000.0,
            "term_months": 60,
            "reference_year": CURRENT_YEAR
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["term_months"], 60);
    assert_eq!(body["effective_age"], 3);
    assert!(body.get("issue").is_none());
    let quotes = body["quotes"].as_array().expect("quotes array");
    assert_eq!(quotes.len(), 5);
    assert_eq!(quotes[0]["lender_name"], "Itaú");
}

#[tokio::test]
async fn quote_endpoint_reports_issue_with_parameters() {
    let response = router()
        .oneshot(post_quote(json!({
            "vehicle_type": "light",
            "model_year": 2021,
            "manufacture_year": 2021,
            "vehicle_price": 60000.0,
            "down_payment": 1000.0,
            "term_months": 24,
            "reference_year": CURRENT_YEAR
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["issue"]["kind"], "down_payment_too_low");
    assert_eq!(body["issue"]["minimum"], 6000.0);
    assert_eq!(body["quotes"], json!([]));
}

#[tokio::test]
async fn quote_endpoint_rejects_unoffered_terms() {
    let response = router()
        .oneshot(post_quote(json!({
            "vehicle_type": "truck",
            "vehicle_price": 100000.0,
            "term_months": 72
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("72 months"));
}

#[tokio::test]
async fn lenders_endpoint_lists_catalog() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/v1/lenders")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let lenders = body["lenders"].as_array().expect("lenders array");
    assert_eq!(lenders.len(), 5);
    assert_eq!(lenders[0]["name"], "Santander");
    assert_eq!(lenders[0]["vehicle_types"].as_array().map(Vec::len), Some(3));
    assert_eq!(lenders[2]["vehicle_types"].as_array().map(Vec::len), Some(2));
}
