use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
};
use calc_eval::calc;
use calc_server::{failure_for, router, CALCULATE_PATH};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tests::{ERROR_CASES, VALID_CASES};
use tower::ServiceExt;

async fn post_expression(expression: &str) -> (StatusCode, Value) {
    let body = json!({ "expression": expression }).to_string();
    let request = Request::builder()
        .method(Method::POST)
        .uri(CALCULATE_PATH)
        .body(Body::from(body))
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn server_results_match_evaluator() {
    for (input, expected) in VALID_CASES {
        let (status, body) = post_expression(input).await;
        assert_eq!(status, StatusCode::OK, "input: {input}");
        assert_eq!(body, json!({ "result": expected.to_string() }), "input: {input}");
        assert_eq!(calc(input), Ok(*expected));
    }
}

#[tokio::test]
async fn server_errors_match_evaluator() {
    for (input, kind) in ERROR_CASES {
        let (status, body) = post_expression(input).await;
        if input.is_empty() {
            // Rejected as a bad request before it reaches the evaluator
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": "Invalid Body" }));
            continue;
        }
        let (expected_status, message) = failure_for(*kind);
        assert_eq!(status, expected_status, "input: {input:?}");
        assert_eq!(body, json!({ "error": message }), "input: {input:?}");
    }
}
