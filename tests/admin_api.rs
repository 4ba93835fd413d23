//! Administrative API and mock-hit scenarios, driven without a socket.

use axum::http::StatusCode;
use mock_proxy::mocks::Mock;
use mock_proxy::model::{Payload, FAILED_STATUS};
use mock_proxy::recording::RecordedExchange;
use mock_proxy::HttpServer;

mod common;
use common::{get, json_post, send, test_config};

const HELLO_MOCK: &str = r#"{
    "id": "m1",
    "request": {"method": "GET", "url": "http://x/y", "header": {}, "body": ""},
    "response": {"statusCode": 200, "header": {"Content-Type": ["text/plain"]}, "body": "hello"}
}"#;

async fn recorded(server: &HttpServer) -> Vec<RecordedExchange> {
    let (status, body) = send(server, get("/recordedRequests")).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_registration_then_listing() {
    let server = HttpServer::new(test_config());

    let (status, body) = send(&server, json_post("/addMock", HELLO_MOCK)).await;
    assert_eq!(status, StatusCode::OK);
    let echoed: Mock = serde_json::from_slice(&body).unwrap();
    let submitted: Mock = serde_json::from_str(HELLO_MOCK).unwrap();
    assert_eq!(echoed, submitted);

    let (status, body) = send(&server, get("/mocks")).await;
    assert_eq!(status, StatusCode::OK);
    let mocks: Vec<Mock> = serde_json::from_slice(&body).unwrap();
    assert_eq!(mocks, vec![submitted]);

    // Admin calls are not proxied traffic.
    assert!(recorded(&server).await.is_empty());
}

#[tokio::test]
async fn test_mock_hit_scenario() {
    let server = HttpServer::new(test_config());
    send(&server, json_post("/addMock", HELLO_MOCK)).await;

    let response = server_response(&server, get("http://x/y")).await;
    assert_eq!(response.0, StatusCode::OK);
    assert_eq!(response.1.as_deref(), Some("text/plain"));
    assert_eq!(response.2, "hello");

    let entries = recorded(&server).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].request.url, "http://x/y");
    assert_eq!(entries[0].response.status_code, 200);
    assert_eq!(entries[0].response.body, Payload::from("hello"));
}

async fn server_response(
    server: &HttpServer,
    request: axum::http::Request<axum::body::Body>,
) -> (StatusCode, Option<String>, String) {
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    let response = server.router().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_header_multiplicity_order_matters() {
    let server = HttpServer::new(test_config());
    let mock = r#"{
        "id": "ordered",
        "request": {"method": "GET", "url": "http://127.0.0.1:1/h", "header": {"X-Test": ["a", "b"]}},
        "response": {"statusCode": 200, "body": "ordered"}
    }"#;
    send(&server, json_post("/addMock", mock)).await;

    let same_order = axum::http::Request::builder()
        .uri("http://127.0.0.1:1/h")
        .header("x-test", "a")
        .header("x-test", "b")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, body) = send(&server, same_order).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ordered");

    // Reversed order misses and is forwarded to a closed port.
    let reversed = axum::http::Request::builder()
        .uri("http://127.0.0.1:1/h")
        .header("x-test", "b")
        .header("x-test", "a")
        .body(axum::body::Body::empty())
        .unwrap();
    let (status, _) = send(&server, reversed).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let entries = recorded(&server).await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].response.status_code, FAILED_STATUS);
    assert_eq!(entries[1].request.header.get("x-test").unwrap(), ["b", "a"]);
}

#[tokio::test]
async fn test_malformed_registration_rejected() {
    let server = HttpServer::new(test_config());

    for payload in [
        "not json",
        r#"{"id": "m"}"#,
        r#"{"id": "m", "request": {"url": "http://x/"}, "response": {"statusCode": 200}}"#,
        r#"{"id": "m", "request": {"method": "GET", "url": "http://x/"}, "response": {"statusCode": 42}}"#,
        r#"{"id": "m", "request": {"method": "GET", "url": "http://x/"}, "response": {"statusCode": 200, "header": {"bad name": ["v"]}}}"#,
    ] {
        let (status, _) = send(&server, json_post("/addMock", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {payload}");
    }

    let (_, body) = send(&server, get("/mocks")).await;
    assert_eq!(body, b"[]");
    assert!(server.state().registry.is_empty());
}

#[tokio::test]
async fn test_read_endpoints_are_idempotent() {
    let server = HttpServer::new(test_config());
    send(&server, json_post("/addMock", HELLO_MOCK)).await;
    send(&server, get("http://x/y")).await;
    send(&server, get("http://127.0.0.1:1/unreachable")).await;

    let (_, mocks_a) = send(&server, get("/mocks")).await;
    let (_, mocks_b) = send(&server, get("/mocks")).await;
    assert_eq!(mocks_a, mocks_b);

    let (_, recorded_a) = send(&server, get("/recordedRequests")).await;
    let (_, recorded_b) = send(&server, get("/recordedRequests")).await;
    assert_eq!(recorded_a, recorded_b);

    let json: serde_json::Value = serde_json::from_slice(&recorded_a).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[1]["response"]["statusCode"], -1);
}

#[tokio::test]
async fn test_absolute_form_admin_path_is_proxied() {
    let server = HttpServer::new(test_config());
    let mock = r#"{
        "id": "upstream-mocks",
        "request": {"method": "GET", "url": "http://x/mocks"},
        "response": {"statusCode": 200, "body": "from mock"}
    }"#;
    send(&server, json_post("/addMock", mock)).await;

    let (status, body) = send(&server, get("http://x/mocks")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"from mock");
    assert_eq!(server.state().ledger.len(), 1);
}

#[tokio::test]
async fn test_other_method_on_admin_path_goes_through_pipeline() {
    let server = HttpServer::new(test_config());

    let (status, _) = send(&server, json_post("/mocks", "{}")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let entries = recorded(&server).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].request.method, "POST");
    assert_eq!(entries[0].request.url, "/mocks");
    assert_eq!(entries[0].request.body, Payload::from("{}"));
    assert_eq!(entries[0].response.status_code, FAILED_STATUS);
}

#[tokio::test]
async fn test_head_on_admin_paths_goes_through_pipeline() {
    let server = HttpServer::new(test_config());

    for path in ["/mocks", "/recordedRequests"] {
        let request = axum::http::Request::builder()
            .method("HEAD")
            .uri(path)
            .body(axum::body::Body::empty())
            .unwrap();
        let (status, _) = send(&server, request).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY, "{path}");
    }

    let entries = recorded(&server).await;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].request.method, "HEAD");
    assert_eq!(entries[0].request.url, "/mocks");
    assert_eq!(entries[1].request.url, "/recordedRequests");
    assert!(entries.iter().all(|e| e.response.status_code == FAILED_STATUS));
}

#[tokio::test]
async fn test_unresolvable_host_scenario() {
    let server = HttpServer::new(test_config());

    let (status, body) = send(&server, get("http://example.invalid/")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body.is_empty());

    let entries = recorded(&server).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].request.url, "http://example.invalid/");
    assert_eq!(entries[0].response.status_code, FAILED_STATUS);
    assert!(entries[0].response.body.is_empty());
    assert!(entries[0].response.header.is_empty());
}
