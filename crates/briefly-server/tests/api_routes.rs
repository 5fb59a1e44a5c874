//! Route tests — drive the router in-process and check response shapes
//! against what the web frontend reads.
//!
//! `/analyze-url` is exercised against a throwaway page server bound to
//! loopback, so no external network is needed.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use briefly_core::Config;
use briefly_server::{build_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

const ARTICLE: &str = r#"<!doctype html>
<html><head><title>Rust notes</title></head>
<body>
  <nav>Home | About</nav>
  <p>Rust is a systems language. Rust programs are fast.</p>
  <p>The compiler checks memory safety. Developers love the compiler.</p>
</body></html>"#;

fn app() -> Router {
    let state = AppState::new(Config::default()).unwrap();
    build_router(Arc::new(state))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn spawn_page_server() -> String {
    let pages = Router::new()
        .route("/article", get(|| async { Html(ARTICLE) }))
        .route(
            "/empty",
            get(|| async { Html("<html><body><div>No paragraphs here</div><p> </p></body></html>") }),
        )
        .route(
            "/report.pdf",
            get(|| async { ([(header::CONTENT_TYPE, "application/pdf")], "%PDF-1.4") }),
        )
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Html("<p>Not here</p>")) }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, pages).await.unwrap();
    });
    format!("http://{addr}")
}

fn assert_error_only(body: &Value) {
    let obj = body.as_object().expect("object body");
    assert_eq!(obj.len(), 1, "unexpected keys in {body}");
    assert!(!obj["error"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_root_liveness() {
    let req = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = send(app(), req).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_analyze_text_short() {
    let text = "Cats are great. Dogs are bad. Fish are neutral animals that swim.";
    let (status, body) = send(
        app(),
        post_json("/analyze-text", json!({ "text": text, "length": "short" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let summary = body["summary"].as_str().unwrap();
    assert!(
        ["Cats are great.", "Dogs are bad.", "Fish are neutral animals that swim."]
            .contains(&summary)
    );
    assert_eq!(body["sentiment"], "positive");
    assert_eq!(body["word_count"], 12);
    assert_eq!(body["reading_time_minutes"], 0.06);
    assert_eq!(body["keywords"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_analyze_text_empty() {
    let (status, body) = send(app(), post_json("/analyze-text", json!({ "text": "" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "summary": "",
            "keywords": [],
            "sentiment": "neutral",
            "word_count": 0,
            "reading_time_minutes": 0.0,
        })
    );
}

#[tokio::test]
async fn test_analyze_text_defaults_to_medium() {
    let text = "Alpha beta. Gamma delta. Epsilon zeta.";
    for body in [
        json!({ "text": text }),
        json!({ "text": text, "mode": "abstractive", "length": "enormous" }),
    ] {
        let (status, resp) = send(app(), post_json("/analyze-text", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp["summary"], "Alpha beta. Gamma delta.");
    }
}

#[tokio::test]
async fn test_analyze_text_rejects_malformed_body() {
    let (status, _) = send(app(), post_json("/analyze-text", json!({ "length": "short" }))).await;
    assert!(status.is_client_error());

    let (status, _) = send(app(), post_json("/analyze-text", json!({ "text": 42 }))).await;
    assert!(status.is_client_error());

    let req = Request::builder()
        .method(Method::POST)
        .uri("/analyze-text")
        .body(Body::from("text=hello"))
        .unwrap();
    let (status, _) = send(app(), req).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_analyze_url_unreachable() {
    let (status, body) = send(
        app(),
        post_json("/analyze-url", json!({ "url": "http://127.0.0.1:1/" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_error_only(&body);
}

#[tokio::test]
async fn test_analyze_url_invalid() {
    let (status, body) = send(app(), post_json("/analyze-url", json!({ "url": "nope" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_error_only(&body);
}

#[tokio::test]
async fn test_analyze_url_article() {
    let base = spawn_page_server().await;
    let (status, body) = send(
        app(),
        post_json(
            "/analyze-url",
            json!({ "url": format!("{base}/article"), "length": "short" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"], "The compiler checks memory safety.");
    assert_eq!(
        body["keywords"],
        json!(["rust", "compiler", "systems", "language", "programs"])
    );
    assert_eq!(body["sentiment"], "positive");
    assert_eq!(body["word_count"], 18);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_analyze_url_without_paragraph_text() {
    let base = spawn_page_server().await;
    let (status, body) = send(
        app(),
        post_json("/analyze-url", json!({ "url": format!("{base}/empty") })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "No text found on URL" }));
}

#[tokio::test]
async fn test_analyze_url_rejects_bad_responses() {
    let base = spawn_page_server().await;
    for path in ["/report.pdf", "/missing"] {
        let (status, body) = send(
            app(),
            post_json("/analyze-url", json!({ "url": format!("{base}{path}") })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_error_only(&body);
    }
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/analyze-text")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_cors_allows_listed_origin() {
    let resp = app().oneshot(preflight("http://localhost:3000")).await.unwrap();
    let headers = resp.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
}

#[tokio::test]
async fn test_cors_ignores_unlisted_origin() {
    let resp = app().oneshot(preflight("https://evil.example")).await.unwrap();
    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
