//! Integration tests for the frontend shell.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;
use web_app::config::Config;

async fn get_text(uri: &str) -> (StatusCode, String, String) {
    let app = web_app::create_app(&Config::default());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_login_page() {
    let (status, content_type, html) = get_text("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(html.contains(r#"<h2 class="card-title">Login Here</h2>"#));
    assert!(html.contains(r#"<button type="submit">Login Here</button>"#));
    assert!(html.contains(r#"<label for="email">Email</label>"#));
    assert!(html.contains(r#"<label for="password">Password</label>"#));
}

#[tokio::test]
async fn test_home_page() {
    let (status, _, html) = get_text("/home").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Welcome to BYU 590R Monorepo"));
    for feature in ["Laravel Backend", "Angular Frontend", "Docker Infrastructure"] {
        assert!(html.contains(feature), "missing feature card {feature}");
    }
}

#[tokio::test]
async fn test_client_config_exposes_backend_url() {
    let (status, _, body) = get_text("/config.json").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["backendUrl"], "http://localhost:4444");
}

#[tokio::test]
async fn test_assets_have_content_types() {
    let (status, content_type, script) = get_text("/assets/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.contains("javascript"));
    assert!(script.contains("/api/login"));

    let (_, content_type, _) = get_text("/assets/styles.css").await;
    assert!(content_type.starts_with("text/css"));
}

#[tokio::test]
async fn test_unknown_path_serves_shell() {
    let (status, _, html) = get_text("/some/client/route").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Login Here"));
}
