//! Frontend shell for the BYU 590R monorepo.
//!
//! Serves a login page, a static welcome page and the small script that
//! talks to the backend. Assets are embedded into the binary; unknown
//! paths fall back to the login shell.

pub mod config;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use rust_embed::Embed;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use config::Config;

#[derive(Embed)]
#[folder = "static"]
struct Assets;

/// Runtime settings exposed to the browser.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub backend_url: String,
}

/// Creates the frontend router.
pub fn create_app(config: &Config) -> Router {
    let client = Arc::new(ClientConfig {
        backend_url: config.backend_url.clone(),
    });

    Router::new()
        .route("/", get(index))
        .route("/home", get(home))
        .route("/config.json", get(client_config))
        .route("/{*path}", get(static_handler))
        .with_state(client)
        .layer(TraceLayer::new_for_http())
}

async fn index() -> Response {
    serve_asset("index.html")
}

async fn home() -> Response {
    serve_asset("home.html")
}

async fn client_config(State(client): State<Arc<ClientConfig>>) -> Json<ClientConfig> {
    Json(client.as_ref().clone())
}

async fn static_handler(Path(path): Path<String>) -> Response {
    serve_asset(path.trim_start_matches('/'))
}

fn serve_asset(path: &str) -> Response {
    let Some(asset) = Assets::get(path).or_else(|| Assets::get("index.html")) else {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    };

    (
        [(header::CONTENT_TYPE, asset.metadata.mimetype().to_string())],
        Body::from(asset.data.into_owned()),
    )
        .into_response()
}
