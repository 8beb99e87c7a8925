//! HTTP backend for the BYU 590R monorepo.
//!
//! Serves the hello/health smoke-test endpoints, bearer-token login backed
//! by the `accounts` crate, and the configuration status of third-party
//! integrations, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

use std::sync::Arc;

use accounts::{AuthError, AuthService, InMemoryUserDirectory, UserDirectory, seed_user};
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use integrations::OpenAiService;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
pub use state::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<D: UserDirectory + 'static>(
    state: Arc<AppState<D>>,
    metrics_handle: PrometheusHandle,
    config: &Config,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::landing::index))
        .route("/api/hello", get(routes::hello::hello))
        .route("/api/health", get(routes::health::check))
        .route("/api/login", post(routes::auth::login::<D>))
        .route("/api/logout", post(routes::auth::logout::<D>))
        .route("/api/user", get(routes::user::current))
        .route(
            "/api/integrations/openai/status",
            get(routes::integrations::openai_status::<D>),
        )
        .route(
            "/api/integrations/openai/placeholder",
            get(routes::integrations::openai_placeholder::<D>),
        )
        .fallback(routes::not_found)
        .with_state(state)
        .merge(metrics_router)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(cors_layer(config.cors_allowed_origin.as_deref()))
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer, allowing any origin unless one is configured.
pub fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let origin = match allowed_origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(err)) => {
            tracing::warn!(error = %err, "invalid CORS_ALLOWED_ORIGIN, allowing any origin");
            AllowOrigin::from(Any)
        }
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Creates the default application state with an in-memory directory
/// holding the configured seed user.
pub async fn create_default_state(
    config: &Config,
) -> Result<Arc<AppState<InMemoryUserDirectory>>, AuthError> {
    let directory = InMemoryUserDirectory::new();
    seed_user(&directory, &config.seed_user).await?;

    Ok(Arc::new(AppState {
        auth: AuthService::new(directory),
        openai: OpenAiService::new(config.openai.clone()),
    }))
}
