//! API server entry point.

use api::config::{Config, LogFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(config: &Config) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(&config.log_level));
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() {
    // 1. Load configuration once; `.env` is optional
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // 2. Initialize tracing
    init_tracing(&config);

    // 3. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 4. Create application state and seed the fixture user
    let state = api::create_default_state(&config)
        .await
        .expect("failed to seed user directory");

    if !state.openai.is_configured() {
        tracing::warn!("OPENAI_API_KEY is not set; OpenAI integration reports unconfigured");
    }

    // 5. Build the application
    let app = api::create_app(state, metrics_handle, &config);

    // 6. Start server
    let addr = config.addr();
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(common::shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
