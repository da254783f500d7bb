//! URL Validator API Server
//!
//! Checks a URL against the VirusTotal reputation service and answers with a
//! coarse verdict.
//!
//! # Flow
//!
//! ```text
//! ┌────────┐  POST /urlvalidator/scan   ┌──────────────────┐
//! │ client │ ─────────────────────────▶ │ ScanOrchestrator │
//! └────────┘                            └────────┬─────────┘
//!      ▲                                         │ POST /urls
//!      │                                         ▼
//!      │                                ┌──────────────────┐
//!      │   {url, source, result,        │    VirusTotal    │
//!      │    details}                    │      v3 API      │
//!      │                                └────────┬─────────┘
//!      │                                         │ GET /analyses/{id}
//!      │                                         │ (every interval until
//!      │                                         │  completed or deadline)
//!      └─────────── classify(stats) ◀────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod logic;
mod virustotal;
mod error;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use std::net::SocketAddr;
use std::sync::Arc;

pub use error::{AppError, AppResult};

use logic::{PollSettings, ScanOrchestrator};
use virustotal::VirusTotalClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "urlvalidator=debug,tower_http=debug".into()))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    // Load configuration
    let config = config::Config::from_env();

    tracing::info!("URL Validator starting ({})...", config.environment);
    tracing::info!("Scan service: {}", config.vt_base_url);
    tracing::info!(
        "Polling every {}s for up to {}s",
        config.poll_interval_secs, config.poll_timeout_secs
    );
    if config.vt_api_key.is_empty() {
        tracing::warn!("VT_APIKEY is not set; upstream calls will be rejected");
    }

    // Build application state
    let client = VirusTotalClient::new(&config)?;
    let scanner = ScanOrchestrator::new(Arc::new(client), PollSettings::from(&config));
    let state = AppState { scanner };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Shared application state
#[derive(Clone, Debug)]
pub struct AppState {
    pub scanner: ScanOrchestrator,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/scan", post(handlers::scan::scan))
        .route("/health", get(handlers::health::check));

    Router::new()
        .nest("/urlvalidator", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
