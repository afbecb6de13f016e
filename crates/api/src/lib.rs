//! AutoVault API Server
//!
//! REST API for the car price estimator, reference data and advice chat.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use data_validator::Validator;
use feature_engine::FeatureEncoder;
use inference_engine::PredictionInvoker;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_governor::GovernorLayer;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use advisor::{Advisor, SessionStore};

pub mod config;
pub mod error;
pub mod model;
pub mod rate_limit;
pub mod routes;
pub mod telemetry;

pub use config::AppConfig;
pub use error::ApiError;
pub use model::{load_model, LoadedModel, ModelSource};

use rate_limit::DefaultGovernorConfig;

/// Application state shared across handlers
///
/// Everything except the chat sessions is read-only after startup.
pub struct AppState {
    pub encoder: FeatureEncoder,
    pub validator: Validator,
    pub invoker: PredictionInvoker,
    pub model_source: ModelSource,
    pub advisor: Advisor,
    /// Ephemeral chat transcripts
    pub sessions: RwLock<SessionStore>,
    /// Prometheus handle when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Assemble state around an already-loaded model
    pub fn new(loaded: LoadedModel, advisor: Advisor, config: &AppConfig) -> Self {
        Self {
            encoder: FeatureEncoder::new(),
            validator: Validator::new(config.validation.clone()),
            invoker: PredictionInvoker::new(loaded.model),
            model_source: loaded.source,
            advisor,
            sessions: RwLock::new(SessionStore::new(
                config.advisor.max_history,
                config.advisor.max_sessions,
            )),
            metrics: None,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Load the model and advisor described by `config`
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        let loaded = load_model(&config.model)?;
        let advisor = Advisor::from_config(&config.advisor)
            .map_err(|e| ApiError::Config(format!("advisor: {}", e)))?;
        Ok(Self::new(loaded, advisor, config))
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: u64,
    pub version: String,
    pub uptime_seconds: u64,
    pub components: ComponentStatus,
    pub chat_sessions: usize,
}

/// Component status
#[derive(Debug, Serialize)]
pub struct ComponentStatus {
    pub inference: InferenceHealth,
    pub advisor: &'static str,
}

/// Inference component health
#[derive(Debug, Serialize)]
pub struct InferenceHealth {
    pub status: &'static str,
    pub model: String,
    pub source: ModelSource,
}

/// Create the application router
///
/// When `rate_limit` is given, the predict and chat routes are limited per
/// client IP.
pub fn create_router(state: Arc<AppState>, rate_limit: Option<Arc<DefaultGovernorConfig>>) -> Router {
    let mut limited = Router::new()
        .route("/api/v1/predict", post(routes::predictions::predict))
        .route("/api/v1/chat", post(routes::chat::post_message));
    if let Some(config) = rate_limit {
        limited = limited.layer(GovernorLayer { config });
    }

    Router::new()
        .route("/api/v1/health", get(health_handler))
        .route("/api/v1/categories", get(routes::catalog::get_categories))
        .route("/api/v1/car-types", get(routes::catalog::get_car_types))
        .route("/metrics", get(metrics_handler))
        .merge(limited)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let degraded = state.model_source.is_fallback();
    let response = HealthResponse {
        status: if degraded { "degraded" } else { "healthy" },
        timestamp,
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        components: ComponentStatus {
            inference: InferenceHealth {
                status: if degraded { "fallback" } else { "ok" },
                model: state.invoker.model_name().to_string(),
                source: state.model_source.clone(),
            },
            advisor: if state.advisor.has_remote() { "remote" } else { "canned" },
        },
        chat_sessions: state.sessions.read().await.len(),
    };

    Json(response)
}

/// Prometheus exposition
async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match &state.metrics {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, "metrics disabled".to_string()),
    }
}

/// Run the server
pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let mut state = AppState::from_config(&config)?;
    if config.server.metrics {
        state.metrics = Some(telemetry::install_metrics().map_err(|e| anyhow::anyhow!("metrics recorder: {}", e))?);
    }
    if state.model_source.is_fallback() {
        info!("Inference is DEGRADED: heuristic fallback in use");
    }

    let governor = rate_limit::create_governor_config(&config.rate_limit)?;
    let app = create_router(Arc::new(state), Some(governor));

    info!("Starting API server on {}", config.server.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
