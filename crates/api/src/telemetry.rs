//! Logging and Metrics

use advisor::ReplySource;
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub const PREDICTIONS_TOTAL: &str = "autovault_predictions_total";
pub const PREDICTION_ERRORS_TOTAL: &str = "autovault_prediction_errors_total";
pub const FALLBACK_PREDICTIONS_TOTAL: &str = "autovault_fallback_predictions_total";
pub const CHAT_MESSAGES_TOTAL: &str = "autovault_chat_messages_total";

/// Initialize logging
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Install the Prometheus recorder
pub fn install_metrics() -> Result<PrometheusHandle, Box<dyn std::error::Error + Send + Sync>> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    Ok(handle)
}

pub fn record_prediction(used_fallback: bool) {
    counter!(PREDICTIONS_TOTAL).increment(1);
    if used_fallback {
        counter!(FALLBACK_PREDICTIONS_TOTAL).increment(1);
    }
}

pub fn record_prediction_error(code: &'static str) {
    counter!(PREDICTION_ERRORS_TOTAL, "error" => code).increment(1);
}

pub fn record_chat_message(source: ReplySource) {
    let source = match source {
        ReplySource::Remote => "remote",
        ReplySource::Canned => "canned",
    };
    counter!(CHAT_MESSAGES_TOTAL, "source" => source).increment(1);
}
