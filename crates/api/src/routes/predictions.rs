//! Prediction Routes

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use data_validator::VehicleRecord;
use feature_engine::{FeatureVector, FEATURE_DIMENSION, FEATURE_NAMES};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::model::ModelSource;
use crate::{telemetry, AppState};

/// Warning attached to every heuristic estimate
pub const FALLBACK_WARNING: &str =
    "The trained price model is unavailable; this figure is a rough rule-based estimate.";

/// Response for the predict endpoint
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    /// Estimated price in rupees
    pub price: f64,
    /// Price formatted for display
    pub formatted_price: String,
    /// Encoded model input
    pub features: FeatureVector,
    pub feature_names: [&'static str; FEATURE_DIMENSION],
    pub model: String,
    pub model_source: ModelSource,
    pub used_fallback: bool,
    pub insights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub latency_ms: u64,
}

/// Validate, encode and price one vehicle
///
/// Body rejections go through [`ApiError`] like every other failure.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<VehicleRecord>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let result = payload
        .map_err(ApiError::from)
        .and_then(|Json(record)| price_vehicle(&state, record));

    match result {
        Ok(response) => {
            telemetry::record_prediction(response.used_fallback);
            info!("Priced vehicle at {} via {}", response.formatted_price, response.model);
            Ok(Json(response))
        }
        Err(e) => {
            telemetry::record_prediction_error(e.code());
            warn!("Prediction rejected: {}", e);
            Err(e)
        }
    }
}

fn price_vehicle(state: &AppState, record: VehicleRecord) -> Result<PredictionResponse, ApiError> {
    let input = state.validator.admit(record).map_err(ApiError::Validation)?;

    let features = state.encoder.encode(&input)?;
    let prediction = state.invoker.predict(&features)?;
    debug!("Encoded {} {} as {:?}", input.brand, input.location, features.as_slice());

    let warning = prediction
        .used_fallback
        .then(|| FALLBACK_WARNING.to_string());

    Ok(PredictionResponse {
        price: prediction.price,
        formatted_price: format_rupees(prediction.price),
        features,
        feature_names: FEATURE_NAMES,
        model: prediction.model_name,
        model_source: state.model_source.clone(),
        used_fallback: prediction.used_fallback,
        insights: advisor::market_insights(&input),
        warning,
        latency_ms: prediction.latency_ms,
    })
}

/// Format as rupees with thousands separators and two decimals
pub fn format_rupees(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}₹{}.{}", sign, grouped, fraction)
}
