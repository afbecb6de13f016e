//! Prediction Invoker

use crate::model::PriceModel;
use crate::InferenceError;
use feature_engine::FeatureVector;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Price estimate produced by one inference call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePrediction {
    /// Estimated price, never negative
    pub price: f64,
    /// Value returned by the model before normalization
    pub raw_output: f64,
    /// Name of the model that produced the estimate
    pub model_name: String,
    /// Produced by a fallback model rather than the trained regressor
    pub used_fallback: bool,
    /// Inference latency in milliseconds
    pub latency_ms: u64,
    /// Timestamp when prediction was made
    pub timestamp_ms: u64,
}

/// Single-attempt, synchronous caller of a shared price model
#[derive(Clone)]
pub struct PredictionInvoker {
    model: Arc<dyn PriceModel>,
}

impl PredictionInvoker {
    /// Create an invoker around a loaded model
    pub fn new(model: Arc<dyn PriceModel>) -> Self {
        Self { model }
    }

    /// Run inference and normalize the output to a non-negative price
    ///
    /// The regressor occasionally emits negative values; the magnitude is
    /// reported as the price.
    pub fn predict(&self, features: &FeatureVector) -> Result<PricePrediction, InferenceError> {
        let start = Instant::now();

        let raw_output = self.model.predict(features)?;
        if !raw_output.is_finite() {
            return Err(InferenceError::InvalidOutput(format!(
                "{} returned {}",
                self.model.name(),
                raw_output
            )));
        }
        if raw_output < 0.0 {
            warn!("{} returned negative price {}, using magnitude", self.model.name(), raw_output);
        }

        let latency_ms = start.elapsed().as_millis() as u64;
        debug!("Inference completed in {}ms", latency_ms);

        let timestamp_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Ok(PricePrediction {
            price: raw_output.abs(),
            raw_output,
            model_name: self.model.name().to_string(),
            used_fallback: self.model.is_fallback(),
            latency_ms,
            timestamp_ms,
        })
    }

    /// Name of the wrapped model
    pub fn model_name(&self) -> &str {
        self.model.name()
    }
}
