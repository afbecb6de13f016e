//! Price Model Capability

use crate::InferenceError;
use feature_engine::FeatureVector;

/// A trained regressor mapping one feature vector to a price
///
/// The model is loaded once and shared read-only across requests.
pub trait PriceModel: Send + Sync {
    /// Run single-sample inference
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError>;

    /// Model name for logs and responses
    fn name(&self) -> &str;

    /// True for stand-ins whose estimates are not trained-model output
    fn is_fallback(&self) -> bool {
        false
    }
}
