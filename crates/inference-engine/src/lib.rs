//! Price Inference Engine
//!
//! Runs the trained resale-price regressor on encoded feature vectors.

mod engine;
mod model;
mod onnx;

pub use engine::{PredictionInvoker, PricePrediction};
pub use model::PriceModel;
pub use onnx::OnnxPriceModel;

use thiserror::Error;

/// Errors during inference
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Invalid input shape: expected {expected}, got {actual}")]
    InvalidInputShape { expected: String, actual: String },
    #[error("Model returned unusable output: {0}")]
    InvalidOutput(String),
}
