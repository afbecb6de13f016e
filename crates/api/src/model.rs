//! Price Model Loading
//!
//! Loads the ONNX artifact once at startup. When it cannot be loaded and
//! fallback is allowed, the heuristic model is substituted and the
//! substitution is reported on every response that uses it.

use fallback::HeuristicPriceModel;
use inference_engine::{OnnxPriceModel, PriceModel};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::config::ModelConfig;
use crate::error::ApiError;

/// Where the serving model came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModelSource {
    /// Trained artifact loaded from disk
    Artifact { path: String },
    /// Heuristic stand-in; estimates are not model output
    Fallback { reason: String },
}

impl ModelSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ModelSource::Fallback { .. })
    }
}

/// Model ready for serving
pub struct LoadedModel {
    pub model: Arc<dyn PriceModel>,
    pub source: ModelSource,
}

/// Load the configured artifact, substituting the heuristic model if allowed
pub fn load_model(config: &ModelConfig) -> Result<LoadedModel, ApiError> {
    match OnnxPriceModel::load(&config.artifact_path) {
        Ok(model) => {
            info!("Serving price model {}", model.name());
            Ok(LoadedModel {
                source: ModelSource::Artifact {
                    path: model.path().display().to_string(),
                },
                model: Arc::new(model),
            })
        }
        Err(e) if config.allow_fallback => {
            warn!("Price model unavailable: {}", e);
            warn!("Serving HEURISTIC fallback estimates, predictions are not model output");
            Ok(LoadedModel {
                model: Arc::new(HeuristicPriceModel::new(config.fallback.clone())),
                source: ModelSource::Fallback {
                    reason: e.to_string(),
                },
            })
        }
        Err(e) => {
            error!("Price model unavailable and fallback disabled: {}", e);
            Err(ApiError::Inference(e))
        }
    }
}
