//! ONNX Price Model
//!
//! Loads the trained regressor exported to ONNX and runs it with tract.

use crate::model::PriceModel;
use crate::InferenceError;
use feature_engine::{FeatureVector, FEATURE_DIMENSION};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tract_onnx::prelude::*;

type PricePlan = TypedRunnableModel<TypedModel>;

/// Price regressor backed by an ONNX artifact
pub struct OnnxPriceModel {
    /// Optimized execution plan
    plan: PricePlan,
    /// Artifact path
    path: PathBuf,
    /// Display name
    name: String,
}

impl OnnxPriceModel {
    /// Load and optimize the model at `path`
    ///
    /// The graph input is pinned to `f32 [1, FEATURE_DIMENSION]`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InferenceError> {
        let path = path.as_ref();
        info!("Loading ONNX price model from {}", path.display());

        if !path.is_file() {
            return Err(InferenceError::ModelLoadError(format!(
                "artifact not found at {}",
                path.display()
            )));
        }

        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.with_input_fact(0, f32::fact([1, FEATURE_DIMENSION]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| InferenceError::ModelLoadError(format!("{}: {}", path.display(), e)))?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "onnx".to_string());

        info!("Model {} loaded successfully", name);
        Ok(Self {
            plan,
            path: path.to_path_buf(),
            name,
        })
    }

    /// Artifact path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PriceModel for OnnxPriceModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let input: Tensor = tract_ndarray::Array2::from_shape_vec((1, FEATURE_DIMENSION), features.to_f32())
            .map_err(|e| InferenceError::InvalidInputShape {
                expected: format!("[1, {}]", FEATURE_DIMENSION),
                actual: e.to_string(),
            })?
            .into();

        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| InferenceError::InvalidOutput("model produced no outputs".to_string()))?;
        let values = output
            .cast_to::<f64>()
            .map_err(|e| InferenceError::InvalidOutput(e.to_string()))?;
        let values = values
            .as_slice::<f64>()
            .map_err(|e| InferenceError::InvalidOutput(e.to_string()))?;

        debug!("ONNX output shape {:?}", output.shape());
        values
            .first()
            .copied()
            .ok_or_else(|| InferenceError::InvalidOutput("empty output tensor".to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
