//! Reference Data Routes

use advisor::{car_types, CarType};
use axum::{extract::State, Json};
use data_validator::ValidationConfig;
use feature_engine::{categories, CategoryOptions, FEATURE_DIMENSION, FEATURE_NAMES};
use serde::Serialize;
use std::sync::Arc;

use crate::AppState;

/// Form options for the prediction UI
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub options: CategoryOptions,
    pub bounds: ValidationConfig,
    pub feature_order: [&'static str; FEATURE_DIMENSION],
}

/// Legal category labels and numeric bounds
pub async fn get_categories(State(state): State<Arc<AppState>>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        options: categories(),
        bounds: state.validator.config().clone(),
        feature_order: FEATURE_NAMES,
    })
}

/// Vehicle type guide
pub async fn get_car_types() -> Json<&'static [CarType]> {
    Json(car_types())
}
