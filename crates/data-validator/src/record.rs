//! Wire Form of a Vehicle

use feature_engine::VehicleInput;
use serde::{Deserialize, Serialize};

/// Vehicle as submitted over HTTP, before numeric checks
///
/// Every numeric field is read as a float so that negative or fractional
/// counts reach the validator instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub brand: String,
    pub location: String,
    pub fuel_type: String,
    pub transmission: String,
    pub owner_type: String,
    pub age: f64,
    pub distance: f64,
    pub mileage: f64,
    pub engine_cc: f64,
    pub power: f64,
    pub seats: f64,
}

impl From<&VehicleInput> for VehicleRecord {
    fn from(input: &VehicleInput) -> Self {
        Self {
            brand: input.brand.clone(),
            location: input.location.clone(),
            fuel_type: input.fuel_type.clone(),
            transmission: input.transmission.clone(),
            owner_type: input.owner_type.clone(),
            age: f64::from(input.age),
            distance: f64::from(input.distance),
            mileage: input.mileage,
            engine_cc: f64::from(input.engine_cc),
            power: input.power,
            seats: f64::from(input.seats),
        }
    }
}
