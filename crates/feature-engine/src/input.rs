//! Vehicle Input Record

use serde::{Deserialize, Serialize};

/// One vehicle as submitted by the presentation layer
///
/// Categorical fields carry the UI label; numeric fields arrive already
/// bounded by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleInput {
    pub brand: String,
    pub location: String,
    pub fuel_type: String,
    pub transmission: String,
    pub owner_type: String,
    /// Vehicle age in years
    pub age: u32,
    /// Kilometres driven
    pub distance: u32,
    /// Fuel efficiency (km/l)
    pub mileage: f64,
    /// Engine displacement (cc)
    pub engine_cc: u32,
    /// Power (bhp)
    pub power: f64,
    pub seats: u32,
}

impl Default for VehicleInput {
    fn default() -> Self {
        Self {
            brand: "Ambassador".to_string(),
            location: "Ahmedabad".to_string(),
            fuel_type: "CNG".to_string(),
            transmission: "Automatic".to_string(),
            owner_type: "First".to_string(),
            age: 5,
            distance: 50_000,
            mileage: 15.0,
            engine_cc: 1500,
            power: 100.0,
            seats: 5,
        }
    }
}
