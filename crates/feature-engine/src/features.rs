//! Feature Vector Assembly

use crate::categories::{Brand, Category, FuelType, Location, OwnerType, Transmission};
use crate::error::EncodeError;
use crate::input::VehicleInput;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of features in the vector
pub const FEATURE_DIMENSION: usize = 11;

/// Column order the price model was fitted on
pub const FEATURE_NAMES: [&str; FEATURE_DIMENSION] = [
    "location",
    "age",
    "distance",
    "fuel_type",
    "transmission",
    "owner_type",
    "mileage",
    "engine_cc",
    "power",
    "seats",
    "brand",
];

/// Feature vector for ML inference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Raw feature values, ordered as `FEATURE_NAMES`
    pub values: [f64; FEATURE_DIMENSION],
}

impl FeatureVector {
    /// Wrap already-ordered values
    pub fn new(values: [f64; FEATURE_DIMENSION]) -> Self {
        Self { values }
    }

    /// Values as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Look up a value by feature name
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|idx| self.values[idx])
    }

    /// Values narrowed to `f32` for model runtimes that expect single precision
    pub fn to_f32(&self) -> Vec<f32> {
        self.values.iter().map(|v| *v as f32).collect()
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            values: [0.0; FEATURE_DIMENSION],
        }
    }
}

/// Encoder from vehicle records to model features
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Create a new encoder
    pub fn new() -> Self {
        Self
    }

    /// Encode a vehicle record
    ///
    /// Every categorical label must belong to its category map; numeric
    /// fields are passed through without range checks.
    pub fn encode(&self, input: &VehicleInput) -> Result<FeatureVector, EncodeError> {
        let location = Location::parse(&input.location)?;
        let fuel_type = FuelType::parse(&input.fuel_type)?;
        let transmission = Transmission::parse(&input.transmission)?;
        let owner_type = OwnerType::parse(&input.owner_type)?;
        let brand = Brand::parse(&input.brand)?;

        let values = [
            f64::from(location.code()),
            f64::from(input.age),
            f64::from(input.distance),
            f64::from(fuel_type.code()),
            f64::from(transmission.code()),
            f64::from(owner_type.code()),
            input.mileage,
            f64::from(input.engine_cc),
            input.power,
            f64::from(input.seats),
            f64::from(brand.code()),
        ];

        debug!(
            "Encoded {} {} ({}): {:?}",
            brand.label(),
            fuel_type.label(),
            location.label(),
            values
        );

        Ok(FeatureVector { values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn toyota_in_pune() -> VehicleInput {
        VehicleInput {
            brand: "Toyota".to_string(),
            location: "Pune".to_string(),
            fuel_type: "Petrol".to_string(),
            transmission: "Manual".to_string(),
            owner_type: "First".to_string(),
            age: 5,
            distance: 50_000,
            mileage: 15.0,
            engine_cc: 1500,
            power: 100.0,
            seats: 5,
        }
    }

    #[test]
    fn test_reference_vehicle_encoding() {
        let features = FeatureEncoder::new().encode(&toyota_in_pune()).unwrap();
        assert_eq!(
            features.values,
            [10.0, 5.0, 50_000.0, 4.0, 1.0, 0.0, 15.0, 1500.0, 100.0, 5.0, 30.0]
        );
    }

    #[test]
    fn test_named_lookup_follows_order() {
        let features = FeatureEncoder::new().encode(&toyota_in_pune()).unwrap();
        assert_eq!(features.get("location"), Some(10.0));
        assert_eq!(features.get("brand"), Some(30.0));
        assert_eq!(features.get("mileage"), Some(15.0));
        assert_eq!(features.get("colour"), None);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let encoder = FeatureEncoder::new();

        let input = VehicleInput {
            brand: String::new(),
            ..toyota_in_pune()
        };
        assert_eq!(
            encoder.encode(&input),
            Err(EncodeError::UnknownCategory {
                field: "brand",
                label: String::new(),
            })
        );

        let input = VehicleInput {
            owner_type: "Fifth".to_string(),
            ..toyota_in_pune()
        };
        assert!(matches!(
            encoder.encode(&input),
            Err(EncodeError::UnknownCategory { field: "owner_type", .. })
        ));
    }

    #[test]
    fn test_numeric_fields_not_range_checked() {
        let input = VehicleInput {
            age: 120,
            seats: 40,
            ..toyota_in_pune()
        };
        let features = FeatureEncoder::new().encode(&input).unwrap();
        assert_eq!(features.get("age"), Some(120.0));
        assert_eq!(features.get("seats"), Some(40.0));
    }

    #[test]
    fn test_input_deserializes_from_json() {
        let json = r#"{
            "brand": "Mercedes-Benz", "location": "Delhi", "fuel_type": "Diesel",
            "transmission": "Automatic", "owner_type": "Fourth & Above",
            "age": 12, "distance": 140000, "mileage": 11.5,
            "engine_cc": 2987, "power": 224.0, "seats": 5
        }"#;
        let input: VehicleInput = serde_json::from_str(json).unwrap();
        let features = FeatureEncoder::new().encode(&input).unwrap();
        assert_eq!(
            features.values,
            [4.0, 12.0, 140_000.0, 1.0, 0.0, 1.0, 11.5, 2987.0, 224.0, 5.0, 20.0]
        );
    }

    fn any_input() -> impl Strategy<Value = VehicleInput> {
        (
            prop::sample::select(Brand::ALL.to_vec()),
            prop::sample::select(Location::ALL.to_vec()),
            prop::sample::select(FuelType::ALL.to_vec()),
            prop::sample::select(Transmission::ALL.to_vec()),
            prop::sample::select(OwnerType::ALL.to_vec()),
            (1u32..=50, 0u32..=300_000, 0.0f64..=50.0),
            (500u32..=8000, 0.0f64..=1000.0, 2u32..=8),
        )
            .prop_map(
                |(brand, location, fuel, transmission, owner, (age, distance, mileage), (cc, power, seats))| {
                    VehicleInput {
                        brand: brand.label().to_string(),
                        location: location.label().to_string(),
                        fuel_type: fuel.label().to_string(),
                        transmission: transmission.label().to_string(),
                        owner_type: owner.label().to_string(),
                        age,
                        distance,
                        mileage,
                        engine_cc: cc,
                        power,
                        seats,
                    }
                },
            )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_encoding_is_deterministic(input in any_input()) {
            let encoder = FeatureEncoder::new();
            let first = encoder.encode(&input).unwrap();
            let second = encoder.encode(&input).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_vector_follows_fixed_order(input in any_input()) {
            let features = FeatureEncoder::new().encode(&input).unwrap();
            let v = features.values;
            prop_assert_eq!(features.as_slice().len(), FEATURE_DIMENSION);
            prop_assert_eq!(v[0], f64::from(Location::parse(&input.location).unwrap().code()));
            prop_assert_eq!(v[1], f64::from(input.age));
            prop_assert_eq!(v[2], f64::from(input.distance));
            prop_assert_eq!(v[3], f64::from(FuelType::parse(&input.fuel_type).unwrap().code()));
            prop_assert_eq!(v[4], f64::from(Transmission::parse(&input.transmission).unwrap().code()));
            prop_assert_eq!(v[5], f64::from(OwnerType::parse(&input.owner_type).unwrap().code()));
            prop_assert_eq!(v[6], input.mileage);
            prop_assert_eq!(v[7], f64::from(input.engine_cc));
            prop_assert_eq!(v[8], input.power);
            prop_assert_eq!(v[9], f64::from(input.seats));
            prop_assert_eq!(v[10], f64::from(Brand::parse(&input.brand).unwrap().code()));
        }
    }
}
