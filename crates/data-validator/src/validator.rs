//! Data Validator for Range Checking

use crate::error::ValidationError;
use crate::record::VehicleRecord;
use feature_engine::VehicleInput;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration
///
/// Defaults match the bounds of the valuation form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Age valid range (years)
    pub age_range: (f64, f64),
    /// Distance valid range (km)
    pub distance_range: (f64, f64),
    /// Mileage valid range (km/l)
    pub mileage_range: (f64, f64),
    /// Engine displacement valid range (cc)
    pub engine_cc_range: (f64, f64),
    /// Power valid range (bhp)
    pub power_range: (f64, f64),
    /// Seat count valid range
    pub seats_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            age_range: (1.0, 50.0),
            distance_range: (0.0, 300_000.0),
            mileage_range: (0.0, 50.0),
            engine_cc_range: (500.0, 8000.0),
            power_range: (0.0, 1000.0),
            seats_range: (2.0, 8.0),
        }
    }
}

/// Result of validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }
}

/// Validator for the numeric fields of a vehicle record
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Bounds in use
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            Err(ValidationError::NotFinite { field })
        } else if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate a count field: in range and without a fractional part
    pub fn validate_count(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        self.validate_range(field, value, range)?;
        if value.fract() != 0.0 {
            return Err(ValidationError::NotWhole { field, value });
        }
        Ok(())
    }

    /// Validate every numeric field, collecting all violations
    pub fn validate_input(&self, input: &VehicleInput) -> ValidationResult {
        self.validate_record(&VehicleRecord::from(input))
    }

    /// Validate a submitted record, collecting all violations
    pub fn validate_record(&self, record: &VehicleRecord) -> ValidationResult {
        let counts = [
            ("age", record.age, self.config.age_range),
            ("distance", record.distance, self.config.distance_range),
            ("engine_cc", record.engine_cc, self.config.engine_cc_range),
            ("seats", record.seats, self.config.seats_range),
        ];
        let measures = [
            ("mileage", record.mileage, self.config.mileage_range),
            ("power", record.power, self.config.power_range),
        ];

        let errors: Vec<_> = counts
            .iter()
            .filter_map(|(field, value, range)| self.validate_count(*field, *value, *range).err())
            .chain(
                measures
                    .iter()
                    .filter_map(|(field, value, range)| self.validate_range(*field, *value, *range).err()),
            )
            .collect();
        let checks = counts.len() + measures.len();

        if errors.is_empty() {
            ValidationResult::valid(checks)
        } else {
            debug!("Input rejected with {} range violations", errors.len());
            ValidationResult::invalid(errors, checks)
        }
    }

    /// Check a submitted record and convert it to a typed input
    pub fn admit(&self, record: VehicleRecord) -> Result<VehicleInput, Vec<ValidationError>> {
        let result = self.validate_record(&record);
        if !result.valid {
            return Err(result.errors);
        }

        // Counts are whole and inside non-negative bounds at this point
        Ok(VehicleInput {
            brand: record.brand,
            location: record.location,
            fuel_type: record.fuel_type,
            transmission: record.transmission,
            owner_type: record.owner_type,
            age: record.age as u32,
            distance: record.distance as u32,
            mileage: record.mileage,
            engine_cc: record.engine_cc as u32,
            power: record.power,
            seats: record.seats as u32,
        })
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults_are_valid() {
        let validator = Validator::default();
        let result = validator.validate_input(&VehicleInput::default());
        assert!(result.valid);
        assert_eq!(result.fields_checked, 6);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let validator = Validator::default();
        let low = VehicleInput {
            age: 1,
            distance: 0,
            mileage: 0.0,
            engine_cc: 500,
            power: 0.0,
            seats: 2,
            ..Default::default()
        };
        let high = VehicleInput {
            age: 50,
            distance: 300_000,
            mileage: 50.0,
            engine_cc: 8000,
            power: 1000.0,
            seats: 8,
            ..Default::default()
        };
        assert!(validator.validate_input(&low).valid);
        assert!(validator.validate_input(&high).valid);
    }

    #[test]
    fn test_collects_every_violation() {
        let validator = Validator::default();
        let input = VehicleInput {
            age: 0,
            seats: 9,
            engine_cc: 100,
            ..Default::default()
        };
        let result = validator.validate_input(&input);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 3);
        assert_eq!(
            result.errors[0],
            ValidationError::OutOfRange {
                field: "age",
                value: 0.0,
                min: 1.0,
                max: 50.0,
            }
        );
    }

    #[test]
    fn test_non_finite_mileage() {
        let validator = Validator::default();
        let input = VehicleInput {
            mileage: f64::NAN,
            ..Default::default()
        };
        let result = validator.validate_input(&input);
        assert_eq!(result.errors, vec![ValidationError::NotFinite { field: "mileage" }]);
    }

    fn record() -> VehicleRecord {
        VehicleRecord::from(&VehicleInput::default())
    }

    #[test]
    fn test_negative_count_is_out_of_range() {
        let validator = Validator::default();
        let errors = validator
            .admit(VehicleRecord { age: -1.0, ..record() })
            .unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::OutOfRange {
                field: "age",
                value: -1.0,
                min: 1.0,
                max: 50.0,
            }]
        );
    }

    #[test]
    fn test_fractional_count_rejected() {
        let validator = Validator::default();
        let errors = validator
            .admit(VehicleRecord { distance: 50_000.5, ..record() })
            .unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::NotWhole {
                field: "distance",
                value: 50_000.5,
            }]
        );

        // Fractions are fine on measured quantities
        assert!(validator.admit(VehicleRecord { mileage: 15.25, ..record() }).is_ok());
    }

    #[test]
    fn test_admit_converts_counts() {
        let validator = Validator::default();
        let input = validator
            .admit(VehicleRecord { age: 7.0, seats: 7.0, ..record() })
            .unwrap();
        assert_eq!(input.age, 7);
        assert_eq!(input.seats, 7);
        assert_eq!(input.distance, 50_000);
        assert_eq!(input.brand, "Ambassador");
    }
}
