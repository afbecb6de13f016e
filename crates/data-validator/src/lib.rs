//! Input Validation
//!
//! Range checking for the numeric fields of the vehicle form.

mod error;
mod record;
mod validator;

pub use error::ValidationError;
pub use record::VehicleRecord;
pub use validator::{Validator, ValidationConfig, ValidationResult};
