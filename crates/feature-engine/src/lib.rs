//! Feature Engineering Engine
//!
//! Maps vehicle attributes onto the fixed numeric layout the trained price
//! model was fitted on.

mod categories;
mod error;
mod features;
mod input;

pub use categories::{categories, Brand, Category, CategoryOptions, FuelType, Location, OwnerType, Transmission};
pub use error::EncodeError;
pub use features::{FeatureEncoder, FeatureVector, FEATURE_DIMENSION, FEATURE_NAMES};
pub use input::VehicleInput;
