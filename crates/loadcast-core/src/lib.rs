//! # loadcast-core
//!
//! Domain types and pure request logic for the loadcast prediction service.
//!
//! This crate provides the pieces shared across the workspace:
//! - The `BuildingParameters` wire type and its boundary validation
//! - Closed enumerations for the discrete building parameters, each with a
//!   fixed mapping to the numeric code the regression features use
//! - Feature-vector assembly in the order the fitted artifacts expect
//! - The fixed-threshold efficiency classification and its advisory text
//! - Field-level validation error types
//!
//! Everything here is pure and stateless; model artifacts and HTTP wiring
//! live in `loadcast-model` and `loadcast-server`.

pub mod enums;
pub mod errors;
pub mod params;
pub mod responses;

pub use enums::{Efficiency, GlazingArea, GlazingAreaDistribution, Orientation, OverallHeight};
pub use errors::{FieldError, ValidationError};
pub use params::{BuildingParameters, ValidBuilding, FEATURE_COUNT};
pub use responses::PredictionResponse;
