//! Request parameters and boundary validation.
//!
//! `BuildingParameters` is the raw wire type: every field deserializes as an
//! optional number so validation can report every missing or out-of-domain
//! field in one pass instead of aborting at the first. `validate` produces a
//! `ValidBuilding` whose discrete fields are the closed enums from
//! [`crate::enums`]; only a `ValidBuilding` can be turned into a feature
//! vector.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{GlazingArea, GlazingAreaDistribution, Orientation, OverallHeight};
use crate::errors::{FieldError, ValidationError};

/// Number of model features. Fixed by the fitted artifacts.
pub const FEATURE_COUNT: usize = 8;

/// Building design parameters accepted by `POST /predict`.
///
/// All eight fields are required; no defaults are substituted. Unknown
/// fields are rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BuildingParameters {
    /// Shape-efficiency ratio (volume-to-surface proxy). Range 0.6 to 1.0.
    #[schemars(required, range(min = 0.6, max = 1.0))]
    pub relative_compactness: Option<f64>,

    /// Total surface area in m². Range 500 to 820.
    #[schemars(required, range(min = 500.0, max = 820.0))]
    pub surface_area: Option<f64>,

    /// Wall area in m². Range 240 to 420.
    #[schemars(required, range(min = 240.0, max = 420.0))]
    pub wall_area: Option<f64>,

    /// Roof area in m². Range 110 to 225.
    #[schemars(required, range(min = 110.0, max = 225.0))]
    pub roof_area: Option<f64>,

    /// Overall height in metres. Allowed: 3.5 or 7.0.
    #[schemars(required)]
    pub overall_height: Option<f64>,

    /// Compass orientation code. Allowed: 2, 3, 4 or 5.
    #[schemars(required)]
    pub orientation: Option<f64>,

    /// Glazed fraction of the facade. Allowed: 0.0, 0.1, 0.25 or 0.4.
    #[schemars(required)]
    pub glazing_area: Option<f64>,

    /// Facade distribution of the glazed area. Allowed: 0 through 5.
    #[schemars(required)]
    pub glazing_area_distribution: Option<f64>,
}

impl BuildingParameters {
    /// Validate every field against its domain.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every missing or out-of-domain
    /// field. Any single invalid field rejects the whole request; no model
    /// is ever invoked on a partially valid one.
    pub fn validate(&self) -> Result<ValidBuilding, ValidationError> {
        let mut errors = Vec::new();

        let relative_compactness = check_range(
            "relative_compactness",
            self.relative_compactness,
            0.6,
            1.0,
            &mut errors,
        );
        let surface_area = check_range("surface_area", self.surface_area, 500.0, 820.0, &mut errors);
        let wall_area = check_range("wall_area", self.wall_area, 240.0, 420.0, &mut errors);
        let roof_area = check_range("roof_area", self.roof_area, 110.0, 225.0, &mut errors);
        let overall_height = check_member(
            "overall_height",
            self.overall_height,
            "3.5, 7.0",
            OverallHeight::from_value,
            &mut errors,
        );
        let orientation = check_member(
            "orientation",
            self.orientation,
            "2, 3, 4, 5",
            Orientation::from_value,
            &mut errors,
        );
        let glazing_area = check_member(
            "glazing_area",
            self.glazing_area,
            "0.0, 0.1, 0.25, 0.4",
            GlazingArea::from_value,
            &mut errors,
        );
        let glazing_area_distribution = check_member(
            "glazing_area_distribution",
            self.glazing_area_distribution,
            "0, 1, 2, 3, 4, 5",
            GlazingAreaDistribution::from_value,
            &mut errors,
        );

        // A field is Some exactly when it passed; any None pushed an error.
        let (
            Some(relative_compactness),
            Some(surface_area),
            Some(wall_area),
            Some(roof_area),
            Some(overall_height),
            Some(orientation),
            Some(glazing_area),
            Some(glazing_area_distribution),
        ) = (
            relative_compactness,
            surface_area,
            wall_area,
            roof_area,
            overall_height,
            orientation,
            glazing_area,
            glazing_area_distribution,
        )
        else {
            return Err(ValidationError::new(errors));
        };

        Ok(ValidBuilding {
            relative_compactness,
            surface_area,
            wall_area,
            roof_area,
            overall_height,
            orientation,
            glazing_area,
            glazing_area_distribution,
        })
    }
}

/// A fully validated set of building parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidBuilding {
    pub relative_compactness: f64,
    pub surface_area: f64,
    pub wall_area: f64,
    pub roof_area: f64,
    pub overall_height: OverallHeight,
    pub orientation: Orientation,
    pub glazing_area: GlazingArea,
    pub glazing_area_distribution: GlazingAreaDistribution,
}

impl ValidBuilding {
    /// Assemble the ordered model feature vector.
    ///
    /// The order is fixed by the fitted artifacts: compactness, surface,
    /// wall, roof, height, orientation code, glazing fraction, glazing
    /// distribution code.
    #[must_use]
    pub fn feature_vector(&self) -> [f64; FEATURE_COUNT] {
        [
            self.relative_compactness,
            self.surface_area,
            self.wall_area,
            self.roof_area,
            self.overall_height.value(),
            f64::from(self.orientation.code()),
            self.glazing_area.fraction(),
            f64::from(self.glazing_area_distribution.code()),
        ]
    }
}

fn require(
    field: &'static str,
    value: Option<f64>,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    if value.is_none() {
        errors.push(FieldError::new(field, "field required"));
    }
    value
}

fn check_range(
    field: &'static str,
    value: Option<f64>,
    min: f64,
    max: f64,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let value = require(field, value, errors)?;
    if (min..=max).contains(&value) {
        Some(value)
    } else {
        errors.push(FieldError::new(
            field,
            format!("must be between {min} and {max}"),
        ));
        None
    }
}

fn check_member<T>(
    field: &'static str,
    value: Option<f64>,
    allowed: &str,
    parse: impl FnOnce(f64) -> Option<T>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    let value = require(field, value, errors)?;
    let parsed = parse(value);
    if parsed.is_none() {
        errors.push(FieldError::new(field, format!("must be one of {allowed}")));
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn example() -> BuildingParameters {
        BuildingParameters {
            relative_compactness: Some(0.71),
            surface_area: Some(609.5),
            wall_area: Some(300.0),
            roof_area: Some(150.25),
            overall_height: Some(3.5),
            orientation: Some(2.0),
            glazing_area: Some(0.25),
            glazing_area_distribution: Some(2.0),
        }
    }

    #[test]
    fn valid_example_produces_ordered_feature_vector() {
        let valid = example().validate().expect("example should validate");
        assert_eq!(
            valid.feature_vector(),
            [0.71, 609.5, 300.0, 150.25, 3.5, 2.0, 0.25, 2.0]
        );
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut params = example();
        params.relative_compactness = Some(0.6);
        params.surface_area = Some(820.0);
        params.wall_area = Some(240.0);
        params.roof_area = Some(225.0);
        assert!(params.validate().is_ok());
    }

    #[rstest]
    #[case::compactness_low(BuildingParameters { relative_compactness: Some(0.5), ..example() }, "relative_compactness")]
    #[case::compactness_high(BuildingParameters { relative_compactness: Some(1.2), ..example() }, "relative_compactness")]
    #[case::surface(BuildingParameters { surface_area: Some(480.0), ..example() }, "surface_area")]
    #[case::wall(BuildingParameters { wall_area: Some(430.0), ..example() }, "wall_area")]
    #[case::roof(BuildingParameters { roof_area: Some(100.0), ..example() }, "roof_area")]
    #[case::height(BuildingParameters { overall_height: Some(5.0), ..example() }, "overall_height")]
    #[case::orientation(BuildingParameters { orientation: Some(6.0), ..example() }, "orientation")]
    #[case::orientation_fractional(BuildingParameters { orientation: Some(2.5), ..example() }, "orientation")]
    #[case::glazing(BuildingParameters { glazing_area: Some(0.3), ..example() }, "glazing_area")]
    #[case::distribution(BuildingParameters { glazing_area_distribution: Some(7.0), ..example() }, "glazing_area_distribution")]
    fn out_of_domain_field_is_reported_by_name(
        #[case] params: BuildingParameters,
        #[case] field: &str,
    ) {
        let error = params.validate().expect_err("should reject");
        assert_eq!(error.errors.len(), 1);
        assert_eq!(error.errors[0].field, field);
    }

    #[test]
    fn missing_field_is_reported_as_required() {
        let params = BuildingParameters {
            overall_height: None,
            ..example()
        };
        let error = params.validate().expect_err("should reject");
        assert_eq!(
            error.errors,
            vec![FieldError::new("overall_height", "field required")]
        );
    }

    #[test]
    fn all_failures_are_collected() {
        let params = BuildingParameters {
            relative_compactness: Some(0.2),
            surface_area: None,
            wall_area: Some(300.0),
            roof_area: Some(150.0),
            overall_height: Some(4.0),
            orientation: Some(2.0),
            glazing_area: Some(0.25),
            glazing_area_distribution: None,
        };
        let error = params.validate().expect_err("should reject");
        let fields: Vec<&str> = error.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "relative_compactness",
                "surface_area",
                "overall_height",
                "glazing_area_distribution"
            ]
        );
    }

    #[test]
    fn unknown_fields_are_rejected_at_deserialization() {
        let result = serde_json::from_value::<BuildingParameters>(serde_json::json!({
            "relative_compactness": 0.71,
            "surface_area": 609.5,
            "wall_area": 300,
            "roof_area": 150.25,
            "overall_height": 3.5,
            "orientation": 2,
            "glazing_area": 0.25,
            "glazing_area_distribution": 2,
            "floor_area": 120.0,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn integer_wire_values_parse_for_continuous_fields() {
        let params: BuildingParameters = serde_json::from_value(serde_json::json!({
            "relative_compactness": 0.71,
            "surface_area": 600,
            "wall_area": 300,
            "roof_area": 150,
            "overall_height": 3.5,
            "orientation": 2,
            "glazing_area": 0.25,
            "glazing_area_distribution": 2,
        }))
        .expect("integers should deserialize into f64 fields");
        assert!(params.validate().is_ok());
    }
}
