//! Serde roundtrip and JsonSchema validation tests for the wire types.

use loadcast_core::{BuildingParameters, Efficiency, FieldError, PredictionResponse};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    building_parameters_roundtrip,
    BuildingParameters,
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
);

roundtrip_and_validate!(
    prediction_response_roundtrip,
    PredictionResponse,
    PredictionResponse::from_loads(24.7, 27.2)
);

roundtrip_and_validate!(
    field_error_roundtrip,
    FieldError,
    FieldError::new("surface_area", "must be between 500 and 820")
);

#[test]
fn request_schema_marks_every_field_required() {
    let schema = serde_json::to_value(schema_for!(BuildingParameters)).unwrap();
    let required: Vec<&str> = schema["required"]
        .as_array()
        .expect("schema should list required fields")
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    for field in [
        "relative_compactness",
        "surface_area",
        "wall_area",
        "roof_area",
        "overall_height",
        "orientation",
        "glazing_area",
        "glazing_area_distribution",
    ] {
        assert!(required.contains(&field), "{field} should be required");
    }
}

#[test]
fn efficiency_schema_enumerates_the_three_categories() {
    let schema = serde_json::to_value(schema_for!(Efficiency)).unwrap();
    let instance = serde_json::json!("Moderate");
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "{errors:?}");

    let bad = serde_json::json!("Excellent");
    let errors = validate_against_schema(&schema, &bad);
    assert!(!errors.is_empty(), "unknown category should fail validation");
}
