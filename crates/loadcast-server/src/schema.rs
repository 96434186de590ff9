//! `loadcast schema` — JSON Schema export for external tooling (frontend
//! form generation, contract tests). Runs without config or artifacts.

use loadcast_core::{BuildingParameters, PredictionResponse};
use schemars::schema_for;

/// Print the request and response schemas as one JSON document on stdout.
///
/// # Errors
///
/// Fails only if schema serialization fails.
pub fn print() -> anyhow::Result<()> {
    let schemas = serde_json::json!({
        "building_parameters": schema_for!(BuildingParameters),
        "prediction_response": schema_for!(PredictionResponse),
    });
    println!("{}", serde_json::to_string_pretty(&schemas)?);
    Ok(())
}
