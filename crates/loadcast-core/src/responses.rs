//! Wire response types returned by the HTTP surface.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Efficiency;

/// Successful response from `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PredictionResponse {
    /// Predicted annual heating load in kWh/m².
    pub heating_load: f64,
    /// Predicted annual cooling load in kWh/m².
    pub cooling_load: f64,
    /// Derived efficiency category.
    pub efficiency: Efficiency,
    /// Advisory text paired with the category.
    pub recommendation: String,
}

impl PredictionResponse {
    /// Build a response from the two raw load predictions, deriving the
    /// classification and its recommendation.
    #[must_use]
    pub fn from_loads(heating: f64, cooling: f64) -> Self {
        let efficiency = Efficiency::classify(heating, cooling);
        Self {
            heating_load: heating,
            cooling_load: cooling,
            efficiency,
            recommendation: efficiency.recommendation().to_string(),
        }
    }
}
