//! Fitted linear regression parameters.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A fitted linear regression: coefficients plus intercept.
///
/// Both the heating (ridge) and cooling (lasso) artifacts are exported in
/// this form; regularization only affects training, not evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    /// Evaluate the regression on an already scaled feature vector.
    ///
    /// The caller guarantees the length matches; `ModelSet` checks it once
    /// per request before dispatching to either model.
    #[must_use]
    pub fn predict(&self, features: &[f64]) -> f64 {
        debug_assert_eq!(features.len(), self.coefficients.len());
        self.coefficients
            .iter()
            .zip(features)
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept
    }

    /// Check the artifact against the fitted feature count and reject
    /// non-finite parameters. Run once at load time.
    pub(crate) fn check(&self, name: &'static str, expected: usize) -> Result<(), ModelError> {
        if self.coefficients.len() != expected {
            return Err(ModelError::ShapeMismatch {
                name,
                expected,
                actual: self.coefficients.len(),
            });
        }
        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ModelError::NonFiniteParameter { name });
        }
        Ok(())
    }
}
