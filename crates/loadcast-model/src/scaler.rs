//! Fitted feature standardizer.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A fitted standardization transform: per-feature mean and scale.
///
/// `transform` maps each raw feature to `(x - mean) / scale`, exactly what
/// the regressions were trained against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Number of features the scaler was fitted on.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }

    /// Standardize a raw feature vector of matching length.
    #[must_use]
    pub fn transform(&self, features: &[f64]) -> Vec<f64> {
        debug_assert_eq!(features.len(), self.len());
        features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect()
    }

    /// Reject mismatched mean/scale lengths and degenerate or non-finite
    /// scale entries. Run once at load time.
    pub(crate) fn check(&self) -> Result<(), ModelError> {
        if self.mean.len() != self.scale.len() {
            return Err(ModelError::ScalerShape {
                mean: self.mean.len(),
                scale: self.scale.len(),
            });
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err(ModelError::NonFiniteParameter { name: "scaler" });
        }
        if let Some(index) = self
            .scale
            .iter()
            .position(|s| !s.is_finite() || *s == 0.0)
        {
            return Err(ModelError::DegenerateScale { index });
        }
        Ok(())
    }
}
