//! # loadcast-model
//!
//! Pre-trained regression artifacts and the inference pipeline for loadcast.
//!
//! Three artifacts are loaded once at startup and shared read-only for the
//! lifetime of the process:
//! - `scaler.json` — a fitted [`StandardScaler`]
//! - `heating.json` — the heating-load [`LinearModel`]
//! - `cooling.json` — the cooling-load [`LinearModel`]
//!
//! [`ModelSet`] validates all three shapes against each other at load time,
//! so a truncated or corrupt artifact fails at startup instead of on the
//! first request. Inference is pure `&self`; wrap a `ModelSet` in an `Arc`
//! and share it across request workers without locking.

pub mod error;
mod linear;
mod scaler;

pub use error::ModelError;
pub use linear::LinearModel;
pub use scaler::StandardScaler;

use serde::de::DeserializeOwned;
use std::path::Path;

/// Artifact file names inside the configured model directory.
pub const SCALER_FILE: &str = "scaler.json";
pub const HEATING_FILE: &str = "heating.json";
pub const COOLING_FILE: &str = "cooling.json";

/// Raw predictions from the two regressions, in kWh/m².
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loads {
    pub heating: f64,
    pub cooling: f64,
}

/// The immutable inference context: one scaler, two regressions.
#[derive(Debug, Clone)]
pub struct ModelSet {
    scaler: StandardScaler,
    heating: LinearModel,
    cooling: LinearModel,
}

impl ModelSet {
    /// Assemble a model set from already-deserialized artifacts, checking
    /// that every shape agrees with the scaler's feature count.
    ///
    /// # Errors
    ///
    /// Returns a shape or parameter error if any artifact is inconsistent.
    pub fn from_parts(
        scaler: StandardScaler,
        heating: LinearModel,
        cooling: LinearModel,
    ) -> Result<Self, ModelError> {
        scaler.check()?;
        heating.check("heating", scaler.len())?;
        cooling.check("cooling", scaler.len())?;
        Ok(Self {
            scaler,
            heating,
            cooling,
        })
    }

    /// Load and validate all three artifacts from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an I/O or parse error naming the offending file, or a shape
    /// error if the artifacts disagree with each other.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let scaler: StandardScaler = load_artifact(&dir.join(SCALER_FILE))?;
        let heating: LinearModel = load_artifact(&dir.join(HEATING_FILE))?;
        let cooling: LinearModel = load_artifact(&dir.join(COOLING_FILE))?;
        let set = Self::from_parts(scaler, heating, cooling)?;
        tracing::info!(
            dir = %dir.display(),
            features = set.n_features(),
            "model artifacts loaded"
        );
        Ok(set)
    }

    /// Feature count the artifacts were fitted on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.scaler.len()
    }

    /// Scale the raw feature vector and run both regressions on it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FeatureCount`] on a length mismatch and
    /// [`ModelError::NonFinitePrediction`] if either regression produces a
    /// NaN or infinity.
    pub fn infer(&self, features: &[f64]) -> Result<Loads, ModelError> {
        if features.len() != self.n_features() {
            return Err(ModelError::FeatureCount {
                expected: self.n_features(),
                actual: features.len(),
            });
        }

        let scaled = self.scaler.transform(features);
        let heating = self.heating.predict(&scaled);
        let cooling = self.cooling.predict(&scaled);

        if !heating.is_finite() {
            return Err(ModelError::NonFinitePrediction { model: "heating" });
        }
        if !cooling.is_finite() {
            return Err(ModelError::NonFinitePrediction { model: "cooling" });
        }

        Ok(Loads { heating, cooling })
    }
}

fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
