//! The prediction pipeline: validate, scale, predict, classify.

use loadcast_core::{BuildingParameters, PredictionResponse, ValidationError};
use loadcast_model::{ModelError, ModelSet};
use thiserror::Error;

/// Failure modes of a prediction request. The two sides get different
/// reporting: validation errors surface field-level detail to the caller,
/// inference errors are logged server-side and surfaced opaquely.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Artifacts never loaded at startup.
    #[error("model artifacts are not loaded")]
    ModelsUnavailable,

    #[error(transparent)]
    Inference(#[from] ModelError),
}

/// Run the full pipeline for one request.
///
/// Validation runs first, so an invalid request is rejected with field
/// detail even when no models are loaded and no model is ever invoked on a
/// partially valid request.
///
/// # Errors
///
/// Returns [`PredictError::Validation`] for client-caused failures and
/// [`PredictError::ModelsUnavailable`] / [`PredictError::Inference`] for
/// server-side ones.
pub fn predict(
    models: Option<&ModelSet>,
    params: &BuildingParameters,
) -> Result<PredictionResponse, PredictError> {
    let valid = params.validate()?;
    let models = models.ok_or(PredictError::ModelsUnavailable)?;
    let loads = models.infer(&valid.feature_vector())?;
    Ok(PredictionResponse::from_loads(loads.heating, loads.cooling))
}
