//! Model artifact and inference error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading artifacts or running inference.
///
/// None of these are client-caused; the server surfaces them to callers
/// only as an opaque failure and logs the full detail.
#[derive(Debug, Error)]
pub enum ModelError {
    /// An artifact file could not be read.
    #[error("failed to read artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An artifact file is not valid JSON for its expected shape.
    #[error("failed to parse artifact {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An artifact's parameter count disagrees with the scaler's.
    #[error("{name} artifact has {actual} coefficients, expected {expected}")]
    ShapeMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The scaler's mean and scale vectors have different lengths.
    #[error("scaler mean has {mean} entries but scale has {scale}")]
    ScalerShape { mean: usize, scale: usize },

    /// A scale entry is zero or non-finite; the transform would be degenerate.
    #[error("scaler has a zero or non-finite scale entry at index {index}")]
    DegenerateScale { index: usize },

    /// An artifact contains a NaN or infinite parameter.
    #[error("{name} artifact contains a non-finite parameter")]
    NonFiniteParameter { name: &'static str },

    /// The input vector does not match the fitted feature count.
    #[error("feature vector has {actual} entries, models expect {expected}")]
    FeatureCount { expected: usize, actual: usize },

    /// A regression produced a NaN or infinite prediction.
    #[error("{model} model produced a non-finite prediction")]
    NonFinitePrediction { model: &'static str },
}
