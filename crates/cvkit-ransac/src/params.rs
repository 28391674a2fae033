use crate::error::LineRansacError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for the line RANSAC estimator.
///
/// Missing fields in a configuration file fall back to [`Default`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineRansacParams {
    /// Maximum number of hypotheses to try.
    pub max_iterations: usize,
    /// Minimum number of inliers for a hypothesis to be accepted.
    pub min_inliers: usize,
    /// A point is an inlier if its distance to the line is strictly below this value.
    pub distance_threshold: f64,
    /// Optional RNG seed for deterministic runs.
    pub random_seed: Option<u64>,
    /// Refit the accepted line on its inliers with total least squares.
    pub refine: bool,
}

impl Default for LineRansacParams {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            min_inliers: 600,
            distance_threshold: 10.0,
            random_seed: None,
            refine: false,
        }
    }
}

/// Errors produced while loading parameters from a file.
#[derive(thiserror::Error, Debug)]
pub enum ParamsError {
    /// The file could not be read.
    #[error("Failed to read parameters file")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON for [`LineRansacParams`].
    #[error("Failed to parse parameters: {0}")]
    Json(#[from] serde_json::Error),

    /// The parameters were parsed but are out of range.
    #[error(transparent)]
    Invalid(#[from] LineRansacError),
}

impl LineRansacParams {
    /// Check that the parameters describe a runnable estimator.
    ///
    /// The iteration budget must be non-zero and the distance threshold finite and positive.
    pub fn validate(&self) -> Result<(), LineRansacError> {
        if self.max_iterations == 0 {
            return Err(LineRansacError::InvalidParams(
                "max_iterations must be greater than zero",
            ));
        }
        if !self.distance_threshold.is_finite() || self.distance_threshold <= 0.0 {
            return Err(LineRansacError::InvalidParams(
                "distance_threshold must be finite and positive",
            ));
        }
        Ok(())
    }

    /// Parse and validate parameters from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Read and validate parameters from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
