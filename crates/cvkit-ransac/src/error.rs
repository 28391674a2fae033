/// Errors returned by the line estimator.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LineRansacError {
    /// The input has too few points to define a line.
    #[error("Need at least {required} points to fit a line, got {actual}")]
    InsufficientInput {
        /// Minimum number of points.
        required: usize,
        /// Number of points provided.
        actual: usize,
    },

    /// The iteration budget was exhausted before any hypothesis reached the inlier threshold.
    #[error("No line with enough inliers after {iterations} iterations (best had {best_inlier_count})")]
    NoModelFound {
        /// Number of iterations performed.
        iterations: usize,
        /// Largest inlier count seen over all hypotheses.
        best_inlier_count: usize,
    },

    /// The estimator parameters are out of range.
    #[error("Invalid parameters: {0}")]
    InvalidParams(&'static str),
}
