#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for line estimation.
pub mod error;

/// The two-point line RANSAC estimator.
pub mod estimator;

/// Successive extraction of several lines from one point set.
pub mod extract;

/// Estimator parameters and their configuration file format.
pub mod params;

pub use error::LineRansacError;
pub use estimator::{
    count_inliers, fit_line_ransac, fit_line_ransac_with_rng, is_inlier, LineModel,
};
pub use extract::{extract_lines, extract_lines_with_rng};
pub use params::{LineRansacParams, ParamsError};
