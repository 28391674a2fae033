#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the geometry module.
pub mod error;

/// Line fitting over point sets.
pub mod fit;

/// Homogeneous line representation.
pub mod line;

/// Point types.
pub mod point;

pub use error::GeometryError;
pub use fit::fit_line_tls;
pub use line::{cross, HomogeneousLine};
pub use point::Point2i;
