/// An error type for the geometry module.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The line normal `(a, b)` vanishes, e.g. a line through two coincident points.
    #[error("Degenerate line: the normal vector (a, b) is zero")]
    DegenerateLine,

    /// Not enough points to define the requested model.
    #[error("Need at least {required} points, got {actual}")]
    InsufficientPoints {
        /// Minimum number of points for the model.
        required: usize,
        /// Number of points provided.
        actual: usize,
    },

    /// One of the line coefficients is NaN or infinite.
    #[error("Line coefficients must be finite")]
    NonFiniteCoefficients,
}
