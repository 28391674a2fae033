/// An error type for label tables.
#[derive(thiserror::Error, Debug)]
pub enum LabelError {
    /// The underlying reader failed.
    #[error("Failed to read label data")]
    Io(#[from] std::io::Error),

    /// A line of a colors file is not three values in `0..=255`.
    #[error("Invalid color on line {line}: {content:?}")]
    InvalidColor {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },

    /// The class id has no name in the table.
    #[error("Class id {class_id} out of range for {num_classes} classes")]
    UnknownClass {
        /// The requested class id.
        class_id: usize,
        /// Number of known classes.
        num_classes: usize,
    },
}
