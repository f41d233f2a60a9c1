use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdNearestError {
    /// The dimension count of a tree must be at least 1.
    #[error("Invalid dimension count {0}, expected at least 1.")]
    InvalidDimensions(usize),

    /// A point added to a tree has fewer coordinates than the tree's dimension count.
    #[error("Point has {actual} coordinates when the tree expects at least {expected}.")]
    PointDimensions {
        /// Dimension count of the tree
        expected: usize,
        /// Number of coordinates of the point
        actual: usize,
    },

    /// A query point has fewer coordinates than the tree's dimension count.
    #[error("Query has {actual} coordinates when the tree expects at least {expected}.")]
    QueryDimensions {
        /// Dimension count of the tree
        expected: usize,
        /// Number of coordinates of the query
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, KdNearestError>;
