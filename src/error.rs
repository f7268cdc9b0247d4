use thiserror::Error;

use crate::Rectangle;

/// Errors raised by index construction, insertion, and queries.
#[derive(Debug, Error, PartialEq)]
pub enum RTreeError {
    #[error("invalid rectangle {0:?}: extents must be finite and non-negative")]
    InvalidRectangle(Rectangle),

    #[error("invalid query {0:?}: extents must be finite and non-negative")]
    InvalidQuery(Rectangle),

    #[error("max_entries must be at least 2 to split a node, got {max_entries}")]
    UnderfullSplit { max_entries: usize },

    #[error("WKT error: {0}")]
    Wkt(String),

    #[error("integrity violation: {0}")]
    Integrity(String),
}

/// Result type for R-tree operations
pub type RTreeResult<T> = Result<T, RTreeError>;
