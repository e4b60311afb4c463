//! Error types for gridwalk-paths.

use gridwalk_core::{Coord, GridError};
use thiserror::Error;

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Reasons a search is rejected or stopped.
///
/// An unreachable end is not an error: it yields a result with an empty
/// shortest path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The grid violates the single-start/single-end invariant.
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),

    /// The endpoints passed to the search are not the grid's start and end.
    #[error("endpoint mismatch: grid has {expected:?}, search was given {found:?}")]
    EndpointMismatch {
        expected: (Coord, Coord),
        found: (Coord, Coord),
    },

    /// The run was cancelled through its [`Context`](gridwalk_core::Context).
    #[error("search cancelled")]
    Cancelled,

    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),
}
