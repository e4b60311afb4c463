//! Error types for gridwalk-core.

use thiserror::Error;

use crate::geom::Coord;

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors raised while building, editing or validating a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Grids need at least two cells so start and end can differ.
    #[error("invalid grid dimensions {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("coordinate {0} is outside the grid")]
    OutOfBounds(Coord),

    /// The edit would overlap the start and end, or wall one of them.
    #[error("cell {0} is occupied by an endpoint")]
    Occupied(Coord),

    #[error("grid has no start cell")]
    MissingStart,

    #[error("grid has no end cell")]
    MissingEnd,

    #[error("grid has two start cells: {first} and {second}")]
    DuplicateStart { first: Coord, second: Coord },

    #[error("grid has two end cells: {first} and {second}")]
    DuplicateEnd { first: Coord, second: Coord },

    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    Parse { line: usize, column: usize, ch: char },

    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },
}
