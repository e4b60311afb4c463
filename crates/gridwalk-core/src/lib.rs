//! **gridwalk-core**: grid model for step-wise pathfinding visualisation.
//!
//! This crate provides the board the searches run on: coordinates, tiles,
//! cells carrying per-run traversal metadata, the [`Grid`] itself with its
//! single-start/single-end invariant, grid sizing configuration and a
//! cooperative cancellation token.

pub mod cell;
pub mod config;
pub mod context;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Tile, UNREACHABLE};
pub use config::GridConfig;
pub use context::Context;
pub use error::{GridError, Result};
pub use geom::{Coord, Range};
pub use grid::Grid;
