//! Step-recording shortest-path searches on a [`gridwalk_core::Grid`].
//!
//! Both searches share one contract ([`SearchAlgorithm`]): validate the
//! grid, reset its run metadata, pop cells from a frontier until the end
//! cell is finalized, and report every finalized cell in order together
//! with the reconstructed path.
//!
//! - **Dijkstra** ([`Dijkstra`]): unit-cost, single relaxation per cell
//! - **A\*** ([`AStar`]): Manhattan heuristic, lazy deletion of stale
//!   open-set entries
//!
//! Ties in either frontier resolve first-in, first-out, so the visit order
//! is fully deterministic.

mod algorithm;
mod astar;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod path;
mod result;
mod traits;

pub use algorithm::Algorithm;
pub use astar::AStar;
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use error::{Result, SearchError};
pub use result::{PathNode, SearchResult, SearchStats};
pub use traits::SearchAlgorithm;
