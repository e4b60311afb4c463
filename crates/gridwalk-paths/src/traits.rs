use gridwalk_core::{Context, Coord, Grid};

use crate::error::{Result, SearchError};
use crate::result::SearchResult;

/// A single-pair grid search that records its visit order.
///
/// Implementations reset the grid's run metadata before searching, never
/// touch tiles, and stop as soon as the end cell is finalized.
pub trait SearchAlgorithm {
    /// Short, stable identifier (`"dijkstra"`, `"astar"`).
    fn name(&self) -> &'static str;

    /// Search from `start` to `end`, which must be the grid's start and end
    /// tiles. `ctx` is polled once per frontier pop.
    fn run(
        &self,
        grid: &mut Grid,
        start: Coord,
        end: Coord,
        ctx: &Context,
    ) -> Result<SearchResult>;
}

/// Validate the grid and endpoints, then clear stale run metadata.
pub(crate) fn prepare(grid: &mut Grid, start: Coord, end: Coord) -> Result<()> {
    let expected = grid.validate().inspect_err(|e| {
        log::warn!("rejecting search on invalid grid: {e}");
    })?;
    if expected != (start, end) {
        log::warn!(
            "rejecting search from {start} to {end}: grid endpoints are {expected:?}"
        );
        return Err(SearchError::EndpointMismatch {
            expected,
            found: (start, end),
        });
    }
    grid.reset();
    Ok(())
}
