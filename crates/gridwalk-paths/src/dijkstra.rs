use gridwalk_core::{Context, Coord, Grid, UNREACHABLE};

use crate::error::{Result, SearchError};
use crate::frontier::Frontier;
use crate::path::reconstruct;
use crate::result::{PathNode, SearchResult};
use crate::traits::{SearchAlgorithm, prepare};

/// Dijkstra's algorithm with unit step cost.
///
/// Every unvisited neighbour of a finalized cell is relaxed, so when a cell
/// has several parents at the same depth the last one finalized becomes its
/// predecessor. A 4-connected grid is bipartite, so relaxing never changes
/// an assigned distance. Cells are queued once, on discovery, and frontier
/// ties resolve in discovery order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl SearchAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn run(
        &self,
        grid: &mut Grid,
        start: Coord,
        end: Coord,
        ctx: &Context,
    ) -> Result<SearchResult> {
        prepare(grid, start, end)?;
        log::debug!("dijkstra: searching {start} -> {end}");

        let mut visited = Vec::new();
        let mut open = Frontier::new();
        if let Some(cell) = grid.cell_mut(start) {
            cell.distance = 0;
        }
        open.push(start, 0);

        let mut nbuf = Vec::with_capacity(4);

        while let Some(cur) = open.pop() {
            if ctx.is_cancelled() {
                log::debug!("dijkstra: cancelled after {} cells", visited.len());
                return Err(SearchError::Cancelled);
            }

            let Some(cell) = grid.cell_mut(cur) else {
                continue;
            };
            if cell.visited {
                continue;
            }
            cell.visited = true;
            let dist = cell.distance;
            visited.push(PathNode { pos: cur, cost: dist });

            if cur == end {
                let path = reconstruct(grid, end);
                log::debug!(
                    "dijkstra: reached {end} after {} cells, path length {}",
                    visited.len(),
                    path.len()
                );
                return Ok(SearchResult::new(visited, path));
            }

            nbuf.clear();
            grid.fill_neighbors(cur, &mut nbuf);
            for &np in &nbuf {
                let Some(n) = grid.cell_mut(np) else {
                    continue;
                };
                if n.visited {
                    continue;
                }
                let discovered = n.distance != UNREACHABLE;
                n.distance = dist + 1;
                n.predecessor = Some(cur);
                if !discovered {
                    open.push(np, dist + 1);
                }
            }
        }

        log::debug!(
            "dijkstra: {end} unreachable, {} cells visited",
            visited.len()
        );
        Ok(SearchResult::unreachable(visited))
    }
}
