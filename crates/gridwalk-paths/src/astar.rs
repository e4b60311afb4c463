use gridwalk_core::{Context, Coord, Grid, UNREACHABLE};

use crate::distance::manhattan;
use crate::error::{Result, SearchError};
use crate::frontier::Frontier;
use crate::path::reconstruct;
use crate::result::{PathNode, SearchResult};
use crate::traits::{SearchAlgorithm, prepare};

/// A* with the Manhattan heuristic.
///
/// A cell whose g-score improves is pushed again without removing its old
/// open-set entry; the old entry is skipped when popped because the cell is
/// already visited by then. `visited` is only set on pop, so each cell is
/// finalized once.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl SearchAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn run(
        &self,
        grid: &mut Grid,
        start: Coord,
        end: Coord,
        ctx: &Context,
    ) -> Result<SearchResult> {
        prepare(grid, start, end)?;
        log::debug!("astar: searching {start} -> {end}");

        let mut visited = Vec::new();
        let mut open = Frontier::new();
        let f0 = manhattan(start, end);
        if let Some(cell) = grid.cell_mut(start) {
            cell.distance = 0;
            cell.heuristic_total = f0;
        }
        open.push(start, f0);

        let mut nbuf = Vec::with_capacity(4);

        while let Some(cur) = open.pop() {
            if ctx.is_cancelled() {
                log::debug!("astar: cancelled after {} cells", visited.len());
                return Err(SearchError::Cancelled);
            }

            let Some(cell) = grid.cell_mut(cur) else {
                continue;
            };
            // Stale entry left behind by a later improvement.
            if cell.visited {
                continue;
            }
            cell.visited = true;
            let g = cell.distance;
            visited.push(PathNode { pos: cur, cost: g });

            if cur == end {
                let path = reconstruct(grid, end);
                log::debug!(
                    "astar: reached {end} after {} cells, path length {}",
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
                let tentative_g = g + 1;
                if n.distance != UNREACHABLE && tentative_g >= n.distance {
                    continue;
                }
                n.distance = tentative_g;
                n.heuristic_total = tentative_g + manhattan(np, end);
                n.predecessor = Some(cur);
                open.push(np, n.heuristic_total);
            }
        }

        log::debug!("astar: {end} unreachable, {} cells visited", visited.len());
        Ok(SearchResult::unreachable(visited))
    }
}
