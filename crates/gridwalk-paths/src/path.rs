use gridwalk_core::{Coord, Grid};

use crate::result::PathNode;

/// Follow predecessor links back from `end` and return the path in
/// start-to-end order.
///
/// The walk stops at the first cell without a predecessor, which is the
/// start whenever `end` was reached. It is bounded by the grid size, so a
/// corrupted predecessor chain cannot loop forever.
pub(crate) fn reconstruct(grid: &Grid, end: Coord) -> Vec<PathNode> {
    let mut path = Vec::new();
    let mut cur = Some(end);
    while let Some(pos) = cur {
        let Some(cell) = grid.cell(pos) else {
            break;
        };
        path.push(PathNode {
            pos,
            cost: cell.distance,
        });
        if path.len() > grid.len() {
            log::warn!("predecessor chain from {end} does not terminate");
            break;
        }
        cur = cell.predecessor;
    }
    path.reverse();
    debug_assert!(
        path.first()
            .and_then(|n| grid.cell(n.pos))
            .is_some_and(|c| c.is_start()),
        "path from {end} does not begin at the start cell"
    );
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_predecessors_back_to_start() {
        let mut grid = Grid::parse("S.E").unwrap();
        let links = [(0, None), (1, Some(0)), (2, Some(1))];
        for (col, pred) in links {
            let cell = grid.cell_mut(Coord::new(0, col)).unwrap();
            cell.distance = col;
            cell.predecessor = pred.map(|p| Coord::new(0, p));
        }
        let path = reconstruct(&grid, Coord::new(0, 2));
        let coords: Vec<_> = path.iter().map(|n| n.pos).collect();
        assert_eq!(
            coords,
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
        assert_eq!(
            path.iter().map(|n| n.cost).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }
}
