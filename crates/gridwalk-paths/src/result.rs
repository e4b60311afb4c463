use gridwalk_core::{Coord, Grid};

/// A position with its distance from the start when it was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Coord,
    pub cost: i32,
}

/// Output of one search run.
///
/// `visited_order` lists cells in the order the search finalized them; on
/// success its last element is the end cell. `shortest_path` runs from
/// start to end and is empty when the end is unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    visited_order: Vec<PathNode>,
    shortest_path: Vec<PathNode>,
}

/// Counters shown alongside a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    pub visited: usize,
    pub path_len: usize,
    pub total_cells: usize,
}

impl SearchResult {
    pub fn new(visited_order: Vec<PathNode>, shortest_path: Vec<PathNode>) -> Self {
        Self {
            visited_order,
            shortest_path,
        }
    }

    /// A run that finalized `visited_order` without reaching the end.
    pub fn unreachable(visited_order: Vec<PathNode>) -> Self {
        Self::new(visited_order, Vec::new())
    }

    #[inline]
    pub fn visited_order(&self) -> &[PathNode] {
        &self.visited_order
    }

    #[inline]
    pub fn shortest_path(&self) -> &[PathNode] {
        &self.shortest_path
    }

    /// Whether a path to the end was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.shortest_path.is_empty()
    }

    /// Whether the run produced nothing at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visited_order.is_empty() && self.shortest_path.is_empty()
    }

    pub fn visited_coords(&self) -> impl ExactSizeIterator<Item = Coord> + '_ {
        self.visited_order.iter().map(|n| n.pos)
    }

    pub fn path_coords(&self) -> impl ExactSizeIterator<Item = Coord> + '_ {
        self.shortest_path.iter().map(|n| n.pos)
    }

    /// Number of moves on the shortest path, or `None` if unreachable.
    pub fn path_steps(&self) -> Option<usize> {
        self.shortest_path.len().checked_sub(1)
    }

    pub fn stats(&self, grid: &Grid) -> SearchStats {
        SearchStats {
            visited: self.visited_order.len(),
            path_len: self.shortest_path.len(),
            total_cells: grid.len(),
        }
    }

    /// Split into `(visited_order, shortest_path)`.
    pub fn into_parts(self) -> (Vec<PathNode>, Vec<PathNode>) {
        (self.visited_order, self.shortest_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(row: i32, col: i32, cost: i32) -> PathNode {
        PathNode {
            pos: Coord::new(row, col),
            cost,
        }
    }

    #[test]
    fn unreachable_has_no_path() {
        let r = SearchResult::unreachable(vec![node(0, 0, 0), node(0, 1, 1)]);
        assert!(!r.found());
        assert!(!r.is_empty());
        assert_eq!(r.path_steps(), None);
        assert_eq!(r.visited_coords().len(), 2);
    }

    #[test]
    fn stats_count_cells() {
        let grid = Grid::parse("S.E").unwrap();
        let path = vec![node(0, 0, 0), node(0, 1, 1), node(0, 2, 2)];
        let r = SearchResult::new(path.clone(), path);
        assert_eq!(r.path_steps(), Some(2));
        assert_eq!(
            r.stats(&grid),
            SearchStats {
                visited: 3,
                path_len: 3,
                total_cells: 3
            }
        );
        assert_eq!(
            r.path_coords().collect::<Vec<_>>(),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn default_is_empty() {
        assert!(SearchResult::default().is_empty());
    }
}
