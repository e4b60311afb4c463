//! Algorithm selector exposed to the presentation layer.

use std::fmt;
use std::str::FromStr;

use gridwalk_core::{Context, Grid};

use crate::astar::AStar;
use crate::dijkstra::Dijkstra;
use crate::error::{Result, SearchError};
use crate::result::SearchResult;
use crate::traits::SearchAlgorithm;

/// The searches a grid can be run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dijkstra, Algorithm::AStar];

    /// The strategy implementing this algorithm.
    pub fn strategy(self) -> &'static dyn SearchAlgorithm {
        match self {
            Algorithm::Dijkstra => &Dijkstra,
            Algorithm::AStar => &AStar,
        }
    }

    /// Short identifier, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        self.strategy().name()
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra's Algorithm",
            Algorithm::AStar => "A* Search",
        }
    }

    /// Run on `grid` between its own start and end tiles.
    pub fn run(self, grid: &mut Grid, ctx: &Context) -> Result<SearchResult> {
        let (start, end) = grid.validate()?;
        self.strategy().run(grid, start, end, ctx)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::{Coord, GridError};

    #[test]
    fn parses_names() {
        assert_eq!("dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("AStar".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(" a* ".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(
            "bfs".parse::<Algorithm>(),
            Err(SearchError::UnknownAlgorithm("bfs".into()))
        );
    }

    #[test]
    fn display_round_trips() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
        }
        assert_eq!(Algorithm::AStar.label(), "A* Search");
    }

    #[test]
    fn run_uses_grid_endpoints() {
        let mut grid = Grid::new(8, 12).unwrap();
        for algo in Algorithm::ALL {
            let r = algo.run(&mut grid, &Context::new()).unwrap();
            assert_eq!(
                r.shortest_path().first().map(|n| n.pos),
                Some(Coord::new(2, 3))
            );
            assert_eq!(
                r.shortest_path().last().map(|n| n.pos),
                Some(Coord::new(6, 9))
            );
            assert_eq!(r.path_steps(), Some(10));
        }
    }

    #[test]
    fn run_rejects_grid_without_end() {
        let mut grid = Grid::parse("S..").unwrap();
        assert_eq!(
            Algorithm::Dijkstra.run(&mut grid, &Context::new()),
            Err(SearchError::InvalidGrid(GridError::MissingEnd))
        );
    }
}
