//! Property-based invariant tests for the grid searches.
//!
//! 1. No cell is finalized twice; visits never exceed walkable cells
//! 2. A found path starts at the start, ends at the end, and steps
//!    orthogonally through non-wall cells
//! 3. On success the last finalized cell is the end
//! 4. Dijkstra and A* agree on path length; A* never visits more cells
//! 5. Without walls the path length is the Manhattan distance
//! 6. When the end is unreachable, the visited set is the start's region
//! 7. Same grid, same result

use std::collections::HashSet;

use gridwalk_core::{Context, Coord, Grid};
use gridwalk_paths::{AStar, Algorithm, Dijkstra, SearchAlgorithm, SearchResult, manhattan};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// Text form of a random grid with one start and one end, each other cell
/// a wall with probability `wall_pct`%.
fn grid_strategy(wall_pct: u32) -> impl Strategy<Value = String> {
    let p = f64::from(wall_pct) / 100.0;
    (2usize..9, 2usize..9).prop_flat_map(move |(rows, cols)| {
        let n = rows * cols;
        (
            prop::collection::vec(
                prop::bool::weighted(p).prop_map(|wall| if wall { '#' } else { '.' }),
                n,
            ),
            0..n,
            1..n,
        )
            .prop_map(move |(mut tiles, s, offset)| {
                let e = (s + offset) % n;
                tiles[s] = 'S';
                tiles[e] = 'E';
                tiles
                    .chunks(cols)
                    .map(|row| row.iter().collect::<String>())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
    })
}

fn run(algo: &dyn SearchAlgorithm, text: &str) -> (Grid, SearchResult) {
    let mut grid = Grid::parse(text).unwrap();
    let (s, e) = grid.validate().unwrap();
    let r = algo.run(&mut grid, s, e, &Context::new()).unwrap();
    (grid, r)
}

fn check_path(grid: &Grid, r: &SearchResult) -> Result<(), TestCaseError> {
    let (s, e) = grid.validate().unwrap();
    let path: Vec<Coord> = r.path_coords().collect();
    prop_assert_eq!(path.first().copied(), Some(s));
    prop_assert_eq!(path.last().copied(), Some(e));
    for w in path.windows(2) {
        prop_assert_eq!(manhattan(w[0], w[1]), 1);
    }
    for c in &path {
        prop_assert!(grid.is_walkable(*c));
    }
    prop_assert_eq!(r.visited_order().last().map(|n| n.pos), Some(e));
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// 1–3. Per-algorithm structural invariants
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn visits_are_unique_and_bounded(text in grid_strategy(30)) {
        for algo in Algorithm::ALL {
            let (grid, r) = run(algo.strategy(), &text);
            let unique: HashSet<Coord> = r.visited_coords().collect();
            prop_assert_eq!(unique.len(), r.visited_order().len());
            prop_assert!(r.visited_order().len() <= grid.walkable_count());
        }
    }

    #[test]
    fn found_paths_are_well_formed(text in grid_strategy(25)) {
        for algo in Algorithm::ALL {
            let (grid, r) = run(algo.strategy(), &text);
            if r.found() {
                check_path(&grid, &r)?;
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // 4. Cross-algorithm agreement
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn dijkstra_and_astar_agree(text in grid_strategy(30)) {
        let (_, d) = run(&Dijkstra, &text);
        let (_, a) = run(&AStar, &text);
        prop_assert_eq!(d.found(), a.found());
        prop_assert_eq!(d.path_steps(), a.path_steps());
        prop_assert!(a.visited_order().len() <= d.visited_order().len());
    }

    // ═══════════════════════════════════════════════════════════════════
    // 5. Open grids
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn open_grid_path_is_manhattan(text in grid_strategy(0)) {
        for algo in Algorithm::ALL {
            let (grid, r) = run(algo.strategy(), &text);
            let (s, e) = grid.validate().unwrap();
            prop_assert_eq!(r.path_steps(), Some(manhattan(s, e) as usize));
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // 6. Unreachable end
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn unreachable_visits_exactly_the_start_region(text in grid_strategy(45)) {
        for algo in Algorithm::ALL {
            let (grid, r) = run(algo.strategy(), &text);
            if r.found() {
                continue;
            }
            let (s, _) = grid.validate().unwrap();
            let region: HashSet<Coord> = grid.component(s).into_iter().collect();
            let visited: HashSet<Coord> = r.visited_coords().collect();
            prop_assert_eq!(visited, region);
            prop_assert!(r.shortest_path().is_empty());
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // 7. Determinism
    // ═══════════════════════════════════════════════════════════════════

    #[test]
    fn same_grid_same_result(text in grid_strategy(30)) {
        for algo in Algorithm::ALL {
            let mut grid = Grid::parse(&text).unwrap();
            let ctx = Context::new();
            let first = algo.run(&mut grid, &ctx).unwrap();
            let second = algo.run(&mut grid, &ctx).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
