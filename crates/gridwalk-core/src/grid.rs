//! The [`Grid`] type: a rectangular board of [`Cell`]s with exactly one
//! start and one end.
//!
//! The grid owns every cell. Searches address cells by [`Coord`] and write
//! only the per-run metadata; [`reset`](Grid::reset) wipes that metadata
//! before the next run.

use std::fmt;
use std::str::FromStr;

use crate::cell::{Cell, Tile};
use crate::config::GridConfig;
use crate::error::{GridError, Result};
use crate::geom::{Coord, Range};

/// A 2D board of [`Cell`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Range,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid with default endpoints: start at a quarter of
    /// each dimension, end at three quarters.
    pub fn new(rows: i32, cols: i32) -> Result<Self> {
        if rows <= 0 || cols <= 0 || (rows == 1 && cols == 1) {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        let mut grid = Self::blank(rows, cols);

        // The two points only coincide on a 1x1 grid, rejected above.
        let start = Coord::new(rows / 4, cols / 4);
        let end = Coord::new(3 * rows / 4, 3 * cols / 4);
        grid.set_tile(start, Tile::Start);
        grid.set_tile(end, Tile::End);
        Ok(grid)
    }

    /// Create a grid sized to fit a viewport.
    pub fn for_viewport(cfg: &GridConfig, width_px: i32, height_px: i32) -> Result<Self> {
        let (rows, cols) = cfg.dims_for_viewport(width_px, height_px);
        log::debug!(
            "creating {rows}x{cols} grid for {width_px}x{height_px} viewport"
        );
        Self::new(rows, cols)
    }

    /// Parse the text form: one line per row, `.` plain, `#` wall,
    /// `S` start, `E` end. Blank lines and surrounding whitespace are
    /// ignored.
    ///
    /// Endpoint counts are not checked here; call [`validate`](Self::validate).
    pub fn parse(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if lines.is_empty() || cols == 0 {
            return Err(GridError::InvalidDimensions { rows: 0, cols: 0 });
        }

        let mut grid = Self::blank(lines.len() as i32, cols as i32);
        for (r, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(GridError::RaggedRow {
                    line: r + 1,
                    expected: cols,
                    found,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let tile = Tile::from_glyph(ch).ok_or(GridError::Parse {
                    line: r + 1,
                    column: c + 1,
                    ch,
                })?;
                grid.set_tile(Coord::new(r as i32, c as i32), tile);
            }
        }
        Ok(grid)
    }

    fn blank(rows: i32, cols: i32) -> Self {
        let bounds = Range::with_size(rows, cols);
        Self {
            bounds,
            cells: bounds.iter().map(Cell::new).collect(),
        }
    }

    fn set_tile(&mut self, c: Coord, tile: Tile) {
        if let Some(i) = self.bounds.index_of(c) {
            self.cells[i].tile = tile;
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// The cell at `c`, or `None` outside the grid.
    #[inline]
    pub fn cell(&self, c: Coord) -> Option<&Cell> {
        self.bounds.index_of(c).map(|i| &self.cells[i])
    }

    /// Mutable access for searches. Callers must only touch the per-run
    /// metadata, never `tile`.
    #[inline]
    pub fn cell_mut(&mut self, c: Coord) -> Option<&mut Cell> {
        self.bounds.index_of(c).map(|i| &mut self.cells[i])
    }

    #[inline]
    pub fn tile(&self, c: Coord) -> Option<Tile> {
        self.cell(c).map(|cell| cell.tile)
    }

    /// Whether `c` is inside the grid and not a wall.
    #[inline]
    pub fn is_walkable(&self, c: Coord) -> bool {
        self.cell(c).is_some_and(|cell| !cell.is_wall())
    }

    /// The first start cell in row-major order.
    pub fn start(&self) -> Option<Coord> {
        self.find(Tile::Start)
    }

    /// The first end cell in row-major order.
    pub fn end(&self) -> Option<Coord> {
        self.find(Tile::End)
    }

    fn find(&self, tile: Tile) -> Option<Coord> {
        self.cells.iter().find(|c| c.tile == tile).map(|c| c.pos)
    }

    /// Number of non-wall cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_wall()).count()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Check that the grid has exactly one start and one end, returning
    /// their coordinates.
    pub fn validate(&self) -> Result<(Coord, Coord)> {
        let mut start: Option<Coord> = None;
        let mut end: Option<Coord> = None;
        for cell in &self.cells {
            match cell.tile {
                Tile::Start => {
                    if let Some(first) = start {
                        return Err(GridError::DuplicateStart {
                            first,
                            second: cell.pos,
                        });
                    }
                    start = Some(cell.pos);
                }
                Tile::End => {
                    if let Some(first) = end {
                        return Err(GridError::DuplicateEnd {
                            first,
                            second: cell.pos,
                        });
                    }
                    end = Some(cell.pos);
                }
                Tile::Plain | Tile::Wall => {}
            }
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let end = end.ok_or(GridError::MissingEnd)?;
        Ok((start, end))
    }

    // -----------------------------------------------------------------------
    // Neighbours
    // -----------------------------------------------------------------------

    /// Walkable orthogonal neighbours of `c` in up, right, down, left order.
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.neighbors_4()
            .into_iter()
            .filter(move |&n| self.is_walkable(n))
    }

    /// Same as [`neighbors`](Self::neighbors) but appends into a reusable
    /// buffer. The caller clears `buf` first.
    pub fn fill_neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.extend(self.neighbors(c));
    }

    /// All walkable cells connected to `c`, in flood-fill discovery order.
    /// Empty if `c` is outside the grid or a wall.
    pub fn component(&self, c: Coord) -> Vec<Coord> {
        let mut result = Vec::new();
        if !self.is_walkable(c) {
            return result;
        }
        let mut seen = vec![false; self.cells.len()];
        let mut stack = vec![c];
        if let Some(i) = self.bounds.index_of(c) {
            seen[i] = true;
        }
        result.push(c);

        while let Some(cur) = stack.pop() {
            for n in self.neighbors(cur) {
                let Some(ni) = self.bounds.index_of(n) else {
                    continue;
                };
                if !seen[ni] {
                    seen[ni] = true;
                    stack.push(n);
                    result.push(n);
                }
            }
        }
        result
    }

    // -----------------------------------------------------------------------
    // Run metadata
    // -----------------------------------------------------------------------

    /// Clear distance, score, visited flag and predecessor on every cell.
    /// Tiles are untouched.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    fn check_bounds(&self, c: Coord) -> Result<usize> {
        self.bounds.index_of(c).ok_or(GridError::OutOfBounds(c))
    }

    /// Place or remove a wall. Endpoints cannot be walled.
    pub fn set_wall(&mut self, c: Coord, wall: bool) -> Result<()> {
        let i = self.check_bounds(c)?;
        let cell = &mut self.cells[i];
        match cell.tile {
            Tile::Start | Tile::End => Err(GridError::Occupied(c)),
            Tile::Plain | Tile::Wall => {
                cell.tile = if wall { Tile::Wall } else { Tile::Plain };
                Ok(())
            }
        }
    }

    /// Flip a cell between wall and plain, returning whether it is now a
    /// wall.
    pub fn toggle_wall(&mut self, c: Coord) -> Result<bool> {
        let i = self.check_bounds(c)?;
        let wall = !self.cells[i].is_wall();
        self.set_wall(c, wall)?;
        Ok(wall)
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for cell in &mut self.cells {
            if cell.is_wall() {
                cell.tile = Tile::Plain;
            }
        }
    }

    /// Move the start to `c`. A wall at `c` is replaced; the end is not.
    pub fn move_start(&mut self, c: Coord) -> Result<()> {
        self.move_endpoint(c, Tile::Start, Tile::End)
    }

    /// Move the end to `c`. A wall at `c` is replaced; the start is not.
    pub fn move_end(&mut self, c: Coord) -> Result<()> {
        self.move_endpoint(c, Tile::End, Tile::Start)
    }

    fn move_endpoint(&mut self, c: Coord, tile: Tile, other: Tile) -> Result<()> {
        let i = self.check_bounds(c)?;
        if self.cells[i].tile == other {
            return Err(GridError::Occupied(c));
        }
        for cell in &mut self.cells {
            if cell.tile == tile {
                cell.tile = Tile::Plain;
            }
        }
        self.cells[i].tile = tile;
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                let tile = self.tile(Coord::new(r, c)).unwrap_or_default();
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Grid::parse(&s).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_serializes_as_text() {
        let g = Grid::parse("S.#\n..E").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "\"S.#\\n..E\\n\"");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn bad_text_fails_to_deserialize() {
        assert!(serde_json::from_str::<Grid>("\"S?E\"").is_err());
    }
}
