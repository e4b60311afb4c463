//! The [`Cell`] type: one grid position with its tile and per-run search
//! metadata.

use crate::geom::Coord;

/// Sentinel meaning "not reached" for distances and scores.
pub const UNREACHABLE: i32 = i32::MAX;

/// What occupies a cell. Start, end and wall are mutually exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Tile {
    #[default]
    Plain,
    Wall,
    Start,
    End,
}

impl Tile {
    /// Character used by the grid text form.
    pub const fn glyph(self) -> char {
        match self {
            Tile::Plain => '.',
            Tile::Wall => '#',
            Tile::Start => 'S',
            Tile::End => 'E',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Tile::Plain),
            '#' => Some(Tile::Wall),
            'S' => Some(Tile::Start),
            'E' => Some(Tile::End),
            _ => None,
        }
    }
}

/// A grid cell.
///
/// `pos` and `tile` describe the board; the remaining fields are scratch
/// state written by a search and wiped by [`Grid::reset`](crate::Grid::reset).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: Coord,
    pub tile: Tile,
    /// Steps from the start (g-score for A*). [`UNREACHABLE`] until reached.
    pub distance: i32,
    /// `distance + heuristic`, only written by A*.
    pub heuristic_total: i32,
    pub visited: bool,
    pub predecessor: Option<Coord>,
}

impl Cell {
    /// A plain cell with cleared metadata.
    #[inline]
    pub const fn new(pos: Coord) -> Self {
        Self {
            pos,
            tile: Tile::Plain,
            distance: UNREACHABLE,
            heuristic_total: UNREACHABLE,
            visited: false,
            predecessor: None,
        }
    }

    /// Set the tile (builder).
    #[inline]
    pub const fn with_tile(mut self, tile: Tile) -> Self {
        self.tile = tile;
        self
    }

    #[inline]
    pub const fn is_wall(&self) -> bool {
        matches!(self.tile, Tile::Wall)
    }

    #[inline]
    pub const fn is_start(&self) -> bool {
        matches!(self.tile, Tile::Start)
    }

    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self.tile, Tile::End)
    }

    /// Clear per-run metadata, keeping the tile.
    #[inline]
    pub fn reset(&mut self) {
        self.distance = UNREACHABLE;
        self.heuristic_total = UNREACHABLE;
        self.visited = false;
        self.predecessor = None;
    }
}
