use gridwalk_core::Coord;

/// Manhattan (L1) distance between two coordinates.
///
/// Admissible and consistent for 4-way movement with unit step cost.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    a.manhattan(b)
}
