//! Geometry primitives: [`Pos`] and [`Connectivity`].

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid coordinate. Rows grow down, columns grow right.
///
/// Coordinates are signed so that neighbour offsets can be applied before
/// bounds checking.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours, in down, up, right, left order.
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(1, 0),
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(0, -1),
        ]
    }

    /// The four diagonal neighbours, in lower-left, upper-left,
    /// lower-right, upper-right order.
    #[inline]
    pub const fn neighbors_diagonal(self) -> [Pos; 4] {
        [
            self.shift(1, -1),
            self.shift(-1, -1),
            self.shift(1, 1),
            self.shift(-1, 1),
        ]
    }

    /// Whether `other` is one step away under the given connectivity.
    pub fn is_adjacent(self, other: Pos, connectivity: Connectivity) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        match connectivity {
            Connectivity::Four => dr + dc == 1,
            Connectivity::Eight => dr.max(dc) == 1,
        }
    }
}

// --- trait impls for Pos ---

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Pos {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Connectivity
// ---------------------------------------------------------------------------

/// Which neighbours count as adjacent when compiling a grid's adjacency.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Orthogonal moves only.
    #[default]
    Four,
    /// Orthogonal and diagonal moves.
    Eight,
}

// ---------------------------------------------------------------------------
// Distances
// ---------------------------------------------------------------------------

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> u32 {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}

/// Chebyshev (L∞) distance between two positions.
#[inline]
pub fn chebyshev(a: Pos, b: Pos) -> u32 {
    (a.row - b.row)
        .unsigned_abs()
        .max((a.col - b.col).unsigned_abs())
}
