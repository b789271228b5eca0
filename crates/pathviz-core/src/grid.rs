//! The [`Grid`] type: a square 2D array of [`Cell`]s with compiled adjacency.
//!
//! Adjacency is a snapshot. It is rebuilt from the current barrier layout
//! only when [`compile_neighbors`](Grid::compile_neighbors) is called, so
//! barrier edits between searches need a recompile before the next search.

use std::fmt;
use std::str::FromStr;

use log::trace;

use crate::cell::{Cell, CellState};
use crate::error::GridError;
use crate::geom::{Connectivity, Pos};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `rows × rows` grid of cells.
///
/// At most one cell is [`Start`](CellState::Start) and at most one is
/// [`End`](CellState::End). Setting a second one clears the first.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cells: Vec<Cell>,
    adjacency: Vec<Vec<Pos>>,
    connectivity: Connectivity,
    start: Option<Pos>,
    end: Option<Pos>,
}

impl Grid {
    /// Create a grid of clear cells with no compiled adjacency.
    pub fn new(rows: usize) -> Self {
        let side = rows as i32;
        let cells = (0..side)
            .flat_map(|row| (0..side).map(move |col| Cell::new(Pos::new(row, col))))
            .collect();
        Self {
            rows,
            cells,
            adjacency: vec![Vec::new(); rows * rows],
            connectivity: Connectivity::default(),
            start: None,
            end: None,
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
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

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.index(p).is_some()
    }

    #[inline]
    fn index(&self, p: Pos) -> Option<usize> {
        if p.row >= 0 && p.col >= 0 && (p.row as usize) < self.rows && (p.col as usize) < self.rows
        {
            Some(p.row as usize * self.rows + p.col as usize)
        } else {
            None
        }
    }

    fn checked_index(&self, p: Pos) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            rows: self.rows,
        })
    }

    /// The cell at `p`, if inside the grid.
    #[inline]
    pub fn cell(&self, p: Pos) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The state of the cell at `p`, if inside the grid.
    #[inline]
    pub fn state(&self, p: Pos) -> Option<CellState> {
        self.cell(p).map(Cell::state)
    }

    /// Position of the start cell.
    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    /// Position of the end cell.
    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    /// Connectivity used by the last [`compile_neighbors`](Grid::compile_neighbors).
    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    // -----------------------------------------------------------------------
    // State changes
    // -----------------------------------------------------------------------

    /// Set the state of the cell at `p`, keeping the single start/end
    /// invariant.
    pub fn set(&mut self, p: Pos, state: CellState) -> Result<(), GridError> {
        let i = self.checked_index(p)?;

        match self.cells[i].state() {
            CellState::Start if self.start == Some(p) => self.start = None,
            CellState::End if self.end == Some(p) => self.end = None,
            _ => {}
        }

        match state {
            CellState::Start => {
                if let Some(old) = self.start.replace(p) {
                    self.clear_slot(old);
                }
            }
            CellState::End => {
                if let Some(old) = self.end.replace(p) {
                    self.clear_slot(old);
                }
            }
            _ => {}
        }

        self.cells[i].set_state(state);
        Ok(())
    }

    fn clear_slot(&mut self, p: Pos) {
        if let Some(i) = self.index(p) {
            self.cells[i].set_state(CellState::Clear);
        }
    }

    /// Make `p` the start cell.
    pub fn set_start(&mut self, p: Pos) -> Result<(), GridError> {
        self.set(p, CellState::Start)
    }

    /// Make `p` the end cell.
    pub fn set_end(&mut self, p: Pos) -> Result<(), GridError> {
        self.set(p, CellState::End)
    }

    /// Turn `p` into a barrier.
    pub fn set_barrier(&mut self, p: Pos) -> Result<(), GridError> {
        self.set(p, CellState::Barrier)
    }

    /// Reset `p` to a clear cell.
    pub fn clear(&mut self, p: Pos) -> Result<(), GridError> {
        self.set(p, CellState::Clear)
    }

    /// Wipe the marks left by a previous search (open, closed, path) and
    /// keep start, end and barriers.
    pub fn reset_search(&mut self) {
        for c in &mut self.cells {
            if c.state().is_search_mark() {
                c.set_state(CellState::Clear);
            }
        }
    }

    /// [`reset_search`](Grid::reset_search) followed by
    /// [`compile_neighbors`](Grid::compile_neighbors).
    pub fn prepare_search(&mut self, connectivity: Connectivity) {
        self.reset_search();
        self.compile_neighbors(connectivity);
    }

    /// Swap clear cells and barriers; other states are untouched.
    ///
    /// Used to sketch a point set with barriers and hand it to the tour
    /// optimizer via [`barrier_locations`](Grid::barrier_locations).
    pub fn invert_barriers(&mut self) {
        for c in &mut self.cells {
            match c.state() {
                CellState::Clear => c.set_state(CellState::Barrier),
                CellState::Barrier => c.set_state(CellState::Clear),
                _ => {}
            }
        }
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Rebuild every cell's neighbour list from the current barriers.
    ///
    /// Order is down, up, right, left, then for 8-connectivity lower-left,
    /// upper-left, lower-right, upper-right. Barrier neighbours and
    /// positions outside the grid are skipped.
    pub fn compile_neighbors(&mut self, connectivity: Connectivity) {
        self.connectivity = connectivity;
        let mut adjacency = std::mem::take(&mut self.adjacency);
        adjacency.resize(self.cells.len(), Vec::new());

        for (i, list) in adjacency.iter_mut().enumerate() {
            list.clear();
            let p = self.cells[i].pos();
            let diagonal = match connectivity {
                Connectivity::Four => None,
                Connectivity::Eight => Some(p.neighbors_diagonal()),
            };
            let candidates = p
                .neighbors_4()
                .into_iter()
                .chain(diagonal.into_iter().flatten());
            for n in candidates {
                if self.cell(n).is_some_and(Cell::is_traversable) {
                    list.push(n);
                }
            }
        }

        self.adjacency = adjacency;
        trace!(
            "compiled {:?} adjacency for {}x{} grid",
            connectivity, self.rows, self.rows
        );
    }

    /// Neighbours of `p` as of the last compile. Empty outside the grid or
    /// before the first compile.
    #[inline]
    pub fn neighbors(&self, p: Pos) -> &[Pos] {
        match self.index(p) {
            Some(i) => &self.adjacency[i],
            None => &[],
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Positions of every cell currently in `state`, row-major.
    pub fn positions(&self, state: CellState) -> Vec<Pos> {
        self.cells
            .iter()
            .filter(|c| c.state() == state)
            .map(Cell::pos)
            .collect()
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// Barrier positions as `(row, col)` coordinates, row-major.
    pub fn barrier_locations(&self) -> Vec<(f64, f64)> {
        self.positions(CellState::Barrier)
            .into_iter()
            .map(|p| (f64::from(p.row), f64::from(p.col)))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Text form
    // -----------------------------------------------------------------------

    /// Parse a grid from lines of glyphs (see [`CellState::glyph`]).
    ///
    /// Blank lines and surrounding whitespace are ignored. Adjacency is not
    /// compiled.
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len();
        let mut grid = Grid::new(rows);

        for (r, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != rows {
                return Err(GridError::NotSquare { rows, width });
            }
            for (c, ch) in line.chars().enumerate() {
                let pos = Pos::new(r as i32, c as i32);
                let state = CellState::from_glyph(ch).ok_or(GridError::InvalidGlyph { ch, pos })?;
                match state {
                    CellState::Start if grid.start.is_some() => {
                        return Err(GridError::MultipleStart);
                    }
                    CellState::End if grid.end.is_some() => return Err(GridError::MultipleEnd),
                    _ => {}
                }
                grid.set(pos, state)?;
            }
        }
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ascii(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.rows.max(1)) {
            for c in row {
                write!(f, "{}", c.state().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
