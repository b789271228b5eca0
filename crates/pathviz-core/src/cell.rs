//! The [`Cell`] type: a grid vertex tagged with a single [`CellState`].

use crate::geom::Pos;

/// The role a cell plays. Exactly one at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Clear,
    Start,
    End,
    Barrier,
    /// Discovered, waiting in a search frontier.
    Open,
    /// Fully expanded by a search.
    Closed,
    /// Part of a reconstructed path.
    Path,
}

impl CellState {
    /// Text glyph used by [`Grid`](crate::Grid)'s textual form.
    pub const fn glyph(self) -> char {
        match self {
            Self::Clear => '.',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Barrier => '#',
            Self::Open => 'o',
            Self::Closed => 'x',
            Self::Path => '*',
        }
    }

    /// Inverse of [`glyph`](CellState::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        Some(match ch {
            '.' => Self::Clear,
            'S' => Self::Start,
            'E' => Self::End,
            '#' => Self::Barrier,
            'o' => Self::Open,
            'x' => Self::Closed,
            '*' => Self::Path,
            _ => return None,
        })
    }

    /// Whether this state is left behind by a search and wiped by
    /// [`Grid::reset_search`](crate::Grid::reset_search).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }
}

/// A single grid vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Pos,
    state: CellState,
}

impl Cell {
    /// A clear cell at `pos`.
    #[inline]
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            state: CellState::Clear,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub const fn state(&self) -> CellState {
        self.state
    }

    /// Barriers are the only untraversable cells.
    #[inline]
    pub const fn is_traversable(&self) -> bool {
        !matches!(self.state, CellState::Barrier)
    }

    #[inline]
    pub fn is_clear(&self) -> bool {
        self.state == CellState::Clear
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.state == CellState::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.state == CellState::End
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == CellState::Open
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.state == CellState::Closed
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.state == CellState::Path
    }

    // Setters are crate-private: the grid keeps the single start/end
    // invariant, so all outside changes go through `Grid::set`.
    #[inline]
    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for s in [
            CellState::Clear,
            CellState::Start,
            CellState::End,
            CellState::Barrier,
            CellState::Open,
            CellState::Closed,
            CellState::Path,
        ] {
            assert_eq!(CellState::from_glyph(s.glyph()), Some(s));
        }
        assert_eq!(CellState::from_glyph('?'), None);
    }

    #[test]
    fn only_barriers_block() {
        let mut c = Cell::new(Pos::new(1, 2));
        assert!(c.is_traversable());
        assert!(c.is_clear());
        c.set_state(CellState::Barrier);
        assert!(!c.is_traversable());
        assert!(c.is_barrier());
        c.set_state(CellState::Closed);
        assert!(c.is_traversable());
        assert!(c.is_closed() && !c.is_open());
    }

    #[test]
    fn endpoint_and_path_predicates() {
        let mut c = Cell::new(Pos::ZERO);
        c.set_state(CellState::Start);
        assert!(c.is_start() && !c.is_end());
        c.set_state(CellState::End);
        assert!(c.is_end() && !c.is_path());
        c.set_state(CellState::Path);
        assert!(c.is_path() && c.state().is_search_mark());
    }
}
