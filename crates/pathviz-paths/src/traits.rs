use log::warn;
use pathviz_core::{CellState, Connectivity, Grid, Pos, chebyshev, manhattan};

/// The graph a search runs on.
///
/// Searches never own vertices: they hold positions and tag vertices
/// through [`set_state`](SearchGraph::set_state). The state tags double as
/// the frontier/closed bookkeeping for the unweighted traversals.
pub trait SearchGraph {
    /// Append the neighbours of `p` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);

    /// Current state of `p`, or `None` if `p` is not a vertex.
    fn state(&self, p: Pos) -> Option<CellState>;

    /// Tag `p` with `state`.
    fn set_state(&mut self, p: Pos, state: CellState);

    /// Heuristic estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate.
    fn estimate(&self, from: Pos, to: Pos) -> u32 {
        manhattan(from, to)
    }

    #[inline]
    fn mark_open(&mut self, p: Pos) {
        self.set_state(p, CellState::Open);
    }

    #[inline]
    fn mark_closed(&mut self, p: Pos) {
        self.set_state(p, CellState::Closed);
    }

    #[inline]
    fn mark_path(&mut self, p: Pos) {
        self.set_state(p, CellState::Path);
    }

    #[inline]
    fn mark_start(&mut self, p: Pos) {
        self.set_state(p, CellState::Start);
    }

    #[inline]
    fn mark_end(&mut self, p: Pos) {
        self.set_state(p, CellState::End);
    }

    #[inline]
    fn is_barrier(&self, p: Pos) -> bool {
        self.state(p) == Some(CellState::Barrier)
    }

    #[inline]
    fn is_open(&self, p: Pos) -> bool {
        self.state(p) == Some(CellState::Open)
    }

    #[inline]
    fn is_closed(&self, p: Pos) -> bool {
        self.state(p) == Some(CellState::Closed)
    }
}

impl SearchGraph for Grid {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend_from_slice(Grid::neighbors(self, p));
    }

    fn state(&self, p: Pos) -> Option<CellState> {
        Grid::state(self, p)
    }

    fn set_state(&mut self, p: Pos, state: CellState) {
        // Positions come from the compiled adjacency and never leave the grid.
        if let Err(e) = self.set(p, state) {
            warn!("ignoring state change: {e}");
        }
    }

    /// Manhattan distance on 4-connected grids, Chebyshev on 8-connected
    /// ones (a diagonal step costs the same as an orthogonal one).
    fn estimate(&self, from: Pos, to: Pos) -> u32 {
        match self.connectivity() {
            Connectivity::Four => manhattan(from, to),
            Connectivity::Eight => chebyshev(from, to),
        }
    }
}
