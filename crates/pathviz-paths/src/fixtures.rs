//! Grids shared by the search tests.

use pathviz_core::{Connectivity, Grid, Pos};

/// An open `rows × rows` grid with start and end set and adjacency compiled.
pub(crate) fn open_grid(rows: usize, start: Pos, end: Pos, connectivity: Connectivity) -> Grid {
    let mut g = Grid::new(rows);
    g.set_start(start).unwrap();
    g.set_end(end).unwrap();
    g.compile_neighbors(connectivity);
    g
}

/// 5×5 with a barrier column at col 2, rows 0–3; the only way across is
/// row 4.
pub(crate) fn wall_grid() -> Grid {
    let mut g: Grid = "\
        S.#.E
        ..#..
        ..#..
        ..#..
        ....."
        .parse()
        .unwrap();
    g.compile_neighbors(Connectivity::Four);
    g
}

/// 5×5 with a full barrier column; start and end are disconnected.
pub(crate) fn split_grid() -> Grid {
    let mut g: Grid = "\
        S.#.E
        ..#..
        ..#..
        ..#..
        ..#.."
        .parse()
        .unwrap();
    g.compile_neighbors(Connectivity::Four);
    g
}

/// Start and end of a grid built from text.
pub(crate) fn endpoints(g: &Grid) -> (Pos, Pos) {
    (g.start().unwrap(), g.end().unwrap())
}
