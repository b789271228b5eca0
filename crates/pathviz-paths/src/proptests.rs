use pathviz_core::{CellState, Connectivity, Grid, Pos, manhattan};
use proptest::prelude::*;

use crate::{Algorithm, NoopObserver, SearchOutcome};

/// Build a grid from a barrier mask, with start and end forced clear.
fn build(rows: usize, mask: &[bool], start: Pos, end: Pos, connectivity: Connectivity) -> Grid {
    let mut g = Grid::new(rows);
    for (i, blocked) in mask.iter().enumerate().take(rows * rows) {
        if *blocked {
            let p = Pos::new((i / rows) as i32, (i % rows) as i32);
            g.set_barrier(p).unwrap();
        }
    }
    g.set_start(start).unwrap();
    g.set_end(end).unwrap();
    g.compile_neighbors(connectivity);
    g
}

fn scenario() -> impl Strategy<Value = (usize, Vec<bool>, Pos, Pos)> {
    (2usize..9).prop_flat_map(|rows| {
        let side = rows as i32;
        (
            Just(rows),
            prop::collection::vec(prop::bool::weighted(0.3), rows * rows),
            (0..side, 0..side).prop_map(Pos::from),
            (0..side, 0..side).prop_map(Pos::from),
        )
    })
}

fn run(
    a: Algorithm,
    rows: usize,
    mask: &[bool],
    s: Pos,
    e: Pos,
    c: Connectivity,
) -> (SearchOutcome, Grid) {
    let mut g = build(rows, mask, s, e, c);
    let out = a.run(&mut g, s, e, &mut NoopObserver);
    (out, g)
}

proptest! {
    /// Without barriers every shortest search returns a Manhattan-length path.
    #[test]
    fn prop_open_grid_manhattan((rows, _mask, s, e) in scenario()) {
        let empty = vec![false; rows * rows];
        for a in [Algorithm::AStar, Algorithm::Dijkstra, Algorithm::BreadthFirst] {
            let (out, _) = run(a, rows, &empty, s, e, Connectivity::Four);
            let path = out.into_path();
            prop_assert!(path.is_some(), "{} found nothing", a);
            prop_assert_eq!(path.unwrap().len() as u32, manhattan(s, e));
        }
    }

    /// All searches agree on reachability; shortest ones agree on length.
    #[test]
    fn prop_searches_agree(
        (rows, mask, s, e) in scenario(),
        diagonal in any::<bool>(),
    ) {
        let c = if diagonal { Connectivity::Eight } else { Connectivity::Four };
        let (astar, _) = run(Algorithm::AStar, rows, &mask, s, e, c);
        let (dijkstra, _) = run(Algorithm::Dijkstra, rows, &mask, s, e, c);
        let (bfs, _) = run(Algorithm::BreadthFirst, rows, &mask, s, e, c);
        let (dfs, _) = run(Algorithm::DepthFirst, rows, &mask, s, e, c);

        prop_assert_eq!(astar.is_found(), dijkstra.is_found());
        prop_assert_eq!(astar.is_found(), bfs.is_found());
        prop_assert_eq!(astar.is_found(), dfs.is_found());

        if let (Some(pa), Some(pd), Some(pb)) = (astar.path(), dijkstra.path(), bfs.path()) {
            prop_assert_eq!(pa.len(), pd.len());
            prop_assert_eq!(pa.len(), pb.len());
        }
    }

    /// A depth-first path is a chain of mutual neighbours avoiding barriers.
    #[test]
    fn prop_dfs_path_is_valid((rows, mask, s, e) in scenario()) {
        let (out, g) = run(Algorithm::DepthFirst, rows, &mask, s, e, Connectivity::Four);
        if let Some(path) = out.path() {
            prop_assert!(path.is_connected(Connectivity::Four));
            prop_assert_eq!(path.start(), Some(s));
            prop_assert_eq!(path.end(), Some(e));
            for p in path.cells() {
                prop_assert_ne!(g.state(*p), Some(CellState::Barrier));
            }
        }
    }

    /// A failed search leaves no path marks, and start/end keep their tags.
    #[test]
    fn prop_no_path_leaves_no_marks((rows, mask, s, e) in scenario()) {
        for a in Algorithm::ALL {
            let (out, g) = run(a, rows, &mask, s, e, Connectivity::Four);
            if !out.is_found() {
                prop_assert_eq!(g.count(CellState::Path), 0);
            }
            if s != e {
                prop_assert_eq!(g.state(s), Some(CellState::Start));
                prop_assert_eq!(g.state(e), Some(CellState::End));
            }
        }
    }
}
