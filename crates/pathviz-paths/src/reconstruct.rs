use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;

use pathviz_core::Pos;

use crate::observer::{Step, StepObserver};
use crate::outcome::Path;
use crate::traits::SearchGraph;

/// A predecessor relation produced by a search.
pub trait Predecessors {
    /// The cell `p` was reached from, if any.
    fn predecessor(&self, p: Pos) -> Option<Pos>;
}

impl<S: BuildHasher> Predecessors for HashMap<Pos, Pos, S> {
    #[inline]
    fn predecessor(&self, p: Pos) -> Option<Pos> {
        self.get(&p).copied()
    }
}

/// Walk `came_from` backward from `end` until `start` or a cell without a
/// predecessor, tagging every cell in between as path.
///
/// `start` and `end` are left untouched; callers tag them afterwards. The
/// observer sees one [`Step::Path`] per tagged cell, from the end side
/// toward the start. If it asks to stop, the remaining cells are still
/// tagged but no longer reported. Running it twice tags the same cells.
///
/// Returns the path from its first cell (normally `start`) to `end`.
pub fn reconstruct_path<G, O, P>(
    graph: &mut G,
    came_from: &P,
    start: Pos,
    end: Pos,
    observer: &mut O,
) -> Path
where
    G: SearchGraph + ?Sized,
    O: StepObserver<G> + ?Sized,
    P: Predecessors + ?Sized,
{
    let mut cells = vec![end];
    let mut seen = HashSet::from([end]);
    let mut notify = true;
    let mut current = end;

    while current != start {
        let Some(prev) = came_from.predecessor(current) else {
            break;
        };
        if !seen.insert(prev) {
            // A malformed map with a cycle; stop rather than spin.
            break;
        }
        current = prev;
        cells.push(current);
        if current == start {
            break;
        }
        graph.mark_path(current);
        if notify && !observer.on_step(graph, Step::Path(current)) {
            notify = false;
        }
    }

    cells.reverse();
    Path::new(cells)
}
