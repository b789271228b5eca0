use pathviz_core::Pos;

use crate::best_first::{self, Priority};
use crate::observer::StepObserver;
use crate::outcome::SearchOutcome;
use crate::traits::SearchGraph;

/// Dijkstra search from `start` to `end` with unit edge costs.
///
/// Same bookkeeping as [`astar`](crate::astar), keyed by distance alone.
pub fn dijkstra<G, O>(graph: &mut G, start: Pos, end: Pos, observer: &mut O) -> SearchOutcome
where
    G: SearchGraph + ?Sized,
    O: StepObserver<G> + ?Sized,
{
    best_first::search(graph, start, end, observer, Priority::Cost)
}
