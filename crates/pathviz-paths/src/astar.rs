use pathviz_core::Pos;

use crate::best_first::{self, Priority};
use crate::observer::StepObserver;
use crate::outcome::SearchOutcome;
use crate::traits::SearchGraph;

/// A* search from `start` to `end` with unit edge costs and the graph's
/// [`estimate`](SearchGraph::estimate) as heuristic.
///
/// Frontier entries are keyed by `(g + estimate, insertion order)`. Every
/// newly queued cell is tagged open and every expanded cell except the
/// start is tagged closed. On success the path is tagged and replayed
/// through `observer`, then start and end are tagged again.
pub fn astar<G, O>(graph: &mut G, start: Pos, end: Pos, observer: &mut O) -> SearchOutcome
where
    G: SearchGraph + ?Sized,
    O: StepObserver<G> + ?Sized,
{
    best_first::search(graph, start, end, observer, Priority::CostPlusEstimate)
}
