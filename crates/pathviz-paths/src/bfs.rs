use pathviz_core::Pos;

use crate::observer::StepObserver;
use crate::outcome::SearchOutcome;
use crate::traits::SearchGraph;
use crate::traversal::{self, Order};

/// Breadth-first search from `start` to `end`.
///
/// Neighbours are tagged open as soon as they are discovered, so nothing
/// is queued twice. The first time the goal is dequeued the search stops,
/// which gives a shortest path in number of moves.
pub fn breadth_first<G, O>(graph: &mut G, start: Pos, end: Pos, observer: &mut O) -> SearchOutcome
where
    G: SearchGraph + ?Sized,
    O: StepObserver<G> + ?Sized,
{
    traversal::search(graph, start, end, observer, Order::Fifo)
}
