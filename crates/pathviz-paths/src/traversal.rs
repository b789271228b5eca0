//! Unweighted traversal shared by breadth-first and depth-first search.
//!
//! Frontier membership lives in the graph itself: a cell tagged open or
//! closed has been discovered and is never queued again. Each queued
//! branch carries its own [`Trail`] back to the start. Start and goal keep
//! their own tags for the whole run.

use std::collections::VecDeque;
use std::rc::Rc;

use log::debug;
use pathviz_core::Pos;

use crate::frontier::Trail;
use crate::observer::{Step, StepObserver};
use crate::outcome::{Path, SearchOutcome};
use crate::reconstruct::reconstruct_path;
use crate::traits::SearchGraph;

/// Which end of the frontier is expanded next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    /// Queue discipline (breadth-first).
    Fifo,
    /// Stack discipline (depth-first).
    Lifo,
}

pub(crate) fn search<G, O>(
    graph: &mut G,
    start: Pos,
    end: Pos,
    observer: &mut O,
    order: Order,
) -> SearchOutcome
where
    G: SearchGraph + ?Sized,
    O: StepObserver<G> + ?Sized,
{
    if start == end {
        return SearchOutcome::Found(Path::trivial(start));
    }

    let mut frontier: VecDeque<(Pos, Rc<Trail>)> = VecDeque::new();
    frontier.push_back((start, Trail::root(start)));

    let mut nbuf = Vec::with_capacity(8);
    let mut expanded = 0usize;
    let mut end_queued = false;

    loop {
        let next = match order {
            Order::Fifo => frontier.pop_front(),
            Order::Lifo => frontier.pop_back(),
        };
        let Some((current, trail)) = next else {
            break;
        };

        if current != start && current != end {
            graph.mark_closed(current);
        }

        if current == end {
            let came_from = trail.to_came_from();
            let path = reconstruct_path(graph, &came_from, start, end, observer);
            graph.mark_start(start);
            graph.mark_end(end);
            debug!(
                "{order:?} traversal reached {end} after {expanded} expansions, path length {}",
                path.len()
            );
            return SearchOutcome::Found(path);
        }

        nbuf.clear();
        graph.neighbors(current, &mut nbuf);

        for &n in &nbuf {
            if n == start || graph.is_barrier(n) || graph.is_open(n) || graph.is_closed(n) {
                continue;
            }
            if n == end {
                // the goal keeps its tag, so membership is tracked here
                if end_queued {
                    continue;
                }
                end_queued = true;
            } else {
                graph.mark_open(n);
            }
            frontier.push_back((n, trail.extend(n)));
        }

        expanded += 1;
        if !observer.on_step(graph, Step::Expanded(current)) {
            graph.mark_start(start);
            graph.mark_end(end);
            debug!("{order:?} traversal cancelled after {expanded} expansions");
            return SearchOutcome::Cancelled;
        }
    }

    debug!("{order:?} traversal exhausted the frontier after {expanded} expansions");
    SearchOutcome::NoPath
}
