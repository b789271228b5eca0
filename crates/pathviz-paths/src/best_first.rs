//! Cost-ordered search shared by A* and Dijkstra.
//!
//! Frontier improvements are handled by reinsertion rather than
//! decrease-key: an improved cell is pushed again with its new key, and
//! the outdated entry is skipped when it surfaces. A membership set mirrors
//! which cells are queued so that a cell is tagged open only once. Start
//! and goal are never retagged.

use std::collections::{BinaryHeap, HashMap, HashSet};

use log::debug;
use pathviz_core::Pos;

use crate::frontier::{DISTANCE, FrontierEntry, UNREACHABLE};
use crate::observer::{Step, StepObserver};
use crate::outcome::{Path, SearchOutcome};
use crate::reconstruct::reconstruct_path;
use crate::traits::SearchGraph;

/// How a frontier entry is keyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Priority {
    /// `g + estimate(cell, goal)` (A*).
    CostPlusEstimate,
    /// `g` alone (Dijkstra).
    Cost,
}

pub(crate) fn search<G, O>(
    graph: &mut G,
    start: Pos,
    end: Pos,
    observer: &mut O,
    priority: Priority,
) -> SearchOutcome
where
    G: SearchGraph + ?Sized,
    O: StepObserver<G> + ?Sized,
{
    if start == end {
        return SearchOutcome::Found(Path::trivial(start));
    }

    let key = |graph: &G, p: Pos, g: u32| match priority {
        Priority::CostPlusEstimate => g.saturating_add(graph.estimate(p, end)),
        Priority::Cost => g,
    };

    let mut seq: u64 = 0;
    let mut open = BinaryHeap::new();
    open.push(FrontierEntry {
        priority: key(&*graph, start, 0),
        seq,
        cost: 0,
        pos: start,
    });
    let mut queued = HashSet::from([start]);
    let mut came_from: HashMap<Pos, Pos> = HashMap::new();
    let mut g_score: HashMap<Pos, u32> = HashMap::from([(start, 0)]);

    let mut nbuf = Vec::with_capacity(8);
    let mut expanded = 0usize;

    while let Some(FrontierEntry { pos: current, cost, .. }) = open.pop() {
        let current_g = g_score.get(&current).copied().unwrap_or(UNREACHABLE);
        if cost > current_g {
            // superseded by a cheaper reinsertion
            continue;
        }
        queued.remove(&current);

        if current == end {
            let path = reconstruct_path(graph, &came_from, start, end, observer);
            graph.mark_start(start);
            graph.mark_end(end);
            debug!(
                "{priority:?} search reached {end} after {expanded} expansions, path length {}",
                path.len()
            );
            return SearchOutcome::Found(path);
        }

        nbuf.clear();
        graph.neighbors(current, &mut nbuf);

        for &n in &nbuf {
            if graph.is_barrier(n) {
                continue;
            }
            let tentative = current_g.saturating_add(DISTANCE);
            if tentative >= g_score.get(&n).copied().unwrap_or(UNREACHABLE) {
                continue;
            }
            came_from.insert(n, current);
            g_score.insert(n, tentative);
            seq += 1;
            open.push(FrontierEntry {
                priority: key(&*graph, n, tentative),
                seq,
                cost: tentative,
                pos: n,
            });
            if queued.insert(n) && n != end {
                graph.mark_open(n);
            }
        }

        expanded += 1;
        if current != start {
            graph.mark_closed(current);
        }
        if !observer.on_step(graph, Step::Expanded(current)) {
            graph.mark_start(start);
            graph.mark_end(end);
            debug!("{priority:?} search cancelled after {expanded} expansions");
            return SearchOutcome::Cancelled;
        }
    }

    debug!("{priority:?} search exhausted the frontier after {expanded} expansions");
    SearchOutcome::NoPath
}
