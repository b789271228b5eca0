//! Incremental graph searches for grid visualizers.
//!
//! Four searches share one contract: they take a mutable [`SearchGraph`],
//! a start, a goal and a [`StepObserver`], tag cells as they go, and call
//! the observer after every expansion so a host can redraw or cancel.
//!
//! - **A\*** ([`astar`]): unit costs, graph-supplied heuristic
//! - **Dijkstra** ([`dijkstra`]): unit costs, no heuristic
//! - **Breadth-first** ([`breadth_first`]): FIFO frontier
//! - **Depth-first** ([`depth_first`]): LIFO frontier, not shortest
//!
//! A found path is tagged through [`reconstruct_path`] and replayed to the
//! observer one cell at a time.

mod algorithm;
mod astar;
mod best_first;
mod bfs;
mod dfs;
mod dijkstra;
mod frontier;
mod observer;
mod outcome;
mod reconstruct;
mod traits;
mod traversal;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod proptests;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::astar;
pub use bfs::breadth_first;
pub use dfs::depth_first;
pub use dijkstra::dijkstra;
pub use frontier::{DISTANCE, UNREACHABLE};
pub use observer::{CancelFlag, NoopObserver, Step, StepObserver, StepRecorder};
pub use outcome::{Path, SearchOutcome};
pub use reconstruct::{Predecessors, reconstruct_path};
pub use traits::SearchGraph;
