use std::fmt;
use std::str::FromStr;

use pathviz_core::Pos;
use thiserror::Error;

use crate::observer::StepObserver;
use crate::outcome::SearchOutcome;
use crate::traits::SearchGraph;
use crate::{astar, breadth_first, depth_first, dijkstra};

/// The four searches, selectable at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    AStar,
    Dijkstra,
    BreadthFirst,
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Self::AStar,
        Self::Dijkstra,
        Self::BreadthFirst,
        Self::DepthFirst,
    ];

    /// Short lowercase name, accepted back by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Dijkstra => "dijkstra",
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Whether the search always returns a shortest path.
    pub const fn is_shortest(self) -> bool {
        !matches!(self, Self::DepthFirst)
    }

    /// Run this search on `graph`.
    pub fn run<G, O>(self, graph: &mut G, start: Pos, end: Pos, observer: &mut O) -> SearchOutcome
    where
        G: SearchGraph + ?Sized,
        O: StepObserver<G> + ?Sized,
    {
        match self {
            Self::AStar => astar(graph, start, end, observer),
            Self::Dijkstra => dijkstra(graph, start, end, observer),
            Self::BreadthFirst => breadth_first(graph, start, end, observer),
            Self::DepthFirst => depth_first(graph, start, end, observer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search algorithm {0:?} (expected astar, dijkstra, bfs or dfs)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" | "a-star" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
