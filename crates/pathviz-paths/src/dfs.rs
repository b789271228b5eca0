use pathviz_core::Pos;

use crate::observer::StepObserver;
use crate::outcome::SearchOutcome;
use crate::traits::SearchGraph;
use crate::traversal::{self, Order};

/// Depth-first search from `start` to `end`.
///
/// Same discovery and tagging rules as
/// [`breadth_first`](crate::breadth_first) with a stack frontier. The path
/// is valid but usually not the shortest.
pub fn depth_first<G, O>(graph: &mut G, start: Pos, end: Pos, observer: &mut O) -> SearchOutcome
where
    G: SearchGraph + ?Sized,
    O: StepObserver<G> + ?Sized,
{
    traversal::search(graph, start, end, observer, Order::Lifo)
}

#[cfg(test)]
mod tests {
    use pathviz_core::{CellState, Connectivity};

    use super::*;
    use crate::fixtures::{endpoints, open_grid, split_grid, wall_grid};
    use crate::observer::{NoopObserver, StepRecorder};

    #[test]
    fn follows_the_last_discovered_branch() {
        let (s, e) = (Pos::new(0, 0), Pos::new(0, 4));
        let mut g = open_grid(5, s, e, Connectivity::Four);
        let mut rec = StepRecorder::new();
        let path = depth_first(&mut g, s, e, &mut rec).into_path().unwrap();
        // from (0,0) the last pushed neighbour is (0,1): straight along row 0
        assert_eq!(path.len(), 4);
        assert_eq!(
            &rec.expanded()[..4],
            &[s, Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)]
        );
    }

    #[test]
    fn valid_but_not_shortest() {
        let (s, e) = (Pos::new(0, 0), Pos::new(4, 0));
        let mut g = open_grid(5, s, e, Connectivity::Four);
        let path = depth_first(&mut g, s, e, &mut NoopObserver)
            .into_path()
            .unwrap();
        assert!(path.is_connected(Connectivity::Four));
        assert!(path.len() >= 4);
        assert_eq!(path.start(), Some(s));
        assert_eq!(path.end(), Some(e));
        assert_eq!(g.count(CellState::Path), path.intermediate().len());
    }

    #[test]
    fn wall_and_split() {
        let mut g = wall_grid();
        let (s, e) = endpoints(&g);
        let path = depth_first(&mut g, s, e, &mut NoopObserver)
            .into_path()
            .unwrap();
        assert!(path.len() >= 12);
        assert!(path.is_connected(Connectivity::Four));

        let mut g = split_grid();
        let (s, e) = endpoints(&g);
        assert_eq!(depth_first(&mut g, s, e, &mut NoopObserver), SearchOutcome::NoPath);
    }
}
