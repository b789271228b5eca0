use std::collections::HashMap;
use std::rc::Rc;

use pathviz_core::Pos;

/// Cost of moving between adjacent cells.
pub const DISTANCE: u32 = 1;

/// Sentinel cost of a cell not reached yet.
pub const UNREACHABLE: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Priority frontier entry
// ---------------------------------------------------------------------------

/// Entry in a priority frontier, ordered by `(priority, seq)` so that the
/// `BinaryHeap` (a max-heap) pops the smallest priority first and breaks
/// ties in insertion order. `cost` is the path cost the entry was queued
/// with, used to recognise superseded entries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: u32,
    pub(crate) seq: u64,
    pub(crate) cost: u32,
    pub(crate) pos: Pos,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Trail
// ---------------------------------------------------------------------------

/// An immutable predecessor chain from a frontier cell back to the start.
///
/// Each queued branch owns its own trail; siblings share their common
/// prefix through `Rc`, so forking a branch costs one allocation.
#[derive(Debug)]
pub(crate) struct Trail {
    pos: Pos,
    parent: Option<Rc<Trail>>,
}

impl Trail {
    pub(crate) fn root(pos: Pos) -> Rc<Self> {
        Rc::new(Self { pos, parent: None })
    }

    /// The trail of `pos` reached from the end of `self`.
    pub(crate) fn extend(self: &Rc<Self>, pos: Pos) -> Rc<Self> {
        Rc::new(Self {
            pos,
            parent: Some(Rc::clone(self)),
        })
    }

    /// Materialize the chain as a predecessor map.
    pub(crate) fn to_came_from(&self) -> HashMap<Pos, Pos> {
        let mut came_from = HashMap::new();
        let mut node = self;
        while let Some(parent) = &node.parent {
            came_from.insert(node.pos, parent.pos);
            node = parent;
        }
        came_from
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn heap_pops_lowest_priority_then_oldest() {
        let mut heap = BinaryHeap::new();
        for (priority, seq) in [(3, 0), (1, 1), (1, 2), (2, 3)] {
            heap.push(FrontierEntry {
                priority,
                seq,
                cost: 0,
                pos: Pos::new(0, seq as i32),
            });
        }
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop().map(|e| e.seq)).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn sibling_trails_share_prefix_but_stay_private() {
        let root = Trail::root(Pos::new(0, 0));
        let a = root.extend(Pos::new(0, 1));
        let left = a.extend(Pos::new(0, 2));
        let right = a.extend(Pos::new(1, 1));

        let l = left.to_came_from();
        let r = right.to_came_from();
        assert_eq!(l.len(), 2);
        assert_eq!(l[&Pos::new(0, 2)], Pos::new(0, 1));
        assert!(!l.contains_key(&Pos::new(1, 1)));
        assert_eq!(r[&Pos::new(1, 1)], Pos::new(0, 1));
        assert_eq!(r[&Pos::new(0, 1)], Pos::new(0, 0));
    }
}
