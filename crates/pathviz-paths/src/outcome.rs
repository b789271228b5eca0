use pathviz_core::{Connectivity, Pos};

/// A reconstructed path, start and end included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Pos>,
}

impl Path {
    pub fn new(cells: Vec<Pos>) -> Self {
        Self { cells }
    }

    /// The path of a search whose start is its goal.
    pub fn trivial(at: Pos) -> Self {
        Self { cells: vec![at] }
    }

    /// Every cell from start to end.
    #[inline]
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Cells strictly between start and end.
    pub fn intermediate(&self) -> &[Pos] {
        match self.cells.len() {
            0..=2 => &[],
            n => &self.cells[1..n - 1],
        }
    }

    /// Number of moves (edges) along the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Whether the path makes no move at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.cells.last().copied()
    }

    /// Whether every consecutive pair of cells is adjacent.
    pub fn is_connected(&self, connectivity: Connectivity) -> bool {
        self.cells
            .windows(2)
            .all(|w| w[0].is_adjacent(w[1], connectivity))
    }
}

/// How a search ended.
///
/// [`NoPath`](SearchOutcome::NoPath) and
/// [`Cancelled`](SearchOutcome::Cancelled) both count as "not found".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The goal was reached.
    Found(Path),
    /// The frontier emptied before reaching the goal.
    NoPath,
    /// The observer asked to stop.
    Cancelled,
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }
}

impl From<SearchOutcome> for bool {
    fn from(outcome: SearchOutcome) -> bool {
        outcome.is_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_path_is_empty() {
        let p = Path::trivial(Pos::new(2, 2));
        assert!(p.is_empty());
        assert!(p.intermediate().is_empty());
        assert_eq!(p.start(), p.end());
    }

    #[test]
    fn intermediate_excludes_endpoints() {
        let p = Path::new(vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.intermediate(), &[Pos::new(0, 1)]);
        assert!(p.is_connected(Connectivity::Four));
        let broken = Path::new(vec![Pos::new(0, 0), Pos::new(1, 1)]);
        assert!(!broken.is_connected(Connectivity::Four));
        assert!(broken.is_connected(Connectivity::Eight));
    }
}
