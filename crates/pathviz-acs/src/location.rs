//! Points, distances and tour lengths.

/// A point in the plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Location {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Location {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Length of the closed tour visiting `locations` in `tour` order, wrapping
/// from the last index back to the first.
pub fn tour_length(tour: &[usize], locations: &[Location]) -> f64 {
    let n = tour.len();
    (0..n)
        .map(|k| locations[tour[k]].distance(locations[tour[(k + 1) % n]]))
        .sum()
}

/// Greedy tour from `start`: always move to the nearest unvisited location,
/// lowest index first on ties.
pub fn nearest_neighbor_tour(locations: &[Location], start: usize) -> Vec<usize> {
    let n = locations.len();
    let mut tour = Vec::with_capacity(n);
    if n == 0 {
        return tour;
    }
    let mut visited = vec![false; n];
    let mut current = start;
    visited[current] = true;
    tour.push(current);

    for _ in 1..n {
        let mut nearest: Option<(usize, f64)> = None;
        for (j, loc) in locations.iter().enumerate() {
            if visited[j] {
                continue;
            }
            let d = locations[current].distance(*loc);
            if nearest.is_none_or(|(_, best)| d < best) {
                nearest = Some((j, d));
            }
        }
        let Some((next, _)) = nearest else {
            break;
        };
        visited[next] = true;
        tour.push(next);
        current = next;
    }
    tour
}

/// Whether `tour` visits each of `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    tour.iter()
        .all(|&i| i < n && !std::mem::replace(&mut seen[i], true))
}
