//! Pheromone state and tour construction for one Ant Colony System run.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::config::AcsConfig;
use crate::error::AcsError;
use crate::improvements::Improvements;
use crate::location::{Location, nearest_neighbor_tour, tour_length};
use crate::matrix::SquareMatrix;

/// A colony bound to one point set.
///
/// Construction validates the input, computes the nearest-neighbour seed
/// tour and initialises pheromone to `n_ants / seed_length` on every edge.
/// Visibility is `1 / distance`, zero on the diagonal and between
/// coincident points.
#[derive(Debug, Clone)]
pub struct AntColony<R = StdRng> {
    locations: Vec<Location>,
    config: AcsConfig,
    n_ants: usize,
    visibility: SquareMatrix,
    pheromone: SquareMatrix,
    seed_tour: Vec<usize>,
    seed_length: f64,
    rng: R,
}

impl AntColony<StdRng> {
    /// A colony seeded from `config.seed`, or from the thread RNG when
    /// no seed is set.
    pub fn new(
        locations: impl IntoIterator<Item = impl Into<Location>>,
        config: AcsConfig,
    ) -> Result<Self, AcsError> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self::with_rng(locations, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AntColony<R> {
    /// A colony drawing every random choice from `rng`. `config.seed` is
    /// ignored.
    pub fn with_rng(
        locations: impl IntoIterator<Item = impl Into<Location>>,
        config: AcsConfig,
        mut rng: R,
    ) -> Result<Self, AcsError> {
        config.validate()?;
        let locations: Vec<Location> = locations.into_iter().map(Into::into).collect();
        let n = locations.len();
        if n < 2 {
            return Err(AcsError::TooFewLocations { found: n });
        }
        if let Some(index) = locations.iter().position(|l| !l.is_finite()) {
            return Err(AcsError::NonFiniteLocation { index });
        }

        let seed_tour = nearest_neighbor_tour(&locations, rng.random_range(0..n));
        let seed_length = tour_length(&seed_tour, &locations);
        if seed_length <= 0.0 {
            return Err(AcsError::CoincidentLocations);
        }

        let n_ants = config.ants_for(n);
        let visibility = SquareMatrix::from_fn(n, |i, j| {
            let d = locations[i].distance(locations[j]);
            if i == j || d == 0.0 {
                0.0
            } else {
                1.0 / d
            }
        });
        let tau0 = n_ants as f64 / seed_length;
        debug!(
            "colony of {n_ants} ants over {n} locations, seed length {seed_length:.4}, \
             tau0 {tau0:.6}"
        );

        Ok(Self {
            pheromone: SquareMatrix::filled(n, tau0),
            locations,
            config,
            n_ants,
            visibility,
            seed_tour,
            seed_length,
            rng,
        })
    }

    /// Build one tour from the current pheromone.
    ///
    /// The tour starts at a uniformly random location. Each next location
    /// is drawn among the unvisited ones with probability proportional to
    /// `pheromone[c][cur]^alpha * visibility[c][cur]^beta`; the last one is
    /// appended without a draw.
    pub fn construct_tour(&mut self) -> Vec<usize> {
        let n = self.locations.len();
        let start = self.rng.random_range(0..n);
        let mut remaining: Vec<usize> = (0..n).filter(|&i| i != start).collect();
        let mut tour = Vec::with_capacity(n);
        tour.push(start);

        let mut weights = Vec::with_capacity(n);
        let mut current = start;
        while remaining.len() > 1 {
            weights.clear();
            weights.extend(remaining.iter().map(|&c| self.weight(c, current)));
            let k = roulette(&weights, &mut self.rng);
            current = remaining.remove(k);
            tour.push(current);
        }
        tour.extend(remaining.pop());
        tour
    }

    fn weight(&self, candidate: usize, current: usize) -> f64 {
        let tau = self.pheromone[(candidate, current)];
        let eta = self.visibility[(candidate, current)];
        let w = tau.powf(self.config.alpha) * eta.powf(self.config.beta);
        if w.is_finite() && w > 0.0 {
            w
        } else {
            0.0
        }
    }

    /// `pheromone = (1 - rho) * pheromone + delta`.
    pub fn update_pheromone(&mut self, delta: &SquareMatrix) {
        self.pheromone.scale_add(1.0 - self.config.rho, delta);
    }

    /// Start streaming improving tours.
    pub fn improvements(self) -> Improvements<R> {
        Improvements::new(self)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn config(&self) -> &AcsConfig {
        &self.config
    }

    pub fn n_ants(&self) -> usize {
        self.n_ants
    }

    pub fn pheromone(&self) -> &SquareMatrix {
        &self.pheromone
    }

    pub fn visibility(&self) -> &SquareMatrix {
        &self.visibility
    }

    /// The nearest-neighbour tour that set the initial pheromone level.
    pub fn seed_tour(&self) -> &[usize] {
        &self.seed_tour
    }

    pub fn seed_length(&self) -> f64 {
        self.seed_length
    }
}

/// Add `1 / length` to every directed edge of the closed `tour`.
pub(crate) fn deposit(delta: &mut SquareMatrix, tour: &[usize], length: f64) {
    if length <= 0.0 || length.is_nan() {
        return;
    }
    let amount = 1.0 / length;
    let n = tour.len();
    for k in 0..n {
        delta[(tour[k], tour[(k + 1) % n])] += amount;
    }
}

/// Draw an index with probability proportional to `weights`, or uniformly
/// when no weight is positive.
pub(crate) fn roulette(weights: &[f64], rng: &mut impl Rng) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..weights.len());
    }
    let r = rng.random::<f64>() * total;
    let mut acc = 0.0;
    for (k, &w) in weights.iter().enumerate() {
        acc += w;
        if r < acc {
            return k;
        }
    }
    // rounding left r at the very top
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::is_permutation;

    fn square() -> Vec<(f64, f64)> {
        vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]
    }

    #[test]
    fn initial_pheromone_uses_seed_length() {
        let colony = AntColony::new(square(), AcsConfig::default().with_seed(1)).unwrap();
        assert_eq!(colony.n_ants(), 4);
        assert!((colony.seed_length() - 4.0).abs() < 1e-12);
        assert!(
            colony
                .pheromone()
                .values()
                .iter()
                .all(|&t| (t - 1.0).abs() < 1e-12)
        );
        assert_eq!(colony.visibility()[(0, 0)], 0.0);
        assert!((colony.visibility()[(0, 2)] - 1.0 / 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn coincident_pair_has_zero_visibility() {
        let pts = vec![(0.0, 0.0), (0.0, 0.0), (3.0, 4.0)];
        let colony = AntColony::new(pts, AcsConfig::default().with_seed(2)).unwrap();
        assert_eq!(colony.visibility()[(0, 1)], 0.0);
        assert!((colony.visibility()[(2, 0)] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn constructed_tours_are_permutations() {
        let pts: Vec<(f64, f64)> = (0..9)
            .map(|i| ((i * 7 % 5) as f64, (i * 3 % 4) as f64))
            .collect();
        let mut colony = AntColony::new(pts, AcsConfig::default().with_seed(9)).unwrap();
        for _ in 0..20 {
            let tour = colony.construct_tour();
            assert!(is_permutation(&tour, 9));
        }
    }

    #[test]
    fn deposit_and_evaporate() {
        let mut colony = AntColony::new(square(), AcsConfig::default().with_seed(4)).unwrap();
        let mut delta = SquareMatrix::filled(4, 0.0);
        deposit(&mut delta, &[0, 1, 2, 3], 4.0);
        assert_eq!(delta[(0, 1)], 0.25);
        assert_eq!(delta[(3, 0)], 0.25);
        assert_eq!(delta[(1, 0)], 0.0);

        colony.update_pheromone(&delta);
        assert!((colony.pheromone()[(0, 1)] - 0.75).abs() < 1e-12);
        assert!((colony.pheromone()[(1, 0)] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn roulette_falls_back_to_uniform() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[roulette(&[0.0, 0.0, 0.0], &mut rng)] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn roulette_never_picks_zero_weight() {
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            assert_ne!(roulette(&[1.0, 0.0, 2.0], &mut rng), 1);
        }
    }

    #[test]
    fn rejects_degenerate_input() {
        let cfg = AcsConfig::default().with_seed(0);
        assert_eq!(
            AntColony::new(Vec::<(f64, f64)>::new(), cfg.clone()).unwrap_err(),
            AcsError::TooFewLocations { found: 0 }
        );
        assert_eq!(
            AntColony::new(vec![(1.0, 1.0)], cfg.clone()).unwrap_err(),
            AcsError::TooFewLocations { found: 1 }
        );
        assert_eq!(
            AntColony::new(vec![(2.0, 2.0); 3], cfg.clone()).unwrap_err(),
            AcsError::CoincidentLocations
        );
        assert_eq!(
            AntColony::new(vec![(0.0, 0.0), (f64::INFINITY, 1.0)], cfg).unwrap_err(),
            AcsError::NonFiniteLocation { index: 1 }
        );
    }
}
