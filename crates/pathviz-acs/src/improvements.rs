use std::collections::VecDeque;

use log::{debug, trace};
use rand::Rng;
use rand::rngs::StdRng;

use crate::colony::{AntColony, deposit};
use crate::config::AcsConfig;
use crate::error::AcsError;
use crate::location::{Location, tour_length};
use crate::matrix::SquareMatrix;

/// A tour strictly shorter than every tour emitted before it in the run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Improvement {
    /// Zero-based iteration that built the tour.
    pub iteration: usize,
    /// The ant that built it, `None` for the nearest-neighbour seed.
    pub ant: Option<usize>,
    pub length: f64,
    pub tour: Vec<usize>,
}

/// Lazy stream of improving tours.
///
/// The first item is always the nearest-neighbour seed. Each later item
/// comes from an ant whose tour beat the best length so far. One call to
/// `next` runs as many whole iterations as needed to find the next
/// improvement; dropping the iterator stops the run.
#[derive(Debug)]
pub struct Improvements<R = StdRng> {
    colony: AntColony<R>,
    iteration: usize,
    pending: VecDeque<Improvement>,
    best: Option<Improvement>,
}

impl<R: Rng> Improvements<R> {
    pub(crate) fn new(colony: AntColony<R>) -> Self {
        let seed = Improvement {
            iteration: 0,
            ant: None,
            length: colony.seed_length(),
            tour: colony.seed_tour().to_vec(),
        };
        Self {
            colony,
            iteration: 0,
            pending: VecDeque::from([seed]),
            best: None,
        }
    }

    /// The best tour emitted so far.
    pub fn best(&self) -> Option<&Improvement> {
        self.best.as_ref()
    }

    /// Iterations completed so far.
    pub fn iterations_run(&self) -> usize {
        self.iteration
    }

    pub fn colony(&self) -> &AntColony<R> {
        &self.colony
    }

    fn run_iteration(&mut self) {
        let n = self.colony.locations().len();
        let mut delta = SquareMatrix::filled(n, 0.0);
        let mut best = self.best.as_ref().map_or(f64::INFINITY, |b| b.length);

        for ant in 0..self.colony.n_ants() {
            let tour = self.colony.construct_tour();
            let length = tour_length(&tour, self.colony.locations());
            deposit(&mut delta, &tour, length);
            if length < best {
                best = length;
                trace!(
                    "iteration {} ant {ant}: new best {length:.4}",
                    self.iteration
                );
                self.pending.push_back(Improvement {
                    iteration: self.iteration,
                    ant: Some(ant),
                    length,
                    tour,
                });
            }
        }

        self.colony.update_pheromone(&delta);
        debug!("iteration {} done, best length {best:.4}", self.iteration);
        self.iteration += 1;
    }
}

impl<R: Rng> Iterator for Improvements<R> {
    type Item = Improvement;

    fn next(&mut self) -> Option<Improvement> {
        loop {
            if let Some(found) = self.pending.pop_front() {
                self.best = Some(found.clone());
                return Some(found);
            }
            if self.iteration >= self.colony.config().max_iterations {
                return None;
            }
            self.run_iteration();
        }
    }
}

/// Run the colony with default parameters for `max_iterations` iterations.
pub fn optimize(
    locations: impl IntoIterator<Item = impl Into<Location>>,
    max_iterations: usize,
) -> Result<Improvements, AcsError> {
    let config = AcsConfig::default().with_max_iterations(max_iterations);
    AntColony::new(locations, config).map(AntColony::improvements)
}
