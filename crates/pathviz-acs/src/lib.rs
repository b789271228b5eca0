//! Ant Colony System tour optimizer.
//!
//! Given a set of points, [`optimize`] (or [`AntColony::improvements`])
//! yields a lazy stream of closed tours, each strictly shorter than the
//! last. The stream opens with the nearest-neighbour tour that seeds the
//! pheromone level, then follows the ants:
//!
//! ```
//! use pathviz_acs::optimize;
//!
//! let square = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
//! let best = optimize(square, 10).unwrap().last().unwrap();
//! assert!((best.length - 4.0).abs() < 1e-9);
//! ```

mod colony;
mod config;
mod error;
mod improvements;
mod location;
mod matrix;

#[cfg(test)]
mod proptests;

pub use colony::AntColony;
pub use config::AcsConfig;
pub use error::AcsError;
pub use improvements::{Improvement, Improvements, optimize};
pub use location::{Location, is_permutation, nearest_neighbor_tour, tour_length};
pub use matrix::SquareMatrix;
