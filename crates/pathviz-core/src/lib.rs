//! **pathviz-core**: grid-graph types shared by the pathviz searches.
//!
//! This crate provides positions, cells with a single tagged
//! [`CellState`], and the square [`Grid`] that owns them and compiles
//! 4- or 8-connected adjacency on demand.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellState};
pub use error::GridError;
pub use geom::{Connectivity, Pos, chebyshev, manhattan};
pub use grid::Grid;
