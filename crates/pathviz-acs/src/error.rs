use thiserror::Error;

/// Inputs the optimizer refuses to run on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcsError {
    #[error("a tour needs at least two locations, got {found}")]
    TooFewLocations { found: usize },

    #[error("location {index} has a non-finite coordinate")]
    NonFiniteLocation { index: usize },

    #[error("all locations coincide, so every tour has zero length")]
    CoincidentLocations,

    #[error("invalid colony parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
