use thiserror::Error;

use crate::geom::Pos;

/// Errors raised by [`Grid`](crate::Grid) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position {pos} is outside the {rows}x{rows} grid")]
    OutOfBounds { pos: Pos, rows: usize },

    #[error("invalid grid glyph {ch:?} at {pos}")]
    InvalidGlyph { ch: char, pos: Pos },

    #[error("grid text is not square: {rows} rows but a line of width {width}")]
    NotSquare { rows: usize, width: usize },

    #[error("grid text has more than one start cell")]
    MultipleStart,

    #[error("grid text has more than one end cell")]
    MultipleEnd,
}
