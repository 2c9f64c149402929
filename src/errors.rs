//! Error kinds surfaced by the cube model and the solver.

use thiserror::Error;

use crate::geometry::Vector3i;
use crate::pieces::Color;
use crate::solver::Phase;

/// Malformed input rejected at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("matrix requires 9 entries, got {0}")]
    MatrixEntries(usize),
    #[error("matrix requires 3 rows, got {0}")]
    MatrixRows(usize),
    #[error("vector requires 3 components, got {0}")]
    VectorComponents(usize),
    #[error("vector component {0} is missing")]
    MissingComponent(usize),
    /// Counted after whitespace is stripped.
    #[error("cube string requires 54 stickers, got {0}")]
    StickerCount(usize),
    #[error("piece must have 1, 2, or 3 colors, given {0}")]
    PieceColors(usize),
    #[error("piece position {0} is not on the cube")]
    PiecePosition(Vector3i),
}

/// A move token that does not name any move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unknown move {0:?}")]
    UnknownMove(String),
}

/// The solver could not finish.
///
/// `Stuck`, `PieceNotFound` and `Unsolved` point at an invalid input cube;
/// `Invariant` points at a bug in a move table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("stuck in loop during {phase}, unsolvable cube?\n{cube}")]
    Stuck { phase: Phase, cube: String },
    #[error("no piece with colors {colors:?} during {phase}")]
    PieceNotFound { phase: Phase, colors: Vec<Color> },
    #[error("internal invariant violated during {phase}: {detail}")]
    Invariant { phase: Phase, detail: String },
    #[error("all phases finished but the cube is not solved\n{cube}")]
    Unsolved { cube: String },
}

/// Any error produced by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Lookup(#[from] LookupError),
    #[error("{0}")]
    Solve(#[from] SolveError),
}
