//! Rubik's Cube Model and Solver Library
//!
//! Models a 3x3x3 cube as 26 pieces with integer coordinates, applies the
//! standard face, slice and whole-cube moves, and solves any valid cube with a
//! layer-by-layer method.

pub mod cube;
pub mod errors;
pub mod geometry;
pub mod moves;
pub mod pieces;
pub mod solver;

pub use cube::{Cube, Face, Layer, PieceId};
pub use errors::{Error, LookupError, SolveError, ValidationError};
pub use moves::Move;
pub use pieces::{Color, Piece, PieceKind};
pub use solver::{Phase, Solver};

/// A solved cube together with the moves that solved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The cube as given.
    pub start: Cube,
    /// The cube after every move was applied.
    pub solved: Cube,
    /// Every primitive move applied, in order.
    pub moves: Vec<Move>,
    /// How many of the moves each phase contributed.
    pub phases: Vec<(Phase, usize)>,
}

impl Solution {
    /// Replays the moves on a copy of the starting cube.
    pub fn verify(&self) -> bool {
        let mut cube = self.start.clone();
        cube.apply_all(&self.moves);
        cube.is_solved() && cube == self.solved
    }
}

/// Parses a 54-sticker cube string and solves it.
pub fn solve(stickers: &str) -> Result<Solution, Error> {
    let start: Cube = stickers.parse()?;
    solve_cube(&start)
}

/// Solves a copy of `start`.
pub fn solve_cube(start: &Cube) -> Result<Solution, Error> {
    let mut cube = start.clone();
    let mut solver = Solver::new(&mut cube)?;
    solver.solve()?;
    let moves = solver.moves().to_vec();
    let phases = solver.phases().to_vec();

    Ok(Solution {
        start: start.clone(),
        solved: cube,
        moves,
        phases,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SCRAMBLED: &str = "DLURRDFFUBBLDDRBRBLDLRBFRUULFBDDUFBRBBRFUDFLUDLUULFLFR";

    #[test]
    fn test_solve_example() {
        let solution = solve(SCRAMBLED).unwrap();
        assert!(solution.solved.is_solved());
        assert!(solution.verify());
        assert_eq!(solution.moves.len(), 257);
        assert_eq!(solution.start.flat_str(), SCRAMBLED);
        assert_eq!(
            solution.phases,
            [
                (Phase::Cross, 23),
                (Phase::CrossCorners, 27),
                (Phase::SecondLayer, 66),
                (Phase::BackFaceEdges, 12),
                (Phase::LastLayerCornersPosition, 39),
                (Phase::LastLayerCornersOrientation, 32),
                (Phase::LastLayerEdges, 58),
            ]
        );
    }

    #[test]
    fn test_solve_rejects_bad_input() {
        assert_eq!(
            solve("UUU"),
            Err(Error::Validation(ValidationError::StickerCount(3)))
        );
        let twisted = "BUUUUUUUUULLFFFRRRBBLLLLFFFRRRBBBLLLFFFRRRBBBDDDDDDDDD";
        assert!(matches!(
            solve(twisted),
            Err(Error::Solve(SolveError::Unsolved { .. }))
        ));
    }
}
