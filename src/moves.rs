//! Move notation and the table mapping each move to a rotation.
//!
//! Tokens are case-sensitive: face turns `L R U D F B`, slice turns `M E S`
//! and whole-cube rotations `X Y Z`. A trailing `i` names the inverse
//! (counter-clockwise) move. Sequences are tokens separated by whitespace.

use strum::{Display, EnumString, VariantArray};

use crate::cube::{Face, Layer};
use crate::errors::LookupError;
use crate::geometry::{
    Axis, Matrix3i, ROT_XY_CC, ROT_XY_CW, ROT_XZ_CC, ROT_XZ_CW, ROT_YZ_CC, ROT_YZ_CW,
};

/// A primitive move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, VariantArray)]
pub enum Move {
    L,
    Li,
    R,
    Ri,
    U,
    Ui,
    D,
    Di,
    F,
    Fi,
    B,
    Bi,
    M,
    Mi,
    E,
    Ei,
    S,
    Si,
    X,
    Xi,
    Y,
    Yi,
    Z,
    Zi,
}

/// The twelve outer face turns, used for scrambling.
pub const FACE_TURNS: [Move; 12] = [
    Move::L,
    Move::Li,
    Move::R,
    Move::Ri,
    Move::U,
    Move::Ui,
    Move::D,
    Move::Di,
    Move::F,
    Move::Fi,
    Move::B,
    Move::Bi,
];

impl Move {
    /// Which pieces this move turns, and by which rotation.
    ///
    /// The clockwise generator is not always the "clockwise" turn: faces on
    /// the negative side of an axis (L, D, B) and the slices that follow them
    /// (M, E) use the opposite generator of their positive counterpart.
    pub const fn action(self) -> (Layer, Matrix3i) {
        use Move::*;

        match self {
            L => (Layer::Face(Face::Left), ROT_YZ_CC),
            Li => (Layer::Face(Face::Left), ROT_YZ_CW),
            R => (Layer::Face(Face::Right), ROT_YZ_CW),
            Ri => (Layer::Face(Face::Right), ROT_YZ_CC),
            U => (Layer::Face(Face::Up), ROT_XZ_CW),
            Ui => (Layer::Face(Face::Up), ROT_XZ_CC),
            D => (Layer::Face(Face::Down), ROT_XZ_CC),
            Di => (Layer::Face(Face::Down), ROT_XZ_CW),
            F => (Layer::Face(Face::Front), ROT_XY_CW),
            Fi => (Layer::Face(Face::Front), ROT_XY_CC),
            B => (Layer::Face(Face::Back), ROT_XY_CC),
            Bi => (Layer::Face(Face::Back), ROT_XY_CW),
            M => (Layer::Slice(Axis::X), ROT_YZ_CC),
            Mi => (Layer::Slice(Axis::X), ROT_YZ_CW),
            E => (Layer::Slice(Axis::Y), ROT_XZ_CC),
            Ei => (Layer::Slice(Axis::Y), ROT_XZ_CW),
            S => (Layer::Slice(Axis::Z), ROT_XY_CW),
            Si => (Layer::Slice(Axis::Z), ROT_XY_CC),
            X => (Layer::Whole, ROT_YZ_CW),
            Xi => (Layer::Whole, ROT_YZ_CC),
            Y => (Layer::Whole, ROT_XZ_CW),
            Yi => (Layer::Whole, ROT_XZ_CC),
            Z => (Layer::Whole, ROT_XY_CW),
            Zi => (Layer::Whole, ROT_XY_CC),
        }
    }

    pub const fn inverse(self) -> Self {
        use Move::*;

        match self {
            L => Li,
            Li => L,
            R => Ri,
            Ri => R,
            U => Ui,
            Ui => U,
            D => Di,
            Di => D,
            F => Fi,
            Fi => F,
            B => Bi,
            Bi => B,
            M => Mi,
            Mi => M,
            E => Ei,
            Ei => E,
            S => Si,
            Si => S,
            X => Xi,
            Xi => X,
            Y => Yi,
            Yi => Y,
            Z => Zi,
            Zi => Z,
        }
    }

    /// Returns `true` for whole-cube rotations, which reorient the cube
    /// without changing its state.
    pub const fn is_rotation(self) -> bool {
        matches!(self.action().0, Layer::Whole)
    }

    /// The clockwise and counter-clockwise turns of `face`.
    pub const fn face_turns(face: Face) -> (Move, Move) {
        match face {
            Face::Right => (Move::R, Move::Ri),
            Face::Left => (Move::L, Move::Li),
            Face::Up => (Move::U, Move::Ui),
            Face::Down => (Move::D, Move::Di),
            Face::Front => (Move::F, Move::Fi),
            Face::Back => (Move::B, Move::Bi),
        }
    }

    /// Parses a single move token.
    pub fn parse(token: &str) -> Result<Self, LookupError> {
        token
            .parse()
            .map_err(|_| LookupError::UnknownMove(token.to_owned()))
    }
}

/// Parses a whitespace-separated move sequence.
pub fn parse(sequence: &str) -> Result<Vec<Move>, LookupError> {
    sequence.split_whitespace().map(Move::parse).collect()
}

/// Formats moves as a space-separated sequence.
pub fn format(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generates a random sequence of face turns.
///
/// A turn never directly undoes the previous one, so the sequence has no
/// trivially cancelling pairs. The result depends only on the state of `rng`.
pub fn scramble(length: usize, rng: &mut fastrand::Rng) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::with_capacity(length);
    while moves.len() < length {
        let candidate = FACE_TURNS[rng.usize(..FACE_TURNS.len())];
        if moves.last() != Some(&candidate.inverse()) {
            moves.push(candidate);
        }
    }
    moves
}
