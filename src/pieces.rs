//! Cube piece definitions.
//!
//! A piece (cubie) sits at a position with every component in {-1, 0, 1} and
//! carries one sticker color per axis it shows on the outside of the cube.
//! Slot `i` of the color array holds the sticker facing along axis `i`.

use std::fmt;

use strum::Display;

use crate::errors::ValidationError;
use crate::geometry::{Axis, Matrix3i, Vector3i};

/// A sticker color. Any character is accepted.
pub type Color = char;

/// Structural kind of a piece, derived from how many stickers it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PieceKind {
    /// Center of a face (1 sticker).
    Face,
    /// Edge between two faces (2 stickers).
    Edge,
    /// Corner between three faces (3 stickers).
    Corner,
}

/// A single piece of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    position: Vector3i,
    colors: [Option<Color>; 3],
}

impl Piece {
    /// Creates a piece, validating its position and sticker count.
    pub fn new(position: Vector3i, colors: [Option<Color>; 3]) -> Result<Self, ValidationError> {
        if position.components().iter().any(|c| !(-1..=1).contains(c)) {
            return Err(ValidationError::PiecePosition(position));
        }
        let piece = Self { position, colors };
        match piece.sticker_count() {
            1..=3 => Ok(piece),
            n => Err(ValidationError::PieceColors(n)),
        }
    }

    #[inline]
    pub fn position(&self) -> Vector3i {
        self.position
    }

    /// The three color slots, `None` for axes without a sticker.
    #[inline]
    pub fn colors(&self) -> [Option<Color>; 3] {
        self.colors
    }

    /// The sticker facing along `axis`.
    #[inline]
    pub fn color(&self, axis: Axis) -> Option<Color> {
        self.colors[axis.index()]
    }

    /// The sticker colors this piece carries, in slot order.
    pub fn stickers(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().flatten().copied()
    }

    pub fn kind(&self) -> PieceKind {
        match self.sticker_count() {
            1 => PieceKind::Face,
            2 => PieceKind::Edge,
            _ => PieceKind::Corner,
        }
    }

    /// Returns `true` if this piece carries exactly the given colors, in any order.
    pub fn has_colors(&self, colors: &[Color]) -> bool {
        self.sticker_count() == colors.len()
            && colors.iter().all(|c| self.colors.contains(&Some(*c)))
    }

    fn sticker_count(&self) -> usize {
        self.colors.iter().filter(|c| c.is_some()).count()
    }

    /// Rotates the piece in place.
    ///
    /// The position is multiplied by `matrix`; the two color slots whose axes
    /// trade places are swapped so every sticker keeps facing the same side
    /// of the piece.
    pub fn rotate(&mut self, matrix: Matrix3i) {
        let before = self.position;
        self.position = matrix * before;

        let mut delta = self.position - before;
        if delta == Vector3i::ZERO {
            return;
        }
        // two zero components: the move alone doesn't tell which axes trade
        // places (whole-cube rotations of axis-aligned pieces)
        if delta.count(0) == 2 {
            delta += matrix * delta;
        }

        assert!(
            delta.count(0) == 1,
            "bug in Piece::rotate: before {before}, after {}, changes {delta}",
            self.position
        );

        let mut swapped = Axis::ALL.into_iter().filter(|&axis| delta[axis] != 0);
        if let (Some(a), Some(b)) = (swapped.next(), swapped.next()) {
            self.colors.swap(a.index(), b.index());
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let colors: String = self.stickers().collect();
        write!(f, "({}, {}, {})", self.kind(), colors, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ROT_XY_CW, ROT_XZ_CW, ROT_YZ_CC, ROT_YZ_CW};

    fn piece(position: (i32, i32, i32), colors: [Option<Color>; 3]) -> Piece {
        Piece::new(position.into(), colors).unwrap()
    }

    #[test]
    fn test_kind_follows_sticker_count() {
        assert_eq!(piece((1, 0, 0), [Some('R'), None, None]).kind(), PieceKind::Face);
        assert_eq!(piece((1, 1, 0), [Some('R'), Some('U'), None]).kind(), PieceKind::Edge);
        assert_eq!(
            piece((1, 1, 1), [Some('R'), Some('U'), Some('F')]).kind(),
            PieceKind::Corner
        );
    }

    #[test]
    fn test_piece_without_colors_is_rejected() {
        assert_eq!(
            Piece::new(Vector3i::new(0, 0, 1), [None, None, None]),
            Err(ValidationError::PieceColors(0))
        );
    }

    #[test]
    fn test_piece_off_the_cube_is_rejected() {
        assert_eq!(
            Piece::new(Vector3i::new(2, 0, 0), [Some('R'), None, None]),
            Err(ValidationError::PiecePosition(Vector3i::new(2, 0, 0)))
        );
    }

    #[test]
    fn test_display() {
        let p = piece((1, 0, 0), [Some('R'), None, None]);
        assert_eq!(p.to_string(), "(face, R, (1, 0, 0))");
    }

    #[test]
    fn test_has_colors_ignores_order() {
        let p = piece((1, 1, 1), [Some('R'), Some('U'), Some('F')]);
        assert!(p.has_colors(&['F', 'R', 'U']));
        assert!(!p.has_colors(&['F', 'R']));
        assert!(!p.has_colors(&['F', 'R', 'D']));
    }

    #[test]
    fn test_rotate_leaves_fixed_piece_alone() {
        let mut p = piece((0, 0, 1), [None, None, Some('F')]);
        p.rotate(ROT_XY_CW);
        assert_eq!(p, piece((0, 0, 1), [None, None, Some('F')]));
    }

    #[test]
    fn test_rotate_face_turn_swaps_colors() {
        // F turn: the up-front edge moves to right-front
        let mut p = piece((0, 1, 1), [None, Some('U'), Some('F')]);
        p.rotate(ROT_XY_CW);
        assert_eq!(p, piece((1, 0, 1), [Some('U'), None, Some('F')]));

        // R turn: the right-up-front corner moves to right-up-back
        let mut p = piece((1, 1, 1), [Some('R'), Some('U'), Some('F')]);
        p.rotate(ROT_YZ_CW);
        assert_eq!(p, piece((1, 1, -1), [Some('R'), Some('F'), Some('U')]));
    }

    #[test]
    fn test_rotate_whole_cube_moves_centers() {
        // X rotation: the front center goes up
        let mut p = piece((0, 0, 1), [None, None, Some('F')]);
        p.rotate(ROT_YZ_CW);
        assert_eq!(p, piece((0, 1, 0), [None, Some('F'), None]));

        // Y rotation: the front center goes left
        let mut p = piece((0, 0, 1), [None, None, Some('F')]);
        p.rotate(ROT_XZ_CW);
        assert_eq!(p, piece((-1, 0, 0), [Some('F'), None, None]));
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        let start = piece((1, -1, 1), [Some('R'), Some('D'), Some('F')]);
        let mut p = start;
        for _ in 0..4 {
            p.rotate(ROT_YZ_CC);
        }
        assert_eq!(p, start);
    }
}
