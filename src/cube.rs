//! The cube aggregate: 26 pieces addressed by x-y-z coordinates.
//!
//! - -x is the LEFT direction, +x is the RIGHT direction
//! - -y is the DOWN direction, +y is the UP direction
//! - -z is the BACK direction, +z is the FRONT direction
//!
//! A cube is read from (and flattened to) 54 single-character stickers laid
//! out as an unfolded net:
//!
//! ```text
//!           0  1  2
//!           3  4  5
//!           6  7  8
//!  9 10 11 12 13 14 15 16 17 18 19 20
//! 21 22 23 24 25 26 27 28 29 30 31 32
//! 33 34 35 36 37 38 39 40 41 42 43 44
//!          45 46 47
//!          48 49 50
//!          51 52 53
//! ```
//!
//! Rows are UP, then LEFT FRONT RIGHT BACK side by side, then DOWN. The back
//! face is mirrored horizontally by the unfolding.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use rustc_hash::FxHashSet;

use crate::errors::{LookupError, ValidationError};
use crate::geometry::{Axis, Vector3i, BACK, DOWN, FRONT, LEFT, RIGHT, UP};
use crate::moves::Move;
use crate::pieces::{Color, Piece};

/// Number of pieces in a cube.
pub const NUM_PIECES: usize = 26;

/// Number of stickers in the flat representation.
pub const NUM_STICKERS: usize = 54;

/// One of the six outer faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Right,
    Left,
    Up,
    Down,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
    ];

    /// Outward unit vector of this face.
    pub const fn normal(self) -> Vector3i {
        match self {
            Face::Right => RIGHT,
            Face::Left => LEFT,
            Face::Up => UP,
            Face::Down => DOWN,
            Face::Front => FRONT,
            Face::Back => BACK,
        }
    }

    pub const fn axis(self) -> Axis {
        match self {
            Face::Right | Face::Left => Axis::X,
            Face::Up | Face::Down => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// The face whose normal is `normal`, if it is a unit axis vector.
    pub fn from_normal(normal: Vector3i) -> Option<Self> {
        Self::ALL.into_iter().find(|face| face.normal() == normal)
    }
}

/// A set of pieces turned together by one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// The 9 pieces on one face.
    Face(Face),
    /// The 8 pieces of the middle ring perpendicular to an axis.
    Slice(Axis),
    /// All 26 pieces.
    Whole,
}

impl Layer {
    /// Returns `true` if a piece at `position` belongs to this layer.
    #[inline]
    pub fn contains(self, position: Vector3i) -> bool {
        match self {
            Layer::Face(face) => position.dot(face.normal()) > 0,
            Layer::Slice(axis) => position[axis] == 0,
            Layer::Whole => true,
        }
    }
}

/// Stable handle to a piece. It follows the physical piece through moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(usize);

/// Where each sticker of the flat string lives: a solved-position piece and
/// the offsets of its x, y and z stickers.
///
/// Piece order is also the arena order: faces, then edges, then corners.
const STICKER_LAYOUT: [((i32, i32, i32), [Option<usize>; 3]); NUM_PIECES] = [
    // faces: R L U D F B
    ((1, 0, 0), [Some(28), None, None]),
    ((-1, 0, 0), [Some(22), None, None]),
    ((0, 1, 0), [None, Some(4), None]),
    ((0, -1, 0), [None, Some(49), None]),
    ((0, 0, 1), [None, None, Some(25)]),
    ((0, 0, -1), [None, None, Some(31)]),
    // edges: RU RD RF RB LU LD LF LB UF UB DF DB
    ((1, 1, 0), [Some(16), Some(5), None]),
    ((1, -1, 0), [Some(40), Some(50), None]),
    ((1, 0, 1), [Some(27), None, Some(26)]),
    ((1, 0, -1), [Some(29), None, Some(30)]),
    ((-1, 1, 0), [Some(10), Some(3), None]),
    ((-1, -1, 0), [Some(34), Some(48), None]),
    ((-1, 0, 1), [Some(23), None, Some(24)]),
    ((-1, 0, -1), [Some(21), None, Some(32)]),
    ((0, 1, 1), [None, Some(7), Some(13)]),
    ((0, 1, -1), [None, Some(1), Some(19)]),
    ((0, -1, 1), [None, Some(46), Some(37)]),
    ((0, -1, -1), [None, Some(52), Some(43)]),
    // corners: RUF RUB RDF RDB LUF LUB LDF LDB
    ((1, 1, 1), [Some(15), Some(8), Some(14)]),
    ((1, 1, -1), [Some(17), Some(2), Some(18)]),
    ((1, -1, 1), [Some(39), Some(47), Some(38)]),
    ((1, -1, -1), [Some(41), Some(53), Some(42)]),
    ((-1, 1, 1), [Some(11), Some(6), Some(12)]),
    ((-1, 1, -1), [Some(9), Some(0), Some(20)]),
    ((-1, -1, 1), [Some(35), Some(45), Some(36)]),
    ((-1, -1, -1), [Some(33), Some(51), Some(44)]),
];

const FACES: std::ops::Range<usize> = 0..6;
const EDGES: std::ops::Range<usize> = 6..18;
const CORNERS: std::ops::Range<usize> = 18..26;

/// Flat-string offset of the sticker facing along `axis` at `position`.
fn sticker_offset(position: Vector3i, axis: Axis) -> Option<usize> {
    STICKER_LAYOUT
        .iter()
        .find(|(p, _)| Vector3i::from(*p) == position)
        .and_then(|(_, offsets)| offsets[axis.index()])
}

/// A 3x3x3 cube.
///
/// Two cubes are equal when their flattened stickers are equal, regardless
/// of which physical piece sits where.
#[derive(Debug, Clone)]
pub struct Cube {
    pieces: [Piece; NUM_PIECES],
}

impl Cube {
    /// Reads a cube from its 54 stickers. Whitespace is ignored.
    pub fn new(stickers: &str) -> Result<Self, ValidationError> {
        let stickers: Vec<Color> = stickers.chars().filter(|c| !c.is_whitespace()).collect();
        if stickers.len() != NUM_STICKERS {
            return Err(ValidationError::StickerCount(stickers.len()));
        }

        let mut pieces = Vec::with_capacity(NUM_PIECES);
        for &(position, offsets) in &STICKER_LAYOUT {
            let colors = offsets.map(|offset| offset.map(|i| stickers[i]));
            pieces.push(Piece::new(position.into(), colors)?);
        }
        let pieces: [Piece; NUM_PIECES] = pieces
            .try_into()
            .map_err(|v: Vec<Piece>| ValidationError::StickerCount(v.len()))?;

        Ok(Self { pieces })
    }

    /// All pieces: faces, then edges, then corners.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn faces(&self) -> &[Piece] {
        &self.pieces[FACES]
    }

    pub fn edges(&self) -> &[Piece] {
        &self.pieces[EDGES]
    }

    pub fn corners(&self) -> &[Piece] {
        &self.pieces[CORNERS]
    }

    /// The 9 pieces on `face`.
    pub fn face(&self, face: Face) -> Vec<&Piece> {
        self.layer(Layer::Face(face))
    }

    /// The 8 pieces of the middle ring perpendicular to `axis`.
    pub fn slice(&self, axis: Axis) -> Vec<&Piece> {
        self.layer(Layer::Slice(axis))
    }

    fn layer(&self, layer: Layer) -> Vec<&Piece> {
        self.pieces
            .iter()
            .filter(|p| layer.contains(p.position()))
            .collect()
    }

    /// Applies one move.
    pub fn apply(&mut self, mv: Move) {
        let (layer, matrix) = mv.action();
        for piece in &mut self.pieces {
            if layer.contains(piece.position()) {
                piece.rotate(matrix);
            }
        }
    }

    /// Applies moves left to right.
    pub fn apply_all(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.apply(mv);
        }
    }

    /// Applies a whitespace-separated sequence such as `"L Ri U M Ui B M"`.
    ///
    /// Stops at the first unknown token; moves before it stay applied.
    pub fn sequence(&mut self, sequence: &str) -> Result<(), LookupError> {
        for token in sequence.split_whitespace() {
            self.apply(Move::parse(token)?);
        }
        Ok(())
    }

    /// Finds the piece carrying exactly `colors`, in any order.
    pub fn find_piece(&self, colors: &[Color]) -> Option<PieceId> {
        self.pieces
            .iter()
            .position(|p| p.has_colors(colors))
            .map(PieceId)
    }

    /// The piece currently at `position`.
    pub fn piece_at(&self, position: Vector3i) -> Option<PieceId> {
        self.pieces
            .iter()
            .position(|p| p.position() == position)
            .map(PieceId)
    }

    pub fn get_piece(&self, position: Vector3i) -> Option<&Piece> {
        self.piece_at(position).map(|id| &self[id])
    }

    pub fn is_solved(&self) -> bool {
        Face::ALL.into_iter().all(|face| {
            let mut colors = self
                .face(face)
                .into_iter()
                .map(|p| p.color(face.axis()));
            let first = colors.next().flatten();
            first.is_some() && colors.all(|c| c == first)
        })
    }

    /// The distinct sticker colors on the cube.
    pub fn colors(&self) -> FxHashSet<Color> {
        self.pieces.iter().flat_map(Piece::stickers).collect()
    }

    /// The color of the center piece on `face`.
    pub fn face_color(&self, face: Face) -> Color {
        self.faces()
            .iter()
            .find(|p| p.position() == face.normal())
            .and_then(|p| p.color(face.axis()))
            .expect("every face has a center piece facing out")
    }

    pub fn left_color(&self) -> Color {
        self.face_color(Face::Left)
    }

    pub fn right_color(&self) -> Color {
        self.face_color(Face::Right)
    }

    pub fn up_color(&self) -> Color {
        self.face_color(Face::Up)
    }

    pub fn down_color(&self) -> Color {
        self.face_color(Face::Down)
    }

    pub fn front_color(&self) -> Color {
        self.face_color(Face::Front)
    }

    pub fn back_color(&self) -> Color {
        self.face_color(Face::Back)
    }

    /// The 54 stickers in flat-string order.
    pub fn stickers(&self) -> [Color; NUM_STICKERS] {
        let mut stickers = [' '; NUM_STICKERS];
        for piece in &self.pieces {
            for axis in Axis::ALL {
                if let (Some(color), Some(offset)) =
                    (piece.color(axis), sticker_offset(piece.position(), axis))
                {
                    stickers[offset] = color;
                }
            }
        }
        stickers
    }

    /// The 54 stickers as a string, the inverse of [`Cube::new`].
    pub fn flat_str(&self) -> String {
        self.stickers().iter().collect()
    }
}

impl FromStr for Cube {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq for Cube {
    fn eq(&self, other: &Self) -> bool {
        self.stickers() == other.stickers()
    }
}

impl Eq for Cube {}

impl Index<PieceId> for Cube {
    type Output = Piece;

    fn index(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }
}

impl Index<Vector3i> for Cube {
    type Output = Piece;

    fn index(&self, position: Vector3i) -> &Piece {
        self.get_piece(position)
            .unwrap_or_else(|| panic!("no piece at {position}"))
    }
}

impl fmt::Display for Cube {
    /// Formats the unfolded net, one face row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stickers = self.stickers();
        let row = |start: usize| -> String { stickers[start..start + 3].iter().collect() };

        for start in [0, 3, 6] {
            writeln!(f, "    {}", row(start))?;
        }
        for line in [9, 21, 33] {
            let sides: Vec<String> = (0..4).map(|side| row(line + 3 * side)).collect();
            writeln!(f, "{}", sides.join(" "))?;
        }
        for start in [45, 48, 51] {
            write!(f, "    {}", row(start))?;
            if start != 51 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
