//! Integer 3D vectors, 3x3 matrices, and the cube's rotation generators.
//!
//! A cube piece sits at a position where every component is -1, 0 or 1.
//! Every quarter turn of the puzzle is one of six 90 degree rotations: a
//! clockwise and a counter-clockwise generator for each coordinate plane.

use std::fmt;
use std::ops::{Add, AddAssign, Index, Mul, Sub, SubAssign};

use crate::errors::ValidationError;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes, in component order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of this axis inside a vector or a piece's color slots.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// A 3D integer vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vector3i {
    pub const ZERO: Self = Self::new(0, 0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn dot(self, other: Self) -> i32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub const fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Number of components equal to `value`.
    pub fn count(self, value: i32) -> usize {
        self.components().iter().filter(|&&c| c == value).count()
    }

    /// Returns the vector with the component along `axis` replaced.
    pub fn with(self, axis: Axis, value: i32) -> Self {
        let mut components = self.components();
        components[axis.index()] = value;
        components.into()
    }

    #[inline]
    pub const fn components(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[i32; 3]> for Vector3i {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(i32, i32, i32)> for Vector3i {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Builds a vector from loosely typed components, rejecting gaps.
impl TryFrom<&[Option<i32>]> for Vector3i {
    type Error = ValidationError;

    fn try_from(components: &[Option<i32>]) -> Result<Self, Self::Error> {
        let &[x, y, z] = components else {
            return Err(ValidationError::VectorComponents(components.len()));
        };
        Ok(Self::new(
            x.ok_or(ValidationError::MissingComponent(0))?,
            y.ok_or(ValidationError::MissingComponent(1))?,
            z.ok_or(ValidationError::MissingComponent(2))?,
        ))
    }
}

impl Index<usize> for Vector3i {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("vector index out of range: {index}"),
        }
    }
}

impl Index<Axis> for Vector3i {
    type Output = i32;

    fn index(&self, axis: Axis) -> &i32 {
        &self[axis.index()]
    }
}

impl Add for Vector3i {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3i {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3i {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3i {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<i32> for Vector3i {
    type Output = Self;

    fn mul(self, value: i32) -> Self {
        Self::new(self.x * value, self.y * value, self.z * value)
    }
}

impl fmt::Display for Vector3i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

pub const RIGHT: Vector3i = Vector3i::new(1, 0, 0);
pub const LEFT: Vector3i = Vector3i::new(-1, 0, 0);
pub const UP: Vector3i = Vector3i::new(0, 1, 0);
pub const DOWN: Vector3i = Vector3i::new(0, -1, 0);
pub const FRONT: Vector3i = Vector3i::new(0, 0, 1);
pub const BACK: Vector3i = Vector3i::new(0, 0, -1);

pub const X_AXIS: Vector3i = RIGHT;
pub const Y_AXIS: Vector3i = UP;
pub const Z_AXIS: Vector3i = FRONT;

/// A 3x3 integer matrix stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix3i {
    vals: [i32; 9],
}

impl Matrix3i {
    pub const IDENTITY: Self = Self::new([1, 0, 0, 0, 1, 0, 0, 0, 1]);

    #[inline]
    pub const fn new(vals: [i32; 9]) -> Self {
        Self { vals }
    }

    pub fn rows(&self) -> [Vector3i; 3] {
        let v = &self.vals;
        [0, 3, 6].map(|i| Vector3i::new(v[i], v[i + 1], v[i + 2]))
    }

    pub fn cols(&self) -> [Vector3i; 3] {
        let v = &self.vals;
        [0, 1, 2].map(|i| Vector3i::new(v[i], v[i + 3], v[i + 6]))
    }

    pub fn entries(&self) -> &[i32; 9] {
        &self.vals
    }
}

impl From<[[i32; 3]; 3]> for Matrix3i {
    fn from([[a, b, c], [d, e, f], [g, h, i]]: [[i32; 3]; 3]) -> Self {
        Self::new([a, b, c, d, e, f, g, h, i])
    }
}

impl TryFrom<&[i32]> for Matrix3i {
    type Error = ValidationError;

    fn try_from(vals: &[i32]) -> Result<Self, Self::Error> {
        vals.try_into()
            .map(Self::new)
            .map_err(|_| ValidationError::MatrixEntries(vals.len()))
    }
}

impl TryFrom<&[[i32; 3]]> for Matrix3i {
    type Error = ValidationError;

    fn try_from(rows: &[[i32; 3]]) -> Result<Self, Self::Error> {
        let &[a, b, c] = rows else {
            return Err(ValidationError::MatrixRows(rows.len()));
        };
        Ok([a, b, c].into())
    }
}

impl Add for Matrix3i {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(std::array::from_fn(|i| self.vals[i] + rhs.vals[i]))
    }
}

impl AddAssign for Matrix3i {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Matrix3i {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(std::array::from_fn(|i| self.vals[i] - rhs.vals[i]))
    }
}

impl SubAssign for Matrix3i {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<Vector3i> for Matrix3i {
    type Output = Vector3i;

    fn mul(self, v: Vector3i) -> Vector3i {
        let [a, b, c] = self.rows();
        Vector3i::new(a.dot(v), b.dot(v), c.dot(v))
    }
}

impl Mul for Matrix3i {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let rows = self.rows();
        let cols = rhs.cols();
        Self::new(std::array::from_fn(|i| rows[i / 3].dot(cols[i % 3])))
    }
}

impl fmt::Display for Matrix3i {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.rows().map(Vector3i::components);
        write!(f, "[{a:?},\n {b:?},\n {c:?}]")
    }
}

// 90 degree rotations in the XY plane (around the z axis).
pub const ROT_XY_CW: Matrix3i = Matrix3i::new([0, 1, 0, -1, 0, 0, 0, 0, 1]);
pub const ROT_XY_CC: Matrix3i = Matrix3i::new([0, -1, 0, 1, 0, 0, 0, 0, 1]);

// 90 degree rotations in the XZ plane (around the y axis).
pub const ROT_XZ_CW: Matrix3i = Matrix3i::new([0, 0, -1, 0, 1, 0, 1, 0, 0]);
pub const ROT_XZ_CC: Matrix3i = Matrix3i::new([0, 0, 1, 0, 1, 0, -1, 0, 0]);

// 90 degree rotations in the YZ plane (around the x axis).
pub const ROT_YZ_CW: Matrix3i = Matrix3i::new([1, 0, 0, 0, 0, 1, 0, -1, 0]);
pub const ROT_YZ_CC: Matrix3i = Matrix3i::new([1, 0, 0, 0, 0, -1, 0, 1, 0]);

/// All six generators, paired clockwise with counter-clockwise.
pub const ROTATIONS: [(Matrix3i, Matrix3i); 3] = [
    (ROT_XY_CW, ROT_XY_CC),
    (ROT_XZ_CW, ROT_XZ_CC),
    (ROT_YZ_CW, ROT_YZ_CC),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_arithmetic() {
        let right = Vector3i::new(1, 0, 0);
        let up = Vector3i::new(0, 1, 0);
        assert_eq!(right + up, Vector3i::new(1, 1, 0));
        assert_eq!(right - up, Vector3i::new(1, -1, 0));
        assert_eq!(right * -1, LEFT);
        assert_eq!(right.dot(up), 0);
        assert_eq!(right.cross(up), FRONT);

        let mut v = right;
        v += up;
        v -= right;
        assert_eq!(v, up);
    }

    #[test]
    fn test_vector_count_and_index() {
        let v = Vector3i::new(1, 0, 0);
        assert_eq!(v.count(-1), 0);
        assert_eq!(v.count(0), 2);
        assert_eq!(v.count(1), 1);
        assert_eq!((v[0], v[1], v[2]), (1, 0, 0));
        assert_eq!(v[Axis::X], 1);
        assert_eq!(v.with(Axis::Z, -1), Vector3i::new(1, 0, -1));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_vector_index_out_of_range() {
        let _ = Vector3i::ZERO[3];
    }

    #[test]
    fn test_vector_display() {
        assert_eq!(Vector3i::new(1, 0, -1).to_string(), "(1, 0, -1)");
    }

    #[test]
    fn test_vector_from_components() {
        let v = Vector3i::try_from(&[Some(0), Some(1), Some(0)][..]).unwrap();
        assert_eq!(v, UP);
        assert_eq!(Vector3i::from((0, 0, 1)), FRONT);
        assert_eq!(Vector3i::from([-1, 0, 0]), LEFT);
    }

    #[test]
    fn test_vector_missing_component_is_rejected() {
        assert_eq!(
            Vector3i::try_from(&[Some(0), Some(1), None][..]),
            Err(ValidationError::MissingComponent(2))
        );
        assert_eq!(
            Vector3i::try_from(&[Some(0), Some(1)][..]),
            Err(ValidationError::VectorComponents(2))
        );
    }

    #[test]
    fn test_matrix_construction() {
        let flat = Matrix3i::try_from(&[1, 2, 3, 4, 5, 6, 7, 8, 1][..]).unwrap();
        let nested = Matrix3i::from([[1, 2, 3], [4, 5, 6], [7, 8, 1]]);
        assert_eq!(flat, nested);
        assert_eq!(
            Matrix3i::try_from(&[[11, 12, 13], [14, 15, 16], [17, 18, 19]][..])
                .unwrap()
                .entries()[8],
            19
        );
    }

    #[test]
    fn test_matrix_wrong_size_is_rejected() {
        assert_eq!(
            Matrix3i::try_from(&[1, 2, 3, 4][..]),
            Err(ValidationError::MatrixEntries(4))
        );
        assert_eq!(
            Matrix3i::try_from(&[[1, 2, 3]][..]),
            Err(ValidationError::MatrixRows(1))
        );
    }

    #[test]
    fn test_matrix_rows_and_cols() {
        let m = Matrix3i::new([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(m.rows()[1], Vector3i::new(4, 5, 6));
        assert_eq!(m.cols()[2], Vector3i::new(3, 6, 9));
    }

    #[test]
    fn test_matrix_arithmetic() {
        let m = Matrix3i::new([1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(m + Matrix3i::IDENTITY - Matrix3i::IDENTITY, m);
        assert_eq!(m * Matrix3i::IDENTITY, m);
        assert_eq!(Matrix3i::IDENTITY * m, m);
        assert_eq!(m * Vector3i::new(1, 0, 0), Vector3i::new(1, 4, 7));
        assert_eq!(
            m * m,
            Matrix3i::new([30, 36, 42, 66, 81, 96, 102, 126, 150])
        );
    }

    #[test]
    fn test_generators_are_inverse_pairs() {
        for (cw, cc) in ROTATIONS {
            assert_eq!(cw * cc, Matrix3i::IDENTITY, "{cw} should undo {cc}");
            assert_eq!(cw * cw * cw * cw, Matrix3i::IDENTITY);
        }
    }

    #[test]
    fn test_generators_move_axes() {
        assert_eq!(ROT_XY_CW * UP, RIGHT);
        assert_eq!(ROT_XZ_CW * FRONT, LEFT);
        assert_eq!(ROT_YZ_CW * FRONT, UP);
        assert_eq!(ROT_YZ_CC * BACK, UP);
        // each generator fixes its own axis
        assert_eq!(ROT_XY_CW * Z_AXIS, Z_AXIS);
        assert_eq!(ROT_XZ_CW * Y_AXIS, Y_AXIS);
        assert_eq!(ROT_YZ_CW * X_AXIS, X_AXIS);
    }
}
