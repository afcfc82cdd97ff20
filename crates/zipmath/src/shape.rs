use std::fmt;

use crate::{Matrix, ShapeError, Vector};

/// Structural size descriptor of an operand.
///
/// Shapes of [`Vector`]s and [`Matrix`]s are part of their types, so the compatibility rules here
/// are already enforced by the type system for every operator and function in this crate. [`Shape`]
/// makes the same rules available as values, eg. for validating dynamically sized input.
///
/// # Examples
///
/// ```
/// # use zipmath::*;
/// assert!(Shape::of::<Vec3f>().compatible(Shape::of::<f32>()));
/// assert!(!Shape::of::<Vec3f>().compatible(Shape::of::<Vec4f>()));
/// assert!(!Shape::of::<Vec2f>().compatible(Shape::of::<Mat2f>()));
/// assert_eq!(Shape::of::<Mat2x3<f32>>().to_string(), "mat2x3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A single value. Compatible with every shape.
    Scalar,
    /// A vector with the given number of elements.
    Vector(usize),
    /// A column-major matrix.
    Matrix { rows: usize, cols: usize },
}

impl Shape {
    /// Returns the [`Shape`] of the type `T`.
    pub const fn of<T: Shaped>() -> Self {
        T::SHAPE
    }

    /// Returns the number of elements an operand of this shape holds.
    pub const fn len(self) -> usize {
        match self {
            Shape::Scalar => 1,
            Shape::Vector(n) => n,
            Shape::Matrix { rows, cols } => rows * cols,
        }
    }

    /// Returns whether this is [`Shape::Scalar`], the shape that broadcasts to any other.
    pub const fn is_scalar(self) -> bool {
        matches!(self, Shape::Scalar)
    }

    /// Returns the shape of the result of combining operands of shape `self` and `other`, or
    /// [`None`] if they may not be combined.
    ///
    /// Scalars combine with anything. Vectors combine with vectors of the same length, matrices
    /// with matrices of the same dimensions. Vectors and matrices never combine with each other.
    pub const fn combine(self, other: Shape) -> Option<Shape> {
        match (self, other) {
            (Shape::Scalar, shape) | (shape, Shape::Scalar) => Some(shape),
            (Shape::Vector(a), Shape::Vector(b)) if a == b => Some(self),
            (
                Shape::Matrix { rows: r1, cols: c1 },
                Shape::Matrix { rows: r2, cols: c2 },
            ) if r1 == r2 && c1 == c2 => Some(self),
            _ => None,
        }
    }

    /// Returns whether operands of shape `self` and `other` may be combined.
    pub const fn compatible(self, other: Shape) -> bool {
        self.combine(other).is_some()
    }

    /// Returns whether three operands may be combined by a ternary function.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zipmath::*;
    /// let v3 = Shape::Vector(3);
    /// assert!(Shape::compatible3(v3, Shape::Scalar, v3));
    /// assert!(Shape::compatible3(Shape::Scalar, Shape::Scalar, v3));
    /// assert!(!Shape::compatible3(v3, Shape::Scalar, Shape::Vector(4)));
    /// ```
    pub const fn compatible3(a: Shape, b: Shape, c: Shape) -> bool {
        match a.combine(b) {
            Some(ab) => ab.compatible(c),
            None => false,
        }
    }

    /// Like [`Shape::combine`], but returns a [`ShapeError`] for incompatible shapes.
    pub fn check_compatible(self, other: Shape) -> Result<Shape, ShapeError> {
        self.combine(other)
            .ok_or(ShapeError::Incompatible { lhs: self, rhs: other })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Scalar => f.write_str("scalar"),
            Shape::Vector(n) => write!(f, "vec{n}"),
            Shape::Matrix { rows, cols } if rows == cols => write!(f, "mat{rows}"),
            Shape::Matrix { rows, cols } => write!(f, "mat{rows}x{cols}"),
        }
    }
}

/// Types with a statically known [`Shape`].
pub trait Shaped {
    const SHAPE: Shape;
}

impl<T, const N: usize> Shaped for Vector<T, N> {
    const SHAPE: Shape = Shape::Vector(N);
}

impl<T, const R: usize, const C: usize> Shaped for Matrix<T, R, C> {
    const SHAPE: Shape = Shape::Matrix { rows: R, cols: C };
}

macro_rules! scalar_shapes {
    ($($types:ty),+) => {
        $(
            impl Shaped for $types {
                const SHAPE: Shape = Shape::Scalar;
            }
        )+
    };
}
scalar_shapes!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool);
