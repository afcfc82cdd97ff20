//! Reductions and geometric functions.

use std::ops::{Add, Mul};

use crate::{Elementwise, Number, One, Sqrt, Vector, Zero};

/// Sums all elements of `x`.
///
/// ```
/// # use zipmath::*;
/// let m: Mat2<i32> = Matrix::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(functions::sum(m), 10);
/// ```
#[inline]
pub fn sum<C>(x: C) -> C::Elem
where
    C: Elementwise,
    C::Elem: Zero + Add<Output = C::Elem>,
{
    x.fold(<C::Elem as Zero>::ZERO, |acc, elem| acc + elem)
}

/// Multiplies all elements of `x`.
#[inline]
pub fn product<C>(x: C) -> C::Elem
where
    C: Elementwise,
    C::Elem: One + Mul<Output = C::Elem>,
{
    x.fold(<C::Elem as One>::ONE, |acc, elem| acc * elem)
}

/// Dot product of two vectors.
#[inline]
pub fn dot<T: Number, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.dot(b)
}

/// Squared length of a vector.
#[inline]
pub fn length2<T: Number, const N: usize>(x: Vector<T, N>) -> T {
    x.length2()
}

/// Length of a vector.
#[inline]
pub fn length<T: Number + Sqrt, const N: usize>(x: Vector<T, N>) -> T {
    x.length()
}

/// Distance between the points `a` and `b`.
#[inline]
pub fn distance<T: Number + Sqrt, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T {
    a.distance(b)
}

/// Scales `x` to unit length.
///
/// The zero vector has no direction; normalizing it results in `NaN`s for floating-point vectors.
#[inline]
pub fn normalize<T: Number + Sqrt, const N: usize>(x: Vector<T, N>) -> Vector<T, N> {
    x.normalize()
}

/// Cross product of two 3-vectors.
#[inline]
pub fn cross<T: Number>(a: Vector<T, 3>, b: Vector<T, 3>) -> Vector<T, 3> {
    a.cross(b)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec2, vec3, Mat2x3, Matrix, Vec3, Vec3f};

    use super::*;

    #[test]
    fn reductions() {
        let m: Mat2x3<i64> = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(sum(m), 21);
        assert_eq!(product(m), 720);
        assert_eq!(sum(vec3(0.5f32, 0.25, 0.25)), 1.0);
        assert_eq!(product(Vec3::<u8>::ZERO), 0);
    }

    #[test]
    fn geometry() {
        let a: Vec3f = vec3(1.0, 2.0, 2.0);
        let b: Vec3f = vec3(4.0, 6.0, 2.0);
        assert_eq!(dot(a, b), 20.0);
        assert_eq!(length2(a), 9.0);
        assert_eq!(length(a), 3.0);
        assert_eq!(distance(a, b), 5.0);
        assert_relative_eq!(normalize(a), vec3(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0));
        assert_relative_eq!(length(normalize(b)), 1.0);
        assert!(normalize(Vec3f::ZERO).x.is_nan());

        assert_eq!(cross(Vec3f::X, Vec3f::Y), Vec3f::Z);
        assert_eq!(dot(cross(a, b), a), 0.0);
        assert_eq!(length(vec2(-3.0, 4.0)), 5.0);
    }
}
