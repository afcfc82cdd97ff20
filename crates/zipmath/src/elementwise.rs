//! The element-wise combinator and scalar broadcasting.
//!
//! Every operator and function in this crate is implemented in terms of [`Elementwise`], which
//! applies a scalar function position-wise across one, two or three containers of identical shape.
//! [`Broadcast`] lets a scalar stand in for a container by repeating it in every position, which is
//! how the mixed scalar/container forms of each operation are resolved.

use crate::{Matrix, Shaped, Vector};

/// A fixed-shape container whose elements can be combined position-wise.
///
/// Implemented by [`Vector`] and [`Matrix`]. Because all operands of a combination are `Self`, two
/// containers of different shape can never be combined.
pub trait Elementwise: Shaped + Sized {
    /// The element type.
    type Elem;

    /// A container of the same shape with element type `U`.
    type Output<U>: Elementwise<Elem = U>;

    /// Applies `f` to every element, returning a container of the results.
    fn map<U, F>(self, f: F) -> Self::Output<U>
    where
        F: FnMut(Self::Elem) -> U;

    /// Applies `f` to every pair of elements at the same position in `self` and `other`.
    fn zip_with<U, F>(self, other: Self, f: F) -> Self::Output<U>
    where
        F: FnMut(Self::Elem, Self::Elem) -> U;

    /// Applies `f` to every triple of elements at the same position in `self`, `b` and `c`.
    fn zip_with3<U, F>(self, b: Self, c: Self, f: F) -> Self::Output<U>
    where
        F: FnMut(Self::Elem, Self::Elem, Self::Elem) -> U;

    /// Combines `other` into `self` in place, by invoking `f` with a mutable reference to every
    /// element of `self` and the element of `other` at the same position.
    ///
    /// Returns `self` to allow chaining.
    fn zip_with_mut<F>(&mut self, other: Self, f: F) -> &mut Self
    where
        F: FnMut(&mut Self::Elem, Self::Elem);

    /// Folds every element into an accumulator, in storage order.
    fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, Self::Elem) -> A;
}

impl<T, const N: usize> Elementwise for Vector<T, N> {
    type Elem = T;
    type Output<U> = Vector<U, N>;

    #[inline]
    fn map<U, F>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector::map(self, f)
    }

    #[inline]
    fn zip_with<U, F>(self, other: Self, f: F) -> Vector<U, N>
    where
        F: FnMut(T, T) -> U,
    {
        Vector::zip_with(self, other, f)
    }

    #[inline]
    fn zip_with3<U, F>(self, b: Self, c: Self, f: F) -> Vector<U, N>
    where
        F: FnMut(T, T, T) -> U,
    {
        Vector::zip_with3(self, b, c, f)
    }

    #[inline]
    fn zip_with_mut<F>(&mut self, other: Self, f: F) -> &mut Self
    where
        F: FnMut(&mut T, T),
    {
        Vector::zip_with_mut(self, other, f)
    }

    #[inline]
    fn fold<A, F>(self, init: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.into_array().into_iter().fold(init, f)
    }
}

impl<T, const R: usize, const C: usize> Elementwise for Matrix<T, R, C> {
    type Elem = T;
    type Output<U> = Matrix<U, R, C>;

    #[inline]
    fn map<U, F>(self, f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix::map(self, f)
    }

    #[inline]
    fn zip_with<U, F>(self, other: Self, f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T, T) -> U,
    {
        Matrix::zip_with(self, other, f)
    }

    #[inline]
    fn zip_with3<U, F>(self, b: Self, c: Self, f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T, T, T) -> U,
    {
        Matrix::zip_with3(self, b, c, f)
    }

    #[inline]
    fn zip_with_mut<F>(&mut self, other: Self, f: F) -> &mut Self
    where
        F: FnMut(&mut T, T),
    {
        Matrix::zip_with_mut(self, other, f)
    }

    fn fold<A, F>(self, init: A, mut f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.into_columns()
            .into_iter()
            .fold(init, |acc, column| Elementwise::fold(column, acc, &mut f))
    }
}

/// Values that can take the place of a container of type `C`.
///
/// Every container broadcasts to itself, and every primitive scalar broadcasts to every [`Vector`]
/// and [`Matrix`] with that element type by repeating the scalar in each position.
///
/// Functions that accept `impl Broadcast<C>` in several argument positions can therefore be called
/// with any mix of containers and scalars, as long as at least one argument is a container that
/// determines `C`. Calls with only scalar arguments don't resolve:
///
/// ```compile_fail
/// # use zipmath::*;
/// let _ = functions::clamp(0.5f32, 0.0f32, 1.0f32);
/// ```
pub trait Broadcast<C: Elementwise> {
    /// Converts `self` into a container of type `C`.
    fn broadcast(self) -> C;
}

impl<C: Elementwise> Broadcast<C> for C {
    #[inline]
    fn broadcast(self) -> C {
        self
    }
}

macro_rules! scalar_broadcast {
    ($($types:ty),+) => {
        $(
            impl<const N: usize> Broadcast<Vector<$types, N>> for $types {
                #[inline]
                fn broadcast(self) -> Vector<$types, N> {
                    Vector::splat(self)
                }
            }

            impl<const R: usize, const C: usize> Broadcast<Matrix<$types, R, C>> for $types {
                #[inline]
                fn broadcast(self) -> Matrix<$types, R, C> {
                    Matrix::splat(self)
                }
            }
        )+
    };
}
scalar_broadcast!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool);

/// Broadcasts `value` to a container of type `C`.
///
/// # Examples
///
/// ```
/// # use zipmath::*;
/// let v: Vec3<i32> = broadcast(7);
/// assert_eq!(v, [7, 7, 7]);
///
/// let m: Mat2<bool> = broadcast(true);
/// assert_eq!(m, Matrix::from_rows([[true, true], [true, true]]));
/// ```
#[inline]
pub fn broadcast<C, S>(value: S) -> C
where
    C: Elementwise,
    S: Broadcast<C>,
{
    <S as Broadcast<C>>::broadcast(value)
}

/// Applies the unary function `f` to every element of `a`.
#[inline]
pub fn combine1<C, U, F>(a: C, f: F) -> C::Output<U>
where
    C: Elementwise,
    F: FnMut(C::Elem) -> U,
{
    a.map(f)
}

/// Applies the binary function `f` position-wise across `a` and `b`, broadcasting scalars first.
///
/// # Examples
///
/// ```
/// # use zipmath::*;
/// let a: Vec3<i32> = vec3(1, 2, 3);
/// assert_eq!(combine2(a, 10, |a, b| a * b + 1), vec3(11, 21, 31));
/// assert_eq!(combine2(10, a, |a, b| a - b), vec3(9, 8, 7));
/// ```
#[inline]
pub fn combine2<C, A, B, U, F>(a: A, b: B, f: F) -> C::Output<U>
where
    C: Elementwise,
    A: Broadcast<C>,
    B: Broadcast<C>,
    F: FnMut(C::Elem, C::Elem) -> U,
{
    broadcast::<C, A>(a).zip_with(broadcast::<C, B>(b), f)
}

/// Applies the ternary function `f` position-wise across `a`, `b` and `c`, broadcasting scalars
/// first.
#[inline]
pub fn combine3<C, A, B, D, U, F>(a: A, b: B, c: D, f: F) -> C::Output<U>
where
    C: Elementwise,
    A: Broadcast<C>,
    B: Broadcast<C>,
    D: Broadcast<C>,
    F: FnMut(C::Elem, C::Elem, C::Elem) -> U,
{
    broadcast::<C, A>(a).zip_with3(broadcast::<C, B>(b), broadcast::<C, D>(c), f)
}
