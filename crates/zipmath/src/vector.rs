use std::{array, fmt};

use crate::{
    traits::{Number, Sqrt},
    One, Shape, ShapeError, Zero,
};

mod ops;
mod view;

macro_rules! aliases {
    ($($n:literal => $alias:ident, $alias_f:ident;)+) => {
        $(
            #[doc = concat!("A ", $n, "-element [`Vector`].")]
            pub type $alias<T> = Vector<T, $n>;
            #[doc = concat!("A ", $n, "-element [`Vector`] of [`f32`]s.")]
            pub type $alias_f = Vector<f32, $n>;
        )+
    };
}

aliases! {
    1 => Vec1, Vec1f;
    2 => Vec2, Vec2f;
    3 => Vec3, Vec3f;
    4 => Vec4, Vec4f;
}

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec1`], [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors
///   from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element. Scalars can
///   also be broadcast with [`broadcast`][crate::broadcast].
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices of the
///   right length using their [`TryFrom`] implementation.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` can
///   be used to obtain unit vectors pointing in the given direction.
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`, `z`, or `w`.
///   Aliases `r`, `g`, `b`, and `a` are also provided.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] give access to the
///   underlying elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// # Operators
///
/// All arithmetic and bitwise operators work element-wise, between two vectors of the same length
/// or between a vector and a scalar (on either side):
///
/// ```
/// # use zipmath::*;
/// let a: Vec3<u32> = vec3(0b0011, 0b0101, 0b1001);
/// assert_eq!(a & 1, vec3(1, 1, 1));
/// assert_eq!(1 << a, vec3(8, 32, 512));
/// assert_eq!(a % vec3(2, 3, 4), vec3(1, 2, 1));
/// assert_eq!(!vec2(true, false), vec2(false, true));
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The vector whose elements are all [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([T::ZERO; N]);
}

/// Defines the unit vector constants `X`, `Y`, `Z` and `W` for the vector lengths they exist in.
macro_rules! unit_vectors {
    ($($n:literal: $($axis:ident = [$($e:ident),+]),+;)+) => {
        $(
            impl<T: Zero + One> Vector<T, $n> {
                $(
                    #[doc = concat!("The unit vector along the ", stringify!($axis), " axis.")]
                    pub const $axis: Self = Self([$(T::$e),+]);
                )+
            }
        )+
    };
}

unit_vectors! {
    1: X = [ONE];
    2: X = [ONE, ZERO], Y = [ZERO, ONE];
    3: X = [ONE, ZERO, ZERO], Y = [ZERO, ONE, ZERO], Z = [ZERO, ZERO, ONE];
    4: X = [ONE, ZERO, ZERO, ZERO],
       Y = [ZERO, ONE, ZERO, ZERO],
       Z = [ZERO, ZERO, ONE, ZERO],
       W = [ZERO, ZERO, ZERO, ONE];
}

impl<T, const N: usize> Vector<T, N> {
    /// Repeats `elem` into all `N` positions.
    ///
    /// ```
    /// # use zipmath::*;
    /// let half: Vec4f = Vector::splat(0.5);
    /// assert_eq!(half, vec4(0.5, 0.5, 0.5, 0.5));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `cb` with every index from `0` to `N - 1`, in order.
    ///
    /// ```
    /// # use zipmath::*;
    /// let squares: Vec4<usize> = Vector::from_fn(|i| i * i);
    /// assert_eq!(squares, vec4(0, 1, 4, 9));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Transforms every element with `f`. The element type may change.
    ///
    /// ```
    /// # use zipmath::*;
    /// assert_eq!(vec3(-1, 0, 2).map(|x| x > 0), vec3(false, false, true));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other` by position.
    ///
    /// ```
    /// # use zipmath::*;
    /// assert_eq!(vec2('a', 'b').zip(vec2(1, 2)), vec2(('a', 1), ('b', 2)));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        // Both sides have exactly `N` elements.
        Vector(self.0.map(|elem| (elem, other.next().unwrap())))
    }

    /// Applies a binary function to the elements at the same position in `self` and `other`.
    ///
    /// The operands may have different element types, but always have the same length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zipmath::*;
    /// let v = vec3(1.5f64, 2.0, 4.0).zip_with(vec3(2, 3, 4), |f, i| f.powi(i));
    /// assert_eq!(v, vec3(2.25, 8.0, 256.0));
    /// ```
    pub fn zip_with<U, V, F>(self, other: Vector<U, N>, mut f: F) -> Vector<V, N>
    where
        F: FnMut(T, U) -> V,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Applies a ternary function to the elements at the same position in `self`, `b` and `c`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zipmath::*;
    /// let v = vec2(1, 2).zip_with3(vec2(10, 20), vec2(true, false), |a, b, pick_a| {
    ///     if pick_a { a } else { b }
    /// });
    /// assert_eq!(v, vec2(1, 20));
    /// ```
    pub fn zip_with3<U, V, W, F>(self, b: Vector<U, N>, c: Vector<V, N>, mut f: F) -> Vector<W, N>
    where
        F: FnMut(T, U, V) -> W,
    {
        self.zip(b).zip(c).map(|((a, b), c)| f(a, b, c))
    }

    /// Combines `other` into `self` in place.
    ///
    /// `f` is invoked with a mutable reference to each element of `self`, and the element of `other`
    /// at the same position. Returns `self`, so that several in-place combinations can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// # use zipmath::*;
    /// let mut a = vec3(1, 2, 3);
    /// a.zip_with_mut(vec3(1, 1, 1), |a, b| *a += b)
    ///     .zip_with_mut(vec3(2, 3, 4), |a, b| *a *= b);
    /// assert_eq!(a, vec3(4, 9, 16));
    /// ```
    pub fn zip_with_mut<U, F>(&mut self, other: Vector<U, N>, mut f: F) -> &mut Self
    where
        F: FnMut(&mut T, U),
    {
        self.0
            .iter_mut()
            .zip(other.0)
            .for_each(|(lhs, rhs)| f(lhs, rhs));
        self
    }

    /// Borrows the elements as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Borrows the elements as a mutable slice.
    ///
    /// ```
    /// # use zipmath::*;
    /// let mut v = vec4(4, 3, 2, 1);
    /// v.as_mut_slice().sort();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Unwraps the vector into its element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Adds up all elements, starting from zero.
    ///
    /// ```
    /// # use zipmath::*;
    /// assert_eq!(vec3(-1, 5, 2).sum(), 6);
    /// ```
    pub fn sum(self) -> T
    where
        T: Zero + std::ops::Add<Output = T>,
    {
        self.0.into_iter().fold(T::ZERO, |acc, elem| acc + elem)
    }

    /// Multiplies all elements, starting from one.
    pub fn product(self) -> T
    where
        T: One + std::ops::Mul<Output = T>,
    {
        self.0.into_iter().fold(T::ONE, |acc, elem| acc * elem)
    }

    /// Sum of the element-wise product of `self` and `other`.
    ///
    /// ```
    /// # use zipmath::*;
    /// assert_eq!(vec2(2, -3).dot(vec2(5, 4)), -2);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.zip_with(other, |a, b| a * b).sum()
    }

    /// Squared Euclidean length. Unlike [`Vector::length`], this works for integer elements.
    pub fn length2(self) -> T
    where
        T: Number,
    {
        self.dot(self)
    }

    /// Euclidean length.
    ///
    /// ```
    /// # use zipmath::*;
    /// assert_eq!(vec3(2.0, 3.0, 6.0).length(), 7.0);
    /// ```
    pub fn length(self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Euclidean distance between the points `self` and `other`.
    pub fn distance(self, other: Self) -> T
    where
        T: Number + Sqrt,
    {
        (self - other).length()
    }

    /// Scales the vector to length 1, keeping its direction.
    ///
    /// The zero vector has no direction; normalizing it yields NaN elements for floats.
    ///
    /// ```
    /// # use zipmath::*;
    /// assert_eq!(vec2(-8.0, 0.0).normalize(), vec2(-1.0, 0.0));
    /// assert!(Vec2f::ZERO.normalize().x.is_nan());
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }
}

impl<T> Vector<T, 3> {
    /// The 3D cross product, perpendicular to both `self` and `other`.
    ///
    /// ```
    /// # use zipmath::*;
    /// assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
    /// assert_eq!(Vec3f::Z.cross(Vec3f::Y), -Vec3f::X);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Builds a vector from a slice with exactly `N` elements.
///
/// # Examples
///
/// ```
/// # use zipmath::*;
/// let data = [1.0, 2.0, 3.0, 4.0];
/// let v = Vec3f::try_from(&data[1..]).unwrap();
/// assert_eq!(v, [2.0, 3.0, 4.0]);
///
/// let err = Vec3f::try_from(&data[..]).unwrap_err();
/// assert_eq!(err.to_string(), "cannot build a vec3 from 4 elements (expected 3)");
/// ```
impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = ShapeError;

    fn try_from(slice: &[T]) -> Result<Self, ShapeError> {
        <[T; N]>::try_from(slice)
            .map(Self)
            .map_err(|_| ShapeError::ElementCount {
                shape: Shape::Vector(N),
                expected: N,
                found: slice.len(),
            })
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .fold(&mut f.debug_tuple(""), |tuple, elem| tuple.field(elem))
            .finish()
    }
}

/// Formats the elements as a parenthesized list, passing formatting options on to each element.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

macro_rules! constructors {
    ($($name:ident -> $alias:ident($($e:ident),+);)+) => {
        $(
            #[doc = concat!("Shorthand for building a [`", stringify!($alias), "`] from its elements.")]
            #[inline]
            pub const fn $name<T>($($e: T),+) -> $alias<T> {
                Vector([$($e),+])
            }
        )+
    };
}

constructors! {
    vec1 -> Vec1(x);
    vec2 -> Vec2(x, y);
    vec3 -> Vec3(x, y, z);
    vec4 -> Vec4(x, y, z, w);
}
