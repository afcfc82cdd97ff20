//! Element-wise comparisons and boolean logic.
//!
//! Comparisons produce containers of `bool`. Rust's `||` and `&&` operators can not be
//! overloaded, so the logical connectives are functions here ([`logical_or`], [`logical_and`]).
//! Logical negation is available both as the `!` operator and as [`not`].

use crate::{combine2, Broadcast, Elementwise};

macro_rules! comparisons {
    ($($(#[$attr:meta])* $name:ident: $bound:ident => $op:tt;)+) => {
        $(
            $(#[$attr])*
            #[inline]
            pub fn $name<C, A, B>(a: A, b: B) -> C::Output<bool>
            where
                C: Elementwise,
                C::Elem: $bound,
                A: Broadcast<C>,
                B: Broadcast<C>,
            {
                combine2::<C, _, _, _, _>(a, b, |a, b| a $op b)
            }
        )+
    };
}

comparisons! {
    /// Returns a container that is `true` wherever `a < b`.
    ///
    /// ```
    /// # use zipmath::*;
    /// use zipmath::functions::*;
    ///
    /// let a: Vec3<i32> = vec3(1, 2, 3);
    /// assert_eq!(less_than(a, 2), [true, false, false]);
    /// assert_eq!(less_than(2, a), [false, false, true]);
    /// ```
    less_than: PartialOrd => <;
    /// Returns a container that is `true` wherever `a <= b`.
    less_than_equal: PartialOrd => <=;
    /// Returns a container that is `true` wherever `a > b`.
    greater_than: PartialOrd => >;
    /// Returns a container that is `true` wherever `a >= b`.
    greater_than_equal: PartialOrd => >=;
    /// Returns a container that is `true` wherever `a == b`.
    ///
    /// Use `==` on the containers themselves to compare them as a whole.
    equal: PartialEq => ==;
    /// Returns a container that is `true` wherever `a != b`.
    not_equal: PartialEq => !=;
}

/// Element-wise logical "or".
#[inline]
pub fn logical_or<C, A, B>(a: A, b: B) -> C::Output<bool>
where
    C: Elementwise<Elem = bool>,
    A: Broadcast<C>,
    B: Broadcast<C>,
{
    combine2::<C, _, _, _, _>(a, b, |a, b| a || b)
}

/// Element-wise logical "and".
///
/// ```
/// # use zipmath::*;
/// use zipmath::functions::*;
///
/// let a: Vec2<bool> = vec2(true, false);
/// assert_eq!(logical_and(a, true), a);
/// assert_eq!(logical_and(false, a), [false, false]);
/// assert_eq!(logical_or(a, vec2(false, true)), [true, true]);
/// ```
#[inline]
pub fn logical_and<C, A, B>(a: A, b: B) -> C::Output<bool>
where
    C: Elementwise<Elem = bool>,
    A: Broadcast<C>,
    B: Broadcast<C>,
{
    combine2::<C, _, _, _, _>(a, b, |a, b| a && b)
}

/// Element-wise logical negation. Equivalent to `!x`.
#[inline]
pub fn not<C>(x: C) -> C::Output<bool>
where
    C: Elementwise<Elem = bool>,
{
    x.map(|b| !b)
}

/// Returns whether any element of `x` is `true`.
#[inline]
pub fn any<C>(x: C) -> bool
where
    C: Elementwise<Elem = bool>,
{
    x.fold(false, |acc, b| acc || b)
}

/// Returns whether all elements of `x` are `true`.
///
/// ```
/// # use zipmath::*;
/// use zipmath::functions::*;
///
/// let v: Vec3f = vec3(0.5, 1.0, 1.5);
/// assert!(all(greater_than(v, 0.0)));
/// assert!(!all(less_than(v, 1.0)));
/// assert!(any(less_than(v, 1.0)));
/// ```
#[inline]
pub fn all<C>(x: C) -> bool
where
    C: Elementwise<Elem = bool>,
{
    x.fold(true, |acc, b| acc && b)
}
