//! Capabilities of the scalar element types.
//!
//! The lifted functions in [`crate::functions`] are available for a container whenever its element
//! type implements the trait the scalar operation lives in.

use std::ops;

/// Types that support the circular trigonometric functions and their reciprocals.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    /// Computes the secant, `1 / cos(self)`.
    fn sec(self) -> Self;
    /// Computes the cosecant, `1 / sin(self)`.
    fn csc(self) -> Self;
    /// Computes the cotangent, `cos(self) / sin(self)`.
    fn cot(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    /// Computes `acos(1 / self)`.
    fn asec(self) -> Self;
    /// Computes `asin(1 / self)`.
    fn acsc(self) -> Self;
    /// Computes `atan(1 / self)`.
    fn acot(self) -> Self;
    /// Four quadrant arctangent of `self` (y) and `other` (x).
    fn atan2(self, other: Self) -> Self;
}

/// Types that support the hyperbolic functions and their reciprocals.
pub trait Hyperbolic: Sized {
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn sech(self) -> Self;
    fn csch(self) -> Self;
    fn coth(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
    fn asech(self) -> Self;
    fn acsch(self) -> Self;
    fn acoth(self) -> Self;
}

/// Types that support computing their square and cube roots.
pub trait Sqrt {
    fn sqrt(self) -> Self;
    fn cbrt(self) -> Self;
}

/// Types that support exponentials, logarithms and powers.
pub trait Exp: Sized {
    /// Computes `e^self`.
    fn exp(self) -> Self;
    /// Computes `2^self`.
    fn exp2(self) -> Self;
    /// Computes `e^self - 1`, accurate even if `self` is close to zero.
    fn exp_m1(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;
    /// Computes `ln(1 + self)`, accurate even if `self` is close to zero.
    fn ln_1p(self) -> Self;
    /// Raises `self` to the power `exponent`.
    fn powf(self, exponent: Self) -> Self;
}

/// Operations on real numbers that are not closed over the integers.
pub trait Real: Sized {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Returns `self - floor(self)`.
    ///
    /// Unlike [`f32::fract`], the result is not negative for negative inputs. Negative values very
    /// close to an integer round up to exactly `1`.
    fn fract(self) -> Self;
    /// Returns `self - m * floor(self / m)`.
    ///
    /// The result takes the sign of `m`.
    fn modulo(self, m: Self) -> Self;
    /// Converts `self` from degrees to radians.
    fn radians(self) -> Self;
    /// Converts `self` from radians to degrees.
    fn degrees(self) -> Self;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
}

/// Types with an absolute value and a sign.
pub trait Signed {
    fn abs(self) -> Self;
    /// Returns `-1`, `0` or `1` depending on the sign of `self`.
    ///
    /// Zero (and, for floating-point types, `NaN`) maps to `0`.
    fn sign(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    /// Computes `min(max(self, min), max)`.
    ///
    /// Unlike [`f32::clamp`], this never panics, even if `min > max`.
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! signed_int_impls {
    ($($types:ty),+) => {
        $(
            impl Signed for $types {
                fn abs(self) -> Self {
                    self.abs()
                }

                fn sign(self) -> Self {
                    self.signum()
                }
            }
        )+
    };
}
signed_int_impls!(i8, i16, i32, i64, i128, isize);

macro_rules! unsigned_int_impls {
    ($($types:ty),+) => {
        $(
            impl Signed for $types {
                fn abs(self) -> Self {
                    self
                }

                fn sign(self) -> Self {
                    (self != 0) as $types
                }
            }
        )+
    };
}
unsigned_int_impls!(u8, u16, u32, u64, u128, usize);

macro_rules! float_impls {
    ($($types:ident),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn sec(self) -> Self {
                    self.cos().recip()
                }

                fn csc(self) -> Self {
                    self.sin().recip()
                }

                fn cot(self) -> Self {
                    self.cos() / self.sin()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn asec(self) -> Self {
                    self.recip().acos()
                }

                fn acsc(self) -> Self {
                    self.recip().asin()
                }

                fn acot(self) -> Self {
                    self.recip().atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }

            impl Hyperbolic for $types {
                fn sinh(self) -> Self {
                    self.sinh()
                }

                fn cosh(self) -> Self {
                    self.cosh()
                }

                fn tanh(self) -> Self {
                    self.tanh()
                }

                fn sech(self) -> Self {
                    self.cosh().recip()
                }

                fn csch(self) -> Self {
                    self.sinh().recip()
                }

                fn coth(self) -> Self {
                    self.cosh() / self.sinh()
                }

                fn asinh(self) -> Self {
                    self.asinh()
                }

                fn acosh(self) -> Self {
                    self.acosh()
                }

                fn atanh(self) -> Self {
                    self.atanh()
                }

                fn asech(self) -> Self {
                    self.recip().acosh()
                }

                fn acsch(self) -> Self {
                    self.recip().asinh()
                }

                fn acoth(self) -> Self {
                    self.recip().atanh()
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }

                fn cbrt(self) -> Self {
                    self.cbrt()
                }
            }

            impl Exp for $types {
                fn exp(self) -> Self {
                    self.exp()
                }

                fn exp2(self) -> Self {
                    self.exp2()
                }

                fn exp_m1(self) -> Self {
                    self.exp_m1()
                }

                fn ln(self) -> Self {
                    self.ln()
                }

                fn log2(self) -> Self {
                    self.log2()
                }

                fn log10(self) -> Self {
                    self.log10()
                }

                fn ln_1p(self) -> Self {
                    self.ln_1p()
                }

                fn powf(self, exponent: Self) -> Self {
                    self.powf(exponent)
                }
            }

            impl Real for $types {
                fn floor(self) -> Self {
                    self.floor()
                }

                fn ceil(self) -> Self {
                    self.ceil()
                }

                fn fract(self) -> Self {
                    self - self.floor()
                }

                fn modulo(self, m: Self) -> Self {
                    self - m * (self / m).floor()
                }

                fn radians(self) -> Self {
                    self.to_radians()
                }

                fn degrees(self) -> Self {
                    self.to_degrees()
                }

                fn is_nan(self) -> bool {
                    self.is_nan()
                }

                fn is_infinite(self) -> bool {
                    self.is_infinite()
                }
            }

            impl Signed for $types {
                fn abs(self) -> Self {
                    self.abs()
                }

                fn sign(self) -> Self {
                    if self > 0.0 {
                        1.0
                    } else if self < 0.0 {
                        -1.0
                    } else {
                        0.0
                    }
                }
            }
        )+
    };
}
float_impls!(f32, f64);
