//! Scalar versions of the non-trivial element-wise functions.
//!
//! The functions in [`crate::functions`] lift these to [`Vector`][crate::Vector] and
//! [`Matrix`][crate::Matrix] arguments.

use crate::{MinMax, Number, One, Zero};

/// Linearly interpolates between `x` and `y` using weight `a`.
///
/// Computes `x * (1 - a) + y * a`. `a` is not clamped, so values outside of `[0, 1]`
/// extrapolate.
#[inline]
pub fn mix<T: Number>(x: T, y: T, a: T) -> T {
    x * (T::ONE - a) + y * a
}

/// Computes `min(max(x, lower), upper)`.
///
/// If `lower > upper`, the result is `upper`.
#[inline]
pub fn clamp<T: MinMax>(x: T, lower: T, upper: T) -> T {
    MinMax::clamp(x, lower, upper)
}

/// Returns `0` if `x < edge`, and `1` otherwise.
#[inline]
pub fn step<T: Zero + One + PartialOrd>(edge: T, x: T) -> T {
    if x < edge {
        T::ZERO
    } else {
        T::ONE
    }
}

/// Hermite interpolation between `0` and `1` as `x` moves from `edge0` to `edge1`.
///
/// ```
/// # use zipmath::scalar::smoothstep;
/// assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
/// assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
/// assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
/// ```
#[inline]
pub fn smoothstep<T: Number + MinMax>(edge0: T, edge1: T, x: T) -> T {
    let two = T::ONE + T::ONE;
    let three = two + T::ONE;
    let t = clamp((x - edge0) / (edge1 - edge0), T::ZERO, T::ONE);
    t * t * (three - two * t)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn mix_endpoints() {
        assert_eq!(mix(2.0, 6.0, 0.0), 2.0);
        assert_eq!(mix(2.0, 6.0, 1.0), 6.0);
        assert_eq!(mix(2.0, 6.0, 0.25), 3.0);
        assert_eq!(mix(2.0, 6.0, 2.0), 10.0);
    }

    #[test]
    fn clamp_and_step() {
        assert_eq!(clamp(-2.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(5, 1, 3), 3);
        assert_eq!(clamp(0, 3, 1), 1);

        assert_eq!(step(1.0, 0.5), 0.0);
        assert_eq!(step(1.0, 1.0), 1.0);
        assert_eq!(step(1u8, 7), 1);
    }

    #[test]
    fn smoothstep_curve() {
        assert_relative_eq!(smoothstep(0.0f32, 1.0, 0.25), 0.15625);
        assert_relative_eq!(smoothstep(10.0f64, 20.0, 17.5), 0.84375);
        assert_eq!(smoothstep(1.0, 0.0, 0.0), 1.0);
    }
}
