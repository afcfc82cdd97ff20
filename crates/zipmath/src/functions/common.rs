//! Common numeric functions.

use std::ops::{Div, Mul};

use crate::{
    combine2, combine3, scalar, Broadcast, Elementwise, MinMax, Number, One, Real, Signed, Zero,
};

unary! {
    /// Element-wise absolute value.
    ///
    /// # Panics
    ///
    /// Like [`i32::abs`], this overflows for the minimum value of a signed integer type, which
    /// panics when overflow checks are enabled.
    abs => Signed::abs;
    /// Element-wise sign: `-1` for negative elements, `1` for positive ones and `0` for zero (and
    /// `NaN`).
    sign => Signed::sign;
    /// Rounds every element towards negative infinity.
    floor => Real::floor;
    /// Rounds every element towards positive infinity.
    ceil => Real::ceil;
    /// Element-wise fractional part, `x - floor(x)`.
    ///
    /// The result lies in `[0, 1]`, also for negative elements. It is `1` when `x` is negative and
    /// so close to an integer that the subtraction rounds.
    fract => Real::fract;
}

binary! {
    /// Element-wise floored modulo, `x - m * floor(x / m)`.
    ///
    /// The result has the sign of `m`, unlike the `%` operator whose result has the sign of `x`.
    ///
    /// ```
    /// # use zipmath::*;
    /// let x: Vec2f = vec2(-1.0, 5.5);
    /// assert_eq!(functions::modulo(x, 4.0), vec2(3.0, 1.5));
    /// assert_eq!(x % 4.0, vec2(-1.0, 1.5));
    /// ```
    modulo(x, m) => Real::modulo;
    /// Element-wise minimum.
    min(a, b) => MinMax::min;
    /// Element-wise maximum.
    max(a, b) => MinMax::max;
}

/// Returns a container that is `true` wherever the element of `x` is `NaN`.
#[inline]
pub fn isnan<C>(x: C) -> C::Output<bool>
where
    C: Elementwise,
    C::Elem: Real,
{
    x.map(Real::is_nan)
}

/// Returns a container that is `true` wherever the element of `x` is positive or negative infinity.
#[inline]
pub fn isinf<C>(x: C) -> C::Output<bool>
where
    C: Elementwise,
    C::Elem: Real,
{
    x.map(Real::is_infinite)
}

/// Element-wise step function: `0` where `x < edge` and `1` elsewhere.
#[inline]
pub fn step<C, E, X>(edge: E, x: X) -> C::Output<C::Elem>
where
    C: Elementwise,
    C::Elem: Zero + One + PartialOrd,
    E: Broadcast<C>,
    X: Broadcast<C>,
{
    combine2::<C, _, _, _, _>(edge, x, scalar::step)
}

/// Element-wise product.
///
/// This is the same as the `*` operator for [`Vector`][crate::Vector]s. For
/// [`Matrix`][crate::Matrix] arguments, this is the only way to multiply element by element.
///
/// ```
/// # use zipmath::*;
/// let a: Mat2<i32> = Matrix::from_rows([[1, 2], [3, 4]]);
/// let b: Mat2<i32> = Matrix::from_rows([[5, 6], [7, 8]]);
/// assert_eq!(functions::comp_mul(a, b), Matrix::from_rows([[5, 12], [21, 32]]));
/// ```
#[inline]
pub fn comp_mul<C, A, B>(a: A, b: B) -> C::Output<C::Elem>
where
    C: Elementwise,
    C::Elem: Mul<Output = C::Elem>,
    A: Broadcast<C>,
    B: Broadcast<C>,
{
    combine2::<C, _, _, _, _>(a, b, <C::Elem as Mul>::mul)
}

/// Element-wise quotient.
///
/// See [`comp_mul`].
#[inline]
pub fn comp_div<C, A, B>(a: A, b: B) -> C::Output<C::Elem>
where
    C: Elementwise,
    C::Elem: Div<Output = C::Elem>,
    A: Broadcast<C>,
    B: Broadcast<C>,
{
    combine2::<C, _, _, _, _>(a, b, <C::Elem as Div>::div)
}

/// Linear interpolation `x * (1 - a) + y * a`, element by element.
///
/// Any of the three arguments may be a scalar.
///
/// ```
/// # use zipmath::*;
/// let x: Vec2f = vec2(0.0, 10.0);
/// let y: Vec2f = vec2(10.0, 20.0);
/// assert_eq!(functions::mix(x, y, 0.5), vec2(5.0, 15.0));
/// assert_eq!(functions::mix(x, y, vec2(0.0, 1.0)), vec2(0.0, 20.0));
/// assert_eq!(functions::mix(0.0, 100.0, vec2(0.25, 0.5)), vec2(25.0, 50.0));
/// ```
#[inline]
pub fn mix<C, X, Y, A>(x: X, y: Y, a: A) -> C::Output<C::Elem>
where
    C: Elementwise,
    C::Elem: Number,
    X: Broadcast<C>,
    Y: Broadcast<C>,
    A: Broadcast<C>,
{
    combine3::<C, _, _, _, _, _>(x, y, a, scalar::mix)
}

/// Constrains every element of `x` to lie between `lower` and `upper`.
///
/// Computes `min(max(x, lower), upper)`, so where `lower > upper`, the result is `upper`.
#[inline]
pub fn clamp<C, X, L, U>(x: X, lower: L, upper: U) -> C::Output<C::Elem>
where
    C: Elementwise,
    C::Elem: MinMax,
    X: Broadcast<C>,
    L: Broadcast<C>,
    U: Broadcast<C>,
{
    combine3::<C, _, _, _, _, _>(x, lower, upper, scalar::clamp)
}

/// Element-wise Hermite interpolation between `0` and `1` as `x` moves from `edge0` to `edge1`.
#[inline]
pub fn smoothstep<C, E0, E1, X>(edge0: E0, edge1: E1, x: X) -> C::Output<C::Elem>
where
    C: Elementwise,
    C::Elem: Number + MinMax,
    E0: Broadcast<C>,
    E1: Broadcast<C>,
    X: Broadcast<C>,
{
    combine3::<C, _, _, _, _, _>(edge0, edge1, x, scalar::smoothstep)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec1, vec2, vec3, vec4, Mat2, Matrix, Vec2f, Vec3, Vec3f, Vec4f};

    use super::*;

    #[test]
    fn sign_and_abs() {
        let x: Vec4f = vec4(-3.5, 0.0, 2.0, f32::NAN);
        assert_eq!(sign(x), vec4(-1.0, 0.0, 1.0, 0.0));
        let a = abs(x);
        assert_eq!(a.as_array()[..3], [3.5, 0.0, 2.0]);
        assert!(a.w.is_nan());

        let i: Vec3<i32> = vec3(-7, 0, 7);
        assert_eq!(sign(i), vec3(-1, 0, 1));
        assert_eq!(abs(i), vec3(7, 0, 7));
        assert_eq!(sign(vec3(0u8, 1, 200)), vec3(0, 1, 1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "overflow")]
    fn abs_of_signed_minimum_overflows() {
        let _ = abs(vec2(1, i32::MIN));
    }

    #[test]
    fn rounding() {
        let x: Vec4f = vec4(-1.25, -0.0, 0.5, 3.0);
        assert_eq!(floor(x), vec4(-2.0, 0.0, 0.0, 3.0));
        assert_eq!(ceil(x), vec4(-1.0, 0.0, 1.0, 3.0));
        assert_eq!(fract(x), vec4(0.75, 0.0, 0.5, 0.0));
    }

    #[test]
    fn fract_of_tiny_negatives() {
        let x: Vec2f = vec2(-1e-9, -1e-20);
        let f = fract(x);
        assert_eq!(f, x - floor(x));
        assert_eq!(f, vec2(1.0, 1.0));
        assert!(f.as_array().iter().all(|f| (0.0..=1.0).contains(f)));

        assert_eq!(fract(vec1(-1e-9f64)), vec1(1.0 - 1e-9));
    }

    #[test]
    fn classification() {
        let x: Vec4f = vec4(f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1.0);
        assert_eq!(isnan(x), [true, false, false, false]);
        assert_eq!(isinf(x), [false, true, true, false]);

        let m: Mat2<f64> = Matrix::from_rows([[0.0, f64::NAN], [1.0, 2.0]]);
        assert_eq!(isnan(m), Matrix::from_rows([[false, true], [false, false]]));
    }

    #[test]
    fn modulo_min_max() {
        let x: Vec3<f64> = vec3(-7.5, 0.0, 7.5);
        assert_eq!(modulo(x, 2.0), vec3(0.5, 0.0, 1.5));
        assert_eq!(modulo(x, -2.0), vec3(-1.5, 0.0, -0.5));
        assert_eq!(modulo(10.0, vec3(3.0, 4.0, 6.0)), vec3(1.0, 2.0, 4.0));

        let y: Vec3<f64> = vec3(1.0, -1.0, 8.0);
        assert_eq!(min(x, y), vec3(-7.5, -1.0, 7.5));
        assert_eq!(max(x, y), vec3(1.0, 0.0, 8.0));
        assert_eq!(min(x, 0.0), vec3(-7.5, 0.0, 0.0));
        assert_eq!(max(0.0, x), vec3(0.0, 0.0, 7.5));
    }

    #[test]
    fn step_forms() {
        let x: Vec3f = vec3(-1.0, 0.5, 2.0);
        assert_eq!(step(0.5, x), vec3(0.0, 1.0, 1.0));
        assert_eq!(step(x, 0.5), vec3(1.0, 1.0, 0.0));
        assert_eq!(step(x, x), Vec3f::splat(1.0));
        assert_eq!(step(vec3(1u32, 2, 3), 2), vec3(1, 1, 0));
    }

    #[test]
    fn component_wise_product() {
        let a: Mat2<f32> = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b: Mat2<f32> = Matrix::from_rows([[2.0, 2.0], [0.5, 0.25]]);
        assert_eq!(comp_mul(a, b), Matrix::from_rows([[2.0, 4.0], [1.5, 1.0]]));
        assert_eq!(comp_div(a, b), Matrix::from_rows([[0.5, 1.0], [6.0, 16.0]]));
        assert_eq!(comp_mul(a, 2.0), a * 2.0);
        assert_eq!(comp_div(12.0, a), 12.0 / a);

        let v: Vec3f = vec3(1.0, 2.0, 3.0);
        assert_eq!(comp_mul(v, v), v * v);
    }

    #[test]
    fn clamp_scenario() {
        let x: Vec3f = vec3(-2.0, 0.5, 2.0);
        assert_eq!(clamp(x, 0.0, 1.0), vec3(0.0, 0.5, 1.0));
    }

    /// Every ternary function accepts all 8 container/scalar combinations (except all-scalar,
    /// which does not compile) and agrees with the all-container form.
    #[test]
    fn ternary_combinations() {
        let x: Vec3f = vec3(-2.0, 0.5, 2.0);
        let lo = 0.0f32;
        let hi = 1.0f32;
        let vlo = Vec3f::splat(lo);
        let vhi = Vec3f::splat(hi);
        let expected = clamp(x, vlo, vhi);
        assert_eq!(clamp(x, lo, hi), expected);
        assert_eq!(clamp(x, vlo, hi), expected);
        assert_eq!(clamp(x, lo, vhi), expected);
        assert_eq!(clamp(-2.0, vlo, vhi), Vec3f::splat(0.0));
        assert_eq!(clamp(0.5, lo, vhi), Vec3f::splat(0.5));
        assert_eq!(clamp(2.0, vlo, hi), Vec3f::splat(1.0));

        let y: Vec3f = vec3(4.0, 4.0, 4.0);
        let a: Vec3f = vec3(0.0, 0.5, 1.0);
        let expected = mix(x, y, a);
        assert_eq!(expected, vec3(-2.0, 2.25, 4.0));
        assert_eq!(mix(x, 4.0, a), expected);
        assert_eq!(mix(x, y, 0.5), vec3(1.0, 2.25, 3.0));
        assert_eq!(mix(x, 4.0, 0.5), vec3(1.0, 2.25, 3.0));
        assert_eq!(mix(0.0, y, a), vec3(0.0, 2.0, 4.0));
        assert_eq!(mix(0.0, 4.0, a), vec3(0.0, 2.0, 4.0));
        assert_eq!(mix(0.0, y, 0.25), Vec3f::splat(1.0));

        let e0: Vec3f = Vec3f::splat(0.0);
        let e1: Vec3f = Vec3f::splat(1.0);
        let t: Vec3f = vec3(-1.0, 0.5, 3.0);
        let expected = smoothstep(e0, e1, t);
        assert_eq!(expected, vec3(0.0, 0.5, 1.0));
        assert_eq!(smoothstep(0.0, e1, t), expected);
        assert_eq!(smoothstep(e0, 1.0, t), expected);
        assert_eq!(smoothstep(0.0, 1.0, t), expected);
        assert_eq!(smoothstep(e0, e1, 0.5), Vec3f::splat(0.5));
        assert_eq!(smoothstep(0.0, e1, 0.5), Vec3f::splat(0.5));
        assert_eq!(smoothstep(e0, 1.0, 0.5), Vec3f::splat(0.5));
    }

    #[test]
    fn smoothstep_matrix() {
        let x: Mat2<f64> = Matrix::from_rows([[0.25, 0.75], [-5.0, 5.0]]);
        assert_relative_eq!(
            smoothstep(0.0, 1.0, x),
            Matrix::from_rows([[0.15625, 0.84375], [0.0, 1.0]])
        );
    }

    #[test]
    fn mix_matches_scalar() {
        let x = vec2(1.0f64, -3.0);
        let y = vec2(5.0f64, 9.0);
        for a in [0.0, 0.1, 0.5, 0.9, 1.0] {
            let mixed = mix(x, y, a);
            for i in 0..2 {
                assert_eq!(mixed[i], scalar::mix(x[i], y[i], a));
            }
        }
    }
}
