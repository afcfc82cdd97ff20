//! Angle and trigonometry functions.

use crate::{Hyperbolic, Real, Trig};

unary! {
    /// Element-wise sine (argument in radians).
    sin => Trig::sin;
    /// Element-wise cosine (argument in radians).
    cos => Trig::cos;
    tan => Trig::tan;
    /// Element-wise secant, `1 / cos(x)`.
    sec => Trig::sec;
    /// Element-wise cosecant, `1 / sin(x)`.
    csc => Trig::csc;
    /// Element-wise cotangent, `1 / tan(x)`.
    cot => Trig::cot;
    asin => Trig::asin;
    acos => Trig::acos;
    atan => Trig::atan;
    asec => Trig::asec;
    acsc => Trig::acsc;
    acot => Trig::acot;

    sinh => Hyperbolic::sinh;
    cosh => Hyperbolic::cosh;
    tanh => Hyperbolic::tanh;
    sech => Hyperbolic::sech;
    csch => Hyperbolic::csch;
    coth => Hyperbolic::coth;
    asinh => Hyperbolic::asinh;
    acosh => Hyperbolic::acosh;
    atanh => Hyperbolic::atanh;
    asech => Hyperbolic::asech;
    acsch => Hyperbolic::acsch;
    acoth => Hyperbolic::acoth;

    /// Converts every element from degrees to radians.
    radians => Real::radians;
    /// Converts every element from radians to degrees.
    degrees => Real::degrees;
}

binary! {
    /// Element-wise four-quadrant arc tangent of `y / x`.
    ///
    /// ```
    /// # use zipmath::*;
    /// use std::f32::consts::{FRAC_PI_2, PI};
    ///
    /// let y: Vec2f = vec2(1.0, 0.0);
    /// approx::assert_relative_eq!(functions::atan2(y, -1.0), vec2(3.0 * PI / 4.0, PI));
    /// approx::assert_relative_eq!(functions::atan2(1.0, Vec2f::ZERO), Vec2f::splat(FRAC_PI_2));
    /// ```
    atan2(y, x) => Trig::atan2;
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::assert_relative_eq;

    use crate::{vec2, vec3, Mat2, Matrix, Vec3};

    use super::*;

    #[test]
    fn trig() {
        let x: Vec3<f64> = vec3(0.0, FRAC_PI_2, PI);
        assert_relative_eq!(sin(x), vec3(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(cos(x), vec3(1.0, 0.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(tan(vec2(0.0, FRAC_PI_4)), vec2(0.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(asin(sin(x * 0.25)), x * 0.25, epsilon = 1e-12);
        assert_relative_eq!(acot(cot(vec2(0.5, 1.0))), vec2(0.5, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn hyperbolic() {
        let x: Vec3<f64> = vec3(-1.0, 0.5, 2.0);
        assert_relative_eq!(asinh(sinh(x)), x, epsilon = 1e-12);
        assert_relative_eq!(atanh(tanh(x)), x, epsilon = 1e-12);
        assert_relative_eq!(cosh(x) * sech(x), Vec3::splat(1.0), epsilon = 1e-12);
        assert_relative_eq!(acoth(coth(x)), x, epsilon = 1e-9);
    }

    #[test]
    fn angle_conversion() {
        let deg: Mat2<f64> = Matrix::from_rows([[0.0, 90.0], [180.0, -45.0]]);
        let rad = radians(deg);
        assert_relative_eq!(
            rad,
            Matrix::from_rows([[0.0, FRAC_PI_2], [PI, -FRAC_PI_4]]),
            epsilon = 1e-12
        );
        assert_relative_eq!(degrees(rad), deg, epsilon = 1e-12);
    }

    #[test]
    fn atan2_forms() {
        let y: Vec3<f64> = vec3(1.0, 1.0, -1.0);
        let x: Vec3<f64> = vec3(1.0, -1.0, -1.0);
        assert_relative_eq!(
            atan2(y, x),
            vec3(FRAC_PI_4, 3.0 * FRAC_PI_4, -3.0 * FRAC_PI_4),
            epsilon = 1e-12
        );
        assert_eq!(atan2(y, 1.0), atan2(y, Vec3::splat(1.0)));
        assert_eq!(atan2(1.0, x), atan2(Vec3::splat(1.0), x));
    }
}
