//! Exponential, logarithm and root functions.

use crate::{Exp, Sqrt};

unary! {
    /// Element-wise natural exponential, `e^x`.
    exp => Exp::exp;
    /// Element-wise `2^x`.
    exp2 => Exp::exp2;
    /// Element-wise `e^x - 1`, accurate for `x` close to zero.
    expm1 => Exp::exp_m1;
    /// Element-wise natural logarithm.
    log => Exp::ln;
    log2 => Exp::log2;
    log10 => Exp::log10;
    /// Element-wise `ln(1 + x)`, accurate for `x` close to zero.
    log1p => Exp::ln_1p;
    sqrt => Sqrt::sqrt;
    cbrt => Sqrt::cbrt;
}

binary! {
    /// Raises every element of `x` to the power `a`.
    ///
    /// ```
    /// # use zipmath::*;
    /// let x: Vec3f = vec3(1.0, 2.0, 3.0);
    /// assert_eq!(functions::pow(x, 2.0), vec3(1.0, 4.0, 9.0));
    /// assert_eq!(functions::pow(2.0, x), vec3(2.0, 4.0, 8.0));
    /// ```
    pow(x, a) => Exp::powf;
}
