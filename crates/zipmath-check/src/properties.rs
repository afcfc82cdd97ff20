//! The algebraic properties that are checked.
//!
//! Every property is generic over the container type `C` and its element type `T`, draws its own
//! inputs, and returns whether the property held for them.

use std::fmt::Debug;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use approx::RelativeEq;
use fastrand::Rng;
use zipmath::{
    broadcast, functions, Broadcast, Elementwise, Exp, MinMax, Number, Real, Signed, Sqrt, Trig,
};

use crate::random::{sample, Sample};

/// Element types the properties are instantiated with.
pub trait Scalar:
    Number
    + MinMax
    + Trig
    + Exp
    + Sqrt
    + Real
    + Signed
    + PartialOrd
    + RelativeEq<Epsilon = Self>
    + Sample
    + Debug
    + Send
    + Sync
    + 'static
{
    fn from_f64(value: f64) -> Self;
}

impl Scalar for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Containers the properties are instantiated with.
///
/// This only requires operators that both [`Vector`][zipmath::Vector] and
/// [`Matrix`][zipmath::Matrix] implement.
pub trait Container<T>:
    Elementwise<Elem = T, Output<T> = Self>
    + Sample
    + Copy
    + PartialEq
    + Debug
    + RelativeEq<Epsilon = T>
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Rem<Output = Self>
    + Add<T, Output = Self>
    + Sub<T, Output = Self>
    + Mul<T, Output = Self>
    + Div<T, Output = Self>
    + AddAssign
    + SubAssign
    + RemAssign
    + AddAssign<T>
    + MulAssign<T>
    + DivAssign<T>
    + Send
    + Sync
    + 'static
{
}

impl<C, T> Container<T> for C where
    C: Elementwise<Elem = T, Output<T> = C>
        + Sample
        + Copy
        + PartialEq
        + Debug
        + RelativeEq<Epsilon = T>
        + Neg<Output = C>
        + Add<Output = C>
        + Sub<Output = C>
        + Rem<Output = C>
        + Add<T, Output = C>
        + Sub<T, Output = C>
        + Mul<T, Output = C>
        + Div<T, Output = C>
        + AddAssign
        + SubAssign
        + RemAssign
        + AddAssign<T>
        + MulAssign<T>
        + DivAssign<T>
        + Send
        + Sync
        + 'static
{
}

/// A property check, instantiated for a specific container type.
pub type Check = fn(&mut Rng) -> bool;

/// Range most inputs are drawn from.
const RANGE: (f64, f64) = (-100.0, 100.0);

fn any<C: Sample>(rng: &mut Rng) -> C {
    sample(rng, RANGE.0, RANGE.1)
}

fn scalar<T: Scalar>(value: f64) -> T {
    T::from_f64(value)
}

fn approx_eq<C: Container<T>, T: Scalar>(a: C, b: C) -> bool {
    a.relative_eq(&b, scalar(1e-3), scalar(1e-4))
}

fn all_le<C: Container<T>, T: Scalar>(a: C, b: C) -> bool {
    functions::all(functions::less_than_equal(a, b))
}

macro_rules! properties {
    ($(
        $(#[$attr:meta])*
        fn $name:ident($rng:ident) $body:block
    )+) => {
        $(
            $(#[$attr])*
            fn $name<C, T>($rng: &mut Rng) -> bool
            where
                C: Container<T>,
                T: Scalar + Broadcast<C>,
            $body
        )+

        /// Returns every property, instantiated for container `C`.
        pub fn all<C, T>() -> Vec<(&'static str, Check)>
        where
            C: Container<T>,
            T: Scalar + Broadcast<C>,
        {
            vec![$((stringify!($name), $name::<C, T> as Check)),+]
        }
    };
}

properties! {
    fn equality_identity(rng) {
        let a: C = any(rng);
        let copy = a;
        a == copy
    }

    fn double_negation(rng) {
        let a: C = any(rng);
        -(-a) == a
    }

    fn addition_commutativity(rng) {
        let (a, b): (C, C) = (any(rng), any(rng));
        a + b == b + a
    }

    fn addition_associativity(rng) {
        let (a, b, c): (C, C, C) = (any(rng), any(rng), any(rng));
        approx_eq((a + b) + c, a + (b + c))
    }

    fn addition_identity(rng) {
        let a: C = any(rng);
        a + T::ZERO == a && a + broadcast::<C, T>(T::ZERO) == a
    }

    fn subtraction_anticommutativity(rng) {
        let (a, b): (C, C) = (any(rng), any(rng));
        a - b == -(b - a)
    }

    fn subtraction_identity(rng) {
        let a: C = any(rng);
        a - T::ZERO == a && a - a == broadcast(T::ZERO)
    }

    fn subtraction_negation(rng) {
        let (a, b): (C, C) = (any(rng), any(rng));
        a - b == a + (-b)
    }

    fn multiplication_commutativity(rng) {
        let (a, b): (C, C) = (any(rng), any(rng));
        functions::comp_mul(a, b) == functions::comp_mul(b, a)
    }

    fn multiplication_identity(rng) {
        let a: C = any(rng);
        a * T::ONE == a && functions::comp_mul(a, T::ONE) == a
    }

    fn broadcast_equivalence(rng) {
        let a: C = any(rng);
        let s: T = sample(rng, 0.5, 10.0);
        let splat: C = broadcast(s);
        a + s == a + splat
            && a - s == a - splat
            && a * s == functions::comp_mul(a, splat)
            && a / s == functions::comp_div(a, splat)
            && functions::comp_div(s, a) == functions::comp_div(splat, a)
            && functions::min(s, a) == functions::min(splat, a)
            && functions::mix(a, s, s) == functions::mix(a, splat, splat)
    }

    fn compound_equivalence(rng) {
        let a: C = any(rng);
        // Kept away from zero for `%`.
        let b: C = functions::abs(any::<C>(rng)) + scalar::<T>(1.0);
        let s: T = sample(rng, 0.5, 2.0);

        let mut x = a;
        x += b;
        let add = x == a + b;
        let mut x = a;
        x -= b;
        let sub = x == a - b;
        let mut x = a;
        x %= b;
        let rem = x == a % b;
        let mut x = a;
        x += s;
        let add_scalar = x == a + s;
        let mut x = a;
        x *= s;
        let mul_scalar = x == a * s;
        let mut x = a;
        x /= s;
        let div_scalar = x == a / s;
        add && sub && rem && add_scalar && mul_scalar && div_scalar
    }

    fn degrees_radians_inverse(rng) {
        let a: C = any(rng);
        approx_eq(functions::degrees(functions::radians(a)), a)
            && approx_eq(functions::radians(functions::degrees(a)), a)
    }

    fn sin_asin(rng) {
        let a: C = sample(rng, -1.5, 1.5);
        approx_eq(functions::asin(functions::sin(a)), a)
    }

    fn exp_log(rng) {
        let a: C = sample(rng, -10.0, 10.0);
        approx_eq(functions::log(functions::exp(a)), a)
    }

    fn exp2_log2(rng) {
        let a: C = sample(rng, -10.0, 10.0);
        approx_eq(functions::log2(functions::exp2(a)), a)
    }

    fn pow_multiplication(rng) {
        let a: C = sample(rng, -10.0, 10.0);
        let cube = functions::comp_mul(functions::comp_mul(a, a), a);
        approx_eq(functions::pow(a, scalar::<T>(3.0)), cube)
    }

    fn sqrt_inverse(rng) {
        let a: C = any(rng);
        approx_eq(functions::sqrt(functions::comp_mul(a, a)), functions::abs(a))
    }

    fn abs_negation(rng) {
        let a: C = any(rng);
        functions::abs(-a) == functions::abs(a)
    }

    fn sign_abs(rng) {
        let a: C = any(rng);
        functions::comp_mul(functions::sign(a), functions::abs(a)) == a
    }

    fn floor_ceil_bounds(rng) {
        let a: C = any(rng);
        let (floor, ceil) = (functions::floor(a), functions::ceil(a));
        all_le(floor, a)
            && all_le(a, ceil)
            && all_le(ceil - floor, broadcast(T::ONE))
    }

    fn fract_of_floor(rng) {
        let a: C = any(rng);
        functions::fract(functions::floor(a)) == broadcast(T::ZERO)
    }

    fn modulo_fract(rng) {
        let a: C = any(rng);
        approx_eq(functions::modulo(a, T::ONE), functions::fract(a))
    }

    fn min_max_sum(rng) {
        let (a, b): (C, C) = (any(rng), any(rng));
        functions::min(a, b) + functions::max(a, b) == a + b
    }

    fn mix_identity(rng) {
        let (a, b): (C, C) = (any(rng), any(rng));
        functions::mix(a, b, T::ZERO) == a && functions::mix(a, b, T::ONE) == b
    }

    fn mix_symmetry(rng) {
        let (a, b): (C, C) = (any(rng), any(rng));
        let t: C = sample(rng, 0.0, 1.0);
        let t_inv = -t + T::ONE;
        approx_eq(functions::mix(a, b, t), functions::mix(b, a, t_inv))
    }

    fn clamp_bounds(rng) {
        let (a, b, c): (C, C, C) = (any(rng), any(rng), any(rng));
        let (lower, upper) = (functions::min(b, c), functions::max(b, c));
        let clamped = functions::clamp(a, lower, upper);
        all_le(lower, clamped) && all_le(clamped, upper)
    }

    fn smoothstep_range(rng) {
        let edge0: T = sample(rng, -100.0, 0.0);
        let edge1: T = sample(rng, 1.0, 100.0);
        let s = functions::smoothstep(edge0, edge1, any::<C>(rng));
        all_le(broadcast(T::ZERO), s) && all_le(s, broadcast(scalar::<T>(1.0 + 1e-6)))
    }

    fn elementwise_lifting(rng) {
        let (a, b, c): (C, C, C) = (any(rng), any(rng), any(rng));
        let matches = |lifted: C, f: &dyn Fn(T, T, T) -> T| {
            let expected = a.zip_with3(b, c, f);
            functions::all(lifted.zip_with(expected, |x, y| x == y))
        };
        matches(functions::sin(a), &|a, _, _| a.sin())
            && matches(functions::exp(a * scalar::<T>(0.01)), &|a, _, _| (a * scalar::<T>(0.01)).exp())
            && matches(functions::atan2(a, b), &|a, b, _| a.atan2(b))
            && matches(functions::max(a, b), &|a, b, _| MinMax::max(a, b))
            && matches(functions::clamp(a, b, c), &|a, b, c| a.max(b).min(c))
            && matches(functions::step(b, a), &|a, b, _| zipmath::scalar::step(b, a))
    }
}

#[cfg(test)]
mod tests {
    use zipmath::{Mat2f, Vec3f};

    use super::*;

    fn run<C, T>(iterations: usize) -> Vec<&'static str>
    where
        C: Container<T>,
        T: Scalar + Broadcast<C>,
    {
        let mut rng = Rng::with_seed(7);
        all::<C, T>()
            .into_iter()
            .filter(|(_, check)| !(0..iterations).all(|_| check(&mut rng)))
            .map(|(name, _)| name)
            .collect()
    }

    #[test]
    fn all_pass() {
        assert_eq!(run::<Vec3f, f32>(200), Vec::<&str>::new());
        assert_eq!(run::<Mat2f, f32>(200), Vec::<&str>::new());
    }

    #[test]
    fn names_are_unique() {
        let mut names = all::<Vec3f, f32>()
            .into_iter()
            .map(|(name, _)| name)
            .collect::<Vec<_>>();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }
}
