//! Random test inputs.

use fastrand::Rng;
use zipmath::{Matrix, Vector};

/// Types that can be drawn uniformly from a range of values.
pub trait Sample: Sized {
    /// Draws a value whose elements all lie in `[lower, upper)`.
    fn sample(rng: &mut Rng, lower: f64, upper: f64) -> Self;
}

macro_rules! float_samples {
    ($($f:ident),+) => {
        $(
            impl Sample for $f {
                fn sample(rng: &mut Rng, lower: f64, upper: f64) -> Self {
                    let (lower, upper) = (lower as $f, upper as $f);
                    let x = lower + rng.$f() * (upper - lower);
                    // Rounding can land exactly on `upper`.
                    if x < upper {
                        x
                    } else {
                        lower
                    }
                }
            }
        )+
    };
}
float_samples!(f32, f64);

impl<T: Sample, const N: usize> Sample for Vector<T, N> {
    fn sample(rng: &mut Rng, lower: f64, upper: f64) -> Self {
        Vector::from_fn(|_| T::sample(rng, lower, upper))
    }
}

impl<T: Sample, const R: usize, const C: usize> Sample for Matrix<T, R, C> {
    fn sample(rng: &mut Rng, lower: f64, upper: f64) -> Self {
        Matrix::from_fn(|_, _| T::sample(rng, lower, upper))
    }
}

/// Draws a value from `[lower, upper)`.
pub fn sample<S: Sample>(rng: &mut Rng, lower: f64, upper: f64) -> S {
    S::sample(rng, lower, upper)
}

#[cfg(test)]
mod tests {
    use zipmath::{Mat2x3, Vec4};

    use super::*;

    #[test]
    fn stays_in_range() {
        let mut rng = Rng::with_seed(0x5eed);
        for _ in 0..1000 {
            let v: Vec4<f32> = sample(&mut rng, -2.0, 3.0);
            assert!(v.as_slice().iter().all(|x| (-2.0..3.0).contains(x)), "{v:?}");

            let m: Mat2x3<f64> = sample(&mut rng, 0.0, 1.0);
            for col in m.columns() {
                assert!(col.as_slice().iter().all(|x| (0.0..1.0).contains(x)), "{m:?}");
            }
        }
    }
}
