//! Runs the property checks and collects their results.

use std::{any, fmt, time::Instant};

use fastrand::Rng;
use rayon::prelude::*;
use zipmath::{Broadcast, Mat2f, Mat2x3, Shape, Vec2f, Vec3, Vec3f, Vec4f};

use crate::{
    config::Config,
    properties::{self, Check, Container, Scalar},
};

/// A property, instantiated for one container type.
pub struct Property {
    /// Human-readable container type, eg. `vec3<f32>`.
    pub ty: String,
    pub name: &'static str,
    pub check: Check,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.ty, self.name)
    }
}

/// The result of evaluating a [`Property`] many times.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub property: String,
    pub iterations: usize,
    pub failures: usize,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.failures == 0
    }

    /// Percentage of evaluations that failed.
    pub fn failure_rate(&self) -> f64 {
        self.failures as f64 / self.iterations as f64 * 100.0
    }
}

/// Returns every property, instantiated for every supported container type.
pub fn properties() -> Vec<Property> {
    let mut out = Vec::new();
    add::<Vec2f, f32>(&mut out);
    add::<Vec3f, f32>(&mut out);
    add::<Vec4f, f32>(&mut out);
    add::<Vec3<f64>, f64>(&mut out);
    add::<Mat2f, f32>(&mut out);
    add::<Mat2x3<f32>, f32>(&mut out);
    out
}

fn add<C, T>(out: &mut Vec<Property>)
where
    C: Container<T>,
    T: Scalar + Broadcast<C>,
{
    let ty = format!("{}<{}>", Shape::of::<C>(), any::type_name::<T>());
    out.extend(
        properties::all::<C, T>()
            .into_iter()
            .map(|(name, check)| Property {
                ty: ty.clone(),
                name,
                check,
            }),
    );
}

/// Derives the RNG seed of the property at `index` from the base seed.
fn property_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15)
}

/// Evaluates every property `config.iterations` times, in parallel.
///
/// The returned outcomes are in the same order as `properties`. Results only depend on the
/// configured seed, not on scheduling.
pub fn run(properties: &[Property], config: &Config) -> Vec<Outcome> {
    let start = Instant::now();
    let outcomes = properties
        .par_iter()
        .enumerate()
        .map(|(index, property)| {
            let mut rng = Rng::with_seed(property_seed(config.seed, index));
            let failures = (0..config.iterations)
                .filter(|_| !(property.check)(&mut rng))
                .count();
            Outcome {
                property: property.to_string(),
                iterations: config.iterations,
                failures,
            }
        })
        .collect::<Vec<_>>();
    log::debug!(
        "evaluated {} properties in {:?}",
        properties.len(),
        start.elapsed()
    );
    outcomes
}

/// Logs the outcomes and returns the number of failed properties.
pub fn report(outcomes: &[Outcome]) -> usize {
    let mut failed = 0;
    for outcome in outcomes {
        if outcome.passed() {
            log::trace!("{}: ok", outcome.property);
        } else {
            failed += 1;
            log::warn!(
                "{}: failed {:.2}% of {} evaluations",
                outcome.property,
                outcome.failure_rate(),
                outcome.iterations,
            );
        }
    }
    log::info!(
        "{} of {} properties passed",
        outcomes.len() - failed,
        outcomes.len()
    );
    failed
}
