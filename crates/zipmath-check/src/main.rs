//! Randomized property checks for the `zipmath` element-wise algebra.
//!
//! Every property (eg. "addition is commutative", "`x += y` is the same as `x = x + y`") is
//! evaluated on many random inputs, for several vector and matrix types. Failing properties are
//! logged with the percentage of inputs they failed for, and the process exits with an error.
//!
//! # Environment Variables
//!
//! * `ZIPMATH_CHECK_ITERATIONS`: Number of random inputs to evaluate each property with. Must be
//!   greater than 0. Defaults to 10000.
//! * `ZIPMATH_CHECK_SEED`: Base seed of the random number generators, in decimal or as a
//!   `0x`-prefixed hexadecimal number. If unset, a random seed is used. The seed is always logged,
//!   so that failing runs can be reproduced.
//! * `RUST_LOG`: Log filter, see [`env_logger`].

mod config;
mod properties;
mod random;
mod suite;

use anyhow::bail;
use log::LevelFilter;

use crate::config::Config;

/// Initializes logging to *stderr*.
///
/// This crate logs at *debug* level unless overridden by `RUST_LOG`. If a global logger is already
/// registered, this does nothing.
fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .ok();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let config = Config::from_env()?;
    let properties = suite::properties();
    log::info!(
        "checking {} properties with {} iterations each (seed {:#x})",
        properties.len(),
        config.iterations,
        config.seed,
    );

    let outcomes = suite::run(&properties, &config);
    let failed = suite::report(&outcomes);
    if failed != 0 {
        bail!(
            "{failed} properties failed (rerun with ZIPMATH_CHECK_SEED={:#x} to reproduce)",
            config.seed
        );
    }

    Ok(())
}
