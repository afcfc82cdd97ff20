//! Configuration via environment variables.

use std::env;

use anyhow::{bail, Context};

const ITERATIONS_VAR: &str = "ZIPMATH_CHECK_ITERATIONS";
const SEED_VAR: &str = "ZIPMATH_CHECK_SEED";

const DEFAULT_ITERATIONS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of random inputs each property is evaluated with.
    pub iterations: usize,
    /// Base seed. Every property derives its own RNG from this.
    pub seed: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration using `lookup` to access variables.
    ///
    /// If no seed is configured, a random one is picked.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let iterations = match lookup(ITERATIONS_VAR) {
            Some(v) => v.trim().parse().with_context(|| {
                format!("invalid value set for `{ITERATIONS_VAR}` variable: '{v}'")
            })?,
            None => DEFAULT_ITERATIONS,
        };
        if iterations == 0 {
            bail!("`{ITERATIONS_VAR}` must be greater than 0");
        }

        let seed = match lookup(SEED_VAR) {
            Some(v) => parse_seed(&v)
                .with_context(|| format!("invalid value set for `{SEED_VAR}` variable: '{v}'"))?,
            None => fastrand::u64(..),
        };

        Ok(Self { iterations, seed })
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal seed.
fn parse_seed(s: &str) -> anyhow::Result<u64> {
    let s = s.trim();
    let seed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16)?,
        None => s.parse()?,
    };
    Ok(seed)
}
