//! Character-class samplers over an injected random source.

use rand::{Rng, RngCore};

pub const LOWERCASE_SET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE_SET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMERIC_SET: &[u8] = b"0123456789";

/// Uniformly pick one byte of `set`. `set` must be non-empty.
pub fn pick(set: &[u8], rng: &mut dyn RngCore) -> u8 {
    set[rng.random_range(0..set.len())]
}

pub fn random_lowercase(rng: &mut dyn RngCore) -> u8 {
    pick(LOWERCASE_SET, rng)
}

pub fn random_uppercase(rng: &mut dyn RngCore) -> u8 {
    pick(UPPERCASE_SET, rng)
}

pub fn random_numeric(rng: &mut dyn RngCore) -> u8 {
    pick(NUMERIC_SET, rng)
}
