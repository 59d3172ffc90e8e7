//! Shared test helpers for generator integration tests.
#![allow(dead_code)]

use boundrng_core::{BoundedGenerator, Element};

/// Draws `count` values and asserts each lies within `[lower, upper]`.
pub fn assert_draws_within<T, G>(rng: &G, count: usize, lower: T, upper: T)
where
    T: Element,
    G: BoundedGenerator<T> + ?Sized,
{
    for _ in 0..count {
        let value = rng.generate();
        assert!(
            lower <= value && value <= upper,
            "{value} outside [{lower}, {upper}]"
        );
    }
}

/// Draws `count` values into a vector.
pub fn draw<T, G>(rng: &G, count: usize) -> Vec<T>
where
    T: Element,
    G: BoundedGenerator<T> + ?Sized,
{
    (0..count).map(|_| rng.generate()).collect()
}
