//! Entropy source abstraction for seeding.
//!
//! In production, seeds come from the operating system. In tests, a fixed or
//! scripted source is injected so generator output is reproducible.

use std::sync::Arc;

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::RngError;

/// Abstraction over the non-deterministic source of generator seeds.
pub trait EntropySource: Send + Sync {
    /// Returns a fresh seed.
    ///
    /// # Errors
    ///
    /// Returns `RngError::Entropy` if no seed can be produced.
    fn next_seed(&self) -> Result<u64, RngError>;
}

/// Production entropy source backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn next_seed(&self) -> Result<u64, RngError> {
        OsRng
            .try_next_u64()
            .map_err(|e| RngError::Entropy(e.to_string()))
    }
}

impl<S: EntropySource + ?Sized> EntropySource for Arc<S> {
    fn next_seed(&self) -> Result<u64, RngError> {
        (**self).next_seed()
    }
}

#[cfg(test)]
mod tests {
    use super::{EntropySource, OsEntropy};

    #[test]
    fn test_os_entropy_produces_varying_seeds() {
        let seeds: Vec<u64> = (0..8).map(|_| OsEntropy.next_seed().unwrap()).collect();
        assert!(seeds.windows(2).any(|w| w[0] != w[1]));
    }
}
