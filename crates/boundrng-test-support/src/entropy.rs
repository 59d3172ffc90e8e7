//! Test entropy — deterministic `EntropySource` implementations for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use boundrng_core::entropy::EntropySource;
use boundrng_core::error::RngError;

/// An entropy source that returns the same seed on every call. Generators
/// built from it replay the same stream, which makes draws reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub u64);

impl EntropySource for FixedEntropy {
    fn next_seed(&self) -> Result<u64, RngError> {
        Ok(self.0)
    }
}

/// An entropy source that returns seeds from a predetermined sequence and
/// fails once the sequence is exhausted. Used to script construction followed
/// by a known number of reseeds.
#[derive(Debug)]
pub struct SequenceEntropy {
    seeds: Mutex<VecDeque<u64>>,
}

impl SequenceEntropy {
    /// Create a new `SequenceEntropy` with the given seeds.
    #[must_use]
    pub fn new(seeds: Vec<u64>) -> Self {
        Self {
            seeds: Mutex::new(seeds.into()),
        }
    }

    /// Number of seeds not yet handed out.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.seeds.lock().unwrap().len()
    }
}

impl EntropySource for SequenceEntropy {
    fn next_seed(&self) -> Result<u64, RngError> {
        self.seeds
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| RngError::Entropy("seed sequence exhausted".into()))
    }
}

/// An entropy source that always fails. Useful for testing error-handling
/// paths.
#[derive(Debug, Clone, Copy)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn next_seed(&self) -> Result<u64, RngError> {
        Err(RngError::Entropy("entropy device unavailable".into()))
    }
}
