//! Shared-engine generator: one engine behind one mutex.
//!
//! Every operation holds the lock for its whole duration, so draws from
//! different threads are serialized. Prefer [`PerThreadRng`] when many
//! threads draw at high rates.
//!
//! [`PerThreadRng`]: crate::per_thread::PerThreadRng

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::SeedableRng;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use tracing::debug;

use crate::bounds::Bounds;
use crate::element::Element;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::RngError;
use crate::generator::BoundedGenerator;

#[derive(Debug)]
struct LockedState<T: Element> {
    seed: u64,
    bounds: Bounds<T>,
    sampler: T::Sampler,
    engine: StdRng,
}

/// A bounded generator whose single engine is guarded by a mutex.
#[derive(Debug)]
pub struct LockedRng<T: Element, E = OsEntropy> {
    state: Mutex<LockedState<T>>,
    entropy: E,
}

impl<T: Element> LockedRng<T> {
    /// Creates a generator over `[min(from, to), max(from, to)]`.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot provide a seed.
    #[must_use]
    pub fn new(from: T, to: T) -> Self {
        Self::from_bounds(Bounds::new(from, to))
    }

    /// Creates a generator over the whole range of `T`.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot provide a seed.
    #[must_use]
    pub fn full_range() -> Self {
        Self::from_bounds(Bounds::full())
    }

    /// Creates a generator from bounds that may exceed `T`'s range.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot provide a seed.
    #[must_use]
    pub fn saturating(from: T::Wide, to: T::Wide) -> Self {
        Self::from_bounds(Bounds::saturating(from, to))
    }

    /// Fallible variant of [`LockedRng::new`].
    ///
    /// # Errors
    ///
    /// Returns `RngError::Entropy` if the operating system cannot provide a seed.
    pub fn try_new(from: T, to: T) -> Result<Self, RngError> {
        Self::with_entropy(from, to, OsEntropy)
    }

    fn from_bounds(bounds: Bounds<T>) -> Self {
        match Self::with_bounds(bounds, OsEntropy) {
            Ok(rng) => rng,
            Err(err) => panic!("failed to seed generator: {err}"),
        }
    }
}

impl<T: Element, E: EntropySource> LockedRng<T, E> {
    /// Creates a generator seeded from `entropy`.
    ///
    /// # Errors
    ///
    /// Returns `RngError::Entropy` if `entropy` cannot provide a seed.
    pub fn with_entropy(from: T, to: T, entropy: E) -> Result<Self, RngError> {
        Self::with_bounds(Bounds::new(from, to), entropy)
    }

    /// Creates a generator over the whole range of `T`, seeded from `entropy`.
    ///
    /// # Errors
    ///
    /// Returns `RngError::Entropy` if `entropy` cannot provide a seed.
    pub fn full_range_with_entropy(entropy: E) -> Result<Self, RngError> {
        Self::with_bounds(Bounds::full(), entropy)
    }

    fn with_bounds(bounds: Bounds<T>, entropy: E) -> Result<Self, RngError> {
        let seed = entropy.next_seed()?;
        Ok(Self {
            state: Mutex::new(LockedState {
                seed,
                bounds,
                sampler: bounds.sampler(),
                engine: StdRng::seed_from_u64(seed),
            }),
            entropy,
        })
    }

    // No operation panics while holding the lock, so a poisoned state is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, LockedState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Element> Default for LockedRng<T> {
    fn default() -> Self {
        Self::full_range()
    }
}

impl<T: Element, E: EntropySource> BoundedGenerator<T> for LockedRng<T, E> {
    fn generate(&self) -> T {
        let mut guard = self.lock();
        let state = &mut *guard;
        state.sampler.sample(&mut state.engine)
    }

    fn set_bounds(&self, from: T, to: T) {
        let bounds = Bounds::new(from, to);
        let mut state = self.lock();
        state.bounds = bounds;
        state.sampler = bounds.sampler();
        debug!(lower = %bounds.lower(), upper = %bounds.upper(), "bounds updated");
    }

    fn try_reseed(&self) -> Result<(), RngError> {
        let seed = self.entropy.next_seed()?;
        let mut state = self.lock();
        state.seed = seed;
        state.engine = StdRng::seed_from_u64(seed);
        debug!(seed, "engine reseeded");
        Ok(())
    }

    fn bounds(&self) -> Bounds<T> {
        self.lock().bounds
    }

    fn seed(&self) -> u64 {
        self.lock().seed
    }
}

impl<T: Element, E: EntropySource> fmt::Display for LockedRng<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LockedRng<{}>{}",
            std::any::type_name::<T>(),
            self.bounds()
        )
    }
}
