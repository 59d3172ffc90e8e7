//! Thread-isolated generator: one engine per calling thread.
//!
//! Only the configuration (seed, bounds, distribution) is shared and guarded
//! by a read-write lock. Each thread draws from its own engine, created on
//! first use and stored in a thread-local registry keyed by generator id, so
//! concurrent draws never contend on engine state.
//!
//! A thread's engine is seeded from the generator seed mixed with a
//! per-thread ordinal, so two threads never replay the same stream. A
//! [`reseed`](crate::generator::BoundedGenerator::reseed) bumps the
//! configuration epoch; every thread rebuilds its engine from the new seed on
//! its next draw.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use rand::SeedableRng;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::bounds::Bounds;
use crate::element::Element;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::RngError;
use crate::generator::BoundedGenerator;

/// Odd constant (2^64 / golden ratio) spreading thread ordinals across seeds.
const ORDINAL_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

static NEXT_GENERATOR_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_THREAD_ORDINAL: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ORDINAL: u64 = NEXT_THREAD_ORDINAL.fetch_add(1, Ordering::Relaxed);
    static ENGINES: RefCell<HashMap<u64, ThreadEngine>> = RefCell::new(HashMap::new());
}

/// One thread's engine for one generator.
struct ThreadEngine {
    epoch: u64,
    owner: Weak<()>,
    engine: StdRng,
}

impl ThreadEngine {
    fn seeded(seed: u64, epoch: u64, owner: Weak<()>) -> Self {
        let ordinal = THREAD_ORDINAL.with(|ordinal| *ordinal);
        Self {
            epoch,
            owner,
            engine: StdRng::seed_from_u64(thread_seed(seed, ordinal)),
        }
    }
}

fn thread_seed(seed: u64, ordinal: u64) -> u64 {
    seed ^ ordinal.wrapping_mul(ORDINAL_MIX)
}

#[derive(Debug)]
struct Config<T: Element> {
    seed: u64,
    epoch: u64,
    bounds: Bounds<T>,
    sampler: T::Sampler,
}

/// A bounded generator with one engine per calling thread.
#[derive(Debug)]
pub struct PerThreadRng<T: Element, E = OsEntropy> {
    id: u64,
    // Thread registries hold a `Weak` to this; dead entries are pruned.
    alive: Arc<()>,
    config: RwLock<Config<T>>,
    entropy: E,
}

impl<T: Element> PerThreadRng<T> {
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

    /// Fallible variant of [`PerThreadRng::new`].
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

impl<T: Element, E: EntropySource> PerThreadRng<T, E> {
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
            id: NEXT_GENERATOR_ID.fetch_add(1, Ordering::Relaxed),
            alive: Arc::new(()),
            config: RwLock::new(Config {
                seed,
                epoch: 0,
                bounds,
                sampler: bounds.sampler(),
            }),
            entropy,
        })
    }

    fn read(&self) -> RwLockReadGuard<'_, Config<T>> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Config<T>> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Element> Default for PerThreadRng<T> {
    fn default() -> Self {
        Self::full_range()
    }
}

impl<T: Element, E: EntropySource> BoundedGenerator<T> for PerThreadRng<T, E> {
    fn generate(&self) -> T {
        let (sampler, seed, epoch) = {
            let config = self.read();
            (config.sampler.clone(), config.seed, config.epoch)
        };

        ENGINES.with(|engines| {
            let mut engines = engines.borrow_mut();
            if !engines.contains_key(&self.id) {
                engines.retain(|_, slot| slot.owner.strong_count() > 0);
                trace!(generator = self.id, epoch, "instantiating thread engine");
            }

            let slot = engines
                .entry(self.id)
                .or_insert_with(|| ThreadEngine::seeded(seed, epoch, Arc::downgrade(&self.alive)));
            if slot.epoch != epoch {
                trace!(generator = self.id, epoch, "reseeding stale thread engine");
                *slot = ThreadEngine::seeded(seed, epoch, Arc::downgrade(&self.alive));
            }
            sampler.sample(&mut slot.engine)
        })
    }

    fn set_bounds(&self, from: T, to: T) {
        let bounds = Bounds::new(from, to);
        let mut config = self.write();
        config.bounds = bounds;
        config.sampler = bounds.sampler();
        debug!(
            generator = self.id,
            lower = %bounds.lower(),
            upper = %bounds.upper(),
            "bounds updated"
        );
    }

    fn try_reseed(&self) -> Result<(), RngError> {
        let seed = self.entropy.next_seed()?;
        let mut config = self.write();
        config.seed = seed;
        config.epoch += 1;
        debug!(generator = self.id, seed, epoch = config.epoch, "generator reseeded");
        Ok(())
    }

    fn bounds(&self) -> Bounds<T> {
        self.read().bounds
    }

    fn seed(&self) -> u64 {
        self.read().seed
    }
}

impl<T: Element, E> Drop for PerThreadRng<T, E> {
    fn drop(&mut self) {
        // Other threads prune their entries lazily through the `Weak` owner.
        let _ = ENGINES.try_with(|engines| {
            if let Ok(mut engines) = engines.try_borrow_mut() {
                engines.remove(&self.id);
            }
        });
    }
}

impl<T: Element, E: EntropySource> fmt::Display for PerThreadRng<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PerThreadRng<{}>{}",
            std::any::type_name::<T>(),
            self.bounds()
        )
    }
}
