//! boundrng core — bounded random value generators.
//!
//! A generator draws values of an [`Element`] type from an inclusive range
//! (or a fair coin flip for `bool`) and can be shared across threads without
//! external locking. Two strategies implement [`BoundedGenerator`]:
//!
//! - [`LockedRng`] keeps one engine behind a mutex.
//! - [`PerThreadRng`] gives every calling thread its own engine and only
//!   locks the configuration. [`BoundedRng`] aliases it.
//!
//! ```
//! use boundrng_core::{BoundedGenerator, BoundedRng};
//!
//! let rng = BoundedRng::<i32>::new(-100, 100);
//! let value = rng.generate();
//! assert!((-100..=100).contains(&value));
//! ```

pub mod bounds;
pub mod distribution;
pub mod element;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod locked;
pub mod per_thread;

pub use bounds::Bounds;
pub use element::Element;
pub use entropy::{EntropySource, OsEntropy};
pub use error::RngError;
pub use generator::BoundedGenerator;
pub use locked::LockedRng;
pub use per_thread::PerThreadRng;

/// The recommended generator: one engine per calling thread.
pub type BoundedRng<T> = PerThreadRng<T>;
