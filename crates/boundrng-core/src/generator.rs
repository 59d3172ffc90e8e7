//! The bounded generator abstraction.

use crate::bounds::Bounds;
use crate::element::Element;
use crate::error::RngError;

/// A thread-safe source of values of `T` within configurable bounds.
///
/// Every method takes `&self`; implementations synchronize internally, so a
/// generator can be shared by reference or through an `Arc` and used from any
/// number of threads at once.
pub trait BoundedGenerator<T: Element>: Send + Sync {
    /// Draws one value from the current distribution.
    ///
    /// Numeric values lie within [`bounds`](Self::bounds); booleans are a fair
    /// coin flip.
    fn generate(&self) -> T;

    /// Replaces the bounds. Reversed pairs are sorted and infinities clamped;
    /// boolean generators keep flipping a fair coin.
    fn set_bounds(&self, from: T, to: T);

    /// Replaces the bounds with values that may exceed `T`'s range, clamping
    /// them to `T::MIN` and `T::MAX`.
    fn set_bounds_saturating(&self, from: T::Wide, to: T::Wide) {
        self.set_bounds(T::saturate(from), T::saturate(to));
    }

    /// Draws a fresh seed from the entropy source and restarts the engine.
    ///
    /// # Errors
    ///
    /// Returns `RngError::Entropy` if the entropy source fails. The generator
    /// keeps its previous seed in that case.
    fn try_reseed(&self) -> Result<(), RngError>;

    /// Like [`try_reseed`](Self::try_reseed), for callers that treat entropy
    /// exhaustion as unrecoverable.
    ///
    /// # Panics
    ///
    /// Panics if the entropy source fails.
    fn reseed(&self) {
        if let Err(err) = self.try_reseed() {
            panic!("failed to reseed generator: {err}");
        }
    }

    /// The current effective bounds, read atomically.
    fn bounds(&self) -> Bounds<T>;

    /// The current lower bound.
    fn lower_bound(&self) -> T {
        self.bounds().lower()
    }

    /// The current upper bound.
    fn upper_bound(&self) -> T {
        self.bounds().upper()
    }

    /// The seed the engine was last initialized from.
    fn seed(&self) -> u64;
}
