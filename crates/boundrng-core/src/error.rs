//! Generator error types.

use thiserror::Error;

/// Errors raised while seeding a generator.
///
/// Bounds never produce errors: they are sorted and clamped instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    /// The entropy source could not produce a seed.
    #[error("entropy source failed: {0}")]
    Entropy(String),
}
