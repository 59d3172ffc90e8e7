//! Shared test doubles and utilities for boundrng.

mod entropy;

pub use entropy::{FailingEntropy, FixedEntropy, SequenceEntropy};
