//! Demo configuration read from the environment.

use std::num::ParseIntError;

use thiserror::Error;

/// Environment variable holding the lower bound.
pub const LOWER_VAR: &str = "BOUNDRNG_LOWER";
/// Environment variable holding the upper bound.
pub const UPPER_VAR: &str = "BOUNDRNG_UPPER";

const DEFAULT_LOWER: i32 = -400;
const DEFAULT_UPPER: i32 = 400;

/// Configuration errors surfaced at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A bound variable was set but is not a valid `i32`.
    #[error("{name} must be a valid i32: {source}")]
    InvalidBound {
        /// The offending variable.
        name: &'static str,
        /// The parse failure.
        source: ParseIntError,
    },
}

/// Bounds for the demo draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Lower bound (inclusive).
    pub lower: i32,
    /// Upper bound (inclusive).
    pub upper: i32,
}

impl DemoConfig {
    /// Reads `BOUNDRNG_LOWER` and `BOUNDRNG_UPPER`, defaulting to `[-400, 400]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBound` if a variable is set to a non-integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bound = |name: &'static str, default: i32| match lookup(name) {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidBound { name, source }),
            None => Ok(default),
        };

        Ok(Self {
            lower: bound(LOWER_VAR, DEFAULT_LOWER)?,
            upper: bound(UPPER_VAR, DEFAULT_UPPER)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{ConfigError, DemoConfig, LOWER_VAR, UPPER_VAR};

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = DemoConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DemoConfig { lower: -400, upper: 400 });
    }

    #[test]
    fn test_reads_both_bounds() {
        let config =
            DemoConfig::from_lookup(lookup(&[(LOWER_VAR, "-5"), (UPPER_VAR, " 12 ")])).unwrap();
        assert_eq!(config, DemoConfig { lower: -5, upper: 12 });
    }

    #[test]
    fn test_invalid_bound_names_variable() {
        let err = DemoConfig::from_lookup(lookup(&[(UPPER_VAR, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBound { name: UPPER_VAR, .. }));
        assert!(err.to_string().starts_with("BOUNDRNG_UPPER must be a valid i32"));
    }
}
