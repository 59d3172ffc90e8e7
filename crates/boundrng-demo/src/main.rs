//! boundrng demonstration entry point.

use std::error::Error;

use boundrng_core::{BoundedGenerator, BoundedRng};
use tracing_subscriber::EnvFilter;

mod config;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Read configuration from environment.
    let config = config::DemoConfig::from_env()?;
    tracing::info!(lower = config.lower, upper = config.upper, "starting boundrng demo");

    let rng = BoundedRng::<i32>::try_new(config.lower, config.upper)?;
    let value = rng.generate();

    println!(
        "Randomly generated number between {} and {} is: {value}",
        rng.lower_bound(),
        rng.upper_bound()
    );

    Ok(())
}
