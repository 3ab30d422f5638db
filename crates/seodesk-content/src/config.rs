//! Content studio configuration

use std::env;
use std::time::Duration;

use seodesk_core::{Error, Result};

/// Configuration for the template content studio
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Artificial latency applied to each draft call, simulating a remote
    /// backend. Zero disables the delay entirely.
    pub draft_delay: Duration,
}

impl StudioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let millis = match env::var("SEODESK_DRAFT_DELAY_MS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                Error::Configuration(format!(
                    "SEODESK_DRAFT_DELAY_MS must be a whole number of milliseconds, got '{}'",
                    raw
                ))
            })?,
            Err(_) => 600,
        };

        Ok(Self {
            draft_delay: Duration::from_millis(millis),
        })
    }

    /// Create configuration with an explicit delay
    pub fn new(draft_delay: Duration) -> Self {
        Self { draft_delay }
    }

    /// Configuration with no artificial latency, for tests and scripting
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}
