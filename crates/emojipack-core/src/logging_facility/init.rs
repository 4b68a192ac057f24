//! Logging initialization module

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Bare registry; tests install their own capture layer
    Test,
}

impl Profile {
    /// Filter directive used when `RUST_LOG` is not set
    pub fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "emojipack=debug",
            Profile::Production | Profile::Test => "emojipack=info",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility with the profile's default filter
///
/// # Example
///
/// ```
/// use emojipack_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    init_with_default(profile, profile.default_directive());
}

/// Initialize the logging facility with an explicit default filter directive
///
/// `RUST_LOG` still takes precedence when set. Only the first call installs a
/// subscriber; later calls are no-ops. Events are written to stderr.
pub fn init_with_default(profile: Profile, directive: &str) {
    INIT_ONCE.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
        };
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter())
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter())
                    .init();
            }
            Profile::Test => {
                tracing_subscriber::registry().init();
            }
        }
    });
}
