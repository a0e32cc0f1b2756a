//! Logger initialisation for the command-line front end
//! Author: kartik4091
//! Created: 2025-06-05

use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when neither `RUST_LOG` nor a CLI level is given
pub const DEFAULT_LEVEL: &str = "warn";

/// Installs a `tracing` subscriber writing to stderr
#[derive(Debug, Clone)]
pub struct Logger {
    level: String,
    initialized: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_level(DEFAULT_LEVEL)
    }

    pub fn with_level(level: &str) -> Self {
        Self {
            level: level.to_string(),
            initialized: false,
        }
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    /// `RUST_LOG` wins over the configured level
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Installs the subscriber once. A subscriber set elsewhere is left in place.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        let installed = fmt()
            .with_env_filter(self.filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .is_ok();
        self.initialized = true;
        if installed {
            debug!("Logger initialized with level: {}", self.level);
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
