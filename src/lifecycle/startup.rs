//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Install logging as described by the validated config
//! - Log the configuration summary
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Config loading runs under a scoped stderr subscriber, since the real
//!   one depends on the config being loaded

use std::path::Path;
use std::sync::Arc;

use tracing::Level;

use crate::config::{ConfigError, ConfigManager};
use crate::observability::logging::{self, LogGuard};

/// Everything produced by a successful startup.
#[derive(Debug)]
pub struct Startup {
    pub manager: Arc<ConfigManager>,
    /// Must outlive all logging.
    pub log_guard: LogGuard,
}

/// Load configuration from the environment (plus `env_file`) and bring up logging.
pub fn bootstrap(env_file: &Path) -> Result<Startup, ConfigError> {
    let bootstrap_logger = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .finish();

    let manager =
        tracing::subscriber::with_default(bootstrap_logger, || ConfigManager::load(env_file))?;

    let log_guard = logging::init(&manager.log_config())?;
    manager.display_config();

    Ok(Startup {
        manager: Arc::new(manager),
        log_guard,
    })
}
