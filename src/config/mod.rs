//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! override file (.env, optional)
//!     → env.rs (merge into process environment, never overwriting)
//!     → loader.rs (assemble sections via parse.rs, defaults on absence)
//!     → validation.rs (range and URL checks, every violation collected)
//!     → ConfigManager (validated, immutable)
//!     → shared via Arc to all subsystems
//!
//! Per request:
//!     ConfigManager::upstream_config
//!     → round-robin over upstream base URLs (lock-free cursor)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so an empty environment is valid
//! - Parsing is lenient and never fails; validation is strict

pub mod env;
pub mod error;
pub mod loader;
pub mod manager;
pub mod parse;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigValidationError};
pub use manager::{ConfigManager, ConfigSummary, UpstreamSelection};
pub use schema::{
    AppConfig, AuthConfig, CorsConfig, KeysConfig, LogConfig, PerformanceConfig, ServerConfig,
    UpstreamConfig,
};
pub use validation::ValidationError;
