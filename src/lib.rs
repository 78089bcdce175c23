//! Configuration core for the OpenAI-compatible relay.

pub mod config;
pub mod lifecycle;
pub mod load_balancer;
pub mod observability;

pub use config::{ConfigManager, ConfigValidationError};
pub use lifecycle::bootstrap;
