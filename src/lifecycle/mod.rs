//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load override file → Assemble → Validate → Logging → Summary
//! ```
//!
//! # Design Decisions
//! - Fail fast: a validation failure aborts startup
//! - Violations are logged before the process exits

pub mod startup;

pub use startup::{bootstrap, Startup};
