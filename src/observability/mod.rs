//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     bootstrap subscriber (stderr, info) while config loads
//!     → logging.rs installs the global subscriber from LogConfig
//!
//! Consumers:
//!     → stdout (text or JSON)
//!     → optional log file
//! ```

pub mod logging;
