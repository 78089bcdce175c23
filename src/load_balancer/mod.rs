//! Load balancing primitives.
//!
//! # Data Flow
//! ```text
//! Request needs an upstream
//!     → ConfigManager::upstream_config
//!     → round_robin.rs (atomic ticket → index into base URL list)
//!     → selected base URL returned with the upstream settings
//! ```
//!
//! # Design Decisions
//! - Selection is a single atomic increment; no locks on the request path
//! - The cursor lives in memory only and restarts at zero

pub mod round_robin;
