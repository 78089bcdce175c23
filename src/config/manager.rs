//! Process-wide configuration manager.
//!
//! # Responsibilities
//! - Own the validated snapshot for the lifetime of the process
//! - Hand out per-section copies to the rest of the system
//! - Rotate upstream base URLs for each request
//!
//! # Design Decisions
//! - Accessors return clones; nothing outside can mutate the snapshot
//! - The round-robin cursor is the only mutable state and is lock-free

use std::ops::Deref;
use std::path::Path;

use serde::Serialize;

use crate::config::env::{load_env_file, EnvSource, ProcessEnv};
use crate::config::error::ConfigValidationError;
use crate::config::loader::assemble;
use crate::config::schema::{
    AppConfig, AuthConfig, CorsConfig, KeysConfig, LogConfig, PerformanceConfig, ServerConfig,
    UpstreamConfig,
};
use crate::config::validation::validate_config;
use crate::load_balancer::round_robin::RoundRobin;

/// Validated configuration plus the upstream rotation cursor.
#[derive(Debug)]
pub struct ConfigManager {
    config: AppConfig,
    upstream_cursor: RoundRobin,
}

impl ConfigManager {
    /// Merge `env_file` into the process environment, then load from it.
    pub fn load(env_file: &Path) -> Result<Self, ConfigValidationError> {
        load_env_file(env_file);
        Self::from_source(&ProcessEnv)
    }

    /// Assemble and validate configuration from `env`.
    pub fn from_source(env: &impl EnvSource) -> Result<Self, ConfigValidationError> {
        Self::from_config(assemble(env))
    }

    /// Accept an already assembled snapshot if it passes validation.
    ///
    /// On failure each violation is logged as its own error event.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigValidationError> {
        if let Err(err) = validate_config(&config) {
            tracing::error!(
                violations = err.violations().len(),
                "Configuration validation failed"
            );
            for violation in err.violations() {
                tracing::error!("   - {}", violation);
            }
            return Err(err);
        }

        Ok(Self {
            config,
            upstream_cursor: RoundRobin::new(),
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        self.config.server.clone()
    }

    pub fn keys_config(&self) -> KeysConfig {
        self.config.keys.clone()
    }

    /// Upstream settings plus the next base URL in rotation.
    ///
    /// Advances the shared cursor when more than one base URL is configured.
    pub fn upstream_config(&self) -> UpstreamSelection {
        let base_url = self
            .upstream_cursor
            .next(&self.config.upstream.base_urls)
            .cloned()
            .unwrap_or_default();
        UpstreamSelection {
            base_url,
            config: self.config.upstream.clone(),
        }
    }

    pub fn auth_config(&self) -> AuthConfig {
        self.config.auth.clone()
    }

    pub fn cors_config(&self) -> CorsConfig {
        self.config.cors.clone()
    }

    pub fn performance_config(&self) -> PerformanceConfig {
        self.config.performance.clone()
    }

    pub fn log_config(&self) -> LogConfig {
        self.config.log.clone()
    }

    /// Secret-free overview of the active configuration.
    pub fn summary(&self) -> ConfigSummary {
        let c = &self.config;
        ConfigSummary {
            server_address: c.server.bind_address(),
            api_keys_loaded: c.keys.api_keys.len(),
            start_index: c.keys.start_index,
            blacklist_threshold: c.keys.blacklist_threshold,
            max_retries: c.keys.max_retries,
            upstream_urls: c.upstream.base_urls.clone(),
            request_timeout_secs: c.upstream.request_timeout_secs,
            response_timeout_secs: c.upstream.response_timeout_secs,
            idle_conn_timeout_secs: c.upstream.idle_conn_timeout_secs,
            auth_enabled: c.auth.enabled(),
            cors_enabled: c.cors.enabled,
            max_concurrent_requests: c.performance.max_concurrent_requests,
            gzip_enabled: c.performance.enable_gzip,
            request_logging_enabled: c.log.enable_request,
        }
    }

    /// Log the active configuration at info level.
    pub fn display_config(&self) {
        let s = self.summary();
        tracing::info!("Current Configuration:");
        tracing::info!("   Server: {}", s.server_address);
        tracing::info!("   API Keys loaded: {}", s.api_keys_loaded);
        tracing::info!("   Start index: {}", s.start_index);
        tracing::info!("   Blacklist threshold: {} errors", s.blacklist_threshold);
        tracing::info!("   Max retries: {}", s.max_retries);
        tracing::info!("   Upstream URLs: {}", s.upstream_urls.join(", "));
        tracing::info!("   Request timeout: {}s", s.request_timeout_secs);
        tracing::info!("   Response timeout: {}s", s.response_timeout_secs);
        tracing::info!("   Idle connection timeout: {}s", s.idle_conn_timeout_secs);
        tracing::info!("   Authentication: {}", status(s.auth_enabled));
        tracing::info!("   CORS: {}", status(s.cors_enabled));
        tracing::info!("   Max concurrent requests: {}", s.max_concurrent_requests);
        tracing::info!("   Gzip compression: {}", status(s.gzip_enabled));
        tracing::info!("   Request logging: {}", status(s.request_logging_enabled));
    }
}

/// Upstream settings for one request, with the base URL picked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamSelection {
    pub base_url: String,
    pub config: UpstreamConfig,
}

impl Deref for UpstreamSelection {
    type Target = UpstreamConfig;
    fn deref(&self) -> &Self::Target {
        &self.config
    }
}

fn status(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

/// Configuration overview safe to log or print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigSummary {
    pub server_address: String,
    pub api_keys_loaded: usize,
    pub start_index: i64,
    pub blacklist_threshold: i64,
    pub max_retries: i64,
    pub upstream_urls: Vec<String>,
    pub request_timeout_secs: i64,
    pub response_timeout_secs: i64,
    pub idle_conn_timeout_secs: i64,
    pub auth_enabled: bool,
    pub cors_enabled: bool,
    pub max_concurrent_requests: i64,
    pub gzip_enabled: bool,
    pub request_logging_enabled: bool,
}
