//! Configuration schema definitions.
//!
//! This module defines the configuration sections, their defaults and the
//! environment variables each field is read from. All sections derive
//! `Serialize`; secrets are skipped.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Lowest accepted listen port.
pub const MIN_PORT: i64 = 1;
/// Highest accepted listen port.
pub const MAX_PORT: i64 = 65535;
/// Lowest accepted upstream request timeout, in seconds.
pub const MIN_TIMEOUT_SECS: i64 = 1;
/// Default upstream request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: i64 = 30;

/// Environment variable names.
pub mod vars {
    pub const PORT: &str = "PORT";
    pub const HOST: &str = "HOST";
    pub const SERVER_READ_TIMEOUT: &str = "SERVER_READ_TIMEOUT";
    pub const SERVER_WRITE_TIMEOUT: &str = "SERVER_WRITE_TIMEOUT";
    pub const SERVER_IDLE_TIMEOUT: &str = "SERVER_IDLE_TIMEOUT";
    pub const SERVER_GRACEFUL_SHUTDOWN_TIMEOUT: &str = "SERVER_GRACEFUL_SHUTDOWN_TIMEOUT";

    pub const API_KEYS: &str = "API_KEYS";
    pub const START_INDEX: &str = "START_INDEX";
    pub const BLACKLIST_THRESHOLD: &str = "BLACKLIST_THRESHOLD";
    pub const MAX_RETRIES: &str = "MAX_RETRIES";

    pub const OPENAI_BASE_URL: &str = "OPENAI_BASE_URL";
    pub const REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";
    pub const RESPONSE_TIMEOUT: &str = "RESPONSE_TIMEOUT";
    pub const IDLE_CONN_TIMEOUT: &str = "IDLE_CONN_TIMEOUT";

    pub const AUTH_KEY: &str = "AUTH_KEY";

    pub const ENABLE_CORS: &str = "ENABLE_CORS";
    pub const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
    pub const ALLOWED_METHODS: &str = "ALLOWED_METHODS";
    pub const ALLOWED_HEADERS: &str = "ALLOWED_HEADERS";
    pub const ALLOW_CREDENTIALS: &str = "ALLOW_CREDENTIALS";

    pub const MAX_CONCURRENT_REQUESTS: &str = "MAX_CONCURRENT_REQUESTS";
    pub const ENABLE_GZIP: &str = "ENABLE_GZIP";

    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    pub const LOG_ENABLE_FILE: &str = "LOG_ENABLE_FILE";
    pub const LOG_FILE_PATH: &str = "LOG_FILE_PATH";
    pub const LOG_ENABLE_REQUEST: &str = "LOG_ENABLE_REQUEST";
}

pub(crate) const DEFAULT_BASE_URLS: &[&str] = &["https://api.openai.com"];
pub(crate) const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["*"];
pub(crate) const DEFAULT_ALLOWED_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "OPTIONS"];
pub(crate) const DEFAULT_ALLOWED_HEADERS: &[&str] = &["*"];

fn secs(value: i64) -> Duration {
    Duration::from_secs(u64::try_from(value).unwrap_or(0))
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Root configuration snapshot.
#[derive(Debug, Clone, Serialize, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub keys: KeysConfig,
    pub upstream: UpstreamConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub performance: PerformanceConfig,
    pub log: LogConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerConfig {
    /// Listen port.
    pub port: i64,

    /// Bind host (e.g., "0.0.0.0").
    pub host: String,

    /// Read timeout in seconds.
    pub read_timeout_secs: i64,

    /// Write timeout in seconds.
    pub write_timeout_secs: i64,

    /// Keep-alive idle timeout in seconds.
    pub idle_timeout_secs: i64,

    /// Time allowed for in-flight requests to drain on shutdown, in seconds.
    pub graceful_shutdown_timeout_secs: i64,
}

impl ServerConfig {
    /// `host:port` form suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn read_timeout(&self) -> Duration {
        secs(self.read_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        secs(self.write_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        secs(self.idle_timeout_secs)
    }

    pub fn graceful_shutdown_timeout(&self) -> Duration {
        secs(self.graceful_shutdown_timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 7860,
            host: "0.0.0.0".to_string(),
            read_timeout_secs: 120,
            write_timeout_secs: 1800,
            idle_timeout_secs: 120,
            graceful_shutdown_timeout_secs: 60,
        }
    }
}

/// Upstream API key pool configuration.
///
/// An empty key list is accepted here; the key pool rejects it.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct KeysConfig {
    #[serde(skip_serializing)]
    pub api_keys: Vec<String>,

    /// Index of the first key handed out.
    pub start_index: i64,

    /// Errors tolerated before a key is blacklisted.
    pub blacklist_threshold: i64,

    /// Retries with a different key before giving up.
    pub max_retries: i64,
}

impl fmt::Debug for KeysConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeysConfig")
            .field("api_keys", &format_args!("[{} redacted]", self.api_keys.len()))
            .field("start_index", &self.start_index)
            .field("blacklist_threshold", &self.blacklist_threshold)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            api_keys: Vec::new(),
            start_index: 0,
            blacklist_threshold: 1,
            max_retries: 3,
        }
    }
}

/// Upstream API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpstreamConfig {
    /// Candidate base URLs, rotated round-robin.
    pub base_urls: Vec<String>,

    /// Upstream request timeout in seconds.
    pub request_timeout_secs: i64,

    /// Time to wait for response headers, in seconds.
    pub response_timeout_secs: i64,

    /// Idle pooled connection lifetime, in seconds.
    pub idle_conn_timeout_secs: i64,
}

impl UpstreamConfig {
    pub fn request_timeout(&self) -> Duration {
        secs(self.request_timeout_secs)
    }

    pub fn response_timeout(&self) -> Duration {
        secs(self.response_timeout_secs)
    }

    pub fn idle_conn_timeout(&self) -> Duration {
        secs(self.idle_conn_timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_urls: owned(DEFAULT_BASE_URLS),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            response_timeout_secs: 30,
            idle_conn_timeout_secs: 120,
        }
    }
}

/// Client authentication.
///
/// There is no stored enabled flag: authentication is on exactly when a
/// key is configured.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthConfig {
    #[serde(skip_serializing)]
    pub key: String,
}

impl AuthConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn enabled(&self) -> bool {
        !self.key.is_empty()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("key", &if self.enabled() { "<redacted>" } else { "" })
            .field("enabled", &self.enabled())
            .finish()
    }
}

/// CORS policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: owned(DEFAULT_ALLOWED_ORIGINS),
            allowed_methods: owned(DEFAULT_ALLOWED_METHODS),
            allowed_headers: owned(DEFAULT_ALLOWED_HEADERS),
            allow_credentials: false,
        }
    }
}

/// Request handling limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceConfig {
    /// Maximum requests processed at once (backpressure).
    pub max_concurrent_requests: i64,

    /// Compress responses with gzip.
    pub enable_gzip: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            max_concurrent_requests: 100,
            enable_gzip: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Output format ("text" or "json").
    pub format: String,

    /// Also write logs to `file_path`.
    pub enable_file: bool,

    pub file_path: String,

    /// Emit one event per proxied request.
    pub enable_request: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            enable_file: false,
            file_path: "logs/app.log".to_string(),
            enable_request: true,
        }
    }
}
