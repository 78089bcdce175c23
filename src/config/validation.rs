//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation of the assembled snapshot (parsing never fails)
//! - Validate value ranges (port, thresholds, timeouts, concurrency)
//! - Validate upstream base URLs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: &AppConfig → Result<(), ConfigValidationError>
//! - Runs before config is accepted into the system
//! - The API key list may be empty here; the key pool enforces that

use thiserror::Error;
use url::Url;

use crate::config::error::ConfigValidationError;
use crate::config::schema::{AppConfig, MAX_PORT, MIN_PORT, MIN_TIMEOUT_SECS};

/// A single configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("port must be between {}-{}", MIN_PORT, MAX_PORT)]
    PortOutOfRange(i64),

    #[error("start index cannot be less than 0")]
    StartIndex,

    #[error("blacklist threshold cannot be less than 1")]
    BlacklistThreshold,

    #[error("request timeout cannot be less than {}s", MIN_TIMEOUT_SECS)]
    RequestTimeout(i64),

    #[error("at least one upstream API URL is required")]
    NoUpstream,

    #[error("invalid upstream API URL format: {0}")]
    InvalidUpstreamUrl(String),

    #[error("max concurrent requests cannot be less than 1")]
    MaxConcurrentRequests,
}

/// Check a candidate snapshot. Every check runs; all failures are returned together.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigValidationError> {
    let mut errors = Vec::new();

    if !(MIN_PORT..=MAX_PORT).contains(&config.server.port) {
        errors.push(ValidationError::PortOutOfRange(config.server.port));
    }

    if config.keys.start_index < 0 {
        errors.push(ValidationError::StartIndex);
    }

    if config.keys.blacklist_threshold < 1 {
        errors.push(ValidationError::BlacklistThreshold);
    }

    if config.upstream.request_timeout_secs < MIN_TIMEOUT_SECS {
        errors.push(ValidationError::RequestTimeout(
            config.upstream.request_timeout_secs,
        ));
    }

    if config.upstream.base_urls.is_empty() {
        errors.push(ValidationError::NoUpstream);
    }
    for base_url in &config.upstream.base_urls {
        if !is_valid_base_url(base_url) {
            errors.push(ValidationError::InvalidUpstreamUrl(base_url.clone()));
        }
    }

    if config.performance.max_concurrent_requests < 1 {
        errors.push(ValidationError::MaxConcurrentRequests);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigValidationError::new(errors))
    }
}

/// A base URL must parse and name a host.
fn is_valid_base_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_port(port: i64) -> AppConfig {
        let mut config = AppConfig::default();
        config.server.port = port;
        config
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_port_bounds() {
        for port in [0, 65536, -1] {
            let err = validate_config(&with_port(port)).unwrap_err();
            assert_eq!(err.violations(), &[ValidationError::PortOutOfRange(port)]);
            assert_eq!(err.messages(), vec!["port must be between 1-65535"]);
        }
        for port in [1, 7860, 65535] {
            assert!(validate_config(&with_port(port)).is_ok(), "port {}", port);
        }
    }

    #[test]
    fn test_empty_upstream_list() {
        let mut config = AppConfig::default();
        config.upstream.base_urls.clear();

        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.violations(), &[ValidationError::NoUpstream]);
    }

    #[test]
    fn test_malformed_upstream_is_named() {
        let mut config = AppConfig::default();
        config.upstream.base_urls = vec![
            "https://a.example.com".into(),
            "not a url".into(),
            "http://10.0.0.2:8080/v1".into(),
        ];

        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.messages(),
            vec!["invalid upstream API URL format: not a url"]
        );
    }

    #[test]
    fn test_url_without_host_is_rejected() {
        assert!(is_valid_base_url("https://api.openai.com"));
        assert!(!is_valid_base_url("mailto:ops@example.com"));
        assert!(!is_valid_base_url("api.openai.com"));
        assert!(!is_valid_base_url("http://"));
    }

    #[test]
    fn test_threshold_timeout_and_concurrency() {
        let mut config = AppConfig::default();
        config.keys.blacklist_threshold = 0;
        config.upstream.request_timeout_secs = 0;
        config.performance.max_concurrent_requests = 0;

        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.messages(),
            vec![
                "blacklist threshold cannot be less than 1",
                "request timeout cannot be less than 1s",
                "max concurrent requests cannot be less than 1",
            ]
        );
    }

    #[test]
    fn test_aggregates_every_violation() {
        let mut config = with_port(70000);
        config.keys.start_index = -1;
        config.upstream.base_urls.clear();

        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.violations(),
            &[
                ValidationError::PortOutOfRange(70000),
                ValidationError::StartIndex,
                ValidationError::NoUpstream,
            ]
        );
    }

    #[test]
    fn test_empty_api_keys_accepted() {
        let config = AppConfig::default();
        assert!(config.keys.api_keys.is_empty());
        assert!(validate_config(&config).is_ok());
    }
}
