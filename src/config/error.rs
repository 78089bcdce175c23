//! Configuration error types.

use thiserror::Error;

use crate::config::validation::ValidationError;

/// Every violation found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("configuration validation failed: {}", join_messages(.violations))]
pub struct ConfigValidationError {
    violations: Vec<ValidationError>,
}

impl ConfigValidationError {
    pub fn new(violations: Vec<ValidationError>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }

    /// Human-readable message per violation, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

fn join_messages(violations: &[ValidationError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised while bringing configuration up at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),

    #[error("failed to initialise logging: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_all_violations() {
        let err = ConfigValidationError::new(vec![
            ValidationError::StartIndex,
            ValidationError::NoUpstream,
        ]);
        assert_eq!(
            err.to_string(),
            "configuration validation failed: start index cannot be less than 0; \
             at least one upstream API URL is required"
        );
        assert_eq!(err.messages().len(), 2);
    }
}
