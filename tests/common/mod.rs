//! Shared helpers for integration tests.

use std::collections::HashMap;

use relay_config::ConfigManager;

/// Build an in-memory environment from key/value pairs.
#[allow(dead_code)]
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A manager whose only non-default setting is the upstream list.
#[allow(dead_code)]
pub fn manager_with_upstreams(urls: &str) -> ConfigManager {
    ConfigManager::from_source(&env(&[("OPENAI_BASE_URL", urls)]))
        .expect("upstream list should validate")
}
