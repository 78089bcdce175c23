//! Environment access.
//!
//! # Responsibilities
//! - Merge the optional override file into the process environment
//! - Abstract variable lookup so the assembler can run against any source

use std::collections::HashMap;
use std::path::Path;

/// Default override file, resolved against the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// A source of configuration variables.
pub trait EnvSource {
    /// Look up a variable. `None` and an empty string both mean "absent".
    fn var(&self, key: &str) -> Option<String>;

    /// Look up a variable, mapping absence to the empty string.
    fn raw(&self, key: &str) -> String {
        self.var(key).unwrap_or_default()
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Merge `KEY=value` lines from `path` into the process environment.
///
/// The whole file is parsed before anything is applied, so a malformed
/// file changes nothing. Variables already set are left untouched. A
/// missing or unreadable file is reported at info level and otherwise
/// ignored. Returns whether the file was applied.
pub fn load_env_file(path: &Path) -> bool {
    let entries = match read_env_file(path) {
        Ok(entries) => entries,
        Err(e) if e.not_found() => {
            tracing::info!(
                path = %path.display(),
                "No override file found; create one to configure via file"
            );
            return false;
        }
        Err(e) => {
            tracing::info!(path = %path.display(), error = %e, "Override file not applied");
            return false;
        }
    };

    for (key, value) in entries {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(key, value);
        }
    }
    tracing::info!(path = %path.display(), "Loaded environment override file");
    true
}

fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, dotenvy::Error> {
    dotenvy::from_path_iter(path)?.collect()
}
