//! Application configuration loaded from environment variables.

use std::env;

use posts_shared::DEFAULT_API_URL;

use crate::telemetry::TelemetryConfig;

/// Where posts are read from and written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Remote REST collection.
    Rest { base_url: String },
    /// Process-local store seeded with sample posts.
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: Backend,
    /// Filter text already typed in when the screen opens.
    pub initial_filter: String,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    ///
    /// `POSTS_BACKEND=memory` selects the in-memory store, otherwise
    /// `POSTS_API_URL` (default: the public demo API) is used.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("POSTS_BACKEND").map(|v| v.to_lowercase()) {
            Some(kind) if kind == "memory" => Backend::Memory,
            _ => Backend::Rest {
                base_url: lookup("POSTS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            },
        };

        Self {
            backend,
            initial_filter: lookup("POSTS_FILTER").unwrap_or_default(),
            telemetry: TelemetryConfig::from_lookup(&lookup),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_public_api() {
        let config = config_from(&[]);
        assert_eq!(
            config.backend,
            Backend::Rest {
                base_url: DEFAULT_API_URL.to_string()
            }
        );
        assert!(config.initial_filter.is_empty());
        assert!(!config.telemetry.json_logs);
    }

    #[test]
    fn test_reads_overrides() {
        let config = config_from(&[
            ("POSTS_API_URL", "http://localhost:3000/posts"),
            ("POSTS_FILTER", "2"),
            ("LOG_FORMAT", "JSON"),
        ]);
        assert_eq!(
            config.backend,
            Backend::Rest {
                base_url: "http://localhost:3000/posts".to_string()
            }
        );
        assert_eq!(config.initial_filter, "2");
        assert!(config.telemetry.json_logs);
    }

    #[test]
    fn test_memory_backend_ignores_api_url() {
        let config = config_from(&[
            ("POSTS_BACKEND", "Memory"),
            ("POSTS_API_URL", "http://localhost:3000/posts"),
        ]);
        assert_eq!(config.backend, Backend::Memory);
    }
}
