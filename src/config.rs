//! Configuration for the benchmark harness.
//!
//! Supports both environment variables and YAML config file.
//! Environment variables take precedence over config file values.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Benchmark API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the combined benchmark endpoint
    /// (e.g., "http://localhost:4800")
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:4800".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Search defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default number of results requested per backend.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

/// Full application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Benchmark API settings
    pub api: ApiConfig,
    /// Search settings
    pub search: SearchConfig,
}

/// Configuration file structure (YAML format).
#[derive(Debug, Deserialize)]
struct ConfigFile {
    api: Option<ApiFileSection>,
    search: Option<SearchFileSection>,
}

#[derive(Debug, Deserialize)]
struct ApiFileSection {
    base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchFileSection {
    limit: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables and optional config file.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (HYBRID_BENCH_API_BASE, HYBRID_BENCH_LIMIT)
    /// 2. Config file (~/.config/hybrid-bench/config.yaml)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        // Try to load from config file first
        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                config = Self::load_from_file(&config_path)?;
            }
        }

        // Override with environment variables
        if let Ok(base_url) = env::var("HYBRID_BENCH_API_BASE") {
            config.api.base_url = base_url;
        }

        if let Ok(limit) = env::var("HYBRID_BENCH_LIMIT") {
            if let Ok(limit) = limit.parse() {
                config.search.limit = limit;
            }
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;

        let file_config: ConfigFile = serde_yaml::from_str(&content)
            .map_err(|e| BenchError::Config(format!("Failed to parse config file: {}", e)))?;

        let mut config = Config::default();

        if let Some(api) = file_config.api {
            if let Some(base_url) = api.base_url {
                config.api.base_url = base_url;
            }
        }

        if let Some(search) = file_config.search {
            if let Some(limit) = search.limit {
                config.search.limit = limit;
            }
        }

        Ok(config)
    }

    /// Get the default config file path.
    pub fn config_file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "hybrid-bench")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Validate that required configuration is present.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(BenchError::Config(
                "API base URL is required. Set HYBRID_BENCH_API_BASE environment variable or add to config file.".to_string()
            ));
        }

        if self.search.limit == 0 {
            return Err(BenchError::Config(
                "Search limit must be positive.".to_string(),
            ));
        }

        Ok(())
    }

    /// Create a config from an explicit base URL (useful for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:4800");
        assert_eq!(config.search.limit, 5);
    }

    #[test]
    fn test_validate_rejects_empty_base_url() {
        let config = Config::with_base_url("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let mut config = Config::default();
        config.search.limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_base_url() {
        let config = Config::with_base_url("http://bench.example.com:4800");
        assert_eq!(config.api.base_url, "http://bench.example.com:4800");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "api:\n  base_url: http://10.0.0.7:4800\nsearch:\n  limit: 8\n",
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.7:4800");
        assert_eq!(config.search.limit, 8);
    }

    #[test]
    fn test_load_from_file_partial_sections() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api:\n  base_url: http://10.0.0.7:4800\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.7:4800");
        // Missing sections fall back to defaults
        assert_eq!(config.search.limit, 5);
    }
}
