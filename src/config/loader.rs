//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Project config (.codelore/config.toml)
//! 3. Environment variables (CODELORE_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::types::Config;
use crate::types::{CodeloreError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain:
    /// defaults → project file → env vars
    pub fn load() -> Result<Config> {
        Self::load_with_project_file(&Self::project_config_path())
    }

    /// Load configuration from an explicit config file path
    pub fn load_from_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(CodeloreError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::load_with_project_file(path)
    }

    fn load_with_project_file(path: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if path.exists() {
            debug!("Loading project config from: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        // CODELORE_LLM_MODEL -> llm.model
        figment = figment.merge(Env::prefixed("CODELORE_").split('_').lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| CodeloreError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Default path to the project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".codelore/config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.llm.provider, "anthropic");
        assert!(config.scan.extensions.contains(&"ts".to_string()));
    }

    #[test]
    fn test_load_from_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[llm]
provider = "openai"
max_retries = 5

[pricing]
input_per_mtok = 3.0
output_per_mtok = 15.0
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.max_retries, 5);
        assert_eq!(config.pricing.input_per_mtok, 3.0);
        // Untouched sections keep their defaults
        assert_eq!(config.llm.timeout_secs, 300);
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = ConfigLoader::load_from_file(Path::new("/no/such/config.toml")).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_invalid_values_rejected_after_merge() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[llm]\ntemperature = 9.5\n").unwrap();
        assert!(ConfigLoader::load_from_file(&path).is_err());
    }
}
