//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Layered by the loader: built-in defaults, project file, environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ai::cost::PricingConfig;
use crate::constants::{
    DEFAULT_ANTHROPIC_MODEL, DEFAULT_EXTENSIONS, DEFAULT_OUTPUT_DIR, DEFAULT_PHASE_DIRS,
    DEFAULT_RENDER_THEME, DEFAULT_SCHEMA_FILES, DEFAULT_SKIP_DIRS,
};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Project input settings
    pub project: ProjectConfig,

    /// File discovery settings
    pub scan: ScanConfig,

    /// LLM provider settings
    pub llm: LlmConfig,

    /// Per-million-token rates for cost estimation
    pub pricing: PricingConfig,

    /// Artifact output settings
    pub output: OutputConfig,

    /// Code screenshot rendering settings
    pub render: RenderConfig,
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    /// Returns `CodeloreError::Config` on validation failure.
    pub fn validate(&self) -> crate::types::Result<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(crate::types::CodeloreError::Config(format!(
                "llm.temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(crate::types::CodeloreError::Config(
                "llm.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.llm.max_tokens == 0 {
            return Err(crate::types::CodeloreError::Config(
                "llm.max_tokens must be greater than 0".to_string(),
            ));
        }

        self.pricing.validate()?;

        if self.render.font_size == 0 {
            return Err(crate::types::CodeloreError::Config(
                "render.font_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve the input directory: explicit CLI value wins, then the
    /// configured/environment value. Missing everywhere is a fatal
    /// configuration error, detected before any I/O or network cost.
    pub fn resolve_project_dir(&self, cli_dir: Option<PathBuf>) -> crate::types::Result<PathBuf> {
        let dir = cli_dir
            .or_else(|| self.project.directory.clone())
            .ok_or_else(|| {
                crate::types::CodeloreError::Config(
                    "No project directory: pass --dir, set PROJECT_DIRECTORY, or set \
                     [project] directory in .codelore/config.toml"
                        .to_string(),
                )
            })?;

        if !dir.is_dir() {
            return Err(crate::types::CodeloreError::Config(format!(
                "Project directory does not exist: {}",
                dir.display()
            )));
        }

        Ok(dir)
    }
}

// =============================================================================
// Project Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectConfig {
    /// Root of the tree to analyze. Falls back to the PROJECT_DIRECTORY
    /// environment variable via the CLI layer.
    pub directory: Option<PathBuf>,

    /// Display name for reports (defaults to the directory name)
    pub name: Option<String>,
}

// =============================================================================
// Scan Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extensions accepted as source files (without dot)
    pub extensions: Vec<String>,

    /// Exact file names accepted as schema descriptors
    pub schema_files: Vec<String>,

    /// Directory names pruned before descent, wherever they appear
    pub skip_dirs: Vec<String>,

    /// Phase directory names (tests, fixtures, config) excluded from analysis
    pub phase_dirs: Vec<String>,

    /// Extra exclude globs applied to relative paths
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            schema_files: DEFAULT_SCHEMA_FILES.iter().map(|s| s.to_string()).collect(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            phase_dirs: DEFAULT_PHASE_DIRS.iter().map(|s| s.to_string()).collect(),
            exclude: Vec::new(),
        }
    }
}

// =============================================================================
// LLM Configuration
// =============================================================================

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider type: "anthropic" or "openai"
    pub provider: String,

    /// Model name (provider-specific)
    pub model: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Temperature for generation (0.0 = deterministic)
    pub temperature: f32,

    /// Maximum tokens to generate per completion
    pub max_tokens: usize,

    /// Bounded retry count for pipelines that retry (use-case)
    pub max_retries: usize,

    /// API key override. Never serialized to output; the environment
    /// variables ANTHROPIC_API_KEY / OPENAI_API_KEY are the usual source.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// API base URL override (for custom endpoints)
    pub api_base: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "anthropic".to_string(),
            model: Some(DEFAULT_ANTHROPIC_MODEL.to_string()),
            timeout_secs: 300,
            temperature: 0.0,
            max_tokens: 4096,
            max_retries: 2,
            api_key: None,
            api_base: None,
        }
    }
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("max_retries", &self.max_retries)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .finish()
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory artifacts are written into (created if missing)
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

// =============================================================================
// Render Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Syntect theme name (must exist in the default theme set)
    pub theme: String,

    /// Font size in pixels for TTF rendering
    pub font_size: u32,

    /// Explicit font paths tried before the built-in system path list
    pub font_paths: Vec<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_RENDER_THEME.to_string(),
            font_size: 14,
            font_paths: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_temperature_out_of_range() {
        let mut config = Config::default();
        config.llm.temperature = 3.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_pricing_rejected() {
        let mut config = Config::default();
        config.pricing.output_per_mtok = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_project_dir_missing() {
        let config = Config::default();
        let err = config.resolve_project_dir(None).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_resolve_project_dir_cli_wins() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut config = Config::default();
        config.project.directory = Some(PathBuf::from("/nonexistent-default"));
        let resolved = config
            .resolve_project_dir(Some(tmp.path().to_path_buf()))
            .unwrap();
        assert_eq!(resolved, tmp.path());
    }

    #[test]
    fn test_llm_config_debug_redacts_key() {
        let llm = LlmConfig {
            api_key: Some("sk-secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", llm);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("REDACTED"));
    }
}
