//! Application-wide constants
//!
//! Pricing and scan defaults here are fallbacks only; the effective values
//! come from configuration (`config::types`).

/// Default per-million-token rate for prompt tokens (USD)
pub const DEFAULT_PRICE_PER_MTOK_INPUT: f64 = 0.25;

/// Default per-million-token rate for completion tokens (USD)
pub const DEFAULT_PRICE_PER_MTOK_OUTPUT: f64 = 1.25;

/// Extensions accepted by the scanner allow-list
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// File names accepted as schema descriptors
pub const DEFAULT_SCHEMA_FILES: &[&str] = &["schema.prisma"];

/// Directory names pruned before descent: version-control metadata and
/// dependency/build output
pub const DEFAULT_SKIP_DIRS: &[&str] = &[".git", "node_modules", "dist", "build"];

/// Named phase directories excluded from analysis (tests, fixtures, config)
pub const DEFAULT_PHASE_DIRS: &[&str] = &["tests", "seeders", "config"];

/// Default output directory for artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Anthropic Messages API
pub const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com";
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-haiku-20240307";

/// OpenAI Chat Completions API
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Syntect theme used for code screenshots (present in the default theme set)
pub const DEFAULT_RENDER_THEME: &str = "base16-ocean.dark";
