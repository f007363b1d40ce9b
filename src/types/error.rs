//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Error Taxonomy
//!
//! - **Config**: missing directory or credential - fatal, abort before any
//!   network cost
//! - **NoInput**: the scan matched zero candidate files - fatal
//! - **Io**: unreadable file or undecodable bytes - recoverable inside the
//!   scanner (skip the file), fatal only when an artifact cannot be written
//! - **LlmApi**: network fault, auth rejection, empty completion - recoverable
//!   at the unit level
//! - **Parse**: response missing its structural boundary - recoverable at the
//!   unit level
//! - **Render**: image rendering failed - recoverable, omit the visual
//!
//! ## Design Principles
//!
//! - Single unified error type (CodeloreError) for the entire application
//! - `is_fatal` routes run-terminating errors apart from unit-local ones
//! - No panic/unwrap in non-test code

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodeloreError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors (fatal)
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("No candidate files found under {0}")]
    NoInput(PathBuf),

    // -------------------------------------------------------------------------
    // Unit-Level Errors (absorbed and logged where they occur)
    // -------------------------------------------------------------------------
    #[error("LLM API error: {0}")]
    LlmApi(String),

    #[error("Parse error for {unit}: {reason}")]
    Parse { unit: String, reason: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Template error: {0}")]
    Template(String),
}

impl CodeloreError {
    /// Create a parse error for a named unit
    pub fn parse(unit: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            unit: unit.into(),
            reason: reason.into(),
        }
    }

    /// Fatal errors terminate the whole run; everything else is absorbed at
    /// the unit where it occurred.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::NoInput(_))
    }

    /// Whether a generation attempt hitting this error is worth retrying.
    /// Auth and configuration problems will not resolve on their own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::LlmApi(msg) => {
                let lower = msg.to_lowercase();
                !(lower.contains("401")
                    || lower.contains("403")
                    || lower.contains("unauthorized")
                    || lower.contains("api key"))
            }
            Self::Json(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodeloreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_routing() {
        assert!(CodeloreError::Config("missing key".into()).is_fatal());
        assert!(CodeloreError::NoInput(PathBuf::from("/tmp/empty")).is_fatal());
        assert!(!CodeloreError::LlmApi("503".into()).is_fatal());
        assert!(!CodeloreError::parse("a.ts", "no boundary").is_fatal());
        assert!(!CodeloreError::Render("font".into()).is_fatal());
    }

    #[test]
    fn test_retryable_classification() {
        assert!(CodeloreError::LlmApi("overloaded (529)".into()).is_retryable());
        assert!(!CodeloreError::LlmApi("invalid api key (401)".into()).is_retryable());
        assert!(!CodeloreError::Config("bad".into()).is_retryable());
    }

    #[test]
    fn test_parse_display() {
        let err = CodeloreError::parse("src/user.ts", "missing blank-line boundary");
        assert_eq!(
            err.to_string(),
            "Parse error for src/user.ts: missing blank-line boundary"
        );
    }
}
