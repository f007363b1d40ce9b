//! Artifact Pipelines
//!
//! One submodule per artifact family, all following the same shape: scan (or
//! read the single input), build prompts, generate, parse, write, account.
//! Unit-level faults (one file's generation, parse, or render) are absorbed
//! where they occur; a pipeline only fails when it cannot produce its
//! artifact at all.
//!
//! Each pipeline exposes `run` for production use and `run_with_provider`
//! for callers that inject the generation backend.

pub mod diagram;
pub mod explain;
pub mod usecase;

use std::path::PathBuf;

use crate::ai::CostReport;
use crate::types::TokenUsage;

/// Outcome of a completed pipeline run, consumed by the CLI for reporting
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Artifact files written, in creation order
    pub artifacts: Vec<PathBuf>,
    /// Input files that fed the run, in scan order
    pub files: Vec<String>,
    /// Token usage accumulated over every generation attempt
    pub usage: TokenUsage,
    /// Cost derived from `usage` and the configured rates
    pub cost: CostReport,
    /// Artifact text for console preview, when the artifact is textual
    pub preview: Option<String>,
    /// Analysis summary shown before generation (use-case runs only)
    pub analysis: Option<String>,
    /// Units attempted / units that produced output
    pub units_total: usize,
    pub units_succeeded: usize,
}
