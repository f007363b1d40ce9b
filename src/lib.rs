//! Codelore - LLM-Driven Documentation Artifacts for Codebases
//!
//! Scans a project tree, sends the relevant source through an LLM provider,
//! and produces three artifact families:
//!
//! - **Diagram**: a Mermaid entity relationship diagram for the whole tree
//! - **Explain**: per-file explanations with syntax-highlighted screenshots,
//!   assembled into a composite document
//! - **Usecase**: use-case specification tables for a single controller or
//!   schema file
//!
//! Every generation is accounted locally (token counts and estimated cost),
//! and unit-level faults degrade output instead of failing runs.
//!
//! ## Quick Start
//!
//! ```ignore
//! use codelore::config::ConfigLoader;
//! use codelore::pipeline;
//!
//! let config = ConfigLoader::load()?;
//! let summary = pipeline::diagram::run(&config, &project_dir).await?;
//! println!("wrote {:?}, cost ${:.4}", summary.artifacts, summary.cost.total_cost);
//! ```
//!
//! ## Modules
//!
//! - [`scanner`]: file discovery (allow-list, pruning, gitignore) and payload
//!   aggregation
//! - [`ai`]: provider abstraction, local token counting, cost accounting
//! - [`prompt`] / [`parse`]: instruction templates and response parsing
//! - [`render`] / [`writer`]: screenshot rendering and artifact assembly
//! - [`pipeline`]: the three artifact pipelines

pub mod ai;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod parse;
pub mod pipeline;
pub mod prompt;
pub mod render;
pub mod scanner;
pub mod types;
pub mod writer;

// Configuration
pub use config::{Config, ConfigLoader};

// Error Types
pub use types::{CodeloreError, Result};

// Pipeline Re-exports
pub use pipeline::RunSummary;

// AI Re-exports
pub use ai::{CostReport, LlmProvider, PricingConfig, SharedProvider, TokenCounter};

// Scanner Re-exports
pub use scanner::FileScanner;
