//! Core types shared across the pipeline

pub mod error;
pub mod record;

pub use error::{CodeloreError, Result};
pub use record::{
    FileKind, FileRecord, GenerationRequest, GenerationResult, ParsedExplanation, ScanResult,
    TokenUsage,
};
