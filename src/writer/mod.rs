//! Artifact Writers
//!
//! One submodule per artifact: the Mermaid diagram file, the composite
//! explanation document, and the use-case report. Writers only format and
//! persist; they never call the network, so an artifact write failure is an
//! I/O error with all generation cost already spent and accounted.

pub mod diagram;
pub mod document;
pub mod report;

pub use diagram::write_diagram;
pub use document::{write_document, ExplanationSection};
pub use report::write_use_case_report;

use std::path::Path;

use crate::types::Result;

/// Create the output directory if needed. Idempotent.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}
