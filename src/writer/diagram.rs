//! Mermaid diagram artifact

use std::path::{Path, PathBuf};

use tracing::info;

use crate::types::Result;

const DIAGRAM_FILE_NAME: &str = "class_diagram.md";

/// Persist the generated diagram as a Mermaid fenced block so it renders
/// directly in markdown viewers. Returns the artifact path.
pub fn write_diagram(output_dir: &Path, diagram: &str) -> Result<PathBuf> {
    let path = output_dir.join(DIAGRAM_FILE_NAME);
    let content = format!("```mermaid\n{}\n```", diagram.trim());
    std::fs::write(&path, content)?;
    info!("Diagram saved to {}", path.display());
    Ok(path)
}
