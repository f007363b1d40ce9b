//! Relationship Diagram Pipeline
//!
//! Whole-tree analysis: every accepted source file and schema descriptor is
//! aggregated into a single prompt, and the one completion is the artifact.
//! There is exactly one generation unit, so a failed or empty completion
//! fails the run.

use std::path::Path;

use tracing::info;

use super::RunSummary;
use crate::ai::{create_provider, run_generation, CostReport, SharedProvider, TokenCounter};
use crate::config::Config;
use crate::parse::require_artifact_text;
use crate::prompt::templates;
use crate::scanner::{aggregate, FileScanner};
use crate::types::{CodeloreError, Result};
use crate::writer;

pub async fn run(config: &Config, project_dir: &Path) -> Result<RunSummary> {
    let provider = create_provider(&config.llm)?;
    run_with_provider(config, project_dir, provider).await
}

pub async fn run_with_provider(
    config: &Config,
    project_dir: &Path,
    provider: SharedProvider,
) -> Result<RunSummary> {
    let scan = FileScanner::new(project_dir, config.scan.clone()).scan()?;
    if scan.is_empty() {
        return Err(CodeloreError::NoInput(project_dir.to_path_buf()));
    }
    info!("Read {} files (including schema descriptors)", scan.len());

    let typescript_content = aggregate::concatenated_sources(&scan);
    let prisma_schema = aggregate::schema_payload(&scan);
    let request = templates::diagram().render(&[
        ("typescript_content", typescript_content.as_str()),
        ("prisma_schema", prisma_schema.as_str()),
    ])?;

    let counter = TokenCounter::default();
    let result = run_generation(provider.as_ref(), &request, &counter).await;
    let diagram = require_artifact_text("class diagram", &result.raw_text)?;

    writer::ensure_output_dir(&config.output.dir)?;
    let artifact = writer::write_diagram(&config.output.dir, diagram)?;

    Ok(RunSummary {
        artifacts: vec![artifact],
        files: scan.paths().iter().map(|p| p.to_string()).collect(),
        usage: result.usage,
        cost: CostReport::calculate(result.usage, &config.pricing),
        preview: Some(diagram.to_string()),
        analysis: None,
        units_total: 1,
        units_succeeded: 1,
    })
}
