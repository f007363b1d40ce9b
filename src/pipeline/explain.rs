//! File Explanation Pipeline
//!
//! Per-file generation: each accepted source file is its own unit. A unit
//! that fails generation or parsing is skipped with a warning; a unit whose
//! screenshot fails to render keeps its text and loses only the image. The
//! run fails only when every unit failed.

use std::path::Path;

use tracing::{info, warn};

use super::RunSummary;
use crate::ai::{create_provider, run_generation, CostReport, SharedProvider, TokenCounter};
use crate::config::Config;
use crate::parse::parse_explanation;
use crate::prompt::templates;
use crate::render::{screenshot_rel, CodeImageRenderer};
use crate::scanner::FileScanner;
use crate::types::{CodeloreError, Result, TokenUsage};
use crate::writer::{self, ExplanationSection};

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
    let sources: Vec<_> = scan.sources().collect();
    if sources.is_empty() {
        return Err(CodeloreError::NoInput(project_dir.to_path_buf()));
    }
    info!("Read {} source files", sources.len());

    writer::ensure_output_dir(&config.output.dir)?;
    let renderer = CodeImageRenderer::new(&config.render);
    let counter = TokenCounter::default();
    let template = templates::explanation();

    let mut sections: Vec<ExplanationSection> = Vec::new();
    let mut total_usage = TokenUsage::default();

    for record in &sources {
        let request = template.render(&[
            ("file_name", record.relative_path.as_str()),
            ("file_content", record.content.as_str()),
        ])?;

        let result = run_generation(provider.as_ref(), &request, &counter).await;
        if result.is_empty() {
            warn!("Skipping {}: generation produced no output", record.relative_path);
            continue;
        }

        let parsed = match parse_explanation(&record.relative_path, &result.raw_text) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Skipping {}: {}", record.relative_path, e);
                continue;
            }
        };

        // A unit is billed only once it yields a section; dropped units
        // contribute zero tokens like failed generations.
        total_usage.add(result.usage);

        let rel = screenshot_rel(&record.relative_path);
        let image_path = match renderer.render_to_file(
            &record.relative_path,
            &parsed.caption,
            &record.content,
            &config.output.dir.join(&rel),
        ) {
            Ok(()) => Some(rel),
            Err(e) => {
                warn!("Screenshot failed for {}: {}", record.relative_path, e);
                None
            }
        };

        sections.push(ExplanationSection {
            file_name: record.relative_path.clone(),
            caption: parsed.caption,
            explanation: parsed.explanation,
            image_path,
        });
    }

    if sections.is_empty() {
        return Err(CodeloreError::LlmApi(format!(
            "All {} explanation units failed",
            sources.len()
        )));
    }

    let artifact = writer::write_document(&config.output.dir, &sections)?;
    info!(
        "Explained {}/{} files",
        sections.len(),
        sources.len()
    );

    Ok(RunSummary {
        artifacts: vec![artifact],
        files: sources.iter().map(|r| r.relative_path.clone()).collect(),
        usage: total_usage,
        cost: CostReport::calculate(total_usage, &config.pricing),
        preview: None,
        analysis: None,
        units_total: sources.len(),
        units_succeeded: sections.len(),
    })
}
