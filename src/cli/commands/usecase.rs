//! Usecase Command
//!
//! Analyzes a single controller or schema file and generates use-case
//! specifications.

use std::path::PathBuf;

use tokio::runtime::Runtime;

use super::{preview_of, report_summary};
use crate::cli::Output;
use crate::config::Config;
use crate::pipeline;
use crate::types::Result;

pub fn run(config: &Config, file: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let out = Output::new();
    out.header("Use Case Specification Generator");

    let mut config = config.clone();
    if let Some(output) = output {
        config.output.dir = output;
    }
    out.info(&format!("Analyzing: {}", file.display()));

    let rt = Runtime::new()?;
    let summary = rt.block_on(pipeline::usecase::run(&config, &file))?;

    if let Some(analysis) = &summary.analysis {
        out.section("Analysis Result");
        println!("{}", analysis);
    }

    out.success("Use case specifications generated!");
    if let Some(preview) = &summary.preview {
        out.section("Preview");
        out.preview(&preview_of(preview));
    }

    report_summary(&out, &summary);
    Ok(())
}
