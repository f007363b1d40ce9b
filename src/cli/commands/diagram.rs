//! Diagram Command
//!
//! Scans the project tree and generates the entity relationship diagram.

use std::path::PathBuf;

use tokio::runtime::Runtime;

use super::{preview_of, report_summary};
use crate::cli::Output;
use crate::config::Config;
use crate::pipeline;
use crate::types::Result;

pub fn run(config: &Config, dir: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let out = Output::new();
    out.header("Class Diagram Generator");

    let mut config = config.clone();
    if let Some(output) = output {
        config.output.dir = output;
    }
    let project_dir = config.resolve_project_dir(dir)?;
    out.info(&format!(
        "Analyzing project directory: {}",
        project_dir.display()
    ));

    let rt = Runtime::new()?;
    let summary = rt.block_on(pipeline::diagram::run(&config, &project_dir))?;

    out.success("Class diagram generated successfully!");
    if let Some(preview) = &summary.preview {
        out.preview(&preview_of(preview));
    }

    let paths: Vec<&str> = summary.files.iter().map(String::as_str).collect();
    out.file_table(&paths);

    report_summary(&out, &summary);
    Ok(())
}
