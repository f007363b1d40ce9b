//! Explain Command
//!
//! Generates per-file explanations with code screenshots and assembles the
//! composite document.

use std::path::PathBuf;

use tokio::runtime::Runtime;

use super::report_summary;
use crate::cli::Output;
use crate::config::Config;
use crate::pipeline;
use crate::types::Result;

pub fn run(config: &Config, dir: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let out = Output::new();
    out.header("Code Explanation Generator");

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
    let summary = rt.block_on(pipeline::explain::run(&config, &project_dir))?;

    if summary.units_succeeded < summary.units_total {
        out.warning(&format!(
            "Explained {}/{} files; check logs for skipped units",
            summary.units_succeeded, summary.units_total
        ));
    } else {
        out.success(&format!("Explained all {} files", summary.units_total));
    }

    report_summary(&out, &summary);
    Ok(())
}
