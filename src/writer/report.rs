//! Use-Case Report Artifact

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::info;

use crate::ai::{CostReport, PricingConfig};
use crate::types::{Result, TokenUsage};

/// Persist the use-case specification markdown with its accounting footer.
/// The artifact is named after the analyzed file: `use_case_<stem>.md`.
pub fn write_use_case_report(
    output_dir: &Path,
    analyzed_file: &Path,
    use_case: &str,
    usage: TokenUsage,
    pricing: &PricingConfig,
) -> Result<PathBuf> {
    let stem = analyzed_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string());
    let path = output_dir.join(format!("use_case_{}.md", stem));

    let cost = CostReport::calculate(usage, pricing);
    let content = format!(
        "{}\n\n---\n\nGenerated: {}\nToken usage: {}\nEstimated cost: ${:.4}\n",
        use_case.trim_end(),
        Local::now().format("%Y-%m-%d"),
        usage.total(),
        cost.total_cost,
    );

    std::fs::write(&path, content)?;
    info!("Use case specification saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_name_and_footer() {
        let tmp = tempfile::TempDir::new().unwrap();
        let usage = TokenUsage {
            input_tokens: 12_000,
            output_tokens: 3_000,
        };
        let path = write_use_case_report(
            tmp.path(),
            Path::new("src/controllers/UserController.ts"),
            "# Use Case Specifications\n\n## Create User\n",
            usage,
            &PricingConfig::default(),
        )
        .unwrap();

        assert_eq!(path.file_name().unwrap(), "use_case_UserController.md");
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Use Case Specifications"));
        assert!(written.contains("\n---\n"));
        assert!(written.contains("Token usage: 15000"));
        let expected_cost = CostReport::calculate(usage, &PricingConfig::default()).total_cost;
        assert!(written.contains(&format!("Estimated cost: ${:.4}", expected_cost)));
    }
}
