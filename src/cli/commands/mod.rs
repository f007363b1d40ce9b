pub mod diagram;
pub mod explain;
pub mod usecase;

use crate::cli::Output;
use crate::pipeline::RunSummary;

/// Longest artifact preview shown in the console before truncation
const PREVIEW_CHARS: usize = 1000;

/// Shared tail of every command: artifact locations and the accounting table
fn report_summary(out: &Output, summary: &RunSummary) {
    for artifact in &summary.artifacts {
        out.success(&format!("Saved {}", artifact.display()));
    }
    out.section("Token Usage and Cost");
    out.usage_table(&summary.usage, &summary.cost);
}

fn preview_of(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let truncated: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncation() {
        assert_eq!(preview_of("short"), "short");

        let long = "y".repeat(2000);
        let shown = preview_of(&long);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 3);
        assert!(shown.ends_with("..."));
    }
}
