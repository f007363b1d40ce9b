use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use console::style;

use crate::ai::CostReport;
use crate::types::TokenUsage;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// Raw artifact text, dimmed so it reads as a preview rather than status
    pub fn preview(&self, text: &str) {
        println!("{}", style(text).dim());
    }

    /// Processed-file table shown after a scan
    pub fn file_table(&self, paths: &[&str]) {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![Cell::new("Processed Files")]);
        for path in paths {
            table.add_row(vec![Cell::new(path)]);
        }
        println!("{table}");
    }

    /// Token usage and estimated cost summary for a finished run
    pub fn usage_table(&self, usage: &TokenUsage, cost: &CostReport) {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_header(vec![Cell::new("Metric"), Cell::new("Value")]);
        table.add_row(vec![
            Cell::new("Input Tokens"),
            Cell::new(usage.input_tokens.to_string()),
        ]);
        table.add_row(vec![
            Cell::new("Output Tokens"),
            Cell::new(usage.output_tokens.to_string()),
        ]);
        table.add_row(vec![
            Cell::new("Total Tokens"),
            Cell::new(usage.total().to_string()),
        ]);
        table.add_row(vec![
            Cell::new("Estimated Cost"),
            Cell::new(format!("${:.4}", cost.total_cost)),
        ]);
        println!("{table}");
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
