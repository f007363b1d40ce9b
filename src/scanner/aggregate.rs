//! Content aggregation
//!
//! Combines accepted file records into the payload shapes the prompts need:
//! one concatenated string with delimited per-file headers for whole-tree
//! analysis, or the ordered record list for per-file artifacts. The delimiter
//! embeds the relative path between dash runs, so a file boundary cannot be
//! confused with ordinary source text.

use crate::types::ScanResult;

/// Header preceding each file's content in the concatenated payload
fn delimiter(relative_path: &str) -> String {
    format!("\n\n--- {} ---\n\n", relative_path)
}

/// Concatenate all source records in scan order.
pub fn concatenated_sources(scan: &ScanResult) -> String {
    let mut payload = String::new();
    for record in scan.sources() {
        payload.push_str(&delimiter(&record.relative_path));
        payload.push_str(&record.content);
    }
    payload
}

/// Schema descriptor contents, concatenated in scan order. Usually a single
/// file; multiple descriptors are delimited like sources.
pub fn schema_payload(scan: &ScanResult) -> String {
    let schemas: Vec<_> = scan.schemas().collect();
    match schemas.as_slice() {
        [] => String::new(),
        [only] => only.content.clone(),
        many => {
            let mut payload = String::new();
            for record in many {
                payload.push_str(&delimiter(&record.relative_path));
                payload.push_str(&record.content);
            }
            payload
        }
    }
}
