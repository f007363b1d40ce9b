//! Response parsing and validation
//!
//! Splits structured completions into their artifact shapes. A response that
//! does not carry the expected structure is a parse error for that unit; the
//! unit is dropped by its pipeline, never silently truncated.

use crate::types::{CodeloreError, ParsedExplanation, Result};

/// Literal label the explanation template asks the model to emit
const CAPTION_LABEL: &str = "Caption:";

/// Split a caption/explanation response at the first blank-line boundary.
///
/// The first segment, minus the literal `Caption:` label, is the caption;
/// everything after the boundary (further blank lines included) is the
/// explanation. A response with no blank-line boundary fails to parse.
pub fn parse_explanation(unit: &str, raw: &str) -> Result<ParsedExplanation> {
    let trimmed = raw.trim();
    let (head, tail) = trimmed.split_once("\n\n").ok_or_else(|| {
        CodeloreError::parse(unit, "response missing blank-line caption/explanation boundary")
    })?;

    let caption = head.trim().trim_start_matches(CAPTION_LABEL).trim();
    let explanation = tail.trim();

    if caption.is_empty() {
        return Err(CodeloreError::parse(unit, "empty caption segment"));
    }
    if explanation.is_empty() {
        return Err(CodeloreError::parse(unit, "empty explanation segment"));
    }

    Ok(ParsedExplanation {
        caption: caption.to_string(),
        explanation: explanation.to_string(),
    })
}

/// Diagram and use-case responses are the artifact verbatim, but an empty
/// completion is a generation failure signal, not an artifact.
pub fn require_artifact_text<'a>(unit: &str, raw: &'a str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CodeloreError::parse(unit, "empty completion"));
    }
    Ok(trimmed)
}
