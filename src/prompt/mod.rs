//! Prompt Construction
//!
//! A prompt is a fixed two-role instruction template - a system role carrying
//! persona and task framing, and a human role carrying the literal task
//! instructions - with named `{slot}` substitution points for the aggregated
//! content. The templates themselves (see `templates`) are data: their
//! structural rules can be reworded without touching pipeline logic.

pub mod templates;

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{CodeloreError, GenerationRequest, Result};

fn slot_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Compiled once; the literal is a valid pattern
    PATTERN.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("valid slot regex"))
}

/// Two-role instruction template with named substitution slots
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub system: String,
    pub human: String,
}

impl PromptTemplate {
    pub fn new(system: impl Into<String>, human: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            human: human.into(),
        }
    }

    /// Slot names referenced by either role, in order of first appearance
    pub fn slots(&self) -> Vec<String> {
        let mut names = Vec::new();
        for text in [&self.system, &self.human] {
            for capture in slot_pattern().captures_iter(text) {
                let name = capture[1].to_string();
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Bind values into the template's slots. Every slot the template
    /// declares must be provided; a missing slot is a template error
    /// (configuration problem, not a generation fault).
    pub fn render(&self, values: &[(&str, &str)]) -> Result<GenerationRequest> {
        for slot in self.slots() {
            if !values.iter().any(|(name, _)| *name == slot) {
                return Err(CodeloreError::Template(format!(
                    "No value bound for template slot {{{}}}",
                    slot
                )));
            }
        }

        let mut system = self.system.clone();
        let mut human = self.human.clone();
        for (name, value) in values {
            let marker = format!("{{{}}}", name);
            system = system.replace(&marker, value);
            human = human.replace(&marker, value);
        }

        Ok(GenerationRequest { system, human })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_all_slots() {
        let template = PromptTemplate::new(
            "You document {language} code.",
            "File: {file_name}\n\n{file_content}",
        );
        let request = template
            .render(&[
                ("language", "TypeScript"),
                ("file_name", "a.ts"),
                ("file_content", "const a = 1;"),
            ])
            .unwrap();

        assert_eq!(request.system, "You document TypeScript code.");
        assert!(request.human.contains("File: a.ts"));
        assert!(request.human.contains("const a = 1;"));
    }

    #[test]
    fn test_missing_slot_is_template_error() {
        let template = PromptTemplate::new("system", "content: {payload}");
        let err = template.render(&[]).unwrap_err();
        assert!(matches!(err, CodeloreError::Template(_)));
    }

    #[test]
    fn test_braces_in_substituted_content_survive() {
        let template = PromptTemplate::new("system", "{code}");
        let request = template
            .render(&[("code", "model User { id Int }")])
            .unwrap();
        assert_eq!(request.human, "model User { id Int }");
    }

    #[test]
    fn test_slots_deduplicated_in_order() {
        let template = PromptTemplate::new("{a} and {b}", "{b} then {a} then {c}");
        assert_eq!(template.slots(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_builtin_templates_declare_expected_slots() {
        assert_eq!(
            templates::diagram().slots(),
            vec!["typescript_content", "prisma_schema"]
        );
        assert_eq!(
            templates::explanation().slots(),
            vec!["file_name", "file_content"]
        );
        assert_eq!(templates::use_case().slots(), vec!["analysis"]);
    }

    #[test]
    fn test_use_case_template_carries_operation_guidance() {
        let request = templates::use_case()
            .render(&[("analysis", "Controller: User\nOperations: CRUD Operation: create")])
            .unwrap();
        assert!(request.human.contains("Common considerations for different types of operations"));
        assert!(request.human.contains("Search Operations"));
        assert!(request.human.contains("getPaginated"));
        assert!(request.human.contains("Featured Content"));
    }
}
