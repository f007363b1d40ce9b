//! Source Symbol Analysis
//!
//! Lightweight regex extraction over a single file, producing the textual
//! analysis summary the use-case prompt consumes. Not a parser: the patterns
//! match surface syntax (async method headers, Prisma model headers) and are
//! deliberately tolerant of formatting.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Prefixes that classify a controller method as a conventional CRUD entry
const CRUD_PREFIXES: [&str; 4] = ["create", "get", "update", "delete"];

/// Preview length used for files with no recognized structure
const UNKNOWN_PREVIEW_CHARS: usize = 200;

fn controller_method_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"async\s+(\w+)\s*\([^)]*\)\s*\{").expect("valid method pattern")
    })
}

fn schema_model_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"model\s+(\w+)\s*\{").expect("valid model pattern"))
}

/// Category assigned to an extracted controller operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Name begins with a conventional CRUD prefix
    Crud,
    /// Everything else (search, getPaginated-style specials fall under Crud
    /// by prefix; this catches genuinely bespoke operations)
    Specific,
}

/// One extracted controller operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub kind: OperationKind,
}

impl Operation {
    fn classify(name: String) -> Self {
        let kind = if CRUD_PREFIXES.iter().any(|p| name.starts_with(p)) {
            OperationKind::Crud
        } else {
            OperationKind::Specific
        };
        Self { name, kind }
    }
}

/// Analyze a single file's content by its name, producing the summary text
/// the use-case template expects. Every file produces a summary; files with
/// no recognized structure get a short content preview instead.
pub fn analyze_file(file_name: &str, content: &str) -> String {
    let base = Path::new(file_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());

    if base.contains("Controller") {
        let operations = extract_operations(content);
        debug!("Extracted {} operations from {}", operations.len(), base);
        let rendered: Vec<String> = operations
            .iter()
            .map(|op| match op.kind {
                OperationKind::Crud => format!("CRUD Operation: {}", op.name),
                OperationKind::Specific => format!("Specific Operation: {}", op.name),
            })
            .collect();
        format!("Controller: {}\nOperations: {}", base, rendered.join(", "))
    } else if base == "schema.prisma" {
        let models = extract_models(content);
        debug!("Extracted {} models from {}", models.len(), base);
        format!("Prisma Schema Models: {}", models.join(", "))
    } else {
        let preview: String = content.chars().take(UNKNOWN_PREVIEW_CHARS).collect();
        format!("Unknown file type: {}\nContent preview: {}...", base, preview)
    }
}

/// Extract async method names from controller source, in order of appearance
pub fn extract_operations(content: &str) -> Vec<Operation> {
    controller_method_pattern()
        .captures_iter(content)
        .map(|capture| Operation::classify(capture[1].to_string()))
        .collect()
}

/// Extract model names from a Prisma schema, in order of appearance
pub fn extract_models(content: &str) -> Vec<String> {
    schema_model_pattern()
        .captures_iter(content)
        .map(|capture| capture[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTROLLER: &str = r#"
export class ProjectController {
    async createProject(req: Request, res: Response) {
        return this.service.create(req.body);
    }

    async getById(req: Request, res: Response) {
        return this.service.find(req.params.id);
    }

    async search(req: Request, res: Response) {
        return this.service.search(req.query);
    }
}
"#;

    #[test]
    fn test_controller_operations_classified() {
        let operations = extract_operations(CONTROLLER);
        assert_eq!(operations.len(), 3);
        assert_eq!(operations[0].name, "createProject");
        assert_eq!(operations[0].kind, OperationKind::Crud);
        assert_eq!(operations[1].name, "getById");
        assert_eq!(operations[1].kind, OperationKind::Crud);
        assert_eq!(operations[2].name, "search");
        assert_eq!(operations[2].kind, OperationKind::Specific);
    }

    #[test]
    fn test_controller_summary_format() {
        let summary = analyze_file("src/controllers/ProjectController.ts", CONTROLLER);
        assert!(summary.starts_with("Controller: ProjectController.ts"));
        assert!(summary.contains("CRUD Operation: createProject"));
        assert!(summary.contains("Specific Operation: search"));
    }

    #[test]
    fn test_schema_models_extracted() {
        let schema = "model User {\n  id Int @id\n}\n\nmodel Post {\n  id Int @id\n}\n";
        assert_eq!(extract_models(schema), vec!["User", "Post"]);

        let summary = analyze_file("prisma/schema.prisma", schema);
        assert_eq!(summary, "Prisma Schema Models: User, Post");
    }

    #[test]
    fn test_unknown_file_gets_preview() {
        let summary = analyze_file("notes.txt", "just some text");
        assert!(summary.starts_with("Unknown file type: notes.txt"));
        assert!(summary.contains("just some text"));
    }

    #[test]
    fn test_preview_truncates_long_content() {
        let long = "x".repeat(5000);
        let summary = analyze_file("big.txt", &long);
        assert!(summary.len() < 300);
    }

    #[test]
    fn test_no_operations_in_plain_source() {
        assert!(extract_operations("const x = 1;\nfunction f() {}").is_empty());
    }
}
