//! Core Pipeline Value Types
//!
//! Records produced by the scanner, requests/results at the generation
//! boundary, and the parsed artifact shapes. All of these are plain values:
//! created once, read downstream, discarded at the end of the run.

use std::path::PathBuf;

/// Classification of an accepted file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Ordinary source file matched by the extension allow-list
    Source,
    /// Named schema descriptor (e.g. `schema.prisma`)
    SchemaDescriptor,
}

/// One file accepted by the scanner, content already read.
/// Immutable once created.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to the scan root, using `/` separators
    pub relative_path: String,
    pub content: String,
    pub kind: FileKind,
}

/// Ordered result of a scan. Record order is traversal order (the walker
/// sorts by file name, so it is stable for a given filesystem state).
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub records: Vec<FileRecord>,
    /// Root the scan was performed against
    pub root: PathBuf,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Relative paths in traversal order
    pub fn paths(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.relative_path.as_str()).collect()
    }

    pub fn sources(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter().filter(|r| r.kind == FileKind::Source)
    }

    pub fn schemas(&self) -> impl Iterator<Item = &FileRecord> {
        self.records
            .iter()
            .filter(|r| r.kind == FileKind::SchemaDescriptor)
    }
}

/// Fully rendered prompt, ready for a provider call. Pure value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// System role: persona and task framing
    pub system: String,
    /// Human role: literal task instructions with content substituted in
    pub human: String,
}

/// Token counts for one generation, computed locally from the rendered
/// prompt and the completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }

    pub fn add(&mut self, other: TokenUsage) {
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
    }
}

/// Outcome of one generation call. An empty `raw_text` signals a failed
/// generation and always carries zero usage, never an error.
#[derive(Debug, Clone, Default)]
pub struct GenerationResult {
    pub raw_text: String,
    pub usage: TokenUsage,
}

impl GenerationResult {
    /// The well-defined failure value: zero tokens, zero cost downstream.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.raw_text.trim().is_empty()
    }
}

/// Parsed explanation artifact: caption and explanation are non-overlapping
/// slices of the raw response, split at the first paragraph boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExplanation {
    pub caption: String,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, kind: FileKind) -> FileRecord {
        FileRecord {
            relative_path: path.to_string(),
            content: String::new(),
            kind,
        }
    }

    #[test]
    fn test_scan_result_kind_split() {
        let result = ScanResult {
            records: vec![
                record("src/a.ts", FileKind::Source),
                record("prisma/schema.prisma", FileKind::SchemaDescriptor),
                record("src/b.ts", FileKind::Source),
            ],
            root: PathBuf::from("."),
        };

        assert_eq!(result.sources().count(), 2);
        assert_eq!(result.schemas().count(), 1);
        assert_eq!(result.paths(), vec!["src/a.ts", "prisma/schema.prisma", "src/b.ts"]);
    }

    #[test]
    fn test_empty_generation_result() {
        let empty = GenerationResult::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.usage.total(), 0);

        let whitespace = GenerationResult {
            raw_text: "  \n ".to_string(),
            usage: TokenUsage::default(),
        };
        assert!(whitespace.is_empty());
    }

    #[test]
    fn test_usage_accumulation() {
        let mut total = TokenUsage::default();
        total.add(TokenUsage {
            input_tokens: 100,
            output_tokens: 20,
        });
        total.add(TokenUsage {
            input_tokens: 50,
            output_tokens: 5,
        });
        assert_eq!(total.input_tokens, 150);
        assert_eq!(total.output_tokens, 25);
        assert_eq!(total.total(), 175);
    }
}
