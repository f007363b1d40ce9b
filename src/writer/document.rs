//! Composite Explanation Document
//!
//! Assembles the per-file sections (heading, screenshot, figure caption,
//! explanation paragraph) into a single self-contained HTML document. Figure
//! numbers are assigned here, at assembly time, so they stay strictly
//! increasing even when some sections lost their image to a render failure.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::types::Result;

const DOCUMENT_FILE_NAME: &str = "code_explanations.html";

/// One fully processed file, ready for the document
#[derive(Debug, Clone)]
pub struct ExplanationSection {
    /// Path relative to the scan root, shown in the section heading
    pub file_name: String,
    pub caption: String,
    pub explanation: String,
    /// Screenshot path relative to the output directory; `None` when the
    /// render step failed and the section degrades to text only
    pub image_path: Option<PathBuf>,
}

/// Write the composite document. Sections appear in the given order; a
/// section whose image file is missing on disk is degraded to text only
/// with a warning, never dropped.
pub fn write_document(output_dir: &Path, sections: &[ExplanationSection]) -> Result<PathBuf> {
    let mut body = String::new();
    let mut figure_number = 0usize;

    for section in sections {
        body.push_str(&format!(
            "    <h2>File: {}</h2>\n",
            escape_html(&section.file_name)
        ));

        let image = section
            .image_path
            .as_ref()
            .filter(|rel| output_dir.join(rel).exists());
        match image {
            Some(rel) => {
                figure_number += 1;
                body.push_str(&format!(
                    "    <figure>\n      <img src=\"{}\" alt=\"{}\">\n      <figcaption>Figure {}: {}</figcaption>\n    </figure>\n",
                    escape_html(&rel.to_string_lossy()),
                    escape_html(&section.file_name),
                    figure_number,
                    escape_html(&section.caption),
                ));
            }
            None => {
                if section.image_path.is_some() {
                    warn!(
                        "Screenshot missing for {}, section degrades to text only",
                        section.file_name
                    );
                }
            }
        }

        body.push_str(&format!(
            "    <p class=\"explanation\">{}</p>\n",
            escape_html(&section.explanation)
        ));
    }

    let document = format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Code Explanations</title>
    <style>
      body {{ max-width: 52rem; margin: 2rem auto; font-family: Georgia, serif; line-height: 1.5; }}
      h2 {{ margin-top: 3rem; }}
      figure {{ text-align: center; margin: 1.5rem 0; }}
      figure img {{ max-width: 100%; }}
      figcaption {{ font-style: italic; font-size: 0.85rem; margin-top: 0.5rem; }}
      p.explanation {{ text-align: justify; }}
    </style>
  </head>
  <body>
    <h1>Code Explanations</h1>
{}  </body>
</html>
"#,
        body
    );

    let path = output_dir.join(DOCUMENT_FILE_NAME);
    std::fs::write(&path, document)?;
    info!(
        "Composite document with {} sections ({} figures) saved to {}",
        sections.len(),
        figure_number,
        path.display()
    );
    Ok(path)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(name: &str, image: Option<&str>) -> ExplanationSection {
        ExplanationSection {
            file_name: name.to_string(),
            caption: format!("caption for {}", name),
            explanation: format!("explanation for {}", name),
            image_path: image.map(PathBuf::from),
        }
    }

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, b"png").unwrap();
    }

    #[test]
    fn test_figure_numbers_skip_imageless_sections() {
        let tmp = tempfile::TempDir::new().unwrap();
        touch(tmp.path(), "screenshots/a.png");
        touch(tmp.path(), "screenshots/c.png");

        let sections = vec![
            section("a.ts", Some("screenshots/a.png")),
            section("b.ts", None),
            section("c.ts", Some("screenshots/c.png")),
        ];
        let path = write_document(tmp.path(), &sections).unwrap();
        let html = std::fs::read_to_string(path).unwrap();

        assert!(html.contains("Figure 1: caption for a.ts"));
        assert!(html.contains("Figure 2: caption for c.ts"));
        assert!(!html.contains("Figure 3"));
        // Imageless section keeps its heading and text
        assert!(html.contains("File: b.ts"));
        assert!(html.contains("explanation for b.ts"));
    }

    #[test]
    fn test_missing_image_file_degrades_to_text() {
        let tmp = tempfile::TempDir::new().unwrap();
        let sections = vec![section("a.ts", Some("screenshots/gone.png"))];
        let path = write_document(tmp.path(), &sections).unwrap();
        let html = std::fs::read_to_string(path).unwrap();

        assert!(!html.contains("<img"));
        assert!(html.contains("explanation for a.ts"));
    }

    #[test]
    fn test_html_is_escaped() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut bad = section("a<b>.ts", None);
        bad.explanation = "uses <script> & \"quotes\"".to_string();
        let path = write_document(tmp.path(), &[bad]).unwrap();
        let html = std::fs::read_to_string(path).unwrap();

        assert!(html.contains("a&lt;b&gt;.ts"));
        assert!(html.contains("&lt;script&gt; &amp; &quot;quotes&quot;"));
    }
}
