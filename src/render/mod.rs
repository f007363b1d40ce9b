//! Code Screenshot Rendering
//!
//! Turns a source file into a syntax-highlighted PNG with line numbers and a
//! caption bar. Everything here is local: the syntax and theme sets are
//! compiled into the binary, and font resolution (see `font`) always
//! succeeds. Render errors are unit-local; the composite writer degrades to
//! text-only sections when one occurs.

pub mod font;

pub use font::ResolvedFont;

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::constants::DEFAULT_RENDER_THEME;
use crate::types::{CodeloreError, Result};

const PADDING: u32 = 16;
const GUTTER_GAP: u32 = 2;
/// Width cap so a single long line cannot produce a pathological image
const MAX_LINE_CHARS: usize = 200;
const MIN_LINE_CHARS: usize = 40;

/// Renders source files to annotated PNG screenshots
pub struct CodeImageRenderer {
    syntax_set: SyntaxSet,
    theme: Theme,
    font: ResolvedFont,
}

impl CodeImageRenderer {
    /// Build a renderer from configuration. An unknown theme name falls back
    /// to the default theme with a warning rather than failing the run.
    pub fn new(config: &RenderConfig) -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let mut theme_set = ThemeSet::load_defaults();

        let theme = match theme_set.themes.remove(&config.theme) {
            Some(theme) => theme,
            None => {
                warn!(
                    "Unknown render theme '{}', falling back to '{}'",
                    config.theme, DEFAULT_RENDER_THEME
                );
                theme_set
                    .themes
                    .remove(DEFAULT_RENDER_THEME)
                    .unwrap_or_default()
            }
        };

        Self {
            syntax_set,
            theme,
            font: ResolvedFont::load(config),
        }
    }

    /// Render `content` as a screenshot with a `file_name: caption` bar and
    /// write it as a PNG at `out_path`, creating parent directories.
    pub fn render_to_file(
        &self,
        file_name: &str,
        caption: &str,
        content: &str,
        out_path: &Path,
    ) -> Result<()> {
        let lines: Vec<String> = content
            .lines()
            .map(|line| line.replace('\t', "    "))
            .collect();
        let line_count = lines.len().max(1);
        let gutter_digits = line_count.to_string().len();

        let advance = self.font.advance().max(1);
        let line_height = self.font.line_height().max(1);

        let widest = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(MIN_LINE_CHARS, MAX_LINE_CHARS);

        let gutter_width = (gutter_digits as u32 + GUTTER_GAP) * advance;
        let width = PADDING * 2 + gutter_width + widest as u32 * advance;
        let caption_bar_height = line_height + PADDING;
        let height = caption_bar_height + PADDING + line_count as u32 * line_height + PADDING;

        let background = self
            .theme
            .settings
            .background
            .unwrap_or(Color { r: 40, g: 44, b: 52, a: 255 });
        let foreground = self
            .theme
            .settings
            .foreground
            .unwrap_or(Color { r: 220, g: 223, b: 228, a: 255 });

        let mut image = RgbaImage::from_pixel(width, height, to_rgba(background));

        self.draw_caption_bar(
            &mut image,
            width,
            caption_bar_height,
            background,
            foreground,
            &format!("{}: {}", file_name, caption),
        );

        let extension = Path::new(file_name)
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(&extension)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let gutter_color = Rgba([
            foreground.r / 2 + background.r / 2,
            foreground.g / 2 + background.g / 2,
            foreground.b / 2 + background.b / 2,
            255,
        ]);

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let text_x = (PADDING + gutter_width) as i32;

        for (index, line) in lines.iter().enumerate() {
            let y = (caption_bar_height + PADDING) as i32 + index as i32 * line_height as i32;

            let number = format!("{:>width$}", index + 1, width = gutter_digits);
            self.font
                .draw_text(&mut image, PADDING as i32, y, &number, gutter_color);

            let with_newline = format!("{}\n", line);
            let spans = highlighter
                .highlight_line(&with_newline, &self.syntax_set)
                .map_err(|e| {
                    CodeloreError::Render(format!("Highlighting failed for {}: {}", file_name, e))
                })?;

            let mut column = 0usize;
            for (style, text) in spans {
                let text = text.trim_end_matches('\n');
                if text.is_empty() {
                    continue;
                }
                if column >= MAX_LINE_CHARS {
                    break;
                }
                let visible: String = text.chars().take(MAX_LINE_CHARS - column).collect();
                let x = text_x + (column as u32 * advance) as i32;
                self.font
                    .draw_text(&mut image, x, y, &visible, to_rgba(style.foreground));
                column += visible.chars().count();
            }
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        image
            .save(out_path)
            .map_err(|e| CodeloreError::Render(format!("Failed to write {}: {}", out_path.display(), e)))?;

        debug!("Rendered {} ({}x{}) to {}", file_name, width, height, out_path.display());
        Ok(())
    }

    fn draw_caption_bar(
        &self,
        image: &mut RgbaImage,
        width: u32,
        bar_height: u32,
        background: Color,
        foreground: Color,
        text: &str,
    ) {
        // Slightly lifted from the code background so the bar reads as chrome
        let bar = Rgba([
            background.r.saturating_add(16),
            background.g.saturating_add(16),
            background.b.saturating_add(16),
            255,
        ]);
        for y in 0..bar_height {
            for x in 0..width {
                image.put_pixel(x, y, bar);
            }
        }

        let advance = self.font.advance().max(1);
        let visible_chars = ((width.saturating_sub(PADDING * 2)) / advance) as usize;
        let visible: String = text.chars().take(visible_chars).collect();
        self.font.draw_text(
            image,
            PADDING as i32,
            (PADDING / 2) as i32,
            &visible,
            to_rgba(foreground),
        );
    }
}

/// Screenshot location for a scanned file, relative to the output directory:
/// the scanned path minus its extension, components joined with `_`, under
/// `screenshots/`. Keeping the directory components avoids collisions
/// between same-named files in different directories.
pub fn screenshot_rel(relative_path: &str) -> PathBuf {
    let without_ext = match relative_path.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => relative_path,
    };
    let flat = without_ext.replace('/', "_");
    Path::new("screenshots").join(format!("{}.png", flat))
}

fn to_rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNIPPET: &str = "export const add = (a: number, b: number) => {\n\treturn a + b;\n};\n";

    #[test]
    fn test_render_writes_png() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("shots").join("add.png");

        let renderer = CodeImageRenderer::new(&RenderConfig::default());
        renderer
            .render_to_file("add.ts", "adds two numbers", SNIPPET, &out)
            .unwrap();

        let metadata = std::fs::metadata(&out).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = RenderConfig {
            theme: "no-such-theme".to_string(),
            ..Default::default()
        };
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("a.png");
        CodeImageRenderer::new(&config)
            .render_to_file("a.ts", "caption", "const a = 1;\n", &out)
            .unwrap();
        assert!(out.exists());
    }

    #[test]
    fn test_empty_content_still_renders() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("empty.png");
        CodeImageRenderer::new(&RenderConfig::default())
            .render_to_file("empty.ts", "nothing here", "", &out)
            .unwrap();
        assert!(out.exists());
    }

    #[test]
    fn test_screenshot_rel_flattens_directories() {
        assert_eq!(
            screenshot_rel("src/controllers/UserController.ts"),
            Path::new("screenshots/src_controllers_UserController.png")
        );
        assert_eq!(
            screenshot_rel("schema.prisma"),
            Path::new("screenshots/schema.png")
        );
    }

    #[test]
    fn test_screenshot_rel_no_extension() {
        assert_eq!(
            screenshot_rel("Makefile"),
            Path::new("screenshots/Makefile.png")
        );
    }
}
