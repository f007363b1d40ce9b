//! Font resolution for code screenshots
//!
//! Resolution is a strategy chain: explicitly configured font paths first,
//! then a list of common system monospace fonts, and finally a built-in 5x7
//! bitmap face. The chain always produces a usable font, so rendering never
//! fails for lack of one.

use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use tracing::{debug, warn};

use crate::config::RenderConfig;

/// Monospace faces commonly present on the three desktop platforms,
/// tried in order after the configured paths
const SYSTEM_FONT_CANDIDATES: [&str; 8] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// A font ready to draw with. `Bitmap` is the guaranteed terminal strategy.
pub enum ResolvedFont {
    Ttf {
        font: FontArc,
        scale: PxScale,
    },
    /// Built-in 5x7 ASCII face, integer-scaled
    Bitmap {
        pixel: u32,
    },
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ttf { scale, .. } => f.debug_struct("Ttf").field("scale", &scale.y).finish(),
            Self::Bitmap { pixel } => f.debug_struct("Bitmap").field("pixel", pixel).finish(),
        }
    }
}

impl ResolvedFont {
    /// Walk the strategy chain. Infallible: the bitmap face needs no files.
    pub fn load(config: &RenderConfig) -> Self {
        let configured = config.font_paths.iter().map(PathBuf::as_path);
        let system = SYSTEM_FONT_CANDIDATES.iter().map(Path::new);

        for candidate in configured.chain(system) {
            match Self::try_ttf(candidate, config.font_size) {
                Some(font) => {
                    debug!("Using font {}", candidate.display());
                    return font;
                }
                None => continue,
            }
        }

        warn!("No usable TTF font found, falling back to built-in bitmap face");
        Self::Bitmap {
            pixel: (config.font_size / BITMAP_CELL_HEIGHT).max(1),
        }
    }

    fn try_ttf(path: &Path, font_size: u32) -> Option<Self> {
        let data = std::fs::read(path).ok()?;
        let font = FontArc::try_from_vec(data).ok()?;
        Some(Self::Ttf {
            font,
            scale: PxScale::from(font_size as f32),
        })
    }

    /// Horizontal advance of one character cell in pixels. Code is drawn on
    /// a monospace grid even for proportional fallback fonts.
    pub fn advance(&self) -> u32 {
        match self {
            Self::Ttf { font, scale } => {
                let scaled = font.as_scaled(*scale);
                scaled.h_advance(font.glyph_id('M')).ceil() as u32
            }
            Self::Bitmap { pixel } => BITMAP_CELL_WIDTH * pixel,
        }
    }

    /// Vertical size of one line box in pixels
    pub fn line_height(&self) -> u32 {
        match self {
            Self::Ttf { font, scale } => {
                let scaled = font.as_scaled(*scale);
                (scaled.ascent() - scaled.descent() + scaled.line_gap()).ceil() as u32
            }
            Self::Bitmap { pixel } => BITMAP_CELL_HEIGHT * pixel,
        }
    }

    /// Draw `text` with its line box anchored at `(x, y)` (top-left corner),
    /// advancing one cell per character. Characters the face cannot shape
    /// leave an empty cell.
    pub fn draw_text(&self, image: &mut RgbaImage, x: i32, y: i32, text: &str, color: Rgba<u8>) {
        match self {
            Self::Ttf { font, scale } => {
                let scaled = font.as_scaled(*scale);
                let advance = self.advance() as i32;
                let baseline = y as f32 + scaled.ascent();
                let mut pen_x = x;
                for ch in text.chars() {
                    let glyph = font
                        .glyph_id(ch)
                        .with_scale_and_position(*scale, point(pen_x as f32, baseline));
                    if let Some(outlined) = font.outline_glyph(glyph) {
                        let bounds = outlined.px_bounds();
                        outlined.draw(|gx, gy, coverage| {
                            let px = bounds.min.x as i32 + gx as i32;
                            let py = bounds.min.y as i32 + gy as i32;
                            blend_pixel(image, px, py, color, coverage);
                        });
                    }
                    pen_x += advance;
                }
            }
            Self::Bitmap { pixel } => {
                let scale = *pixel as i32;
                let mut pen_x = x;
                for ch in text.chars() {
                    if let Some(columns) = bitmap_glyph(ch) {
                        for (col, bits) in columns.iter().enumerate() {
                            for row in 0..7 {
                                if bits & (1 << row) != 0 {
                                    fill_cell(
                                        image,
                                        pen_x + col as i32 * scale,
                                        y + row as i32 * scale,
                                        scale,
                                        color,
                                    );
                                }
                            }
                        }
                    }
                    pen_x += (BITMAP_CELL_WIDTH * pixel) as i32;
                }
            }
        }
    }
}

fn blend_pixel(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= image.width() || y as u32 >= image.height() {
        return;
    }
    let existing = image.get_pixel(x as u32, y as u32);
    let alpha = coverage.clamp(0.0, 1.0);
    let mix = |fg: u8, bg: u8| (fg as f32 * alpha + bg as f32 * (1.0 - alpha)) as u8;
    image.put_pixel(
        x as u32,
        y as u32,
        Rgba([
            mix(color[0], existing[0]),
            mix(color[1], existing[1]),
            mix(color[2], existing[2]),
            255,
        ]),
    );
}

fn fill_cell(image: &mut RgbaImage, x: i32, y: i32, size: i32, color: Rgba<u8>) {
    for dy in 0..size {
        for dx in 0..size {
            let px = x + dx;
            let py = y + dy;
            if px >= 0 && py >= 0 && (px as u32) < image.width() && (py as u32) < image.height() {
                image.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

// Cell geometry of the built-in face: 5 columns of glyph plus one of
// spacing, 7 rows of glyph plus one of leading.
const BITMAP_CELL_WIDTH: u32 = 6;
const BITMAP_CELL_HEIGHT: u32 = 8;

/// Column-major 5x7 glyph for a printable ASCII character. Each byte is one
/// column; bit 0 is the top row.
fn bitmap_glyph(ch: char) -> Option<&'static [u8; 5]> {
    let code = ch as u32;
    if !(0x20..=0x7E).contains(&code) {
        return None;
    }
    Some(&FONT_5X7[(code - 0x20) as usize])
}

#[rustfmt::skip]
static FONT_5X7: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x00, 0x08, 0x14, 0x22, 0x41], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x41, 0x22, 0x14, 0x08, 0x00], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x01, 0x01], // F
    [0x3E, 0x41, 0x41, 0x51, 0x32], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x04, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x7F, 0x20, 0x18, 0x20, 0x7F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x08, 0x14, 0x54, 0x54, 0x3C], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x00, 0x7F, 0x10, 0x28, 0x44], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x02, 0x01, 0x02, 0x04, 0x02], // ~
];
