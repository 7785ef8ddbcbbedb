/// Text rendering with fontdue — a name-keyed font library, measure + rasterize single lines.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use fontdue::{Font, FontSettings};
use tracing::debug;

use crate::color::Color;
use crate::error::{ButtonError, Result};
use crate::font::{FontFace, FontProvider, TextImage};

/// Fonts the host has loaded, addressable by name.
#[derive(Default)]
pub struct FontLibrary {
    fonts: HashMap<String, Arc<Font>>,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| ButtonError::InvalidFont {
            name: name.to_string(),
            reason: reason.to_string(),
        })?;
        debug!(name, glyphs = font.glyph_count(), "registered font");
        self.fonts.insert(name.to_string(), Arc::new(font));
        Ok(())
    }

    pub fn register_file(&mut self, name: &str, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ButtonError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.register_bytes(name, &bytes)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }
}

impl FontProvider for FontLibrary {
    type Face = FontdueFace;

    fn face(&self, name: &str, size: u32) -> Result<FontdueFace> {
        let font = self
            .fonts
            .get(name)
            .cloned()
            .ok_or_else(|| ButtonError::UnknownFont(name.to_string()))?;
        Ok(FontdueFace { font, px: size as f32 })
    }
}

/// A fontdue font at a fixed pixel size.
#[derive(Clone)]
pub struct FontdueFace {
    font: Arc<Font>,
    px: f32,
}

impl FontdueFace {
    fn ascent(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.px)
            .map(|m| m.ascent)
            .unwrap_or(self.px)
    }

    fn line_height(&self) -> f32 {
        self.font
            .horizontal_line_metrics(self.px)
            .map(|m| m.ascent - m.descent)
            .unwrap_or(self.px)
    }
}

impl FontFace for FontdueFace {
    fn measure(&self, text: &str) -> (u32, u32) {
        let width: f32 = text.chars().map(|ch| self.font.metrics(ch, self.px).advance_width).sum();
        (width.ceil() as u32, self.line_height().ceil() as u32)
    }

    fn render(&self, text: &str, color: Color) -> TextImage {
        let (w, h) = self.measure(text);
        let mut image = TextImage::blank(w, h, color);
        let baseline = self.ascent().round() as i32;

        let mut cursor_x = 0.0f32;
        for ch in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(ch, self.px);
            let gx = cursor_x.round() as i32 + metrics.xmin;
            let gy = baseline - (metrics.height as i32 + metrics.ymin);

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let alpha = bitmap[row * metrics.width + col];
                    if alpha == 0 {
                        continue;
                    }
                    let px = gx + col as i32;
                    let py = gy + row as i32;
                    if px < 0 || py < 0 || px >= w as i32 || py >= h as i32 {
                        continue;
                    }
                    let idx = py as usize * w as usize + px as usize;
                    image.coverage[idx] = image.coverage[idx].max(alpha);
                }
            }

            cursor_x += metrics.advance_width;
        }
        image
    }
}
