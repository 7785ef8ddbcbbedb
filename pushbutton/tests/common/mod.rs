//! Deterministic stand-ins for the host font subsystem and drawing surface.

#![allow(dead_code)]

use pushbutton::{ButtonError, Color, Fill, FontFace, FontProvider, Rect, Surface, TextImage};

/// Every glyph is `size / 2` wide and the line is `size` tall.
pub struct BlockFonts {
    names: Vec<&'static str>,
}

impl BlockFonts {
    pub fn new(names: &[&'static str]) -> Self {
        Self { names: names.to_vec() }
    }
}

impl Default for BlockFonts {
    fn default() -> Self {
        Self::new(&["yugothicuisemibold", "mono"])
    }
}

pub struct BlockFace {
    pub size: u32,
}

impl FontFace for BlockFace {
    fn measure(&self, text: &str) -> (u32, u32) {
        let width = text.chars().count() as f32 * self.size as f32 / 2.0;
        (width.ceil() as u32, self.size)
    }

    fn render(&self, text: &str, color: Color) -> TextImage {
        let (w, h) = self.measure(text);
        let mut image = TextImage::blank(w, h, color);
        image.coverage.fill(255);
        image
    }
}

impl FontProvider for BlockFonts {
    type Face = BlockFace;

    fn face(&self, name: &str, size: u32) -> pushbutton::Result<BlockFace> {
        if self.names.contains(&name) {
            Ok(BlockFace { size })
        } else {
            Err(ButtonError::UnknownFont(name.to_string()))
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Rect { rect: Rect, color: Color, fill: Fill, radius: f32 },
    Text { x: f32, y: f32, width: u32, height: u32, color: Color },
}

/// Records draw calls instead of painting.
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ops: Vec::new() }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, fill: Fill, radius: f32) {
        self.ops.push(Op::Rect { rect, color, fill, radius });
    }

    fn blit_text(&mut self, image: &TextImage, x: f32, y: f32) {
        self.ops.push(Op::Text {
            x,
            y,
            width: image.width,
            height: image.height,
            color: image.color,
        });
    }
}
