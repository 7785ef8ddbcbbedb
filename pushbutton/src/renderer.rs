//! Software surface backed by a tiny-skia pixmap.

use std::path::Path;

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::color::Color;
use crate::error::{ButtonError, Result};
use crate::font::TextImage;
use crate::geometry::Rect;
use crate::style::Fill;
use crate::surface::Surface;

pub struct Renderer {
    pub pixmap: Pixmap,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| ButtonError::Surface(format!("cannot allocate {width}x{height} pixmap")))?;
        Ok(Self { pixmap })
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Read back one pixel, un-premultiplied. `None` outside the pixmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let px = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(px.red(), px.green(), px.blue(), px.alpha()))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.pixmap
            .save_png(path)
            .map_err(|e| ButtonError::Surface(format!("write {}: {e}", path.display())))
    }

    /// Aliased, so repainting the same rect over itself leaves identical pixels.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = false;

        if let Some(path) = rounded_rect_path(rect, radius) {
            self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    /// Stroke the border so it stays inside `rect`.
    pub fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32) {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = false;

        let mut stroke = Stroke::default();
        stroke.width = width;

        let half = width / 2.0;
        if let Some(path) = rounded_rect_path(rect.inset(half), (radius - half).max(0.0)) {
            self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}

impl Surface for Renderer {
    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, fill: Fill, radius: f32) {
        match fill {
            Fill::Solid => self.fill_rounded_rect(rect, radius, color),
            Fill::Outline(width) => self.stroke_rounded_rect(rect, radius, color, width),
        }
    }

    fn blit_text(&mut self, image: &TextImage, x: f32, y: f32) {
        let pw = self.pixmap.width() as i32;
        let ph = self.pixmap.height() as i32;
        let ox = x as i32;
        let oy = y as i32;
        let color = image.color;
        let pm = self.pixmap.data_mut();

        for row in 0..image.height {
            for col in 0..image.width {
                let coverage = image.coverage_at(col, row);
                if coverage == 0 {
                    continue;
                }
                let px = ox + col as i32;
                let py = oy + row as i32;
                if px < 0 || py < 0 || px >= pw || py >= ph {
                    continue;
                }
                let idx = (py as usize * pw as usize + px as usize) * 4;

                // Source-over in premultiplied space.
                let a = coverage as f32 / 255.0 * color.a as f32 / 255.0;
                let inv = 1.0 - a;
                pm[idx] = (color.r as f32 * a + pm[idx] as f32 * inv).round() as u8;
                pm[idx + 1] = (color.g as f32 * a + pm[idx + 1] as f32 * inv).round() as u8;
                pm[idx + 2] = (color.b as f32 * a + pm[idx + 2] as f32 * inv).round() as u8;
                pm[idx + 3] = (255.0 * a + pm[idx + 3] as f32 * inv).round() as u8;
            }
        }
    }
}

fn rounded_rect_path(rect: Rect, r: f32) -> Option<tiny_skia::Path> {
    let Rect { x, y, w, h } = rect;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let r = r.max(0.0).min(w / 2.0).min(h / 2.0);
    let mut pb = PathBuilder::new();
    pb.move_to(x + r, y);
    pb.line_to(x + w - r, y);
    pb.quad_to(x + w, y, x + w, y + r);
    pb.line_to(x + w, y + h - r);
    pb.quad_to(x + w, y + h, x + w - r, y + h);
    pb.line_to(x + r, y + h);
    pb.quad_to(x, y + h, x, y + h - r);
    pb.line_to(x, y + r);
    pb.quad_to(x, y, x + r, y);
    pb.close();
    pb.finish()
}
