/// Host font subsystem seam: resolve faces by name and size, measure and render strings.

use crate::color::Color;
use crate::error::Result;

/// A rendered line of text: one coverage byte per pixel, tinted with `color` when composited.
#[derive(Clone, Debug, PartialEq)]
pub struct TextImage {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
    pub color: Color,
}

impl TextImage {
    pub fn blank(width: u32, height: u32, color: Color) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; width as usize * height as usize],
            color,
        }
    }

    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage[(y * self.width + x) as usize]
    }
}

/// A font resolved at one point size.
pub trait FontFace {
    /// Pixel dimensions `text` would occupy when rendered.
    fn measure(&self, text: &str) -> (u32, u32);

    fn render(&self, text: &str, color: Color) -> TextImage;
}

/// Resolves font names to faces.
pub trait FontProvider {
    type Face: FontFace;

    fn face(&self, name: &str, size: u32) -> Result<Self::Face>;
}

impl<P: FontProvider + ?Sized> FontProvider for &P {
    type Face = P::Face;

    fn face(&self, name: &str, size: u32) -> Result<Self::Face> {
        (**self).face(name, size)
    }
}
