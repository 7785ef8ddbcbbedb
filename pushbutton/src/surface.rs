/// Host drawing surface seam.

use std::cell::RefCell;
use std::rc::Rc;

use crate::color::Color;
use crate::font::TextImage;
use crate::geometry::Rect;
use crate::style::Fill;

pub trait Surface {
    /// Pixel dimensions (width, height).
    fn size(&self) -> (u32, u32);

    /// Paint a rounded rectangle, solid or outlined.
    fn draw_rect(&mut self, rect: Rect, color: Color, fill: Fill, radius: f32);

    /// Composite a rendered text image with its top-left corner at (x, y).
    fn blit_text(&mut self, image: &TextImage, x: f32, y: f32);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, fill: Fill, radius: f32) {
        (**self).draw_rect(rect, color, fill, radius)
    }

    fn blit_text(&mut self, image: &TextImage, x: f32, y: f32) {
        (**self).blit_text(image, x, y)
    }
}

/// Several buttons painting onto one surface from the same thread.
impl<S: Surface + ?Sized> Surface for Rc<RefCell<S>> {
    fn size(&self) -> (u32, u32) {
        self.borrow().size()
    }

    fn draw_rect(&mut self, rect: Rect, color: Color, fill: Fill, radius: f32) {
        self.borrow_mut().draw_rect(rect, color, fill, radius)
    }

    fn blit_text(&mut self, image: &TextImage, x: f32, y: f32) {
        self.borrow_mut().blit_text(image, x, y)
    }
}
