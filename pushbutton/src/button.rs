//! Button widget
//!
//! A labelled rounded rectangle that draws itself in one of three looks
//! (default, hover, disabled) depending on the pointer it is handed each
//! frame. Derived geometry (bounding rect, text spacing, font face) is
//! recomputed eagerly by every mutator that touches its inputs.

use glam::Vec2;
use tracing::{debug, trace, warn};

use crate::config::ButtonConfig;
use crate::error::Result;
use crate::font::{FontFace, FontProvider};
use crate::geometry::Rect;
use crate::style::{StateStyle, StyleTable, VisualState};
use crate::surface::Surface;

pub struct Button<S, P: FontProvider> {
    surface: S,
    fonts: P,

    label: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    static_size: bool,
    /// Surface size / button size, captured at construction.
    w_factor: f32,
    h_factor: f32,

    spacing_factor: f32,
    w_spacing: f32,
    h_spacing: f32,

    styles: StyleTable,
    corner_radius: f32,
    clickable: bool,

    font_name: String,
    font_size: u32,
    font: P::Face,

    rect: Rect,
}

impl<S: Surface, P: FontProvider> Button<S, P> {
    pub fn new(surface: S, fonts: P, config: ButtonConfig) -> Result<Self> {
        let font = fonts.face(&config.font_name, config.font_size)?;
        let (sw, sh) = surface.size();

        let button = Self {
            w_factor: sw as f32 / config.width,
            h_factor: sh as f32 / config.height,
            w_spacing: config.width / config.spacing_factor,
            h_spacing: config.height / config.spacing_factor,
            rect: Rect::new(config.x, config.y, config.width, config.height),
            surface,
            fonts,
            label: config.label,
            x: config.x,
            y: config.y,
            width: config.width,
            height: config.height,
            static_size: config.static_size,
            spacing_factor: config.spacing_factor,
            styles: config.styles,
            corner_radius: config.corner_radius,
            clickable: config.clickable,
            font_name: config.font_name,
            font_size: config.font_size,
            font,
        };
        debug!(
            label = %button.label,
            rect = ?button.rect,
            w_factor = button.w_factor,
            h_factor = button.h_factor,
            "button created"
        );
        Ok(button)
    }

    /// Look the button would be drawn with for this pointer position.
    pub fn state_at(&self, pointer: Vec2) -> VisualState {
        if !self.clickable {
            VisualState::Disabled
        } else if self.rect.contains(pointer) {
            VisualState::Hover
        } else {
            VisualState::Default
        }
    }

    /// Draw the button for this frame. Returns the look that was used.
    pub fn render(&mut self, pointer: Vec2) -> VisualState {
        let state = self.state_at(pointer);
        trace!(label = %self.label, ?pointer, ?state, "render");

        let style = self.styles[state];
        self.surface
            .draw_rect(self.rect, style.background, style.fill, self.corner_radius);

        let image = self.font.render(&self.label, style.text);
        let tx = self.x + (self.width - image.width as f32) / 2.0;
        let ty = self.y + (self.height - image.height as f32) / 2.0;
        self.surface.blit_text(&image, tx, ty);

        state
    }

    /// Swap in a new surface and, unless the size is static, rescale to it.
    pub fn resize_to_surface(&mut self, surface: S) {
        self.surface = surface;
        if !self.static_size {
            let (sw, sh) = self.surface.size();
            self.width = sw as f32 / self.w_factor;
            self.height = sh as f32 / self.h_factor;
            self.update_spacing();
        }
        self.update_rect();
        debug!(label = %self.label, rect = ?self.rect, "resized to surface");
    }

    /// Pick the largest font size whose rendered label fits inside the spacing margins.
    pub fn auto_fit_font(&mut self) -> Result<u32> {
        let max_w = self.width - 2.0 * self.w_spacing;
        let max_h = self.height - 2.0 * self.h_spacing;

        let mut size = (self.height.floor() as u32).max(1);
        let mut fitted = false;
        while size > 1 {
            let (tw, th) = self.fonts.face(&self.font_name, size)?.measure(&self.label);
            if (tw as f32) < max_w && (th as f32) < max_h {
                fitted = true;
                break;
            }
            size -= 1;
        }
        if !fitted {
            warn!(label = %self.label, max_w, max_h, "no font size above 1 fits the label");
        }

        self.font = self.fonts.face(&self.font_name, size)?;
        self.font_size = size;
        debug!(label = %self.label, size, "auto-fit font");
        Ok(size)
    }

    pub fn set_spacing(&mut self, spacing_factor: f32) {
        self.spacing_factor = spacing_factor;
        self.update_spacing();
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.update_spacing();
        self.update_rect();
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.update_rect();
    }

    /// On error the previous font stays in place.
    pub fn set_font_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.font = self.fonts.face(&name, self.font_size)?;
        self.font_name = name;
        Ok(())
    }

    /// Does not re-run [`Button::auto_fit_font`].
    pub fn set_font_size(&mut self, size: u32) -> Result<()> {
        self.font = self.fonts.face(&self.font_name, size)?;
        self.font_size = size;
        Ok(())
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
    }

    pub fn set_style(&mut self, state: VisualState, style: StateStyle) {
        self.styles[state] = style;
    }

    /// Half the button size, truncated. Subtract from a target point to center the button on it.
    pub fn center_offset(&self) -> (i32, i32) {
        ((self.width / 2.0) as i32, (self.height / 2.0) as i32)
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Pixel size of the label in the current font.
    pub fn rendered_text_size(&self) -> (u32, u32) {
        self.font.measure(&self.label)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// (w_spacing, h_spacing)
    pub fn spacing(&self) -> (f32, f32) {
        (self.w_spacing, self.h_spacing)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    pub fn style(&self, state: VisualState) -> &StateStyle {
        &self.styles[state]
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// For host work between frames, e.g. clearing a borrowed surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn update_spacing(&mut self) {
        self.w_spacing = self.width / self.spacing_factor;
        self.h_spacing = self.height / self.spacing_factor;
    }

    fn update_rect(&mut self) {
        self.rect = Rect::new(self.x, self.y, self.width, self.height);
    }
}
