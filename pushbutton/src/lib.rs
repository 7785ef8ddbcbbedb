//! pushbutton
//!
//! A reusable push-button widget for immediate-mode 2D loops: a rounded
//! rectangle with a centered label, drawn in a default, hover, or disabled
//! look and hit-tested against the pointer position the host hands it.
//!
//! The widget talks to the host through two seams, [`Surface`] and
//! [`FontProvider`]. [`Renderer`] (tiny-skia) and [`FontLibrary`] (fontdue)
//! are ready-made implementations.

pub mod button;
pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod geometry;
pub mod renderer;
pub mod style;
pub mod surface;
pub mod text;

pub use button::Button;
pub use color::Color;
pub use config::ButtonConfig;
pub use error::{ButtonError, Result};
pub use font::{FontFace, FontProvider, TextImage};
pub use geometry::Rect;
pub use renderer::Renderer;
pub use style::{Fill, StateStyle, StyleTable, VisualState};
pub use surface::Surface;
pub use text::{FontLibrary, FontdueFace};

pub use glam::{vec2, Vec2};
