//! Pixel-level checks against the tiny-skia renderer.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::BlockFonts;
use pushbutton::{color, vec2, Button, ButtonConfig, Renderer, VisualState};

fn cleared(width: u32, height: u32) -> Renderer {
    let mut r = Renderer::new(width, height).unwrap();
    r.clear(color::BLACK);
    r
}

#[test]
fn default_state_fills_and_labels() {
    let mut surface = cleared(200, 100);
    let fonts = BlockFonts::default();
    {
        let mut b = Button::new(&mut surface, &fonts, ButtonConfig::default().with_label("OK")).unwrap();
        assert_eq!(b.render(vec2(190.0, 90.0)), VisualState::Default);
    }
    assert_eq!(surface.pixel(5, 40), Some(color::OLIVE));
    // 25x25 label block lands at (62, 27).
    assert_eq!(surface.pixel(70, 35), Some(color::FOREST));
    assert_eq!(surface.pixel(190, 90), Some(color::BLACK));
}

#[test]
fn hover_state_outlines() {
    let mut surface = cleared(200, 100);
    let fonts = BlockFonts::default();
    {
        let mut b = Button::new(&mut surface, &fonts, ButtonConfig::default().with_label("OK")).unwrap();
        assert_eq!(b.render(vec2(5.0, 40.0)), VisualState::Hover);
    }
    assert_eq!(surface.pixel(0, 40), Some(color::OLIVE));
    assert_eq!(surface.pixel(5, 40), Some(color::BLACK));
    assert_eq!(surface.pixel(70, 35), Some(color::OLIVE));
}

#[test]
fn disabled_state_uses_disabled_palette() {
    let mut surface = cleared(200, 100);
    let fonts = BlockFonts::default();
    let config = ButtonConfig {
        clickable: false,
        ..ButtonConfig::default().with_label("OK")
    };
    {
        let mut b = Button::new(&mut surface, &fonts, config).unwrap();
        b.render(vec2(5.0, 40.0));
    }
    assert_eq!(surface.pixel(5, 40), Some(color::CHARCOAL));
    assert_eq!(surface.pixel(70, 35), Some(color::MIST));
}

#[test]
fn repeated_render_is_pixel_identical() {
    let mut surface = cleared(200, 100);
    let fonts = BlockFonts::default();
    let mut b = Button::new(&mut surface, &fonts, ButtonConfig::default().with_label("Play")).unwrap();

    b.render(vec2(40.0, 40.0));
    let first = b.surface().pixmap.data().to_vec();
    b.render(vec2(40.0, 40.0));
    assert_eq!(b.surface().pixmap.data(), &first[..]);
}

#[test]
fn repeated_hover_render_is_pixel_identical() {
    let mut surface = cleared(200, 100);
    let fonts = BlockFonts::default();
    let config = ButtonConfig {
        corner_radius: 12.0,
        ..ButtonConfig::default().with_label("Play").with_position(0.5, 0.5)
    };
    let mut b = Button::new(&mut surface, &fonts, config).unwrap();

    assert_eq!(b.render(vec2(40.0, 40.0)), VisualState::Hover);
    let first = b.surface().pixmap.data().to_vec();
    b.render(vec2(40.0, 40.0));
    assert_eq!(b.surface().pixmap.data(), &first[..]);
}

#[test]
fn host_clears_borrowed_surface_between_frames() {
    let mut surface = cleared(200, 100);
    let fonts = BlockFonts::default();
    let mut b = Button::new(&mut surface, &fonts, ButtonConfig::default().with_label("OK")).unwrap();

    assert_eq!(b.render(vec2(190.0, 90.0)), VisualState::Default);
    assert_eq!(b.surface().pixel(5, 40), Some(color::OLIVE));

    // The outlined hover look only paints the border, so a stale fill shows unless the host clears.
    b.surface_mut().clear(color::BLACK);
    assert_eq!(b.surface().pixel(5, 40), Some(color::BLACK));
    assert_eq!(b.render(vec2(5.0, 40.0)), VisualState::Hover);
    assert_eq!(b.surface().pixel(5, 40), Some(color::BLACK));
    assert_eq!(b.surface().pixel(0, 40), Some(color::OLIVE));
}

#[test]
fn buttons_share_one_surface() {
    let surface = Rc::new(RefCell::new(cleared(400, 300)));
    let fonts = BlockFonts::default();

    let mut play = Button::new(
        surface.clone(),
        &fonts,
        ButtonConfig::default().with_label("Play").with_position(20.0, 20.0),
    )
    .unwrap();
    let mut quit = Button::new(
        surface.clone(),
        &fonts,
        ButtonConfig {
            clickable: false,
            ..ButtonConfig::default().with_label("Quit").with_position(20.0, 150.0)
        },
    )
    .unwrap();

    play.render(vec2(0.0, 0.0));
    quit.render(vec2(0.0, 0.0));

    let r = surface.borrow();
    assert_eq!(r.pixel(25, 60), Some(color::OLIVE));
    assert_eq!(r.pixel(25, 190), Some(color::CHARCOAL));
}

#[test]
fn resize_to_larger_surface_rescales_drawing() {
    let fonts = BlockFonts::default();
    let small = Rc::new(RefCell::new(cleared(300, 200)));
    let mut b = Button::new(small, &fonts, ButtonConfig::default().with_label("OK")).unwrap();

    let large = Rc::new(RefCell::new(cleared(600, 400)));
    b.resize_to_surface(large.clone());
    assert_eq!(b.size(), (300.0, 160.0));

    b.render(vec2(599.0, 399.0));
    let r = large.borrow();
    assert_eq!(r.pixel(290, 150), Some(color::OLIVE));
    assert_eq!(r.pixel(305, 150), Some(color::BLACK));
}
