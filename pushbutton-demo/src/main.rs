//! pushbutton-demo
//!
//! Headless menu: renders a stack of buttons for a scripted pointer path,
//! writes each frame to PNG, then resizes the surface and renders again.
//!
//! Usage: pushbutton-demo <font.ttf> [menu.json] [out-dir]

mod menu;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use pushbutton::{vec2, Button, FontLibrary, Renderer, Surface, Vec2};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::menu::MenuConfig;

type SharedSurface = Rc<RefCell<Renderer>>;
type MenuButton<'a> = Button<SharedSurface, &'a FontLibrary>;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = std::env::args().skip(1);
    let Some(font_path) = args.next().map(PathBuf::from) else {
        bail!("usage: pushbutton-demo <font.ttf> [menu.json] [out-dir]");
    };
    let menu = match args.next() {
        Some(path) => MenuConfig::load(Path::new(&path))?,
        None => MenuConfig::default(),
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("frames"));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("create {}", out_dir.display()))?;

    // Every font name the menu asks for resolves to the one file we were given.
    let bytes = std::fs::read(&font_path).with_context(|| format!("read {}", font_path.display()))?;
    let mut fonts = FontLibrary::new();
    for config in &menu.buttons {
        if !fonts.contains(&config.font_name) {
            fonts.register_bytes(&config.font_name, &bytes)?;
        }
    }

    let surface: SharedSurface = Rc::new(RefCell::new(Renderer::new(menu.width, menu.height)?));
    let mut buttons = menu
        .buttons
        .iter()
        .cloned()
        .map(|config| Button::new(surface.clone(), &fonts, config))
        .collect::<pushbutton::Result<Vec<_>>>()?;
    layout(&mut buttons, menu.gap)?;
    info!("Menu: {} buttons on {}x{}", buttons.len(), menu.width, menu.height);

    let mut frame = 0;
    for &[x, y] in &menu.pointer_path {
        draw_frame(&surface, &mut buttons, &menu, vec2(x, y), &out_dir, frame)?;
        frame += 1;
    }

    if let Some([width, height]) = menu.resize_to {
        let resized: SharedSurface = Rc::new(RefCell::new(Renderer::new(width, height)?));
        for button in &mut buttons {
            button.resize_to_surface(resized.clone());
        }
        layout(&mut buttons, menu.gap)?;
        info!("Resized to {}x{}", width, height);

        // Hover the first button in its new place.
        let pointer = buttons
            .first()
            .map(|b| b.rect().top_left() + Vec2::ONE)
            .unwrap_or(Vec2::ZERO);
        draw_frame(&resized, &mut buttons, &menu, pointer, &out_dir, frame)?;
    }

    info!("Wrote frames to {}", out_dir.display());
    Ok(())
}

/// Stack buttons vertically, centered on the surface, and fit each label.
fn layout(buttons: &mut [MenuButton<'_>], gap: f32) -> Result<()> {
    let Some(first) = buttons.first() else {
        return Ok(());
    };
    let (sw, sh) = first.surface().size();
    let total: f32 = buttons.iter().map(|b| b.size().1).sum::<f32>() + gap * (buttons.len() as f32 - 1.0);

    let mut y = (sh as f32 - total) / 2.0;
    for button in buttons.iter_mut() {
        let (half_w, _) = button.center_offset();
        button.set_position((sw / 2) as f32 - half_w as f32, y);
        y += button.size().1 + gap;
        button.auto_fit_font()?;
    }
    Ok(())
}

fn draw_frame(
    surface: &SharedSurface,
    buttons: &mut [MenuButton<'_>],
    menu: &MenuConfig,
    pointer: Vec2,
    out_dir: &Path,
    frame: usize,
) -> Result<()> {
    surface.borrow_mut().clear(menu.background);
    for button in buttons.iter_mut() {
        let state = button.render(pointer);
        tracing::debug!("frame {frame}: {} -> {:?}", button.label(), state);
    }

    let path = out_dir.join(format!("frame_{frame:02}.png"));
    surface.borrow().save_png(&path)?;
    info!("Frame {} at ({}, {}) -> {}", frame, pointer.x, pointer.y, path.display());
    Ok(())
}
