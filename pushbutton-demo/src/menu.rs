/// Menu description for the demo — surface size, palette, buttons, and a scripted pointer path.

use std::path::Path;

use anyhow::{Context, Result};
use pushbutton::{color, ButtonConfig, Color};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    /// Gap between stacked buttons, in pixels.
    pub gap: f32,
    pub buttons: Vec<ButtonConfig>,
    /// Pointer position for each rendered frame.
    pub pointer_path: Vec<[f32; 2]>,
    /// Surface size to switch to after the pointer path has played.
    pub resize_to: Option<[u32; 2]>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        let button = |label: &str| ButtonConfig::default().with_label(label).with_font("ui", 25);
        Self {
            width: 800,
            height: 600,
            background: color::MIST,
            gap: 24.0,
            buttons: vec![
                button("Play"),
                button("Options"),
                ButtonConfig {
                    clickable: false,
                    ..button("Quit")
                },
            ],
            pointer_path: vec![[10.0, 10.0], [400.0, 220.0], [400.0, 320.0], [400.0, 420.0]],
            resize_to: Some([1200, 900]),
        }
    }
}

impl MenuConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("parse {}", path.display()))
    }
}
