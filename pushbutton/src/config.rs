/// Button configuration: every option in one serde-loadable struct.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ButtonError, Result};
use crate::style::StyleTable;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Keep width/height fixed when the surface is resized.
    pub static_size: bool,
    pub styles: StyleTable,
    pub font_name: String,
    pub font_size: u32,
    pub corner_radius: f32,
    /// Text margin divisor: spacing = size / spacing_factor.
    pub spacing_factor: f32,
    pub clickable: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            label: "Button".to_string(),
            x: 0.0,
            y: 0.0,
            width: 150.0,
            height: 80.0,
            static_size: false,
            styles: StyleTable::default(),
            font_name: "yugothicuisemibold".to_string(),
            font_size: 25,
            corner_radius: 2.0,
            spacing_factor: 10.0,
            clickable: true,
        }
    }
}

impl ButtonConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ButtonError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_font(mut self, name: impl Into<String>, size: u32) -> Self {
        self.font_name = name.into();
        self.font_size = size;
        self
    }
}
