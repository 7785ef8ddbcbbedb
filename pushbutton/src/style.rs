/// Per-state button styling: a three-entry table keyed by [`VisualState`].

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::color::{self, Color};

/// Which of the three looks a button is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualState {
    Default,
    Hover,
    Disabled,
}

impl VisualState {
    pub const ALL: [VisualState; 3] = [VisualState::Default, VisualState::Hover, VisualState::Disabled];
}

/// How the button rectangle is painted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Solid,
    /// Border only, drawn inward with the given stroke width.
    Outline(f32),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateStyle {
    pub background: Color,
    pub text: Color,
    pub fill: Fill,
}

impl StateStyle {
    pub const fn new(background: Color, text: Color, fill: Fill) -> Self {
        Self { background, text, fill }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTable {
    pub default: StateStyle,
    pub hover: StateStyle,
    pub disabled: StateStyle,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            default: StateStyle::new(color::OLIVE, color::FOREST, Fill::Solid),
            // Border-only, so the olive label sits on whatever the host painted underneath.
            hover: StateStyle::new(color::OLIVE, color::OLIVE, Fill::Outline(2.0)),
            disabled: StateStyle::new(color::CHARCOAL, color::MIST, Fill::Solid),
        }
    }
}

impl Index<VisualState> for StyleTable {
    type Output = StateStyle;

    fn index(&self, state: VisualState) -> &StateStyle {
        match state {
            VisualState::Default => &self.default,
            VisualState::Hover => &self.hover,
            VisualState::Disabled => &self.disabled,
        }
    }
}

impl IndexMut<VisualState> for StyleTable {
    fn index_mut(&mut self, state: VisualState) -> &mut StateStyle {
        match state {
            VisualState::Default => &mut self.default,
            VisualState::Hover => &mut self.hover,
            VisualState::Disabled => &mut self.disabled,
        }
    }
}
