//! Display capabilities of screen devices (`context.Viewport`).

use serde::{Deserialize, Serialize};

use crate::enums::{KeyboardMode, TouchMode, ViewportShape, ViewportTheme};

/// Screen characteristics of the device that sent the request.
///
/// Only present for devices with a screen. Pixel dimensions are physical
/// pixels; `current_pixel_*` can be smaller than `pixel_*` when the skill
/// is rendered in a resized window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Viewport {
    /// Ways the device can be used, e.g. mounted on a wall or on a desk.
    pub experiences: Vec<Experience>,
    /// Screen shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<ViewportShape>,
    /// Maximum width in pixels.
    pub pixel_width: u32,
    /// Maximum height in pixels.
    pub pixel_height: u32,
    /// Current width in pixels.
    pub current_pixel_width: u32,
    /// Current height in pixels.
    pub current_pixel_height: u32,
    /// Pixel density.
    pub dpi: u32,
    /// Active colour theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ViewportTheme>,
    /// Raw `touch` literals. See [`Viewport::touch_modes`].
    pub touch: Vec<String>,
    /// Raw `keyboard` literals. See [`Viewport::keyboard_modes`].
    pub keyboard: Vec<String>,
}

impl Viewport {
    /// Whether the screen is round.
    #[must_use]
    pub fn is_round(&self) -> bool {
        self.shape == Some(ViewportShape::Round)
    }

    /// Known touch modes; unrecognised literals are skipped.
    pub fn touch_modes(&self) -> impl Iterator<Item = TouchMode> + '_ {
        self.touch.iter().filter_map(|raw| raw.parse().ok())
    }

    /// Known keyboard modes; unrecognised literals are skipped.
    pub fn keyboard_modes(&self) -> impl Iterator<Item = KeyboardMode> + '_ {
        self.keyboard.iter().filter_map(|raw| raw.parse().ok())
    }

    /// Whether the screen accepts touch input.
    #[must_use]
    pub fn supports_touch(&self) -> bool {
        !self.touch.is_empty()
    }
}

/// One way a device is expected to be used, measured in arc minutes at the
/// typical viewing distance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    /// Visual width in arc minutes.
    pub arc_minute_width: u32,
    /// Visual height in arc minutes.
    pub arc_minute_height: u32,
    /// Whether the device can be rotated.
    pub can_rotate: bool,
    /// Whether the viewport can be resized.
    pub can_resize: bool,
}
