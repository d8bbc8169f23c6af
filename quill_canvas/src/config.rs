// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use quill_ink::StrokeStyle;
use serde::Deserialize;

use crate::{ConfigError, Paper, Tool};

/// Startup settings for a [`crate::Canvas`].
///
/// Every field has a default, so an empty JSON object is a valid
/// configuration:
///
/// ```rust
/// use quill_canvas::{CanvasConfig, Tool};
///
/// let config = CanvasConfig::from_json_str(r#"{ "tool": "line", "pen_thickness": 3.5 }"#).unwrap();
/// assert_eq!(config.tool, Tool::Line);
/// assert_eq!(config.pen_thickness, 3.5);
/// assert_eq!(config.paper, "Blank");
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// View width in screen pixels.
    pub view_width: f64,
    /// View height in screen pixels.
    pub view_height: f64,
    /// Thickness of new strokes in document units.
    pub pen_thickness: f64,
    /// Color of new strokes as `0xAARRGGBB`.
    pub pen_color: u32,
    /// Smallest allowed zoom.
    pub min_zoom: f64,
    /// Largest allowed zoom.
    pub max_zoom: f64,
    /// Tool selected at startup.
    pub tool: Tool,
    /// Display name of the paper, one of [`Paper::TABLE`].
    pub paper: String,
    /// Half the side of the square the eraser sweeps, in screen pixels.
    pub eraser_radius: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            view_width: 800.0,
            view_height: 600.0,
            pen_thickness: 2.0,
            pen_color: 0xff00_0000,
            min_zoom: 0.1,
            max_zoom: 10.0,
            tool: Tool::Freehand,
            paper: String::from("Blank"),
            eraser_radius: 4.0,
        }
    }
}

impl CanvasConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.view_rect()?;
        self.style()?;
        self.paper()?;
        if !(self.min_zoom.is_finite() && self.max_zoom.is_finite())
            || self.min_zoom <= 0.0
            || self.min_zoom > self.max_zoom
        {
            return Err(ConfigError::Invalid(format!(
                "zoom limits must satisfy 0 < min <= max, got {}..{}",
                self.min_zoom, self.max_zoom
            )));
        }
        if !self.eraser_radius.is_finite() || self.eraser_radius < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "eraser radius must be finite and non-negative, got {}",
                self.eraser_radius
            )));
        }
        Ok(())
    }

    /// The screen rectangle of the view, anchored at the origin.
    pub fn view_rect(&self) -> Result<Rect, ConfigError> {
        let (w, h) = (self.view_width, self.view_height);
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "view size must be positive, got {w}x{h}"
            )));
        }
        Ok(Rect::new(0.0, 0.0, w, h))
    }

    /// Style for new strokes.
    pub fn style(&self) -> Result<StrokeStyle, ConfigError> {
        StrokeStyle::from_argb(self.pen_thickness, self.pen_color)
            .map_err(|err| ConfigError::Invalid(err.to_string()))
    }

    /// The configured paper.
    pub fn paper(&self) -> Result<Paper, ConfigError> {
        Paper::by_name(&self.paper)
            .ok_or_else(|| ConfigError::Invalid(format!("unknown paper {:?}", self.paper)))
    }
}
