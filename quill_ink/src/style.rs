// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use quill_imaging::Pen;

use crate::InkError;

/// Screen thickness of a stroke with thickness `base` at the given scale.
///
/// Linear in `scale`: a stroke keeps its size relative to the zoomed page, and
/// zooming in by `k` then out by `1/k` restores the exact thickness whenever
/// the scale itself round-trips.
#[inline]
pub fn scaled_thickness(scale: f64, base: f64) -> f64 {
    base * scale
}

/// Pen thickness and color of a primitive.
///
/// Thickness is in document units and is never stored pre-scaled; use
/// [`StrokeStyle::scaled_thickness`] for the on-screen width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    thickness: f64,
    color: Color,
}

impl StrokeStyle {
    /// Creates a style, rejecting negative or non-finite thickness.
    pub fn new(thickness: f64, color: Color) -> Result<Self, InkError> {
        if !thickness.is_finite() || thickness < 0.0 {
            return Err(InkError::InvalidThickness(thickness));
        }
        Ok(Self { thickness, color })
    }

    /// Creates a style from a packed `0xAARRGGBB` color.
    pub fn from_argb(thickness: f64, argb: u32) -> Result<Self, InkError> {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::new(thickness, Color::from_rgba8(r, g, b, a))
    }

    /// Thickness in document units.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Stroke color packed as straight-alpha `0xAARRGGBB`.
    pub fn argb(&self) -> u32 {
        let rgba = self.color.to_rgba8();
        u32::from_be_bytes([rgba.a, rgba.r, rgba.g, rgba.b])
    }

    /// On-screen thickness at `scale`.
    pub fn scaled_thickness(&self, scale: f64) -> f64 {
        scaled_thickness(scale, self.thickness)
    }

    /// The pen this style strokes with at `scale`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "surfaces take f32 widths"
    )]
    pub fn pen(&self, scale: f64) -> Pen {
        Pen::round(self.scaled_thickness(scale) as f32, self.color)
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            thickness: 2.0,
            color: Color::BLACK,
        }
    }
}
