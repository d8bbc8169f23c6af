// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::stamp::ProjectionStamp;

/// Uniform pan + zoom mapping from document space to screen space.
///
/// A document point `d` maps to `view_origin + offset + d * scale` on screen.
/// The forward and inverse affines are rebuilt together on every mutation, so
/// `to_doc(to_screen(p)) == p` holds up to floating-point rounding for any
/// reachable state.
///
/// Mutations that would introduce non-finite values, or a non-positive scale,
/// are ignored and leave the current state (and stamp) untouched.
#[derive(Clone, Debug)]
pub struct Transformation {
    view_rect: Rect,
    scale: f64,
    offset: Vec2,
    min_scale: f64,
    max_scale: f64,
    doc_to_screen: Affine,
    screen_to_doc: Affine,
    stamp: ProjectionStamp,
}

impl Transformation {
    /// Creates an identity transformation over `view_rect`.
    ///
    /// - Initial scale is `1.0`.
    /// - Initial offset is zero (document origin maps to the view rect origin).
    /// - Scale is clamped to the range `[1e-3, 1e3]` by default.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut t = Self {
            view_rect,
            scale: 1.0,
            offset: Vec2::ZERO,
            min_scale: 1e-3,
            max_scale: 1e3,
            doc_to_screen: Affine::IDENTITY,
            screen_to_doc: Affine::IDENTITY,
            stamp: ProjectionStamp::fresh(),
        };
        t.rebuild();
        t
    }

    /// Creates a transformation with an explicit scale and offset.
    ///
    /// Invalid values fall back to the defaults of [`Transformation::new`].
    #[must_use]
    pub fn with_scale_and_offset(view_rect: Rect, scale: f64, offset: Vec2) -> Self {
        let mut t = Self::new(view_rect);
        t.set_scale(scale);
        t.set_offset(offset);
        t
    }

    /// Stamp identifying the current mapping.
    ///
    /// Any cached screen projection taken under a different stamp is stale.
    #[must_use]
    pub fn stamp(&self) -> ProjectionStamp {
        self.stamp
    }

    /// Returns the screen rectangle the document is shown in.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the screen rectangle.
    ///
    /// Scale and offset are kept; the mapping moves with the rect origin.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect || !rect_is_finite(rect) {
            return;
        }
        self.view_rect = rect;
        self.rebuild();
    }

    /// Current uniform scale: screen pixels per document unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current pan offset in screen units.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Sets the scale, clamping it into the configured range.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() || scale <= 0.0 {
            return;
        }
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        if (self.scale - clamped).abs() < f64::EPSILON {
            return;
        }
        self.scale = clamped;
        self.rebuild();
    }

    /// Sets the pan offset in screen units.
    pub fn set_offset(&mut self, offset: Vec2) {
        if !offset.is_finite() || offset == self.offset {
            return;
        }
        self.offset = offset;
        self.rebuild();
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The range is normalized so that `min <= max` and the current scale is
    /// clamped into it. Non-finite or non-positive limits are ignored.
    pub fn set_zoom_limits(&mut self, min_scale: f64, max_scale: f64) {
        if !(min_scale.is_finite() && max_scale.is_finite()) || min_scale <= 0.0 || max_scale <= 0.0
        {
            return;
        }
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.set_scale(self.scale);
    }

    /// Returns the configured `(min, max)` scale range.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Pans by a delta in screen space.
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.offset += delta;
        self.rebuild();
    }

    /// Zooms by `factor` around an anchor point given in screen coordinates.
    ///
    /// The document point under the anchor stays under the anchor, as far as
    /// the scale limits allow.
    pub fn zoom_about_screen_point(&mut self, anchor: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 || !anchor.is_finite() {
            return;
        }
        let old_scale = self.scale;
        let new_scale = (old_scale * factor).clamp(self.min_scale, self.max_scale);
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return;
        }

        let anchored_doc = self.to_doc(anchor);
        self.scale = new_scale;
        self.rebuild();
        let drift = anchor - self.to_screen(anchored_doc);
        if drift != Vec2::ZERO {
            self.offset += drift;
            self.rebuild();
        }
    }

    /// Document rectangle currently visible through the view rect.
    #[must_use]
    pub fn visible_document_rect(&self) -> Rect {
        self.to_doc_rect(self.view_rect)
    }

    /// Maps a document point to screen coordinates.
    #[must_use]
    pub fn to_screen(&self, doc: Point) -> Point {
        self.doc_to_screen * doc
    }

    /// Maps a screen point to document coordinates.
    #[must_use]
    pub fn to_doc(&self, screen: Point) -> Point {
        self.screen_to_doc * screen
    }

    /// Maps a document rectangle to screen coordinates.
    #[must_use]
    pub fn to_screen_rect(&self, rect: Rect) -> Rect {
        // Axis-aligned with a positive uniform scale, so the two corners suffice.
        Rect::from_points(
            self.to_screen(Point::new(rect.x0, rect.y0)),
            self.to_screen(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Maps a screen rectangle to document coordinates.
    #[must_use]
    pub fn to_doc_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.to_doc(Point::new(rect.x0, rect.y0)),
            self.to_doc(Point::new(rect.x1, rect.y1)),
        )
    }

    /// The document → screen affine.
    #[must_use]
    pub fn doc_to_screen(&self) -> Affine {
        self.doc_to_screen
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TransformationDebugInfo {
        TransformationDebugInfo {
            view_rect: self.view_rect,
            visible_document_rect: self.visible_document_rect(),
            scale: self.scale,
            offset: self.offset,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            stamp: self.stamp,
        }
    }

    fn rebuild(&mut self) {
        let view_origin = self.view_rect.origin().to_vec2();
        // Document → screen: scale, then translate by pan and into the view rect.
        self.doc_to_screen = Affine::translate(view_origin + self.offset) * Affine::scale(self.scale);
        self.screen_to_doc = self.doc_to_screen.inverse();
        self.stamp = ProjectionStamp::fresh();
    }
}

fn rect_is_finite(rect: Rect) -> bool {
    rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite()
}

/// Debug snapshot of a [`Transformation`].
#[derive(Clone, Copy, Debug)]
pub struct TransformationDebugInfo {
    /// Screen rectangle the document is shown in.
    pub view_rect: Rect,
    /// Document rectangle currently visible.
    pub visible_document_rect: Rect,
    /// Current scale.
    pub scale: f64,
    /// Current pan offset in screen units.
    pub offset: Vec2,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Stamp of the current mapping.
    pub stamp: ProjectionStamp,
}
