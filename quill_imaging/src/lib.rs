// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill Imaging: the drawing surface that ink primitives render into.
//!
//! Primitives do not talk to a rasterizer directly. They emit a short program
//! of plain‑old‑data operations against a [`Surface`]:
//!
//! - [`StateOp`] mutates the current state: the active [`Pen`] and the stack of
//!   rectangular clip scopes.
//! - [`DrawOp`] produces pixels with the current state: stroked line segments
//!   and polylines in screen coordinates.
//! - [`ImagingOp`] unifies both for recordings.
//!
//! A concrete platform surface (a GPU canvas, a CPU rasterizer, a test
//! recorder) implements [`Surface`]. [`record_ops`] captures the operations a
//! closure issues into [`RecordedOps`] while still applying them.
//!
//! # Pens
//!
//! A [`Pen`] strokes with a width in screen units, a cap style, a
//! [`peniko::Color`] and an anti-aliasing flag. Surfaces that want packed
//! premultiplied ARGB can use [`Pen::premultiplied_argb`].
//!
//! # Example
//!
//! ```ignore
//! # use quill_imaging::*;
//! # struct MySurface;
//! # impl Surface for MySurface { /* ... */ }
//! let mut surface = MySurface;
//! surface.with_clip_rect(RectF::new(0.0, 0.0, 800.0, 600.0), |s| {
//!     s.state(StateOp::SetPen(Pen::round(2.0, peniko::Color::BLACK)));
//!     s.draw(DrawOp::StrokeLine { x0: 10.1, y0: 10.0, x1: 50.0, y1: 50.0 });
//! });
//! ```

#![no_std]

extern crate alloc;

use alloc::sync::Arc;
use kurbo::Cap;
use peniko::Color;

/// A simple axis-aligned rectangle in f32 coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RectF {
    /// Minimum X coordinate.
    pub x0: f32,
    /// Minimum Y coordinate.
    pub y0: f32,
    /// Maximum X coordinate.
    pub x1: f32,
    /// Maximum Y coordinate.
    pub y1: f32,
}

impl RectF {
    /// Create a new rectangle from min/max corners.
    #[inline]
    pub const fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Convert from kurbo's rectangle type, narrowing to f32.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "surfaces work in f32 screen coordinates"
    )]
    pub fn from_kurbo(rect: kurbo::Rect) -> Self {
        let rect = rect.abs();
        Self::new(
            rect.x0 as f32,
            rect.y0 as f32,
            rect.x1 as f32,
            rect.y1 as f32,
        )
    }

    /// Convert to kurbo's rectangle type.
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

/// A point in f32 screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointF {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl PointF {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert from kurbo's point type, narrowing to f32.
    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "surfaces work in f32 screen coordinates"
    )]
    pub fn from_kurbo(pt: kurbo::Point) -> Self {
        Self::new(pt.x as f32, pt.y as f32)
    }
}

/// Stroke parameters for subsequent draw operations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pen {
    /// Stroke width in screen units.
    pub width: f32,
    /// Straight-alpha color; see [`Pen::premultiplied_argb`].
    pub color: Color,
    /// Cap style applied at both ends of each stroked segment.
    pub cap: Cap,
    /// Whether edges should be anti-aliased.
    pub anti_alias: bool,
}

impl Pen {
    /// Anti-aliased pen with round caps, the style used for ink.
    #[inline]
    pub const fn round(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            cap: Cap::Round,
            anti_alias: true,
        }
    }

    /// The pen color packed as premultiplied `0xAARRGGBB`.
    pub fn premultiplied_argb(&self) -> u32 {
        let rgba = self.color.to_rgba8();
        let a = u32::from(rgba.a);
        let premul = |c: u8| (u32::from(c) * a + 127) / 255;
        (a << 24) | (premul(rgba.r) << 16) | (premul(rgba.g) << 8) | premul(rgba.b)
    }
}

/// State operations that mutate the current drawing state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the pen used by subsequent stroke operations.
    SetPen(Pen),
    /// Push a rectangular clip scope, intersected with any enclosing scope.
    ///
    /// Clip scopes must be well-nested: every `PushClip` must eventually be
    /// matched by a [`StateOp::PopClip`].
    PushClip(RectF),
    /// Pop the most recently pushed clip scope.
    PopClip,
}

/// Draw operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Stroke a single segment with the current pen.
    ///
    /// Surfaces are allowed to draw nothing for a zero-length segment, so
    /// callers that need a dot must offset one endpoint slightly.
    StrokeLine {
        /// Start X coordinate.
        x0: f32,
        /// Start Y coordinate.
        y0: f32,
        /// End X coordinate.
        x1: f32,
        /// End Y coordinate.
        y1: f32,
    },
    /// Stroke an open polyline with the current pen, joined with round joins.
    StrokePolyline(Arc<[PointF]>),
}

/// Unified drawing operation used by recordings.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Operations captured between [`Surface::begin_record`] and
/// [`Surface::end_record`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedOps {
    /// The captured operations in issue order.
    pub ops: Arc<[ImagingOp]>,
}

impl RecordedOps {
    /// Number of draw operations in the recording.
    pub fn draw_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, ImagingOp::Draw(_)))
            .count()
    }
}

/// A 2D drawing surface.
///
/// Implementations are expected to stroke with the pen set most recently via
/// [`StateOp::SetPen`], clipped to the intersection of all open clip scopes.
/// The trait is object safe; primitives draw through `&mut dyn Surface`.
pub trait Surface {
    /// Apply a state operation.
    ///
    /// When called inside an active recording, the operation must both be
    /// applied to the surface and appended to the recording.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Begin capturing subsequent operations into a recording.
    ///
    /// At most one recording is active at a time; a second call restarts it.
    fn begin_record(&mut self);

    /// End the current recording and return the captured operations.
    fn end_record(&mut self) -> RecordedOps;

    /// Set the current pen.
    ///
    /// This is equivalent to `self.state(StateOp::SetPen(pen))`.
    #[inline]
    fn set_pen(&mut self, pen: Pen) {
        self.state(StateOp::SetPen(pen));
    }

    /// Push a rectangular clip scope.
    ///
    /// The clip scope ends when you call [`Surface::pop_clip`].
    #[inline]
    fn push_clip(&mut self, rect: RectF) {
        self.state(StateOp::PushClip(rect));
    }

    /// Pop the most recently pushed clip scope.
    #[inline]
    fn pop_clip(&mut self) {
        self.state(StateOp::PopClip);
    }
}

/// Convenience helpers for [`Surface`] implementations and callers.
///
/// This is separate from [`Surface`] so that methods can accept closures and
/// return values without complicating trait object usage (`&mut dyn Surface`).
pub trait SurfaceExt: Surface {
    /// Run `f` inside a rectangular clip scope, popping it afterwards.
    ///
    /// Note: if `f` panics, the scope will not be popped.
    #[inline]
    fn with_clip_rect<R>(&mut self, rect: RectF, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push_clip(rect);
        let out = f(self);
        self.pop_clip();
        out
    }
}

impl<S: Surface + ?Sized> SurfaceExt for S {}

/// Record a sequence of operations into a [`RecordedOps`].
///
/// This helper wraps [`Surface::begin_record`] / `end_record` and ensures
/// that any state or draw operations issued by `f` are captured in a single
/// recording while still being applied to `surface`.
pub fn record_ops<S, F>(surface: &mut S, f: F) -> RecordedOps
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S),
{
    surface.begin_record();
    f(surface);
    surface.end_record()
}
