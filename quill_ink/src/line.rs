// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Rect};
use quill_geometry::segment_intersects_rect;
use quill_geometry::stroke::StrokedSegment;
use quill_imaging::{DrawOp, PointF, RectF, Surface, SurfaceExt};
use quill_view::Transformation;

use crate::primitive::PrimitiveCore;
use crate::{Controlpoint, GraphicsPrimitive, InkError, PrimitiveKind, StrokeStyle};

/// Screen-space x offset applied to the first endpoint when drawing.
///
/// Surfaces may draw nothing for a zero-length segment; the nudge turns a tap
/// into a visible dot. Queries never see it.
pub const ZERO_LENGTH_NUDGE: f64 = 0.1;

/// A straight line between two control points.
///
/// Point 0 is where the stroke started; point 1 is the end that follows the
/// stylus while the line is being drawn.
#[derive(Clone, Debug)]
pub struct GraphicsLine {
    points: [Controlpoint; 2],
    core: PrimitiveCore,
}

impl GraphicsLine {
    /// Starts a line at a screen position, with both ends on that point.
    pub fn new(screen: Point, style: StrokeStyle, t: &Transformation) -> Result<Self, InkError> {
        let start = Controlpoint::from_screen(screen, t)?;
        Ok(Self {
            points: [start.clone(), start],
            core: PrimitiveCore::new(style),
        })
    }

    /// Creates a line between two document positions.
    pub fn from_document(p0: Point, p1: Point, style: StrokeStyle) -> Result<Self, InkError> {
        Ok(Self {
            points: [Controlpoint::new(p0)?, Controlpoint::new(p1)?],
            core: PrimitiveCore::new(style),
        })
    }

    /// The start point.
    pub fn start(&self) -> &Controlpoint {
        &self.points[0]
    }

    /// The end point.
    pub fn end(&self) -> &Controlpoint {
        &self.points[1]
    }

    /// Moves the end point under a screen position, as while dragging.
    pub fn set_end_screen(&mut self, screen: Point, t: &Transformation) -> Result<(), InkError> {
        let doc = t.to_doc(InkError::check_point(screen)?);
        self.move_controlpoint(1, doc)
    }

    /// The centerline in screen space, without the draw nudge.
    pub fn screen_segment(&self, t: &Transformation) -> Line {
        Line::new(self.points[0].screen(t), self.points[1].screen(t))
    }
}

impl GraphicsPrimitive for GraphicsLine {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Line
    }

    fn controlpoints(&self) -> &[Controlpoint] {
        &self.points
    }

    fn style(&self) -> StrokeStyle {
        self.core.style
    }

    fn set_style(&mut self, style: StrokeStyle) {
        self.core.set_style(style);
    }

    fn initial_controlpoint(&self) -> usize {
        1
    }

    fn move_controlpoint(&mut self, index: usize, doc: Point) -> Result<(), InkError> {
        let len = self.points.len();
        let cp = self
            .points
            .get_mut(index)
            .ok_or(InkError::ControlpointOutOfRange { index, len })?;
        cp.set_document_position(doc)?;
        self.core.invalidate_bounds();
        Ok(())
    }

    fn bounding_box(&self, t: &Transformation) -> Rect {
        self.core.bounding_box(&self.points, t)
    }

    fn intersects(&self, screen_rect: Rect, t: &Transformation) -> bool {
        segment_intersects_rect(self.screen_segment(t), screen_rect)
    }

    fn hit_test(&self, screen_pt: Point, tolerance: f64, t: &Transformation) -> Option<f64> {
        StrokedSegment {
            line: self.screen_segment(t),
            half_width: self.core.half_width(t),
        }
        .hit_test(screen_pt, tolerance)
    }

    fn draw(&self, surface: &mut dyn Surface, clip: Rect, t: &Transformation) {
        let Line { p0, p1 } = self.screen_segment(t);
        let p0 = PointF::from_kurbo(Point::new(p0.x + ZERO_LENGTH_NUDGE, p0.y));
        let p1 = PointF::from_kurbo(p1);
        let pen = self.core.style.pen(t.scale());
        surface.with_clip_rect(RectF::from_kurbo(clip), |s| {
            s.set_pen(pen);
            s.draw(DrawOp::StrokeLine {
                x0: p0.x,
                y0: p0.y,
                x1: p1.x,
                y1: p1.y,
            });
        });
    }
}
