// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use kurbo::{Line, Point, Rect};
use quill_geometry::segment_intersects_rect;
use quill_geometry::stroke::StrokedSegment;
use quill_imaging::{DrawOp, PointF, RectF, Surface, SurfaceExt};
use quill_view::Transformation;

use crate::primitive::PrimitiveCore;
use crate::{
    Controlpoint, GraphicsPrimitive, InkError, PrimitiveKind, StrokeStyle, ZERO_LENGTH_NUDGE,
};

/// A freehand polyline, grown one sample at a time while the stylus moves.
///
/// Always holds at least one control point. A single point behaves like a
/// degenerate line: it has real bounds and renders as a dot.
#[derive(Clone, Debug)]
pub struct FreehandStroke {
    points: Vec<Controlpoint>,
    core: PrimitiveCore,
}

impl FreehandStroke {
    /// Starts a stroke at a screen position.
    pub fn new(screen: Point, style: StrokeStyle, t: &Transformation) -> Result<Self, InkError> {
        Ok(Self {
            points: vec![Controlpoint::from_screen(screen, t)?],
            core: PrimitiveCore::new(style),
        })
    }

    /// Creates a stroke through document positions.
    ///
    /// Returns `None` for an empty list.
    pub fn from_document(
        points: impl IntoIterator<Item = Point>,
        style: StrokeStyle,
    ) -> Result<Option<Self>, InkError> {
        let points = points
            .into_iter()
            .map(Controlpoint::new)
            .collect::<Result<Vec<_>, _>>()?;
        if points.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self {
            points,
            core: PrimitiveCore::new(style),
        }))
    }

    /// Appends a sample under a screen position.
    ///
    /// Returns `false` when the sample lands on the last point and was
    /// skipped.
    pub fn extend_screen(&mut self, screen: Point, t: &Transformation) -> Result<bool, InkError> {
        let cp = Controlpoint::from_screen(screen, t)?;
        if self
            .points
            .last()
            .is_some_and(|last| last.document_position() == cp.document_position())
        {
            return Ok(false);
        }
        self.points.push(cp);
        self.core.invalidate_bounds();
        Ok(true)
    }

    /// Number of control points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Screen-space centerline segments. A single point yields one
    /// zero-length segment.
    pub fn screen_segments<'a>(
        &'a self,
        t: &'a Transformation,
    ) -> impl Iterator<Item = Line> + 'a {
        let dot = match self.points.as_slice() {
            [only] => {
                let p = only.screen(t);
                Some(Line::new(p, p))
            }
            _ => None,
        };
        dot.into_iter().chain(
            self.points
                .windows(2)
                .map(move |w| Line::new(w[0].screen(t), w[1].screen(t))),
        )
    }
}

impl GraphicsPrimitive for FreehandStroke {
    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Stroke
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
        self.points.len().saturating_sub(1)
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
        self.screen_segments(t)
            .any(|seg| segment_intersects_rect(seg, screen_rect))
    }

    fn hit_test(&self, screen_pt: Point, tolerance: f64, t: &Transformation) -> Option<f64> {
        let half_width = self.core.half_width(t);
        self.screen_segments(t)
            .filter_map(|line| StrokedSegment { line, half_width }.hit_test(screen_pt, tolerance))
            .min_by(f64::total_cmp)
    }

    fn draw(&self, surface: &mut dyn Surface, clip: Rect, t: &Transformation) {
        let pen = self.core.style.pen(t.scale());
        let op = match self.points.as_slice() {
            [only] => {
                let p = only.screen(t);
                let p0 = PointF::from_kurbo(Point::new(p.x + ZERO_LENGTH_NUDGE, p.y));
                let p1 = PointF::from_kurbo(p);
                DrawOp::StrokeLine {
                    x0: p0.x,
                    y0: p0.y,
                    x1: p1.x,
                    y1: p1.y,
                }
            }
            points => {
                let screen: Arc<[PointF]> = points
                    .iter()
                    .map(|cp| PointF::from_kurbo(cp.screen(t)))
                    .collect();
                DrawOp::StrokePolyline(screen)
            }
        };
        surface.with_clip_rect(RectF::from_kurbo(clip), |s| {
            s.set_pen(pen);
            s.draw(op);
        });
    }
}
