// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use peniko::Color;
use quill_imaging::Surface;
use quill_view::Transformation;

use crate::cache::ProjectionCache;
use crate::{Controlpoint, FreehandStroke, GraphicsLine, InkError, StrokeStyle};

/// Fixed pixel margin added around every bounding box, beyond half the
/// scaled stroke width.
pub const BOUNDING_BOX_MARGIN: f64 = 1.0;

/// The concrete kind of a primitive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PrimitiveKind {
    /// A straight two-point line.
    Line,
    /// A freehand polyline.
    Stroke,
}

/// The contract every ink primitive implements.
///
/// Queries take the current [`Transformation`] and answer in screen space.
/// None of them mutate geometry; the only state they touch is the projection
/// caches, which refresh themselves when the transformation's stamp changes.
pub trait GraphicsPrimitive {
    /// The concrete kind.
    fn kind(&self) -> PrimitiveKind;

    /// Control points in their semantic order.
    fn controlpoints(&self) -> &[Controlpoint];

    /// The current style.
    fn style(&self) -> StrokeStyle;

    /// Replace the style. Drops the cached bounding box.
    fn set_style(&mut self, style: StrokeStyle);

    /// Index of the control point the stylus keeps hold of while drawing.
    fn initial_controlpoint(&self) -> usize;

    /// Move one control point to a new document position.
    ///
    /// Drops the cached bounding box. On error nothing changes.
    fn move_controlpoint(&mut self, index: usize, doc: Point) -> Result<(), InkError>;

    /// Screen-space bounds of the rendered stroke, grown by
    /// [`GraphicsPrimitive::bounding_box_inset`].
    ///
    /// Never empty: a primitive whose points coincide still reports a box at
    /// least `scaled thickness + 2 * BOUNDING_BOX_MARGIN` wide and tall.
    fn bounding_box(&self, t: &Transformation) -> Rect;

    /// Whether the stroke's centerline touches `screen_rect`.
    ///
    /// Stroke width is not part of the test: a rect that only overlaps the
    /// painted edge of a thick stroke misses. Callers that need the painted
    /// extent grow the rect by [`GraphicsPrimitive::bounding_box_inset`]
    /// first, as view culling does.
    fn intersects(&self, screen_rect: Rect, t: &Transformation) -> bool;

    /// Distance from `screen_pt` to the stroked shape, if within `tolerance`.
    ///
    /// Points on the stroke report `0.0`.
    fn hit_test(&self, screen_pt: Point, tolerance: f64, t: &Transformation) -> Option<f64>;

    /// Emit the stroke into `surface`, clipped to `clip` (screen space).
    fn draw(&self, surface: &mut dyn Surface, clip: Rect, t: &Transformation);

    /// Half the scaled stroke width plus [`BOUNDING_BOX_MARGIN`].
    fn bounding_box_inset(&self, t: &Transformation) -> f64 {
        self.style().scaled_thickness(t.scale()) / 2.0 + BOUNDING_BOX_MARGIN
    }

    /// Owned copy of the document-space geometry and style.
    fn snapshot(&self) -> PrimitiveSnapshot {
        let style = self.style();
        PrimitiveSnapshot {
            kind: self.kind(),
            points: self
                .controlpoints()
                .iter()
                .map(Controlpoint::document_position)
                .collect(),
            thickness: style.thickness(),
            color: style.color(),
        }
    }
}

/// Immutable, thread-safe copy of a primitive's geometry.
///
/// Snapshots carry no caches and no link back to the live primitive, so later
/// edits never show through.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveSnapshot {
    /// The primitive kind.
    pub kind: PrimitiveKind,
    /// Control points in document space.
    pub points: Vec<Point>,
    /// Stroke thickness in document units.
    pub thickness: f64,
    /// Stroke color.
    pub color: Color,
}

/// Style and cached bounds shared by the concrete primitives.
#[derive(Clone, Debug)]
pub(crate) struct PrimitiveCore {
    pub(crate) style: StrokeStyle,
    bounds: ProjectionCache<Rect>,
}

impl PrimitiveCore {
    pub(crate) const fn new(style: StrokeStyle) -> Self {
        Self {
            style,
            bounds: ProjectionCache::new(),
        }
    }

    pub(crate) fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
        self.bounds.invalidate();
    }

    pub(crate) fn invalidate_bounds(&self) {
        self.bounds.invalidate();
    }

    pub(crate) fn bounding_box(&self, points: &[Controlpoint], t: &Transformation) -> Rect {
        self.bounds.get_or_update(t.stamp(), || {
            let mut screen = points.iter().map(|cp| cp.screen(t));
            let Some(first) = screen.next() else {
                return Rect::ZERO;
            };
            let extent = screen.fold(Rect::from_points(first, first), |r, p| r.union_pt(p));
            let inset = self.style.scaled_thickness(t.scale()) / 2.0 + BOUNDING_BOX_MARGIN;
            let bounds = quill_geometry::inset_bounds(extent, inset);
            tracing::trace!(?bounds, points = points.len(), "recomputed bounding box");
            bounds
        })
    }

    pub(crate) fn half_width(&self, t: &Transformation) -> f64 {
        self.style.scaled_thickness(t.scale()) / 2.0
    }
}

/// A primitive of any kind.
///
/// Canvases store this closed set and dispatch through
/// [`GraphicsPrimitive`] without boxing.
#[derive(Clone, Debug)]
pub enum Primitive {
    /// A straight line.
    Line(GraphicsLine),
    /// A freehand stroke.
    Stroke(FreehandStroke),
}

impl From<GraphicsLine> for Primitive {
    fn from(line: GraphicsLine) -> Self {
        Self::Line(line)
    }
}

impl From<FreehandStroke> for Primitive {
    fn from(stroke: FreehandStroke) -> Self {
        Self::Stroke(stroke)
    }
}

macro_rules! dispatch {
    ($self:ident, $p:ident => $body:expr) => {
        match $self {
            Primitive::Line($p) => $body,
            Primitive::Stroke($p) => $body,
        }
    };
}

impl GraphicsPrimitive for Primitive {
    fn kind(&self) -> PrimitiveKind {
        dispatch!(self, p => p.kind())
    }

    fn controlpoints(&self) -> &[Controlpoint] {
        dispatch!(self, p => p.controlpoints())
    }

    fn style(&self) -> StrokeStyle {
        dispatch!(self, p => p.style())
    }

    fn set_style(&mut self, style: StrokeStyle) {
        dispatch!(self, p => p.set_style(style));
    }

    fn initial_controlpoint(&self) -> usize {
        dispatch!(self, p => p.initial_controlpoint())
    }

    fn move_controlpoint(&mut self, index: usize, doc: Point) -> Result<(), InkError> {
        dispatch!(self, p => p.move_controlpoint(index, doc))
    }

    fn bounding_box(&self, t: &Transformation) -> Rect {
        dispatch!(self, p => p.bounding_box(t))
    }

    fn intersects(&self, screen_rect: Rect, t: &Transformation) -> bool {
        dispatch!(self, p => p.intersects(screen_rect, t))
    }

    fn hit_test(&self, screen_pt: Point, tolerance: f64, t: &Transformation) -> Option<f64> {
        dispatch!(self, p => p.hit_test(screen_pt, tolerance, t))
    }

    fn draw(&self, surface: &mut dyn Surface, clip: Rect, t: &Transformation) {
        dispatch!(self, p => p.draw(surface, clip, t));
    }
}
