// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use quill_view::Transformation;

use crate::InkError;
use crate::cache::ProjectionCache;

/// Largest magnitude a projected screen coordinate takes.
///
/// Points that would project further out, or overflow, are pinned to this
/// bound so that bounds and intersection math only ever see finite values.
pub const MAX_SCREEN_COORDINATE: f64 = 1.0e15;

/// A document-space vertex with a lazily cached screen projection.
///
/// The projection is dirty while the cache is empty or was taken under a
/// different transformation stamp. Reading [`Controlpoint::screen`] refreshes
/// it through the transformation and clears the dirty state.
///
/// Control points are owned by exactly one primitive. Moving one goes through
/// the primitive (for example [`crate::GraphicsPrimitive::move_controlpoint`])
/// so that the primitive's bounding box is invalidated with it.
#[derive(Clone, Debug)]
pub struct Controlpoint {
    doc: Point,
    screen: ProjectionCache<Point>,
}

impl Controlpoint {
    /// Creates a control point at a document position.
    pub fn new(doc: Point) -> Result<Self, InkError> {
        Ok(Self {
            doc: InkError::check_point(doc)?,
            screen: ProjectionCache::new(),
        })
    }

    /// Creates a control point under a screen position, as input arrives.
    pub fn from_screen(screen: Point, t: &Transformation) -> Result<Self, InkError> {
        Self::new(t.to_doc(InkError::check_point(screen)?))
    }

    /// Position in document space.
    pub fn document_position(&self) -> Point {
        self.doc
    }

    /// Position in screen space under `t`.
    pub fn screen(&self, t: &Transformation) -> Point {
        self.screen
            .get_or_update(t.stamp(), || pin_to_screen_range(t.to_screen(self.doc)))
    }

    /// Screen x coordinate under `t`.
    pub fn screen_x(&self, t: &Transformation) -> f64 {
        self.screen(t).x
    }

    /// Screen y coordinate under `t`.
    pub fn screen_y(&self, t: &Transformation) -> f64 {
        self.screen(t).y
    }

    /// Returns `true` if the cached projection is valid for `t`.
    pub fn is_projection_current(&self, t: &Transformation) -> bool {
        self.screen.is_current(t.stamp())
    }

    pub(crate) fn set_document_position(&mut self, doc: Point) -> Result<(), InkError> {
        self.doc = InkError::check_point(doc)?;
        self.screen.invalidate();
        Ok(())
    }
}

fn pin_to_screen_range(pt: Point) -> Point {
    let pin = |v: f64| v.clamp(-MAX_SCREEN_COORDINATE, MAX_SCREEN_COORDINATE);
    Point::new(pin(pt.x), pin(pt.y))
}
