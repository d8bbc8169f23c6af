// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial queries for ink primitives.
//!
//! This crate holds the stateless geometry that primitives and the canvas use
//! for culling and selection, built on top of [`kurbo`]:
//!
//! - [`classify_segment_rect`] / [`segment_intersects_rect`] – the two-stage
//!   segment versus axis-aligned rectangle test.
//! - [`inset_bounds`] and [`bounds_overlap`] – bounding-box helpers that
//!   account for the rendered width of a stroke.
//! - [`stroke`] – distance-based tests against stroked segments, used for
//!   tap selection and control-point picking.
//!
//! # The segment/rectangle test
//!
//! The segment `p0 → p1` is first treated as the infinite line
//!
//! ```text
//! F(x, y) = (y1 - y0)·x + (x0 - x1)·y + (x1·y0 - x0·y1)
//! ```
//!
//! evaluated at the four rectangle corners. If all four values share a strict
//! sign the line passes the rectangle by and the test stops there. Otherwise
//! the segment's own bounding box is compared against the rectangle. Both
//! stages are a handful of multiply-adds and comparisons; no clipping is
//! performed. Touching counts as intersecting.
//!
//! ```rust
//! use kurbo::{Line, Rect};
//! use quill_geometry::{SegmentRectTest, classify_segment_rect};
//!
//! let diagonal = Line::new((0.0, 0.0), (10.0, 10.0));
//! let above = Rect::new(0.0, 20.0, 10.0, 30.0);
//! assert_eq!(classify_segment_rect(diagonal, above), SegmentRectTest::LineMisses);
//! ```

#![no_std]

use kurbo::{Line, Point, Rect};

/// Distance-based helpers for stroked segments.
pub mod stroke;

/// Outcome of [`classify_segment_rect`], recording which stage decided.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SegmentRectTest {
    /// All four corners lie strictly on one side of the infinite line.
    ///
    /// Decided by the first stage; the segment bounds were never examined.
    LineMisses,
    /// The infinite line crosses the rectangle but the segment's bounding
    /// box is disjoint from it.
    SegmentMisses,
    /// The segment and rectangle intersect.
    Intersects,
}

impl SegmentRectTest {
    /// Returns `true` for [`SegmentRectTest::Intersects`].
    #[inline]
    pub fn is_hit(self) -> bool {
        matches!(self, Self::Intersects)
    }
}

/// Classify a segment against an axis-aligned rectangle.
///
/// The rectangle may be given with its corners in any order. A zero-length
/// segment intersects exactly the rectangles that contain its point, edges
/// included.
pub fn classify_segment_rect(segment: Line, rect: Rect) -> SegmentRectTest {
    let rect = rect.abs();
    let Line {
        p0: Point { x: x0, y: y0 },
        p1: Point { x: x1, y: y1 },
    } = segment;

    let dy = y1 - y0;
    let dx = x0 - x1;
    let c = x1 * y0 - x0 * y1;
    let f = |x: f64, y: f64| dy * x + dx * y + c;
    let corners = [
        f(rect.x0, rect.y0),
        f(rect.x0, rect.y1),
        f(rect.x1, rect.y0),
        f(rect.x1, rect.y1),
    ];
    if corners.iter().all(|v| *v < 0.0) || corners.iter().all(|v| *v > 0.0) {
        return SegmentRectTest::LineMisses;
    }

    if x0.min(x1) > rect.x1 || x0.max(x1) < rect.x0 || y0.min(y1) > rect.y1 || y0.max(y1) < rect.y0
    {
        return SegmentRectTest::SegmentMisses;
    }
    SegmentRectTest::Intersects
}

/// Returns `true` if the segment touches or crosses the rectangle.
#[inline]
pub fn segment_intersects_rect(segment: Line, rect: Rect) -> bool {
    classify_segment_rect(segment, rect).is_hit()
}

/// Grow `rect` by `inset` on every side.
///
/// Stroke bounds use this with half the rendered stroke width plus a pixel
/// margin, so that thick strokes are not culled at their visual edges. The
/// result is normalized; negative insets shrink but never invert the rect.
pub fn inset_bounds(rect: Rect, inset: f64) -> Rect {
    let rect = rect.abs();
    let grown = rect.inflate(inset, inset);
    if grown.x0 > grown.x1 || grown.y0 > grown.y1 {
        let c = rect.center();
        return Rect::from_points(c, c);
    }
    grown
}

/// Inclusive overlap test between two rectangles.
///
/// Unlike `Rect::intersect(..).area() > 0.0`, rectangles that merely share an
/// edge, and zero-area rectangles lying inside the other, count as
/// overlapping.
pub fn bounds_overlap(a: Rect, b: Rect) -> bool {
    let a = a.abs();
    let b = b.abs();
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Returns `true` if both coordinates are finite.
#[inline]
pub fn is_finite_point(pt: Point) -> bool {
    pt.x.is_finite() && pt.y.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_segment_crosses_rect() {
        let line = Line::new((0.0, 0.0), (10.0, 0.0));
        let rect = Rect::new(2.0, -1.0, 8.0, 1.0);
        assert_eq!(
            classify_segment_rect(line, rect),
            SegmentRectTest::Intersects
        );
    }

    #[test]
    fn horizontal_segment_far_from_rect() {
        let line = Line::new((0.0, 0.0), (10.0, 0.0));
        let rect = Rect::new(20.0, 20.0, 30.0, 30.0);
        assert!(!segment_intersects_rect(line, rect));
    }

    #[test]
    fn diagonal_rejected_by_line_stage() {
        let line = Line::new((0.0, 0.0), (10.0, 10.0));
        let rect = Rect::new(0.0, 20.0, 10.0, 30.0);
        assert_eq!(
            classify_segment_rect(line, rect),
            SegmentRectTest::LineMisses
        );
    }

    #[test]
    fn extended_line_crosses_but_segment_stops_short() {
        // y = x passes through [20, 30]², but the segment ends at (10, 10).
        let line = Line::new((0.0, 0.0), (10.0, 10.0));
        let rect = Rect::new(20.0, 20.0, 30.0, 30.0);
        assert_eq!(
            classify_segment_rect(line, rect),
            SegmentRectTest::SegmentMisses
        );
    }

    #[test]
    fn segment_fully_inside_rect() {
        let line = Line::new((3.0, 3.0), (4.0, 5.0));
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(segment_intersects_rect(line, rect));
    }

    #[test]
    fn direction_does_not_matter() {
        let rect = Rect::new(2.0, -1.0, 8.0, 1.0);
        let forward = Line::new((0.0, 0.0), (10.0, 0.0));
        let backward = Line::new((10.0, 0.0), (0.0, 0.0));
        assert_eq!(
            classify_segment_rect(forward, rect),
            classify_segment_rect(backward, rect)
        );
    }

    #[test]
    fn unnormalized_rect_is_accepted() {
        let line = Line::new((0.0, 0.0), (10.0, 0.0));
        let flipped = Rect::new(8.0, 1.0, 2.0, -1.0);
        assert!(segment_intersects_rect(line, flipped));
    }

    #[test]
    fn zero_length_segment_is_point_in_rect() {
        let dot = Line::new((5.0, 5.0), (5.0, 5.0));
        assert!(segment_intersects_rect(dot, Rect::new(4.0, 4.0, 6.0, 6.0)));
        assert!(segment_intersects_rect(dot, Rect::new(5.0, 5.0, 6.0, 6.0)));
        assert!(!segment_intersects_rect(dot, Rect::new(6.0, 6.0, 7.0, 7.0)));
    }

    #[test]
    fn touching_corner_counts() {
        let line = Line::new((0.0, 0.0), (10.0, 10.0));
        let rect = Rect::new(10.0, 10.0, 12.0, 12.0);
        assert!(segment_intersects_rect(line, rect));
    }

    #[test]
    fn inset_grows_and_never_inverts() {
        let r = Rect::new(0.0, 0.0, 10.0, 4.0);
        assert_eq!(inset_bounds(r, 2.0), Rect::new(-2.0, -2.0, 12.0, 6.0));
        let shrunk = inset_bounds(r, -3.0);
        assert!(shrunk.x0 <= shrunk.x1 && shrunk.y0 <= shrunk.y1);
    }

    #[test]
    fn inset_of_point_is_non_degenerate() {
        let p = Point::new(3.0, 3.0);
        let r = inset_bounds(Rect::from_points(p, p), 1.5);
        assert_eq!(r.width(), 3.0);
        assert_eq!(r.height(), 3.0);
    }

    #[test]
    fn overlap_is_inclusive() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(bounds_overlap(a, Rect::new(10.0, 0.0, 20.0, 10.0)));
        assert!(bounds_overlap(a, Rect::new(5.0, 5.0, 5.0, 5.0)));
        assert!(!bounds_overlap(a, Rect::new(10.5, 0.0, 20.0, 10.0)));
    }

    #[test]
    fn finite_point_check() {
        assert!(is_finite_point(Point::new(1.0, 2.0)));
        assert!(!is_finite_point(Point::new(f64::NAN, 2.0)));
        assert!(!is_finite_point(Point::new(1.0, f64::NEG_INFINITY)));
    }
}
