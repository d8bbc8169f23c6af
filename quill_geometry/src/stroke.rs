// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke-oriented helpers for point queries.
//!
//! These answer "how far is this tap from the rendered stroke?" for a single
//! straight segment with round caps. Polylines are handled by taking the
//! minimum over their segments.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point};

/// Distance from `pt` to the closest point of the segment.
///
/// Zero-length segments degrade to the distance from their single point.
pub fn point_segment_distance(segment: Line, pt: Point) -> f64 {
    let p0 = segment.p0;
    let p1 = segment.p1;
    let vx = p1.x - p0.x;
    let vy = p1.y - p0.y;
    let wx = pt.x - p0.x;
    let wy = pt.y - p0.y;
    let len2 = vx * vx + vy * vy;
    let t = if len2 > 0.0 {
        (wx * vx + wy * vy) / len2
    } else {
        0.0
    };
    let t = t.clamp(0.0, 1.0);
    let dx = pt.x - (p0.x + t * vx);
    let dy = pt.y - (p0.y + t * vy);
    (dx * dx + dy * dy).sqrt()
}

/// A straight segment rendered with round caps (centerline + half-width).
#[derive(Clone, Copy, Debug)]
pub struct StrokedSegment {
    /// The centerline.
    pub line: Line,
    /// Half of the rendered stroke width.
    pub half_width: f64,
}

impl StrokedSegment {
    /// Returns the distance from `pt` to the stroke's outer edge when `pt`
    /// lies within `tolerance` of it, or `None` otherwise.
    ///
    /// Points on or inside the stroke report `0.0`.
    pub fn hit_test(&self, pt: Point, tolerance: f64) -> Option<f64> {
        let dist = point_segment_distance(self.line, pt);
        let outside = (dist - self.half_width).max(0.0);
        (outside <= tolerance.max(0.0)).then_some(outside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_projects_onto_interior() {
        let line = Line::new((0.0, 0.0), (10.0, 0.0));
        assert_eq!(point_segment_distance(line, Point::new(5.0, 3.0)), 3.0);
    }

    #[test]
    fn distance_clamps_to_endpoints() {
        let line = Line::new((0.0, 0.0), (10.0, 0.0));
        assert_eq!(point_segment_distance(line, Point::new(13.0, 4.0)), 5.0);
        assert_eq!(point_segment_distance(line, Point::new(-3.0, -4.0)), 5.0);
    }

    #[test]
    fn degenerate_segment_is_a_point() {
        let dot = Line::new((1.0, 1.0), (1.0, 1.0));
        assert_eq!(point_segment_distance(dot, Point::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn stroked_segment_hit_and_miss() {
        let stroked = StrokedSegment {
            line: Line::new((0.0, 0.0), (10.0, 0.0)),
            half_width: 1.0,
        };

        assert_eq!(stroked.hit_test(Point::new(5.0, 0.0), 0.0), Some(0.0));
        assert_eq!(stroked.hit_test(Point::new(5.0, 0.5), 0.0), Some(0.0));
        assert_eq!(stroked.hit_test(Point::new(5.0, 2.5), 2.0), Some(1.5));
        assert!(stroked.hit_test(Point::new(5.0, 5.0), 1.0).is_none());
    }
}
