// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Round-trip laws for `Transformation` across arbitrary pan/zoom states.

use kurbo::{Point, Rect, Vec2};
use proptest::prelude::*;
use quill_view::Transformation;

fn view() -> Rect {
    Rect::new(0.0, 0.0, 1024.0, 768.0)
}

proptest! {
    #[test]
    fn doc_screen_doc_is_identity(
        scale in 0.01_f64..100.0,
        ox in -5_000.0_f64..5_000.0,
        oy in -5_000.0_f64..5_000.0,
        x in -10_000.0_f64..10_000.0,
        y in -10_000.0_f64..10_000.0,
    ) {
        let t = Transformation::with_scale_and_offset(view(), scale, Vec2::new(ox, oy));
        let p = Point::new(x, y);
        let back = t.to_doc(t.to_screen(p));
        let tol = 1e-9 * (1.0 + x.abs().max(y.abs()) + ox.abs().max(oy.abs()) / scale);
        prop_assert!((back.x - p.x).abs() <= tol, "x drifted: {} vs {}", back.x, p.x);
        prop_assert!((back.y - p.y).abs() <= tol, "y drifted: {} vs {}", back.y, p.y);
    }

    #[test]
    fn zoom_in_then_out_restores_mapping(
        factor in 0.1_f64..10.0,
        ax in 0.0_f64..1024.0,
        ay in 0.0_f64..768.0,
        x in -1_000.0_f64..1_000.0,
        y in -1_000.0_f64..1_000.0,
    ) {
        let mut t = Transformation::new(view());
        let anchor = Point::new(ax, ay);
        let p = Point::new(x, y);
        let before = t.to_screen(p);
        t.zoom_about_screen_point(anchor, factor);
        t.zoom_about_screen_point(anchor, 1.0 / factor);
        let after = t.to_screen(p);
        prop_assert!((after.x - before.x).abs() < 1e-6);
        prop_assert!((after.y - before.y).abs() < 1e-6);
    }
}
