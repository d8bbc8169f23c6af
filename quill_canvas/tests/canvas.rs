// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke lifecycle, queries and snapshots on a canvas.

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use quill_canvas::{Canvas, CanvasConfig, CanvasError, DocumentSnapshot, Paper, PaperKind};
use quill_imaging::DrawOp;
use quill_imaging_ref::RefSurface;
use quill_ink::{GraphicsPrimitive, InkError, PrimitiveKind, StrokeStyle};

fn canvas() -> Canvas {
    Canvas::new(Rect::new(0.0, 0.0, 800.0, 600.0))
}

fn line(canvas: &mut Canvas, a: (f64, f64), b: (f64, f64)) -> quill_canvas::PrimitiveId {
    canvas.begin_stroke(PrimitiveKind::Line, a.into()).unwrap();
    canvas.extend_stroke(b.into()).unwrap();
    canvas.commit_stroke().unwrap()
}

#[test]
fn stroke_operations_need_a_stroke() {
    let mut c = canvas();
    assert_eq!(
        c.extend_stroke(Point::new(1.0, 1.0)),
        Err(CanvasError::NoStrokeInProgress)
    );
    assert_eq!(c.commit_stroke(), Err(CanvasError::NoStrokeInProgress));
    assert!(!c.cancel_stroke());
}

#[test]
fn pending_stroke_is_not_part_of_the_document() {
    let mut c = canvas();
    let committed = line(&mut c, (10.0, 10.0), (50.0, 10.0));

    c.begin_stroke(PrimitiveKind::Stroke, Point::new(100.0, 100.0))
        .unwrap();
    c.extend_stroke(Point::new(120.0, 110.0)).unwrap();

    assert_eq!(c.visible(), vec![committed]);
    assert_eq!(c.snapshot().primitives.len(), 1);

    let mut surface = RefSurface::default();
    c.draw(&mut surface);
    assert_eq!(surface.draw_ops().len(), 1);
    assert!(matches!(surface.draw_ops()[0], DrawOp::StrokeLine { .. }));

    surface.clear_events();
    c.draw_pending(&mut surface);
    assert!(matches!(surface.draw_ops()[0], DrawOp::StrokePolyline(_)));

    assert!(c.cancel_stroke());
    assert!(c.pending().is_none());
    assert_eq!(c.len(), 1);
}

#[test]
fn ids_increase_and_revision_tracks_edits() {
    let mut c = canvas();
    let a = line(&mut c, (0.0, 0.0), (10.0, 0.0));
    let b = line(&mut c, (0.0, 5.0), (10.0, 5.0));
    assert!(a < b);
    assert_eq!(c.revision(), 2);

    c.move_controlpoint(a, 1, Point::new(20.0, 0.0)).unwrap();
    c.set_style_of(b, StrokeStyle::new(6.0, Color::WHITE).unwrap())
        .unwrap();
    assert_eq!(c.revision(), 4);
    assert_eq!(c.get(b).unwrap().style().thickness(), 6.0);
}

#[test]
fn edits_on_unknown_or_invalid_targets_are_rejected() {
    let mut c = canvas();
    let a = line(&mut c, (0.0, 0.0), (10.0, 0.0));
    let removed = c.remove(a).unwrap();
    assert_eq!(removed.kind(), PrimitiveKind::Line);
    assert_eq!(
        c.set_style_of(a, StrokeStyle::default()),
        Err(CanvasError::UnknownPrimitive(a))
    );

    let b = line(&mut c, (0.0, 0.0), (10.0, 0.0));
    let before = c.revision();
    let err = c.move_controlpoint(b, 0, Point::new(f64::NAN, 0.0));
    assert!(matches!(
        err,
        Err(CanvasError::Ink(InkError::NonFinite { .. }))
    ));
    assert_eq!(c.revision(), before);
    assert_eq!(
        c.get(b).unwrap().controlpoints()[0].document_position(),
        Point::ZERO
    );
}

#[test]
fn culling_keeps_thick_strokes_at_the_edge() {
    let mut c = canvas();
    c.set_style(StrokeStyle::new(20.0, Color::BLACK).unwrap());
    // Centerline 5px left of the view; the 10px half-width reaches in.
    let edge = line(&mut c, (-5.0, 100.0), (-5.0, 200.0));
    let far = line(&mut c, (-100.0, 100.0), (-100.0, 200.0));
    let inside = line(&mut c, (100.0, 100.0), (200.0, 200.0));
    assert_eq!(c.visible(), vec![edge, inside]);
    assert!(!c.visible().contains(&far));
}

#[test]
fn culling_follows_pan_and_zoom() {
    let mut c = canvas();
    let a = line(&mut c, (700.0, 300.0), (780.0, 300.0));
    assert_eq!(c.visible(), vec![a]);

    c.pan_by(Vec2::new(-900.0, 0.0));
    assert!(c.visible().is_empty());

    c.pan_by(Vec2::new(900.0, 0.0));
    c.zoom_about(Point::new(0.0, 0.0), 0.5);
    assert_eq!(c.visible(), vec![a]);
    assert_eq!(c.transform().to_screen(Point::new(700.0, 300.0)), Point::new(350.0, 150.0));
}

#[test]
fn select_and_erase_by_rect() {
    let mut c = canvas();
    let a = line(&mut c, (0.0, 0.0), (100.0, 100.0));
    let b = line(&mut c, (0.0, 100.0), (100.0, 100.0));
    let _far = line(&mut c, (400.0, 400.0), (500.0, 400.0));

    assert_eq!(c.select_in_rect(Rect::new(40.0, 40.0, 60.0, 60.0)), &[a]);
    assert_eq!(c.select_in_rect(Rect::new(90.0, 90.0, 110.0, 110.0)), &[a, b]);
    let revision = c.selection().revision();

    assert_eq!(c.erase_in_rect(Rect::new(40.0, 95.0, 60.0, 105.0)), vec![b]);
    assert_eq!(c.selection().items(), &[a]);
    assert!(c.selection().revision() > revision);
    assert_eq!(c.len(), 2);

    assert!(c.erase_in_rect(Rect::new(700.0, 0.0, 710.0, 10.0)).is_empty());
}

#[test]
fn rect_that_only_touches_bounds_selects_nothing() {
    let mut c = canvas();
    line(&mut c, (0.0, 0.0), (100.0, 100.0));
    // Inside the segment's bounds, away from the diagonal.
    assert!(c.select_in_rect(Rect::new(70.0, 5.0, 90.0, 20.0)).is_empty());
}

#[test]
fn pick_prefers_closest_then_topmost() {
    let mut c = canvas();
    let low = line(&mut c, (0.0, 50.0), (100.0, 50.0));
    let high = line(&mut c, (0.0, 50.0), (100.0, 50.0));
    let other = line(&mut c, (0.0, 60.0), (100.0, 60.0));

    assert_eq!(c.pick_at(Point::new(50.0, 50.0), 3.0), Some(high));
    assert_eq!(c.pick_at(Point::new(50.0, 58.0), 3.0), Some(other));
    assert_eq!(c.pick_at(Point::new(50.0, 80.0), 3.0), None);
    assert_eq!(c.pick_at(Point::new(f64::NAN, 50.0), 3.0), None);
    assert_ne!(low, high);
}

#[test]
fn snapshot_is_isolated_and_thread_safe() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<DocumentSnapshot>();

    let mut c = canvas();
    let a = line(&mut c, (0.0, 0.0), (10.0, 0.0));
    let snap = c.snapshot();
    c.move_controlpoint(a, 1, Point::new(99.0, 0.0)).unwrap();

    let handle = std::thread::spawn(move || snap.primitives[0].1.points.clone());
    let points = handle.join().unwrap();
    assert_eq!(points, vec![Point::ZERO, Point::new(10.0, 0.0)]);
    assert_eq!(c.snapshot().primitives[0].1.points[1], Point::new(99.0, 0.0));
}

#[test]
fn config_drives_the_canvas() {
    let config = CanvasConfig::from_json_str(
        r#"{ "view_width": 400, "view_height": 300, "pen_thickness": 5,
             "max_zoom": 2, "tool": "line", "paper": "Quad paper" }"#,
    )
    .unwrap();
    let mut c = Canvas::with_config(&config).unwrap();
    assert_eq!(c.transform().view_rect(), Rect::new(0.0, 0.0, 400.0, 300.0));
    assert_eq!(c.style().thickness(), 5.0);
    assert_eq!(c.paper(), Paper::by_kind(PaperKind::Quad).unwrap());
    assert_eq!(c.snapshot().paper, PaperKind::Quad);

    c.zoom_about(Point::ZERO, 10.0);
    assert_eq!(c.transform().scale(), 2.0);
}
