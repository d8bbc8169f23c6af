// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Routing platform samples through pen adapters and tools.

use kurbo::{Point, Rect};
use quill_canvas::{Canvas, InputPhase, Tool};
use quill_ink::{GraphicsPrimitive, PrimitiveKind};
use quill_pen::{
    ButtonState, NoPenSupport, PenAdapter, PenSample, SamsungNotePen, StandardPen, ToolType,
};

fn canvas(tool: Tool) -> Canvas {
    let mut c = Canvas::new(Rect::new(0.0, 0.0, 800.0, 600.0));
    c.set_tool(tool);
    c
}

fn stylus(x: f64, y: f64) -> PenSample {
    PenSample::new(Point::new(x, y), ToolType::Stylus)
}

fn drag(c: &mut Canvas, adapter: &dyn PenAdapter, samples: &[PenSample]) {
    let (first, rest) = samples.split_first().unwrap();
    c.handle_input(adapter, InputPhase::Down, first).unwrap();
    let Some((last, middle)) = rest.split_last() else {
        return;
    };
    for s in middle {
        c.handle_input(adapter, InputPhase::Move, s).unwrap();
    }
    c.handle_input(adapter, InputPhase::Up, last).unwrap();
}

#[test]
fn freehand_drag_commits_one_stroke() {
    let mut c = canvas(Tool::Freehand);
    drag(
        &mut c,
        &StandardPen,
        &[stylus(10.0, 10.0), stylus(20.0, 15.0), stylus(30.0, 10.0)],
    );
    assert_eq!(c.len(), 1);
    assert!(c.pending().is_none());
    let (_, p) = c.primitives().next().unwrap();
    assert_eq!(p.kind(), PrimitiveKind::Stroke);
    assert_eq!(p.controlpoints().len(), 3);
}

#[test]
fn line_tool_keeps_only_the_end_point() {
    let mut c = canvas(Tool::Line);
    drag(
        &mut c,
        &StandardPen,
        &[stylus(0.0, 0.0), stylus(5.0, 5.0), stylus(40.0, 0.0)],
    );
    let (_, p) = c.primitives().next().unwrap();
    assert_eq!(p.kind(), PrimitiveKind::Line);
    let ends: Vec<_> = p
        .controlpoints()
        .iter()
        .map(|cp| cp.document_position())
        .collect();
    assert_eq!(ends, [Point::new(0.0, 0.0), Point::new(40.0, 0.0)]);
}

#[test]
fn pending_stroke_is_visible_only_while_drawing() {
    let mut c = canvas(Tool::Freehand);
    c.handle_input(&StandardPen, InputPhase::Down, &stylus(10.0, 10.0))
        .unwrap();
    c.handle_input(&StandardPen, InputPhase::Move, &stylus(50.0, 10.0))
        .unwrap();
    assert!(c.pending().is_some());
    assert!(c.is_empty());

    c.handle_input(&StandardPen, InputPhase::Cancel, &stylus(50.0, 10.0))
        .unwrap();
    assert!(c.pending().is_none());
    assert!(c.is_empty());
}

#[test]
fn pen_button_erases_and_alt_button_selects() {
    let mut c = canvas(Tool::Freehand);
    drag(&mut c, &StandardPen, &[stylus(0.0, 100.0), stylus(200.0, 100.0)]);
    drag(&mut c, &StandardPen, &[stylus(0.0, 300.0), stylus(200.0, 300.0)]);
    assert_eq!(c.len(), 2);

    let select = |x: f64, y: f64| stylus(x, y).with_buttons(ButtonState::STYLUS_SECONDARY);
    drag(
        &mut c,
        &StandardPen,
        &[select(50.0, 50.0), select(80.0, 120.0), select(100.0, 150.0)],
    );
    assert_eq!(c.selection().len(), 1);
    assert_eq!(c.len(), 2);
    assert!(!c.is_gesture_active());

    let erase = |x: f64, y: f64| stylus(x, y).with_buttons(ButtonState::STYLUS_PRIMARY);
    drag(
        &mut c,
        &StandardPen,
        &[erase(100.0, 250.0), erase(100.0, 290.0), erase(100.0, 320.0)],
    );
    assert_eq!(c.len(), 1);
    assert_eq!(c.tool(), Tool::Freehand);
}

#[test]
fn eraser_tip_erases_without_buttons() {
    let mut c = canvas(Tool::Freehand);
    drag(&mut c, &StandardPen, &[stylus(0.0, 100.0), stylus(200.0, 100.0)]);
    let tip = |x: f64, y: f64| PenSample::new(Point::new(x, y), ToolType::Eraser);
    drag(&mut c, &StandardPen, &[tip(100.0, 80.0), tip(100.0, 120.0)]);
    assert!(c.is_empty());
    assert!(c.pending().is_none());

    // The Note adapter does not report eraser tips as pen events.
    drag(&mut c, &StandardPen, &[stylus(0.0, 100.0), stylus(200.0, 100.0)]);
    drag(&mut c, &SamsungNotePen, &[tip(100.0, 80.0), tip(100.0, 120.0)]);
    assert_eq!(c.len(), 2);
}

#[test]
fn samsung_note_buttons_pass_through_as_reported() {
    let mut c = canvas(Tool::Freehand);
    drag(&mut c, &StandardPen, &[stylus(0.0, 100.0), stylus(200.0, 100.0)]);

    // Barrel bits are not what the Note reports, so this draws.
    let barrel = |x: f64, y: f64| stylus(x, y).with_buttons(ButtonState::STYLUS_PRIMARY);
    drag(&mut c, &SamsungNotePen, &[barrel(100.0, 80.0), barrel(100.0, 120.0)]);
    assert_eq!(c.len(), 2);

    // An exact PRIMARY state erases.
    let primary = |x: f64, y: f64| stylus(x, y).with_buttons(ButtonState::PRIMARY);
    drag(&mut c, &SamsungNotePen, &[primary(150.0, 90.0), primary(150.0, 110.0)]);
    assert_eq!(c.len(), 1);
}

#[test]
fn without_pen_support_buttons_are_ignored() {
    let mut c = canvas(Tool::Freehand);
    let pressed = |x: f64, y: f64| stylus(x, y).with_buttons(ButtonState::STYLUS_PRIMARY);
    drag(&mut c, &NoPenSupport, &[pressed(0.0, 0.0), pressed(50.0, 50.0)]);
    assert_eq!(c.len(), 1);
}

#[test]
fn non_finite_samples_are_dropped() {
    let mut c = canvas(Tool::Freehand);
    c.handle_input(&StandardPen, InputPhase::Down, &stylus(10.0, 10.0))
        .unwrap();
    c.handle_input(&StandardPen, InputPhase::Move, &stylus(f64::NAN, 10.0))
        .unwrap();
    c.handle_input(&StandardPen, InputPhase::Up, &stylus(20.0, 20.0))
        .unwrap();
    let (_, p) = c.primitives().next().unwrap();
    assert_eq!(p.controlpoints().len(), 2);
}

#[test]
fn stray_moves_are_ignored() {
    let mut c = canvas(Tool::Line);
    c.handle_input(&StandardPen, InputPhase::Move, &stylus(10.0, 10.0))
        .unwrap();
    c.handle_input(&StandardPen, InputPhase::Up, &stylus(10.0, 10.0))
        .unwrap();
    assert!(c.is_empty());
}
