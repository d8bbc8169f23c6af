// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted drawing session on a headless canvas.
//!
//! Draws a few strokes through the input path, pans and zooms, selects and
//! erases, then prints what the recording surface received and hands a
//! snapshot to a background thread.
//!
//! Examples:
//!   `cargo run -p quill_demos --example scripted_session`
//!   `RUST_LOG=quill_ink=trace cargo run -p quill_demos --example scripted_session -- canvas.json`

use std::error::Error;
use std::thread;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use quill_canvas::{Canvas, InputPhase, Tool};
use quill_demos::{config_from_args, describe_draws, init_tracing};
use quill_imaging_ref::RefSurface;
use quill_ink::StrokeStyle;
use quill_pen::{ButtonState, DeviceFamily, PenSample, ToolType, adapter_for};

fn stroke(
    canvas: &mut Canvas,
    adapter: &dyn quill_pen::PenAdapter,
    buttons: ButtonState,
    path: &[(f64, f64)],
) -> Result<(), Box<dyn Error>> {
    let sample = |(x, y): (f64, f64)| {
        PenSample::new(Point::new(x, y), ToolType::Stylus).with_buttons(buttons)
    };
    let Some((first, rest)) = path.split_first() else {
        return Ok(());
    };
    canvas.handle_input(adapter, InputPhase::Down, &sample(*first))?;
    for p in rest {
        canvas.handle_input(adapter, InputPhase::Move, &sample(*p))?;
    }
    let last = rest.last().unwrap_or(first);
    canvas.handle_input(adapter, InputPhase::Up, &sample(*last))?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let config = config_from_args()?;
    let mut canvas = Canvas::with_config(&config)?;
    let adapter = adapter_for(DeviceFamily::detect("Google", "Pixel Tablet"));

    // A wave, a straight rule and a dot.
    let wave: Vec<_> = (0..=40)
        .map(|i| {
            let x = 40.0 + f64::from(i) * 10.0;
            (x, 200.0 + (x / 30.0).sin() * 40.0)
        })
        .collect();
    stroke(&mut canvas, adapter.as_ref(), ButtonState::empty(), &wave)?;
    canvas.set_tool(Tool::Line);
    canvas.set_style(StrokeStyle::new(4.0, Color::from_rgb8(0x20, 0x40, 0xc0))?);
    stroke(
        &mut canvas,
        adapter.as_ref(),
        ButtonState::empty(),
        &[(40.0, 320.0), (300.0, 330.0), (440.0, 320.0)],
    )?;
    canvas.set_tool(Tool::Freehand);
    stroke(&mut canvas, adapter.as_ref(), ButtonState::empty(), &[(600.0, 100.0)])?;

    let mut surface = RefSurface::default();
    canvas.draw(&mut surface);
    println!("initial view:");
    for line in describe_draws(&surface) {
        println!("  {line}");
    }

    canvas.zoom_about(Point::new(240.0, 240.0), 2.0);
    canvas.pan_by(Vec2::new(-120.0, 0.0));
    surface.clear_events();
    canvas.draw(&mut surface);
    println!("after zoom and pan ({:?}):", canvas.transform().debug_info());
    for line in describe_draws(&surface) {
        println!("  {line}");
    }

    // Select the left half, then sweep the eraser with the pen button.
    let selected = canvas.select_in_rect(Rect::new(0.0, 0.0, 400.0, 800.0)).len();
    println!("{selected} strokes selected in the left half");
    stroke(
        &mut canvas,
        adapter.as_ref(),
        ButtonState::STYLUS_PRIMARY,
        &[(200.0, 600.0), (220.0, 700.0)],
    )?;
    println!("{} strokes left after erasing", canvas.len());

    let snapshot = canvas.snapshot();
    let summary = thread::spawn(move || {
        snapshot
            .primitives
            .iter()
            .map(|(id, p)| format!("{id}: {:?} with {} points", p.kind, p.points.len()))
            .collect::<Vec<_>>()
    })
    .join()
    .map_err(|_| "snapshot worker panicked")?;
    println!("snapshot:");
    for line in summary {
        println!("  {line}");
    }
    Ok(())
}
