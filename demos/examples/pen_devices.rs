// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! How each device family reads the same pen samples.
//!
//! Examples:
//!   `cargo run -p quill_demos --example pen_devices`

use kurbo::Point;
use quill_demos::init_tracing;
use quill_pen::{ButtonState, DeviceFamily, PenSample, ToolType, adapter_for};

fn main() {
    init_tracing();
    let devices = [
        ("Google", "Pixel Tablet"),
        ("samsung", "GT-N7000"),
        ("samsung", "SM-N960F"),
    ];
    let samples = [
        ("finger", PenSample::new(Point::ZERO, ToolType::Finger)),
        ("stylus", PenSample::new(Point::ZERO, ToolType::Stylus)),
        (
            "stylus + barrel",
            PenSample::new(Point::ZERO, ToolType::Stylus).with_buttons(ButtonState::STYLUS_PRIMARY),
        ),
        (
            "stylus + primary",
            PenSample::new(Point::ZERO, ToolType::Stylus).with_buttons(ButtonState::PRIMARY),
        ),
        (
            "stylus + secondary",
            PenSample::new(Point::ZERO, ToolType::Stylus).with_buttons(ButtonState::SECONDARY),
        ),
    ];

    for (manufacturer, model) in devices {
        let family = DeviceFamily::detect(manufacturer, model);
        let adapter = adapter_for(family);
        println!("{manufacturer} {model}: {family:?}");
        if let Some(issue) = adapter.known_issue() {
            tracing::warn!(?family, issue, "pen adapter has a known issue");
        }
        for (name, sample) in &samples {
            println!(
                "  {name:<20} pen={:<5} button={:<5} alt={}",
                adapter.is_pen_event(sample),
                adapter.is_pen_button_pressed(sample),
                adapter.is_pen_button_alt_pressed(sample),
            );
        }
    }
}
