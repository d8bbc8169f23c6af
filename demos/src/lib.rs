// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Quill demos.

use std::error::Error;
use std::fs;

use quill_canvas::CanvasConfig;
use quill_imaging::DrawOp;
use quill_imaging_ref::{Event, RefSurface};
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, showing canvas debug
/// logs when the variable is unset.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quill_canvas=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load a canvas configuration from the JSON file named by the first
/// command-line argument, or use the defaults.
pub fn config_from_args() -> Result<CanvasConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path)?;
            tracing::info!(%path, "loading canvas configuration");
            Ok(CanvasConfig::from_json_str(&json)?)
        }
        None => Ok(CanvasConfig::default()),
    }
}

/// One line per draw op recorded on `surface`, with the pen it used.
pub fn describe_draws(surface: &RefSurface) -> Vec<String> {
    surface
        .events()
        .iter()
        .filter_map(|event| match event {
            Event::Draw { op, state } => {
                let pen = state
                    .pen
                    .map(|pen| format!("{:.1}px #{:08x}", pen.width, pen.premultiplied_argb()))
                    .unwrap_or_else(|| String::from("no pen"));
                let shape = match op {
                    DrawOp::StrokeLine { x0, y0, x1, y1 } => {
                        format!("line ({x0:.1}, {y0:.1}) -> ({x1:.1}, {y1:.1})")
                    }
                    DrawOp::StrokePolyline(points) => format!("polyline of {} points", points.len()),
                };
                Some(format!("{shape} with {pen}"))
            }
            Event::State { .. } => None,
        })
        .collect()
}
