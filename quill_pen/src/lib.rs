// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill Pen: the input boundary between platform pointer events and the canvas.
//!
//! Platforms report stylus input as a position, a tool type and a button
//! bitmask. How those buttons are wired differs between device families, and
//! on some devices the reported state is known to be unreliable. This crate
//! keeps that knowledge in one place:
//!
//! - [`PenSample`]: one platform-neutral input sample.
//! - [`PenAdapter`]: the capability queries the canvas needs, answered per
//!   device family.
//! - [`DeviceFamily::detect`] and [`adapter_for`]: pick an adapter once at
//!   startup.
//!
//! Adapters pass platform state through as-is. In particular
//! [`SamsungNotePen`] keeps its exact-equality button checks even though the
//! hardware uses the button for system gestures and rarely reports it; which
//! semantics are correct there is unverified, so nothing is guessed.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use quill_pen::{ButtonState, DeviceFamily, PenSample, ToolType, adapter_for};
//!
//! let adapter = adapter_for(DeviceFamily::detect("Google", "Pixel Tablet"));
//! let sample = PenSample::new(Point::new(10.0, 20.0), ToolType::Stylus)
//!     .with_buttons(ButtonState::STYLUS_PRIMARY);
//!
//! assert!(adapter.is_pen_event(&sample));
//! assert!(adapter.is_pen_button_pressed(&sample));
//! assert!(!adapter.is_pen_button_alt_pressed(&sample));
//! ```

#![no_std]

extern crate alloc;

mod adapter;
mod sample;

pub use adapter::{
    DeviceFamily, NoPenSupport, PenAdapter, SamsungNotePen, StandardPen, adapter_for,
};
pub use sample::{ButtonState, PenSample, ToolType};
