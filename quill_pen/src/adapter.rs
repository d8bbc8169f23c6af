// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use crate::{ButtonState, PenSample, ToolType};

/// Per-device answers to the questions the canvas asks about a sample.
pub trait PenAdapter: core::fmt::Debug {
    /// Whether the sample came from a pen rather than a finger or mouse.
    fn is_pen_event(&self, sample: &PenSample) -> bool;

    /// Whether the pen's main button is held.
    fn is_pen_button_pressed(&self, sample: &PenSample) -> bool;

    /// Whether the pen's alternate button is held.
    fn is_pen_button_alt_pressed(&self, sample: &PenSample) -> bool;

    /// A description of known unreliable behavior, for logging at startup.
    fn known_issue(&self) -> Option<&'static str> {
        None
    }
}

/// Devices without stylus support: every query answers `false`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPenSupport;

impl PenAdapter for NoPenSupport {
    fn is_pen_event(&self, _sample: &PenSample) -> bool {
        false
    }

    fn is_pen_button_pressed(&self, _sample: &PenSample) -> bool {
        false
    }

    fn is_pen_button_alt_pressed(&self, _sample: &PenSample) -> bool {
        false
    }
}

/// Devices that report stylus tools and barrel buttons through the standard
/// bits.
///
/// Both ends of the stylus count as pen events. Buttons are tested as bits,
/// so other held buttons do not mask them.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardPen;

impl PenAdapter for StandardPen {
    fn is_pen_event(&self, sample: &PenSample) -> bool {
        matches!(sample.tool, ToolType::Stylus | ToolType::Eraser)
    }

    fn is_pen_button_pressed(&self, sample: &PenSample) -> bool {
        sample.buttons.contains(ButtonState::STYLUS_PRIMARY)
    }

    fn is_pen_button_alt_pressed(&self, sample: &PenSample) -> bool {
        sample.buttons.contains(ButtonState::STYLUS_SECONDARY)
    }
}

/// Samsung Galaxy Note devices.
///
/// Buttons are compared for exact equality with [`ButtonState::PRIMARY`] and
/// [`ButtonState::SECONDARY`]. The device uses the pen button for system
/// gestures, so these rarely report `true`. The checks are kept as they are
/// until the device's real semantics are known.
#[derive(Clone, Copy, Debug, Default)]
pub struct SamsungNotePen;

impl PenAdapter for SamsungNotePen {
    fn is_pen_event(&self, sample: &PenSample) -> bool {
        sample.tool == ToolType::Stylus
    }

    fn is_pen_button_pressed(&self, sample: &PenSample) -> bool {
        sample.buttons == ButtonState::PRIMARY
    }

    fn is_pen_button_alt_pressed(&self, sample: &PenSample) -> bool {
        sample.buttons == ButtonState::SECONDARY
    }

    fn known_issue(&self) -> Option<&'static str> {
        Some("pen button is reserved for system gestures; button queries are unreliable")
    }
}

/// Hardware families with distinct pen behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceFamily {
    /// No stylus.
    NoPen,
    /// Standard stylus reporting.
    Standard,
    /// Samsung Galaxy Note.
    SamsungNote,
}

impl DeviceFamily {
    /// Picks a family from the platform's manufacturer and model strings.
    ///
    /// Samsung Note models (`GT-N*` and `SM-N*`) get [`DeviceFamily::SamsungNote`];
    /// everything else is assumed to report pens the standard way.
    pub fn detect(manufacturer: &str, model: &str) -> Self {
        let model = model.trim();
        let is_note_model = ["GT-N", "SM-N"].iter().any(|prefix| {
            model
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        });
        if manufacturer.trim().eq_ignore_ascii_case("samsung") && is_note_model {
            Self::SamsungNote
        } else {
            Self::Standard
        }
    }
}

/// The adapter for a device family.
pub fn adapter_for(family: DeviceFamily) -> Box<dyn PenAdapter> {
    match family {
        DeviceFamily::NoPen => Box::new(NoPenSupport),
        DeviceFamily::Standard => Box::new(StandardPen),
        DeviceFamily::SamsungNote => Box::new(SamsungNotePen),
    }
}
