// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// The kind of tool that produced a sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToolType {
    /// The platform did not say.
    #[default]
    Unknown,
    /// A finger on a touch screen.
    Finger,
    /// The writing tip of a stylus.
    Stylus,
    /// The eraser end of a stylus.
    Eraser,
    /// A mouse or trackpad.
    Mouse,
}

bitflags::bitflags! {
    /// Pressed buttons, using the common platform bit layout.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ButtonState: u32 {
        /// Primary button (left mouse button, or a stylus button on devices
        /// that report it this way).
        const PRIMARY          = 1 << 0;
        /// Secondary button.
        const SECONDARY        = 1 << 1;
        /// Tertiary button.
        const TERTIARY         = 1 << 2;
        /// First barrel button of a stylus.
        const STYLUS_PRIMARY   = 1 << 5;
        /// Second barrel button of a stylus.
        const STYLUS_SECONDARY = 1 << 6;
    }
}

/// One pointer sample in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenSample {
    /// Position in screen space.
    pub position: Point,
    /// Tool that produced the sample.
    pub tool: ToolType,
    /// Buttons held during the sample.
    pub buttons: ButtonState,
    /// Normalized pressure, `1.0` when the platform has none.
    pub pressure: f32,
}

impl PenSample {
    /// A sample with no buttons held and full pressure.
    pub fn new(position: Point, tool: ToolType) -> Self {
        Self {
            position,
            tool,
            buttons: ButtonState::empty(),
            pressure: 1.0,
        }
    }

    /// Returns the sample with `buttons` held.
    #[must_use]
    pub fn with_buttons(mut self, buttons: ButtonState) -> Self {
        self.buttons = buttons;
        self
    }

    /// Returns the sample with the given pressure, clamped to `0.0..=1.0`.
    ///
    /// Non-finite pressure reads as `1.0`.
    #[must_use]
    pub fn with_pressure(mut self, pressure: f32) -> Self {
        self.pressure = if pressure.is_finite() {
            pressure.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self
    }
}
