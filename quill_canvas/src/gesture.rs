// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Rect};

/// Tracks a press-drag-release gesture for the rectangle tools.
///
/// The eraser consumes the swept segment of each move; the selection tool
/// uses the rectangle spanned from the press point.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Gesture {
    start_pos: Option<Point>,
    last_pos: Option<Point>,
}

impl Gesture {
    pub(crate) fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
    }

    /// Segment swept since the previous update, or `None` when idle.
    pub(crate) fn update(&mut self, pos: Point) -> Option<Line> {
        self.start_pos?;
        let last = self.last_pos.replace(pos).unwrap_or(pos);
        Some(Line::new(last, pos))
    }

    /// Rectangle from the press point to `pos`.
    pub(crate) fn extent(&self, pos: Point) -> Option<Rect> {
        self.start_pos.map(|start| Rect::from_points(start, pos))
    }

    pub(crate) fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    pub(crate) fn is_active(&self) -> bool {
        self.start_pos.is_some()
    }
}
