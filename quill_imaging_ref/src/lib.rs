// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill Imaging Reference Surface.
//!
//! This crate provides a small, stateful implementation of [`Surface`] for
//! **op recording and state tracing**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It is intended for tests and debugging that want to assert on emitted
//!   ops and the drawing state at the time each op was applied, for example
//!   that drawing the same ink twice emits the same program.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use quill_imaging::{DrawOp, ImagingOp, Pen, RecordedOps, RectF, StateOp, Surface};

/// Snapshot of the current drawing state inside the surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateSnapshot {
    /// Current pen, if set.
    pub pen: Option<Pen>,
    /// Number of open clip scopes.
    pub clip_depth: u32,
    /// Intersection of all open clip scopes, if any are open.
    ///
    /// An empty intersection is reported as a zero-area rect.
    pub clip: Option<RectF>,
}

/// Event recorded by the reference surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Simple reference implementation of [`Surface`].
///
/// This surface:
/// - Tracks the current pen and clip stack,
/// - Records high-level [`Event`]s as state and draw operations are applied,
/// - Supports recordings via `begin_record`/`end_record`.
#[derive(Default, Debug)]
pub struct RefSurface {
    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying ops, used to form `RecordedOps`.
    ops: Vec<ImagingOp>,
    /// Start index of the current recording, if any.
    recording_start: Option<usize>,
    state: StateSnapshot,
    clip_stack: Vec<RectF>,
}

impl RefSurface {
    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw operations.
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Returns only the draw operations, in order.
    pub fn draw_ops(&self) -> Vec<&DrawOp> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Draw { op, .. } => Some(op),
                Event::State { .. } => None,
            })
            .collect()
    }

    /// Returns the current drawing state.
    pub fn current_state(&self) -> &StateSnapshot {
        &self.state
    }

    /// Clears all recorded events and ops but keeps the current state.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
        self.recording_start = None;
    }

    fn effective_clip(&self) -> Option<RectF> {
        self.clip_stack.iter().copied().reduce(|a, b| {
            let x0 = a.x0.max(b.x0);
            let y0 = a.y0.max(b.y0);
            let x1 = a.x1.min(b.x1).max(x0);
            let y1 = a.y1.min(b.y1).max(y0);
            RectF::new(x0, y0, x1, y1)
        })
    }
}

impl Surface for RefSurface {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetPen(pen) => self.state.pen = Some(*pen),
            StateOp::PushClip(rect) => {
                self.clip_stack.push(*rect);
            }
            StateOp::PopClip => {
                self.clip_stack.pop();
            }
        }
        self.state.clip_depth = u32::try_from(self.clip_stack.len()).unwrap_or(u32::MAX);
        self.state.clip = self.effective_clip();

        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }

    fn begin_record(&mut self) {
        self.recording_start = Some(self.ops.len());
    }

    fn end_record(&mut self) -> RecordedOps {
        let start = self.recording_start.take().unwrap_or(self.ops.len());
        RecordedOps {
            ops: Arc::from(&self.ops[start..]),
        }
    }
}
