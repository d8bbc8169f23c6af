// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill Canvas: the document, the view and the input path that ties them.
//!
//! A [`Canvas`] owns the [`Transformation`], the committed primitives in
//! z-order, an optional stroke in progress and the current [`Selection`]. It
//! answers the per-frame questions with the primitives' cached bounds:
//!
//! - [`Canvas::visible`]: primitives whose stroke reaches the view.
//! - [`Canvas::select_in_rect`] and [`Canvas::erase_in_rect`]: rectangle
//!   queries in screen space.
//! - [`Canvas::pick_at`]: the stroke under a tap.
//!
//! Input arrives either through the direct stroke API
//! ([`Canvas::begin_stroke`], [`Canvas::extend_stroke`],
//! [`Canvas::commit_stroke`], [`Canvas::cancel_stroke`]) or as platform
//! samples through [`Canvas::handle_input`], which consults a
//! [`quill_pen::PenAdapter`] for the pen buttons.
//!
//! A stroke in progress is never part of the document. [`Canvas::draw`] and
//! [`Canvas::snapshot`] only see committed primitives; draw the stroke in
//! progress with [`Canvas::draw_pending`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use quill_canvas::Canvas;
//! use quill_ink::PrimitiveKind;
//!
//! let mut canvas = Canvas::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! canvas.begin_stroke(PrimitiveKind::Line, Point::new(10.0, 10.0)).unwrap();
//! canvas.extend_stroke(Point::new(100.0, 80.0)).unwrap();
//! let id = canvas.commit_stroke().unwrap();
//!
//! assert_eq!(canvas.visible(), vec![id]);
//! assert_eq!(canvas.select_in_rect(Rect::new(40.0, 30.0, 60.0, 60.0)), &[id]);
//! ```
//!
//! [`Transformation`]: quill_view::Transformation

mod canvas;
mod config;
mod error;
mod gesture;
pub mod paper;
mod selection;

use core::fmt;

use quill_ink::PrimitiveSnapshot;
use serde::Deserialize;

pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use error::{CanvasError, ConfigError};
pub use paper::{Paper, PaperKind};
pub use selection::Selection;

/// Stable identifier of a committed primitive.
///
/// Ids are never reused within a canvas, and increase in commit order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveId(pub(crate) u64);

impl PrimitiveId {
    /// The raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PrimitiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a pen-down does when no pen button is held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Draw straight lines.
    Line,
    /// Draw freehand strokes.
    #[default]
    Freehand,
    /// Erase every stroke the pen sweeps over.
    Eraser,
    /// Drag a rectangle to select strokes.
    Select,
}

/// Phase of a pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputPhase {
    /// Pen or finger touched down.
    Down,
    /// Contact moved.
    Move,
    /// Contact lifted.
    Up,
    /// The platform took the gesture away.
    Cancel,
}

/// Owned copy of the committed document, safe to hand to other threads.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentSnapshot {
    /// Document revision the snapshot was taken at.
    pub revision: u64,
    /// Paper background.
    pub paper: PaperKind,
    /// Committed primitives in z-order.
    pub primitives: Vec<(PrimitiveId, PrimitiveSnapshot)>,
}
