// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill Ink: editable stroke primitives.
//!
//! Ink is stored as *primitives*, each an ordered list of [`Controlpoint`]s in
//! document space plus a [`StrokeStyle`]. Primitives answer the three
//! questions a canvas asks every frame, all in screen space under the current
//! [`Transformation`]:
//!
//! - [`GraphicsPrimitive::bounding_box`] – a cached box around the rendered
//!   stroke, grown by half the scaled stroke width plus a one pixel margin.
//! - [`GraphicsPrimitive::intersects`] – whether the stroke's centerline
//!   touches a screen rectangle (viewport culling and lasso selection).
//! - [`GraphicsPrimitive::draw`] – emit the stroke into a
//!   [`quill_imaging::Surface`].
//!
//! The concrete kinds are [`GraphicsLine`] and [`FreehandStroke`]; the closed
//! [`Primitive`] enum dispatches the same contract for heterogeneous storage.
//!
//! ## Lazy invalidation
//!
//! Screen projections are cached per control point and bounding boxes per
//! primitive. Both caches remember the [`ProjectionStamp`] they were computed
//! under; panning or zooming the transformation produces a new stamp, so the
//! next read recomputes. Editing geometry or style drops the caches
//! explicitly. Nothing is recomputed eagerly, which keeps high-frequency
//! drag updates cheap.
//!
//! The caches use [`core::cell::Cell`], so primitives are `Send` but not
//! `Sync`: all reads and writes belong to one UI thread. Hand background work
//! a [`PrimitiveSnapshot`] instead of the live primitive.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use quill_ink::{GraphicsLine, GraphicsPrimitive, StrokeStyle};
//! use quill_view::Transformation;
//!
//! let t = Transformation::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let mut line = GraphicsLine::new(Point::new(0.0, 0.0), StrokeStyle::default(), &t).unwrap();
//! line.set_end_screen(Point::new(10.0, 0.0), &t).unwrap();
//!
//! assert!(line.intersects(Rect::new(2.0, -1.0, 8.0, 1.0), &t));
//! assert!(!line.intersects(Rect::new(20.0, 20.0, 30.0, 30.0), &t));
//! ```
//!
//! [`Transformation`]: quill_view::Transformation
//! [`ProjectionStamp`]: quill_view::ProjectionStamp

mod cache;
mod controlpoint;
mod error;
mod freehand;
mod line;
mod primitive;
mod style;

pub use controlpoint::{Controlpoint, MAX_SCREEN_COORDINATE};
pub use error::InkError;
pub use freehand::FreehandStroke;
pub use line::{GraphicsLine, ZERO_LENGTH_NUDGE};
pub use primitive::{
    BOUNDING_BOX_MARGIN, GraphicsPrimitive, Primitive, PrimitiveKind, PrimitiveSnapshot,
};
pub use style::{StrokeStyle, scaled_thickness};
