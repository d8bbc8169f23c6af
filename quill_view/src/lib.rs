// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill View: the document/screen transformation.
//!
//! Ink lives in *document space*, a coordinate system fixed to the page. The
//! view shows it in *screen space* (device pixels) through a uniform zoom and
//! a pan offset. This crate provides:
//! - [`Transformation`]: the pan + zoom mapping and its inverse.
//! - [`ProjectionStamp`]: an opaque token identifying one state of a
//!   transformation, used by dependents to detect stale cached projections.
//!
//! A transformation never pushes updates to its dependents. Instead every
//! effective mutation takes a fresh stamp, and anything that cached a screen
//! position compares the stamp it cached against [`Transformation::stamp`] on
//! the next read. Recomputation therefore happens lazily, on demand.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use quill_view::Transformation;
//!
//! let mut t = Transformation::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let before = t.stamp();
//!
//! t.zoom_about_screen_point(Point::new(400.0, 300.0), 2.0);
//! assert_ne!(before, t.stamp());
//!
//! let doc = Point::new(10.0, -5.0);
//! let back = t.to_doc(t.to_screen(doc));
//! assert!((back - doc).hypot() < 1e-9);
//! ```
//!
//! ## Culling example
//!
//! The visible document rectangle can be used to cull content before it is
//! projected:
//!
//! ```rust
//! use kurbo::Rect;
//! use quill_view::Transformation;
//!
//! let t = Transformation::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let visible = t.visible_document_rect();
//! let page_items = [
//!     Rect::new(-10.0, -10.0, 10.0, 10.0),
//!     Rect::new(1_000.0, 1_000.0, 1_100.0, 1_100.0),
//! ];
//! let on_screen = page_items
//!     .iter()
//!     .filter(|r| r.intersect(visible).area() > 0.0)
//!     .count();
//! assert_eq!(on_screen, 1);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod stamp;
mod transformation;

pub use stamp::ProjectionStamp;
pub use transformation::{Transformation, TransformationDebugInfo};
