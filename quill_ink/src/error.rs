// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors returned when an edit would corrupt a primitive.
///
/// A rejected edit never changes the primitive: its geometry, style and
/// caches stay exactly as they were.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InkError {
    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite {
        /// The offending x coordinate.
        x: f64,
        /// The offending y coordinate.
        y: f64,
    },

    /// A stroke thickness was negative, NaN or infinite.
    #[error("invalid stroke thickness {0}")]
    InvalidThickness(f64),

    /// A control point index was past the end of the primitive.
    #[error("control point {index} out of range for a primitive with {len} points")]
    ControlpointOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of control points in the primitive.
        len: usize,
    },
}

impl InkError {
    pub(crate) fn check_point(pt: kurbo::Point) -> Result<kurbo::Point, Self> {
        if quill_geometry::is_finite_point(pt) {
            Ok(pt)
        } else {
            Err(Self::NonFinite { x: pt.x, y: pt.y })
        }
    }
}
