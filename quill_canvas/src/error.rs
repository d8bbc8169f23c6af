// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use quill_ink::InkError;
use thiserror::Error;

use crate::PrimitiveId;

/// Errors from canvas edits.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CanvasError {
    /// The edit was rejected by the primitive.
    #[error(transparent)]
    Ink(#[from] InkError),

    /// No primitive with this id is in the document.
    #[error("no primitive {0} in the document")]
    UnknownPrimitive(PrimitiveId),

    /// A stroke operation arrived while no stroke was being drawn.
    #[error("no stroke in progress")]
    NoStrokeInProgress,
}

/// Errors from loading a [`crate::CanvasConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The input was not valid JSON for the configuration schema.
    #[error("could not parse canvas configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid canvas configuration: {0}")]
    Invalid(String),
}
