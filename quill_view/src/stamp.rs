// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);

/// Opaque identifier for one state of a [`crate::Transformation`].
///
/// Stamps are drawn from a process-wide counter, so two transformations only
/// share a stamp when one is an unmodified clone of the other. Equal stamps
/// therefore imply identical mappings, and a projection cached under a stamp
/// stays valid exactly as long as the transformation still reports it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProjectionStamp(u64);

impl ProjectionStamp {
    /// Take a new stamp that no existing transformation state carries.
    pub fn fresh() -> Self {
        Self(NEXT_STAMP.fetch_add(1, Ordering::Relaxed))
    }
}
