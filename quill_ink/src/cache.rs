// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::Cell;

use quill_view::ProjectionStamp;

/// A value derived from a transformation, tagged with the stamp it was
/// computed under.
///
/// An empty slot, or one holding a different stamp than the caller's, is
/// dirty. Reads through [`ProjectionCache::get_or_update`] recompute at most
/// once per stamp.
#[derive(Clone, Debug)]
pub(crate) struct ProjectionCache<T: Copy> {
    slot: Cell<Option<(ProjectionStamp, T)>>,
}

impl<T: Copy> ProjectionCache<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slot: Cell::new(None),
        }
    }

    pub(crate) fn get_or_update(&self, stamp: ProjectionStamp, compute: impl FnOnce() -> T) -> T {
        if let Some((cached, value)) = self.slot.get() {
            if cached == stamp {
                return value;
            }
        }
        let value = compute();
        self.slot.set(Some((stamp, value)));
        value
    }

    pub(crate) fn is_current(&self, stamp: ProjectionStamp) -> bool {
        matches!(self.slot.get(), Some((cached, _)) if cached == stamp)
    }

    pub(crate) fn invalidate(&self) {
        self.slot.set(None);
    }
}
