// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::PrimitiveId;

/// The primitives currently selected on a canvas.
///
/// Ids are kept in document order without duplicates. The primary id is the
/// topmost one, which single-target edits act on. The revision counter bumps
/// only when the contents actually change, so observers can redraw selection
/// chrome on demand.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    items: Vec<PrimitiveId>,
    revision: u64,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of selected primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Selected ids in document order.
    #[must_use]
    pub fn items(&self) -> &[PrimitiveId] {
        &self.items
    }

    /// The topmost selected id.
    #[must_use]
    pub fn primary(&self) -> Option<PrimitiveId> {
        self.items.last().copied()
    }

    /// Returns `true` if `id` is selected.
    #[must_use]
    pub fn contains(&self, id: PrimitiveId) -> bool {
        self.items.contains(&id)
    }

    /// Change counter; see the type docs.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the selection with `ids`, given in document order.
    pub(crate) fn replace_with(&mut self, ids: impl IntoIterator<Item = PrimitiveId>) {
        let mut next: Vec<PrimitiveId> = Vec::new();
        for id in ids {
            if !next.contains(&id) {
                next.push(id);
            }
        }
        if next != self.items {
            self.items = next;
            self.bump_revision();
        }
    }

    /// Drops `id` if it is selected.
    pub(crate) fn remove(&mut self, id: PrimitiveId) {
        let before = self.items.len();
        self.items.retain(|item| *item != id);
        if self.items.len() != before {
            self.bump_revision();
        }
    }

    /// Clears the selection.
    pub(crate) fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items.clear();
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
