// Copyright 2025 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The catalog of paper backgrounds.

/// Kind of paper background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaperKind {
    /// Plain paper.
    Empty,
    /// Horizontally ruled paper.
    Ruled,
    /// Square grid paper.
    Quad,
    /// Hexagonal grid paper.
    ///
    /// Recognized, but not offered in [`Paper::TABLE`].
    Hex,
}

/// A named paper background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Paper {
    /// Display name.
    pub name: &'static str,
    /// Background kind.
    pub kind: PaperKind,
}

impl Paper {
    /// The papers offered to the user, in display order.
    pub const TABLE: &'static [Self] = &[
        Self::new("Blank", PaperKind::Empty),
        Self::new("Legal ruled", PaperKind::Ruled),
        Self::new("Quad paper", PaperKind::Quad),
    ];

    const fn new(name: &'static str, kind: PaperKind) -> Self {
        Self { name, kind }
    }

    /// The catalog entry for `kind`, if it is offered.
    pub fn by_kind(kind: PaperKind) -> Option<Self> {
        Self::TABLE.iter().copied().find(|p| p.kind == kind)
    }

    /// The catalog entry with this display name.
    pub fn by_name(name: &str) -> Option<Self> {
        Self::TABLE.iter().copied().find(|p| p.name == name)
    }
}

impl Default for Paper {
    fn default() -> Self {
        Self::new("Blank", PaperKind::Empty)
    }
}
