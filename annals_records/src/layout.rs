// Copyright 2025 the Annals Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::num::NonZeroUsize;

const DEFAULT_COLUMNS: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(n) => n,
    None => unreachable!(),
};

/// Round-robin column assignment for poet bars.
///
/// Poets are placed by their index in birth order: `column = index % count`.
/// This is a reproducible placement rule, not a packing. Two poets sharing a
/// column may overlap when their lifespans intersect; birth ordering only
/// makes that rare, it does not prevent it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoetColumns {
    count: NonZeroUsize,
}

impl PoetColumns {
    /// Creates a layout with `count` columns.
    #[must_use]
    pub const fn new(count: NonZeroUsize) -> Self {
        Self { count }
    }

    /// Number of columns.
    #[must_use]
    pub const fn count(self) -> usize {
        self.count.get()
    }

    /// Column for the poet at `birth_index` in birth-sorted order.
    #[must_use]
    pub const fn column_of(self, birth_index: usize) -> usize {
        birth_index % self.count.get()
    }
}

impl Default for PoetColumns {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}
