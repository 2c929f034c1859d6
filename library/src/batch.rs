//! Incremental rendering of item previews.
//!
//! The panel reveals its grid a batch at a time so a large library does not
//! block the first paint. Batch size depends on whether previews still have to
//! be generated: small batches while they do, large ones once every item has
//! a cached preview.

#[cfg(test)]
#[path = "batch_test.rs"]
mod batch_test;

use std::ops::Range;

use crate::config::PanelConfig;

/// Number of items to reveal per batch.
///
/// Uses the cached batch size when `cached` previews cover all `total` items.
#[must_use]
pub fn items_rendered_per_batch(config: &PanelConfig, cached: usize, total: usize) -> usize {
    if cached >= total {
        config.cached_items_per_batch
    } else {
        config.items_per_batch
    }
}

/// Progressive reveal cursor over a collection of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderBatches {
    total: usize,
    per_batch: usize,
    revealed: usize,
}

impl RenderBatches {
    /// Start with nothing revealed. A `per_batch` of zero is treated as one.
    #[must_use]
    pub fn new(total: usize, per_batch: usize) -> Self {
        Self { total, per_batch: per_batch.max(1), revealed: 0 }
    }

    /// Reveal the next batch and return the indices it covers.
    ///
    /// Returns an empty range once everything is revealed.
    pub fn advance(&mut self) -> Range<usize> {
        let start = self.revealed;
        self.revealed = self.revealed.saturating_add(self.per_batch).min(self.total);
        start..self.revealed
    }

    /// Number of items revealed so far.
    #[must_use]
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed >= self.total
    }

    /// Switch batch size, e.g. once previews finish caching.
    pub fn set_per_batch(&mut self, per_batch: usize) {
        self.per_batch = per_batch.max(1);
    }

    /// Follow a change in collection size, keeping the revealed count in bounds.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.revealed = self.revealed.min(total);
    }
}
