//! Weighted selection over fixed (value, weight) tables.
//!
//! Iteration order is the table order, so the same draw always maps to the
//! same value. Malformed tables degrade instead of failing: all-zero weights
//! select the first entry, a draw past the last interval selects the last.

use crate::core::random::RandomSource;

/// A borrowed table of (value, weight) pairs.
#[derive(Debug, Clone, Copy)]
pub struct WeightedTable<'a, T> {
    entries: &'a [(T, u32)],
}

impl<'a, T> WeightedTable<'a, T> {
    pub const fn new(entries: &'a [(T, u32)]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'a [(T, u32)] {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all weights.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, w)| *w as u64).sum()
    }

    /// Select with a uniform draw in [0, 1).
    /// Returns `None` only for an empty table.
    pub fn select_unit(&self, draw: f64) -> Option<&'a T> {
        let total = self.total();
        if total == 0 {
            return self.degenerate();
        }
        let target = draw.clamp(0.0, 1.0) * total as f64;
        let mut cumulative = 0.0;
        for (value, weight) in self.entries {
            cumulative += *weight as f64;
            if target < cumulative {
                return Some(value);
            }
        }
        self.entries.last().map(|(value, _)| value)
    }

    /// Select with an integer ticket in [1, total].
    /// Tickets outside that range fall to the first or last entry.
    pub fn select_ticket(&self, ticket: u64) -> Option<&'a T> {
        let total = self.total();
        if total == 0 {
            return self.degenerate();
        }
        let mut cumulative = 0u64;
        for (value, weight) in self.entries {
            cumulative += *weight as u64;
            if ticket <= cumulative {
                return Some(value);
            }
        }
        self.entries.last().map(|(value, _)| value)
    }

    fn degenerate(&self) -> Option<&'a T> {
        if !self.entries.is_empty() {
            log::warn!("weighted table has zero total weight, using first entry");
        }
        self.entries.first().map(|(value, _)| value)
    }
}

impl<T: Copy + Default> WeightedTable<'_, T> {
    /// Draw a value. An empty table yields `T::default()`.
    pub fn choose(&self, rng: &mut dyn RandomSource) -> T {
        self.select_unit(rng.next_f64()).copied().unwrap_or_default()
    }
}
