//! Injectable random source.
//!
//! Every generation step draws through `RandomSource` so that a seeded
//! `ChaCha8Rng` reproduces a whole universe.

use rand::{Rng, RngCore};

/// Source of uniform random draws.
pub trait RandomSource {
    /// Uniform draw in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Uniform draw in [lo, hi). Returns `lo` when the range is empty.
    fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform integer draw in [lo, hi] (inclusive).
    fn next_int(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as f64 + 1.0;
        let offset = (self.next_f64() * span) as u32;
        (lo + offset).min(hi)
    }

    /// Pick one element of a non-empty slice; `None` if empty.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_int(0, items.len() as u32 - 1) as usize;
        items.get(idx)
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}
