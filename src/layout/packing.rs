//! Greedy packing of atomic units into budgeted bins

use std::ops::Range;

/// A run of consecutive units assigned to one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBin {
    /// Unit indices in this bin
    pub units: Range<usize>,
    /// Sum of unit sizes
    pub size: usize,
}

impl PackedBin {
    /// True if the bin holds more than the budget allows.
    /// Only a bin with a single unit can end up here.
    pub fn exceeds(&self, budget: usize) -> bool {
        self.size > budget
    }
}

/// Pack unit sizes into bins in order. A unit is never split: a unit larger
/// than `budget` gets a bin of its own.
pub fn pack_atomic<I>(sizes: I, budget: usize) -> Vec<PackedBin>
where
    I: IntoIterator<Item = usize>,
{
    let mut bins = Vec::new();
    let mut start = 0;
    let mut size = 0;
    let mut count = 0;

    for (idx, unit) in sizes.into_iter().enumerate() {
        if size + unit > budget && idx > start {
            bins.push(PackedBin { units: start..idx, size });
            start = idx;
            size = 0;
        }
        size += unit;
        count = idx + 1;
    }

    if count > start {
        bins.push(PackedBin { units: start..count, size });
    }

    bins
}
