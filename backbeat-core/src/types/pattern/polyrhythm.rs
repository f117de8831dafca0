//! Polyrhythm timing resolution.
//!
//! Two limbs share one cycle under an integer ratio (3 against 2): each limb
//! spreads its own rate evenly across the cycle's slots, independent of the
//! other. Only timing is produced here; voicing and sticking are the
//! caller's business.

use num_rational::Ratio;
use std::collections::BTreeSet;

/// Note placements for two limbs sharing one cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolyrhythmCycle {
    /// Slots where the first limb of the ratio fires
    pub primary: BTreeSet<u32>,
    /// Slots where the second limb fires
    pub counter: BTreeSet<u32>,
}

/// Compute both limbs' placements for `ratio` over `cycle_len` slots.
pub fn resolve(ratio: (u32, u32), cycle_len: u32) -> PolyrhythmCycle {
    PolyrhythmCycle {
        primary: spread(ratio.0, cycle_len),
        counter: spread(ratio.1, cycle_len),
    }
}

/// Place `rate` evenly spaced hits across `cycle_len` slots: hit `i` lands
/// at `round(i * cycle_len / rate)`, taken modulo the cycle, duplicates
/// collapsed.
fn spread(rate: u32, cycle_len: u32) -> BTreeSet<u32> {
    if rate == 0 || cycle_len == 0 {
        return BTreeSet::new();
    }
    let cycle = i64::from(cycle_len);
    (0..i64::from(rate))
        .map(|i| {
            let slot = Ratio::new(i * cycle, i64::from(rate)).round().to_integer();
            (slot % cycle) as u32
        })
        .collect()
}
