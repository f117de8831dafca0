//! Pattern type and the fitting passes that keep one bar consistent.
//!
//! A bar's note count is fixed by its time signature and subdivision; the
//! voicing, sticking, phrase grouping, and accent set each have their own
//! way of being stretched or rebuilt to satisfy that count.

pub mod accent;
mod core;
pub mod cycle;
pub mod phrase;
pub mod polyrhythm;

#[cfg(test)]
mod tests;

pub use accent::AccentStyle;
pub use core::Pattern;
pub use cycle::{base_cycle_len, expand, fit};
pub use polyrhythm::PolyrhythmCycle;
