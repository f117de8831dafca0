//! Typed errors for the pattern engine.

use thiserror::Error;

/// Errors produced while parsing or repairing pattern data.
///
/// Every variant is local to a single pattern: batch callers report the
/// failing entry and keep going, nothing here is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Text that does not match the expected shape (a time signature
    /// description or a token sequence).
    #[error("format error: {0}")]
    Format(String),

    /// Subdivision that does not divide evenly by the beat unit, which
    /// would leave a fractional number of notes per beat.
    #[error("subdivision {subdivision} is not divisible by beat unit {denominator}")]
    InvalidSubdivision { subdivision: u32, denominator: u32 },

    /// A bar whose note count cannot be split evenly across its beats.
    #[error("{notes_per_bar} notes cannot be grouped evenly into {numerator} beats")]
    UnbalancedPhrase { notes_per_bar: u32, numerator: u32 },
}
