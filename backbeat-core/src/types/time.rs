//! Time signature parsing and per-bar note arithmetic.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Note values that may appear under a time signature.
const BEAT_UNITS: [u32; 6] = [1, 2, 4, 8, 16, 32];

/// A musical time signature such as 4/4 or 7/8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignature {
    /// Beats per bar (numerator)
    pub numerator: u32,
    /// Note value that gets one beat (denominator: 4 = quarter, 8 = eighth)
    pub denominator: u32,
}

impl TimeSignature {
    /// Create a time signature, validating that the denominator is a
    /// recognized beat unit.
    pub fn new(numerator: u32, denominator: u32) -> Result<Self, EngineError> {
        if numerator == 0 {
            return Err(EngineError::Format(
                "time signature numerator must be positive".to_string(),
            ));
        }
        if !BEAT_UNITS.contains(&denominator) {
            return Err(EngineError::Format(format!(
                "'{}' is not a beat unit (expected one of 1, 2, 4, 8, 16, 32)",
                denominator
            )));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Exact number of subdivision slots in one bar.
    ///
    /// `subdivision` is how many equal parts one whole note is divided into
    /// (16 = sixteenth notes). It must be divisible by the beat unit; a
    /// subdivision that is not would leave a fractional note count, so it is
    /// rejected instead of silently truncated.
    pub fn notes_per_bar(&self, subdivision: u32) -> Result<u32, EngineError> {
        if subdivision == 0 || subdivision % self.denominator != 0 {
            return Err(EngineError::InvalidSubdivision {
                subdivision,
                denominator: self.denominator,
            });
        }
        Ok(self.numerator * (subdivision / self.denominator))
    }
}

impl FromStr for TimeSignature {
    type Err = EngineError;

    /// Parse a `"<numerator>/<denominator>"` description.
    fn from_str(s: &str) -> Result<Self, EngineError> {
        let (numerator, denominator) = s.trim().split_once('/').ok_or_else(|| {
            EngineError::Format(format!(
                "'{}' is not a time signature (expected <numerator>/<denominator>)",
                s
            ))
        })?;
        let numerator: u32 = numerator
            .parse()
            .map_err(|_| EngineError::Format(format!("'{}' is not a bar length", numerator)))?;
        let denominator: u32 = denominator
            .parse()
            .map_err(|_| EngineError::Format(format!("'{}' is not a beat unit", denominator)))?;
        TimeSignature::new(numerator, denominator)
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
