//! Core Pattern struct.

use crate::error::EngineError;
use crate::types::time::TimeSignature;
use crate::types::token;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One bar of drum practice material.
///
/// `drum` and `sticking` carry one token per subdivision slot, `phrase`
/// partitions the bar's notes into beat-aligned groups, and `accents` marks
/// the slots played louder. The engine's repair passes exist to keep all
/// four aligned to the bar's note count; everything else treats a `Pattern`
/// as immutable data passed by value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub time_signature: TimeSignature,
    /// How many equal parts one whole note is divided into (16 = sixteenths)
    pub subdivision: u32,
    /// Per-beat note group sizes, summing to the bar's note count
    pub phrase: Vec<u32>,
    /// Voicing token per slot (which drum sounds)
    pub drum: Vec<String>,
    /// Sticking token per slot (which hand plays)
    pub sticking: Vec<String>,
    /// How many times the bar is played back to back
    pub repeat: u32,
    /// Accented slot indices, each in [0, notes_per_bar)
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub accents: BTreeSet<u32>,
}

impl Pattern {
    /// Exact number of subdivision slots in this pattern's bar.
    pub fn notes_per_bar(&self) -> Result<u32, EngineError> {
        self.time_signature.notes_per_bar(self.subdivision)
    }

    /// Check every alignment invariant at once: the note count is derivable,
    /// voicing and sticking fill the bar exactly, the phrase sums to the
    /// count, every accent is in range, and the repeat is positive.
    pub fn is_well_formed(&self) -> bool {
        let notes = match self.notes_per_bar() {
            Ok(notes) => notes,
            Err(_) => return false,
        };
        let slots = notes as usize;
        self.repeat >= 1
            && self.drum.len() == slots
            && self.sticking.len() == slots
            && self.phrase.iter().sum::<u32>() == notes
            && self.accents.iter().all(|&slot| slot < notes)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} @ {}: \"{}\"",
            self.time_signature,
            self.subdivision,
            token::format(&self.drum)
        )
    }
}
