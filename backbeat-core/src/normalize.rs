//! Repair passes that bring stored patterns back into a consistent bar.
//!
//! Passes run in a fixed order because later ones assume what earlier ones
//! established: the note count comes first, token fitting and the rudiment
//! override need the count, accent filling needs the final voicing, and the
//! phrase check runs last.

use crate::error::EngineError;
use crate::preset::{Preset, PresetCollection, PresetMetadata};
use crate::types::pattern::{accent::AccentStyle, cycle, phrase, Pattern};
use crate::types::rudiment::Rudiment;

/// Bring a possibly-inconsistent pattern back into compliance with its bar.
///
/// `metadata`, when present, drives the rudiment and accent-style matchers;
/// a pattern repaired without metadata keeps its stored sticking and gets
/// no style accents. The input is never mutated; a corrected copy is
/// returned.
pub fn normalize(
    pattern: &Pattern,
    metadata: Option<&PresetMetadata>,
) -> Result<Pattern, EngineError> {
    let notes = pattern.notes_per_bar()?;
    let slots = notes as usize;
    let text = metadata.map(|m| m.search_text());

    let mut fixed = pattern.clone();

    // Voicing stretches from its base cycle. An empty voicing stays empty;
    // there is nothing to replay.
    if fixed.drum.len() != slots {
        fixed.drum = cycle::fit(&fixed.drum, slots);
    }

    // A recognized rudiment name is authoritative over whatever sticking
    // was stored; otherwise the stored sticking is refitted like the
    // voicing.
    match text.as_deref().and_then(Rudiment::match_text) {
        Some(rudiment) => fixed.sticking = rudiment.expand_sticking(slots),
        None if fixed.sticking.len() != slots => {
            fixed.sticking = cycle::fit(&fixed.sticking, slots);
        }
        None => {}
    }

    let style = text.as_deref().and_then(AccentStyle::match_text);

    // Four-on-the-floor presets get the kick actually placed on every
    // quarter-note beat, not just promised in the description.
    if style == Some(AccentStyle::Disco) && !fixed.drum.is_empty() {
        for &slot in &AccentStyle::Disco.place(notes) {
            fixed.drum[slot as usize] = "K".to_string();
        }
    }

    // Stored accents are kept, minus out-of-range slots; a style only
    // fills an absent set.
    fixed.accents.retain(|&slot| slot < notes);
    if fixed.accents.is_empty() {
        if let Some(style) = style {
            fixed.accents = style.place(notes);
        }
    }

    fixed.phrase = phrase::rebalance(&fixed.phrase, notes, fixed.time_signature.numerator)?;

    if fixed.repeat == 0 {
        fixed.repeat = 1;
    }

    Ok(fixed)
}

/// Repair one stored preset, going through the text codec on both edges.
pub fn normalize_preset(preset: &Preset) -> Result<Preset, EngineError> {
    let pattern = preset.to_pattern()?;
    let fixed = normalize(&pattern, Some(&preset.metadata))?;
    Ok(preset.with_pattern(&fixed))
}

/// One entry that could not be brought back into a consistent bar.
#[derive(Clone, Debug, PartialEq)]
pub struct RepairFailure {
    pub id: String,
    pub reason: EngineError,
}

/// Outcome of one collection repair run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RepairReport {
    /// Ids of entries rewritten with corrected fields
    pub repaired: Vec<String>,
    /// Entries that were already consistent and kept byte for byte
    pub untouched: usize,
    /// Entries left as stored because they could not be repaired
    pub failures: Vec<RepairFailure>,
}

/// Repair every entry of a stored collection in place.
///
/// A failing entry keeps its stored form and is reported by id and reason;
/// the remaining entries are still repaired. The version bumps exactly once
/// per run, matching the callers' all-or-nothing document rewrite.
pub fn normalize_collection(collection: &mut PresetCollection) -> RepairReport {
    let mut report = RepairReport::default();
    for preset in &mut collection.presets {
        match normalize_preset(preset) {
            Ok(fixed) if fixed == *preset => report.untouched += 1,
            Ok(fixed) => {
                report.repaired.push(fixed.id.clone());
                *preset = fixed;
            }
            Err(reason) => report.failures.push(RepairFailure {
                id: preset.id.clone(),
                reason,
            }),
        }
    }
    collection.version += 1;
    report
}
