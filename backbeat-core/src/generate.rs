//! Randomized pattern generation.

use crate::error::EngineError;
use crate::rng::Rng;
use crate::types::pattern::{cycle, AccentStyle, Pattern};
use crate::types::rudiment::Rudiment;
use crate::types::time::TimeSignature;

/// Voicing tokens the generator draws from: kick, snare, hi-hat, tom.
const VOICES: [&str; 4] = ["K", "S", "H", "T"];

/// Candidate base-cycle lengths for a fresh voicing. Only lengths dividing
/// the bar are used, so the expanded bar always repeats cleanly.
const CELL_LENGTHS: [u32; 4] = [2, 3, 4, 8];

/// Produce a freshly randomized, invariant-satisfying pattern for the given
/// bar description.
///
/// All randomness comes from `rng`; a fixed seed yields a fixed pattern.
pub fn generate(
    time_signature: &str,
    subdivision: u32,
    rng: &mut Rng,
) -> Result<Pattern, EngineError> {
    let time_signature: TimeSignature = time_signature.parse()?;
    let notes = time_signature.notes_per_bar(subdivision)?;
    let slots = notes as usize;

    // Author a short voicing cell and stretch it across the bar, so the
    // result repeats musically instead of wandering for sixteen slots.
    let candidates: Vec<u32> = CELL_LENGTHS
        .iter()
        .copied()
        .filter(|l| notes % l == 0)
        .collect();
    let cell_len = if candidates.is_empty() {
        notes
    } else {
        *rng.choose(&candidates)
    };
    let mut cell: Vec<String> = (0..cell_len)
        .map(|_| rng.choose(&VOICES).to_string())
        .collect();
    // The bar starts from the kick.
    cell[0] = "K".to_string();
    let drum = cycle::expand(&cell, slots);

    // Sticking comes from the rudiment catalog, replayed to the bar length.
    let rudiment = *rng.choose(&Rudiment::ALL);
    let sticking = rudiment.expand_sticking(slots);

    let style = *rng.choose(&AccentStyle::ALL);
    let accents = style.place(notes);

    // notes_per_bar is numerator * (subdivision / denominator), so the even
    // per-beat split is always exact.
    let phrase = vec![notes / time_signature.numerator; time_signature.numerator as usize];

    Ok(Pattern {
        time_signature,
        subdivision,
        phrase,
        drum,
        sticking,
        repeat: rng.rand_range(1..5) as u32,
        accents,
    })
}
