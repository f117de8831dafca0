//! Phrase grouping repair.

use crate::error::EngineError;

/// Make a phrase grouping sum exactly to the bar's note count.
///
/// A phrase that already sums to `notes_per_bar` is kept as written. Any
/// other phrase is replaced wholesale with `numerator` even groups. When the
/// count cannot be split evenly the mismatch is reported instead of written
/// back with a wrong sum (a count derived from the bar formula is always
/// divisible by the numerator, so this only fires on corrupted data).
pub fn rebalance(
    phrase: &[u32],
    notes_per_bar: u32,
    numerator: u32,
) -> Result<Vec<u32>, EngineError> {
    let sum: u32 = phrase.iter().sum();
    if sum == notes_per_bar {
        return Ok(phrase.to_vec());
    }
    if numerator == 0 || notes_per_bar % numerator != 0 {
        return Err(EngineError::UnbalancedPhrase {
            notes_per_bar,
            numerator,
        });
    }
    Ok(vec![notes_per_bar / numerator; numerator as usize])
}
