//! Canonical rudiment stickings and the metadata matcher.
//!
//! Whether a stored preset "is" a paradiddle is decided by an ordered
//! substring rule table over its free text (name, description, tags). Rule
//! order is load-bearing: multi-word names match before the shorter names
//! they contain, so "triple paradiddle" never falls through to "paradiddle".
//! Once a preset matches, the catalog sticking is authoritative over
//! whatever sticking text was stored.

use crate::types::pattern::cycle;
use std::fmt;

/// A named, standardized sticking pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rudiment {
    SingleStrokeRoll,
    DoubleStrokeRoll,
    Paradiddle,
    DoubleParadiddle,
    TripleParadiddle,
    ParadiddleDiddle,
    FlamTap,
    SingleRatamacue,
}

/// Ordered matcher rules, most specific first. Evaluated top to bottom,
/// first match wins.
const MATCH_RULES: [(&str, Rudiment); 14] = [
    ("triple paradiddle", Rudiment::TripleParadiddle),
    ("triple-paradiddle", Rudiment::TripleParadiddle),
    ("double paradiddle", Rudiment::DoubleParadiddle),
    ("double-paradiddle", Rudiment::DoubleParadiddle),
    ("paradiddle-diddle", Rudiment::ParadiddleDiddle),
    ("paradiddle diddle", Rudiment::ParadiddleDiddle),
    ("paradiddle", Rudiment::Paradiddle),
    ("double stroke", Rudiment::DoubleStrokeRoll),
    ("double-stroke", Rudiment::DoubleStrokeRoll),
    ("single stroke", Rudiment::SingleStrokeRoll),
    ("single-stroke", Rudiment::SingleStrokeRoll),
    ("flam tap", Rudiment::FlamTap),
    ("flam-tap", Rudiment::FlamTap),
    ("ratamacue", Rudiment::SingleRatamacue),
];

impl Rudiment {
    /// Every rudiment in the catalog.
    pub const ALL: [Rudiment; 8] = [
        Rudiment::SingleStrokeRoll,
        Rudiment::DoubleStrokeRoll,
        Rudiment::Paradiddle,
        Rudiment::DoubleParadiddle,
        Rudiment::TripleParadiddle,
        Rudiment::ParadiddleDiddle,
        Rudiment::FlamTap,
        Rudiment::SingleRatamacue,
    ];

    /// Stable identifier used in preset tags and tool output.
    pub fn key(&self) -> &'static str {
        match self {
            Rudiment::SingleStrokeRoll => "single-stroke-roll",
            Rudiment::DoubleStrokeRoll => "double-stroke-roll",
            Rudiment::Paradiddle => "paradiddle",
            Rudiment::DoubleParadiddle => "double-paradiddle",
            Rudiment::TripleParadiddle => "triple-paradiddle",
            Rudiment::ParadiddleDiddle => "paradiddle-diddle",
            Rudiment::FlamTap => "flam-tap",
            Rudiment::SingleRatamacue => "single-ratamacue",
        }
    }

    /// The authoritative sticking base cycle. Lowercase prefixes are grace
    /// notes (`lR` = right stroke with a left flam, `llR` = drag).
    pub fn sticking(&self) -> &'static [&'static str] {
        match self {
            Rudiment::SingleStrokeRoll => &["R", "L"],
            Rudiment::DoubleStrokeRoll => &["R", "R", "L", "L"],
            Rudiment::Paradiddle => &["R", "L", "R", "R", "L", "R", "L", "L"],
            Rudiment::DoubleParadiddle => {
                &["R", "L", "R", "L", "R", "R", "L", "R", "L", "R", "L", "L"]
            }
            Rudiment::TripleParadiddle => &[
                "R", "L", "R", "L", "R", "L", "R", "R", "L", "R", "L", "R", "L", "R", "L", "L",
            ],
            Rudiment::ParadiddleDiddle => &["R", "L", "R", "R", "L", "L"],
            Rudiment::FlamTap => &["lR", "R", "rL", "L"],
            Rudiment::SingleRatamacue => &["llR", "L", "R", "L"],
        }
    }

    /// Replay the canonical sticking out to `target_len` strokes.
    pub fn expand_sticking(&self, target_len: usize) -> Vec<String> {
        cycle::expand(self.sticking(), target_len)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Identify which rudiment a preset's free text refers to, if any.
    ///
    /// `text` is the case-folded concatenation of name, description, and
    /// tags. Deterministic: identical text always yields the identical key.
    pub fn match_text(text: &str) -> Option<Rudiment> {
        let text = text.to_lowercase();
        MATCH_RULES
            .iter()
            .find(|(needle, _)| text.contains(needle))
            .map(|(_, rudiment)| *rudiment)
    }
}

impl fmt::Display for Rudiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
