//! Accent placement styles.
//!
//! Each style is a pure function of the bar's note count, assuming the
//! conventional quarter-note pulse (beats = notes / 4). Index arithmetic
//! runs on exact rationals so a fractional notes-per-beat value can never
//! drift an accent by float rounding. A style only fills an absent accent
//! set; it never overwrites accents a preset already carries.

use num_rational::Ratio;
use std::collections::BTreeSet;
use std::fmt;

/// A named accent placement style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccentStyle {
    /// Clave-derived accents: downbeat, the "and" of beat two, last note
    Latin,
    /// Offbeat syncopation on every half-beat after the downbeat
    Funk,
    /// Four-on-the-floor: every quarter-note beat
    Disco,
    /// Accents crowding toward the end of the bar, building into a fill
    FillBuildUp,
}

/// Ordered matcher rules over preset text, first match wins.
const STYLE_RULES: [(&str, AccentStyle); 8] = [
    ("four on the floor", AccentStyle::Disco),
    ("four-on-the-floor", AccentStyle::Disco),
    ("disco", AccentStyle::Disco),
    ("build", AccentStyle::FillBuildUp),
    ("fill", AccentStyle::FillBuildUp),
    ("clave", AccentStyle::Latin),
    ("latin", AccentStyle::Latin),
    ("funk", AccentStyle::Funk),
];

fn floor_slot(r: Ratio<i64>) -> i64 {
    r.floor().to_integer()
}

impl AccentStyle {
    /// Every placement style.
    pub const ALL: [AccentStyle; 4] = [
        AccentStyle::Latin,
        AccentStyle::Funk,
        AccentStyle::Disco,
        AccentStyle::FillBuildUp,
    ];

    /// Identify a style from preset free text (case-folded name,
    /// description, and tags concatenated).
    pub fn match_text(text: &str) -> Option<AccentStyle> {
        let text = text.to_lowercase();
        STYLE_RULES
            .iter()
            .find(|(needle, _)| text.contains(needle))
            .map(|(_, style)| *style)
    }

    /// Compute the accent slots this style places in a bar of
    /// `notes_per_bar` subdivisions.
    ///
    /// Out-of-range slots are dropped (a 4.5-beat accent is the next bar's
    /// downbeat) and duplicates collapse, so the result always satisfies
    /// `0 <= slot < notes_per_bar` with no repeats.
    pub fn place(&self, notes_per_bar: u32) -> BTreeSet<u32> {
        let n = i64::from(notes_per_bar);
        // One quarter-note beat spans n/4 slots; exact even when fractional.
        let beat = Ratio::new(n, 4);
        let raw: Vec<i64> = match self {
            AccentStyle::Latin => vec![
                0,
                floor_slot(beat * Ratio::new(5, 2)),
                floor_slot(beat * 4) - 1,
            ],
            AccentStyle::Funk => (0..4i64)
                .map(|i| floor_slot(beat * Ratio::new(2 * i + 3, 2)))
                .collect(),
            AccentStyle::Disco => (0..4i64).map(|i| floor_slot(beat * i)).collect(),
            AccentStyle::FillBuildUp => {
                let count = (n / 4).min(4);
                (0..count).map(|i| n * (3 + i) / (count + 2)).collect()
            }
        };
        raw.into_iter()
            .filter(|&slot| 0 <= slot && slot < n)
            .map(|slot| slot as u32)
            .collect()
    }
}

impl fmt::Display for AccentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccentStyle::Latin => "latin",
            AccentStyle::Funk => "funk",
            AccentStyle::Disco => "disco",
            AccentStyle::FillBuildUp => "fill-build-up",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_sixteen_slots() {
        // notes_per_beat = 4: floor(0) = 0, floor(2.5 * 4) = 10, 16 - 1 = 15
        let accents: Vec<u32> = AccentStyle::Latin.place(16).into_iter().collect();
        assert_eq!(accents, vec![0, 10, 15]);
    }

    #[test]
    fn test_latin_fractional_beat() {
        // 7/8 at sixteenths: 14 slots, 3.5 per beat.
        let accents: Vec<u32> = AccentStyle::Latin.place(14).into_iter().collect();
        assert_eq!(accents, vec![0, 8, 13]);
    }

    #[test]
    fn test_funk_sixteen_slots() {
        // floor(1.5 * 4), floor(2.5 * 4), floor(3.5 * 4); floor(4.5 * 4) = 18
        // lands past the bar and is dropped.
        let accents: Vec<u32> = AccentStyle::Funk.place(16).into_iter().collect();
        assert_eq!(accents, vec![6, 10, 14]);
    }

    #[test]
    fn test_disco_marks_every_beat() {
        let accents: Vec<u32> = AccentStyle::Disco.place(16).into_iter().collect();
        assert_eq!(accents, vec![0, 4, 8, 12]);
    }

    #[test]
    fn test_fill_build_up_weights_toward_bar_end() {
        // count = 4: floor(16 * 3/6) = 8, 16 * 4/6 = 10, 16 * 5/6 = 13;
        // 16 * 6/6 = 16 is out of range and dropped.
        let accents: Vec<u32> = AccentStyle::FillBuildUp.place(16).into_iter().collect();
        assert_eq!(accents, vec![8, 10, 13]);
    }

    #[test]
    fn test_all_styles_stay_in_range() {
        for style in AccentStyle::ALL {
            for notes in [1, 2, 3, 4, 6, 8, 12, 14, 16, 24, 32] {
                for &slot in &style.place(notes) {
                    assert!(slot < notes, "{} placed {} in a {}-slot bar", style, slot, notes);
                }
            }
        }
    }

    #[test]
    fn test_match_each_rule() {
        let cases = [
            ("four on the floor", AccentStyle::Disco),
            ("four-on-the-floor pump", AccentStyle::Disco),
            ("Disco Night", AccentStyle::Disco),
            ("tension build", AccentStyle::FillBuildUp),
            ("fill practice", AccentStyle::FillBuildUp),
            ("son clave", AccentStyle::Latin),
            ("latin groove", AccentStyle::Latin),
            ("funk syncopation", AccentStyle::Funk),
        ];
        for (text, expected) in cases {
            assert_eq!(AccentStyle::match_text(text), Some(expected), "text: {}", text);
        }
        assert_eq!(AccentStyle::match_text("plain rock beat"), None);
    }
}
