//! Cross-cutting tests for the pattern module.

use super::accent::AccentStyle;
use super::core::Pattern;
use super::cycle::{base_cycle_len, expand, fit};
use super::phrase;
use crate::types::time::TimeSignature;
use crate::types::token;

fn four_four_sixteenths() -> Pattern {
    Pattern {
        time_signature: "4/4".parse().unwrap(),
        subdivision: 16,
        phrase: vec![4, 4, 4, 4],
        drum: token::parse("S S K S S S K S S S K S S S K S"),
        sticking: token::parse("R L R R L R L L R L R R L R L L"),
        repeat: 1,
        accents: [0, 10, 15].into_iter().collect(),
    }
}

#[test]
fn test_well_formed_pattern() {
    assert!(four_four_sixteenths().is_well_formed());
}

#[test]
fn test_misaligned_patterns_are_rejected() {
    let mut short_drum = four_four_sixteenths();
    short_drum.drum.truncate(4);
    assert!(!short_drum.is_well_formed());

    let mut bad_phrase = four_four_sixteenths();
    bad_phrase.phrase = vec![3, 3, 3, 3];
    assert!(!bad_phrase.is_well_formed());

    let mut stray_accent = four_four_sixteenths();
    stray_accent.accents.insert(16);
    assert!(!stray_accent.is_well_formed());

    let mut zero_repeat = four_four_sixteenths();
    zero_repeat.repeat = 0;
    assert!(!zero_repeat.is_well_formed());
}

#[test]
fn test_drum_cell_expands_across_the_bar() {
    // "4/4" at sixteenths holds 16 notes; a four-token cell fills it in
    // four repetitions.
    let ts: TimeSignature = "4/4".parse().unwrap();
    let notes = ts.notes_per_bar(16).unwrap();
    assert_eq!(notes, 16);

    let cell = token::parse("S S K S");
    let expanded = expand(&cell, notes as usize);
    assert_eq!(token::format(&expanded), "S S K S S S K S S S K S S S K S");
}

#[test]
fn test_expand_round_trips_through_base_cycle() {
    // Any sequence built from a repeated base reconstructs itself after
    // collapsing to its cycle.
    for base in [
        &["K"][..],
        &["S", "K"][..],
        &["S", "S", "K", "S"][..],
        &["R", "L", "R"][..],
    ] {
        for reps in 1..=4 {
            let tokens = expand(base, base.len() * reps);
            let l = base_cycle_len(&tokens);
            assert_eq!(tokens.len() % l, 0);
            assert_eq!(expand(&tokens[..l], tokens.len()), tokens);
            assert_eq!(fit(&tokens, tokens.len()), tokens);
        }
    }
}

#[test]
fn test_accent_sets_fit_the_bar() {
    let notes = 16;
    for style in AccentStyle::ALL {
        let accents = style.place(notes);
        assert!(!accents.is_empty(), "{} placed nothing", style);
        assert!(accents.iter().all(|&slot| slot < notes));
    }
}

#[test]
fn test_phrase_rebalance_matches_bar() {
    // [3, 3, 3, 3] sums to 12, not 16; the 4/4 bar rebalances to even beats.
    let rebalanced = phrase::rebalance(&[3, 3, 3, 3], 16, 4).unwrap();
    assert_eq!(rebalanced, vec![4, 4, 4, 4]);
    assert_eq!(rebalanced.iter().sum::<u32>(), 16);
}

#[test]
fn test_display_quotes_the_voicing() {
    let pattern = four_four_sixteenths();
    assert_eq!(
        pattern.to_string(),
        "4/4 @ 16: \"S S K S S S K S S S K S S S K S\""
    );
}
