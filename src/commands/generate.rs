//! `generate` - print a fresh seeded pattern for a bar description.

use crate::commands::flag_value;
use anyhow::{bail, Context, Result};
use backbeat_core::{generate, Pattern, Rng};
use colored::*;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn run(args: &[String]) -> Result<()> {
    let (time_signature, subdivision) = match (args.first(), args.get(1)) {
        (Some(ts), Some(sub)) => (ts.as_str(), sub.as_str()),
        _ => bail!("usage: backbeat generate <timesig> <subdivision> [--seed <n>]"),
    };
    let subdivision: u32 = subdivision
        .parse()
        .with_context(|| format!("'{}' is not a subdivision", subdivision))?;

    // Without an explicit seed, derive one from the clock; either way the
    // seed is printed so any pattern can be regenerated.
    let seed: u128 = match flag_value(args, "--seed") {
        Some(text) => text
            .parse()
            .with_context(|| format!("'{}' is not a seed", text))?,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos(),
    };

    let mut rng = Rng::with_seed(seed);
    let pattern = generate(time_signature, subdivision, &mut rng)?;
    render(&pattern, seed);
    Ok(())
}

/// Print the pattern as aligned token rows.
fn render(pattern: &Pattern, seed: u128) {
    let width = pattern
        .drum
        .iter()
        .chain(pattern.sticking.iter())
        .map(|tok| tok.len())
        .max()
        .unwrap_or(1);
    let row = |tokens: &[String]| -> String {
        tokens
            .iter()
            .map(|tok| format!("{:>width$}", tok, width = width))
            .collect::<Vec<_>>()
            .join(" ")
    };
    let accents: Vec<String> = (0..pattern.drum.len())
        .map(|slot| {
            if pattern.accents.contains(&(slot as u32)) {
                ">".to_string()
            } else {
                " ".to_string()
            }
        })
        .collect();

    println!(
        "{} @ {} x{} (seed {})",
        pattern.time_signature.to_string().bold(),
        pattern.subdivision,
        pattern.repeat,
        seed
    );
    println!("  {}  {}", "accent".dimmed(), row(&accents).bright_yellow());
    println!("  {}    {}", "drum".dimmed(), row(&pattern.drum).cyan());
    println!("  {}   {}", "stick".dimmed(), row(&pattern.sticking));
    println!(
        "  {}  {}",
        "phrase".dimmed(),
        pattern
            .phrase
            .iter()
            .map(|group| group.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
}
