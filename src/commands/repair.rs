//! `repair` - bring every preset in a stored collection back into a
//! consistent bar, then rewrite the whole document with a bumped version.

use crate::commands::flag_value;
use anyhow::{bail, Context, Result};
use backbeat_core::{normalize_collection, PresetCollection};
use colored::*;
use std::fs;

pub fn run(args: &[String]) -> Result<()> {
    let path = match args.first() {
        Some(path) => path.as_str(),
        None => bail!("usage: backbeat repair <collection.json> [--out <file>]"),
    };
    let out_path = flag_value(args, "--out").unwrap_or(path);

    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    let mut collection =
        PresetCollection::from_json(&text).with_context(|| format!("parsing {}", path))?;

    let report = normalize_collection(&mut collection);

    for id in &report.repaired {
        println!("  {} {}", "fixed".bright_green(), id);
    }
    for failure in &report.failures {
        println!(
            "  {}  {} ({})",
            "kept".bright_yellow(),
            failure.id,
            failure.reason
        );
    }

    // The document is rewritten whole or not at all.
    fs::write(out_path, collection.to_json()?)
        .with_context(|| format!("writing {}", out_path))?;

    println!(
        "{}",
        format!(
            "✔ version {}: {} repaired, {} untouched, {} failed",
            collection.version,
            report.repaired.len(),
            report.untouched,
            report.failures.len()
        )
        .bright_green()
    );
    Ok(())
}
