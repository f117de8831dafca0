//! Batch tools for backbeat preset collections.

mod commands;

use anyhow::{bail, Result};
use colored::*;
use std::env;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("{} {:#}", "error:".bright_red().bold(), err);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        Some("repair") => commands::repair::run(&args[1..]),
        Some("generate") => commands::generate::run(&args[1..]),
        Some("help") | None => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            print_usage();
            bail!("unknown command '{}'", other)
        }
    }
}

fn print_usage() {
    println!("{}", "backbeat - drum pattern batch tools".bold());
    println!();
    println!("{}", "Usage:".green());
    println!(
        "  backbeat {} <collection.json> [--out <file>]",
        "repair".cyan()
    );
    println!(
        "  backbeat {} <timesig> <subdivision> [--seed <n>]",
        "generate".cyan()
    );
    println!();
    println!("{}", "Examples:".green());
    println!("  backbeat repair presets.json");
    println!("  backbeat generate 4/4 16 --seed 7");
}
