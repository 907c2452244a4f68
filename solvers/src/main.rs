//! Puzzle solver CLI.
//!
//! One subcommand per puzzle. Each reads a plain-text input file and prints
//! its answers to stdout, one integer per line. Unreadable inputs and parse
//! failures are fatal: the error chain goes to stderr and the process exits
//! non-zero.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use solvers::almanac::parse::{parse_almanac, seed_ranges};
use solvers::logging;
use solvers::pulses::network::Network;
use solvers::pulses::sim::run_cycles;
use solvers::scratchcards::{parse_cards, total_cards, total_points};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "solvers",
    version,
    about = "Text-puzzle solvers: almanac remapping, pulse networks, scratchcards"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Map seeds (and seed ranges) through the almanac; print both minima.
    Almanac { input: PathBuf },
    /// Count low/high pulse traffic; print the low*high product.
    Pulses {
        input: PathBuf,
        /// Number of button presses to simulate.
        #[arg(long, default_value_t = 1000)]
        presses: u64,
    },
    /// Score scratchcards; print total points and total card count.
    Scratchcards { input: PathBuf },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Almanac { input } => cmd_almanac(&input),
        Command::Pulses { input, presses } => cmd_pulses(&input, presses),
        Command::Scratchcards { input } => cmd_scratchcards(&input),
    }
}

fn cmd_almanac(input: &Path) -> Result<()> {
    let text = read_input(input)?;
    let almanac = parse_almanac(&text)?;
    debug!(
        seeds = almanac.seeds.len(),
        stages = almanac.pipeline.stages.len(),
        "parsed almanac"
    );

    let part_one = almanac
        .pipeline
        .min_value(&almanac.seeds)
        .context("almanac has no seeds")?;
    let ranges = seed_ranges(&almanac.seeds)?;
    let part_two = almanac
        .pipeline
        .min_value_of_ranges(ranges)
        .context("almanac has no seed ranges")?;

    println!("{}", part_one);
    println!("{}", part_two);
    Ok(())
}

fn cmd_pulses(input: &Path, presses: u64) -> Result<()> {
    let text = read_input(input)?;
    let mut network = Network::parse(&text)?;
    debug!(
        modules = network.modules.len(),
        presses, "parsed pulse network"
    );

    let counts = run_cycles(&mut network, presses)?;
    debug!(low = counts.low, high = counts.high, "simulation finished");
    println!("{}", counts.product());
    Ok(())
}

fn cmd_scratchcards(input: &Path) -> Result<()> {
    let text = read_input(input)?;
    let cards = parse_cards(&text)?;
    debug!(cards = cards.len(), "parsed scratchcards");

    println!("{}", total_points(&cards));
    println!("{}", total_cards(&cards));
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
