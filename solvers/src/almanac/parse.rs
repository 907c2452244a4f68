//! Parser for the almanac text format.
//!
//! The input starts with a `seeds: n1 n2 …` line, followed by blank-line
//! separated stage blocks. Each block is headed by a `source-to-dest map:`
//! line and lists `dest_start source_start length` triples, one per line.
//! All parse failures are fatal and carry the offending line in context.

use anyhow::{Context, Result, bail};

use crate::almanac::remap::{Interval, Pipeline, SeedRange, Stage};

/// Parsed puzzle input: the seed list plus the full stage pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<u64>,
    pub pipeline: Pipeline,
}

pub fn parse_almanac(text: &str) -> Result<Almanac> {
    let mut blocks = text.trim_end().split("\n\n");
    let seed_block = blocks.next().context("empty almanac input")?;
    let seeds = parse_seeds(seed_block)?;
    let stages = blocks.map(parse_stage).collect::<Result<Vec<_>>>()?;
    Ok(Almanac {
        seeds,
        pipeline: Pipeline { stages },
    })
}

/// Pair up the seed list as `(start, length)` ranges for the range variant.
pub fn seed_ranges(seeds: &[u64]) -> Result<Vec<SeedRange>> {
    if seeds.len() % 2 != 0 {
        bail!(
            "seed list has {} entries, expected start/length pairs",
            seeds.len()
        );
    }
    Ok(seeds
        .chunks_exact(2)
        .map(|pair| SeedRange::new(pair[0], pair[0] + pair[1]))
        .collect())
}

fn parse_seeds(block: &str) -> Result<Vec<u64>> {
    let numbers = block
        .trim()
        .strip_prefix("seeds:")
        .with_context(|| format!("expected `seeds:` header in '{}'", block.trim()))?;
    numbers.split_whitespace().map(parse_number).collect()
}

fn parse_stage(block: &str) -> Result<Stage> {
    let mut lines = block.lines();
    let header = lines.next().context("empty stage block")?;
    let (source, dest) = parse_stage_header(header)?;
    let intervals = lines.map(parse_interval).collect::<Result<Vec<_>>>()?;
    Ok(Stage {
        source,
        dest,
        intervals,
    })
}

/// Parse a `source-to-dest map:` header into its domain names.
///
/// The names are informational only; they never affect mapping.
fn parse_stage_header(line: &str) -> Result<(String, String)> {
    let title = line.split_whitespace().next().unwrap_or_default();
    let mut parts = title.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(source), Some("to"), Some(dest)) if line.trim_end().ends_with("map:") => {
            Ok((source.to_string(), dest.to_string()))
        }
        _ => bail!("malformed stage header '{}'", line),
    }
}

fn parse_interval(line: &str) -> Result<Interval> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[dest, begin, len] = fields.as_slice() else {
        bail!("expected `dest source length` triple in '{}'", line);
    };
    let dest = parse_number(dest)?;
    let begin = parse_number(begin)?;
    let len = parse_number(len)?;
    Ok(Interval {
        begin,
        end: begin + len,
        dest,
    })
}

fn parse_number(token: &str) -> Result<u64> {
    token
        .parse()
        .with_context(|| format!("non-numeric field '{}'", token))
}
