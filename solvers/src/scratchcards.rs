//! Scratchcard scoring and cascading card copies.
//!
//! Each card line lists the winning numbers and the numbers you have,
//! separated by `|`. Matches score points (part one) and award copies of the
//! following cards (part two).

use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

/// One parsed card line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub winning: HashSet<u32>,
    pub have: HashSet<u32>,
}

impl Card {
    /// How many of the numbers you have appear among the winning numbers.
    pub fn matches(&self) -> usize {
        self.have.intersection(&self.winning).count()
    }

    /// Points scored: one for the first match, doubled per further match.
    pub fn points(&self) -> u64 {
        match self.matches() {
            0 => 0,
            matches => 1 << (matches - 1),
        }
    }
}

/// Parse one card per non-empty line.
pub fn parse_cards(text: &str) -> Result<Vec<Card>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_card)
        .collect()
}

/// Card line format: `Card  <id>: w1 w2 … | h1 h2 …` (interior whitespace
/// is flexible; the card table pads single-digit numbers).
fn parse_card(line: &str) -> Result<Card> {
    static CARD_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^Card\s+(\d+):\s*(.*?)\s*\|\s*(.*)$").unwrap());

    let captures = CARD_RE
        .captures(line)
        .with_context(|| format!("malformed card line '{}'", line))?;
    let id = captures[1]
        .parse()
        .with_context(|| format!("non-numeric card id in '{}'", line))?;
    let winning = parse_numbers(&captures[2])?;
    let have = parse_numbers(&captures[3])?;
    Ok(Card { id, winning, have })
}

fn parse_numbers(field: &str) -> Result<HashSet<u32>> {
    field
        .split_whitespace()
        .map(|token| {
            token
                .parse()
                .with_context(|| format!("non-numeric card number '{}'", token))
        })
        .collect()
}

/// Total points across all cards (part one).
pub fn total_points(cards: &[Card]) -> u64 {
    cards.iter().map(Card::points).sum()
}

/// Total number of cards once matches have awarded their copies (part two).
///
/// Card `i` with `m` matches adds one copy of each of the next `m` cards per
/// copy of card `i` held. A single forward pass over the copy counts yields
/// the same totals as cascading each copy individually.
pub fn total_cards(cards: &[Card]) -> u64 {
    let mut copies = vec![1u64; cards.len()];
    for (i, card) in cards.iter().enumerate() {
        let won = card.matches();
        for j in i + 1..(i + 1 + won).min(cards.len()) {
            copies[j] += copies[i];
        }
    }
    copies.iter().sum()
}
