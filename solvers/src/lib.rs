//! Solvers for a set of small text-puzzle inputs.
//!
//! Each puzzle is an independent, pure algorithm with no I/O:
//!
//! - **[`almanac`]**: maps seed numbers (or seed ranges) through an ordered
//!   chain of piecewise lookup stages and reports the minimum final value.
//! - **[`pulses`]**: simulates a network of typed logic modules exchanging
//!   low/high pulses in breadth-first order and counts pulse traffic.
//! - **[`scratchcards`]**: scores number-matching cards and counts the
//!   cascade of card copies the matches award.
//!
//! The binary (`main.rs`) owns the side effects: CLI parsing, file reading,
//! and answer printing. Puzzle logic stays deterministic and fully testable
//! in isolation.

pub mod almanac;
pub mod logging;
pub mod pulses;
pub mod scratchcards;
