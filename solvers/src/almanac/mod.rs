//! Seed-to-location remapping through an ordered chain of lookup stages.
//!
//! The almanac input defines a pipeline of stages, each a set of disjoint
//! half-open intervals with a destination offset. [`remap`] holds the pure
//! interval arithmetic; [`parse`] turns the text format into a pipeline.

pub mod parse;
pub mod remap;
