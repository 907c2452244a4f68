//! Pulse propagation through a fixed network of typed logic modules.
//!
//! [`network`] defines the module graph and its text format; [`sim`] drives
//! breadth-first pulse delivery and accumulates the low/high traffic counts.

pub mod network;
pub mod sim;
