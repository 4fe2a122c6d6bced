//! Goldline rules engine library.
//!
//! Exposes the board representation, move generation, ability resolution,
//! and move application modules for use by UI, AI, and integration tests.

pub mod ability;
pub mod board;
pub mod movegen;
pub mod resolve;
