//! Benchmark support crate for circles.
//!
//! Provides a seeded synthetic friendship source and parameter types used by
//! the Criterion benchmarks for friendship replay and statistics queries.

pub mod error;
pub mod params;
pub mod source;
