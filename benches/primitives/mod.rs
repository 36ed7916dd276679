//! Benchmarks for low-level gate primitives.

mod logic;

pub use logic::bench_logic;
