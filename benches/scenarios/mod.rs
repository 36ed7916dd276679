//! Frame benchmarks.
//!
//! These model the host calling the module once per sample with every
//! channel patched.

mod engine;
mod module;

pub use engine::bench_engine;
pub use module::bench_module;
