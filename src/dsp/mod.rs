//! Low-level gate primitives used by the logic engine.
//!
//! These components are allocation-free and realtime-safe. They stay focused
//! on turning voltages into booleans and back, plus the fixed function table,
//! so the engine can layer on per-channel routing and inversion.

/// Voltage thresholding and gate level conversion.
pub mod gate;
/// The five selectable two-input boolean functions.
pub mod logic;

pub use logic::{LogicFunction, NO_FUNCTION};
