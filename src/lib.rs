pub mod dsp; // Gate thresholding and the boolean function table
pub mod engine; // Per-frame gate logic evaluation
pub mod io;
pub mod module; // Host-facing module: params, ports, lights

pub use engine::{GateLogicEngine, IndicatorState, LogicSettings};
pub use module::BinaryModule;

/// Channel count used by the panel bench and the default module alias.
pub const DEFAULT_CHANNELS: usize = 16;

/// Voltage at or above which a gate input reads as high.
pub const GATE_THRESHOLD: f32 = 1.0;
/// Output voltage of a high gate.
pub const GATE_HIGH: f32 = 10.0;
/// Output voltage of a low gate.
pub const GATE_LOW: f32 = 0.0;
