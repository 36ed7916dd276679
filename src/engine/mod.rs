//! Per-frame gate logic.
//!
//! The engine is a pure transform: channel inputs plus the global settings in,
//! channel outputs plus indicator state out. It holds no state between calls,
//! touches nothing outside its arguments and never allocates, so a host can
//! call it straight from its processing callback.

/// Which function light is lit in each selector group.
pub mod indicator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::logic,
    io::{ChannelInput, ChannelOutput, SharedDefaultInput},
};

pub use indicator::IndicatorState;

/// Decoded global controls, shared by every channel.
///
/// Selectors are integers; anything outside `0..=4` selects no function.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicSettings {
    pub selector_1: i32,
    pub selector_2: i32,
    pub invert_a: bool,
    pub invert_b: bool,
    pub invert_1: bool,
    pub invert_2: bool,
}

impl Default for LogicSettings {
    /// Both outputs on AND, nothing inverted (the panel's initial state).
    fn default() -> Self {
        Self {
            selector_1: 2,
            selector_2: 2,
            invert_a: false,
            invert_b: false,
            invert_1: false,
            invert_2: false,
        }
    }
}

impl LogicSettings {
    pub fn with_selectors(selector_1: i32, selector_2: i32) -> Self {
        Self {
            selector_1,
            selector_2,
            ..Self::default()
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GateLogicEngine;

impl GateLogicEngine {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate a single channel.
    #[inline]
    pub fn evaluate_channel(
        &self,
        input: &ChannelInput,
        defaults: &SharedDefaultInput,
        settings: &LogicSettings,
    ) -> ChannelOutput {
        let (a, b) = input.gates(defaults);
        let a = a ^ settings.invert_a;
        let b = b ^ settings.invert_b;

        let out1 = logic::evaluate(settings.selector_1, a, b) ^ settings.invert_1;
        let out2 = logic::evaluate(settings.selector_2, a, b) ^ settings.invert_2;

        ChannelOutput::from_gates(out1, out2)
    }

    /// Evaluate every channel into `outputs` and return the indicator state.
    ///
    /// Channels are evaluated pairwise up to the shorter of the two slices;
    /// extra output slots are left untouched.
    pub fn evaluate(
        &self,
        inputs: &[ChannelInput],
        defaults: SharedDefaultInput,
        settings: &LogicSettings,
        outputs: &mut [ChannelOutput],
    ) -> IndicatorState {
        for (out, input) in outputs.iter_mut().zip(inputs.iter()) {
            *out = self.evaluate_channel(input, &defaults, settings);
        }

        IndicatorState::from_settings(settings)
    }

    /// Fixed-size variant returning the outputs by value.
    pub fn evaluate_frame<const N: usize>(
        &self,
        inputs: &[ChannelInput; N],
        defaults: SharedDefaultInput,
        settings: &LogicSettings,
    ) -> ([ChannelOutput; N], IndicatorState) {
        let mut outputs = [ChannelOutput::default(); N];
        let indicators = self.evaluate(inputs, defaults, settings, &mut outputs);
        (outputs, indicators)
    }
}
