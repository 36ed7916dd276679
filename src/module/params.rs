//! Panel parameters and their decoding into engine settings.

/*
Parameters
==========

The host stores six continuous parameter values. The module decodes them
once per frame:

  id  name            range   default  decoded as
  0   INV A switch    0..1    1.0      invert A  = value < 0.5
  1   INV B switch    0..1    1.0      invert B  = value < 0.5
  2   OP 1 knob       0..4    2.0      selector 1 = round, clamp to 0..=4
  3   OP 2 knob       0..4    2.0      selector 2 = round, clamp to 0..=4
  4   INV 1 switch    0..1    1.0      invert out 1 = value < 0.5
  5   INV 2 switch    0..1    1.0      invert out 2 = value < 0.5

Switch Convention
-----------------

The inversion switches rest in the up position (1.0), which passes the
signal straight through. Flipping a switch down (0.0) inverts. So the
default panel is "nothing inverted, both outputs on AND".

Selector Rounding
-----------------

The knobs snap, but hosts still hand us floats (automation, modulation,
hand-edited presets). Rounding is to nearest, half away from zero, then
clamped:

    1.49 → 1    1.5 → 2    -0.7 → 0    9.0 → 4

Clamping makes every finite value select a function. NaN has no nearest
integer, so it decodes to NO_FUNCTION: both the output and the indicator
group go dark rather than guessing.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::logic::{LogicFunction, NO_FUNCTION},
    engine::LogicSettings,
};

pub const NUM_PARAMS: usize = 6;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamId {
    InvertA = 0,
    InvertB = 1,
    FunctionAb1 = 2,
    FunctionAb2 = 3,
    Invert1 = 4,
    Invert2 = 5,
}

impl ParamId {
    pub const ALL: [ParamId; NUM_PARAMS] = [
        ParamId::InvertA,
        ParamId::InvertB,
        ParamId::FunctionAb1,
        ParamId::FunctionAb2,
        ParamId::Invert1,
        ParamId::Invert2,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn spec(self) -> &'static ParamSpec {
        &PARAMS[self.index()]
    }
}

/// Range, default and label of one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    /// Written values are rounded to integers.
    pub snap: bool,
}

impl ParamSpec {
    const fn switch(label: &'static str) -> Self {
        Self {
            label,
            min: 0.0,
            max: 1.0,
            default: 1.0,
            snap: true,
        }
    }

    const fn selector(label: &'static str) -> Self {
        Self {
            label,
            min: 0.0,
            max: 4.0,
            default: 2.0,
            snap: true,
        }
    }

    /// Bring a written value into range, snapping if the control snaps.
    /// NaN falls back to the default.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        let value = if self.snap { value.round() } else { value };
        value.clamp(self.min, self.max)
    }
}

pub const PARAMS: [ParamSpec; NUM_PARAMS] = [
    ParamSpec::switch("INV A"),
    ParamSpec::switch("INV B"),
    ParamSpec::selector("OP 1"),
    ParamSpec::selector("OP 2"),
    ParamSpec::switch("INV 1"),
    ParamSpec::switch("INV 2"),
];

pub fn default_params() -> [f32; NUM_PARAMS] {
    let mut params = [0.0; NUM_PARAMS];
    for (value, spec) in params.iter_mut().zip(PARAMS.iter()) {
        *value = spec.default;
    }
    params
}

/// Snap a continuous selector control to a function index.
#[inline]
pub fn selector_from_control(value: f32) -> i32 {
    if value.is_nan() {
        return NO_FUNCTION;
    }
    let max = (LogicFunction::COUNT - 1) as f32;
    value.round().clamp(0.0, max) as i32
}

/// Whether an inversion switch value means "invert".
#[inline]
pub fn switch_inverts(value: f32) -> bool {
    value < 0.5
}

impl LogicSettings {
    /// Decode the host's parameter values.
    pub fn from_params(params: &[f32; NUM_PARAMS]) -> Self {
        Self {
            selector_1: selector_from_control(params[ParamId::FunctionAb1.index()]),
            selector_2: selector_from_control(params[ParamId::FunctionAb2.index()]),
            invert_a: switch_inverts(params[ParamId::InvertA.index()]),
            invert_b: switch_inverts(params[ParamId::InvertB.index()]),
            invert_1: switch_inverts(params[ParamId::Invert1.index()]),
            invert_2: switch_inverts(params[ParamId::Invert2.index()]),
        }
    }
}
