//! Host port records and the flat index layout.

/*
Port Layout
===========

Hosts address jacks through flat vectors. The module lays its jacks out in
banks of two, one bank per channel, with one extra input bank at the end
for the shared default inputs:

  inputs (N = 3)                      outputs (N = 3)

  index  bank  port                   index  bank  port
    0     0    A                        0     0    OUT 1
    1     0    B                        1     0    OUT 2
    2     1    A                        2     1    OUT 1
    3     1    B                        3     1    OUT 2
    4     2    A                        4     2    OUT 1
    5     2    B                        5     2    OUT 2
    6     3    A   ← default A
    7     3    B   ← default B

    input_index(port, bank)  = port + bank * 2
    output_index(port, bank) = port + bank * 2
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inputs per bank.
pub const INPUTS_PER_BANK: usize = 2;
/// Outputs per bank.
pub const OUTPUTS_PER_BANK: usize = 2;

/// A jack: the voltage on it and whether a cable is plugged in.
///
/// `connected` is never inferred from the voltage. An unpatched jack may
/// still hold a stale value from before the cable was pulled.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Port {
    pub voltage: f32,
    pub connected: bool,
}

impl Port {
    pub fn patched(voltage: f32) -> Self {
        Self {
            voltage,
            connected: true,
        }
    }

    pub fn unpatched() -> Self {
        Self::default()
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputPort {
    A = 0,
    B = 1,
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputPort {
    Out1 = 0,
    Out2 = 1,
}

#[inline]
pub const fn input_index(port: InputPort, bank: usize) -> usize {
    port as usize + bank * INPUTS_PER_BANK
}

#[inline]
pub const fn output_index(port: OutputPort, bank: usize) -> usize {
    port as usize + bank * OUTPUTS_PER_BANK
}

/// Number of input jacks for `channels` channels plus the default bank.
pub const fn input_count(channels: usize) -> usize {
    (channels + 1) * INPUTS_PER_BANK
}

pub const fn output_count(channels: usize) -> usize {
    channels * OUTPUTS_PER_BANK
}
