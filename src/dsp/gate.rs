//! Gate thresholding and level conversion primitives.

use crate::{GATE_HIGH, GATE_LOW, GATE_THRESHOLD};

/*
Gate Signals
============

A gate is a control signal that only carries two states: high or low. Modular
hosts carry gates on the same cables as audio, so a gate is just a voltage
that we agree to read as a boolean.

Vocabulary
----------

  gate        A voltage interpreted as on/off. Patch a clock, a sequencer
              trigger or a square LFO and it behaves as a gate.

  threshold   The voltage at which a gate input flips to high. Anything at or
              above 1.0 V counts as high, anything below as low.

  level       The voltage a gate output drives: 10.0 V when high, 0.0 V when
              low. This is the host's logic-level convention.


The Math
--------

    input:   high = (voltage >= 1.0)
    output:  voltage = high ? 10.0 : 0.0

  Voltage
   10.0 ┤      ┌──────┐          ┌──────┐
        │      │      │          │      │
    1.0 ┤─ ─ ─ ┼ ─ ─ ─┼─ ─ ─ ─ ─ ┼ ─ ─ ─┼─ ─  ← threshold
    0.0 ┼──────┘      └──────────┘      └────→ time
          low    high     low      high

There is no hysteresis. A signal that hovers around 1.0 V will chatter, the
same way it would on the hardware this models.


Edge Cases
----------

  NaN       Comparisons with NaN are false, so a NaN input reads as low.
  -∞ / +∞   Read as low / high respectively.
  Negative  Bipolar signals (e.g. a ±5 V LFO) are high only in the part of
            the cycle that clears the threshold.
*/

/// Read a voltage as a gate.
#[inline]
pub fn threshold(voltage: f32) -> bool {
    voltage >= GATE_THRESHOLD
}

/// Voltage a gate output drives for the given state.
#[inline]
pub fn level(high: bool) -> f32 {
    if high {
        GATE_HIGH
    } else {
        GATE_LOW
    }
}
