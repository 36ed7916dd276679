// Purpose - per-channel gate records and the host port layout

pub mod ports;

pub use ports::{InputPort, OutputPort, Port};

use crate::dsp::gate;

/// One channel's pair of gate inputs as the host sees them.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ChannelInput {
    pub a: Port,
    pub b: Port,
}

impl ChannelInput {
    pub fn new(a: Port, b: Port) -> Self {
        Self { a, b }
    }

    /// Gate states after falling back to the shared defaults, before inversion.
    #[inline]
    pub fn gates(&self, defaults: &SharedDefaultInput) -> (bool, bool) {
        let a = if self.a.connected {
            self.a.voltage
        } else {
            defaults.a_voltage
        };
        let b = if self.b.connected {
            self.b.voltage
        } else {
            defaults.b_voltage
        };
        (gate::threshold(a), gate::threshold(b))
    }
}

/// One channel's pair of gate output voltages.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ChannelOutput {
    pub out1: f32,
    pub out2: f32,
}

impl ChannelOutput {
    #[inline]
    pub fn from_gates(out1: bool, out2: bool) -> Self {
        Self {
            out1: gate::level(out1),
            out2: gate::level(out2),
        }
    }

    pub fn is_high(&self, port: OutputPort) -> bool {
        match port {
            OutputPort::Out1 => gate::threshold(self.out1),
            OutputPort::Out2 => gate::threshold(self.out2),
        }
    }
}

/// Fallback voltages for any channel whose own input is unpatched.
///
/// The default bank is always read, whether or not a cable is plugged into
/// it: an unpatched default jack simply reads its (zero) voltage.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SharedDefaultInput {
    pub a_voltage: f32,
    pub b_voltage: f32,
}

impl SharedDefaultInput {
    pub fn new(a_voltage: f32, b_voltage: f32) -> Self {
        Self {
            a_voltage,
            b_voltage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patched_inputs_ignore_defaults() {
        let input = ChannelInput::new(Port::patched(5.0), Port::patched(0.0));
        let defaults = SharedDefaultInput::new(0.0, 10.0);

        assert_eq!(input.gates(&defaults), (true, false));
    }

    #[test]
    fn unpatched_inputs_use_defaults_not_stale_voltage() {
        // Stale 10V left on both jacks after the cables were pulled
        let input = ChannelInput {
            a: Port {
                voltage: 10.0,
                connected: false,
            },
            b: Port {
                voltage: 10.0,
                connected: false,
            },
        };

        assert_eq!(input.gates(&SharedDefaultInput::new(0.0, 0.0)), (false, false));
        assert_eq!(input.gates(&SharedDefaultInput::new(5.0, 0.0)), (true, false));
    }

    #[test]
    fn output_levels() {
        let out = ChannelOutput::from_gates(true, false);

        assert_eq!(out.out1, 10.0);
        assert_eq!(out.out2, 0.0);
        assert!(out.is_high(OutputPort::Out1));
        assert!(!out.is_high(OutputPort::Out2));
    }
}
