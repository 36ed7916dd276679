//! Test patch - clocked gates into every input, plus a click monitor

use binary_g1::{
    dsp::gate,
    io::{ports::input_index, InputPort},
    BinaryModule, GATE_HIGH, GATE_LOW,
};

/// Square gate clock (50% duty).
pub struct GateClock {
    phase: f64,
    increment: f64,
}

impl GateClock {
    pub fn new(rate_hz: f64, sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            increment: rate_hz / sample_rate,
        }
    }

    pub fn next_voltage(&mut self) -> f32 {
        let voltage = if self.phase < 0.5 { GATE_HIGH } else { GATE_LOW };
        self.phase += self.increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        voltage
    }
}

/// Clocks patched into every jack of an `N` channel module.
///
/// Each channel runs its own A and B rates so the outputs drift through the
/// whole truth table. Every fourth channel starts with A unpatched and every
/// fifth with B unpatched, so the shared default inputs are audible.
pub struct TestPatch<const N: usize> {
    clocks_a: [GateClock; N],
    clocks_b: [GateClock; N],
    default_a: GateClock,
    default_b: GateClock,
}

impl<const N: usize> TestPatch<N> {
    pub fn new(sample_rate: f64) -> Self {
        Self {
            clocks_a: std::array::from_fn(|i| GateClock::new(1.0 + i as f64 * 0.25, sample_rate)),
            clocks_b: std::array::from_fn(|i| GateClock::new(0.75 + i as f64 * 0.4, sample_rate)),
            default_a: GateClock::new(0.5, sample_rate),
            default_b: GateClock::new(0.33, sample_rate),
        }
    }

    /// Plug the cables in.
    pub fn install(&self, module: &mut BinaryModule<N>) {
        module.set_default(InputPort::A, GATE_LOW);
        module.set_default(InputPort::B, GATE_LOW);

        for channel in 0..N {
            if channel % 4 != 3 {
                let _ = module.patch(InputPort::A, channel, GATE_LOW);
            }
            if channel % 5 != 4 {
                let _ = module.patch(InputPort::B, channel, GATE_LOW);
            }
        }
    }

    /// Advance every clock one frame and write the voltages onto the jacks.
    ///
    /// Only voltages are written; whether a jack is patched is left to the panel.
    pub fn drive(&mut self, module: &mut BinaryModule<N>) {
        for channel in 0..N {
            let a = self.clocks_a[channel].next_voltage();
            let b = self.clocks_b[channel].next_voltage();
            let _ = module.set_input_voltage(input_index(InputPort::A, channel), a);
            let _ = module.set_input_voltage(input_index(InputPort::B, channel), b);
        }

        module.set_default(InputPort::A, self.default_a.next_voltage());
        module.set_default(InputPort::B, self.default_b.next_voltage());
    }
}

/// Turns gate edges into short clicks for the speakers.
pub struct ClickMonitor {
    last: bool,
    level: f32,
    decay: f32,
}

impl ClickMonitor {
    pub fn new(sample_rate: f32) -> Self {
        // ~5ms decay
        let decay = (-1.0 / (0.005 * sample_rate)).exp();
        Self {
            last: false,
            level: 0.0,
            decay,
        }
    }

    pub fn next_sample(&mut self, voltage: f32) -> f32 {
        let high = gate::threshold(voltage);
        if high && !self.last {
            self.level = 0.3;
        } else if !high && self.last {
            self.level = -0.15;
        }
        self.last = high;

        let sample = self.level;
        self.level *= self.decay;
        sample
    }
}
