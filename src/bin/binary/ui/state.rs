//! Panel snapshot sent from the audio thread
//!
//! Copy and fixed-size so it can be pushed from the audio callback without
//! allocating.

use binary_g1::{
    dsp::gate,
    engine::indicator::LIGHT_COUNT,
    io::{ports::input_index, ChannelInput, InputPort, OutputPort},
    module::{BinaryG1, ParamId, NUM_PARAMS},
    DEFAULT_CHANNELS,
};

/// What the panel shows for one channel
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChannelView {
    pub a_patched: bool,
    pub b_patched: bool,
    /// Input gates after default fallback, before inversion
    pub a_high: bool,
    pub b_high: bool,
    pub out1_high: bool,
    pub out2_high: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct PanelSnapshot {
    pub params: [f32; NUM_PARAMS],
    pub lights: [f32; LIGHT_COUNT],
    pub channels: [ChannelView; DEFAULT_CHANNELS],
    pub default_a_high: bool,
    pub default_b_high: bool,
    pub monitor: usize,
}

impl PanelSnapshot {
    pub fn capture(module: &BinaryG1, monitor: usize) -> Self {
        let defaults = module.defaults();
        let mut channels = [ChannelView::default(); DEFAULT_CHANNELS];

        for (channel, view) in channels.iter_mut().enumerate() {
            let a = module
                .input(input_index(InputPort::A, channel))
                .copied()
                .unwrap_or_default();
            let b = module
                .input(input_index(InputPort::B, channel))
                .copied()
                .unwrap_or_default();
            let (a_high, b_high) = ChannelInput::new(a, b).gates(&defaults);
            let out = module.channel_output(channel).unwrap_or_default();

            *view = ChannelView {
                a_patched: a.connected,
                b_patched: b.connected,
                a_high,
                b_high,
                out1_high: out.is_high(OutputPort::Out1),
                out2_high: out.is_high(OutputPort::Out2),
            };
        }

        Self {
            params: *module.params(),
            lights: *module.lights(),
            channels,
            default_a_high: gate::threshold(defaults.a_voltage),
            default_b_high: gate::threshold(defaults.b_voltage),
            monitor,
        }
    }

    pub fn param(&self, id: ParamId) -> f32 {
        self.params[id.index()]
    }
}
