// Purpose: Host-facing module wrapping the gate logic engine
// Owns the flat param/port/light vectors a plugin host reads and writes

pub mod error;
pub mod message;
pub mod params;

use crate::{
    engine::{indicator::LIGHT_COUNT, GateLogicEngine, IndicatorState, LogicSettings},
    io::{
        ports::{input_count, input_index, output_count, output_index},
        ChannelInput, ChannelOutput, InputPort, OutputPort, Port, SharedDefaultInput,
    },
    DEFAULT_CHANNELS,
};

pub use error::PortError;
pub use message::{HostMessage, MessageReceiver};
pub use params::{ParamId, NUM_PARAMS};

/// The module at the panel's channel count.
pub type BinaryG1 = BinaryModule<DEFAULT_CHANNELS>;

/// Binary-G1 logic module with `N` gate channels.
///
/// Inputs hold `N + 1` banks of (A, B); the last bank is the shared default
/// pair. Outputs hold `N` banks of (OUT 1, OUT 2). All vectors are sized at
/// construction, so `process()` never allocates.
pub struct BinaryModule<const N: usize> {
    engine: GateLogicEngine,
    params: [f32; NUM_PARAMS],
    inputs: Vec<Port>,
    outputs: Vec<f32>,
    lights: [f32; LIGHT_COUNT],
    indicators: IndicatorState,
}

impl<const N: usize> BinaryModule<N> {
    pub fn new() -> Self {
        log::debug!(
            "Binary-G1: {} channels, {} inputs, {} outputs, {} lights",
            N,
            input_count(N),
            output_count(N),
            LIGHT_COUNT
        );

        Self {
            engine: GateLogicEngine::new(),
            params: params::default_params(),
            inputs: vec![Port::unpatched(); input_count(N)],
            outputs: vec![0.0; output_count(N)],
            lights: [0.0; LIGHT_COUNT],
            indicators: IndicatorState::default(),
        }
    }

    pub const fn channels(&self) -> usize {
        N
    }

    /// Run one frame: decode params, evaluate every channel, write outputs and lights.
    pub fn process(&mut self) {
        let settings = self.settings();
        let defaults = self.defaults();

        let mut channels = [ChannelInput::default(); N];
        for (bank, channel) in channels.iter_mut().enumerate() {
            channel.a = self.inputs[input_index(InputPort::A, bank)];
            channel.b = self.inputs[input_index(InputPort::B, bank)];
        }

        let mut results = [ChannelOutput::default(); N];
        self.indicators = self
            .engine
            .evaluate(&channels, defaults, &settings, &mut results);

        for (bank, result) in results.iter().enumerate() {
            self.outputs[output_index(OutputPort::Out1, bank)] = result.out1;
            self.outputs[output_index(OutputPort::Out2, bank)] = result.out2;
        }

        self.indicators.write_lights(&mut self.lights);
    }

    /// Apply pending host edits. Edits addressing missing jacks are dropped.
    ///
    /// Returns the number of edits applied.
    pub fn drain_messages<R: MessageReceiver>(&mut self, rx: &mut R) -> usize {
        let mut applied = 0;
        while let Some(msg) = rx.pop() {
            if self.apply(msg).is_ok() {
                applied += 1;
            }
        }
        applied
    }

    pub fn apply(&mut self, msg: HostMessage) -> Result<(), PortError> {
        match msg {
            HostMessage::SetParam { id, value } => {
                self.set_param(id, value);
                Ok(())
            }
            HostMessage::Connect { input } => self.connect(input),
            HostMessage::Disconnect { input } => self.disconnect(input),
            HostMessage::SetVoltage { input, voltage } => self.set_input_voltage(input, voltage),
            HostMessage::ResetParams => {
                self.reset_params();
                Ok(())
            }
        }
    }

    // === PARAMS ===

    pub fn param(&self, id: ParamId) -> f32 {
        self.params[id.index()]
    }

    pub fn params(&self) -> &[f32; NUM_PARAMS] {
        &self.params
    }

    /// Write a parameter, clamped to its range and snapped if it snaps.
    pub fn set_param(&mut self, id: ParamId, value: f32) {
        self.params[id.index()] = id.spec().clamp(value);
    }

    pub fn set_param_index(&mut self, index: usize, value: f32) -> Result<(), PortError> {
        let id = ParamId::from_index(index).ok_or(PortError::UnknownParam(index))?;
        self.set_param(id, value);
        Ok(())
    }

    pub fn reset_params(&mut self) {
        self.params = params::default_params();
    }

    /// Settings the next `process()` will run with.
    pub fn settings(&self) -> LogicSettings {
        LogicSettings::from_params(&self.params)
    }

    // === INPUTS ===

    pub fn input(&self, index: usize) -> Option<&Port> {
        self.inputs.get(index)
    }

    pub fn input_mut(&mut self, index: usize) -> Result<&mut Port, PortError> {
        let count = self.inputs.len();
        self.inputs
            .get_mut(index)
            .ok_or(PortError::InputOutOfRange { index, count })
    }

    /// Mark a flat input index as patched. Its voltage is left as is.
    pub fn connect(&mut self, input: usize) -> Result<(), PortError> {
        self.input_mut(input)?.connected = true;
        Ok(())
    }

    /// Mark a flat input index as unpatched. The last voltage stays on the jack.
    pub fn disconnect(&mut self, input: usize) -> Result<(), PortError> {
        self.input_mut(input)?.connected = false;
        Ok(())
    }

    /// Write the voltage on a flat input index without touching its connection.
    pub fn set_input_voltage(&mut self, input: usize, voltage: f32) -> Result<(), PortError> {
        self.input_mut(input)?.voltage = voltage;
        Ok(())
    }

    /// Plug a cable carrying `voltage` into a channel's input.
    pub fn patch(
        &mut self,
        port: InputPort,
        channel: usize,
        voltage: f32,
    ) -> Result<(), PortError> {
        Self::check_channel(channel)?;
        self.inputs[input_index(port, channel)] = Port::patched(voltage);
        Ok(())
    }

    /// Pull the cable from a channel's input. The last voltage stays on the jack.
    pub fn unpatch(&mut self, port: InputPort, channel: usize) -> Result<(), PortError> {
        Self::check_channel(channel)?;
        self.inputs[input_index(port, channel)].connected = false;
        Ok(())
    }

    /// Drive one of the shared default inputs.
    pub fn set_default(&mut self, port: InputPort, voltage: f32) {
        self.inputs[input_index(port, N)] = Port::patched(voltage);
    }

    pub fn defaults(&self) -> SharedDefaultInput {
        SharedDefaultInput::new(
            self.inputs[input_index(InputPort::A, N)].voltage,
            self.inputs[input_index(InputPort::B, N)].voltage,
        )
    }

    // === OUTPUTS & LIGHTS ===

    pub fn output(&self, port: OutputPort, channel: usize) -> Option<f32> {
        if channel >= N {
            return None;
        }
        self.outputs.get(output_index(port, channel)).copied()
    }

    pub fn channel_output(&self, channel: usize) -> Option<ChannelOutput> {
        Some(ChannelOutput {
            out1: self.output(OutputPort::Out1, channel)?,
            out2: self.output(OutputPort::Out2, channel)?,
        })
    }

    pub fn outputs(&self) -> &[f32] {
        &self.outputs
    }

    pub fn light(&self, index: usize) -> Option<f32> {
        self.lights.get(index).copied()
    }

    pub fn lights(&self) -> &[f32; LIGHT_COUNT] {
        &self.lights
    }

    /// Indicator state from the last `process()`.
    pub fn indicators(&self) -> IndicatorState {
        self.indicators
    }

    fn check_channel(channel: usize) -> Result<(), PortError> {
        if channel < N {
            Ok(())
        } else {
            Err(PortError::ChannelOutOfRange {
                channel,
                channels: N,
            })
        }
    }
}

impl<const N: usize> Default for BinaryModule<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    #[test]
    fn fresh_module_lights_and_outputs() {
        let mut module = BinaryModule::<4>::new();
        module.process();

        // Default: AND on both outputs, all inputs low
        assert!(module.outputs().iter().all(|&v| v == 0.0));
        assert_eq!(module.light(2), Some(1.0));
        assert_eq!(module.light(7), Some(1.0));
        assert_eq!(module.lights().iter().sum::<f32>(), 2.0);
    }

    #[test]
    fn end_to_end_through_ports() {
        let mut module = BinaryModule::<2>::new();
        module.set_param(ParamId::FunctionAb1, 2.0);
        module.set_param(ParamId::FunctionAb2, 4.0);
        module.patch(InputPort::A, 0, 5.0).unwrap();
        module.patch(InputPort::B, 0, 5.0).unwrap();
        module.patch(InputPort::B, 1, 0.0).unwrap();
        module.set_default(InputPort::A, 0.0);
        module.set_default(InputPort::B, 0.0);

        module.process();

        assert_eq!(
            module.channel_output(0),
            Some(ChannelOutput {
                out1: 10.0,
                out2: 0.0
            })
        );
        assert_eq!(
            module.channel_output(1),
            Some(ChannelOutput {
                out1: 0.0,
                out2: 0.0
            })
        );
        assert_eq!(module.indicators().lit(0), Some(2));
        assert_eq!(module.indicators().lit(1), Some(4));
    }

    #[test]
    fn switch_down_inverts() {
        let mut module = BinaryModule::<1>::new();
        module.set_param(ParamId::FunctionAb1, 0.0); // PassA
        module.set_param(ParamId::InvertA, 0.0);

        module.process();

        // A unpatched, default 0V, inverted to high
        assert_eq!(module.output(OutputPort::Out1, 0), Some(10.0));
    }

    #[test]
    fn unpatched_channel_follows_default_not_stale_voltage() {
        let mut module = BinaryModule::<1>::new();
        module.set_param(ParamId::FunctionAb1, 0.0);
        module.patch(InputPort::A, 0, 10.0).unwrap();
        module.unpatch(InputPort::A, 0).unwrap();

        module.process();
        assert_eq!(module.output(OutputPort::Out1, 0), Some(0.0));

        module.set_default(InputPort::A, 10.0);
        module.process();
        assert_eq!(module.output(OutputPort::Out1, 0), Some(10.0));
    }

    #[test]
    fn set_param_clamps_to_range() {
        let mut module = BinaryModule::<1>::new();
        module.set_param(ParamId::FunctionAb2, 12.0);
        assert_eq!(module.param(ParamId::FunctionAb2), 4.0);
        assert_eq!(module.settings().selector_2, 4);

        module.set_param(ParamId::FunctionAb2, 2.6);
        assert_eq!(module.param(ParamId::FunctionAb2), 3.0);
    }

    #[test]
    fn drain_applies_messages_and_drops_bad_ones() {
        let mut module = BinaryModule::<2>::new();
        let mut rx: VecDeque<HostMessage> = VecDeque::from(vec![
            HostMessage::SetParam {
                id: ParamId::FunctionAb1,
                value: 3.0,
            },
            HostMessage::SetVoltage {
                input: 0,
                voltage: 5.0,
            },
            HostMessage::Connect { input: 0 },
            HostMessage::Connect { input: 99 },
        ]);

        let applied = module.drain_messages(&mut rx);
        module.process();

        assert_eq!(applied, 3);
        assert!(rx.is_empty());
        // OR(A=high, B=default low)
        assert_eq!(module.output(OutputPort::Out1, 0), Some(10.0));
        assert_eq!(module.output(OutputPort::Out1, 1), Some(0.0));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut module = BinaryModule::<1>::new();
        module.set_param(ParamId::Invert1, 0.0);
        module.apply(HostMessage::ResetParams).unwrap();
        assert_eq!(module.params(), &params::default_params());
    }

    #[test]
    fn out_of_range_addresses_are_errors() {
        let mut module = BinaryModule::<2>::new();

        assert_eq!(
            module.patch(InputPort::A, 2, 1.0),
            Err(PortError::ChannelOutOfRange {
                channel: 2,
                channels: 2
            })
        );
        assert_eq!(
            module.set_param_index(6, 0.0),
            Err(PortError::UnknownParam(6))
        );
        assert!(module.input_mut(6).is_err());
        // The default bank is addressable through the flat layout
        assert!(module.input_mut(5).is_ok());
        assert_eq!(module.output(OutputPort::Out2, 2), None);
    }

    #[test]
    fn flat_index_connect_and_voltage() {
        let mut module = BinaryModule::<2>::new();
        module.set_param(ParamId::FunctionAb1, 0.0); // PassA
        let a1 = input_index(InputPort::A, 1);

        module.set_input_voltage(a1, 10.0).unwrap();
        module.process();
        // Voltage alone does not patch the jack
        assert_eq!(module.output(OutputPort::Out1, 1), Some(0.0));

        module.connect(a1).unwrap();
        module.process();
        assert_eq!(module.output(OutputPort::Out1, 1), Some(10.0));

        module.disconnect(a1).unwrap();
        module.process();
        assert_eq!(module.output(OutputPort::Out1, 1), Some(0.0));
        assert_eq!(module.input(a1).map(|port| port.voltage), Some(10.0));

        let count = input_count(2);
        assert_eq!(
            module.connect(count),
            Err(PortError::InputOutOfRange {
                index: count,
                count
            })
        );
        assert!(module.disconnect(count).is_err());
        assert!(module.set_input_voltage(count, 1.0).is_err());
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn drain_from_ring_buffer() {
        use rtrb::RingBuffer;

        let mut module = BinaryModule::<1>::new();
        let (mut tx, mut rx) = RingBuffer::<HostMessage>::new(4);
        let a0 = input_index(InputPort::A, 0);

        tx.push(HostMessage::SetParam {
            id: ParamId::FunctionAb1,
            value: 0.0,
        })
        .unwrap();
        tx.push(HostMessage::SetVoltage {
            input: a0,
            voltage: 10.0,
        })
        .unwrap();
        tx.push(HostMessage::Connect { input: a0 }).unwrap();

        let applied = module.drain_messages(&mut rx);
        module.process();

        assert_eq!(applied, 3);
        assert!(rx.is_empty());
        assert_eq!(module.output(OutputPort::Out1, 0), Some(10.0));
    }
}
