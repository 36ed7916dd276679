//! Bench - owns the audio stream and hands the module to the audio thread

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use binary_g1::{
    io::OutputPort,
    module::{BinaryG1, HostMessage},
    DEFAULT_CHANNELS, GATE_LOW,
};

use super::patch::{ClickMonitor, TestPatch};
use super::ui::{PanelSnapshot, UiApp};

/// Capacity of the UI → audio edit queue.
const MESSAGE_CAPACITY: usize = 256;
/// Capacity of the audio → UI snapshot queue.
const SNAPSHOT_CAPACITY: usize = 8;

/// Panel bench builder
pub struct Bench {
    monitor: usize,
    refresh_rate: f32,
}

impl Bench {
    pub fn new() -> Self {
        Self {
            monitor: 0,
            refresh_rate: 60.0,
        }
    }

    /// Channel whose OUT 1 is sent to the speakers
    pub fn monitor(mut self, channel: usize) -> Self {
        self.monitor = channel.min(DEFAULT_CHANNELS - 1);
        self
    }

    /// Panel snapshots per second
    pub fn refresh_rate(mut self, hz: f32) -> Self {
        self.refresh_rate = hz.max(1.0);
        self
    }

    /// Run the bench (plays audio, takes over the terminal until quit)
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        log::info!("Binary-G1 bench");
        log::info!("Sample rate: {} Hz", sample_rate);
        log::info!("Output channels: {}", channels);
        log::info!("Gate channels: {}", DEFAULT_CHANNELS);

        let (host_tx, mut host_rx) = RingBuffer::<HostMessage>::new(MESSAGE_CAPACITY);
        let (monitor_tx, mut monitor_rx) = RingBuffer::<usize>::new(MESSAGE_CAPACITY);
        let (mut state_tx, state_rx) = RingBuffer::<PanelSnapshot>::new(SNAPSHOT_CAPACITY);

        let mut module = BinaryG1::new();
        let mut patch = TestPatch::<DEFAULT_CHANNELS>::new(sample_rate as f64);
        patch.install(&mut module);
        module.process();
        let initial = PanelSnapshot::capture(&module, self.monitor);

        let mut click = ClickMonitor::new(sample_rate);
        let mut monitor = self.monitor;
        let snapshot_interval = (sample_rate / self.refresh_rate).max(1.0) as usize;
        let mut frames_since_snapshot = 0usize;

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                module.drain_messages(&mut host_rx);
                while let Ok(channel) = monitor_rx.pop() {
                    monitor = channel.min(DEFAULT_CHANNELS - 1);
                }

                for frame in data.chunks_mut(channels) {
                    patch.drive(&mut module);
                    module.process();

                    let gate = module
                        .output(OutputPort::Out1, monitor)
                        .unwrap_or(GATE_LOW);
                    let sample = click.next_sample(gate);
                    frame.fill(sample);

                    frames_since_snapshot += 1;
                    if frames_since_snapshot >= snapshot_interval {
                        frames_since_snapshot = 0;
                        // UI is behind; it will catch the next one
                        let _ = state_tx.push(PanelSnapshot::capture(&module, monitor));
                    }
                }
            },
            |err| log::error!("Audio error: {}", err),
            None,
        )?;

        stream.play().wrap_err("failed to start output stream")?;

        let mut terminal = ratatui::init();
        let result = UiApp::new(host_tx, monitor_tx, state_rx, initial).run(&mut terminal);
        ratatui::restore();

        result
    }
}

impl Default for Bench {
    fn default() -> Self {
        Self::new()
    }
}
