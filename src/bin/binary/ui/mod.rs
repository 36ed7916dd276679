//! TUI module for the bench
//!
//! Draws the module's front panel and turns key presses into host edits.

mod gates;
mod panel;
pub mod state;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::{Consumer, Producer};
use std::time::Duration;

use binary_g1::{
    dsp::logic::LogicFunction,
    io::{ports::input_index, InputPort},
    module::{params::selector_from_control, HostMessage, ParamId},
    DEFAULT_CHANNELS,
};

pub use state::PanelSnapshot;

use gates::render_gates;
use panel::render_panel;

const HELP: &str = " [Q] Quit  [A/B] Inv in  [1/2] Inv out  [ [ ] ] Op 1  [ { } ] Op 2  \
                     [C/V] Cable  [R] Reset";

/// UI application state
pub struct UiApp {
    /// Edits for the module on the audio thread
    host_tx: Producer<HostMessage>,
    /// Monitored channel selection
    monitor_tx: Producer<usize>,
    /// Panel snapshots from the audio thread
    state_rx: Consumer<PanelSnapshot>,
    /// Latest snapshot received
    current: PanelSnapshot,
    /// Channel the cursor is on
    selected: usize,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        host_tx: Producer<HostMessage>,
        monitor_tx: Producer<usize>,
        state_rx: Consumer<PanelSnapshot>,
        initial: PanelSnapshot,
    ) -> Self {
        Self {
            host_tx,
            monitor_tx,
            state_rx,
            selected: initial.monitor,
            current: initial,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_state();

            terminal.draw(|frame| self.render(frame))?;

            // Non-blocking, ~60fps
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Keep only the latest snapshot
    fn poll_state(&mut self) {
        while let Ok(snapshot) = self.state_rx.pop() {
            self.current = snapshot;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('a') => self.toggle_switch(ParamId::InvertA),
            KeyCode::Char('b') => self.toggle_switch(ParamId::InvertB),
            KeyCode::Char('1') => self.toggle_switch(ParamId::Invert1),
            KeyCode::Char('2') => self.toggle_switch(ParamId::Invert2),
            KeyCode::Char('[') => self.step_selector(ParamId::FunctionAb1, -1),
            KeyCode::Char(']') => self.step_selector(ParamId::FunctionAb1, 1),
            KeyCode::Char('{') => self.step_selector(ParamId::FunctionAb2, -1),
            KeyCode::Char('}') => self.step_selector(ParamId::FunctionAb2, 1),
            KeyCode::Char('c') => self.toggle_cable(InputPort::A),
            KeyCode::Char('v') => self.toggle_cable(InputPort::B),
            KeyCode::Char('r') => self.send(HostMessage::ResetParams),
            KeyCode::Up => self.select(self.selected.saturating_sub(1)),
            KeyCode::Down => self.select((self.selected + 1).min(DEFAULT_CHANNELS - 1)),
            _ => {}
        }
    }

    fn send(&mut self, msg: HostMessage) {
        // Queue full means the audio thread is stalled; drop the edit
        let _ = self.host_tx.push(msg);
    }

    fn toggle_switch(&mut self, id: ParamId) {
        let value = if self.current.param(id) < 0.5 { 1.0 } else { 0.0 };
        self.send(HostMessage::SetParam { id, value });
    }

    fn step_selector(&mut self, id: ParamId, step: i32) {
        let max = LogicFunction::COUNT as i32 - 1;
        let selector = selector_from_control(self.current.param(id)).max(0);
        let value = (selector + step).clamp(0, max) as f32;
        self.send(HostMessage::SetParam { id, value });
    }

    fn toggle_cable(&mut self, port: InputPort) {
        let view = self.current.channels[self.selected];
        let patched = match port {
            InputPort::A => view.a_patched,
            InputPort::B => view.b_patched,
        };
        let input = input_index(port, self.selected);
        let msg = if patched {
            HostMessage::Disconnect { input }
        } else {
            HostMessage::Connect { input }
        };
        self.send(msg);
    }

    fn select(&mut self, channel: usize) {
        self.selected = channel;
        let _ = self.monitor_tx.push(channel);
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(30)])
            .split(area);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(1)])
            .split(chunks[1]);

        render_panel(frame, chunks[0], &self.current);
        render_gates(frame, right[0], &self.current, self.selected);

        let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, right[1]);
    }
}
