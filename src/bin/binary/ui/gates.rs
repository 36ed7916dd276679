//! Gate activity widget - one row per channel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{state::ChannelView, PanelSnapshot};

/// Render inputs and outputs for every channel
pub fn render_gates(frame: &mut Frame, area: Rect, state: &PanelSnapshot, selected: usize) {
    let block = Block::default().title(" Channels ").borders(Borders::ALL);

    let mut lines = Vec::with_capacity(state.channels.len() + 2);
    lines.push(Line::from(Span::styled(
        "  ch    IN A   IN B    OUT 1  OUT 2",
        Style::default().fg(Color::DarkGray),
    )));

    for (channel, view) in state.channels.iter().enumerate() {
        let monitored = channel == state.monitor;
        lines.push(channel_line(channel, view, channel == selected, monitored));
    }

    lines.push(Line::from(vec![
        Span::styled("  def   ", Style::default().fg(Color::DarkGray)),
        gate_span(state.default_a_high, true),
        gate_span(state.default_b_high, true),
    ]));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn channel_line(
    channel: usize,
    view: &ChannelView,
    selected: bool,
    monitored: bool,
) -> Line<'static> {
    let cursor = if selected { "▶" } else { " " };
    let speaker = if monitored { "♪" } else { " " };
    let label_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::styled(format!("{cursor} {channel:>2} {speaker}  "), label_style),
        gate_span(view.a_high, view.a_patched),
        gate_span(view.b_high, view.b_patched),
        Span::raw("  "),
        gate_span(view.out1_high, true),
        gate_span(view.out2_high, true),
    ])
}

/// Unpatched inputs are drawn dim: they show the default gate, not their own
fn gate_span(high: bool, patched: bool) -> Span<'static> {
    let symbol = if high { "■" } else { "□" };
    let color = match (high, patched) {
        (true, true) => Color::Green,
        (false, true) => Color::DarkGray,
        (true, false) => Color::Blue,
        (false, false) => Color::Black,
    };
    let text = if patched {
        format!("  {symbol}    ")
    } else {
        format!(" ({symbol})   ")
    };
    Span::styled(text, Style::default().fg(color))
}
