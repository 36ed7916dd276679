//! Front panel widget - inversion switches, function selectors and lights

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use binary_g1::{
    dsp::logic::LogicFunction,
    engine::IndicatorState,
    module::{params::switch_inverts, ParamId},
};

use super::PanelSnapshot;

/// Render the panel controls
pub fn render_panel(frame: &mut Frame, area: Rect, state: &PanelSnapshot) {
    let block = Block::default().title(" BINARY-G1 ").borders(Borders::ALL);

    let mut lines = Vec::new();
    for (group, (input, op, output)) in [
        (ParamId::InvertA, ParamId::FunctionAb1, ParamId::Invert1),
        (ParamId::InvertB, ParamId::FunctionAb2, ParamId::Invert2),
    ]
    .into_iter()
    .enumerate()
    {
        lines.push(Line::from(vec![
            switch_span(state, input),
            Span::raw("    "),
            switch_span(state, output),
        ]));
        lines.push(Line::from(Span::styled(
            format!(" {}", op.spec().label),
            Style::default().fg(Color::Cyan),
        )));

        for function in LogicFunction::ALL {
            let index = IndicatorState::light_index(group, function.index());
            let lit = state.lights[index] > 0.5;
            let (dot, style) = if lit {
                ("●", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(Color::DarkGray))
            };
            lines.push(Line::from(vec![
                Span::styled(format!("   {dot} "), style),
                Span::styled(function.label(), style),
            ]));
        }
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn switch_span(state: &PanelSnapshot, id: ParamId) -> Span<'static> {
    let inverted = switch_inverts(state.param(id));
    let (marker, color) = if inverted {
        ("▼ inv", Color::Yellow)
    } else {
        ("▲    ", Color::DarkGray)
    };
    Span::styled(
        format!(" {:<6}{}", id.spec().label, marker),
        Style::default().fg(color),
    )
}
