//! Algorithm reference pane

use crate::algorithms::AlgorithmInfo;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_info_pane(frame: &mut Frame, area: Rect, info: &AlgorithmInfo) {
    let block = Block::default()
        .title(format!(" {} ", info.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let heading = Style::default()
        .fg(DEFAULT_THEME.heading)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.secondary);
    let text = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![
        Line::from(Span::styled("Time complexity", heading)),
        Line::from(vec![
            Span::styled("  best    ", label),
            Span::styled(info.time.best, value),
        ]),
        Line::from(vec![
            Span::styled("  average ", label),
            Span::styled(info.time.average, value),
        ]),
        Line::from(vec![
            Span::styled("  worst   ", label),
            Span::styled(info.time.worst, value),
        ]),
        Line::from(vec![
            Span::styled("Space ", heading),
            Span::styled(info.space, value),
        ]),
        Line::default(),
        Line::from(Span::styled(info.description, text)),
        Line::default(),
        Line::from(Span::styled("Use cases", heading)),
    ];
    lines.extend(
        info.use_cases
            .iter()
            .map(|case| Line::from(Span::styled(format!("• {}", case), text))),
    );

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
