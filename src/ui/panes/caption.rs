//! Caption pane showing the current step's description

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_caption_pane(frame: &mut Frame, area: Rect, description: Option<&str>) {
    let block = Block::default()
        .title(" Step ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let paragraph = match description {
        Some(text) => Paragraph::new(text.to_string()).style(Style::default().fg(DEFAULT_THEME.fg)),
        None => Paragraph::new("(no steps)").style(Style::default().fg(DEFAULT_THEME.comment)),
    };

    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: true }), area);
}
