//! Bar chart of the current snapshot
//!
//! One bar per element, height proportional to its value and colored by its
//! label, with a legend row underneath.

use crate::model::State;
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Width of each bar and gap between bars that fit `count` bars into `width`
/// columns. Gaps are dropped first when space runs out.
pub fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    if count == 0 {
        return (1, 0);
    }
    let count = count as u16;
    let gap = if count.saturating_mul(2) <= width { 1 } else { 0 };
    let usable = width.saturating_sub(gap * count.saturating_sub(1));
    ((usable / count).max(1), gap)
}

pub fn render_bars_pane(frame: &mut Frame, area: Rect, snapshot: Option<&Snapshot>, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    match snapshot {
        Some(snapshot) if !snapshot.is_empty() => {
            let (bar_width, bar_gap) = bar_geometry(rows[0].width, snapshot.len());
            // Value labels only when every digit fits inside the bar
            let show_values = bar_width >= 3;

            let bars: Vec<Bar> = snapshot
                .elements()
                .iter()
                .map(|element| {
                    let color = DEFAULT_THEME.state_color(element.label);
                    let text = if show_values {
                        element.value.to_string()
                    } else {
                        String::new()
                    };
                    Bar::default()
                        .value(u64::from(element.value))
                        .text_value(text)
                        .style(Style::default().fg(color))
                        .value_style(Style::default().fg(Color::Black).bg(color))
                })
                .collect();

            let chart = BarChart::default()
                .data(BarGroup::default().bars(&bars))
                .bar_width(bar_width)
                .bar_gap(bar_gap)
                .max(u64::from(snapshot.max_value().max(1)));
            frame.render_widget(chart, rows[0]);
        }
        _ => {
            let paragraph = Paragraph::new("(empty array)")
                .style(Style::default().fg(DEFAULT_THEME.comment))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, rows[0]);
        }
    }

    frame.render_widget(
        Paragraph::new(legend_line()).alignment(Alignment::Center),
        rows[1],
    );
}

fn legend_line() -> Line<'static> {
    let mut spans = Vec::new();
    for state in State::ALL {
        spans.push(Span::styled(
            "■ ",
            Style::default().fg(DEFAULT_THEME.state_color(state)),
        ));
        spans.push(Span::styled(
            format!("{}   ", state.name()),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_with_room_for_gaps() {
        // 10 bars in 40 columns: 9 gaps, 31 left, 3 each
        assert_eq!(bar_geometry(40, 10), (3, 1));
    }

    #[test]
    fn test_geometry_drops_gaps_when_tight() {
        assert_eq!(bar_geometry(150, 100), (1, 0));
        assert_eq!(bar_geometry(50, 100), (1, 0));
    }

    #[test]
    fn test_geometry_empty() {
        assert_eq!(bar_geometry(80, 0), (1, 0));
    }
}
