use crate::model::State;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub warning: Color,   // Yellow
    pub accent: Color,    // Mauve
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub heading: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    warning: Color::Rgb(249, 226, 175),
    accent: Color::Rgb(203, 166, 247),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for bars
    heading: Color::Rgb(148, 226, 213),        // Teal for section headings
};

impl Theme {
    /// Bar color for an element label
    pub fn state_color(&self, state: State) -> Color {
        match state {
            State::Default => self.primary,
            State::Comparing => self.warning,
            State::Sorted => self.success,
            State::Pivot => self.error,
            State::Current => self.accent,
        }
    }
}
