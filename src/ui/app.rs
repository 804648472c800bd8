//! Main TUI application state and logic

use crate::algorithms::Algorithm;
use crate::config::{clamp_size, Config, Speed, ADJUST_STEP};
use crate::model::{ArrayGenerator, Element};
use crate::playback::{Playback, PlaybackError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// Algorithm whose trace is being played
    pub algorithm: Algorithm,

    /// Input array the current trace was recorded from
    pub input: Vec<Element>,

    /// Cursor over the recorded trace
    pub playback: Playback,

    /// Source of new random arrays
    generator: ArrayGenerator,

    /// Size used when shuffling
    pub size: usize,

    /// Auto-play cadence
    pub speed: Speed,

    /// Whether the algorithm info pane is visible
    pub show_info: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app for `input`, recording the first trace immediately
    pub fn new(config: &Config, generator: ArrayGenerator, input: Vec<Element>) -> Self {
        let playback = Playback::new(config.algorithm.trace(&input));
        App {
            algorithm: config.algorithm,
            size: clamp_size(input.len()),
            input,
            playback,
            generator,
            speed: config.speed,
            show_info: true,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= self.speed.delay() {
                self.tick();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance one auto-play step
    fn tick(&mut self) {
        if self.playback.step_forward().is_ok() {
            self.status_message = "Playing...".to_string();
        } else {
            self.is_playing = false;
            self.status_message = "Sorting complete!".to_string();
        }
        self.last_play_time = Instant::now();
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Content on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let content_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = if self.show_info {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
                .split(content_area)
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(100)])
                .split(content_area)
        };

        // Left column: Bars (top) | Caption (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(columns[0]);

        let step = self.playback.current();

        super::panes::render_bars_pane(
            frame,
            left_rows[0],
            step.map(|s| &s.snapshot),
            self.algorithm.name(),
        );

        super::panes::render_caption_pane(
            frame,
            left_rows[1],
            step.map(|s| s.description.as_str()),
        );

        if self.show_info {
            super::panes::render_info_pane(frame, columns[1], &self.algorithm.info());
        }

        super::panes::render_status_bar(
            frame,
            status_area,
            &super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: self.playback.position(),
                total_steps: self.playback.total_steps(),
                is_playing: self.is_playing,
                speed: self.speed,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = self.playback.advance(n);
                self.status_message = format!("Stepped forward {} step(s)", stepped);
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Tab => {
                self.select_algorithm(self.algorithm.next());
            }
            KeyCode::BackTab => {
                self.select_algorithm(self.algorithm.prev());
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.shuffle();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.speed = self.speed.faster();
                self.status_message = format!("Speed {}", self.speed.get());
            }
            KeyCode::Char('-') => {
                self.speed = self.speed.slower();
                self.status_message = format!("Speed {}", self.speed.get());
            }
            KeyCode::Char(']') => {
                self.resize(clamp_size(self.size.saturating_add(ADJUST_STEP)));
            }
            KeyCode::Char('[') => {
                self.resize(clamp_size(self.size.saturating_sub(ADJUST_STEP)));
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.show_info = !self.show_info;
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.playback.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.playback.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if !self.is_playing && self.playback.is_at_end() {
            // Replay from the beginning once the trace has finished
            self.playback.rewind_to_start();
        }
        self.is_playing = !self.is_playing;
        if self.is_playing {
            self.last_play_time = Instant::now()
                .checked_sub(self.speed.delay())
                .unwrap_or(Instant::now());
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Paused".to_string();
        }
    }

    /// Step forward in the trace
    fn step_forward(&mut self) {
        match self.playback.step_forward() {
            Ok(()) => self.status_message = "Stepped forward".to_string(),
            Err(e) => self.status_message = format!("Cannot step forward: {}", e),
        }
    }

    /// Step backward in the trace
    fn step_backward(&mut self) {
        match self.playback.step_backward() {
            Ok(()) => self.status_message = "Stepped backward".to_string(),
            Err(PlaybackError::AtStart) => {
                self.status_message = "Already at the first step".to_string()
            }
            Err(e) => self.status_message = format!("Cannot step backward: {}", e),
        }
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.rebuild_trace();
        tracing::info!(algorithm = algorithm.name(), "algorithm selected");
        self.status_message = format!("Selected {}", algorithm);
    }

    fn shuffle(&mut self) {
        self.input = self.generator.generate(self.size);
        self.rebuild_trace();
        tracing::info!(size = self.size, "new random array");
        self.status_message = format!("New random array of {} elements", self.size);
    }

    fn resize(&mut self, size: usize) {
        self.size = size;
        self.shuffle();
    }

    /// Record a fresh trace for the current algorithm and input, rewound
    fn rebuild_trace(&mut self) {
        self.is_playing = false;
        self.playback = Playback::new(self.algorithm.trace(&self.input));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Mode, DEFAULT_ARRAY_SIZE};
    use crate::model::from_values;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn config() -> Config {
        Config {
            algorithm: Algorithm::Bubble,
            size: DEFAULT_ARRAY_SIZE,
            speed: Speed::default(),
            seed: Some(1),
            values: None,
            mode: Mode::Tui,
            log_level: tracing::Level::WARN,
            log_file: None,
        }
    }

    fn app() -> App {
        App::new(&config(), ArrayGenerator::new(1), from_values(&[3, 1, 2]))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_arrow_keys_step() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.playback.position(), 2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.playback.position(), 1);
    }

    #[test]
    fn test_digit_steps_n() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.playback.position(), 4);
        assert_eq!(app.status_message, "Stepped forward 4 step(s)");
    }

    #[test]
    fn test_tab_switches_algorithm_and_rewinds() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.playback.is_at_end());
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.algorithm, Algorithm::Insertion);
        assert!(app.playback.is_at_start());
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.algorithm, Algorithm::Bubble);
    }

    #[test]
    fn test_resize_regenerates_input() {
        let mut app = app();
        assert_eq!(app.size, 10);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.size, 20);
        assert_eq!(app.input.len(), 20);
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.input.len(), 10);
    }

    #[test]
    fn test_space_toggles_play() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.is_playing);
        app.tick();
        assert_eq!(app.playback.position(), 1);
    }

    #[test]
    fn test_play_stops_at_end() {
        let mut app = app();
        app.playback.jump_to_end();
        app.is_playing = true;
        app.tick();
        assert!(!app.is_playing);
        assert_eq!(app.status_message, "Sorting complete!");
    }

    #[test]
    fn test_render_smoke() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        press(&mut app, KeyCode::Char('i'));
        terminal.draw(|f| app.render(f)).unwrap();
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
