//! Main TUI application state and logic

use crate::interpreter::engine::Interpreter;
use crate::interpreter::errors::RuntimeError;
use crate::ui::panes::{self, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Grid,
    Output,
    Ips,
    Memory,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: grid -> output -> ips -> memory)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Grid => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Ips,
            FocusedPane::Ips => FocusedPane::Memory,
            FocusedPane::Memory => FocusedPane::Grid,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Grid => FocusedPane::Memory,
            FocusedPane::Output => FocusedPane::Grid,
            FocusedPane::Ips => FocusedPane::Output,
            FocusedPane::Memory => FocusedPane::Ips,
        }
    }
}

/// The main application state
pub struct App {
    /// The interpreter instance
    pub interpreter: Interpreter,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub grid_scroll: usize,
    pub memory_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Error that stopped the recorded run, if any
    pub recording_error: Option<String>,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app with the given interpreter
    pub fn new(interpreter: Interpreter) -> Self {
        let now = Instant::now();
        App {
            interpreter,
            focused_pane: FocusedPane::Grid,
            grid_scroll: 0,
            memory_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            recording_error: None,
            is_playing: false,
            last_play_time: now,
            last_space_press: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
        }
    }

    /// Show the error that ended recording in the status bar
    pub fn with_recording_error(mut self, error: &RuntimeError) -> Self {
        let message = error.to_string();
        self.status_message = message.clone();
        self.recording_error = Some(message);
        self
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_secs(1) {
                if self.interpreter.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.output_scroll = usize::MAX;
                } else {
                    // No more steps available
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
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

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Create layout: 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Grid (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: IPs (top) | Memory (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(columns[1]);

        let interpreter = &self.interpreter;

        panes::render_grid_pane(
            frame,
            left_rows[0],
            interpreter.grid(),
            interpreter.ips(),
            interpreter.active_ip(),
            self.focused_pane == FocusedPane::Grid,
            &mut self.grid_scroll,
        );

        panes::render_output_pane(
            frame,
            left_rows[1],
            interpreter.output(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        panes::render_ips_pane(
            frame,
            right_rows[0],
            interpreter.grid(),
            interpreter.ips(),
            interpreter.active_ip(),
            interpreter.tick(),
            self.focused_pane == FocusedPane::Ips,
        );

        panes::render_memory_pane(
            frame,
            right_rows[1],
            interpreter.memory(),
            self.focused_pane == FocusedPane::Memory,
            &mut self.memory_scroll,
        );

        panes::render_status_bar(
            frame,
            status_area,
            &StatusRenderData {
                message: &self.status_message,
                current_step: interpreter.history_position(),
                total_steps: interpreter.total_snapshots(),
                is_playing: self.is_playing,
                is_finished: interpreter.is_finished(),
                has_error: self.recording_error.is_some(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if self.interpreter.step_forward().is_ok() {
                        stepped += 1;
                    } else {
                        break;
                    }
                }
                self.status_message = format!("Stepped forward {} tick(s)", stepped);
                self.output_scroll = usize::MAX;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => {
                if let Some(scroll) = self.focused_scroll() {
                    *scroll = scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if let Some(scroll) = self.focused_scroll() {
                    *scroll = scroll.saturating_add(1);
                }
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        let now = Instant::now();
                        self.last_play_time =
                            now.checked_sub(Duration::from_secs(1)).unwrap_or(now);
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.status_message = match self.interpreter.jump_to_end() {
                    Ok(()) => "Jumped to end".to_string(),
                    Err(e) => e.to_string(),
                };
                self.output_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.status_message = match self.interpreter.rewind_to_start() {
                    Ok(()) => "Jumped to start".to_string(),
                    Err(e) => e.to_string(),
                };
                self.output_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    /// Scroll offset of the focused pane; the IP pane does not scroll
    fn focused_scroll(&mut self) -> Option<&mut usize> {
        match self.focused_pane {
            FocusedPane::Grid => Some(&mut self.grid_scroll),
            FocusedPane::Output => Some(&mut self.output_scroll),
            FocusedPane::Memory => Some(&mut self.memory_scroll),
            FocusedPane::Ips => None,
        }
    }

    /// Step forward in execution
    fn step_forward(&mut self) {
        match self.interpreter.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                // Auto-scroll output to bottom
                self.output_scroll = usize::MAX;
            }
            Err(RuntimeError::HistoryOperationFailed { message }) => {
                self.status_message = format!("Cannot step forward: {}", message);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }

    /// Step backward in execution
    fn step_backward(&mut self) {
        match self.interpreter.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                self.output_scroll = usize::MAX;
            }
            Err(RuntimeError::HistoryOperationFailed { message }) => {
                self.status_message = format!("Cannot step backward: {}", message);
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::io::Input;
    use crate::interpreter::trace::DebugLevel;
    use crossterm::event::KeyModifiers;

    fn app(source: &str) -> App {
        let interpreter = Interpreter::new(source, Input::empty(), DebugLevel::Off)
            .with_history(1 << 20)
            .unwrap();
        App::new(interpreter)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = FocusedPane::Grid;
        for _ in 0..4 {
            assert_eq!(focus.next().prev(), focus);
            focus = focus.next();
        }
        assert_eq!(focus, FocusedPane::Grid);
    }

    #[test]
    fn test_stepping_keys() {
        let mut app = app("H;i;@");

        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.interpreter.tick(), 4);
        assert_eq!(app.interpreter.output().bytes(), b"Hi");

        press(&mut app, KeyCode::Left);
        assert_eq!(app.interpreter.tick(), 3);
        assert_eq!(app.interpreter.output().bytes(), b"H");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.interpreter.tick(), 0);
        assert!(app.interpreter.output().is_empty());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.interpreter.tick(), 4);
        assert_eq!(app.status_message, "Jumped to end");

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_scroll_follows_focus() {
        let mut app = app("@");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.grid_scroll, 1);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Ips);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.memory_scroll, 0);
        assert_eq!(app.output_scroll, 0);
    }
}
