//! Main TUI application state and logic

use crate::calculator::{Action, Session};
use crate::config::AppConfig;
use crate::keypad::{self, slots, KeyBindings, Slot};
use crate::ui::animation::ColorCycle;
use crate::ui::panes::{self, KeypadRenderData};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Upper bound on how long the loop blocks waiting for input
const MAX_POLL: Duration = Duration::from_millis(50);

/// The main application state
pub struct App {
    /// The calculator session
    pub session: Session,

    /// Key to keypad position table
    pub bindings: KeyBindings,

    /// Keypad button under the keyboard cursor
    pub cursor: Slot,

    /// Decorative keypad colors, independent of the session
    pub colors: ColorCycle,

    /// Button areas from the last frame, for mouse hit testing
    pub button_areas: Vec<(Rect, Slot)>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app from the startup configuration
    pub fn new(config: &AppConfig) -> Self {
        App {
            session: Session::with_degree_mode(config.degree_mode),
            bindings: KeyBindings::new(),
            cursor: slots::EQUALS,
            colors: ColorCycle::new(config.tick_interval, config.color_cycle),
            button_areas: Vec::new(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(
            tick_ms = self.colors.interval().as_millis() as u64,
            degrees = self.session.degree_mode,
            "calculator started"
        );

        // Redraw only after input (including resizes) or a color tick
        let mut needs_redraw = true;

        loop {
            if needs_redraw {
                terminal.draw(|f| self.render(f))?;
                needs_redraw = false;
            }

            if self.should_quit {
                break;
            }

            // Wait for input, but never past the next color tick
            let timeout = self.colors.until_next(Instant::now()).min(MAX_POLL);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
                needs_redraw = true;
            }

            if self.tick(Instant::now()) {
                needs_redraw = true;
            }
        }

        info!("calculator stopped");
        Ok(())
    }

    /// Advance the keypad colors to `now`; returns whether they changed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.colors.advance(now)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        frame.render_widget(
            Block::default().style(Style::default().bg(DEFAULT_THEME.bg)),
            size,
        );

        // Display on top, keypad in the middle, status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(6),
                Constraint::Length(1),
            ])
            .split(size);

        panes::render_display_pane(frame, chunks[0], &self.session);

        self.button_areas = panes::render_keypad_pane(
            frame,
            chunks[1],
            &KeypadRenderData {
                shift: self.session.shift_active,
                cursor: self.cursor,
                color_seed: self.colors.seed(),
            },
        );

        panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.session.shift_active,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            // Other chords are not calculator keys
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => self.press_slot(self.cursor),
            KeyCode::Char(c) => {
                if let Some(slot) = self.bindings.slot(c) {
                    self.press_slot(slot);
                }
            }
            KeyCode::Enter => self.press_slot(slots::EQUALS),
            KeyCode::Backspace => self.press_slot(slots::CLEAR_ENTRY),
            KeyCode::Esc | KeyCode::Delete => self.press_slot(slots::CLEAR_ALL),
            KeyCode::Tab | KeyCode::BackTab => self.press_slot(slots::SHIFT),
            KeyCode::Up => self.cursor = self.cursor.offset(-1, 0),
            KeyCode::Down => self.cursor = self.cursor.offset(1, 0),
            KeyCode::Left => self.cursor = self.cursor.offset(0, -1),
            KeyCode::Right => self.cursor = self.cursor.offset(0, 1),
            _ => {}
        }
    }

    /// Handle mouse events; a left click presses the button under it
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);
        let hit = self
            .button_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, slot)| *slot);

        if let Some(slot) = hit {
            self.cursor = slot;
            self.press_slot(slot);
        }
    }

    /// Press the button at `slot` as it is currently labelled
    fn press_slot(&mut self, slot: Slot) {
        if let Some(action) = keypad::action_at(slot, self.session.shift_active) {
            self.press(action);
        }
    }

    /// Apply an action to the session
    pub fn press(&mut self, action: Action) {
        let session = std::mem::take(&mut self.session);
        self.session = session.apply(action);

        debug!(
            %action,
            display = %self.session.display,
            pending = ?self.session.pending_operator,
            memory = ?self.session.memory,
            "button pressed"
        );
        self.status_message = format!("Pressed {}", action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_keys(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_enter() {
        let mut app = App::new(&AppConfig::default());
        type_keys(&mut app, "12*3");
        app.handle_key_event(key(KeyCode::Enter));
        assert_eq!(app.session.display, "36");
        assert_eq!(app.status_message, "Pressed =");
    }

    #[test]
    fn test_cursor_press() {
        let mut app = App::new(&AppConfig::default());
        // From "=" up twice to "×", then left twice to "÷"
        app.handle_key_event(key(KeyCode::Up));
        app.handle_key_event(key(KeyCode::Up));
        app.handle_key_event(key(KeyCode::Left));
        app.handle_key_event(key(KeyCode::Left));
        assert_eq!(app.cursor, Slot::new(3, 3));

        type_keys(&mut app, "8");
        app.handle_key_event(key(KeyCode::Char(' ')));
        type_keys(&mut app, "2=");
        assert_eq!(app.session.display, "4");
    }

    #[test]
    fn test_tab_shift_and_clear_keys() {
        let mut app = App::new(&AppConfig::default());
        app.handle_key_event(key(KeyCode::Tab));
        assert!(app.session.shift_active);

        type_keys(&mut app, "3");
        app.handle_key_event(key(KeyCode::Backspace));
        assert_eq!(app.session.display, "0");

        type_keys(&mut app, "5+");
        app.handle_key_event(key(KeyCode::Esc));
        assert_eq!(app.session.pending_operator, None);
    }

    #[test]
    fn test_mouse_click_presses_button() {
        let mut app = App::new(&AppConfig::default());
        app.button_areas = vec![
            (Rect::new(0, 0, 5, 3), Slot::new(5, 0)),
            (Rect::new(5, 0, 5, 3), Slot::new(5, 1)),
        ];

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse_event(click);

        assert_eq!(app.session.display, "2");
        assert_eq!(app.cursor, Slot::new(5, 1));
    }

    #[test]
    fn test_control_and_alt_chords_are_ignored() {
        let mut app = App::new(&AppConfig::default());
        type_keys(&mut app, "30");

        app.handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('5'), KeyModifiers::ALT));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT));

        assert_eq!(app.session.display, "30");
        assert_eq!(app.status_message, "Pressed 0");
        assert!(!app.should_quit);

        // Shifted characters still count as plain keys
        app.handle_key_event(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));
        assert_eq!(app.session.memory, Some(30.0));
    }

    #[test]
    fn test_tick_reports_color_change() {
        let mut app = App::new(&AppConfig {
            tick_interval: Duration::from_millis(100),
            ..AppConfig::default()
        });
        let later = Instant::now() + Duration::from_millis(250);
        assert!(app.tick(later));
        assert!(app.colors.seed() >= 2);
        assert!(!app.tick(later));

        let mut still = App::new(&AppConfig {
            color_cycle: false,
            ..AppConfig::default()
        });
        assert!(!still.tick(Instant::now() + Duration::from_secs(1)));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&AppConfig::default());
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = App::new(&AppConfig::default());
        type_keys(&mut app, "q");
        assert!(app.should_quit);
    }
}
