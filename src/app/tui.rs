//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management,
//! and keyboard/mouse event polling for the TUI application.

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseEvent,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

/// Input the application cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
}

/// Keep only key presses and mouse events; drop releases, repeats and the rest
pub fn filter_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(TuiEvent::Key(key)),
        Event::Mouse(mouse) => Some(TuiEvent::Mouse(mouse)),
        _ => None,
    }
}

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    last_tick: Instant,
    tick_rate: Duration,
    active: bool,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            last_tick: Instant::now(),
            tick_rate,
            active: false,
        })
    }

    /// Enter raw mode and the alternate screen, with mouse capture for swipes
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        self.active = true;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to one tick for input
    pub fn next_event(&mut self) -> io::Result<Option<TuiEvent>> {
        let timeout = self
            .tick_rate
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Some(ev) = filter_event(event::read()?) {
                return Ok(Some(ev));
            }
        }

        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
        }

        Ok(None)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseButton, MouseEventKind};

    #[test]
    fn test_filter_keeps_key_press() {
        let press = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(filter_event(Event::Key(press)), Some(TuiEvent::Key(press)));
    }

    #[test]
    fn test_filter_drops_key_release() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(filter_event(Event::Key(release)), None);
    }

    #[test]
    fn test_filter_keeps_mouse_and_drops_resize() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(filter_event(Event::Mouse(mouse)), Some(TuiEvent::Mouse(mouse)));
        assert_eq!(filter_event(Event::Resize(80, 24)), None);
        assert_eq!(filter_event(Event::FocusGained), None);
    }
}
