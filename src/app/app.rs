//! Main application controller
//!
//! Manages the TUI, navigation state, and the draw/input loop.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use tracing::{debug, info, warn};

use crate::{
    app::{
        screens::{nav, PlaceholderScreen, VoteScreen},
        state::{StateManager, Tab},
        tui::{Tui, TuiEvent},
    },
    config::AppConfig,
    PondusError, Result,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Navigation state
    state_manager: StateManager,
    /// Route table
    screens: Screens,
}

/// Screen renderers keyed by tab
#[derive(Debug)]
pub struct Screens {
    pub vote: VoteScreen,
    pub search: PlaceholderScreen,
    pub add: PlaceholderScreen,
    pub profile: PlaceholderScreen,
    pub share: PlaceholderScreen,
}

impl Screens {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            vote: VoteScreen::new(config),
            search: PlaceholderScreen::new(Tab::Search, &config.user),
            add: PlaceholderScreen::new(Tab::Add, &config.user),
            profile: PlaceholderScreen::new(Tab::Profile, &config.user),
            share: PlaceholderScreen::new(Tab::Share, &config.user),
        }
    }

    /// Draw the whole frame for the given tab
    pub fn render(&mut self, f: &mut Frame, current: Tab) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(10),   // Screen
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        nav::render_tab_bar(f, chunks[0], current);

        match current {
            Tab::Home => self.vote.render(f, chunks[1]),
            Tab::Search => self.search.render(f, chunks[1]),
            Tab::Add => self.add.render(f, chunks[1]),
            Tab::Profile => self.profile.render(f, chunks[1]),
            Tab::Share => self.share.render(f, chunks[1]),
        }

        nav::render_help(f, chunks[2], current);
    }
}

/// Outcome of a session once the terminal has been restored.
///
/// A failed run wins over a failed restore; the restore error is only logged then.
pub fn settle(run: Result<()>, restore: Result<()>) -> Result<()> {
    match (run, restore) {
        (Err(e), Err(restore_err)) => {
            warn!(error = %restore_err, "terminal restore failed");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restore) => restore,
    }
}

impl App {
    /// Create a new application instance
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            tui: Tui::new(config.tick_rate())?,
            state_manager: StateManager::new(),
            screens: Screens::new(config),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| PondusError::Tui(format!("Failed to initialize terminal: {}", e)))
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        info!("tui started");
        while !self.state_manager.should_quit() {
            if self.screens.vote.sync() {
                debug!(state = ?self.screens.vote.snapshot(), "card updated");
            }
            self.draw()?;
            self.handle_events()?;
            tokio::task::yield_now().await;
        }
        info!("tui stopped");
        Ok(())
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui
            .restore()
            .map_err(|e| PondusError::Tui(format!("Failed to restore terminal: {}", e)))
    }

    fn draw(&mut self) -> Result<()> {
        let current = self.state_manager.current_tab();
        let screens = &mut self.screens;
        self.tui
            .draw(|f| screens.render(f, current))
            .map_err(|e| PondusError::Tui(format!("Failed to draw: {}", e)))
    }

    /// Handle input and update state
    fn handle_events(&mut self) -> Result<()> {
        match self.tui.next_event()? {
            Some(TuiEvent::Key(key)) => {
                let action = self.state_manager.handle_key_event(key);
                if self.state_manager.current_tab() == Tab::Home {
                    self.screens.vote.handle_action(action);
                }
            }
            Some(TuiEvent::Mouse(mouse)) => {
                if self.state_manager.current_tab() == Tab::Home {
                    self.screens.vote.handle_mouse(mouse);
                }
            }
            None => {}
        }
        Ok(())
    }
}
