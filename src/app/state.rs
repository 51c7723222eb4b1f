//! Application state management
//!
//! Tracks which tab is showing, handles tab navigation, and turns keyboard
//! events into actions for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Tabs in the navigation bar, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    /// The voting card
    #[default]
    Home,
    Search,
    Add,
    Profile,
    Share,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Search, Tab::Add, Tab::Profile, Tab::Share];

    /// Route name shown in the tab bar
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Search => "Search",
            Tab::Add => "Add",
            Tab::Profile => "Profile",
            Tab::Share => "Share",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Swipe the card up (arrow up, k)
    Up,
    /// Swipe the card down (arrow down, j)
    Down,
    /// Tap the top option (1, a)
    TapA,
    /// Tap the bottom option (2, b)
    TapB,
    /// Go back (Esc, Backspace)
    Back,
    /// Next tab (Tab, arrow right, l)
    Next,
    /// Previous tab (Shift+Tab, arrow left, h)
    Previous,
    /// Jump straight to a tab (F1..F5)
    Jump(Tab),
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Navigation state manager
#[derive(Debug)]
pub struct StateManager {
    current_tab: Tab,
    previous_tab: Option<Tab>,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting on Home
    pub fn new() -> Self {
        Self {
            current_tab: Tab::Home,
            previous_tab: None,
            should_quit: false,
        }
    }

    pub fn current_tab(&self) -> Tab {
        self.current_tab
    }

    pub fn previous_tab(&self) -> Option<Tab> {
        self.previous_tab
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switch to a tab, remembering where we came from
    pub fn transition_to(&mut self, tab: Tab) {
        if tab != self.current_tab {
            self.previous_tab = Some(self.current_tab);
            self.current_tab = tab;
        }
    }

    /// Go back to the previous tab if there is one, otherwise Home
    pub fn go_back(&mut self) {
        self.current_tab = self.previous_tab.take().unwrap_or(Tab::Home);
    }

    /// Apply navigation. Card actions are left to the active screen.
    pub fn handle_navigation(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Quit => self.quit(),
            NavigationAction::Back => {
                if self.current_tab == Tab::Home && self.previous_tab.is_none() {
                    self.quit();
                } else {
                    self.go_back();
                }
            }
            NavigationAction::Next => self.transition_to(self.current_tab.next()),
            NavigationAction::Previous => self.transition_to(self.current_tab.previous()),
            NavigationAction::Jump(tab) => self.transition_to(tab),
            NavigationAction::Up
            | NavigationAction::Down
            | NavigationAction::TapA
            | NavigationAction::TapB
            | NavigationAction::None => {}
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Card keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Char('1') | KeyCode::Char('a') => NavigationAction::TapA,
            KeyCode::Char('2') | KeyCode::Char('b') => NavigationAction::TapB,

            // Tabs
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Next,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Previous,
            KeyCode::BackTab => NavigationAction::Previous,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }
            KeyCode::F(n @ 1..=5) => NavigationAction::Jump(Tab::ALL[usize::from(n) - 1]),

            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }

    /// Handle a keyboard event and update state accordingly
    pub fn handle_key_event(&mut self, key: KeyEvent) -> NavigationAction {
        let action = Self::key_to_navigation(key);
        self.handle_navigation(action);
        action
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}
