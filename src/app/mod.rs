//! TUI application module
//!
//! Contains the terminal user interface components, the tab navigation
//! shell, and the screens it routes to.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::{settle, App, Screens};
pub use screens::{PlaceholderScreen, VoteScreen};
pub use state::{NavigationAction, StateManager, Tab};
pub use tui::{Tui, TuiEvent};
