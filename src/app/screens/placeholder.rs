//! Placeholder screens for the tabs that have no card of their own

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::state::Tab;

/// Thin screen that names its route and points at the matching command
#[derive(Debug, Clone)]
pub struct PlaceholderScreen {
    tab: Tab,
    detail: String,
}

impl PlaceholderScreen {
    pub fn new(tab: Tab, user: &str) -> Self {
        let detail = match tab {
            Tab::Home => "Vote on the card.".to_string(),
            Tab::Search => "Browse polls with `pondus poll list`.".to_string(),
            Tab::Add => "Create a poll with `pondus poll create`.".to_string(),
            Tab::Profile => format!("Voting as {}.", user),
            Tab::Share => "Share a closed poll with `pondus poll results <id>`.".to_string(),
        };
        Self { tab, detail }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.tab.title(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(self.detail.as_str()),
        ];

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );

        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_mentions_user() {
        let screen = PlaceholderScreen::new(Tab::Profile, "alice");
        assert_eq!(screen.tab(), Tab::Profile);
        assert!(screen.detail().contains("alice"));
    }

    #[test]
    fn test_add_points_at_cli() {
        assert!(PlaceholderScreen::new(Tab::Add, "x").detail().contains("poll create"));
    }
}
