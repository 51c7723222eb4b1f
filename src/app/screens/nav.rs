//! Tab bar and key help shared by every screen

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::state::Tab;

/// Render the tab bar with the current route highlighted
pub fn render_tab_bar(f: &mut Frame, area: Rect, current: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("F{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(current.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title("pondus"),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn key(label: &str) -> Span<'_> {
    Span::styled(
        label,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

/// Render help text for the current tab
pub fn render_help(f: &mut Frame, area: Rect, current: Tab) {
    let mut spans = Vec::new();
    if current == Tab::Home {
        spans.extend([
            key("1/2"),
            Span::raw(" Tap  "),
            key("↑↓"),
            Span::raw(" Swipe  "),
        ]);
    }
    spans.extend([
        key("Tab"),
        Span::raw(" Next  "),
        key("Esc"),
        Span::raw(" Back  "),
        key("Q"),
        Span::raw(" Quit"),
    ]);

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(help, area);
}
