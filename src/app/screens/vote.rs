//! Vote screen implementation
//!
//! Two option panels around the question. Before voting they are plain;
//! afterwards each panel is dimmed and overlaid with a gauge that fills to
//! the option's share of the vote.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use tokio::sync::watch;

use crate::app::state::NavigationAction;
use crate::config::AppConfig;
use crate::util::format::format_percent;
use crate::vote::{
    DragOutcome, DragTracker, FillAnimation, GestureMapper, InputEvent, Region, VoteCard,
    VoteOption, VoteState,
};

/// Vote screen component owning one card
#[derive(Debug)]
pub struct VoteScreen {
    card: VoteCard,
    /// Observer side of the card; the only source of what gets drawn
    updates: watch::Receiver<VoteState>,
    snapshot: VoteState,
    fills: Option<[FillAnimation; 2]>,
    mapper: GestureMapper,
    drag: DragTracker,
    question: String,
    labels: [String; 2],
    fill_duration: Duration,
    /// Panel areas from the last draw, for hit-testing taps
    panels: Option<[Rect; 2]>,
}

impl VoteScreen {
    /// Mount a fresh card from the configuration
    pub fn new(config: &AppConfig) -> Self {
        let card = VoteCard::new(config.card.initial_a, config.card.initial_b);
        let updates = card.subscribe();
        let snapshot = card.state();

        Self {
            card,
            updates,
            snapshot,
            fills: None,
            mapper: GestureMapper::new(config.gesture.swipe_threshold),
            drag: DragTracker::new(config.gesture.units_per_row),
            question: config.card.question.clone(),
            labels: [config.card.label_a.clone(), config.card.label_b.clone()],
            fill_duration: config.animation_duration(),
            panels: None,
        }
    }

    /// State as last observed by the renderer
    pub fn snapshot(&self) -> VoteState {
        self.snapshot
    }

    /// Current card state, whether or not it has been observed yet
    pub fn card_state(&self) -> VoteState {
        self.card.state()
    }

    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.mapper.dispatch(&mut self.card, event)
    }

    /// Keyboard equivalents of taps and full-length swipes
    pub fn handle_action(&mut self, action: NavigationAction) -> bool {
        let full_swipe = self.mapper.threshold() * 2.0;
        let event = match action {
            NavigationAction::TapA => InputEvent::Press(Region::A),
            NavigationAction::TapB => InputEvent::Press(Region::B),
            NavigationAction::Up => InputEvent::DragEnd(-full_swipe),
            NavigationAction::Down => InputEvent::DragEnd(full_swipe),
            _ => return false,
        };
        self.handle_input(event)
    }

    /// Left-button press, drag and release. Returns `true` if a vote landed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag.begin(mouse.column, mouse.row);
                false
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.drag.update(mouse.row);
                false
            }
            MouseEventKind::Up(MouseButton::Left) => match self.drag.end(mouse.row) {
                Some(DragOutcome::Tap { column, row }) => match self.region_at(column, row) {
                    Some(region) => self.handle_input(InputEvent::Press(region)),
                    None => false,
                },
                Some(DragOutcome::Swipe(displacement)) => {
                    self.handle_input(InputEvent::DragEnd(displacement))
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Which option panel, if any, covers this cell
    pub fn region_at(&self, column: u16, row: u16) -> Option<Region> {
        let [a, b] = self.panels?;
        if contains(a, column, row) {
            Some(Region::A)
        } else if contains(b, column, row) {
            Some(Region::B)
        } else {
            None
        }
    }

    /// Pull the latest card state. Returns `true` if it changed.
    pub fn sync(&mut self) -> bool {
        if !matches!(self.updates.has_changed(), Ok(true)) {
            return false;
        }

        let state = *self.updates.borrow_and_update();
        self.snapshot = state;
        if state.has_voted {
            let shares = state.shares();
            let now = Instant::now();
            self.fills = Some([
                FillAnimation::starting_at(0.0, shares.a, self.fill_duration, now),
                FillAnimation::starting_at(0.0, shares.b, self.fill_duration, now),
            ]);
        }
        true
    }

    /// Render the vote screen
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Option A
                Constraint::Length(3), // Question
                Constraint::Min(5),    // Option B
            ])
            .split(area);

        self.panels = Some([chunks[0], chunks[2]]);

        self.render_option(f, chunks[0], VoteOption::A);
        self.render_question(f, chunks[1]);
        self.render_option(f, chunks[2], VoteOption::B);
    }

    fn render_question(&self, f: &mut Frame, area: Rect) {
        let question = Paragraph::new(self.question.as_str())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));

        f.render_widget(question, area);
    }

    fn render_option(&self, f: &mut Frame, area: Rect, option: VoteOption) {
        let index = match option {
            VoteOption::A => 0,
            VoteOption::B => 1,
        };
        let label = self.labels[index].as_str();

        match &self.fills {
            Some(fills) if self.snapshot.has_voted => {
                self.render_result(f, area, label, self.snapshot.share(option), &fills[index])
            }
            _ => self.render_plain(f, area, label, option),
        }
    }

    fn render_plain(&self, f: &mut Frame, area: Rect, label: &str, option: VoteOption) {
        let hint = match option {
            VoteOption::A => "click, press 1, or swipe up",
            VoteOption::B => "click, press 2, or swipe down",
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let text = vec![
            Line::from(Span::styled(
                label,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        ];
        let body = Paragraph::new(text).alignment(Alignment::Center);
        f.render_widget(body, centered_rows(inner, 3));
    }

    fn render_result(
        &self,
        f: &mut Frame,
        area: Rect,
        label: &str,
        share: f64,
        fill: &FillAnimation,
    ) {
        // Dim layer
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Black).add_modifier(Modifier::DIM));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let title = Paragraph::new(Span::styled(
            label,
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center);
        f.render_widget(title, centered_rows(rows[0], 1));

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray))
            .ratio(fill.value().clamp(0.0, 1.0))
            .label(Span::styled(
                format_percent(share),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        f.render_widget(gauge, rows[1]);
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// `height` rows vertically centered in `area`
fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}
