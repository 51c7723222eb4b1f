//! Integration tests for tab navigation and the mounted card

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pondus::app::{NavigationAction, Screens, StateManager, Tab};
use pondus::config::AppConfig;
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn draw(terminal: &mut Terminal<TestBackend>, screens: &mut Screens, tab: Tab) -> String {
    terminal.draw(|f| screens.render(f, tab)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn test_tab_keys_walk_every_route() {
    let mut state_manager = StateManager::new();
    let mut visited = vec![state_manager.current_tab()];

    for _ in 0..4 {
        state_manager.handle_key_event(key(KeyCode::Tab));
        visited.push(state_manager.current_tab());
    }
    assert_eq!(visited, Tab::ALL.to_vec());

    state_manager.handle_key_event(key(KeyCode::Tab));
    assert_eq!(state_manager.current_tab(), Tab::Home);
}

#[test]
fn test_escape_returns_then_quits() {
    let mut state_manager = StateManager::new();
    state_manager.handle_key_event(key(KeyCode::F(5)));
    assert_eq!(state_manager.current_tab(), Tab::Share);

    state_manager.handle_key_event(key(KeyCode::Esc));
    assert_eq!(state_manager.current_tab(), Tab::Home);
    assert!(!state_manager.should_quit());

    state_manager.handle_key_event(key(KeyCode::Esc));
    assert!(state_manager.should_quit());
}

#[test]
fn test_keyboard_vote_renders_percentages() {
    let config = AppConfig::default();
    let mut screens = Screens::new(&config);
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();

    let before = draw(&mut terminal, &mut screens, Tab::Home);
    assert!(before.contains("Matiz"));
    assert!(!before.contains('%'));

    assert!(screens.vote.handle_action(NavigationAction::Down));
    assert!(!screens.vote.handle_action(NavigationAction::Up));
    screens.vote.sync();

    let after = draw(&mut terminal, &mut screens, Tab::Home);
    assert!(after.contains("32%"));
    assert!(after.contains("68%"));
}

#[test]
fn test_mouse_tap_on_panel_votes_for_it() {
    let config = AppConfig::default();
    let mut screens = Screens::new(&config);
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();

    // Panels are only hit-testable after the first draw
    draw(&mut terminal, &mut screens, Tab::Home);

    let (column, row) = (30, 5);
    assert!(screens.vote.region_at(column, row).is_some());
    screens
        .vote
        .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, row));
    let voted = screens
        .vote
        .handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), column, row));

    assert!(voted);
    assert_eq!(screens.vote.card_state().count_a, 11);
    assert_eq!(screens.vote.card_state().count_b, 20);
}

#[test]
fn test_mouse_drag_swipe() {
    let config = AppConfig::default();
    let mut screens = Screens::new(&config);

    // 25 units per row: four rows up is -100
    screens
        .vote
        .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 12));
    screens
        .vote
        .handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 10));
    assert!(screens
        .vote
        .handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 8)));
    assert_eq!(screens.vote.card_state().count_a, 11);
}

#[test]
fn test_short_mouse_drag_does_not_vote() {
    let config = AppConfig::default();
    let mut screens = Screens::new(&config);

    // Two rows is exactly the threshold
    screens
        .vote
        .handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 12));
    assert!(!screens
        .vote
        .handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, 14)));
    assert!(!screens.vote.card_state().has_voted);
}

#[test]
fn test_vote_persists_across_tabs() {
    let config = AppConfig::default();
    let mut screens = Screens::new(&config);
    let mut state_manager = StateManager::new();
    let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();

    screens.vote.handle_action(NavigationAction::TapB);
    screens.vote.sync();

    state_manager.handle_key_event(key(KeyCode::F(4)));
    let profile = draw(&mut terminal, &mut screens, state_manager.current_tab());
    assert!(profile.contains("Profile"));

    state_manager.handle_key_event(key(KeyCode::Esc));
    assert_eq!(state_manager.current_tab(), Tab::Home);
    assert_eq!(screens.vote.snapshot().count_b, 21);
    assert!(!screens.vote.handle_action(NavigationAction::TapA));
}
