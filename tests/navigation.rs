//! Integration tests for home screen navigation

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use focusgate::app::{AppState, HomeItem, HomeScreen, NavigationAction, StateManager};

#[test]
fn test_home_screen_integration() {
    let mut home = HomeScreen::new();
    assert_eq!(home.selected_item(), HomeItem::FocusMode);

    home.select_next();
    assert_eq!(home.selected_item(), HomeItem::Quit);

    // Wrap around
    home.select_next();
    assert_eq!(home.selected_item(), HomeItem::FocusMode);
}

#[test]
fn test_state_manager_integration() {
    let mut state_manager = StateManager::new();
    assert_eq!(state_manager.current_state(), AppState::Home);

    state_manager.handle_navigation(NavigationAction::Select);
    assert_eq!(state_manager.current_state(), AppState::Focus);

    state_manager.handle_navigation(NavigationAction::Back);
    assert_eq!(state_manager.current_state(), AppState::Home);
    assert!(!state_manager.should_quit());

    state_manager.handle_navigation(NavigationAction::Back);
    assert!(state_manager.should_quit());
}

#[test]
fn test_ctrl_c_forces_quit() {
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(StateManager::is_force_quit(&key));
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
    assert!(!StateManager::is_force_quit(&key));
}
