//! Screen state and key mapping
//!
//! Two screens only: Home and Focus. Focus always returns to Home, so no
//! history is kept.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Title and menu
    #[default]
    Home,
    /// Countdown, inputs and quiz
    Focus,
}

/// Menu-level actions produced from key presses on the Home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Up,
    Down,
    Select,
    Back,
    Quit,
}

/// Tracks the current screen and the quit request
#[derive(Debug, Default)]
pub struct StateManager {
    current: AppState,
    quit_requested: bool,
}

impl StateManager {
    /// Start on the Home screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen currently shown
    pub fn current_state(&self) -> AppState {
        self.current
    }

    /// Check if the application should exit
    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Request exit
    pub fn quit(&mut self) {
        self.quit_requested = true;
    }

    /// Apply a navigation action. Up/Down belong to the screens.
    pub fn handle_navigation(&mut self, action: NavigationAction) {
        self.current = match (self.current, action) {
            (_, NavigationAction::Quit) | (AppState::Home, NavigationAction::Back) => {
                self.quit_requested = true;
                self.current
            }
            (AppState::Home, NavigationAction::Select) => AppState::Focus,
            (AppState::Focus, NavigationAction::Back) => AppState::Home,
            (state, _) => state,
        };
    }

    /// Menu keys: arrows or j/k, Enter or Space, Esc, q
    pub fn key_to_navigation(key: KeyEvent) -> Option<NavigationAction> {
        if Self::is_force_quit(&key) {
            return Some(NavigationAction::Quit);
        }
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,
            KeyCode::Esc => NavigationAction::Back,
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            _ => return None,
        };
        Some(action)
    }

    /// Ctrl+C quits from every screen, including ones that take text input
    pub fn is_force_quit(key: &KeyEvent) -> bool {
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_home() {
        let manager = StateManager::new();
        assert_eq!(manager.current_state(), AppState::Home);
        assert!(!manager.should_quit());
    }

    #[test]
    fn test_focus_round_trip() {
        let mut manager = StateManager::new();
        manager.handle_navigation(NavigationAction::Select);
        assert_eq!(manager.current_state(), AppState::Focus);

        // Select does nothing once in focus mode
        manager.handle_navigation(NavigationAction::Select);
        assert_eq!(manager.current_state(), AppState::Focus);

        manager.handle_navigation(NavigationAction::Back);
        assert_eq!(manager.current_state(), AppState::Home);
        assert!(!manager.should_quit());
    }

    #[test]
    fn test_back_from_home_quits() {
        let mut manager = StateManager::new();
        manager.handle_navigation(NavigationAction::Back);
        assert!(manager.should_quit());
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(
            StateManager::key_to_navigation(press(KeyCode::Char('k'))),
            Some(NavigationAction::Up)
        );
        assert_eq!(
            StateManager::key_to_navigation(press(KeyCode::Char(' '))),
            Some(NavigationAction::Select)
        );
        assert_eq!(
            StateManager::key_to_navigation(press(KeyCode::Char('Q'))),
            Some(NavigationAction::Quit)
        );
        assert_eq!(
            StateManager::key_to_navigation(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(NavigationAction::Quit)
        );
        assert_eq!(StateManager::key_to_navigation(press(KeyCode::Tab)), None);
    }
}
