//! Main application controller
//!
//! Manages the TUI, application state, and screen rendering loop.

use crossterm::event::KeyEvent;

use crate::{
    app::{
        screens::{FocusScreen, HomeItem, HomeScreen},
        state::{AppState, NavigationAction, StateManager},
        tui::Tui,
    },
    config::FocusConfig,
    Result,
};

/// Values copied into every new focus session
#[derive(Debug, Clone, Default)]
pub struct Prefill {
    pub topic: Option<String>,
    pub duration_secs: Option<u64>,
}

/// TUI application controller
pub struct App {
    tui: Tui,
    state_manager: StateManager,
    config: FocusConfig,
    prefill: Prefill,
    home_screen: HomeScreen,
    /// Present only while the focus screen is shown; dropping it releases
    /// the session and its ticker
    focus_screen: Option<FocusScreen>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: FocusConfig, prefill: Prefill) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tui: Tui::new()?,
            state_manager: StateManager::new(),
            config,
            prefill,
            home_screen: HomeScreen::new(),
            focus_screen: None,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            if let Some(screen) = self.focus_screen.as_mut() {
                screen.pump_ticks();
            }
            self.draw()?;
            if let Some(key) = self.tui.handle_events()? {
                self.handle_key(key)?;
            }
            tokio::task::yield_now().await;
        }
        self.close_focus();
        self.tui.restore()?;
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let home_screen = &mut self.home_screen;
        let focus_screen = &mut self.focus_screen;
        let state = self.state_manager.current_state();
        self.tui.draw(|f| match (state, focus_screen.as_mut()) {
            (AppState::Focus, Some(screen)) => screen.render(f),
            _ => home_screen.render(f),
        })?;
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if StateManager::is_force_quit(&key) {
            self.state_manager.quit();
            return Ok(());
        }

        match self.state_manager.current_state() {
            AppState::Home => self.handle_home_screen_events(key)?,
            AppState::Focus => self.handle_focus_screen_events(key),
        }
        Ok(())
    }

    fn handle_home_screen_events(&mut self, key: KeyEvent) -> Result<()> {
        let Some(action) = StateManager::key_to_navigation(key) else {
            return Ok(());
        };
        match action {
            NavigationAction::Up => self.home_screen.select_previous(),
            NavigationAction::Down => self.home_screen.select_next(),
            NavigationAction::Select => match self.home_screen.selected_item() {
                HomeItem::FocusMode => {
                    self.open_focus()?;
                    self.state_manager.handle_navigation(action);
                }
                HomeItem::Quit => self.state_manager.quit(),
            },
            _ => self.state_manager.handle_navigation(action),
        }
        Ok(())
    }

    fn handle_focus_screen_events(&mut self, key: KeyEvent) {
        let next = self
            .focus_screen
            .as_mut()
            .and_then(|screen| screen.handle_key_event(key));
        if next == Some(AppState::Home) {
            self.close_focus();
            self.state_manager.handle_navigation(NavigationAction::Back);
        }
    }

    fn open_focus(&mut self) -> Result<()> {
        let mut screen = FocusScreen::new(&self.config)?;
        screen.prefill(self.prefill.topic.as_deref(), self.prefill.duration_secs);
        self.focus_screen = Some(screen);
        tracing::info!("focus mode opened");
        Ok(())
    }

    fn close_focus(&mut self) {
        if self.focus_screen.take().is_some() {
            tracing::info!("focus mode closed");
        }
    }
}
