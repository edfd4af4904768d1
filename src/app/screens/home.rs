//! Home screen implementation
//!
//! Title plus a two-entry menu: Focus Mode and Quit.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Entries of the home menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeItem {
    FocusMode,
    Quit,
}

impl HomeItem {
    /// Menu entries in display order
    pub fn all() -> [Self; 2] {
        [Self::FocusMode, Self::Quit]
    }

    /// Menu text
    pub fn label(self) -> &'static str {
        match self {
            Self::FocusMode => "Focus Mode",
            Self::Quit => "Quit",
        }
    }
}

/// Home screen menu state
#[derive(Debug)]
pub struct HomeScreen {
    selected_index: usize,
    list_state: ListState,
}

impl HomeScreen {
    /// Create the home screen with Focus Mode selected
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected_index: 0,
            list_state,
        }
    }

    /// Currently highlighted entry
    pub fn selected_item(&self) -> HomeItem {
        HomeItem::all()[self.selected_index]
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        let len = HomeItem::all().len();
        self.selected_index = (self.selected_index + len - 1) % len;
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % HomeItem::all().len();
        self.list_state.select(Some(self.selected_index));
    }

    /// Render the home screen
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Title and subtitle
                Constraint::Min(4),    // Menu
                Constraint::Length(3), // Help text
            ])
            .split(f.size());

        self.render_title(f, chunks[0]);
        self.render_menu(f, chunks[1]);
        self.render_help(f, chunks[2]);
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(2)])
            .split(area);

        let title = Paragraph::new("Study Time!")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        f.render_widget(title, title_chunks[0]);

        let subtitle = Paragraph::new("Count down, then earn your apps back with a quiz")
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(subtitle, title_chunks[1]);
    }

    fn render_menu(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = HomeItem::all()
            .iter()
            .map(|item| ListItem::new(item.label()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help_text = vec![Line::from(vec![
            Span::styled("↑↓", key),
            Span::raw(" Navigate  "),
            Span::styled("Enter", key),
            Span::raw(" Select  "),
            Span::styled("Q", key),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        f.render_widget(help, area);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_focus_mode() {
        let screen = HomeScreen::new();
        assert_eq!(screen.selected_item(), HomeItem::FocusMode);
    }

    #[test]
    fn test_menu_wraps() {
        let mut screen = HomeScreen::new();
        screen.select_next();
        assert_eq!(screen.selected_item(), HomeItem::Quit);
        screen.select_next();
        assert_eq!(screen.selected_item(), HomeItem::FocusMode);
        screen.select_previous();
        assert_eq!(screen.selected_item(), HomeItem::Quit);
    }
}
