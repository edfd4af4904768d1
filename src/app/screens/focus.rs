//! Focus screen implementation
//!
//! Topic, duration and answer inputs around a live countdown. Pending
//! notifications are shown one at a time as a modal popup.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::state::AppState;
use crate::config::FocusConfig;
use crate::focus::{FocusMode, InputField};
use crate::models::Outcome;
use crate::notify::{AdvisoryRestriction, NotificationQueue};
use crate::quiz::{QuizPhase, QuizSession};
use crate::timer::Ticker;
use crate::Result;

/// Focus controller as used by the TUI: queued notifications, advisory policy
pub type ScreenFocus = FocusMode<NotificationQueue, AdvisoryRestriction>;

/// Focus Mode screen state
pub struct FocusScreen {
    focus: ScreenFocus,
    selected_field: InputField,
    tick_interval: Duration,
    ticker: Option<Ticker>,
    status_message: Option<String>,
}

impl FocusScreen {
    /// Create the screen with an empty session and a stopped countdown
    pub fn new(config: &FocusConfig) -> Result<Self> {
        let policy = AdvisoryRestriction::new(config.restriction_window()?);
        Ok(Self {
            focus: FocusMode::new(config, NotificationQueue::new(), policy),
            selected_field: InputField::Topic,
            tick_interval: config.tick_interval(),
            ticker: None,
            status_message: None,
        })
    }

    /// Fill the topic and duration inputs, e.g. from command-line flags
    pub fn prefill(&mut self, topic: Option<&str>, duration_secs: Option<u64>) {
        if let Some(topic) = topic {
            self.focus.set_input(InputField::Topic, topic);
            self.focus.set_topic();
        }
        if let Some(secs) = duration_secs {
            self.focus.set_input(InputField::Duration, secs.to_string());
        }
    }

    /// Underlying focus controller
    pub fn focus(&self) -> &ScreenFocus {
        &self.focus
    }

    /// Input field that receives typed characters
    pub fn selected_field(&self) -> InputField {
        self.selected_field
    }

    /// Whether a periodic ticker is currently held
    pub fn has_ticker(&self) -> bool {
        self.ticker.is_some()
    }

    /// Whether a notification is waiting to be dismissed
    pub fn has_modal(&self) -> bool {
        !self.focus.notifier().is_empty()
    }

    /// Handle a key press. Returns the screen to switch to, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<AppState> {
        if self.has_modal() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.focus.notifier_mut().dismiss();
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(AppState::Home),
            KeyCode::Tab => self.selected_field = self.selected_field.next(),
            KeyCode::BackTab => self.selected_field = self.selected_field.previous(),
            KeyCode::Up => self.selected_field = self.selected_field.previous(),
            KeyCode::Down => self.selected_field = self.selected_field.next(),
            KeyCode::Enter => self.activate_selected(),
            KeyCode::Backspace => {
                self.focus.input_mut(self.selected_field).pop();
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.focus.reset_timer();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.focus.input_mut(self.selected_field).push(c);
            }
            _ => {}
        }

        self.sync_ticker();
        None
    }

    fn activate_selected(&mut self) {
        match self.selected_field {
            InputField::Topic => self.focus.set_topic(),
            InputField::Duration => {
                // Invalid input has already been queued as a notification
                if let Err(e) = self.focus.toggle_timer() {
                    tracing::debug!(error = %e, "timer not started");
                }
            }
            InputField::Answer => {
                if let Err(e) = self.focus.submit_answer() {
                    tracing::debug!(error = %e, "answer not submitted");
                }
            }
        }
    }

    /// Feed pending ticks into the countdown
    pub fn pump_ticks(&mut self) {
        if let Some(ticker) = self.ticker.as_mut() {
            while self.focus.is_running() && ticker.try_tick() {
                self.focus.tick();
            }
        }
        self.sync_ticker();
    }

    /// Hold a ticker exactly while the countdown runs
    fn sync_ticker(&mut self) {
        if !self.focus.is_running() {
            if let Some(ticker) = self.ticker.take() {
                ticker.stop();
            }
            return;
        }
        if self.ticker.is_some() {
            return;
        }
        match Ticker::start(self.tick_interval) {
            Ok(ticker) => {
                self.ticker = Some(ticker);
                self.status_message = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "could not start ticker");
                self.status_message = Some(e.to_string());
                if let Err(e) = self.focus.toggle_timer() {
                    tracing::debug!(error = %e, "could not pause timer");
                }
            }
        }
    }

    /// Render the focus screen
    pub fn render(&mut self, f: &mut Frame) {
        let size = f.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // Countdown
                Constraint::Length(9), // Inputs
                Constraint::Min(5),    // Quiz status
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_title(f, chunks[0]);
        self.render_countdown(f, chunks[1]);
        self.render_inputs(f, chunks[2]);
        self.render_quiz(f, chunks[3]);
        self.render_help(f, chunks[4]);

        if self.has_modal() {
            self.render_modal(f, size);
        }
    }

    fn render_title(&self, f: &mut Frame, area: Rect) {
        let title = match self.focus.active_topic() {
            Some(topic) if !topic.is_empty() => format!("Focus Mode - {}", topic),
            _ => "Focus Mode".to_string(),
        };
        let widget = Paragraph::new(title)
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
        f.render_widget(widget, area);
    }

    fn render_countdown(&self, f: &mut Frame, area: Rect) {
        let countdown = self.focus.countdown();
        let (state, color) = if countdown.is_running() {
            ("Running", Color::Green)
        } else if countdown.remaining() > 0 {
            ("Paused", Color::Yellow)
        } else {
            ("Stopped", Color::White)
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format_clock(countdown.remaining()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(state),
        ];
        if let Some(message) = &self.status_message {
            lines.push(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            )));
        }

        let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title("Timer")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(widget, area);
    }

    fn render_inputs(&self, f: &mut Frame, area: Rect) {
        let field_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        for (i, field) in InputField::all().into_iter().enumerate() {
            let selected = field == self.selected_field;
            let border = if selected {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            let mut text = self.focus.input(field).to_string();
            if selected {
                text.push('_');
            }
            let title = format!("{} [{}]", field.label(), action_label(field, &self.focus));
            let widget = Paragraph::new(text).block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border),
            );
            f.render_widget(widget, field_chunks[i]);
        }
    }

    fn render_quiz(&self, f: &mut Frame, area: Rect) {
        let session = self.focus.session();
        let mut lines = Vec::new();

        match session.phase() {
            QuizPhase::Idle if session.is_empty() => {
                lines.push(Line::from("Set a topic, then start the timer."));
            }
            QuizPhase::Idle => {
                lines.push(Line::from(format!(
                    "{} questions ready. They appear when the timer runs out.",
                    session.len()
                )));
                lines.push(Line::from(pass_hint(session)));
            }
            QuizPhase::Asking(index) => {
                lines.push(Line::from(format!(
                    "Question {} of {}  |  Score {}  |  {}",
                    index + 1,
                    session.len(),
                    session.score(),
                    pass_hint(session)
                )));
                if let Some(question) = session.current_question() {
                    lines.push(Line::from(Span::styled(
                        question.prompt(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )));
                }
            }
            QuizPhase::Completed(outcome) => {
                let (text, color) = match outcome {
                    Outcome::Pass => ("Passed - other apps unlocked", Color::Green),
                    Outcome::Fail => ("Failed - other apps restricted", Color::Red),
                };
                lines.push(Line::from(Span::styled(
                    text,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(format!(
                    "Score {} / {}",
                    session.score(),
                    session.len()
                )));
                if let Some(until) = self.focus.policy().restricted_until() {
                    lines.push(Line::from(format!(
                        "Restricted until {}",
                        until.with_timezone(&chrono::Local).format("%H:%M:%S")
                    )));
                }
            }
        }

        let widget = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title("Quiz").borders(Borders::ALL));
        f.render_widget(widget, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let key = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let help_text = vec![Line::from(vec![
            Span::styled("Tab", key),
            Span::raw(" Next field  "),
            Span::styled("Enter", key),
            Span::raw(" Apply  "),
            Span::styled("Ctrl+R", key),
            Span::raw(" Reset  "),
            Span::styled("Esc", key),
            Span::raw(" Home  "),
            Span::styled("Ctrl+C", key),
            Span::raw(" Quit"),
        ])];

        let help = Paragraph::new(help_text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        f.render_widget(help, area);
    }

    fn render_modal(&self, f: &mut Frame, area: Rect) {
        let Some(note) = self.focus.notifier().front() else {
            return;
        };

        let mut lines = Vec::new();
        if !note.message.is_empty() {
            lines.push(Line::from(note.message.as_str()));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::Yellow),
        )));

        let popup = centered_rect(60, lines.len() as u16 + 4, area);
        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(note.title.as_str())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );

        f.render_widget(Clear, popup);
        f.render_widget(widget, popup);
    }
}

fn action_label(field: InputField, focus: &ScreenFocus) -> &'static str {
    match field {
        InputField::Topic => "Enter: Set Topic",
        InputField::Duration if focus.is_running() => "Enter: Pause",
        InputField::Duration => "Enter: Start",
        InputField::Answer => "Enter: Submit Answer",
    }
}

fn pass_hint(session: &QuizSession) -> String {
    format!(
        "Need {} of {} correct to pass",
        session.pass_threshold(),
        session.len()
    )
}

/// mm:ss for the countdown display
fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
