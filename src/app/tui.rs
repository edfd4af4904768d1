//! Terminal setup and key polling
//!
//! Raw mode plus the alternate screen while the app runs; the terminal is
//! restored on exit and on drop.

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

/// Redraw often enough for a one-second countdown
const FRAME_RATE: Duration = Duration::from_millis(100);

/// Crossterm-backed terminal
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    initialized: bool,
    last_frame: Instant,
    frame_rate: Duration,
}

impl Tui {
    /// Create the terminal without touching its mode
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            initialized: false,
            last_frame: Instant::now(),
            frame_rate: FRAME_RATE,
        })
    }

    /// Enter raw mode and the alternate screen
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        self.initialized = true;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Leave the alternate screen. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.initialized {
            return Ok(());
        }
        self.initialized = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Draw one frame with the given render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait up to one frame for a key press
    pub fn handle_events(&mut self) -> io::Result<Option<KeyEvent>> {
        let timeout = poll_timeout(self.frame_rate, self.last_frame.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases as well
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
        }

        if self.last_frame.elapsed() >= self.frame_rate {
            self.last_frame = Instant::now();
        }

        Ok(None)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Time left in the current frame
fn poll_timeout(frame_rate: Duration, elapsed: Duration) -> Duration {
    frame_rate.saturating_sub(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_timeout() {
        assert_eq!(
            poll_timeout(FRAME_RATE, Duration::from_millis(30)),
            Duration::from_millis(70)
        );
        assert_eq!(poll_timeout(FRAME_RATE, Duration::from_secs(1)), Duration::ZERO);
    }
}
