//! Terminal session plumbing for the quote screen.

use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::{execute, terminal};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use crate::error::Result;

/// Owns the raw-mode session for the quote screen: frames go out through
/// [`draw`](Self::draw), key presses come back through
/// [`poll_key`](Self::poll_key), and the shell gets its terminal back on
/// drop, panic or not.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        terminal.hide_cursor()?;
        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Render one frame of the screen.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    /// Wait up to `timeout` for a key press. `None` marks an idle tick, which
    /// the screen uses to drain fetch completions and advance the busy
    /// spinner. Key releases and non-key events are filtered out here.
    pub fn poll_key(&self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    /// Leave raw mode and the alternate screen. Safe to call repeatedly; only
    /// the first call does the work.
    pub fn restore(&mut self) -> Result<()> {
        if self.active {
            self.active = false;
            self.terminal.show_cursor()?;
            execute!(stdout(), terminal::LeaveAlternateScreen)?;
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
