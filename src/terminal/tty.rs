//! Crossterm backend: raw mode, alternate screen, double buffer, diff flush.

use super::backend::Backend;
use crate::buffer::diff::{render_diff, render_full, DiffState};
use crate::buffer::{Buffer, Cell};
use crate::config::SessionConfig;
use crate::error::Result;
use crate::input::Key;
use crossterm::{
    cursor, event, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};

/// A terminal session driven through crossterm.
///
/// Opening the backend puts the terminal in raw mode (and the alternate
/// screen when configured); [`close`](Self::close) restores it. If the owner
/// never calls `close`, dropping the backend restores the terminal too so a
/// panic does not leave the shell in raw mode.
pub struct CrosstermBackend {
    config: SessionConfig,
    /// Frame currently on screen.
    current: Buffer,
    /// Frame being drawn.
    next: Buffer,
    diff_state: DiffState,
    /// Pre-allocated output buffer.
    output: Vec<u8>,
    stdout: Stdout,
    needs_full_redraw: bool,
    cursor: Option<(u16, u16)>,
    closed: bool,
}

impl CrosstermBackend {
    /// Enter raw mode and prepare the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen, etc.).
    pub fn open(config: SessionConfig) -> Result<Self> {
        let (width, height) = terminal::size()?;
        let (width, height) = (width.max(1), height.max(1));

        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        if config.hide_cursor {
            execute!(stdout, cursor::Hide)?;
        }
        tracing::info!(width, height, "terminal session opened");

        Ok(Self {
            config,
            current: Buffer::new(width, height),
            next: Buffer::new(width, height),
            diff_state: DiffState::new(),
            output: Vec::with_capacity(65536),
            stdout,
            needs_full_redraw: true,
            cursor: None,
            closed: false,
        })
    }

    /// Restore the terminal.
    pub fn close(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        execute!(self.stdout, cursor::Show)?;
        if self.config.alternate_screen {
            execute!(self.stdout, LeaveAlternateScreen)?;
        }
        terminal::disable_raw_mode()?;
        tracing::info!("terminal session closed");
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        let (width, height) = (width.max(1), height.max(1));
        self.current.resize(width, height);
        self.next.resize(width, height);
        self.needs_full_redraw = true;
        tracing::debug!(width, height, "terminal resized");
    }
}

impl Backend for CrosstermBackend {
    fn size(&self) -> (u16, u16) {
        (self.next.width(), self.next.height())
    }

    fn clear(&mut self) {
        self.next.clear();
    }

    fn draw(&mut self, x: u16, y: u16, cell: Cell) -> Result<()> {
        self.next.put(x, y, cell).map(|_| ())
    }

    fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor = position;
    }

    fn flush(&mut self) -> Result<()> {
        self.output.clear();

        if self.needs_full_redraw {
            render_full(&self.next, &mut self.output);
            self.needs_full_redraw = false;
            self.diff_state.reset();
        } else {
            let diff = render_diff(&self.current, &self.next, &mut self.output, &mut self.diff_state);
            tracing::trace!(
                cells_changed = diff.cells_changed,
                cursor_moves = diff.cursor_moves,
                color_changes = diff.color_changes,
                "flushed frame diff"
            );
        }

        match self.cursor {
            Some((x, y)) => {
                let _ = write!(&mut self.output, "\x1b[{};{}H\x1b[?25h", y + 1, x + 1);
                self.diff_state.reset();
            }
            None if self.config.hide_cursor => self.output.extend_from_slice(b"\x1b[?25l"),
            None => {}
        }

        if !self.output.is_empty() {
            self.stdout.write_all(&self.output)?;
            self.stdout.flush()?;
        }

        self.current.copy_from(&self.next);
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            let event = event::read()?;
            if let event::Event::Resize(width, height) = event {
                self.resize(width, height);
                continue;
            }
            if let Some(key) = Key::from_event(&event) {
                return Ok(key);
            }
        }
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
