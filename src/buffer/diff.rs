//! Diffing: turn the difference between two buffers into ANSI sequences.
//!
//! The crossterm backend keeps the frame currently on screen and the frame
//! being drawn. Flipping emits escape sequences only for the cells that
//! changed, tracking cursor position and SGR state so nothing redundant is
//! written. All output is accumulated in one `Vec<u8>` and flushed with a
//! single write.

use super::{Attributes, Buffer, Cell, Color};
use std::io::Write;

/// State tracker for the diffing algorithm.
///
/// Tracks the "current" terminal state (cursor position, colors,
/// attributes) to minimize the escape sequences emitted.
#[derive(Debug, Clone)]
pub struct DiffState {
    cursor_x: u16,
    cursor_y: u16,
    fg: Option<Color>,
    bg: Option<Color>,
    attributes: Option<Attributes>,
}

impl Default for DiffState {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffState {
    /// Create a new diff state with unknown terminal state.
    pub const fn new() -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            fg: None,
            bg: None,
            attributes: None,
        }
    }

    /// Reset the state (e.g., after a full screen clear).
    pub const fn reset(&mut self) {
        self.fg = None;
        self.bg = None;
        self.attributes = None;
        // Force cursor move on next write
        self.cursor_x = u16::MAX;
        self.cursor_y = u16::MAX;
    }
}

/// Result of a diff operation.
#[derive(Debug, Clone, Default)]
pub struct DiffResult {
    /// Number of cells that were different.
    pub cells_changed: usize,
    /// Number of cursor move sequences emitted.
    pub cursor_moves: usize,
    /// Number of color change sequences emitted.
    pub color_changes: usize,
}

/// Render the difference between two equally sized buffers.
pub fn render_diff(
    current: &Buffer,
    next: &Buffer,
    output: &mut Vec<u8>,
    state: &mut DiffState,
) -> DiffResult {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let mut result = DiffResult::default();
    let width = current.width();

    for y in 0..current.height() {
        for x in 0..width {
            let idx = (y as usize) * (width as usize) + (x as usize);
            let current_cell = &current.cells()[idx];
            let next_cell = &next.cells()[idx];

            if current_cell == next_cell || next_cell.is_wide_continuation() {
                continue;
            }

            result.cells_changed += 1;

            if state.cursor_y != y || state.cursor_x != x {
                emit_cursor_move(output, x, y);
                state.cursor_x = x;
                state.cursor_y = y;
                result.cursor_moves += 1;
            }

            // Dropping an attribute needs a full SGR reset, which also
            // clears colors.
            let next_attrs = next_cell.attributes().resolved();
            let current_attrs = state.attributes.unwrap_or(Attributes::empty());
            if !current_attrs.difference(next_attrs).is_empty() {
                output.extend_from_slice(b"\x1b[0m");
                state.fg = None;
                state.bg = None;
                state.attributes = None;
            }

            if state.fg != Some(next_cell.fg()) {
                emit_fg_color(output, next_cell.fg());
                state.fg = Some(next_cell.fg());
                result.color_changes += 1;
            }

            if state.bg != Some(next_cell.bg()) {
                emit_bg_color(output, next_cell.bg());
                state.bg = Some(next_cell.bg());
                result.color_changes += 1;
            }

            if state.attributes != Some(next_attrs) {
                let added = next_attrs.difference(state.attributes.unwrap_or(Attributes::empty()));
                emit_attribute_set(output, added);
                state.attributes = Some(next_attrs);
            }

            emit_char(output, next_cell);

            state.cursor_x = x.saturating_add(u16::from(next_cell.display_width().max(1)));
        }
    }

    result
}

/// Generate a full redraw sequence (no diffing).
///
/// Used for the first frame and whenever the terminal state is unknown.
pub fn render_full(buffer: &Buffer, output: &mut Vec<u8>) {
    output.extend_from_slice(b"\x1b[H");

    let mut last_fg: Option<Color> = None;
    let mut last_bg: Option<Color> = None;
    let mut last_attrs: Option<Attributes> = None;

    for (y, row) in buffer.rows().enumerate() {
        if y > 0 {
            output.extend_from_slice(b"\r\n");
        }

        for cell in row {
            if cell.is_wide_continuation() {
                continue;
            }

            let attrs = cell.attributes().resolved();
            if last_attrs != Some(attrs) {
                // Reset, then re-apply both colors below.
                output.extend_from_slice(b"\x1b[0m");
                emit_attribute_set(output, attrs);
                last_attrs = Some(attrs);
                last_fg = None;
                last_bg = None;
            }
            if last_fg != Some(cell.fg()) {
                emit_fg_color(output, cell.fg());
                last_fg = Some(cell.fg());
            }
            if last_bg != Some(cell.bg()) {
                emit_bg_color(output, cell.bg());
                last_bg = Some(cell.bg());
            }

            emit_char(output, cell);
        }
    }

    output.extend_from_slice(b"\x1b[0m");
}

/// Emit a cursor move sequence (ANSI positions are 1-indexed).
#[inline]
fn emit_cursor_move(output: &mut Vec<u8>, x: u16, y: u16) {
    let row = y + 1;
    let col = x + 1;

    if row == 1 && col == 1 {
        output.extend_from_slice(b"\x1b[H");
    } else if col == 1 {
        let _ = write!(output, "\x1b[{row}H");
    } else {
        let _ = write!(output, "\x1b[{row};{col}H");
    }
}

#[inline]
fn emit_fg_color(output: &mut Vec<u8>, color: Color) {
    let _ = match color {
        Color::Default => write!(output, "\x1b[39m"),
        Color::Rgb(rgb) => write!(output, "\x1b[38;2;{};{};{}m", rgb.r, rgb.g, rgb.b),
        named => write!(output, "\x1b[{}m", 30 + named.palette_index().unwrap_or(7)),
    };
}

#[inline]
fn emit_bg_color(output: &mut Vec<u8>, color: Color) {
    let _ = match color {
        Color::Default => write!(output, "\x1b[49m"),
        Color::Rgb(rgb) => write!(output, "\x1b[48;2;{};{};{}m", rgb.r, rgb.g, rgb.b),
        named => write!(output, "\x1b[{}m", 40 + named.palette_index().unwrap_or(0)),
    };
}

/// Emit SGR sequences for a set of (already resolved) attributes.
fn emit_attribute_set(output: &mut Vec<u8>, attributes: Attributes) {
    const CODES: [(Attributes, &[u8]); 7] = [
        (Attributes::BOLD, b"\x1b[1m"),
        (Attributes::DIM, b"\x1b[2m"),
        (Attributes::ITALIC, b"\x1b[3m"),
        (Attributes::UNDERLINE, b"\x1b[4m"),
        (Attributes::BLINK, b"\x1b[5m"),
        (Attributes::REVERSE, b"\x1b[7m"),
        (Attributes::HIDDEN, b"\x1b[8m"),
    ];
    for (flag, code) in CODES {
        if attributes.contains(flag) {
            output.extend_from_slice(code);
        }
    }
}

#[inline]
fn emit_char(output: &mut Vec<u8>, cell: &Cell) {
    let mut utf8 = [0u8; 4];
    output.extend_from_slice(cell.ch().encode_utf8(&mut utf8).as_bytes());
}
