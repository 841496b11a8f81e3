//! Cell: one character on the screen together with its colors and attributes.

use bitflags::bitflags;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

/// A terminal color.
///
/// The eight named colors map onto the terminal's own palette (SGR 30-37 /
/// 40-47), so they follow whatever theme the user runs. `Default` leaves the
/// terminal's default foreground or background in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's default color.
    #[default]
    Default,
    /// Palette color 0.
    Black,
    /// Palette color 1.
    Red,
    /// Palette color 2.
    Green,
    /// Palette color 3.
    Yellow,
    /// Palette color 4.
    Blue,
    /// Palette color 5.
    Magenta,
    /// Palette color 6.
    Cyan,
    /// Palette color 7.
    White,
    /// A 24-bit color.
    Rgb(Rgb),
}

impl Color {
    /// Palette index for the named colors, `None` for `Default` and `Rgb`.
    pub const fn palette_index(self) -> Option<u8> {
        match self {
            Self::Black => Some(0),
            Self::Red => Some(1),
            Self::Green => Some(2),
            Self::Yellow => Some(3),
            Self::Blue => Some(4),
            Self::Magenta => Some(5),
            Self::Cyan => Some(6),
            Self::White => Some(7),
            Self::Default | Self::Rgb(_) => None,
        }
    }
}

impl From<Rgb> for Color {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

bitflags! {
    /// Text style attributes.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use termpoints::Attributes;
    /// let style = Attributes::BOLD | Attributes::UNDERLINE;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Blinking text
        const BLINK = 0b0001_0000;
        /// Reversed colors (fg/bg swapped)
        const REVERSE = 0b0010_0000;
        /// Hidden/invisible text
        const HIDDEN = 0b0100_0000;
        /// Highlighted text, drawn as bold + reverse
        const STANDOUT = 0b1000_0000;
    }
}

impl Attributes {
    /// Expand `STANDOUT` into the attributes a terminal actually understands.
    #[must_use]
    pub const fn resolved(self) -> Self {
        if self.contains(Self::STANDOUT) {
            self.difference(Self::STANDOUT).union(Self::BOLD).union(Self::REVERSE)
        } else {
            self
        }
    }
}

impl std::fmt::Debug for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single terminal cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    ch: char,
    /// Display width of `ch` (0=continuation, 1=normal, 2=wide CJK).
    display_width: u8,
    fg: Color,
    bg: Color,
    attributes: Attributes,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space character with default colors).
    pub const EMPTY: Self = Self {
        ch: ' ',
        display_width: 1,
        fg: Color::Default,
        bg: Color::Default,
        attributes: Attributes::empty(),
    };

    /// Drawn in place of a character that occupies no column on its own.
    pub const REPLACEMENT: char = '\u{FFFD}';

    /// Create a cell from any character.
    ///
    /// Control characters become a space and other zero-width characters
    /// (combining marks, joiners) become [`Cell::REPLACEMENT`], so every
    /// cell written to the terminal advances the cursor by its width.
    #[inline]
    pub fn new(ch: char) -> Self {
        let (ch, width) = match unicode_width::UnicodeWidthChar::width(ch) {
            _ if ch.is_control() => (' ', 1),
            None | Some(0) => (Self::REPLACEMENT, 1),
            Some(width) => (ch, width),
        };
        Self {
            ch,
            display_width: u8::try_from(width).unwrap_or(1),
            ..Self::EMPTY
        }
    }

    /// Create a wide-character continuation cell.
    ///
    /// This is placed after a wide CJK character that takes 2 columns.
    #[inline]
    pub const fn wide_continuation() -> Self {
        Self {
            ch: '\0',
            display_width: 0,
            ..Self::EMPTY
        }
    }

    /// The character in this cell.
    #[inline]
    pub const fn ch(&self) -> char {
        self.ch
    }

    /// Check if this is a wide-character continuation.
    #[inline]
    pub const fn is_wide_continuation(&self) -> bool {
        self.display_width == 0 && self.ch == '\0'
    }

    /// Get the display width (0, 1, or 2).
    #[inline]
    pub const fn display_width(&self) -> u8 {
        self.display_width
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Color {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Color {
        self.bg
    }

    /// Get the attributes.
    #[inline]
    pub const fn attributes(&self) -> Attributes {
        self.attributes
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Set the attributes (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Reset the cell to empty (space with default colors).
    #[inline]
    pub const fn reset(&mut self) {
        *self = Self::EMPTY;
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("ch", &self.ch)
            .field("width", &self.display_width)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("attributes", &self.attributes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        let rgb: Rgb = 0xFF8000.into();
        assert_eq!(rgb, Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_cell_new_ascii() {
        let cell = Cell::new('A');
        assert_eq!(cell.ch(), 'A');
        assert_eq!(cell.display_width(), 1);
    }

    #[test]
    fn test_cell_box_drawing_is_narrow() {
        assert_eq!(Cell::new('│').display_width(), 1);
        assert_eq!(Cell::new('┌').display_width(), 1);
    }

    #[test]
    fn test_cell_cjk_is_wide() {
        assert_eq!(Cell::new('日').display_width(), 2);
    }

    #[test]
    fn test_cell_control_chars_become_spaces() {
        for ch in ['\r', '\t', '\x1b', '\0', '\u{7f}'] {
            let cell = Cell::new(ch);
            assert_eq!(cell.ch(), ' ', "{ch:?}");
            assert_eq!(cell.display_width(), 1);
        }
        assert!(!Cell::new('\0').is_wide_continuation());
    }

    #[test]
    fn test_cell_zero_width_is_replaced() {
        for ch in ['\u{301}', '\u{200d}'] {
            let cell = Cell::new(ch);
            assert_eq!(cell.ch(), Cell::REPLACEMENT);
            assert_eq!(cell.display_width(), 1);
        }
    }

    #[test]
    fn test_cell_builder_pattern() {
        let cell = Cell::new('X')
            .with_fg(Color::Red)
            .with_bg(Color::Rgb(Rgb::new(0, 0, 255)))
            .with_attributes(Attributes::BOLD | Attributes::UNDERLINE);

        assert_eq!(cell.fg(), Color::Red);
        assert_eq!(cell.bg(), Color::Rgb(Rgb::new(0, 0, 255)));
        assert!(cell.attributes().contains(Attributes::BOLD));
        assert!(cell.attributes().contains(Attributes::UNDERLINE));
    }

    #[test]
    fn test_standout_resolves_to_bold_reverse() {
        let resolved = (Attributes::STANDOUT | Attributes::UNDERLINE).resolved();
        assert_eq!(resolved, Attributes::BOLD | Attributes::REVERSE | Attributes::UNDERLINE);
    }

    #[test]
    fn test_palette_index() {
        assert_eq!(Color::Black.palette_index(), Some(0));
        assert_eq!(Color::White.palette_index(), Some(7));
        assert_eq!(Color::Default.palette_index(), None);
    }

    #[test]
    fn test_cell_reset() {
        let mut cell = Cell::new('X').with_fg(Color::Red);
        cell.reset();
        assert_eq!(cell, Cell::EMPTY);
    }

    #[test]
    fn test_wide_continuation() {
        let cont = Cell::wide_continuation();
        assert!(cont.is_wide_continuation());
        assert!(!Cell::EMPTY.is_wide_continuation());
    }
}
