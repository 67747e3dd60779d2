use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Which way up the display is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Normal,
    UpsideDown,
}

impl Orientation {
    pub fn is_upside_down(self) -> bool {
        matches!(self, Orientation::UpsideDown)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Normal => write!(f, "normal"),
            Orientation::UpsideDown => write!(f, "upside-down"),
        }
    }
}

/// Number of integer cells on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct DisplayWidth(usize);

impl DisplayWidth {
    /// Eleven cells, as on the classic pocket calculator
    pub const DEFAULT: DisplayWidth = DisplayWidth(11);
    pub const MAX: usize = 64;

    pub fn new(cells: usize) -> Result<Self> {
        if cells == 0 || cells > Self::MAX {
            return Err(Error::InvalidWidth(cells));
        }
        Ok(Self(cells))
    }

    pub fn cells(self) -> usize {
        self.0
    }

    /// Longest stored value: every cell filled plus one decimal separator
    pub fn max_input_len(self) -> usize {
        self.0 + 1
    }
}

impl Default for DisplayWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for DisplayWidth {
    type Error = Error;

    fn try_from(cells: usize) -> Result<Self> {
        Self::new(cells)
    }
}

impl From<DisplayWidth> for usize {
    fn from(width: DisplayWidth) -> Self {
        width.0
    }
}

impl fmt::Display for DisplayWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Character shown in a single display cell: `0`-`9` or blank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Digit(char);

impl Digit {
    pub const BLANK: Digit = Digit(' ');

    /// Normalise any character to a displayable digit; unsupported characters become blank.
    pub fn new(c: char) -> Self {
        if c.is_ascii_digit() { Self(c) } else { Self::BLANK }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_blank(self) -> bool {
        self.0 == ' '
    }

    /// Numeric value, `None` for blank
    pub fn value(self) -> Option<u8> {
        self.0.to_digit(10).map(|d| d as u8)
    }
}

impl Default for Digit {
    fn default() -> Self {
        Self::BLANK
    }
}

impl From<char> for Digit {
    fn from(c: char) -> Self {
        Self::new(c)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The value split into what is drawn left and right of the decimal dot.
///
/// `int_part` is already left-padded with blanks to the display width;
/// `frac_part` is `None` when nothing follows the separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayValue {
    pub int_part: String,
    pub frac_part: Option<String>,
}

impl DisplayValue {
    pub fn has_fraction(&self) -> bool {
        self.frac_part.is_some()
    }
}

/// One drawable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderCell {
    pub digit: Digit,
    pub has_decimal_dot: bool,
}

impl RenderCell {
    pub fn new(digit: Digit, has_decimal_dot: bool) -> Self {
        Self {
            digit,
            has_decimal_dot,
        }
    }

    pub fn blank() -> Self {
        Self::new(Digit::BLANK, false)
    }
}

/// Ordered cells ready for drawing, left to right as they appear on screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRequest {
    pub orientation: Orientation,
    pub cells: Vec<RenderCell>,
}

impl RenderRequest {
    pub fn new(orientation: Orientation, cells: Vec<RenderCell>) -> Self {
        Self { orientation, cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderCell> {
        self.cells.iter()
    }

    /// Index of the cell carrying the decimal dot, if any
    pub fn decimal_index(&self) -> Option<usize> {
        self.cells.iter().position(|cell| cell.has_decimal_dot)
    }

    /// Cell characters without the decimal dot, blanks included
    pub fn digits(&self) -> String {
        self.cells.iter().map(|cell| cell.digit.as_char()).collect()
    }

    /// True when no cell shows anything
    pub fn is_blank(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.digit.is_blank() && !cell.has_decimal_dot)
    }
}

impl<'a> IntoIterator for &'a RenderRequest {
    type Item = &'a RenderCell;
    type IntoIter = std::slice::Iter<'a, RenderCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Text form with the dot written after its cell, e.g. `"          0.208"`
impl fmt::Display for RenderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.digit)?;
            if cell.has_decimal_dot {
                write!(f, ".")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_normalises_unsupported_characters() {
        assert_eq!(Digit::new('7').as_char(), '7');
        assert_eq!(Digit::new('x'), Digit::BLANK);
        assert_eq!(Digit::new('.'), Digit::BLANK);
        assert_eq!(Digit::new('٣'), Digit::BLANK);
        assert_eq!(Digit::new('9').value(), Some(9));
        assert_eq!(Digit::BLANK.value(), None);
    }

    #[test]
    fn test_display_width_bounds() {
        assert_eq!(DisplayWidth::default().cells(), 11);
        assert_eq!(DisplayWidth::default().max_input_len(), 12);
        assert_eq!(DisplayWidth::new(0), Err(Error::InvalidWidth(0)));
        assert!(DisplayWidth::new(DisplayWidth::MAX + 1).is_err());
    }

    #[test]
    fn test_render_request_text_form() {
        let request = RenderRequest::new(
            Orientation::Normal,
            vec![
                RenderCell::blank(),
                RenderCell::new(Digit::new('0'), true),
                RenderCell::new(Digit::new('2'), false),
            ],
        );

        assert_eq!(request.to_string(), " 0.2");
        assert_eq!(request.digits(), " 02");
        assert_eq!(request.decimal_index(), Some(1));
        assert!(!request.is_blank());
    }
}
