//! Turns a raw value into the cells a display draws.
//!
//! Upside-down output is a plain character reversal of the value. Digits are
//! not renumbered (a `6` stays a `6`); renderers turn each glyph over when
//! drawing, which is what makes the inverted display read correctly.

use calcword_types::{Digit, DisplayValue, DisplayWidth, Orientation, RenderCell, RenderRequest};

const DECIMAL_SEPARATOR: char = '.';
const PAD: char = ' ';

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayFormatter {
    width: DisplayWidth,
}

impl DisplayFormatter {
    pub fn new(width: DisplayWidth) -> Self {
        Self { width }
    }

    pub fn width(&self) -> DisplayWidth {
        self.width
    }

    /// Split (and for upside-down, reverse) the value into padded parts.
    ///
    /// Only the first separator splits; an empty fractional part counts as absent.
    pub fn split(&self, value: &str, orientation: Orientation) -> DisplayValue {
        let processed: String = if orientation.is_upside_down() {
            value.chars().rev().collect()
        } else {
            value.to_string()
        };

        let (int_part, frac_part) = match processed.split_once(DECIMAL_SEPARATOR) {
            Some((int_part, frac)) if !frac.is_empty() => (int_part, Some(frac.to_string())),
            Some((int_part, _)) => (int_part, None),
            None => (processed.as_str(), None),
        };

        DisplayValue {
            int_part: pad_start(int_part, self.width.cells()),
            frac_part,
        }
    }

    pub fn format(&self, value: &str, orientation: Orientation) -> RenderRequest {
        let parts = self.split(value, orientation);

        let window: Vec<char> = match parts.frac_part {
            Some(_) => {
                let padded: Vec<char> = parts.int_part.chars().collect();
                let start = padded.len().saturating_sub(self.width.cells());
                padded[start..].to_vec()
            }
            None => parts.int_part.chars().collect(),
        };

        let dot_index = parts
            .frac_part
            .as_ref()
            .and_then(|_| window.len().checked_sub(1));

        let cells: Vec<RenderCell> = window
            .iter()
            .copied()
            .chain(parts.frac_part.iter().flat_map(|frac| frac.chars()))
            .enumerate()
            .map(|(index, c)| RenderCell::new(Digit::new(c), Some(index) == dot_index))
            .collect();

        tracing::trace!(
            value,
            %orientation,
            cells = cells.len(),
            "formatted display value"
        );

        RenderRequest::new(orientation, cells)
    }

    /// Both views of the same value, normal first
    pub fn format_both(&self, value: &str) -> (RenderRequest, RenderRequest) {
        (
            self.format(value, Orientation::Normal),
            self.format(value, Orientation::UpsideDown),
        )
    }
}

fn pad_start(s: &str, width: usize) -> String {
    let len = s.chars().count();
    let mut padded = String::with_capacity(width.max(len));
    padded.extend(std::iter::repeat_n(PAD, width.saturating_sub(len)));
    padded.push_str(s);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(value: &str) -> RenderRequest {
        DisplayFormatter::default().format(value, Orientation::Normal)
    }

    fn format_inverted(value: &str) -> RenderRequest {
        DisplayFormatter::default().format(value, Orientation::UpsideDown)
    }

    #[test]
    fn test_empty_value_is_blank_field() {
        let request = format("");
        assert_eq!(request.len(), 11);
        assert!(request.is_blank());
        assert_eq!(request.decimal_index(), None);
    }

    #[test]
    fn test_integer_is_right_aligned() {
        let request = format("07734");
        assert_eq!(request.digits(), "      07734");
        assert_eq!(request.decimal_index(), None);
    }

    #[test]
    fn test_fraction_places_dot_on_last_integer_cell() {
        let request = format("0.208");
        assert_eq!(request.len(), 14);
        assert_eq!(request.digits(), "          0208");
        assert_eq!(request.decimal_index(), Some(10));
        assert_eq!(request.to_string(), "          0.208");
    }

    #[test]
    fn test_leading_separator_dots_a_blank_cell() {
        let request = format(".5");
        assert_eq!(request.digits(), "           5");
        assert_eq!(request.decimal_index(), Some(10));
    }

    #[test]
    fn test_trailing_separator_shows_no_dot() {
        let request = format("12.");
        assert_eq!(request.digits(), "         12");
        assert_eq!(request.decimal_index(), None);
    }

    #[test]
    fn test_long_integer_without_fraction_is_not_truncated() {
        let request = format("123456789012");
        assert_eq!(request.len(), 12);
        assert_eq!(request.digits(), "123456789012");
    }

    #[test]
    fn test_window_keeps_last_width_cells_with_fraction() {
        let formatter = DisplayFormatter::new(DisplayWidth::new(4).unwrap());
        let request = formatter.format("123456.7", Orientation::Normal);
        assert_eq!(request.digits(), "34567");
        assert_eq!(request.decimal_index(), Some(3));
    }

    #[test]
    fn test_unsupported_characters_render_blank() {
        let request = format("1a2");
        assert_eq!(request.digits(), "        1 2");
    }

    #[test]
    fn test_upside_down_reverses_characters() {
        let request = format_inverted("07734");
        assert_eq!(request.digits(), "      43770");
        assert_eq!(request.orientation, Orientation::UpsideDown);
    }

    #[test]
    fn test_upside_down_splits_after_reversal() {
        // "0.208" reversed is "802.0"
        let request = format_inverted("0.208");
        assert_eq!(request.to_string(), "        802.0");
        assert_eq!(request.decimal_index(), Some(10));
    }

    #[test]
    fn test_upside_down_does_not_renumber_six_and_nine() {
        let request = format_inverted("69");
        assert_eq!(request.digits().trim_start(), "96");
    }

    #[test]
    fn test_reversal_property() {
        for value in ["", "7", "07734", "5318008", "53177187714", "1234567890"] {
            let normal: String = format(value).digits().chars().filter(|c| *c != ' ').collect();
            let inverted: String = format_inverted(value)
                .digits()
                .chars()
                .filter(|c| *c != ' ')
                .collect();
            let reversed: String = normal.chars().rev().collect();
            assert_eq!(inverted, reversed, "value {:?}", value);
        }
    }

    #[test]
    fn test_exactly_one_dot_when_fraction_present() {
        for value in ["0.208", "12345678901.5", "1.2345678901"] {
            let dots = format(value).iter().filter(|c| c.has_decimal_dot).count();
            assert_eq!(dots, 1, "value {:?}", value);
        }
    }

    #[test]
    fn test_split_parts() {
        let parts = DisplayFormatter::default().split("3.14", Orientation::Normal);
        assert_eq!(parts.int_part, "          3");
        assert_eq!(parts.frac_part.as_deref(), Some("14"));
    }
}
