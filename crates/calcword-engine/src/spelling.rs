//! Letter and digit tables for calculator spelling.

use calcword_types::{Error, Result};

/// Letter a digit resembles once the display is turned over
const UPSIDE_DOWN_LETTERS: [char; 10] = ['O', 'I', 'Z', 'E', 'h', 'S', 'g', 'L', 'B', 'G'];

/// Digit typed in place of a letter (case-insensitive).
///
/// `G` maps to 9 only: an inverted 9 reads as a capital G.
pub fn letter_to_digit(c: char) -> Option<char> {
    match c.to_ascii_uppercase() {
        'O' => Some('0'),
        'I' => Some('1'),
        'Z' => Some('2'),
        'E' => Some('3'),
        'H' => Some('4'),
        'S' => Some('5'),
        'L' => Some('7'),
        'B' => Some('8'),
        'G' => Some('9'),
        _ => None,
    }
}

/// Letter seen for `digit` on an inverted display
pub fn digit_to_letter(digit: char) -> Option<char> {
    match digit {
        '0'..='9' => Some(UPSIDE_DOWN_LETTERS[(digit as u8 - b'0') as usize]),
        _ => None,
    }
}

/// What the display spells when turned over: reversed, separators and blanks dropped.
pub fn read_upside_down(value: &str) -> String {
    value.chars().rev().filter_map(digit_to_letter).collect()
}

/// Digits that spell `word` on an inverted display.
///
/// Whitespace is ignored; any other letter without a digit is an error.
pub fn encode_word(word: &str) -> Result<String> {
    let digits = word
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            letter_to_digit(c).ok_or_else(|| Error::Unspellable {
                word: word.to_string(),
                letter: c,
            })
        })
        .collect::<Result<Vec<char>>>()?;

    Ok(digits.into_iter().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_upside_down() {
        assert_eq!(read_upside_down("07734"), "hELLO");
        assert_eq!(read_upside_down("5318008"), "BOOBIES");
        assert_eq!(read_upside_down("0.208"), "BOZO");
        assert_eq!(read_upside_down(""), "");
    }

    #[test]
    fn test_encode_word() {
        assert_eq!(encode_word("hello").unwrap(), "07734");
        assert_eq!(encode_word("SHELL").unwrap(), "77345");
        assert_eq!(encode_word("Hill Billies").unwrap(), "53177187714");
    }

    #[test]
    fn test_encode_rejects_unmapped_letter() {
        let err = encode_word("hex").unwrap_err();
        assert_eq!(
            err,
            Error::Unspellable {
                word: "hex".to_string(),
                letter: 'x'
            }
        );
    }

    #[test]
    fn test_digit_letter_tables_agree() {
        for digit in ['0', '1', '2', '3', '4', '5', '7', '8', '9'] {
            let letter = digit_to_letter(digit).unwrap();
            assert_eq!(letter_to_digit(letter), Some(digit), "digit {}", digit);
        }
        // 6 reads as a lowercase g, which types as 9
        assert_eq!(digit_to_letter('6'), Some('g'));
    }
}
