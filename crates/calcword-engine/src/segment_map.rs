//! Character to segment lookup and the fixed drawing geometry of a cell.

use calcword_types::{Digit, Segment, SegmentPattern};
use serde::Serialize;

/// Patterns for `0`-`9` in segment order
/// (top, top-right, bottom-right, bottom, bottom-left, top-left, middle).
const DIGIT_PATTERNS: [SegmentPattern; 10] = [
    SegmentPattern::from_flags([true, true, true, true, true, true, false]), // 0
    SegmentPattern::from_flags([false, true, true, false, false, false, false]), // 1
    SegmentPattern::from_flags([true, true, false, true, true, false, true]), // 2
    SegmentPattern::from_flags([true, true, true, true, false, false, true]), // 3
    SegmentPattern::from_flags([false, true, true, false, false, true, true]), // 4
    SegmentPattern::from_flags([true, false, true, true, false, true, true]), // 5
    SegmentPattern::from_flags([true, false, true, true, true, true, true]), // 6
    SegmentPattern::from_flags([true, true, true, false, false, false, false]), // 7
    SegmentPattern::from_flags([true, true, true, true, true, true, true]), // 8
    SegmentPattern::from_flags([true, true, true, false, false, true, true]), // 9
];

/// Cell drawing area, width x height
pub const VIEW_BOX: (i32, i32) = (52, 64);

/// Decimal dot: centre and radius, right of the bottom-right segment
pub const DECIMAL_DOT: Dot = Dot {
    cx: 46,
    cy: 48,
    r: 4,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dot {
    pub cx: i32,
    pub cy: i32,
    pub r: i32,
}

/// A single straight stroke; every segment is horizontal or vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SegmentPath {
    pub segment: Segment,
    pub from: (i32, i32),
    pub to: (i32, i32),
}

impl SegmentPath {
    const fn new(segment: Segment, from: (i32, i32), to: (i32, i32)) -> Self {
        Self { segment, from, to }
    }

    pub fn is_horizontal(&self) -> bool {
        self.from.1 == self.to.1
    }

    /// SVG path data, e.g. `M4,4 H36`
    pub fn to_svg(&self) -> String {
        let (x, y) = self.from;
        if self.is_horizontal() {
            format!("M{},{} H{}", x, y, self.to.0)
        } else {
            format!("M{},{} V{}", x, y, self.to.1)
        }
    }
}

const GEOMETRY: [SegmentPath; Segment::COUNT] = [
    SegmentPath::new(Segment::Top, (4, 4), (36, 4)),
    SegmentPath::new(Segment::TopRight, (38, 6), (38, 24)),
    SegmentPath::new(Segment::BottomRight, (38, 26), (38, 44)),
    SegmentPath::new(Segment::Bottom, (4, 46), (36, 46)),
    SegmentPath::new(Segment::BottomLeft, (2, 26), (2, 44)),
    SegmentPath::new(Segment::TopLeft, (2, 6), (2, 24)),
    SegmentPath::new(Segment::Middle, (4, 25), (36, 25)),
];

/// Lookup table from display characters to lit segments.
///
/// Anything outside `0`-`9` falls back to the blank pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentMap;

impl SegmentMap {
    pub fn pattern(c: char) -> SegmentPattern {
        match c {
            '0'..='9' => DIGIT_PATTERNS[(c as u8 - b'0') as usize],
            _ => SegmentPattern::BLANK,
        }
    }

    pub fn digit_pattern(digit: Digit) -> SegmentPattern {
        Self::pattern(digit.as_char())
    }

    /// Stroke for one segment; identical for every digit and orientation
    pub fn path(segment: Segment) -> SegmentPath {
        GEOMETRY[segment.index()]
    }

    pub fn geometry() -> &'static [SegmentPath; Segment::COUNT] {
        &GEOMETRY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(c: char) -> [u8; 7] {
        SegmentMap::pattern(c).to_flags().map(u8::from)
    }

    #[test]
    fn test_digit_patterns() {
        assert_eq!(flags('0'), [1, 1, 1, 1, 1, 1, 0]);
        assert_eq!(flags('1'), [0, 1, 1, 0, 0, 0, 0]);
        assert_eq!(flags('2'), [1, 1, 0, 1, 1, 0, 1]);
        assert_eq!(flags('3'), [1, 1, 1, 1, 0, 0, 1]);
        assert_eq!(flags('4'), [0, 1, 1, 0, 0, 1, 1]);
        assert_eq!(flags('5'), [1, 0, 1, 1, 0, 1, 1]);
        assert_eq!(flags('6'), [1, 0, 1, 1, 1, 1, 1]);
        assert_eq!(flags('7'), [1, 1, 1, 0, 0, 0, 0]);
        assert_eq!(flags('8'), [1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(flags('9'), [1, 1, 1, 0, 0, 1, 1]);
    }

    #[test]
    fn test_blank_fallback() {
        for c in [' ', '.', 'a', 'O', '-', '\n', '٣'] {
            assert_eq!(SegmentMap::pattern(c), SegmentPattern::BLANK, "char {:?}", c);
        }
    }

    #[test]
    fn test_digit_pattern_uses_normalised_digit() {
        assert_eq!(
            SegmentMap::digit_pattern(Digit::new('8')),
            SegmentPattern::FULL
        );
        assert!(SegmentMap::digit_pattern(Digit::new('z')).is_blank());
    }

    #[test]
    fn test_geometry_svg_paths() {
        let paths: Vec<String> = SegmentMap::geometry().iter().map(|p| p.to_svg()).collect();
        assert_eq!(
            paths,
            vec![
                "M4,4 H36",
                "M38,6 V24",
                "M38,26 V44",
                "M4,46 H36",
                "M2,26 V44",
                "M2,6 V24",
                "M4,25 H36",
            ]
        );
    }

    #[test]
    fn test_geometry_indexed_by_segment() {
        for segment in Segment::ALL {
            assert_eq!(SegmentMap::path(segment).segment, segment);
        }
    }
}
