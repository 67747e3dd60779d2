use serde::{Serialize, Serializer};
use std::fmt;

/// One of the seven segments of a display cell.
///
/// The declaration order is the canonical pattern order (conventionally A to G):
/// top, top-right, bottom-right, bottom, bottom-left, top-left, middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Top,
    TopRight,
    BottomRight,
    Bottom,
    BottomLeft,
    TopLeft,
    Middle,
}

impl Segment {
    pub const COUNT: usize = 7;

    pub const ALL: [Segment; Self::COUNT] = [
        Segment::Top,
        Segment::TopRight,
        Segment::BottomRight,
        Segment::Bottom,
        Segment::BottomLeft,
        Segment::TopLeft,
        Segment::Middle,
    ];

    /// Position of this segment in a pattern
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// The segment that occupies this one's place after a 180 degree turn
    pub const fn rotated(self) -> Segment {
        match self {
            Segment::Top => Segment::Bottom,
            Segment::TopRight => Segment::BottomLeft,
            Segment::BottomRight => Segment::TopLeft,
            Segment::Bottom => Segment::Top,
            Segment::BottomLeft => Segment::TopRight,
            Segment::TopLeft => Segment::BottomRight,
            Segment::Middle => Segment::Middle,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::Top => "top",
            Segment::TopRight => "top-right",
            Segment::BottomRight => "bottom-right",
            Segment::Bottom => "bottom",
            Segment::BottomLeft => "bottom-left",
            Segment::TopLeft => "top-left",
            Segment::Middle => "middle",
        };
        f.write_str(name)
    }
}

/// On/off state of the seven segments of one cell, stored as a 7-bit mask.
///
/// Bit `n` corresponds to `Segment::ALL[n]`. Serializes as an ordered array
/// of seven booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    pub const BLANK: SegmentPattern = SegmentPattern(0);
    pub const FULL: SegmentPattern = SegmentPattern(0b_0111_1111);

    /// Build a pattern from a raw mask; bits above the seventh are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::FULL.0)
    }

    /// Build a pattern from flags in segment order.
    pub const fn from_flags(flags: [bool; Segment::COUNT]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < Segment::COUNT {
            if flags[i] {
                bits |= 1 << i;
            }
            i += 1;
        }
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_lit(self, segment: Segment) -> bool {
        self.0 & segment.bit() != 0
    }

    pub const fn is_blank(self) -> bool {
        self.0 == 0
    }

    pub fn lit_count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn to_flags(self) -> [bool; Segment::COUNT] {
        Segment::ALL.map(|segment| self.is_lit(segment))
    }

    /// Segments in canonical order, paired with their state
    pub fn segments(self) -> impl Iterator<Item = (Segment, bool)> {
        Segment::ALL
            .into_iter()
            .map(move |segment| (segment, self.is_lit(segment)))
    }

    /// The pattern as seen after turning the cell 180 degrees
    pub fn rotated(self) -> Self {
        self.segments()
            .filter(|(_, lit)| *lit)
            .fold(Self::BLANK, |acc, (segment, _)| {
                Self(acc.0 | segment.rotated().bit())
            })
    }
}

impl Serialize for SegmentPattern {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_flags().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags_matches_bits() {
        let pattern = SegmentPattern::from_flags([true, true, true, true, true, true, false]);
        assert_eq!(pattern.bits(), 0b_0011_1111);
        assert!(pattern.is_lit(Segment::TopLeft));
        assert!(!pattern.is_lit(Segment::Middle));
    }

    #[test]
    fn test_from_bits_masks_high_bit() {
        assert_eq!(SegmentPattern::from_bits(0b_1111_1111), SegmentPattern::FULL);
    }

    #[test]
    fn test_rotation_swaps_opposite_segments() {
        let top_only = SegmentPattern::from_flags([true, false, false, false, false, false, false]);
        assert_eq!(
            top_only.rotated(),
            SegmentPattern::from_flags([false, false, false, true, false, false, false])
        );

        // Upper-right stroke turns into the lower-left stroke
        let right_upper =
            SegmentPattern::from_flags([false, true, false, false, false, false, false]);
        assert!(right_upper.rotated().is_lit(Segment::BottomLeft));
    }

    #[test]
    fn test_rotation_is_an_involution() {
        for bits in 0..=SegmentPattern::FULL.bits() {
            let pattern = SegmentPattern::from_bits(bits);
            assert_eq!(pattern.rotated().rotated(), pattern);
            assert_eq!(pattern.rotated().lit_count(), pattern.lit_count());
        }
    }

    #[test]
    fn test_serializes_as_flag_array() {
        let json = serde_json::to_string(&SegmentPattern::from_bits(0b_0000_0110)).unwrap();
        assert_eq!(json, "[false,true,true,false,false,false,false]");
    }
}
