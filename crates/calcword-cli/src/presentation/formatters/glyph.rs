//! Seven-segment cells rasterised into a 3x4 character grid.
//!
//! ```text
//!  _      _
//! |_|    |_|
//! |_|.  '|_|
//! normal  upside-down
//! ```
//!
//! Upside-down cells draw the 180 degree rotation of the digit's pattern and
//! move the decimal dot to the top-left corner, where a turned-over display shows it.

use calcword_types::{Orientation, Segment, SegmentPattern};
use owo_colors::OwoColorize;

use crate::presentation::view_models::{CellViewModel, DisplayPanelViewModel};

pub const ROWS: usize = 3;
pub const COLS: usize = 4;

/// One character position of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Empty,
    Lit(char),
    Unlit(char),
}

impl Stroke {
    fn segment(pattern: SegmentPattern, segment: Segment) -> Self {
        let c = match segment {
            Segment::Top | Segment::Middle | Segment::Bottom => '_',
            _ => '|',
        };
        if pattern.is_lit(segment) {
            Stroke::Lit(c)
        } else {
            Stroke::Unlit(c)
        }
    }

    fn dot(lit: bool, c: char) -> Self {
        if lit { Stroke::Lit(c) } else { Stroke::Empty }
    }

    /// Character when unlit segments are not drawn
    pub fn plain(self) -> char {
        match self {
            Stroke::Lit(c) => c,
            Stroke::Empty | Stroke::Unlit(_) => ' ',
        }
    }
}

pub type CellGrid = [[Stroke; COLS]; ROWS];

pub fn rasterize(cell: &CellViewModel, orientation: Orientation) -> CellGrid {
    let empty = Stroke::Empty;
    match orientation {
        Orientation::Normal => {
            let p = cell.segments;
            let seg = |s| Stroke::segment(p, s);
            [
                [empty, seg(Segment::Top), empty, empty],
                [
                    seg(Segment::TopLeft),
                    seg(Segment::Middle),
                    seg(Segment::TopRight),
                    empty,
                ],
                [
                    seg(Segment::BottomLeft),
                    seg(Segment::Bottom),
                    seg(Segment::BottomRight),
                    Stroke::dot(cell.decimal_dot, '.'),
                ],
            ]
        }
        Orientation::UpsideDown => {
            let p = cell.segments.rotated();
            let seg = |s| Stroke::segment(p, s);
            [
                [Stroke::dot(cell.decimal_dot, '\''), empty, seg(Segment::Top), empty],
                [
                    empty,
                    seg(Segment::TopLeft),
                    seg(Segment::Middle),
                    seg(Segment::TopRight),
                ],
                [
                    empty,
                    seg(Segment::BottomLeft),
                    seg(Segment::Bottom),
                    seg(Segment::BottomRight),
                ],
            ]
        }
    }
}

/// Three text lines for a whole display.
///
/// Without color, unlit segments are blank and trailing spaces are trimmed.
/// With color, lit segments are bold and unlit ones are drawn dark grey.
pub fn panel_lines(panel: &DisplayPanelViewModel, color: bool) -> [String; ROWS] {
    let grids: Vec<CellGrid> = panel
        .cells
        .iter()
        .map(|cell| rasterize(cell, panel.orientation))
        .collect();

    std::array::from_fn(|row| {
        let mut line = String::new();
        for grid in &grids {
            for stroke in grid[row] {
                match (stroke, color) {
                    (Stroke::Lit(c), true) => line.push_str(&c.bold().to_string()),
                    (Stroke::Unlit(c), true) => line.push_str(&c.bright_black().to_string()),
                    (stroke, _) => line.push(stroke.plain()),
                }
            }
        }
        if color {
            line
        } else {
            line.trim_end().to_string()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcword_engine::SegmentMap;

    fn cell(digit: char, decimal_dot: bool) -> CellViewModel {
        CellViewModel {
            digit,
            segments: SegmentMap::pattern(digit),
            decimal_dot,
        }
    }

    fn plain_rows(grid: CellGrid) -> Vec<String> {
        grid.iter()
            .map(|row| row.iter().map(|s| s.plain()).collect())
            .collect()
    }

    #[test]
    fn test_eight_with_dot() {
        let rows = plain_rows(rasterize(&cell('8', true), Orientation::Normal));
        assert_eq!(rows, vec![" _  ", "|_| ", "|_|."]);
    }

    #[test]
    fn test_one() {
        let rows = plain_rows(rasterize(&cell('1', false), Orientation::Normal));
        assert_eq!(rows, vec!["    ", "  | ", "  | "]);
    }

    #[test]
    fn test_blank_cell_is_empty() {
        let rows = plain_rows(rasterize(&cell(' ', false), Orientation::Normal));
        assert!(rows.iter().all(|row| row.trim().is_empty()));
    }

    #[test]
    fn test_upside_down_seven_reads_as_l() {
        let rows = plain_rows(rasterize(&cell('7', false), Orientation::UpsideDown));
        assert_eq!(rows, vec!["    ", " |  ", " |_ "]);
    }

    #[test]
    fn test_upside_down_dot_moves_to_top_left() {
        let rows = plain_rows(rasterize(&cell('0', true), Orientation::UpsideDown));
        assert_eq!(rows, vec!["' _ ", " | |", " |_|"]);
    }

    #[test]
    fn test_unlit_segments_are_kept_in_grid() {
        let grid = rasterize(&cell('1', false), Orientation::Normal);
        assert_eq!(grid[0][1], Stroke::Unlit('_'));
        assert_eq!(grid[1][2], Stroke::Lit('|'));
    }
}
