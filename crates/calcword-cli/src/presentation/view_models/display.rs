use calcword_types::{InputMode, Orientation, SegmentPattern};
use serde::Serialize;

/// Everything shown for one calculator value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayViewModel {
    pub value: String,
    pub typed: String,
    pub mode: InputMode,
    pub width: usize,
    pub panels: Vec<DisplayPanelViewModel>,
    /// Word seen when the display is turned over
    pub reading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPanelViewModel {
    pub orientation: Orientation,
    /// Cell characters with the dot written after its cell
    pub text: String,
    pub cells: Vec<CellViewModel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellViewModel {
    pub digit: char,
    /// Segment states in order: top, top-right, bottom-right, bottom, bottom-left, top-left, middle
    pub segments: SegmentPattern,
    pub decimal_dot: bool,
}
