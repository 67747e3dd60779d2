// Engine module - Pure display logic (segment lookup, formatting, input policy)
// This layer sits between the display types and the CLI presentation

pub mod calculator;
pub mod catalog;
pub mod formatter;
pub mod input_policy;
pub mod segment_map;
pub mod spelling;

pub use calculator::{Calculator, DisplayPair};
pub use catalog::{Catalog, RESOURCES};
pub use formatter::DisplayFormatter;
pub use input_policy::{EditOutcome, InputPolicy, RejectReason};
pub use segment_map::{SegmentMap, SegmentPath, DECIMAL_DOT, VIEW_BOX};

use calcword_types::{Orientation, RenderRequest};

// Façade API - Stable public interface for the CLI layer

/// Format a value for the default 11-cell display
pub fn format_value(value: &str, orientation: Orientation) -> RenderRequest {
    DisplayFormatter::default().format(value, orientation)
}

/// Word seen when the display shows `value` and is turned over
pub fn read_upside_down(value: &str) -> String {
    spelling::read_upside_down(value)
}

/// Number to type so that the display reads `word` upside down
pub fn encode_word(word: &str) -> calcword_types::Result<String> {
    spelling::encode_word(word)
}
