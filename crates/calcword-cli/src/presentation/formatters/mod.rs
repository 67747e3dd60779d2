// Low-level drawing helpers shared by console views, SVG output and TUI widgets

pub mod glyph;
pub mod svg;

pub use glyph::{CellGrid, Stroke, panel_lines, rasterize};
