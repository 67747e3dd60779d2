//! Standalone SVG document for one or more displays.
//!
//! Each cell is a 52x64 box holding a black plate, the seven segment strokes
//! and, when set, the decimal dot. Upside-down cells are turned 180 degrees
//! around the box centre. Displays are stacked vertically.

use std::fmt::Write;

use calcword_engine::{DECIMAL_DOT, SegmentMap, VIEW_BOX};
use calcword_types::Orientation;

use crate::presentation::view_models::{CellViewModel, DisplayPanelViewModel};

const PLATE_WIDTH: i32 = 50;
const PANEL_GAP: i32 = 8;
const STROKE_WIDTH: i32 = 4;
const LIT: &str = "white";
const UNLIT: &str = "#222";

pub fn document(panels: &[DisplayPanelViewModel]) -> String {
    let (cell_w, cell_h) = VIEW_BOX;
    let columns = panels.iter().map(|p| p.cells.len()).max().unwrap_or(0) as i32;
    let rows = panels.len() as i32;
    let width = columns * cell_w;
    let height = (rows * cell_h + (rows - 1).max(0) * PANEL_GAP).max(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    for (row, panel) in panels.iter().enumerate() {
        let y = row as i32 * (cell_h + PANEL_GAP);
        for (col, cell) in panel.cells.iter().enumerate() {
            write_cell(&mut out, cell, panel.orientation, col as i32 * cell_w, y);
        }
    }
    out.push_str("</svg>\n");
    out
}

fn write_cell(out: &mut String, cell: &CellViewModel, orientation: Orientation, x: i32, y: i32) {
    let (cell_w, cell_h) = VIEW_BOX;
    let rotation = if orientation.is_upside_down() {
        format!(" rotate(180 {} {})", cell_w / 2, cell_h / 2)
    } else {
        String::new()
    };

    let _ = writeln!(out, r#"  <g transform="translate({x},{y}){rotation}">"#);
    let _ = writeln!(
        out,
        r#"    <rect width="{PLATE_WIDTH}" height="{cell_h}" fill="black"/>"#
    );
    for path in SegmentMap::geometry() {
        let stroke = if cell.segments.is_lit(path.segment) {
            LIT
        } else {
            UNLIT
        };
        let _ = writeln!(
            out,
            r#"    <path d="{}" stroke="{stroke}" stroke-width="{STROKE_WIDTH}" stroke-linecap="round"/>"#,
            path.to_svg()
        );
    }
    if cell.decimal_dot {
        let _ = writeln!(
            out,
            r#"    <circle cx="{}" cy="{}" r="{}" fill="{LIT}"/>"#,
            DECIMAL_DOT.cx, DECIMAL_DOT.cy, DECIMAL_DOT.r
        );
    }
    out.push_str("  </g>\n");
}
