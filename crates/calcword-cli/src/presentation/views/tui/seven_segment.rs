//! One calculator display drawn with box characters, lit segments white on black.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::glyph::{self, Stroke};
use crate::presentation::view_models::DisplayPanelViewModel;
use crate::presentation::views::display::panel_title;

pub struct SevenSegmentView<'a> {
    panel: &'a DisplayPanelViewModel,
    caption: Option<&'a str>,
}

impl<'a> SevenSegmentView<'a> {
    pub fn new(panel: &'a DisplayPanelViewModel) -> Self {
        Self {
            panel,
            caption: None,
        }
    }

    /// Extra text appended to the title
    pub fn caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let lit = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let unlit = Style::default().fg(Color::DarkGray);

        let grids: Vec<glyph::CellGrid> = self
            .panel
            .cells
            .iter()
            .map(|cell| glyph::rasterize(cell, self.panel.orientation))
            .collect();

        (0..glyph::ROWS)
            .map(|row| {
                let spans: Vec<Span<'static>> = grids
                    .iter()
                    .flat_map(|grid| grid[row])
                    .map(|stroke| match stroke {
                        Stroke::Lit(c) => Span::styled(c.to_string(), lit),
                        Stroke::Unlit(c) => Span::styled(c.to_string(), unlit),
                        Stroke::Empty => Span::raw(" "),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl<'a> Widget for SevenSegmentView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.caption {
            Some(caption) => format!(" {} · {} ", panel_title(self.panel.orientation), caption),
            None => format!(" {} ", panel_title(self.panel.orientation)),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_panel;
    use calcword_types::Orientation;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn columns(buf: &Buffer, y: u16, xs: std::ops::Range<u16>) -> String {
        xs.map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_renders_digit_inside_border() {
        let panel = present_panel(&calcword_engine::format_value("8", Orientation::Normal));
        let area = Rect::new(0, 0, 48, 5);
        let mut buf = Buffer::empty(area);

        SevenSegmentView::new(&panel).render(area, &mut buf);

        // 10 blank cells of 4 columns, then the 8
        assert_eq!(columns(&buf, 1, 41..45), " _  ");
        assert_eq!(columns(&buf, 2, 41..45), "|_| ");
        assert_eq!(columns(&buf, 3, 41..45), "|_| ");
        assert_eq!(buf[(42, 1)].fg, Color::White);
    }

    #[test]
    fn test_unlit_segments_are_dark() {
        let panel = present_panel(&calcword_engine::format_value("1", Orientation::Normal));
        let area = Rect::new(0, 0, 48, 5);
        let mut buf = Buffer::empty(area);

        SevenSegmentView::new(&panel).render(area, &mut buf);

        assert_eq!(buf[(42, 1)].symbol(), "_");
        assert_eq!(buf[(42, 1)].fg, Color::DarkGray);
        assert_eq!(buf[(43, 2)].symbol(), "|");
        assert_eq!(buf[(43, 2)].fg, Color::White);
    }

    #[test]
    fn test_title_carries_caption() {
        let panel = present_panel(&calcword_engine::format_value("07734", Orientation::UpsideDown));
        let area = Rect::new(0, 0, 48, 5);
        let mut buf = Buffer::empty(area);

        SevenSegmentView::new(&panel)
            .caption("hELLO")
            .render(area, &mut buf);

        assert!(row(&buf, 0).contains("Upside down · hELLO"));
    }
}
