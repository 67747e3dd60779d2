//! Bottom status bar: last action result on the left, key help on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(inner);

        let status_line = Line::from(vec![
            Span::styled(self.model.message.as_str(), Style::default().fg(color)),
            Span::raw(format!(" | max {}", self.model.max_len)),
        ]);
        Paragraph::new(status_line).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        let help_line = Line::from(vec![
            Span::styled("[↑/↓]", key),
            Span::raw("pick "),
            Span::styled("[Enter]", key),
            Span::raw("show "),
            Span::styled("[Ctrl-L]", key),
            Span::raw("clear "),
            Span::styled("[Esc]", key),
            Span::raw("quit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
