use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::DisplayViewModel;

/// Input field: typed text with a cursor, plus the digits it becomes in letters mode
pub struct InputFieldView<'a> {
    display: &'a DisplayViewModel,
}

impl<'a> InputFieldView<'a> {
    pub fn new(display: &'a DisplayViewModel) -> Self {
        Self { display }
    }
}

impl<'a> Widget for InputFieldView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                self.display.typed.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ];

        if self.display.mode.accepts_letters() && self.display.typed != self.display.value {
            spans.push(Span::raw("  → "));
            spans.push(Span::styled(
                self.display.value.as_str(),
                Style::default().fg(Color::Cyan),
            ));
        }

        let block = Block::default()
            .title(format!(" Input ({}) ", self.display.mode))
            .borders(Borders::ALL);

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
