use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::ResourceEntry;

pub struct ResourcesView<'a> {
    resources: &'a [ResourceEntry],
}

impl<'a> ResourcesView<'a> {
    pub fn new(resources: &'a [ResourceEntry]) -> Self {
        Self { resources }
    }
}

impl<'a> Widget for ResourcesView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .resources
            .iter()
            .flat_map(|resource| {
                [
                    Line::from(resource.title.as_str()),
                    Line::from(Span::styled(
                        resource.url.as_str(),
                        Style::default().fg(Color::Cyan),
                    )),
                ]
            })
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().title(" Resources ").borders(Borders::ALL))
            .render(area, buf);
    }
}
